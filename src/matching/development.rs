//! Development-path prioritization.
//!
//! Turns a job match's gap list into an ordered plan. Priority weighs the
//! gap size by how central the skill is to the role (tier multiplier) and
//! boosts AI-capability skills; behaviour gaps carry their gap size alone.

use serde::{Deserialize, Serialize};

use crate::framework::{CapabilityId, RoleSkillTier};
use crate::matching::gaps::{GapEntry, GapKind};
use crate::matching::score::JobMatch;

/// Multiplier for primary-tier skill gaps.
const PRIMARY_MULTIPLIER: f32 = 3.0;
/// Multiplier for secondary-tier skill gaps.
const SECONDARY_MULTIPLIER: f32 = 2.0;
/// Multiplier for broad and track-added skill gaps.
const BROAD_MULTIPLIER: f32 = 1.0;
/// Boost for skills in the AI capability.
const AI_BOOST: f32 = 1.5;

/// One prioritized development item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentItem {
    pub id: String,
    pub name: String,
    pub kind: GapKind,
    pub gap: usize,
    pub priority: f32,
}

/// Priority weight for one gap entry.
#[must_use]
pub fn gap_priority(entry: &GapEntry) -> f32 {
    let gap = entry.gap as f32;
    match entry.kind {
        GapKind::Behaviour => gap,
        GapKind::Skill => {
            let multiplier = match entry.tier {
                Some(RoleSkillTier::Primary) => PRIMARY_MULTIPLIER,
                Some(RoleSkillTier::Secondary) => SECONDARY_MULTIPLIER,
                Some(RoleSkillTier::Broad | RoleSkillTier::TrackAdded) | None => BROAD_MULTIPLIER,
            };
            let boost = if entry.capability == Some(CapabilityId::Ai) {
                AI_BOOST
            } else {
                1.0
            };
            gap * multiplier * boost
        }
    }
}

/// Order a match's gaps into a development path, highest priority first.
#[must_use]
pub fn development_path(job_match: &JobMatch) -> Vec<DevelopmentItem> {
    let mut items: Vec<DevelopmentItem> = job_match
        .gaps
        .iter()
        .map(|entry| DevelopmentItem {
            id: entry.id.clone(),
            name: entry.name.clone(),
            kind: entry.kind,
            gap: entry.gap,
            priority: gap_priority(entry),
        })
        .collect();

    items.sort_by(|a, b| {
        b.priority
            .partial_cmp(&a.priority)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    items
}
