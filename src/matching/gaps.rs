//! Gap scoring.
//!
//! A gap is the ordinal distance by which a self-assessed level falls short
//! of a requirement. Gap-to-score mapping is a fixed decay table, not a
//! formula; exceeding a requirement always scores 1.0, never a bonus.

use serde::{Deserialize, Serialize};

use crate::framework::{CapabilityId, RoleSkillTier};

/// Score contribution per gap size; gaps of 4 or more share the last bucket.
pub const GAP_DECAY: [f32; 5] = [1.0, 0.7, 0.4, 0.15, 0.05];

/// Score contribution for one requirement at the given gap.
#[must_use]
pub fn gap_score(gap: usize) -> f32 {
    GAP_DECAY[gap.min(GAP_DECAY.len() - 1)]
}

/// Which dimension a gap belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    Skill,
    Behaviour,
}

/// One shortfall against a role requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapEntry {
    pub id: String,
    pub name: String,
    pub kind: GapKind,
    /// Required scale index
    pub required_index: usize,
    /// Self-assessed scale index; `None` when the assessment has no entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,
    /// Ordinal shortfall; missing entries count from one below the floor
    pub gap: usize,
    /// Matrix tier for skill gaps; `None` for behaviours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<RoleSkillTier>,
    /// Capability for skill gaps; `None` for behaviours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<CapabilityId>,
}

/// Gap for a requirement the candidate has not assessed at all: one worse
/// than sitting on the scale floor.
#[must_use]
pub const fn missing_entry_gap(required_index: usize) -> usize {
    required_index + 1
}
