//! Skill matrix and behaviour profile derivation.
//!
//! ## Skill level algebra
//!
//! ```text
//! base     = grade base level for the skill's tier (broad if untiered)
//! modifier = track capability modifier (0 when trackless)
//! level    = clamp(base + modifier)
//! ```
//!
//! A positive modifier is capped at the grade's highest base index across
//! all three tiers — a track boost cannot push a skill above what the grade
//! itself expects anywhere. Negative modifiers are not capped; pushing a
//! skill below its tier base signals deliberate de-emphasis. A skill outside
//! every tier of the discipline is excluded entirely unless its capability
//! carries a strictly positive track modifier.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::derive::modifiers::{behaviour_modifier, skill_modifier};
use crate::framework::{
    CapabilityId, Discipline, Framework, Grade, Maturity, RoleSkillTier, Skill, SkillLevel, Track,
};

/// Who a derived role profile is for.
///
/// Agent-oriented derivations exclude skills flagged `is_human_only`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    Human,
    Agent,
}

/// One row of a derived skill matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatrixEntry {
    pub skill_id: String,
    pub name: String,
    pub capability: CapabilityId,
    pub tier: RoleSkillTier,
    pub level: SkillLevel,
    /// The skill's description text for the derived level
    pub description: String,
}

/// One row of a derived behaviour profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviourProfileEntry {
    pub behaviour_id: String,
    pub name: String,
    pub maturity: Maturity,
    /// The behaviour's description text for the derived maturity
    pub description: String,
}

/// Derive the level a role requires for one skill.
///
/// Returns `None` when the skill is not part of the role at all: untiered in
/// the discipline and without a strictly positive track modifier.
#[must_use]
pub fn derive_skill_level(
    discipline: &Discipline,
    grade: &Grade,
    track: Option<&Track>,
    skill: &Skill,
) -> Option<SkillLevel> {
    let tier = discipline.tier_of(&skill.id);
    let modifier = skill_modifier(skill, track);

    if tier.is_none() && modifier <= 0 {
        trace!(skill_id = %skill.id, "skill excluded from role");
        return None;
    }

    let base = tier.map_or(grade.base_skill_levels.broad, |t| {
        grade.base_skill_levels.for_tier(t)
    });
    let mut modified = base.index() as i64 + i64::from(modifier);

    if modifier > 0 {
        modified = modified.min(grade.base_skill_levels.max_index() as i64);
    }

    Some(SkillLevel::clamp_index(modified))
}

/// Derive the maturity a role requires for one behaviour.
///
/// Summed discipline and track modifiers apply with no cap; only the final
/// clamp bounds the result. Stacked modifiers reaching well above or below
/// any single source is intentional for strong emphasis.
#[must_use]
pub fn derive_behaviour_maturity(
    discipline: &Discipline,
    grade: &Grade,
    track: Option<&Track>,
    behaviour_id: &str,
) -> Maturity {
    let modifier = behaviour_modifier(behaviour_id, discipline, track);
    Maturity::clamp_index(grade.base_maturity.index() as i64 + i64::from(modifier))
}

/// Derive the full skill matrix for a role.
///
/// Output order is deterministic: tier precedence (primary, secondary,
/// broad, track-added), then name.
#[must_use]
pub fn derive_skill_matrix(
    framework: &Framework,
    discipline: &Discipline,
    grade: &Grade,
    track: Option<&Track>,
    audience: Audience,
) -> Vec<SkillMatrixEntry> {
    let mut entries: Vec<SkillMatrixEntry> = framework
        .skills()
        .iter()
        .filter(|skill| !(audience == Audience::Agent && skill.is_human_only))
        .filter_map(|skill| {
            let level = derive_skill_level(discipline, grade, track, skill)?;
            let tier = discipline
                .tier_of(&skill.id)
                .map_or(RoleSkillTier::TrackAdded, RoleSkillTier::from);
            Some(SkillMatrixEntry {
                skill_id: skill.id.clone(),
                name: skill.name.clone(),
                capability: skill.capability,
                tier,
                level,
                description: skill.levels.get(&level).cloned().unwrap_or_default(),
            })
        })
        .collect();

    entries.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Derive the full behaviour profile for a role, sorted by name.
#[must_use]
pub fn derive_behaviour_profile(
    framework: &Framework,
    discipline: &Discipline,
    grade: &Grade,
    track: Option<&Track>,
) -> Vec<BehaviourProfileEntry> {
    let mut entries: Vec<BehaviourProfileEntry> = framework
        .behaviours()
        .iter()
        .map(|behaviour| {
            let maturity = derive_behaviour_maturity(discipline, grade, track, &behaviour.id);
            BehaviourProfileEntry {
                behaviour_id: behaviour.id.clone(),
                name: behaviour.name.clone(),
                maturity,
                description: behaviour.levels.get(&maturity).cloned().unwrap_or_default(),
            }
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
