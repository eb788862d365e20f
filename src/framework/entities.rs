//! Entity records for the career framework.
//!
//! All entities are immutable inputs supplied by an external loader. The
//! core never mutates them and does not re-validate referential integrity
//! (a tier list naming a skill id that does not exist is the loader's
//! contract violation, not ours).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FrameworkError, Result};
use crate::framework::capability::CapabilityId;
use crate::framework::levels::{Maturity, SkillLevel};

/// Tolerance for assessment weight sums.
const WEIGHT_SUM_TOLERANCE: f32 = 0.001;

/// The sentinel string marking trackless eligibility in `valid_tracks`.
const NO_TRACK_SENTINEL: &str = "no-track";

/// A skill definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Unique skill ID
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Capability this skill belongs to
    pub capability: CapabilityId,
    /// Description text per proficiency level
    #[serde(default)]
    pub levels: BTreeMap<SkillLevel, String>,
    /// Excluded from agent-oriented derivations when set
    #[serde(default)]
    pub is_human_only: bool,
}

/// A behaviour definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Behaviour {
    /// Unique behaviour ID
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description text per maturity
    #[serde(default)]
    pub levels: BTreeMap<Maturity, String>,
}

/// A capability record with responsibility text per level.
///
/// `Awareness` carries no responsibility text in either archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    /// Capability ID
    pub id: CapabilityId,
    /// Human-readable name
    pub name: String,
    /// Responsibility text per level for individual-contributor roles
    #[serde(default)]
    pub ic_responsibilities: BTreeMap<SkillLevel, String>,
    /// Responsibility text per level for management roles
    #[serde(default)]
    pub management_responsibilities: BTreeMap<SkillLevel, String>,
}

impl Capability {
    /// Responsibility text for the given archetype and level.
    #[must_use]
    pub fn responsibility(&self, level: SkillLevel, management: bool) -> Option<&str> {
        let table = if management {
            &self.management_responsibilities
        } else {
            &self.ic_responsibilities
        };
        table.get(&level).map(String::as_str)
    }
}

/// A skill's tier within a discipline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    Primary,
    Secondary,
    Broad,
}

/// Tier label on a derived skill matrix entry.
///
/// Extends [`SkillTier`] with skills pulled in purely by a positive track
/// modifier. Ordering is the matrix sort precedence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoleSkillTier {
    Primary,
    Secondary,
    Broad,
    TrackAdded,
}

impl From<SkillTier> for RoleSkillTier {
    fn from(tier: SkillTier) -> Self {
        match tier {
            SkillTier::Primary => Self::Primary,
            SkillTier::Secondary => Self::Secondary,
            SkillTier::Broad => Self::Broad,
        }
    }
}

/// One entry in a discipline's `valid_tracks` list.
///
/// The loader encodes trackless eligibility as the literal string
/// `"no-track"`; every other entry is a track id. Modelled as a sum type so
/// the sentinel is handled exhaustively rather than compared at use sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackEligibility {
    /// The discipline supports trackless roles
    Trackless,
    /// The discipline supports this track
    Track(String),
}

impl From<String> for TrackEligibility {
    fn from(value: String) -> Self {
        if value == NO_TRACK_SENTINEL {
            Self::Trackless
        } else {
            Self::Track(value)
        }
    }
}

impl From<TrackEligibility> for String {
    fn from(value: TrackEligibility) -> Self {
        match value {
            TrackEligibility::Trackless => NO_TRACK_SENTINEL.to_string(),
            TrackEligibility::Track(id) => id,
        }
    }
}

/// A discipline definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discipline {
    /// Unique discipline ID
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Core (primary-tier) skill ids
    #[serde(default)]
    pub core_skills: Vec<String>,
    /// Supporting (secondary-tier) skill ids
    #[serde(default)]
    pub supporting_skills: Vec<String>,
    /// Broad-tier skill ids
    #[serde(default)]
    pub broad_skills: Vec<String>,
    /// Behaviour maturity adjustments, keyed by behaviour id
    #[serde(default)]
    pub behaviour_modifiers: BTreeMap<String, i8>,
    /// Tracks this discipline may combine with; empty means trackless-only
    /// by legacy default
    #[serde(default)]
    pub valid_tracks: Vec<TrackEligibility>,
    /// Minimum grade id this discipline exists at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_grade: Option<String>,
    /// Whether roles in this discipline use the management archetype
    #[serde(default)]
    pub is_management: bool,
}

impl Discipline {
    /// The tier a skill occupies in this discipline, if any.
    ///
    /// A skill appears in at most one tier; the first match wins in the
    /// precedence order primary, secondary, broad.
    #[must_use]
    pub fn tier_of(&self, skill_id: &str) -> Option<SkillTier> {
        if self.core_skills.iter().any(|id| id == skill_id) {
            Some(SkillTier::Primary)
        } else if self.supporting_skills.iter().any(|id| id == skill_id) {
            Some(SkillTier::Secondary)
        } else if self.broad_skills.iter().any(|id| id == skill_id) {
            Some(SkillTier::Broad)
        } else {
            None
        }
    }

    /// Whether trackless roles are allowed for this discipline.
    ///
    /// An empty `valid_tracks` list is the legacy default: trackless is
    /// always allowed when no tracks are declared at all.
    #[must_use]
    pub fn allows_trackless(&self) -> bool {
        self.valid_tracks.is_empty()
            || self
                .valid_tracks
                .iter()
                .any(|t| matches!(t, TrackEligibility::Trackless))
    }

    /// Whether the given track is allowed for this discipline.
    ///
    /// Sentinel entries are ignored; a list containing only the sentinel
    /// rejects every track.
    #[must_use]
    pub fn allows_track(&self, track_id: &str) -> bool {
        self.valid_tracks
            .iter()
            .any(|t| matches!(t, TrackEligibility::Track(id) if id == track_id))
    }
}

/// Weights for blending skill and behaviour scores during matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AssessmentWeights {
    pub skill_weight: f32,
    pub behaviour_weight: f32,
}

impl AssessmentWeights {
    /// The 0.5/0.5 default used when a track declares no weights.
    #[must_use]
    pub const fn even() -> Self {
        Self {
            skill_weight: 0.5,
            behaviour_weight: 0.5,
        }
    }

    /// Check that both weights lie in [0,1] and sum to 1.0 within tolerance.
    pub fn validate(&self) -> Result<()> {
        let in_range =
            (0.0..=1.0).contains(&self.skill_weight) && (0.0..=1.0).contains(&self.behaviour_weight);
        let sum = self.skill_weight + self.behaviour_weight;
        if in_range && (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            Ok(())
        } else {
            Err(FrameworkError::WeightsInvalid {
                skill_weight: self.skill_weight,
                behaviour_weight: self.behaviour_weight,
            })
        }
    }
}

/// A track definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track ID
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Skill adjustments, keyed by capability — never by individual skill id
    #[serde(default)]
    pub skill_modifiers: BTreeMap<CapabilityId, i8>,
    /// Behaviour maturity adjustments, keyed by behaviour id
    #[serde(default)]
    pub behaviour_modifiers: BTreeMap<String, i8>,
    /// Matching weights; `None` falls back to the 0.5/0.5 default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_weights: Option<AssessmentWeights>,
    /// Minimum grade id this track exists at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_grade: Option<String>,
}

/// Base skill levels a grade expects per tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BaseSkillLevels {
    pub primary: SkillLevel,
    pub secondary: SkillLevel,
    pub broad: SkillLevel,
}

impl BaseSkillLevels {
    /// Base level for the given tier.
    #[must_use]
    pub const fn for_tier(&self, tier: SkillTier) -> SkillLevel {
        match tier {
            SkillTier::Primary => self.primary,
            SkillTier::Secondary => self.secondary,
            SkillTier::Broad => self.broad,
        }
    }

    /// Highest base index across all three tiers.
    ///
    /// A positive track modifier can never push a skill above this.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.primary
            .index()
            .max(self.secondary.index())
            .max(self.broad.index())
    }
}

/// A grade definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    /// Unique grade ID
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Ordinal rank; totally orders grades
    pub rank: u8,
    /// Base skill level per tier
    pub base_skill_levels: BaseSkillLevels,
    /// Base behaviour maturity
    pub base_maturity: Maturity,
}

/// An outcome driver with its contributing skills and behaviours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    /// Unique driver ID
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Contributing skill ids
    #[serde(default)]
    pub skills: Vec<String>,
    /// Contributing behaviour ids
    #[serde(default)]
    pub behaviours: Vec<String>,
}

/// A partial-match pattern excluding specific role combinations.
///
/// Any rule whose non-null fields all equal the candidate triple's
/// corresponding fields invalidates the combination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExclusionRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl ExclusionRule {
    /// Whether this rule matches the candidate triple.
    #[must_use]
    pub fn matches(&self, discipline_id: &str, grade_id: &str, track_id: Option<&str>) -> bool {
        if let Some(d) = &self.discipline {
            if d != discipline_id {
                return false;
            }
        }
        if let Some(g) = &self.grade {
            if g != grade_id {
                return false;
            }
        }
        if let Some(t) = &self.track {
            if track_id != Some(t.as_str()) {
                return false;
            }
        }
        true
    }
}
