//! Job match scoring.
//!
//! A match blends a skill dimension and a behaviour dimension, weighted by
//! the track's assessment weights (0.5/0.5 when absent). Senior grades blend
//! in a small expectations sub-score. Classification is a fixed threshold
//! ladder evaluated top-down.

use serde::{Deserialize, Serialize};

use crate::derive::job::DerivedJob;
use crate::derive::matrix::{BehaviourProfileEntry, SkillMatrixEntry};
use crate::framework::{AssessmentWeights, Framework};
use crate::matching::assessment::SelfAssessment;
use crate::matching::gaps::{GapEntry, GapKind, gap_score, missing_entry_gap};

/// Tunable matching constants. Defaults reproduce the published behaviour.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Score floor for a Strong match
    pub strong_threshold: f32,
    /// Score floor for a Good match
    pub good_threshold: f32,
    /// Score floor for a Stretch role
    pub stretch_threshold: f32,
    /// Grade rank at and above which expectations are blended in
    pub seniority_rank: u8,
    /// Weight of the expectations sub-score for senior grades
    pub expectations_weight: f32,
    /// Ranking bonus for next-step candidates sharing the current track
    pub same_track_bonus: f32,
    /// How many of the largest gaps become priority gaps
    pub priority_gap_count: usize,
    /// Rank distance around the estimated grade for realistic matching
    pub grade_window: u8,
    /// Rank depth below the best Strong/Good match at which further
    /// Strong/Good matches are suppressed
    pub suppression_depth: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 0.85,
            good_threshold: 0.70,
            stretch_threshold: 0.55,
            seniority_rank: 5,
            expectations_weight: 0.1,
            same_track_bonus: 0.1,
            priority_gap_count: 3,
            grade_window: 1,
            suppression_depth: 2,
        }
    }
}

/// How ready a candidate is for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Good,
    Stretch,
    Aspirational,
}

impl MatchTier {
    /// Classify a score on the threshold ladder, top-down; the first
    /// matching threshold wins.
    #[must_use]
    pub fn classify(score: f32, config: &MatchConfig) -> Self {
        if score >= config.strong_threshold {
            Self::Strong
        } else if score >= config.good_threshold {
            Self::Good
        } else if score >= config.stretch_threshold {
            Self::Stretch
        } else {
            Self::Aspirational
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong Match",
            Self::Good => "Good Match",
            Self::Stretch => "Stretch Role",
            Self::Aspirational => "Aspirational",
        }
    }

    /// Whether this tier indicates present readiness.
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Strong | Self::Good)
    }
}

/// Score and shortfalls for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Mean gap-score across all requirements; 1.0 when there are none
    pub score: f32,
    /// Entries for requirements the candidate falls short of
    pub gaps: Vec<GapEntry>,
}

/// Score the skill dimension of an assessment against a job's matrix.
#[must_use]
pub fn skill_score(assessment: &SelfAssessment, matrix: &[SkillMatrixEntry]) -> DimensionScore {
    let mut total = 0.0f32;
    let mut gaps = Vec::new();

    for entry in matrix {
        let required = entry.level.index();
        let (gap, current) = match assessment.skills.get(&entry.skill_id) {
            Some(actual) if actual.meets(entry.level) => (0, Some(actual.index())),
            Some(actual) => (required - actual.index(), Some(actual.index())),
            None => (missing_entry_gap(required), None),
        };
        total += gap_score(gap);
        if gap > 0 {
            gaps.push(GapEntry {
                id: entry.skill_id.clone(),
                name: entry.name.clone(),
                kind: GapKind::Skill,
                required_index: required,
                current_index: current,
                gap,
                tier: Some(entry.tier),
                capability: Some(entry.capability),
            });
        }
    }

    let score = if matrix.is_empty() {
        1.0
    } else {
        total / matrix.len() as f32
    };
    DimensionScore { score, gaps }
}

/// Score the behaviour dimension of an assessment against a job's profile.
#[must_use]
pub fn behaviour_score(
    assessment: &SelfAssessment,
    profile: &[BehaviourProfileEntry],
) -> DimensionScore {
    let mut total = 0.0f32;
    let mut gaps = Vec::new();

    for entry in profile {
        let required = entry.maturity.index();
        let (gap, current) = match assessment.behaviours.get(&entry.behaviour_id) {
            Some(actual) if actual.meets(entry.maturity) => (0, Some(actual.index())),
            Some(actual) => (required - actual.index(), Some(actual.index())),
            None => (missing_entry_gap(required), None),
        };
        total += gap_score(gap);
        if gap > 0 {
            gaps.push(GapEntry {
                id: entry.behaviour_id.clone(),
                name: entry.name.clone(),
                kind: GapKind::Behaviour,
                required_index: required,
                current_index: current,
                gap,
                tier: None,
                capability: None,
            });
        }
    }

    let score = if profile.is_empty() {
        1.0
    } else {
        total / profile.len() as f32
    };
    DimensionScore { score, gaps }
}

/// Presence sub-score over the three expectations text fields.
///
/// A missing sub-object scores 0.0, the worst case, consistent with how
/// missing assessment entries are treated.
#[must_use]
pub fn expectations_score(assessment: &SelfAssessment) -> f32 {
    let Some(expectations) = &assessment.expectations else {
        return 0.0;
    };
    let fields = [
        expectations.scope.as_deref(),
        expectations.autonomy.as_deref(),
        expectations.influence.as_deref(),
    ];
    let present = fields
        .iter()
        .filter(|f| f.is_some_and(|text| !text.trim().is_empty()))
        .count();
    present as f32 / fields.len() as f32
}

/// A scored comparison of one assessment against one derived job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: DerivedJob,
    /// Weighted overall score in [0,1]
    pub overall: f32,
    pub skill_score: f32,
    pub behaviour_score: f32,
    /// Present only for senior grades where it was blended in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expectations_score: Option<f32>,
    pub tier: MatchTier,
    /// All shortfalls from both dimensions, largest gap first
    pub gaps: Vec<GapEntry>,
    /// The top gaps to present as a development focus
    pub priority_gaps: Vec<GapEntry>,
}

/// Score an assessment against one derived job.
///
/// Weights come from the job's track when it declares them, else 0.5/0.5.
#[must_use]
pub fn match_job(
    framework: &Framework,
    job: &DerivedJob,
    assessment: &SelfAssessment,
    config: &MatchConfig,
) -> JobMatch {
    let weights = job
        .track_id
        .as_deref()
        .and_then(|id| framework.track(id))
        .and_then(|t| t.assessment_weights)
        .unwrap_or_else(AssessmentWeights::even);

    let skills = skill_score(assessment, &job.skill_matrix);
    let behaviours = behaviour_score(assessment, &job.behaviour_profile);

    let mut overall =
        skills.score * weights.skill_weight + behaviours.score * weights.behaviour_weight;

    let expectations = if job.rank >= config.seniority_rank {
        let sub = expectations_score(assessment);
        overall = overall * (1.0 - config.expectations_weight) + sub * config.expectations_weight;
        Some(sub)
    } else {
        None
    };

    let mut gaps = skills.gaps;
    gaps.extend(behaviours.gaps);
    gaps.sort_by(|a, b| b.gap.cmp(&a.gap).then_with(|| a.name.cmp(&b.name)));
    let priority_gaps = gaps
        .iter()
        .take(config.priority_gap_count)
        .cloned()
        .collect();

    JobMatch {
        job: job.clone(),
        overall,
        skill_score: skills.score,
        behaviour_score: behaviours.score,
        expectations_score: expectations,
        tier: MatchTier::classify(overall, config),
        gaps,
        priority_gaps,
    }
}
