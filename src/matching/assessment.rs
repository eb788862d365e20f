//! Self-assessment input shape.
//!
//! Supplied by the embedding application (questionnaire UI, CLI, import).
//! A missing entry for a required skill or behaviour is not an error — it is
//! scored as the worst-case gap.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::framework::{Maturity, SkillLevel};

/// A candidate's self-assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfAssessment {
    /// Self-assessed proficiency per skill id
    #[serde(default)]
    pub skills: BTreeMap<String, SkillLevel>,
    /// Self-assessed maturity per behaviour id
    #[serde(default)]
    pub behaviours: BTreeMap<String, Maturity>,
    /// Free-text expectations, consulted for senior-grade matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expectations: Option<Expectations>,
}

/// Free-text answers about the scope a candidate operates at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autonomy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influence: Option<String>,
}

impl SelfAssessment {
    /// Mean index of all self-assessed skill levels; `None` when no skills
    /// are assessed.
    #[must_use]
    pub fn mean_skill_index(&self) -> Option<f32> {
        if self.skills.is_empty() {
            return None;
        }
        let sum: usize = self.skills.values().map(|l| l.index()).sum();
        Some(sum as f32 / self.skills.len() as f32)
    }
}
