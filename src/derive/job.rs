//! Derived job records.
//!
//! A job is the core's own construct: the complete role definition computed
//! from a valid (discipline, grade, track) triple. Jobs are never loaded or
//! persisted; they are recomputed on demand and safe to memoize because the
//! underlying entities are immutable for the process lifetime.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::derive::matrix::{
    Audience, BehaviourProfileEntry, SkillMatrixEntry, derive_behaviour_profile,
    derive_skill_matrix,
};
use crate::derive::responsibilities::{Responsibility, derive_responsibilities};
use crate::error::Result;
use crate::framework::{Discipline, Framework, Grade, Track};
use crate::validity::is_valid_combination;

/// A fully derived role definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedJob {
    /// Stable id generated from the triple
    pub id: String,
    /// Display title generated from the entity names
    pub title: String,
    pub discipline_id: String,
    pub grade_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    /// The grade's ordinal rank, copied for seniority checks
    pub rank: u8,
    /// Whether the discipline uses the management archetype
    pub is_management: bool,
    pub skill_matrix: Vec<SkillMatrixEntry>,
    pub behaviour_profile: Vec<BehaviourProfileEntry>,
    pub responsibilities: Vec<Responsibility>,
}

/// Stable job id for a triple: `discipline-grade[-track]`.
#[must_use]
pub fn job_id(discipline: &Discipline, grade: &Grade, track: Option<&Track>) -> String {
    match track {
        Some(track) => format!("{}-{}-{}", discipline.id, grade.id, track.id),
        None => format!("{}-{}", discipline.id, grade.id),
    }
}

/// Display title for a triple: `"Grade Discipline (Track)"`.
#[must_use]
pub fn job_title(discipline: &Discipline, grade: &Grade, track: Option<&Track>) -> String {
    match track {
        Some(track) => format!("{} {} ({})", grade.name, discipline.name, track.name),
        None => format!("{} {}", grade.name, discipline.name),
    }
}

/// Derive the complete job record for a triple.
///
/// Validity is the caller's concern — this derives whatever triple it is
/// given; see [`generate_all_jobs`] for the filtered enumeration.
///
/// # Errors
///
/// Propagates [`crate::error::FrameworkError::ResponsibilityMissing`] from
/// the responsibility rollup.
pub fn derive_job(
    framework: &Framework,
    discipline: &Discipline,
    grade: &Grade,
    track: Option<&Track>,
    audience: Audience,
) -> Result<DerivedJob> {
    let skill_matrix = derive_skill_matrix(framework, discipline, grade, track, audience);
    let behaviour_profile = derive_behaviour_profile(framework, discipline, grade, track);
    let responsibilities = derive_responsibilities(framework, discipline, &skill_matrix)?;

    Ok(DerivedJob {
        id: job_id(discipline, grade, track),
        title: job_title(discipline, grade, track),
        discipline_id: discipline.id.clone(),
        grade_id: grade.id.clone(),
        track_id: track.map(|t| t.id.clone()),
        rank: grade.rank,
        is_management: discipline.is_management,
        skill_matrix,
        behaviour_profile,
        responsibilities,
    })
}

/// Enumerate every valid discipline × grade × (trackless ∪ tracks)
/// combination and derive each into a full job record.
///
/// # Errors
///
/// Propagates structural errors from job derivation.
pub fn generate_all_jobs(framework: &Framework, audience: Audience) -> Result<Vec<DerivedJob>> {
    let mut jobs = Vec::new();
    for discipline in framework.disciplines() {
        for grade in framework.grades() {
            if is_valid_combination(framework, discipline, grade, None) {
                jobs.push(derive_job(framework, discipline, grade, None, audience)?);
            }
            for track in framework.tracks() {
                if is_valid_combination(framework, discipline, grade, Some(track)) {
                    jobs.push(derive_job(
                        framework,
                        discipline,
                        grade,
                        Some(track),
                        audience,
                    )?);
                }
            }
        }
    }
    debug!(count = jobs.len(), "generated all valid jobs");
    Ok(jobs)
}
