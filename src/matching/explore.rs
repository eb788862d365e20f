//! Role exploration: ranked matching across the whole job space.
//!
//! All of these enumerate valid combinations via `generate_all_jobs` and
//! re-derive per combination — acceptable brute force for datasets counted
//! in hundreds of records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::derive::job::{DerivedJob, generate_all_jobs};
use crate::derive::matrix::Audience;
use crate::error::{FrameworkError, Result};
use crate::framework::Framework;
use crate::matching::assessment::SelfAssessment;
use crate::matching::score::{JobMatch, MatchConfig, match_job};

/// Score every valid job against the assessment and return the top `limit`,
/// best first.
///
/// # Errors
///
/// Propagates structural errors from job derivation.
pub fn find_matching_jobs(
    framework: &Framework,
    assessment: &SelfAssessment,
    config: &MatchConfig,
    limit: usize,
) -> Result<Vec<JobMatch>> {
    let jobs = generate_all_jobs(framework, Audience::Human)?;
    let mut matches: Vec<JobMatch> = jobs
        .iter()
        .map(|job| match_job(framework, job, assessment, config))
        .collect();
    sort_matches(&mut matches);
    matches.truncate(limit);
    debug!(returned = matches.len(), "ranked job matches");
    Ok(matches)
}

/// A grade estimate from self-assessed skill levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEstimate {
    pub grade_id: String,
    pub rank: u8,
    /// 1.0 when the assessment average sits exactly on the grade's primary
    /// base index, decaying to 0.0 at distance 2
    pub confidence: f32,
}

/// Estimate the grade whose primary-tier base level sits closest to the
/// average of all self-assessed skill levels.
///
/// Equidistant grades tie-break toward the lower rank: deterministic, and
/// conservative in never over-placing a candidate. An empty assessment
/// averages to the scale floor.
///
/// # Errors
///
/// [`FrameworkError::NoGrades`] when the framework has no grades — there is
/// nothing to estimate against, which is a structural impossibility rather
/// than a poor result.
pub fn estimate_best_fit_grade(
    framework: &Framework,
    assessment: &SelfAssessment,
) -> Result<GradeEstimate> {
    let grades = framework.grades_by_rank();
    if grades.is_empty() {
        return Err(FrameworkError::NoGrades);
    }

    let mean = assessment.mean_skill_index().unwrap_or(0.0);
    let distance_to = |grade: &crate::framework::Grade| {
        (grade.base_skill_levels.primary.index() as f32 - mean).abs()
    };

    let mut grade = grades[0];
    let mut distance = distance_to(grade);
    for &candidate in &grades[1..] {
        let candidate_distance = distance_to(candidate);
        if candidate_distance < distance {
            grade = candidate;
            distance = candidate_distance;
        }
    }

    Ok(GradeEstimate {
        grade_id: grade.id.clone(),
        rank: grade.rank,
        confidence: (1.0 - distance / 2.0).max(0.0),
    })
}

/// Matches filtered to grades a candidate could realistically hold next.
///
/// Combines grade proximity (within `config.grade_window` of the estimated
/// best-fit grade) with two-stage tier suppression: once any Strong/Good
/// match exists at some rank, Stretch/Aspirational matches below that rank
/// add nothing, and Strong/Good matches more than `config.suppression_depth`
/// ranks below it are equally stale.
///
/// # Errors
///
/// [`FrameworkError::NoGrades`] via grade estimation, plus structural
/// derivation errors.
pub fn find_realistic_matches(
    framework: &Framework,
    assessment: &SelfAssessment,
    config: &MatchConfig,
) -> Result<Vec<JobMatch>> {
    let estimate = estimate_best_fit_grade(framework, assessment)?;
    let window = i16::from(config.grade_window);

    let jobs = generate_all_jobs(framework, Audience::Human)?;
    let mut matches: Vec<JobMatch> = jobs
        .iter()
        .filter(|job| (i16::from(job.rank) - i16::from(estimate.rank)).abs() <= window)
        .map(|job| match_job(framework, job, assessment, config))
        .collect();
    sort_matches(&mut matches);

    let anchor_rank = matches
        .iter()
        .filter(|m| m.tier.is_ready())
        .map(|m| m.job.rank)
        .max();
    if let Some(anchor) = anchor_rank {
        matches.retain(|m| {
            if m.tier.is_ready() {
                i16::from(anchor) - i16::from(m.job.rank) <= i16::from(config.suppression_depth)
            } else {
                m.job.rank >= anchor
            }
        });
    }

    debug!(
        estimated_grade = %estimate.grade_id,
        returned = matches.len(),
        "realistic matches"
    );
    Ok(matches)
}

/// Best match exactly one rank above the current job.
///
/// Candidates sharing the current job's track get a ranking bonus; the
/// bonus applies across disciplines, since a track preserved through a
/// discipline change is still the smaller step.
///
/// # Errors
///
/// Propagates structural errors from job derivation.
pub fn find_next_step_job(
    framework: &Framework,
    current: &DerivedJob,
    assessment: &SelfAssessment,
    config: &MatchConfig,
) -> Result<Option<JobMatch>> {
    let next_rank = current.rank + 1;
    let jobs = generate_all_jobs(framework, Audience::Human)?;

    let mut best: Option<(f32, JobMatch)> = None;
    for job in jobs.iter().filter(|job| job.rank == next_rank) {
        let candidate = match_job(framework, job, assessment, config);
        let same_track = job.track_id.is_some() && job.track_id == current.track_id;
        let ranking = candidate.overall + if same_track { config.same_track_bonus } else { 0.0 };

        let better = match &best {
            Some((best_ranking, best_match)) => {
                ranking > *best_ranking
                    || ((ranking - best_ranking).abs() < f32::EPSILON
                        && candidate.job.id < best_match.job.id)
            }
            None => true,
        };
        if better {
            best = Some((ranking, candidate));
        }
    }

    Ok(best.map(|(_, m)| m))
}

fn sort_matches(matches: &mut [JobMatch]) {
    matches.sort_by(|a, b| {
        b.overall
            .partial_cmp(&a.overall)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.job.id.cmp(&b.job.id))
    });
}
