//! Assessment matching: gap scoring, tier classification, role exploration
//! and development-path prioritization.

pub mod assessment;
pub mod development;
pub mod explore;
pub mod gaps;
pub mod score;

pub use assessment::{Expectations, SelfAssessment};
pub use development::{DevelopmentItem, development_path, gap_priority};
pub use explore::{
    GradeEstimate, estimate_best_fit_grade, find_matching_jobs, find_next_step_job,
    find_realistic_matches,
};
pub use gaps::{GAP_DECAY, GapEntry, GapKind, gap_score, missing_entry_gap};
pub use score::{
    DimensionScore, JobMatch, MatchConfig, MatchTier, behaviour_score, expectations_score,
    match_job, skill_score,
};
