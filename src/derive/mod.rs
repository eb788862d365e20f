//! Role derivation: skill matrices, behaviour profiles, responsibilities,
//! driver coverage and the derived-job record.

pub mod cache;
pub mod drivers;
pub mod job;
pub mod matrix;
pub mod modifiers;
pub mod responsibilities;

pub use cache::{JobCache, JobKey};
pub use drivers::{DriverCoverage, coverage_report, driver_coverage};
pub use job::{DerivedJob, derive_job, generate_all_jobs, job_id, job_title};
pub use matrix::{
    Audience, BehaviourProfileEntry, SkillMatrixEntry, derive_behaviour_maturity,
    derive_behaviour_profile, derive_skill_level, derive_skill_matrix,
};
pub use modifiers::{behaviour_modifier, skill_modifier};
pub use responsibilities::{Responsibility, derive_responsibilities};
