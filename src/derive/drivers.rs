//! Driver coverage over a derived role profile.
//!
//! A driver declares the skills and behaviours that contribute to one
//! outcome. Coverage measures how much of that contribution a role reaches:
//! skills count at `working` proficiency or above, behaviours at
//! `practicing` maturity or above. An empty requirement is vacuously
//! satisfied.

use serde::{Deserialize, Serialize};

use crate::derive::matrix::{BehaviourProfileEntry, SkillMatrixEntry};
use crate::framework::{Driver, Framework, Maturity, SkillLevel};

/// Skill level at which a skill counts toward driver coverage.
const SKILL_COVERAGE_FLOOR: SkillLevel = SkillLevel::Working;

/// Maturity at which a behaviour counts toward driver coverage.
const BEHAVIOUR_COVERAGE_FLOOR: Maturity = Maturity::Practicing;

/// Coverage of one driver by one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverCoverage {
    pub driver_id: String,
    pub name: String,
    /// Fraction of contributing skills at working level or above
    pub skill_coverage: f32,
    /// Fraction of contributing behaviours at practicing maturity or above
    pub behaviour_coverage: f32,
    /// Unweighted mean of the two fractions
    pub overall: f32,
}

/// Compute one driver's coverage against a derived matrix and profile.
#[must_use]
pub fn driver_coverage(
    driver: &Driver,
    matrix: &[SkillMatrixEntry],
    profile: &[BehaviourProfileEntry],
) -> DriverCoverage {
    let skill_coverage = fraction(driver.skills.iter(), |skill_id| {
        matrix
            .iter()
            .any(|e| e.skill_id == *skill_id && e.level.meets(SKILL_COVERAGE_FLOOR))
    });
    let behaviour_coverage = fraction(driver.behaviours.iter(), |behaviour_id| {
        profile
            .iter()
            .any(|e| e.behaviour_id == *behaviour_id && e.maturity.meets(BEHAVIOUR_COVERAGE_FLOOR))
    });

    DriverCoverage {
        driver_id: driver.id.clone(),
        name: driver.name.clone(),
        skill_coverage,
        behaviour_coverage,
        overall: (skill_coverage + behaviour_coverage) / 2.0,
    }
}

/// Coverage of every driver in the framework, in declaration order.
#[must_use]
pub fn coverage_report(
    framework: &Framework,
    matrix: &[SkillMatrixEntry],
    profile: &[BehaviourProfileEntry],
) -> Vec<DriverCoverage> {
    framework
        .drivers()
        .iter()
        .map(|driver| driver_coverage(driver, matrix, profile))
        .collect()
}

fn fraction<'a, I: ExactSizeIterator<Item = &'a String>>(
    items: I,
    satisfied: impl Fn(&String) -> bool,
) -> f32 {
    let total = items.len();
    if total == 0 {
        return 1.0;
    }
    let hit = items.filter(|item| satisfied(item)).count();
    hit as f32 / total as f32
}
