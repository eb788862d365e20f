//! Role-combination validity.
//!
//! A (discipline, grade, track) triple is a legal role only when every gate
//! passes. Gates are evaluated in order and short-circuit on the first
//! failure:
//!
//! 1. discipline minimum-grade gate
//! 2. trackless eligibility (sentinel or legacy empty list)
//! 3. track eligibility
//! 4. track minimum-grade gate
//! 5. global exclusion rules
//!
//! Invalid combinations are a `false`, never an error.

use tracing::trace;

use crate::framework::{Discipline, Framework, Grade, Track};

/// Whether the triple is a legal role combination.
#[must_use]
pub fn is_valid_combination(
    framework: &Framework,
    discipline: &Discipline,
    grade: &Grade,
    track: Option<&Track>,
) -> bool {
    if !min_grade_gate(framework, discipline.min_grade.as_deref(), grade) {
        trace!(
            discipline = %discipline.id,
            grade = %grade.id,
            "rejected by discipline minimum grade"
        );
        return false;
    }

    match track {
        None => {
            if !discipline.allows_trackless() {
                trace!(discipline = %discipline.id, "trackless roles not allowed");
                return false;
            }
        }
        Some(track) => {
            if !discipline.allows_track(&track.id) {
                trace!(
                    discipline = %discipline.id,
                    track = %track.id,
                    "track not eligible for discipline"
                );
                return false;
            }
            if !min_grade_gate(framework, track.min_grade.as_deref(), grade) {
                trace!(track = %track.id, grade = %grade.id, "rejected by track minimum grade");
                return false;
            }
        }
    }

    let track_id = track.map(|t| t.id.as_str());
    if framework
        .exclusions()
        .iter()
        .any(|rule| rule.matches(&discipline.id, &grade.id, track_id))
    {
        trace!(
            discipline = %discipline.id,
            grade = %grade.id,
            track = ?track_id,
            "rejected by exclusion rule"
        );
        return false;
    }

    true
}

/// Compare grade ranks through a minimum-grade id.
///
/// A minimum-grade id that does not resolve passes the gate; referential
/// integrity is the loader's contract.
fn min_grade_gate(framework: &Framework, min_grade_id: Option<&str>, grade: &Grade) -> bool {
    match min_grade_id.and_then(|id| framework.grade(id)) {
        Some(min_grade) => grade.rank >= min_grade.rank,
        None => true,
    }
}
