//! Modifier resolution.
//!
//! Skill modifiers are declared once per capability on a track and expand to
//! every skill in that capability — a skill's effective modifier is entirely
//! determined by its capability, never by its own id. Behaviour modifiers
//! are looked up directly by behaviour id and are additive across sources
//! (discipline + track). Skill modifiers come from exactly one source at a
//! time: a job has at most one track, and trackless roles carry no skill
//! modifiers at all.

use crate::framework::{Discipline, Skill, Track};

/// Effective skill modifier for a skill under an optional track.
#[must_use]
pub fn skill_modifier(skill: &Skill, track: Option<&Track>) -> i8 {
    track
        .and_then(|t| t.skill_modifiers.get(&skill.capability))
        .copied()
        .unwrap_or(0)
}

/// Effective behaviour modifier, summed across discipline and track.
#[must_use]
pub fn behaviour_modifier(
    behaviour_id: &str,
    discipline: &Discipline,
    track: Option<&Track>,
) -> i16 {
    let from_discipline = discipline
        .behaviour_modifiers
        .get(behaviour_id)
        .copied()
        .unwrap_or(0);
    let from_track = track
        .and_then(|t| t.behaviour_modifiers.get(behaviour_id))
        .copied()
        .unwrap_or(0);
    i16::from(from_discipline) + i16::from(from_track)
}
