//! The career-framework data model.
//!
//! A [`Framework`] holds every entity the derivation and matching engine
//! operates on. Entities are loaded, schema-validated and referentially
//! checked by an external loader; this container only indexes them for
//! lookup and offers an advisory integrity pass.

pub mod capability;
pub mod entities;
pub mod levels;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use capability::CapabilityId;
pub use entities::{
    AssessmentWeights, BaseSkillLevels, Behaviour, Capability, Discipline, Driver, ExclusionRule,
    Grade, RoleSkillTier, Skill, SkillTier, Track, TrackEligibility,
};
pub use levels::{Maturity, SkillLevel};

/// All entities of one framework, indexed by id.
#[derive(Debug, Default)]
pub struct Framework {
    skills: Vec<Skill>,
    behaviours: Vec<Behaviour>,
    capabilities: Vec<Capability>,
    disciplines: Vec<Discipline>,
    tracks: Vec<Track>,
    grades: Vec<Grade>,
    drivers: Vec<Driver>,
    exclusions: Vec<ExclusionRule>,

    skill_index: HashMap<String, usize>,
    behaviour_index: HashMap<String, usize>,
    discipline_index: HashMap<String, usize>,
    track_index: HashMap<String, usize>,
    grade_index: HashMap<String, usize>,
}

impl Framework {
    /// Build a framework from loaded entity records.
    #[must_use]
    pub fn new(
        skills: Vec<Skill>,
        behaviours: Vec<Behaviour>,
        capabilities: Vec<Capability>,
        disciplines: Vec<Discipline>,
        tracks: Vec<Track>,
        grades: Vec<Grade>,
        drivers: Vec<Driver>,
        exclusions: Vec<ExclusionRule>,
    ) -> Self {
        let skill_index = index_by_id(&skills, |s| &s.id);
        let behaviour_index = index_by_id(&behaviours, |b| &b.id);
        let discipline_index = index_by_id(&disciplines, |d| &d.id);
        let track_index = index_by_id(&tracks, |t| &t.id);
        let grade_index = index_by_id(&grades, |g| &g.id);

        debug!(
            skills = skills.len(),
            behaviours = behaviours.len(),
            disciplines = disciplines.len(),
            tracks = tracks.len(),
            grades = grades.len(),
            drivers = drivers.len(),
            "framework indexed"
        );

        Self {
            skills,
            behaviours,
            capabilities,
            disciplines,
            tracks,
            grades,
            drivers,
            exclusions,
            skill_index,
            behaviour_index,
            discipline_index,
            track_index,
            grade_index,
        }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn behaviours(&self) -> &[Behaviour] {
        &self.behaviours
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn exclusions(&self) -> &[ExclusionRule] {
        &self.exclusions
    }

    #[must_use]
    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skill_index.get(id).map(|&i| &self.skills[i])
    }

    #[must_use]
    pub fn behaviour(&self, id: &str) -> Option<&Behaviour> {
        self.behaviour_index.get(id).map(|&i| &self.behaviours[i])
    }

    #[must_use]
    pub fn capability(&self, id: CapabilityId) -> Option<&Capability> {
        self.capabilities.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn discipline(&self, id: &str) -> Option<&Discipline> {
        self.discipline_index.get(id).map(|&i| &self.disciplines[i])
    }

    #[must_use]
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.track_index.get(id).map(|&i| &self.tracks[i])
    }

    #[must_use]
    pub fn grade(&self, id: &str) -> Option<&Grade> {
        self.grade_index.get(id).map(|&i| &self.grades[i])
    }

    /// Grades sorted ascending by rank.
    #[must_use]
    pub fn grades_by_rank(&self) -> Vec<&Grade> {
        let mut grades: Vec<&Grade> = self.grades.iter().collect();
        grades.sort_by_key(|g| g.rank);
        grades
    }

    /// Advisory integrity pass over the loaded data.
    ///
    /// The derivation and matching functions assume pre-validated input;
    /// this reports what a loader-side validator would have caught, as
    /// values rather than errors.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for track in &self.tracks {
            if let Some(weights) = &track.assessment_weights {
                if weights.validate().is_err() {
                    issues.push(ValidationIssue::InvalidWeights {
                        track: track.id.clone(),
                        skill_weight: weights.skill_weight,
                        behaviour_weight: weights.behaviour_weight,
                    });
                }
            }
            for behaviour_id in track.behaviour_modifiers.keys() {
                if self.behaviour(behaviour_id).is_none() {
                    issues.push(ValidationIssue::UnknownBehaviour {
                        source: track.id.clone(),
                        behaviour: behaviour_id.clone(),
                    });
                }
            }
        }

        for discipline in &self.disciplines {
            let mut seen: HashMap<&str, SkillTier> = HashMap::new();
            let tiers = [
                (SkillTier::Primary, &discipline.core_skills),
                (SkillTier::Secondary, &discipline.supporting_skills),
                (SkillTier::Broad, &discipline.broad_skills),
            ];
            for (tier, list) in tiers {
                for skill_id in list {
                    if self.skill(skill_id).is_none() {
                        issues.push(ValidationIssue::UnknownTierSkill {
                            discipline: discipline.id.clone(),
                            skill: skill_id.clone(),
                        });
                    }
                    if seen.insert(skill_id.as_str(), tier).is_some() {
                        issues.push(ValidationIssue::DuplicateTierSkill {
                            discipline: discipline.id.clone(),
                            skill: skill_id.clone(),
                        });
                    }
                }
            }
            for behaviour_id in discipline.behaviour_modifiers.keys() {
                if self.behaviour(behaviour_id).is_none() {
                    issues.push(ValidationIssue::UnknownBehaviour {
                        source: discipline.id.clone(),
                        behaviour: behaviour_id.clone(),
                    });
                }
            }
            for eligibility in &discipline.valid_tracks {
                if let TrackEligibility::Track(track_id) = eligibility {
                    if self.track(track_id).is_none() {
                        issues.push(ValidationIssue::UnknownTrack {
                            discipline: discipline.id.clone(),
                            track: track_id.clone(),
                        });
                    }
                }
            }
        }

        issues
    }
}

fn index_by_id<T>(items: &[T], id: impl Fn(&T) -> &String) -> HashMap<String, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (id(item).clone(), i))
        .collect()
}

/// A data problem found by [`Framework::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// A track's assessment weights are out of range or do not sum to 1.0
    InvalidWeights {
        track: String,
        skill_weight: f32,
        behaviour_weight: f32,
    },
    /// A tier list names a skill id that does not exist
    UnknownTierSkill { discipline: String, skill: String },
    /// A skill id appears in more than one tier of the same discipline
    DuplicateTierSkill { discipline: String, skill: String },
    /// A behaviour modifier references an unknown behaviour id
    UnknownBehaviour { source: String, behaviour: String },
    /// `valid_tracks` names a track id that does not exist
    UnknownTrack { discipline: String, track: String },
}
