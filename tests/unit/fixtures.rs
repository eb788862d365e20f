//! Shared fixture framework for unit suites.
//!
//! Entities are declared in YAML, the same shape the production loader
//! consumes, so these tests also pin the serde contract.

use careerframe::framework::{
    Behaviour, Capability, Discipline, Driver, ExclusionRule, Framework, Grade, Skill, Track,
};

const SKILLS_YAML: &str = r#"
- id: sys-design
  name: Systems Design
  capability: craft
  levels:
    awareness: Knows the main architectural styles.
    foundational: Designs small components with guidance.
    working: Designs services within an established architecture.
    practitioner: Designs systems spanning several teams.
    expert: Sets architectural direction for the organization.
- id: delivery-flow
  name: Delivery Flow
  capability: delivery
  levels:
    working: Keeps a steady flow of small, safe releases.
    practitioner: Optimizes the path to production across teams.
- id: observability
  name: Observability
  capability: quality
  levels:
    working: Instruments services and reads the signals.
- id: technical-writing
  name: Technical Writing
  capability: communication
  levels:
    working: Writes clear design docs and runbooks.
- id: ml-engineering
  name: ML Engineering
  capability: ai
  levels:
    foundational: Integrates existing models behind stable interfaces.
    working: Builds and evaluates model-backed features.
- id: mentoring
  name: Mentoring
  capability: people
  is_human_only: true
  levels:
    working: Mentors engineers across the team.
"#;

const BEHAVIOURS_YAML: &str = r#"
- id: ownership
  name: Ownership
  levels:
    emerging: Owns tasks to completion.
    developing: Owns features end to end.
    practicing: Owns outcomes beyond assigned work.
    role_modeling: Sets the standard for ownership on the team.
    exemplifying: Instills ownership across the organization.
- id: curiosity
  name: Curiosity
  levels:
    developing: Asks why before how.
    practicing: Explores adjacent domains unprompted.
- id: candor
  name: Candor
  levels:
    developing: Gives direct feedback when asked.
    practicing: Offers direct feedback unprompted and kindly.
"#;

const CAPABILITIES_YAML: &str = r#"
- id: craft
  name: Craft
  ic_responsibilities:
    foundational: Contributes reliable changes to owned components.
    working: Owns the technical health of their service.
    practitioner: Shapes technical direction across services.
    expert: Owns architectural direction for the group.
  management_responsibilities:
    working: Keeps the team's technical bar high.
    practitioner: Balances technical investment across teams.
    expert: Owns the organization's technical strategy.
- id: delivery
  name: Delivery
  ic_responsibilities:
    foundational: Ships small changes with guidance.
    working: Ships predictably within the team's cadence.
    practitioner: Unblocks delivery across team boundaries.
    expert: Designs the delivery system itself.
  management_responsibilities:
    working: Runs a predictable delivery cadence.
    practitioner: Removes systemic delivery bottlenecks.
    expert: Owns delivery performance for the organization.
- id: quality
  name: Quality
  ic_responsibilities:
    foundational: Tests their own changes thoroughly.
    working: Holds the line on operational quality.
    practitioner: Drives quality practice beyond their team.
    expert: Owns the quality strategy for the organization.
- id: communication
  name: Communication
  ic_responsibilities:
    foundational: Communicates status clearly within the team.
    working: Keeps stakeholders informed without prompting.
    practitioner: Aligns groups through writing and speaking.
    expert: Shapes how the organization communicates.
- id: ai
  name: AI
  ic_responsibilities:
    foundational: Applies AI tooling responsibly in daily work.
    working: Builds dependable AI-assisted features.
    practitioner: Sets AI practice for several teams.
    expert: Owns the organization's AI engineering strategy.
- id: people
  name: People
  ic_responsibilities:
    foundational: Supports onboarding of new teammates.
    working: Grows the engineers around them.
    practitioner: Builds the team's growth culture.
    expert: Shapes the organization's growth systems.
  management_responsibilities:
    foundational: Learns the fundamentals of coaching.
    working: Coaches direct reports effectively.
    practitioner: Develops leaders within the team.
    expert: Builds the leadership bench for the organization.
"#;

const DISCIPLINES_YAML: &str = r#"
- id: platform
  name: Platform Engineering
  core_skills: [sys-design, delivery-flow]
  supporting_skills: [observability]
  broad_skills: [technical-writing, mentoring]
  behaviour_modifiers:
    ownership: 1
  valid_tracks: [no-track, infra, ai-platform]
- id: em
  name: Engineering Management
  core_skills: [delivery-flow]
  supporting_skills: [sys-design]
  broad_skills: [mentoring]
  behaviour_modifiers:
    candor: 1
  valid_tracks: [no-track]
  min_grade: l5
  is_management: true
"#;

const TRACKS_YAML: &str = r#"
- id: infra
  name: Infrastructure
  skill_modifiers:
    quality: 1
    communication: -1
  behaviour_modifiers:
    ownership: 1
  assessment_weights:
    skill_weight: 0.3
    behaviour_weight: 0.7
- id: ai-platform
  name: AI Platform
  skill_modifiers:
    ai: 1
  min_grade: l4
"#;

const GRADES_YAML: &str = r#"
- id: l3
  name: Engineer II
  rank: 3
  base_skill_levels:
    primary: working
    secondary: foundational
    broad: awareness
  base_maturity: developing
- id: l4
  name: Senior Engineer
  rank: 4
  base_skill_levels:
    primary: practitioner
    secondary: working
    broad: foundational
  base_maturity: practicing
- id: l5
  name: Staff Engineer
  rank: 5
  base_skill_levels:
    primary: expert
    secondary: practitioner
    broad: working
  base_maturity: role_modeling
"#;

const DRIVERS_YAML: &str = r#"
- id: reliability
  name: Reliability
  skills: [sys-design, observability]
  behaviours: [ownership]
- id: speed
  name: Speed
  skills: [delivery-flow]
  behaviours: []
"#;

const EXCLUSIONS_YAML: &str = r#"
- discipline: platform
  track: ai-platform
  grade: l5
"#;

/// Build the shared fixture framework.
pub fn framework() -> Framework {
    let skills: Vec<Skill> = serde_yaml::from_str(SKILLS_YAML).expect("skills fixture");
    let behaviours: Vec<Behaviour> =
        serde_yaml::from_str(BEHAVIOURS_YAML).expect("behaviours fixture");
    let capabilities: Vec<Capability> =
        serde_yaml::from_str(CAPABILITIES_YAML).expect("capabilities fixture");
    let disciplines: Vec<Discipline> =
        serde_yaml::from_str(DISCIPLINES_YAML).expect("disciplines fixture");
    let tracks: Vec<Track> = serde_yaml::from_str(TRACKS_YAML).expect("tracks fixture");
    let grades: Vec<Grade> = serde_yaml::from_str(GRADES_YAML).expect("grades fixture");
    let drivers: Vec<Driver> = serde_yaml::from_str(DRIVERS_YAML).expect("drivers fixture");
    let exclusions: Vec<ExclusionRule> =
        serde_yaml::from_str(EXCLUSIONS_YAML).expect("exclusions fixture");

    Framework::new(
        skills,
        behaviours,
        capabilities,
        disciplines,
        tracks,
        grades,
        drivers,
        exclusions,
    )
}
