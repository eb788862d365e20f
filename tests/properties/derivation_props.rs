//! Derivation invariants under arbitrary bases and modifiers.

use std::collections::BTreeMap;

use proptest::prelude::*;

use careerframe::derive::{Audience, derive_behaviour_maturity, derive_skill_level, derive_skill_matrix};
use careerframe::framework::{
    BaseSkillLevels, Behaviour, CapabilityId, Discipline, Framework, Grade, Maturity, Skill,
    SkillLevel, SkillTier, Track,
};
use careerframe::matching::gap_score;

fn arb_skill_level() -> impl Strategy<Value = SkillLevel> {
    (0usize..SkillLevel::COUNT).prop_map(|i| SkillLevel::from_index(i).unwrap())
}

fn arb_maturity() -> impl Strategy<Value = Maturity> {
    (0usize..Maturity::COUNT).prop_map(|i| Maturity::from_index(i).unwrap())
}

fn arb_capability() -> impl Strategy<Value = CapabilityId> {
    prop::sample::select(CapabilityId::ALL.to_vec())
}

fn grade_with(base: BaseSkillLevels, maturity: Maturity) -> Grade {
    Grade {
        id: "g".into(),
        name: "G".into(),
        rank: 3,
        base_skill_levels: base,
        base_maturity: maturity,
    }
}

fn skill_with(capability: CapabilityId) -> Skill {
    Skill {
        id: "s".into(),
        name: "S".into(),
        capability,
        levels: BTreeMap::new(),
        is_human_only: false,
    }
}

fn discipline_with_tier(tier: Option<SkillTier>) -> Discipline {
    let mut d = Discipline {
        id: "d".into(),
        name: "D".into(),
        core_skills: vec![],
        supporting_skills: vec![],
        broad_skills: vec![],
        behaviour_modifiers: BTreeMap::new(),
        valid_tracks: vec![],
        min_grade: None,
        is_management: false,
    };
    match tier {
        Some(SkillTier::Primary) => d.core_skills.push("s".into()),
        Some(SkillTier::Secondary) => d.supporting_skills.push("s".into()),
        Some(SkillTier::Broad) => d.broad_skills.push("s".into()),
        None => {}
    }
    d
}

fn track_with(capability: CapabilityId, modifier: i8) -> Track {
    Track {
        id: "t".into(),
        name: "T".into(),
        skill_modifiers: BTreeMap::from([(capability, modifier)]),
        behaviour_modifiers: BTreeMap::new(),
        assessment_weights: None,
        min_grade: None,
    }
}

proptest! {
    #[test]
    fn derived_levels_are_always_in_range(
        primary in arb_skill_level(),
        secondary in arb_skill_level(),
        broad in arb_skill_level(),
        capability in arb_capability(),
        modifier in -10i8..=10,
        tier_pick in 0usize..4,
    ) {
        let tier = match tier_pick {
            0 => Some(SkillTier::Primary),
            1 => Some(SkillTier::Secondary),
            2 => Some(SkillTier::Broad),
            _ => None,
        };
        let grade = grade_with(
            BaseSkillLevels { primary, secondary, broad },
            Maturity::Developing,
        );
        let discipline = discipline_with_tier(tier);
        let skill = skill_with(capability);
        let track = track_with(capability, modifier);

        let derived = derive_skill_level(&discipline, &grade, Some(&track), &skill);
        match derived {
            Some(level) => prop_assert!(level.index() < SkillLevel::COUNT),
            None => {
                // only untiered skills without a positive boost drop out
                prop_assert!(tier.is_none() && modifier <= 0);
            }
        }
    }

    #[test]
    fn positive_modifiers_never_exceed_grade_max_base(
        primary in arb_skill_level(),
        secondary in arb_skill_level(),
        broad in arb_skill_level(),
        modifier in 1i8..=10,
        tier_pick in 0usize..3,
    ) {
        let tier = match tier_pick {
            0 => SkillTier::Primary,
            1 => SkillTier::Secondary,
            _ => SkillTier::Broad,
        };
        let base = BaseSkillLevels { primary, secondary, broad };
        let max_index = base.max_index();
        let grade = grade_with(base, Maturity::Developing);
        let discipline = discipline_with_tier(Some(tier));
        let skill = skill_with(CapabilityId::Craft);
        let track = track_with(CapabilityId::Craft, modifier);

        let level = derive_skill_level(&discipline, &grade, Some(&track), &skill).unwrap();
        prop_assert!(level.index() <= max_index);
        // never below the tier base either: boosts only move up
        prop_assert!(level.index() >= base.for_tier(tier).index().min(max_index));
    }

    #[test]
    fn negative_modifiers_clamp_to_floor_without_cap(
        base in arb_skill_level(),
        modifier in -10i8..=-1,
    ) {
        let grade = grade_with(
            BaseSkillLevels { primary: base, secondary: base, broad: base },
            Maturity::Developing,
        );
        let discipline = discipline_with_tier(Some(SkillTier::Primary));
        let skill = skill_with(CapabilityId::Craft);
        let track = track_with(CapabilityId::Craft, modifier);

        let level = derive_skill_level(&discipline, &grade, Some(&track), &skill).unwrap();
        let expected = (base.index() as i64 + i64::from(modifier)).max(0) as usize;
        prop_assert_eq!(level.index(), expected);
    }

    #[test]
    fn behaviour_maturity_clamps_summed_modifiers(
        base in arb_maturity(),
        disc_mod in -3i8..=3,
        track_mod in -3i8..=3,
    ) {
        let grade = grade_with(
            BaseSkillLevels {
                primary: SkillLevel::Working,
                secondary: SkillLevel::Working,
                broad: SkillLevel::Working,
            },
            base,
        );
        let mut discipline = discipline_with_tier(None);
        discipline.behaviour_modifiers.insert("b".into(), disc_mod);
        let mut track = track_with(CapabilityId::Craft, 0);
        track.behaviour_modifiers.insert("b".into(), track_mod);

        let maturity = derive_behaviour_maturity(&discipline, &grade, Some(&track), "b");
        let raw = base.index() as i64 + i64::from(disc_mod) + i64::from(track_mod);
        let expected = raw.clamp(0, (Maturity::COUNT - 1) as i64) as usize;
        prop_assert_eq!(maturity.index(), expected);
    }

    #[test]
    fn gap_score_is_monotonic_and_anchored(gap in 0usize..20) {
        prop_assert!((gap_score(0) - 1.0).abs() < f32::EPSILON);
        prop_assert!(gap_score(gap + 1) <= gap_score(gap));
        prop_assert!(gap_score(gap) > 0.0);
    }

    #[test]
    fn matrix_output_is_deterministic(
        capabilities in prop::collection::vec(arb_capability(), 1..6),
        tier_picks in prop::collection::vec(0usize..4, 1..6),
        modifier in -2i8..=2,
    ) {
        let count = capabilities.len().min(tier_picks.len());
        let mut discipline = discipline_with_tier(None);
        let mut skills = Vec::new();
        for (i, (capability, tier_pick)) in
            capabilities.iter().zip(tier_picks.iter()).take(count).enumerate()
        {
            let id = format!("s{i}");
            skills.push(Skill {
                id: id.clone(),
                name: id.clone(),
                capability: *capability,
                levels: BTreeMap::new(),
                is_human_only: false,
            });
            match tier_pick {
                0 => discipline.core_skills.push(id),
                1 => discipline.supporting_skills.push(id),
                2 => discipline.broad_skills.push(id),
                _ => {}
            }
        }
        let framework = Framework::new(
            skills,
            vec![Behaviour { id: "b".into(), name: "B".into(), levels: BTreeMap::new() }],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
        );
        let grade = grade_with(
            BaseSkillLevels {
                primary: SkillLevel::Practitioner,
                secondary: SkillLevel::Working,
                broad: SkillLevel::Foundational,
            },
            Maturity::Developing,
        );
        let track = track_with(CapabilityId::Ai, modifier);

        let first = derive_skill_matrix(&framework, &discipline, &grade, Some(&track), Audience::Human);
        let second = derive_skill_matrix(&framework, &discipline, &grade, Some(&track), Audience::Human);
        prop_assert_eq!(&first, &second);

        // sorted by tier precedence, then name
        for pair in first.windows(2) {
            prop_assert!(
                (pair[0].tier, &pair[0].name) <= (pair[1].tier, &pair[1].name)
            );
        }
    }
}
