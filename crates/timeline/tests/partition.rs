use proptest::prelude::*;
use ridgeline_catalog::{CandidateProfile, Skill, SkillCategory};
use ridgeline_timeline::{generate_career_timeline, generate_milestones};

fn arbitrary_profile() -> impl Strategy<Value = CandidateProfile> {
    let skill = (
        prop_oneof![
            Just("JavaScript/TypeScript"),
            Just("System Design"),
            Just("Python"),
            Just("Mentorship"),
            Just("SQL & Databases"),
        ],
        0u8..=5,
    )
        .prop_map(|(name, level)| Skill::new(name, SkillCategory::Technical, level));

    let role = prop_oneof![
        Just("Senior Software Engineer".to_string()),
        Just("Staff Software Engineer".to_string()),
        Just("Data Scientist".to_string()),
        Just("Unknown Role".to_string()),
    ];

    (prop::collection::vec(skill, 0..8), role, 0u32..=60).prop_map(
        |(skills, target_role, hours)| CandidateProfile {
            current_role: "Engineer".to_string(),
            target_role,
            skills,
            time_per_week_hours: hours,
            budget: 500,
            certifications: Vec::new(),
            experience_years: 2,
        },
    )
}

proptest! {
    #[test]
    fn phases_partition_zero_to_total(profile in arbitrary_profile()) {
        let analysis = ridgeline_gaps::analyze_skills_gap(&profile, &profile.target_role);
        let timeline = generate_career_timeline(&analysis, &profile, &profile.target_role);

        prop_assert_eq!(timeline.phases.len(), 4);
        prop_assert_eq!(timeline.phases[0].start_month, 0);
        prop_assert_eq!(
            timeline.phases[3].end_month,
            timeline.total_months
        );
        for window in timeline.phases.windows(2) {
            prop_assert_eq!(window[0].end_month, window[1].start_month);
        }
        for phase in &timeline.phases {
            prop_assert!(phase.start_month <= phase.end_month);
        }
    }

    #[test]
    fn milestones_always_fit_inside_the_plan(profile in arbitrary_profile()) {
        let analysis = ridgeline_gaps::analyze_skills_gap(&profile, &profile.target_role);
        let timeline = generate_career_timeline(&analysis, &profile, &profile.target_role);
        let milestones = generate_milestones(&timeline, &analysis);

        prop_assert_eq!(milestones.len(), 8);
        for milestone in &milestones {
            prop_assert!(milestone.target_month >= 1);
            prop_assert!(milestone.target_month <= timeline.total_months);
        }
    }
}
