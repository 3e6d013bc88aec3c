//! Milestone templates walked off the timeline's phase boundaries.

use crate::CareerTimeline;
use ridgeline_gaps::{GapAnalysis, GapPriority};
use serde::{Deserialize, Serialize};

/// What a milestone demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneKind {
    Learning,
    Project,
    Certification,
    Career,
}

/// A dated checkpoint within the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub kind: MilestoneKind,
    /// Month offset from the start of the plan, 1..=total.
    pub target_month: u32,
    pub priority: GapPriority,
    pub completion_criteria: String,
}

/// Midpoint of a window, never before month 1.
fn midpoint(start: u32, end: u32) -> u32 {
    ((start + end).div_ceil(2)).max(1)
}

/// Emit the fixed milestone set against the four phase windows.
pub fn generate_milestones(timeline: &CareerTimeline, analysis: &GapAnalysis) -> Vec<Milestone> {
    let [foundation, building, practice, search] = match timeline.phases.as_slice() {
        [a, b, c, d] => [a, b, c, d],
        // A timeline always carries four phases; anything else gets no milestones.
        _ => return Vec::new(),
    };
    let has_critical = analysis.critical_gap_count() > 0;

    vec![
        Milestone {
            title: "First course completed".to_string(),
            kind: MilestoneKind::Learning,
            target_month: midpoint(foundation.start_month, foundation.end_month),
            priority: GapPriority::High,
            completion_criteria: "One course from a critical or high-priority path finished \
                                  end to end."
                .to_string(),
        },
        Milestone {
            title: "Foundation phase complete".to_string(),
            kind: MilestoneKind::Learning,
            target_month: foundation.end_month.max(1),
            priority: if has_critical {
                GapPriority::Critical
            } else {
                GapPriority::High
            },
            completion_criteria: "Study routine held for the whole phase and every critical \
                                  gap has an active learning plan."
                .to_string(),
        },
        Milestone {
            title: "First portfolio project shipped".to_string(),
            kind: MilestoneKind::Project,
            target_month: midpoint(building.start_month, building.end_month),
            priority: GapPriority::High,
            completion_criteria: "A working project using the new skills is public and \
                                  reviewed by a peer."
                .to_string(),
        },
        Milestone {
            title: "Core coursework finished".to_string(),
            kind: MilestoneKind::Learning,
            target_month: building.end_month.max(1),
            priority: GapPriority::Medium,
            completion_criteria: "All courses on critical and high-priority paths completed."
                .to_string(),
        },
        Milestone {
            title: "Target certification earned".to_string(),
            kind: MilestoneKind::Certification,
            target_month: midpoint(practice.start_month, practice.end_month),
            priority: GapPriority::Medium,
            completion_criteria: "The highest-relevance recommended certification passed, \
                                  if one applies to the target role."
                .to_string(),
        },
        Milestone {
            title: "Portfolio and resume updated".to_string(),
            kind: MilestoneKind::Career,
            target_month: practice.end_month.max(1),
            priority: GapPriority::High,
            completion_criteria: "Resume, portfolio, and profiles reflect the new skill set."
                .to_string(),
        },
        Milestone {
            title: "Interview loop ready".to_string(),
            kind: MilestoneKind::Career,
            target_month: midpoint(search.start_month, search.end_month),
            priority: GapPriority::High,
            completion_criteria: "Three mock interviews completed with positive feedback on \
                                  the previously weak areas."
                .to_string(),
        },
        Milestone {
            title: format!("{} offer accepted", timeline.role_title),
            kind: MilestoneKind::Career,
            target_month: timeline.total_months.max(1),
            priority: GapPriority::Critical,
            completion_criteria: "Signed offer for the target role or an equivalent internal \
                                  promotion."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_career_timeline;
    use ridgeline_catalog::CandidateProfile;
    use ridgeline_gaps::analyze_skills_gap;

    fn fixtures() -> (CareerTimeline, GapAnalysis) {
        let profile = CandidateProfile {
            current_role: "Software Engineer".to_string(),
            target_role: "Senior Software Engineer".to_string(),
            skills: Vec::new(),
            time_per_week_hours: 10,
            budget: 500,
            certifications: Vec::new(),
            experience_years: 3,
        };
        let analysis = analyze_skills_gap(&profile, &profile.target_role);
        let timeline = generate_career_timeline(&analysis, &profile, &profile.target_role);
        (timeline, analysis)
    }

    #[test]
    fn emits_the_full_template_set() {
        let (timeline, analysis) = fixtures();
        let milestones = generate_milestones(&timeline, &analysis);
        assert_eq!(milestones.len(), 8);
    }

    #[test]
    fn milestones_are_dated_within_the_plan() {
        let (timeline, analysis) = fixtures();
        for milestone in generate_milestones(&timeline, &analysis) {
            assert!(milestone.target_month >= 1, "{}", milestone.title);
            assert!(
                milestone.target_month <= timeline.total_months,
                "{}",
                milestone.title
            );
        }
    }

    #[test]
    fn milestone_months_never_regress() {
        let (timeline, analysis) = fixtures();
        let months: Vec<u32> = generate_milestones(&timeline, &analysis)
            .iter()
            .map(|milestone| milestone.target_month)
            .collect();
        for window in months.windows(2) {
            assert!(window[0] <= window[1], "{:?}", months);
        }
    }

    #[test]
    fn final_milestone_lands_on_the_last_month() {
        let (timeline, analysis) = fixtures();
        let milestones = generate_milestones(&timeline, &analysis);
        let last = milestones.last().expect("milestones exist");
        assert_eq!(last.target_month, timeline.total_months);
        assert_eq!(last.kind, MilestoneKind::Career);
        assert!(last.title.contains("Senior Software Engineer"));
    }

    #[test]
    fn foundation_exit_is_critical_when_critical_gaps_exist() {
        let (timeline, analysis) = fixtures();
        assert!(analysis.critical_gap_count() > 0);
        let milestones = generate_milestones(&timeline, &analysis);
        let foundation_exit = milestones
            .iter()
            .find(|milestone| milestone.title == "Foundation phase complete")
            .expect("present");
        assert_eq!(foundation_exit.priority, GapPriority::Critical);
    }
}
