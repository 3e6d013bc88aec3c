//! Career timeline calculation for the ridgeline roadmap engine.
//!
//! Turns a gap analysis and the candidate's study constraints into a total
//! duration, four contiguous phases with canned goal/activity/metric text,
//! and a list of dated milestones.

mod milestones;

pub use milestones::{generate_milestones, Milestone, MilestoneKind};

use ridgeline_catalog::CandidateProfile;
use ridgeline_gaps::{GapAnalysis, GapPriority, ReadinessLevel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Study-time multiplier thresholds, hours per week.
const LIGHT_STUDY_HOURS: u32 = 10;
const HEAVY_STUDY_HOURS: u32 = 20;

/// Phase window ratios: 25% / 35% / 20% / 20% of the total.
const PHASE_BOUNDARY_RATIOS: [f64; 3] = [0.25, 0.60, 0.80];

/// One window of the four-phase schedule. Months are offsets from the start
/// of the plan; `start_month` is inclusive, `end_month` exclusive, and phase
/// n's end equals phase n+1's start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub name: String,
    pub start_month: u32,
    pub end_month: u32,
    pub goals: Vec<String>,
    pub activities: Vec<String>,
    pub success_metrics: Vec<String>,
}

/// Phased schedule toward the target role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerTimeline {
    /// Title of the target role.
    pub role_title: String,
    /// Total plan length in months.
    pub total_months: u32,
    /// Four contiguous phases partitioning `[0, total_months]`.
    pub phases: Vec<TimelinePhase>,
    pub assumptions: Vec<String>,
    pub accelerators: Vec<String>,
    pub risks: Vec<String>,
}

/// Build the phased timeline.
///
/// Base months come from the readiness band (ready 3, advanced 6,
/// intermediate 12, beginner 18), scaled by weekly study time (x1.5 under
/// 10h, x0.75 at 20h or more) and extended when critical gaps pile up
/// (+2 months above three, +3 above five).
pub fn generate_career_timeline(
    analysis: &GapAnalysis,
    profile: &CandidateProfile,
    target_role: &str,
) -> CareerTimeline {
    let base_months = base_months(analysis.readiness);
    let factor = study_factor(profile.time_per_week_hours);
    let critical_gaps = analysis.critical_gap_count();
    let total_months =
        (f64::from(base_months) * factor).ceil() as u32 + critical_bump(critical_gaps);

    let phases = build_phases(total_months, analysis);
    debug!(
        role = %target_role,
        total_months,
        critical_gaps,
        factor,
        "career timeline generated"
    );

    CareerTimeline {
        role_title: analysis.role_title.clone(),
        total_months,
        phases,
        assumptions: assumptions(profile),
        accelerators: accelerators(),
        risks: risks(critical_gaps),
    }
}

fn base_months(readiness: ReadinessLevel) -> u32 {
    match readiness {
        ReadinessLevel::Ready => 3,
        ReadinessLevel::Advanced => 6,
        ReadinessLevel::Intermediate => 12,
        ReadinessLevel::Beginner => 18,
    }
}

fn study_factor(hours_per_week: u32) -> f64 {
    if hours_per_week < LIGHT_STUDY_HOURS {
        1.5
    } else if hours_per_week >= HEAVY_STUDY_HOURS {
        0.75
    } else {
        1.0
    }
}

fn critical_bump(critical_gaps: usize) -> u32 {
    if critical_gaps > 5 {
        3
    } else if critical_gaps > 3 {
        2
    } else {
        0
    }
}

/// Round-half-up phase boundaries on the fixed ratios. Boundaries are
/// monotone, so windows never overlap; very small totals may produce a
/// zero-width phase.
fn phase_boundaries(total_months: u32) -> [u32; 4] {
    let total = f64::from(total_months);
    [
        (total * PHASE_BOUNDARY_RATIOS[0]).round() as u32,
        (total * PHASE_BOUNDARY_RATIOS[1]).round() as u32,
        (total * PHASE_BOUNDARY_RATIOS[2]).round() as u32,
        total_months,
    ]
}

fn build_phases(total_months: u32, analysis: &GapAnalysis) -> Vec<TimelinePhase> {
    let boundaries = phase_boundaries(total_months);
    let critical_skills: Vec<&str> = analysis
        .gaps
        .iter()
        .filter(|gap| gap.priority == GapPriority::Critical)
        .map(|gap| gap.skill.as_str())
        .take(3)
        .collect();
    let focus = if critical_skills.is_empty() {
        "your highest-priority gaps".to_string()
    } else {
        critical_skills.join(", ")
    };

    vec![
        TimelinePhase {
            name: "Foundation".to_string(),
            start_month: 0,
            end_month: boundaries[0],
            goals: vec![
                format!("Establish a weekly study routine focused on {focus}."),
                "Baseline every gap with a self-assessment or practice test.".to_string(),
            ],
            activities: vec![
                "Enroll in the first course of each critical learning path.".to_string(),
                "Block recurring study time on your calendar.".to_string(),
            ],
            success_metrics: vec![
                "Four consecutive weeks hitting planned study hours.".to_string(),
                "First course finished or at 50% progress.".to_string(),
            ],
        },
        TimelinePhase {
            name: "Skill Building".to_string(),
            start_month: boundaries[0],
            end_month: boundaries[1],
            goals: vec![
                "Move each critical gap up at least one proficiency level.".to_string(),
                "Apply new skills in a real project, not just coursework.".to_string(),
            ],
            activities: vec![
                "Work through the remaining courses in priority order.".to_string(),
                "Ship a portfolio project that exercises the new skills.".to_string(),
            ],
            success_metrics: vec![
                "One shipped project reviewed by a peer or mentor.".to_string(),
                "Critical-path coursework complete.".to_string(),
            ],
        },
        TimelinePhase {
            name: "Applied Practice".to_string(),
            start_month: boundaries[1],
            end_month: boundaries[2],
            goals: vec![
                "Demonstrate the skills publicly or at work.".to_string(),
                "Close the remaining medium-priority gaps.".to_string(),
            ],
            activities: vec![
                "Take on stretch assignments that match the target role.".to_string(),
                "Sit any planned certification exams.".to_string(),
            ],
            success_metrics: vec![
                "Stretch assignment or certification completed.".to_string(),
                "Portfolio updated with recent work.".to_string(),
            ],
        },
        TimelinePhase {
            name: "Job Search & Transition".to_string(),
            start_month: boundaries[2],
            end_month: boundaries[3],
            goals: vec![
                format!("Land a {} offer.", analysis.role_title),
                "Interview from a position of demonstrated competence.".to_string(),
            ],
            activities: vec![
                "Refresh resume and online profiles around the new skills.".to_string(),
                "Run weekly application and mock-interview cycles.".to_string(),
            ],
            success_metrics: vec![
                "Steady interview pipeline with conversion past phone screens.".to_string(),
                "Offer accepted.".to_string(),
            ],
        },
    ]
}

fn assumptions(profile: &CandidateProfile) -> Vec<String> {
    vec![
        format!(
            "{} hours per week of study time, held consistently.",
            profile.time_per_week_hours
        ),
        "Proficiency estimates in your profile are accurate.".to_string(),
        "Learning time scales with the standard per-category month rates.".to_string(),
    ]
}

fn accelerators() -> Vec<String> {
    vec![
        "Increasing study time to 20+ hours per week shortens the plan by a quarter.".to_string(),
        "A mentor already in the target role compresses the applied-practice phase.".to_string(),
        "Stretch assignments at your current job double as both practice and evidence."
            .to_string(),
    ]
}

fn risks(critical_gaps: usize) -> Vec<String> {
    let mut risks = vec![
        "Dropping below 10 hours per week extends the plan by half.".to_string(),
        "Course completion without applied projects rarely moves proficiency past level 3."
            .to_string(),
    ];
    if critical_gaps > 3 {
        risks.push(format!(
            "{critical_gaps} critical gaps is a heavy load; schedule slip is likely if they \
             are attacked in parallel."
        ));
    }
    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeline_catalog::{Skill, SkillCategory};
    use ridgeline_gaps::analyze_skills_gap;

    fn profile(target_role: &str, hours: u32, skills: Vec<Skill>) -> CandidateProfile {
        CandidateProfile {
            current_role: "Software Engineer".to_string(),
            target_role: target_role.to_string(),
            skills,
            time_per_week_hours: hours,
            budget: 500,
            certifications: Vec::new(),
            experience_years: 3,
        }
    }

    fn timeline_for(hours: u32) -> CareerTimeline {
        let profile = profile("Senior Software Engineer", hours, Vec::new());
        let analysis = analyze_skills_gap(&profile, &profile.target_role);
        generate_career_timeline(&analysis, &profile, &profile.target_role)
    }

    #[test]
    fn base_months_follow_readiness_bands() {
        assert_eq!(base_months(ReadinessLevel::Ready), 3);
        assert_eq!(base_months(ReadinessLevel::Advanced), 6);
        assert_eq!(base_months(ReadinessLevel::Intermediate), 12);
        assert_eq!(base_months(ReadinessLevel::Beginner), 18);
    }

    #[test]
    fn study_factor_thresholds_are_exact() {
        assert_eq!(study_factor(9), 1.5);
        assert_eq!(study_factor(10), 1.0);
        assert_eq!(study_factor(19), 1.0);
        assert_eq!(study_factor(20), 0.75);
        assert_eq!(study_factor(40), 0.75);
    }

    #[test]
    fn critical_bump_thresholds_are_exact() {
        assert_eq!(critical_bump(3), 0);
        assert_eq!(critical_bump(4), 2);
        assert_eq!(critical_bump(5), 2);
        assert_eq!(critical_bump(6), 3);
    }

    #[test]
    fn scenario_c_more_study_time_means_strictly_fewer_months() {
        let fast = timeline_for(30);
        let slow = timeline_for(5);
        assert!(
            fast.total_months < slow.total_months,
            "{} !< {}",
            fast.total_months,
            slow.total_months
        );
    }

    #[test]
    fn phases_partition_the_total_without_gaps() {
        for hours in [5, 10, 15, 20, 30] {
            let timeline = timeline_for(hours);
            assert_eq!(timeline.phases.len(), 4);
            assert_eq!(timeline.phases[0].start_month, 0);
            assert_eq!(timeline.phases[3].end_month, timeline.total_months);
            for window in timeline.phases.windows(2) {
                assert_eq!(window[0].end_month, window[1].start_month);
            }
            for phase in &timeline.phases {
                assert!(phase.start_month <= phase.end_month, "{}", phase.name);
            }
        }
    }

    #[test]
    fn blank_senior_profile_stays_below_the_bump_threshold() {
        // Blank profile against the senior role has three critical gaps
        // (the three level-4 required skills), which is below the bump
        // threshold; the beginner base applies with the light-study factor.
        let timeline = timeline_for(5);
        assert_eq!(timeline.total_months, 27); // ceil(18 * 1.5)
    }

    #[test]
    fn ready_candidate_gets_the_short_runway() {
        let skills = vec![
            Skill::new("JavaScript/TypeScript", SkillCategory::Technical, 4),
            Skill::new("System Design", SkillCategory::Technical, 4),
            Skill::new("Data Structures & Algorithms", SkillCategory::Technical, 4),
            Skill::new("Testing & Quality", SkillCategory::Technical, 3),
            Skill::new("Code Review", SkillCategory::Soft, 3),
            Skill::new("Mentorship", SkillCategory::Leadership, 3),
            Skill::new("Cloud Architecture", SkillCategory::Technical, 3),
            Skill::new("CI/CD", SkillCategory::Technical, 3),
            Skill::new("Project Estimation", SkillCategory::Domain, 4),
        ];
        let profile = profile("Senior Software Engineer", 15, skills);
        let analysis = analyze_skills_gap(&profile, &profile.target_role);
        let timeline = generate_career_timeline(&analysis, &profile, &profile.target_role);
        assert_eq!(timeline.total_months, 3);
    }

    #[test]
    fn risks_mention_heavy_critical_load() {
        assert!(risks(6).iter().any(|risk| risk.contains("6 critical gaps")));
        assert_eq!(risks(2).len(), 2);
    }

    #[test]
    fn phase_goals_name_critical_skills() {
        let timeline = timeline_for(10);
        assert!(timeline.phases[0]
            .goals
            .iter()
            .any(|goal| goal.contains("JavaScript/TypeScript")));
    }
}
