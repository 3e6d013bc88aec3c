//! Skills-gap analysis against a role's requirements.

use crate::types::{GapAnalysis, GapPriority, ReadinessLevel, SkillGap};
use ridgeline_catalog::{lookup_role, CandidateProfile, Difficulty, SkillCategory, SkillTarget};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Diff a candidate's skills against a target role.
///
/// Total over its input domain: unknown roles resolve to the generic
/// fallback and produce an empty gap list. Only deficits are reported
/// (`current_level < required_level` for every emitted gap).
pub fn analyze_skills_gap(profile: &CandidateProfile, target_role: &str) -> GapAnalysis {
    let role = lookup_role(target_role);
    let current_levels: HashMap<String, u8> = profile
        .skills
        .iter()
        .map(|skill| (skill.name.trim().to_lowercase(), skill.proficiency))
        .collect();

    let required = role.required_skills.iter().map(|target| (target, true));
    let preferred = role.preferred_skills.iter().map(|target| (target, false));

    let mut gaps = Vec::new();
    let mut target_points: u32 = 0;
    let mut unmet_points: u32 = 0;
    // A skill listed in both tiers counts once; the required tier wins.
    let mut seen = HashSet::new();

    for (target, is_required) in required.chain(preferred) {
        if !seen.insert(target.name.trim().to_lowercase()) {
            continue;
        }
        let current = current_levels
            .get(&target.name.trim().to_lowercase())
            .copied()
            .unwrap_or(0);
        target_points += u32::from(target.level);
        unmet_points += u32::from(target.level.saturating_sub(current));

        if current < target.level {
            gaps.push(build_gap(target, current, is_required));
        }
    }

    gaps.sort_by_key(|gap| gap.priority.rank());

    let gap_score = score(unmet_points, target_points);
    let readiness = ReadinessLevel::from_score(gap_score);
    let summary = build_summary(&role.title, readiness, &gaps);
    debug!(
        role = %role.title,
        gaps = gaps.len(),
        gap_score,
        readiness = readiness.label(),
        "skills gap analysis complete"
    );

    GapAnalysis {
        role_title: role.title.clone(),
        gaps,
        gap_score,
        readiness,
        summary,
    }
}

fn build_gap(target: &SkillTarget, current: u8, is_required: bool) -> SkillGap {
    let deficit = target.level.saturating_sub(current);
    let estimated_months = f64::from(deficit) * target.category.months_per_level();
    let priority = gap_priority(is_required, target.level);
    SkillGap {
        skill: target.name.clone(),
        category: target.category,
        current_level: current,
        required_level: target.level,
        priority,
        estimated_months,
        estimated_time_to_learn: format_months(estimated_months),
        difficulty: gap_difficulty(target.category, deficit),
        reasoning: gap_reasoning(target, current, is_required),
    }
}

/// Priority ladder: required targets escalate with their level; preferred
/// targets derive from their own level.
fn gap_priority(is_required: bool, target_level: u8) -> GapPriority {
    if is_required {
        if target_level >= 4 {
            GapPriority::Critical
        } else if target_level >= 3 {
            GapPriority::High
        } else {
            GapPriority::Medium
        }
    } else if target_level >= 4 {
        GapPriority::Medium
    } else {
        GapPriority::Low
    }
}

/// Per-category difficulty thresholds on the level deficit.
fn gap_difficulty(category: SkillCategory, deficit: u8) -> Difficulty {
    match category {
        SkillCategory::Technical | SkillCategory::Domain => {
            if deficit >= 3 {
                Difficulty::Challenging
            } else if deficit >= 2 {
                Difficulty::Moderate
            } else {
                Difficulty::Easy
            }
        }
        SkillCategory::Soft => {
            if deficit >= 4 {
                Difficulty::Challenging
            } else if deficit >= 2 {
                Difficulty::Moderate
            } else {
                Difficulty::Easy
            }
        }
        // Leadership habits take sustained practice; there is no easy tier.
        SkillCategory::Leadership => {
            if deficit >= 2 {
                Difficulty::Challenging
            } else {
                Difficulty::Moderate
            }
        }
    }
}

/// Bucket a raw month estimate into a human-readable range.
pub fn format_months(months: f64) -> String {
    if months <= 2.0 {
        "1-2 months".to_string()
    } else if months <= 4.0 {
        "2-4 months".to_string()
    } else if months <= 6.0 {
        "4-6 months".to_string()
    } else if months <= 9.0 {
        "6-9 months".to_string()
    } else if months <= 12.0 {
        "9-12 months".to_string()
    } else {
        "12+ months".to_string()
    }
}

fn gap_reasoning(target: &SkillTarget, current: u8, is_required: bool) -> String {
    let tier = if is_required { "required" } else { "preferred" };
    if current == 0 {
        format!(
            "{} is {} at level {} for this role and is not on your profile yet.",
            target.name, tier, target.level
        )
    } else {
        format!(
            "{} is {} at level {} for this role; your current level is {}.",
            target.name, tier, target.level, current
        )
    }
}

/// `100 - unmet/total * 100`, clamped into `[0, 100]`. An empty target set
/// (unknown role) scores 100: nothing tracked is unmet.
fn score(unmet_points: u32, target_points: u32) -> f64 {
    if target_points == 0 {
        return 100.0;
    }
    let score = 100.0 - (f64::from(unmet_points) / f64::from(target_points)) * 100.0;
    score.clamp(0.0, 100.0)
}

fn build_summary(role_title: &str, readiness: ReadinessLevel, gaps: &[SkillGap]) -> String {
    let total = gaps.len();
    let critical = gaps
        .iter()
        .filter(|gap| gap.priority == GapPriority::Critical)
        .count();

    if total == 0 {
        return format!("You meet every tracked expectation for {role_title}.");
    }
    match readiness {
        ReadinessLevel::Ready => format!(
            "You meet most expectations for {role_title}. {total} smaller gap(s) remain; \
             closing them will strengthen your candidacy."
        ),
        ReadinessLevel::Advanced => format!(
            "You are close to {role_title}. Focus on the {critical} critical gap(s) first; \
             {total} gap(s) were identified overall."
        ),
        ReadinessLevel::Intermediate => format!(
            "You have a solid base for {role_title}, with {total} gap(s) to close \
             including {critical} critical one(s). A structured plan over several months \
             will get you there."
        ),
        ReadinessLevel::Beginner => format!(
            "{role_title} is an ambitious target from your current profile: {total} gap(s) \
             including {critical} critical one(s). Expect a longer runway and start with \
             the fundamentals."
        ),
    }
}
