//! Development guidance derived from an analysis result.

use crate::types::{GapAnalysis, GapPriority, ReadinessLevel};
use ridgeline_catalog::SkillCategory;

/// Canned development guidance keyed on readiness and gap categories.
pub fn skill_development_recommendations(analysis: &GapAnalysis) -> Vec<String> {
    if analysis.gaps.is_empty() {
        return vec![format!(
            "No tracked gaps for {}. Keep your skills current and focus on interview practice.",
            analysis.role_title
        )];
    }

    let mut recommendations = Vec::new();
    recommendations.push(match analysis.readiness {
        ReadinessLevel::Ready => {
            "Polish the remaining gaps while you start interviewing; none of them should block \
             applications."
                .to_string()
        }
        ReadinessLevel::Advanced => {
            "Target the critical gaps over the next quarter and keep the rest as background \
             learning."
                .to_string()
        }
        ReadinessLevel::Intermediate => {
            "Split your weekly study time between one critical gap and one supporting skill; \
             depth beats breadth at this stage."
                .to_string()
        }
        ReadinessLevel::Beginner => {
            "Build fundamentals first: pick the single most critical gap and work it to a \
             comfortable level before adding more subjects."
                .to_string()
        }
    });

    let critical: Vec<&str> = analysis
        .gaps
        .iter()
        .filter(|gap| gap.priority == GapPriority::Critical)
        .map(|gap| gap.skill.as_str())
        .take(3)
        .collect();
    if !critical.is_empty() {
        recommendations.push(format!("Close critical gaps first: {}.", critical.join(", ")));
    }

    let has_category = |category: SkillCategory| {
        analysis.gaps.iter().any(|gap| gap.category == category)
    };
    if has_category(SkillCategory::Technical) {
        recommendations.push(
            "For technical gaps, ship small projects that exercise each skill; courses alone \
             will not move your level past 3."
                .to_string(),
        );
    }
    if has_category(SkillCategory::Leadership) {
        recommendations.push(
            "For leadership gaps, volunteer for mentoring, interviewing, or project-lead duties \
             in your current role; these skills only grow in practice."
                .to_string(),
        );
    }
    if has_category(SkillCategory::Soft) {
        recommendations.push(
            "For communication gaps, seek regular writing and presenting reps: design docs, \
             demos, and brown-bag talks."
                .to_string(),
        );
    }
    if has_category(SkillCategory::Domain) {
        recommendations.push(
            "For domain gaps, shadow people already doing the target role and study how your \
             current team makes those decisions."
                .to_string(),
        );
    }

    recommendations
}
