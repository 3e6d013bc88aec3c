//! Plain-text report rendering.
//!
//! Every renderer returns a `String`; the caller decides where it goes.
//! JSON output bypasses this module entirely.

use crate::roadmap::Roadmap;
use ridgeline_catalog::{CostType, LearningResource, RoleRequirements};
use ridgeline_certs::{certification_preparation_tips, CertificationRecommendation, RoiEstimate};
use ridgeline_gaps::GapAnalysis;
use ridgeline_paths::LearningPath;
use ridgeline_timeline::{CareerTimeline, Milestone};
use std::fmt::Write;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));
}

fn resource_cost(resource: &LearningResource) -> String {
    match resource.cost_type {
        CostType::Free => "free".to_string(),
        CostType::OneTime => format!("${}", resource.cost),
        CostType::Subscription => format!("${}/mo", resource.cost),
    }
}

/// Render the role catalog as a browsable list.
pub fn render_roles(roles: &[RoleRequirements]) -> String {
    let mut out = String::new();
    heading(&mut out, "Known roles");
    for role in roles {
        let _ = writeln!(
            out,
            "  {} ({}-{} yrs, ${}-${}): {} required, {} preferred skills",
            role.title,
            role.experience.min_years,
            role.experience.max_years,
            role.salary.min,
            role.salary.max,
            role.required_skills.len(),
            role.preferred_skills.len(),
        );
    }
    out
}

/// Render a gap analysis with its development recommendations.
pub fn render_analysis(analysis: &GapAnalysis, recommendations: &[String]) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("Skills gap: {}", analysis.role_title));
    let _ = writeln!(
        out,
        "Gap score: {:.0}/100 ({})",
        analysis.gap_score,
        analysis.readiness.label()
    );
    let _ = writeln!(out, "{}", analysis.summary);
    if !analysis.gaps.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Gaps ({}):", analysis.gaps.len());
        for gap in &analysis.gaps {
            let _ = writeln!(
                out,
                "  [{}] {} ({}): level {} -> {}, {} ({})",
                gap.priority.label(),
                gap.skill,
                gap.category.label(),
                gap.current_level,
                gap.required_level,
                gap.estimated_time_to_learn,
                gap.difficulty.label(),
            );
        }
    }
    if !recommendations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recommendations:");
        for line in recommendations {
            let _ = writeln!(out, "  - {line}");
        }
    }
    out
}

/// Render the learning path bundles in presentation order.
pub fn render_paths(paths: &[LearningPath]) -> String {
    let mut out = String::new();
    heading(&mut out, "Learning paths");
    if paths.is_empty() {
        let _ = writeln!(out, "No gaps to plan around.");
        return out;
    }
    for path in paths {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}. {} ({}, {})",
            path.order,
            path.title,
            path.duration,
            path.difficulty.label()
        );
        let _ = writeln!(out, "   {}", path.description);
        let _ = writeln!(out, "   Skills: {}", path.target_skills.join(", "));
        let _ = writeln!(
            out,
            "   Estimated cost: ${}-${}",
            path.estimated_cost.min, path.estimated_cost.max
        );
        for resource in &path.resources {
            let _ = writeln!(
                out,
                "   - {} ({}, {}): {}",
                resource.title,
                resource.kind.label(),
                resource_cost(resource),
                resource.provider,
            );
        }
    }
    out
}

/// Render the phased timeline and its milestones.
pub fn render_timeline(timeline: &CareerTimeline, milestones: &[Milestone]) -> String {
    let mut out = String::new();
    heading(
        &mut out,
        &format!(
            "Timeline: {} in ~{} months",
            timeline.role_title, timeline.total_months
        ),
    );
    for phase in &timeline.phases {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} (months {}-{})",
            phase.name, phase.start_month, phase.end_month
        );
        for goal in &phase.goals {
            let _ = writeln!(out, "  Goal: {goal}");
        }
        for activity in &phase.activities {
            let _ = writeln!(out, "  Do: {activity}");
        }
        for metric in &phase.success_metrics {
            let _ = writeln!(out, "  Done when: {metric}");
        }
    }
    if !milestones.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Milestones:");
        for milestone in milestones {
            let _ = writeln!(
                out,
                "  month {:>2}: {} [{}]",
                milestone.target_month,
                milestone.title,
                milestone.priority.label()
            );
        }
    }
    for (label, lines) in [
        ("Assumptions", &timeline.assumptions),
        ("Accelerators", &timeline.accelerators),
        ("Risks", &timeline.risks),
    ] {
        if lines.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{label}:");
        for line in lines {
            let _ = writeln!(out, "  - {line}");
        }
    }
    out
}

/// Render certification recommendations with preparation tips and ROI.
pub fn render_certs(
    recommendations: &[CertificationRecommendation],
    roi: &RoiEstimate,
) -> String {
    let mut out = String::new();
    heading(&mut out, "Certifications");
    if recommendations.is_empty() {
        let _ = writeln!(out, "No certifications to recommend for this role.");
        return out;
    }
    for recommendation in recommendations {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} ({}, {}, ${}, {})",
            recommendation.name,
            recommendation.provider,
            recommendation.relevance.label(),
            recommendation.cost,
            recommendation.difficulty.label(),
        );
        if !recommendation.matched_skills.is_empty() {
            let _ = writeln!(
                out,
                "  Covers gaps: {}",
                recommendation.matched_skills.join(", ")
            );
        }
        for tip in certification_preparation_tips(recommendation) {
            let _ = writeln!(out, "  - {tip}");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "ROI: ${} total exam cost, ~${}/yr salary increase, breaks even in ~{} months",
        roi.total_cost, roi.estimated_annual_increase, roi.months_to_break_even
    );
    out
}

/// Render the full roadmap: every section in reading order.
pub fn render_roadmap(roadmap: &Roadmap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Career roadmap: {}", roadmap.role_title);
    let _ = writeln!(out);
    out.push_str(&render_analysis(&roadmap.analysis, &roadmap.recommendations));
    let _ = writeln!(out);
    out.push_str(&render_paths(&roadmap.learning_paths));
    let _ = writeln!(out);
    out.push_str(&render_timeline(&roadmap.timeline, &roadmap.milestones));
    let _ = writeln!(out);
    out.push_str(&render_certs(&roadmap.certifications, &roadmap.roi));
    out
}
