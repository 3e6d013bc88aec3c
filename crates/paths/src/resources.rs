//! Resource resolution and budget filtering for learning paths.

use ridgeline_catalog::{
    resources_for, CostType, Difficulty, LearningResource, ResourceKind,
};
use ridgeline_gaps::SkillGap;
use tracing::debug;

/// Catalog resources for a gap, or two synthesized free placeholders when
/// the catalog has no matching set.
pub(crate) fn resolve_resources(gap: &SkillGap) -> Vec<LearningResource> {
    if let Some(resources) = resources_for(&gap.skill) {
        return resources.to_vec();
    }
    debug!(skill = %gap.skill, "synthesizing placeholder resources");
    vec![
        LearningResource {
            kind: ResourceKind::Course,
            title: format!("Learn {}", gap.skill),
            provider: "Self-paced".to_string(),
            cost: 0,
            cost_type: CostType::Free,
            difficulty: Difficulty::Easy,
        },
        LearningResource {
            kind: ResourceKind::Practice,
            title: format!("{} Exercises", gap.skill),
            provider: "Practice platforms".to_string(),
            cost: 0,
            cost_type: CostType::Free,
            difficulty: Difficulty::Moderate,
        },
    ]
}

/// A single resource may claim at most a fifth of the total budget.
pub(crate) fn within_budget(resource: &LearningResource, budget: u32) -> bool {
    resource.cost <= budget / 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeline_catalog::SkillCategory;
    use ridgeline_gaps::GapPriority;

    fn gap(skill: &str) -> SkillGap {
        SkillGap {
            skill: skill.to_string(),
            category: SkillCategory::Technical,
            current_level: 0,
            required_level: 3,
            priority: GapPriority::High,
            estimated_months: 9.0,
            estimated_time_to_learn: "6-9 months".to_string(),
            difficulty: Difficulty::Challenging,
            reasoning: String::new(),
        }
    }

    #[test]
    fn catalog_hit_returns_catalog_resources() {
        let resources = resolve_resources(&gap("Python"));
        assert!(resources.iter().any(|resource| resource.title == "Fluent Python"));
    }

    #[test]
    fn catalog_miss_synthesizes_two_free_placeholders() {
        let resources = resolve_resources(&gap("Quantum Basket Weaving"));
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].title, "Learn Quantum Basket Weaving");
        assert_eq!(resources[1].title, "Quantum Basket Weaving Exercises");
        assert!(resources.iter().all(|resource| resource.cost == 0));
    }

    #[test]
    fn budget_filter_takes_a_fifth_of_the_budget() {
        let resource = LearningResource {
            kind: ResourceKind::Course,
            title: "Course".to_string(),
            provider: "Provider".to_string(),
            cost: 100,
            cost_type: CostType::OneTime,
            difficulty: Difficulty::Easy,
        };
        assert!(within_budget(&resource, 500));
        assert!(!within_budget(&resource, 499));
    }

    #[test]
    fn zero_budget_only_admits_free_resources() {
        let mut resource = LearningResource {
            kind: ResourceKind::Course,
            title: "Course".to_string(),
            provider: "Provider".to_string(),
            cost: 1,
            cost_type: CostType::OneTime,
            difficulty: Difficulty::Easy,
        };
        assert!(!within_budget(&resource, 0));
        resource.cost = 0;
        assert!(within_budget(&resource, 0));
    }
}
