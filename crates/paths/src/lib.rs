//! Learning-path generation for the ridgeline roadmap engine.
//!
//! Partitions analyzed gaps into five fixed themed buckets, attaches catalog
//! resources (with free placeholders on a catalog miss), filters by budget,
//! and derives per-path cost bands, duration, and difficulty.

mod buckets;
mod resources;

use buckets::Bucket;
use ridgeline_catalog::{CandidateProfile, CostType, Difficulty, LearningResource};
use ridgeline_gaps::{format_months, SkillGap};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Subscriptions are assumed to run for one to three months.
const SUBSCRIPTION_MIN_MONTHS: u32 = 1;
const SUBSCRIPTION_MAX_MONTHS: u32 = 3;

/// Estimated spend band in USD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBand {
    pub min: u32,
    pub max: u32,
}

/// A themed bundle of resources targeting a subset of gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    /// Presentation order; unique and ascending across the returned list.
    pub order: u8,
    pub title: String,
    pub description: String,
    /// Names of the gaps this path targets.
    pub target_skills: Vec<String>,
    /// Budget-filtered resources, deduplicated by title.
    pub resources: Vec<LearningResource>,
    pub estimated_cost: CostBand,
    /// Human-readable duration, driven by the slowest gap in the bundle.
    pub duration: String,
    /// Hardest constituent gap.
    pub difficulty: Difficulty,
}

/// Build one learning path per non-empty bucket.
pub fn generate_learning_paths(
    gaps: &[SkillGap],
    profile: &CandidateProfile,
) -> Vec<LearningPath> {
    let mut paths = Vec::new();
    let mut order = 1u8;

    for bucket in Bucket::ALL {
        let members = bucket.select(gaps);
        if members.is_empty() {
            continue;
        }

        let mut resources = Vec::new();
        let mut seen_titles = HashSet::new();
        for gap in &members {
            for resource in resources::resolve_resources(gap) {
                if resources::within_budget(&resource, profile.budget)
                    && seen_titles.insert(resource.title.clone())
                {
                    resources.push(resource);
                }
            }
        }

        let slowest_months = members
            .iter()
            .map(|gap| gap.estimated_months)
            .fold(0.0_f64, f64::max);
        let difficulty = members
            .iter()
            .map(|gap| gap.difficulty)
            .max()
            .unwrap_or(Difficulty::Easy);

        paths.push(LearningPath {
            order,
            title: bucket.title().to_string(),
            description: bucket.description().to_string(),
            target_skills: members.iter().map(|gap| gap.skill.clone()).collect(),
            estimated_cost: cost_band(&resources),
            resources,
            duration: format_months(slowest_months),
            difficulty,
        });
        order += 1;
    }

    debug!(paths = paths.len(), budget = profile.budget, "learning paths generated");
    paths
}

/// Sum resource costs into a band: one-time costs count once, subscription
/// costs are multiplied by the assumed month range.
fn cost_band(resources: &[LearningResource]) -> CostBand {
    let mut band = CostBand::default();
    for resource in resources {
        match resource.cost_type {
            CostType::Free => {}
            CostType::OneTime => {
                band.min += resource.cost;
                band.max += resource.cost;
            }
            CostType::Subscription => {
                band.min += resource.cost * SUBSCRIPTION_MIN_MONTHS;
                band.max += resource.cost * SUBSCRIPTION_MAX_MONTHS;
            }
        }
    }
    band
}
