//! Certification recommendations for the ridgeline roadmap engine.
//!
//! Filters the static certification catalog against the candidate's held
//! credentials, the analyzed skill gaps, and a role-keyword category
//! allow-list, then ranks by relevance and cost. Companion modules estimate
//! return on investment and emit preparation guidance.

mod roi;
mod tips;

pub use roi::{certification_roi, RoiEstimate};
pub use tips::certification_preparation_tips;

use ridgeline_catalog::{
    certification_catalog, CandidateProfile, CertCategory, Certification, Difficulty, Relevance,
};
use ridgeline_gaps::GapAnalysis;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A catalog certification selected for this candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationRecommendation {
    pub name: String,
    pub provider: String,
    pub category: CertCategory,
    pub relevance: Relevance,
    /// Exam cost in USD.
    pub cost: u32,
    pub difficulty: Difficulty,
    /// Gap skills this certification addresses; empty for essential
    /// certifications selected on relevance alone.
    pub matched_skills: Vec<String>,
    pub preparation_resources: Vec<String>,
}

/// Role-keyword checks mapping a target role onto allowed categories.
/// Scanned in order; the first keyword hit wins. Roles matching no keyword
/// allow every category.
const CATEGORY_ALLOW_LIST: &[(&[&str], &[CertCategory])] = &[
    (
        &["devops", "sre", "platform", "infrastructure"],
        &[
            CertCategory::Cloud,
            CertCategory::Security,
            CertCategory::Technical,
        ],
    ),
    (
        &["data", "scientist", "analyst", "machine learning"],
        &[CertCategory::Data, CertCategory::Cloud, CertCategory::Technical],
    ),
    (
        &["manager", "lead", "director", "product"],
        &[CertCategory::Leadership, CertCategory::Agile],
    ),
    (
        &["developer", "engineer", "architect"],
        &[
            CertCategory::Technical,
            CertCategory::Cloud,
            CertCategory::Security,
        ],
    ),
];

fn allowed_categories(target_role: &str) -> Option<&'static [CertCategory]> {
    let role = target_role.to_lowercase();
    CATEGORY_ALLOW_LIST
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| role.contains(keyword)))
        .map(|(_, categories)| *categories)
}

/// Gap skills covered by a certification, by bidirectional substring match
/// on the catalog's lowercase skill keywords.
fn matched_skills(certification: &Certification, analysis: &GapAnalysis) -> Vec<String> {
    analysis
        .gaps
        .iter()
        .filter(|gap| {
            let name = gap.skill.to_lowercase();
            certification
                .skills
                .iter()
                .any(|keyword| name.contains(keyword.as_str()) || keyword.contains(&name))
        })
        .map(|gap| gap.skill.clone())
        .collect()
}

/// Recommend certifications for the candidate.
///
/// A catalog entry is kept when it is (a) not already held, (b) overlaps the
/// analyzed gaps or is marked essential, and (c) passes the role-keyword
/// category allow-list. Results sort by relevance rank, then ascending cost.
pub fn recommend_certifications(
    analysis: &GapAnalysis,
    profile: &CandidateProfile,
    target_role: &str,
) -> Vec<CertificationRecommendation> {
    let held: Vec<String> = profile
        .certifications
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect();
    let allowed = allowed_categories(target_role);

    let mut recommendations: Vec<CertificationRecommendation> = certification_catalog()
        .iter()
        .filter(|certification| !held.contains(&certification.name.to_lowercase()))
        .filter(|certification| {
            allowed.map_or(true, |categories| {
                categories.contains(&certification.category)
            })
        })
        .filter_map(|certification| {
            let matched = matched_skills(certification, analysis);
            if matched.is_empty() && certification.relevance != Relevance::Essential {
                return None;
            }
            Some(CertificationRecommendation {
                name: certification.name.clone(),
                provider: certification.provider.clone(),
                category: certification.category,
                relevance: certification.relevance,
                cost: certification.cost,
                difficulty: certification.difficulty,
                matched_skills: matched,
                preparation_resources: certification.preparation_resources.clone(),
            })
        })
        .collect();

    recommendations.sort_by_key(|rec| (rec.relevance.rank(), rec.cost));
    debug!(
        role = %target_role,
        count = recommendations.len(),
        "certification recommendations generated"
    );
    recommendations
}
