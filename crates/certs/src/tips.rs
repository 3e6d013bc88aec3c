//! Preparation guidance for a recommended certification.

use crate::CertificationRecommendation;
use ridgeline_catalog::{CertCategory, Difficulty};

/// Canned preparation tips keyed on the certification's difficulty and
/// category, prefixed by its catalog preparation resources.
pub fn certification_preparation_tips(
    recommendation: &CertificationRecommendation,
) -> Vec<String> {
    let mut tips: Vec<String> = recommendation
        .preparation_resources
        .iter()
        .map(|resource| format!("Work through: {resource}"))
        .collect();

    tips.push(match recommendation.difficulty {
        Difficulty::Easy => {
            "Plan two to four weeks of preparation; a single practice exam pass is usually \
             enough to confirm readiness."
                .to_string()
        }
        Difficulty::Moderate => {
            "Plan six to ten weeks of preparation and take at least two timed practice exams \
             before booking the real one."
                .to_string()
        }
        Difficulty::Challenging => {
            "Plan three to six months of preparation; schedule the exam only after practice \
             scores are consistently above the pass mark."
                .to_string()
        }
    });

    tips.push(match recommendation.category {
        CertCategory::Cloud => {
            "Do every lab in a real cloud account; the exams reward hands-on recall over \
             memorized documentation."
                .to_string()
        }
        CertCategory::Security => {
            "Build a home lab and practice the attack/defense scenarios; scenario questions \
             dominate these exams."
                .to_string()
        }
        CertCategory::Data => {
            "Re-implement the course exercises on a dataset from your own domain; transfer is \
             what interviewers probe."
                .to_string()
        }
        CertCategory::Leadership | CertCategory::Agile => {
            "Tie every framework concept to a situation you have actually handled; the exams \
             and the interviews both reward applied examples."
                .to_string()
        }
        CertCategory::Technical => {
            "Pair the study material with a small project per topic area; retention without \
             application fades within weeks."
                .to_string()
        }
    });

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeline_catalog::Relevance;

    fn recommendation(difficulty: Difficulty, category: CertCategory) -> CertificationRecommendation {
        CertificationRecommendation {
            name: "Cert".to_string(),
            provider: "Vendor".to_string(),
            category,
            relevance: Relevance::Recommended,
            cost: 100,
            difficulty,
            matched_skills: Vec::new(),
            preparation_resources: vec!["Official study guide".to_string()],
        }
    }

    #[test]
    fn catalog_resources_lead_the_tip_list() {
        let tips =
            certification_preparation_tips(&recommendation(Difficulty::Easy, CertCategory::Cloud));
        assert!(tips[0].contains("Official study guide"));
        assert_eq!(tips.len(), 3);
    }

    #[test]
    fn difficulty_drives_the_preparation_window() {
        let easy =
            certification_preparation_tips(&recommendation(Difficulty::Easy, CertCategory::Cloud));
        let hard = certification_preparation_tips(&recommendation(
            Difficulty::Challenging,
            CertCategory::Cloud,
        ));
        assert!(easy.iter().any(|tip| tip.contains("two to four weeks")));
        assert!(hard.iter().any(|tip| tip.contains("three to six months")));
    }

    #[test]
    fn category_tip_matches_the_category() {
        let tips = certification_preparation_tips(&recommendation(
            Difficulty::Moderate,
            CertCategory::Security,
        ));
        assert!(tips.iter().any(|tip| tip.contains("home lab")));
    }
}
