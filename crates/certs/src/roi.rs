//! Return-on-investment heuristics for recommended certifications.

use crate::CertificationRecommendation;
use ridgeline_catalog::{CertCategory, Difficulty};
use serde::{Deserialize, Serialize};

/// Flat annual salary-increase estimate in USD by category and difficulty.
fn annual_increase(category: CertCategory, difficulty: Difficulty) -> u32 {
    match (category, difficulty) {
        (CertCategory::Cloud, Difficulty::Challenging) => 15_000,
        (CertCategory::Cloud, Difficulty::Moderate) => 10_000,
        (CertCategory::Cloud, Difficulty::Easy) => 5_000,
        (CertCategory::Security, Difficulty::Challenging) => 14_000,
        (CertCategory::Security, _) => 8_000,
        (CertCategory::Data, Difficulty::Challenging) => 12_000,
        (CertCategory::Data, Difficulty::Moderate) => 8_000,
        (CertCategory::Data, Difficulty::Easy) => 4_000,
        (CertCategory::Leadership, _) => 9_000,
        (CertCategory::Agile, _) => 4_000,
        (CertCategory::Technical, Difficulty::Challenging) => 10_000,
        (CertCategory::Technical, _) => 6_000,
    }
}

/// Aggregate cost/payoff estimate for a set of recommendations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiEstimate {
    /// Sum of exam costs in USD.
    pub total_cost: u32,
    /// Estimated annual salary increase in USD (highest single estimate;
    /// increases do not stack across certifications).
    pub estimated_annual_increase: u32,
    /// Months of increased salary needed to cover the total cost.
    pub months_to_break_even: u32,
}

/// Estimate ROI across a recommendation list.
pub fn certification_roi(recommendations: &[CertificationRecommendation]) -> RoiEstimate {
    if recommendations.is_empty() {
        return RoiEstimate::default();
    }

    let total_cost: u32 = recommendations.iter().map(|rec| rec.cost).sum();
    let estimated_annual_increase = recommendations
        .iter()
        .map(|rec| annual_increase(rec.category, rec.difficulty))
        .max()
        .unwrap_or(0);

    let monthly_increase = estimated_annual_increase / 12;
    let months_to_break_even = if monthly_increase == 0 {
        0
    } else {
        total_cost.div_ceil(monthly_increase)
    };

    RoiEstimate {
        total_cost,
        estimated_annual_increase,
        months_to_break_even,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeline_catalog::Relevance;

    fn recommendation(
        category: CertCategory,
        difficulty: Difficulty,
        cost: u32,
    ) -> CertificationRecommendation {
        CertificationRecommendation {
            name: "Cert".to_string(),
            provider: "Vendor".to_string(),
            category,
            relevance: Relevance::Recommended,
            cost,
            difficulty,
            matched_skills: Vec::new(),
            preparation_resources: Vec::new(),
        }
    }

    #[test]
    fn empty_list_yields_zero_estimate() {
        assert_eq!(certification_roi(&[]), RoiEstimate::default());
    }

    #[test]
    fn break_even_divides_cost_by_monthly_increase() {
        let recs = vec![recommendation(CertCategory::Cloud, Difficulty::Moderate, 150)];
        let roi = certification_roi(&recs);
        assert_eq!(roi.total_cost, 150);
        assert_eq!(roi.estimated_annual_increase, 10_000);
        // 10_000 / 12 = 833 per month; 150 / 833 rounds up to 1.
        assert_eq!(roi.months_to_break_even, 1);
    }

    #[test]
    fn costs_sum_but_increases_do_not_stack() {
        let recs = vec![
            recommendation(CertCategory::Cloud, Difficulty::Challenging, 395),
            recommendation(CertCategory::Agile, Difficulty::Easy, 450),
        ];
        let roi = certification_roi(&recs);
        assert_eq!(roi.total_cost, 845);
        assert_eq!(roi.estimated_annual_increase, 15_000);
        assert_eq!(roi.months_to_break_even, 845u32.div_ceil(15_000 / 12));
    }

    #[test]
    fn every_table_cell_is_positive() {
        for category in [
            CertCategory::Technical,
            CertCategory::Cloud,
            CertCategory::Security,
            CertCategory::Data,
            CertCategory::Leadership,
            CertCategory::Agile,
        ] {
            for difficulty in [Difficulty::Easy, Difficulty::Moderate, Difficulty::Challenging] {
                assert!(annual_increase(category, difficulty) > 0);
            }
        }
    }
}
