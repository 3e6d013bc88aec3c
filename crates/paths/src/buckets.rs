//! Fixed themed buckets that partition gaps into learning paths.

use ridgeline_catalog::{Difficulty, SkillCategory};
use ridgeline_gaps::{GapPriority, SkillGap};

/// The five fixed path themes, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bucket {
    Critical,
    Technical,
    LeadershipSoft,
    Domain,
    QuickWins,
}

impl Bucket {
    pub(crate) const ALL: [Bucket; 5] = [
        Bucket::Critical,
        Bucket::Technical,
        Bucket::LeadershipSoft,
        Bucket::Domain,
        Bucket::QuickWins,
    ];

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Self::Critical => "Critical Skills First",
            Self::Technical => "Technical Foundations",
            Self::LeadershipSoft => "Leadership & Communication",
            Self::Domain => "Domain Knowledge",
            Self::QuickWins => "Quick Wins",
        }
    }

    pub(crate) fn description(&self) -> &'static str {
        match self {
            Self::Critical => {
                "Role-blocking gaps; close these before anything else."
            }
            Self::Technical => "Core technical skills the role expects day to day.",
            Self::LeadershipSoft => {
                "People skills that compound slowly; start them early and practice weekly."
            }
            Self::Domain => "Context about how the target role makes decisions.",
            Self::QuickWins => {
                "Medium-priority gaps you can close fast for early momentum; may overlap \
                 the themed paths above."
            }
        }
    }

    /// Select the gaps belonging to this bucket.
    ///
    /// The first four buckets are disjoint: critical gaps go to `Critical`
    /// and the rest split by category. `QuickWins` intentionally overlaps
    /// the category buckets.
    pub(crate) fn select<'a>(&self, gaps: &'a [SkillGap]) -> Vec<&'a SkillGap> {
        gaps.iter()
            .filter(|gap| match self {
                Self::Critical => gap.priority == GapPriority::Critical,
                Self::Technical => {
                    gap.priority != GapPriority::Critical
                        && gap.category == SkillCategory::Technical
                }
                Self::LeadershipSoft => {
                    gap.priority != GapPriority::Critical
                        && matches!(
                            gap.category,
                            SkillCategory::Leadership | SkillCategory::Soft
                        )
                }
                Self::Domain => {
                    gap.priority != GapPriority::Critical && gap.category == SkillCategory::Domain
                }
                Self::QuickWins => {
                    gap.priority == GapPriority::Medium && gap.difficulty <= Difficulty::Moderate
                }
            })
            .collect()
    }
}
