//! Score results and interaction descriptors.

use serde::{Deserialize, Serialize};

use saju_base::{AuspiciousStar, Element, InauspiciousStar};

/// Lowest score any total or category reports.
pub const MIN_SCORE: u8 = 1;

/// Highest score any total or category reports.
pub const MAX_SCORE: u8 = 100;

/// Clamp a raw score into `[MIN_SCORE, MAX_SCORE]`.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8
}

/// Named sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DayPillar,
    FiveElement,
    BranchRelation,
    Star,
    Career,
    Love,
    Wealth,
    Relationship,
}

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DayPillar => "day_pillar",
            Self::FiveElement => "five_element",
            Self::BranchRelation => "branch_relation",
            Self::Star => "star",
            Self::Career => "career",
            Self::Love => "love",
            Self::Wealth => "wealth",
            Self::Relationship => "relationship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u8,
}

/// Something that moved a score. Carries no prose; [`Interaction::label`] is
/// a short tag for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    /// Stems form a five-combination (甲己 …).
    StemCombination,
    StemIdentical,
    StemSameElement,
    /// One stem's element feeds the other's.
    StemGenerating,
    /// One stem's element restrains the other's.
    StemOvercoming,
    BranchPaired,
    BranchTriad,
    BranchClash,
    BranchSameElement,
    BranchGenerating,
    BranchOvercoming,
    /// Cross-chart branch pairs, net of combinations against clashes and punishments.
    BranchBalance(i32),
    /// One chart supplies an element the other lacks.
    ElementComplement(Element),
    /// Neither chart has the element.
    ElementSharedLack(Element),
    StrongestElementsGenerate,
    /// One chart's 天乙 branches appear in the other.
    HeavenlyNobleExchange,
    SharedAuspicious(AuspiciousStar),
    SharedInauspicious(InauspiciousStar),
    AuspiciousActive(AuspiciousStar),
    /// Star penalized in the total.
    InauspiciousActive(InauspiciousStar),
    /// Star that only shifts category scores, never the total.
    CategoryStar(InauspiciousStar),
}

impl Interaction {
    pub fn label(self) -> String {
        match self {
            Self::StemCombination => "stem combination".into(),
            Self::StemIdentical => "identical stem".into(),
            Self::StemSameElement => "stems share element".into(),
            Self::StemGenerating => "stems generate".into(),
            Self::StemOvercoming => "stems overcome".into(),
            Self::BranchPaired => "paired combination".into(),
            Self::BranchTriad => "triad combination".into(),
            Self::BranchClash => "branch clash".into(),
            Self::BranchSameElement => "branches share element".into(),
            Self::BranchGenerating => "branches generate".into(),
            Self::BranchOvercoming => "branches overcome".into(),
            Self::BranchBalance(net) => format!("branch balance {net:+}"),
            Self::ElementComplement(e) => format!("{e} complemented"),
            Self::ElementSharedLack(e) => format!("{e} lacking in both"),
            Self::StrongestElementsGenerate => "strongest elements generate".into(),
            Self::HeavenlyNobleExchange => "heavenly noble exchange".into(),
            Self::SharedAuspicious(s) => format!("shared {}", s.hanja()),
            Self::SharedInauspicious(s) => format!("shared {}", s.hanja()),
            Self::AuspiciousActive(s) => s.hanja().to_string(),
            Self::InauspiciousActive(s) => s.hanja().to_string(),
            Self::CategoryStar(s) => format!("{} (category only)", s.hanja()),
        }
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Output of either scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total: u8,
    pub categories: Vec<CategoryScore>,
    pub interactions: Vec<Interaction>,
}

impl ScoreResult {
    pub fn category(&self, category: Category) -> Option<u8> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_score(-40), 1);
        assert_eq!(clamp_score(0), 1);
        assert_eq!(clamp_score(57), 57);
        assert_eq!(clamp_score(250), 100);
    }

    #[test]
    fn labels() {
        assert_eq!(Interaction::BranchBalance(2).label(), "branch balance +2");
        assert_eq!(Interaction::BranchBalance(-1).label(), "branch balance -1");
        assert_eq!(
            Interaction::ElementComplement(Element::Fire).to_string(),
            "Fire complemented"
        );
        assert_eq!(
            Interaction::InauspiciousActive(InauspiciousStar::Yangin).label(),
            "羊刃"
        );
        assert_eq!(
            Interaction::CategoryStar(InauspiciousStar::Yeokma).label(),
            "驛馬 (category only)"
        );
    }

    #[test]
    fn category_lookup() {
        let r = ScoreResult {
            total: 60,
            categories: vec![CategoryScore {
                category: Category::Love,
                score: 70,
            }],
            interactions: vec![],
        };
        assert_eq!(r.category(Category::Love), Some(70));
        assert_eq!(r.category(Category::Wealth), None);
    }
}
