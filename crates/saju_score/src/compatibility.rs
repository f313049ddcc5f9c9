//! Two-person compatibility.
//!
//! Four symmetric categories, combined with fixed weights:
//!
//! | category        | weight |
//! |-----------------|--------|
//! | day pillar      | 35 %   |
//! | five elements   | 25 %   |
//! | branch relation | 25 %   |
//! | stars           | 15 %   |

use tracing::debug;

use saju_base::{
    ALL_AUSPICIOUS_STARS, ALL_ELEMENTS, ALL_INAUSPICIOUS_STARS, AuspiciousStar, ChartAnalysis,
    EarthlyBranch, ElementDistribution, HeavenlyStem, SexagenaryPair, guin::star_branches,
    is_clash, is_paired_combination, is_punishment_pair, is_triad_pair,
};

use crate::types::{Category, CategoryScore, Interaction, ScoreResult, clamp_score};

pub const DAY_PILLAR_WEIGHT: i32 = 35;
pub const FIVE_ELEMENT_WEIGHT: i32 = 25;
pub const BRANCH_RELATION_WEIGHT: i32 = 25;
pub const STAR_WEIGHT: i32 = 15;

/// Share of the stem part in the day-pillar category, in percent.
const DAY_STEM_SHARE: u32 = 40;
/// Share of the branch part in the day-pillar category, in percent.
const DAY_BRANCH_SHARE: u32 = 60;

const NEUTRAL: i32 = 50;

// ---------------------------------------------------------------------------
// Day pillar
// ---------------------------------------------------------------------------

/// Stem part of the day-pillar category.
pub fn stem_score(a: HeavenlyStem, b: HeavenlyStem) -> (u8, Option<Interaction>) {
    if a.combines_with(b) {
        return (100, Some(Interaction::StemCombination));
    }
    let (ea, eb) = (a.element(), b.element());
    if ea.generates_either(eb) {
        (80, Some(Interaction::StemGenerating))
    } else if ea == eb {
        (70, Some(Interaction::StemSameElement))
    } else if ea.overcomes_either(eb) {
        (40, Some(Interaction::StemOvercoming))
    } else {
        (50, None)
    }
}

/// Branch part of the day-pillar category.
pub fn branch_score(a: EarthlyBranch, b: EarthlyBranch) -> (u8, Option<Interaction>) {
    if is_paired_combination(a, b) {
        return (100, Some(Interaction::BranchPaired));
    }
    if is_clash(a, b) {
        return (20, Some(Interaction::BranchClash));
    }
    let (ea, eb) = (a.element(), b.element());
    if ea.generates_either(eb) {
        (75, Some(Interaction::BranchGenerating))
    } else if ea == eb {
        (65, Some(Interaction::BranchSameElement))
    } else if ea.overcomes_either(eb) {
        (45, Some(Interaction::BranchOvercoming))
    } else {
        (50, None)
    }
}

pub fn day_pillar_score(a: SexagenaryPair, b: SexagenaryPair) -> (u8, Vec<Interaction>) {
    let (stem, si) = stem_score(a.stem(), b.stem());
    let (branch, bi) = branch_score(a.branch(), b.branch());
    let overall =
        (u32::from(stem) * DAY_STEM_SHARE + u32::from(branch) * DAY_BRANCH_SHARE) / 100;
    (clamp_score(overall as i32), si.into_iter().chain(bi).collect())
}

// ---------------------------------------------------------------------------
// Five elements
// ---------------------------------------------------------------------------

pub fn five_element_score(a: &ElementDistribution, b: &ElementDistribution) -> (u8, Vec<Interaction>) {
    let mut raw = NEUTRAL;
    let mut notes = Vec::new();
    for e in ALL_ELEMENTS {
        match (a.lacks(e), b.lacks(e)) {
            (true, true) => {
                raw -= 15;
                notes.push(Interaction::ElementSharedLack(e));
            }
            (true, false) | (false, true) => {
                raw += 10;
                notes.push(Interaction::ElementComplement(e));
            }
            (false, false) => {}
        }
    }
    if a.strongest.generates_either(b.strongest) {
        raw += 10;
        notes.push(Interaction::StrongestElementsGenerate);
    }
    (clamp_score(raw), notes)
}

// ---------------------------------------------------------------------------
// Branch relations
// ---------------------------------------------------------------------------

/// Net cross-chart relation count: combinations minus clashes and punishments.
pub fn branch_balance(a: &[EarthlyBranch], b: &[EarthlyBranch]) -> i32 {
    let mut net = 0;
    for &x in a {
        for &y in b {
            if is_paired_combination(x, y) {
                net += 1;
            }
            if is_triad_pair(x, y) {
                net += 1;
            }
            if is_clash(x, y) {
                net -= 1;
            }
            if is_punishment_pair(x, y) {
                net -= 1;
            }
        }
    }
    net
}

/// Score for a net relation count.
pub fn branch_balance_score(net: i32) -> u8 {
    match net {
        n if n >= 3 => 95,
        2 => 85,
        1 => 75,
        0 => 60,
        -1 => 45,
        -2 => 35,
        _ => 25,
    }
}

// ---------------------------------------------------------------------------
// Stars
// ---------------------------------------------------------------------------

fn noble_lands_in(from: &ChartAnalysis, to: &ChartAnalysis) -> bool {
    let targets = star_branches(AuspiciousStar::HeavenlyNoble, from.day_master);
    to.branches().iter().any(|b| targets.contains(b))
}

pub fn star_score(a: &ChartAnalysis, b: &ChartAnalysis) -> (u8, Vec<Interaction>) {
    let mut raw = NEUTRAL;
    let mut notes = Vec::new();
    for (from, to) in [(a, b), (b, a)] {
        if noble_lands_in(from, to) {
            raw += 15;
            notes.push(Interaction::HeavenlyNobleExchange);
        }
    }
    for star in ALL_AUSPICIOUS_STARS {
        if a.has_auspicious(star) && b.has_auspicious(star) {
            raw += 10;
            notes.push(Interaction::SharedAuspicious(star));
        }
    }
    for star in ALL_INAUSPICIOUS_STARS {
        if a.has_inauspicious(star) && b.has_inauspicious(star) {
            raw -= 8;
            notes.push(Interaction::SharedInauspicious(star));
        }
    }
    (clamp_score(raw), notes)
}

// ---------------------------------------------------------------------------
// Total
// ---------------------------------------------------------------------------

/// Compatibility of two analysed charts. Symmetric in its arguments.
pub fn score_compatibility(a: &ChartAnalysis, b: &ChartAnalysis) -> ScoreResult {
    let (day, mut interactions) = day_pillar_score(a.pillars.day, b.pillars.day);
    let (elements, notes) = five_element_score(&a.elements, &b.elements);
    interactions.extend(notes);

    let net = branch_balance(&a.branches(), &b.branches());
    let relation = branch_balance_score(net);
    interactions.push(Interaction::BranchBalance(net));

    let (stars, notes) = star_score(a, b);
    interactions.extend(notes);

    let weighted = i32::from(day) * DAY_PILLAR_WEIGHT
        + i32::from(elements) * FIVE_ELEMENT_WEIGHT
        + i32::from(relation) * BRANCH_RELATION_WEIGHT
        + i32::from(stars) * STAR_WEIGHT;
    let total = clamp_score((weighted + 50) / 100);

    debug!(total, day, elements, relation, stars, "compatibility scored");
    ScoreResult {
        total,
        categories: vec![
            CategoryScore {
                category: Category::DayPillar,
                score: day,
            },
            CategoryScore {
                category: Category::FiveElement,
                score: elements,
            },
            CategoryScore {
                category: Category::BranchRelation,
                score: relation,
            },
            CategoryScore {
                category: Category::Star,
                score: stars,
            },
        ],
        interactions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{ALL_STEMS, Element};
    use saju_base::EarthlyBranch as B;
    use saju_base::HeavenlyStem as S;

    #[test]
    fn stem_scores() {
        assert_eq!(stem_score(S::Gap, S::Gi).0, 100);
        assert_eq!(stem_score(S::Gap, S::Byeong).0, 80);
        assert_eq!(stem_score(S::Byeong, S::Gap).0, 80);
        assert_eq!(stem_score(S::Gap, S::Eul).0, 70);
        assert_eq!(stem_score(S::Gap, S::Mu).0, 40);
        assert_eq!(stem_score(S::Mu, S::Gap).0, 40);
    }

    #[test]
    fn stem_score_symmetric_and_never_neutral() {
        for a in ALL_STEMS {
            for b in ALL_STEMS {
                assert_eq!(stem_score(a, b), stem_score(b, a), "{a}{b}");
                assert_ne!(stem_score(a, b).0, 50);
            }
        }
    }

    #[test]
    fn branch_scores() {
        assert_eq!(branch_score(B::Ja, B::Chuk).0, 100);
        assert_eq!(branch_score(B::Ja, B::O).0, 20);
        // 寅 wood, 巳 fire
        assert_eq!(branch_score(B::In, B::Sa).0, 75);
        // 辰 earth, 戌 earth, but they clash
        assert_eq!(branch_score(B::Jin, B::Sul).0, 20);
        assert_eq!(branch_score(B::Jin, B::Chuk).0, 65);
        // 子 water, 巳 fire
        assert_eq!(branch_score(B::Ja, B::Sa).0, 45);
    }

    #[test]
    fn day_pillar_weighting() {
        let p = |s: &str| s.parse::<SexagenaryPair>().unwrap();
        // 甲子 × 己丑: stem 100, branch 100
        assert_eq!(day_pillar_score(p("甲子"), p("己丑")).0, 100);
        // 甲子 × 庚午: stem 40, branch 20 → (1600 + 1200) / 100 = 28
        assert_eq!(day_pillar_score(p("甲子"), p("庚午")).0, 28);
    }

    fn dist(counts: [u8; 5]) -> ElementDistribution {
        let mut strongest = Element::Wood;
        for e in ALL_ELEMENTS {
            if counts[e.index() as usize] > counts[strongest.index() as usize] {
                strongest = e;
            }
        }
        ElementDistribution {
            counts,
            strongest,
            missing: ALL_ELEMENTS
                .into_iter()
                .filter(|e| counts[e.index() as usize] == 0)
                .collect(),
        }
    }

    #[test]
    fn five_elements() {
        // a lacks fire, b has it; both lack metal; strongest wood and fire generate
        let a = dist([4, 0, 2, 0, 2]);
        let b = dist([1, 4, 1, 0, 2]);
        let (score, notes) = five_element_score(&a, &b);
        assert_eq!(score, 50 + 10 - 15 + 10);
        assert!(notes.contains(&Interaction::ElementComplement(Element::Fire)));
        assert!(notes.contains(&Interaction::ElementSharedLack(Element::Metal)));
        assert_eq!(five_element_score(&b, &a).0, score);
    }

    #[test]
    fn five_elements_clamped_low() {
        let a = dist([8, 0, 0, 0, 0]);
        let b = dist([8, 0, 0, 0, 0]);
        // four shared lacks: 50 - 60
        assert_eq!(five_element_score(&a, &b).0, 1);
    }

    #[test]
    fn balance_thresholds() {
        assert_eq!(branch_balance_score(7), 95);
        assert_eq!(branch_balance_score(3), 95);
        assert_eq!(branch_balance_score(2), 85);
        assert_eq!(branch_balance_score(1), 75);
        assert_eq!(branch_balance_score(0), 60);
        assert_eq!(branch_balance_score(-1), 45);
        assert_eq!(branch_balance_score(-2), 35);
        assert_eq!(branch_balance_score(-3), 25);
        assert_eq!(branch_balance_score(-9), 25);
    }

    #[test]
    fn balance_counts_cross_pairs() {
        // 子丑 paired (+1), 子辰 triad (+1), 子午 clash (-1), 子卯 punishment (-1)
        assert_eq!(branch_balance(&[B::Ja], &[B::Chuk]), 1);
        assert_eq!(branch_balance(&[B::Ja], &[B::Jin]), 1);
        assert_eq!(branch_balance(&[B::Ja], &[B::O]), -1);
        assert_eq!(branch_balance(&[B::Ja], &[B::Myo]), -1);
        // 子丑 +1, 子申 +1, 寅丑 0, 寅申 clash and punishment -2
        assert_eq!(branch_balance(&[B::Ja, B::In], &[B::Chuk, B::Sin]), 0);
    }
}
