//! Auspicious stars (귀인).
//!
//! Each star maps a key stem (the day stem, or the month stem for 天廚) to
//! one or two target branches. A star is active when any chart branch is a
//! target.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::branch::EarthlyBranch as B;
use crate::pillars::{ALL_PILLARS, FourPillars, Pillar};
use crate::stem::HeavenlyStem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AuspiciousStar {
    /// 天乙貴人
    HeavenlyNoble,
    /// 文昌貴人
    Literary,
    /// 學堂貴人
    Academy,
    /// 金輿
    GoldenCarriage,
    /// 暗祿
    HiddenProsperity,
    /// 天廚貴人
    HeavenlyKitchen,
}

pub const ALL_AUSPICIOUS_STARS: [AuspiciousStar; 6] = [
    AuspiciousStar::HeavenlyNoble,
    AuspiciousStar::Literary,
    AuspiciousStar::Academy,
    AuspiciousStar::GoldenCarriage,
    AuspiciousStar::HiddenProsperity,
    AuspiciousStar::HeavenlyKitchen,
];

impl AuspiciousStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "Heavenly Noble",
            Self::Literary => "Literary",
            Self::Academy => "Academy",
            Self::GoldenCarriage => "Golden Carriage",
            Self::HiddenProsperity => "Hidden Prosperity",
            Self::HeavenlyKitchen => "Heavenly Kitchen",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "天乙貴人",
            Self::Literary => "文昌貴人",
            Self::Academy => "學堂貴人",
            Self::GoldenCarriage => "金輿",
            Self::HiddenProsperity => "暗祿",
            Self::HeavenlyKitchen => "天廚貴人",
        }
    }

    /// Pillar whose stem keys the lookup.
    pub const fn key_pillar(self) -> Pillar {
        match self {
            Self::HeavenlyKitchen => Pillar::Month,
            _ => Pillar::Day,
        }
    }

    const fn table(self) -> &'static [&'static [EarthlyBranch]; 10] {
        match self {
            Self::HeavenlyNoble => &HEAVENLY_NOBLE,
            Self::Literary => &LITERARY,
            Self::Academy => &ACADEMY,
            Self::GoldenCarriage => &GOLDEN_CARRIAGE,
            Self::HiddenProsperity => &HIDDEN_PROSPERITY,
            Self::HeavenlyKitchen => &HEAVENLY_KITCHEN,
        }
    }
}

impl std::fmt::Display for AuspiciousStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

// ---------------------------------------------------------------------------
// Tables, keyed by stem 甲..癸
// ---------------------------------------------------------------------------

#[rustfmt::skip]
const HEAVENLY_NOBLE: [&[EarthlyBranch]; 10] = [
    &[B::Chuk, B::Mi], &[B::Ja, B::Sin], &[B::Hae, B::Yu], &[B::Hae, B::Yu], &[B::Chuk, B::Mi],
    &[B::Ja, B::Sin], &[B::Chuk, B::Mi], &[B::In, B::O], &[B::Sa, B::Myo], &[B::Sa, B::Myo],
];

#[rustfmt::skip]
const LITERARY: [&[EarthlyBranch]; 10] = [
    &[B::Sa], &[B::O], &[B::Sin], &[B::Yu], &[B::Sin],
    &[B::Yu], &[B::Hae], &[B::Ja], &[B::In], &[B::Myo],
];

#[rustfmt::skip]
const ACADEMY: [&[EarthlyBranch]; 10] = [
    &[B::Hae], &[B::O], &[B::In], &[B::Yu], &[B::In],
    &[B::Yu], &[B::Sa], &[B::Ja], &[B::Sin], &[B::Myo],
];

#[rustfmt::skip]
const GOLDEN_CARRIAGE: [&[EarthlyBranch]; 10] = [
    &[B::Jin], &[B::Sa], &[B::Mi], &[B::Sin], &[B::Mi],
    &[B::Sin], &[B::Sul], &[B::Hae], &[B::Chuk], &[B::In],
];

#[rustfmt::skip]
const HIDDEN_PROSPERITY: [&[EarthlyBranch]; 10] = [
    &[B::Hae], &[B::Sul], &[B::Sin], &[B::Mi], &[B::Sin],
    &[B::Mi], &[B::Sa], &[B::Jin], &[B::In], &[B::Chuk],
];

#[rustfmt::skip]
const HEAVENLY_KITCHEN: [&[EarthlyBranch]; 10] = [
    &[B::Sa], &[B::O], &[B::Sa], &[B::O], &[B::Sin],
    &[B::Yu], &[B::Hae], &[B::Ja], &[B::In], &[B::Myo],
];

/// Target branches of a star for its key stem.
pub fn star_branches(star: AuspiciousStar, key_stem: HeavenlyStem) -> &'static [EarthlyBranch] {
    star.table()[key_stem.index() as usize]
}

pub fn is_star_branch(star: AuspiciousStar, key_stem: HeavenlyStem, branch: EarthlyBranch) -> bool {
    star_branches(star, key_stem).contains(&branch)
}

/// An active auspicious star and where it landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarActivation {
    pub star: AuspiciousStar,
    /// Target branches for this chart.
    pub targets: Vec<EarthlyBranch>,
    /// Pillars whose branch is a target.
    pub pillars: Vec<Pillar>,
}

/// Every auspicious star active in the chart, in [`ALL_AUSPICIOUS_STARS`] order.
pub fn auspicious_stars(pillars: &FourPillars) -> Vec<StarActivation> {
    ALL_AUSPICIOUS_STARS
        .into_iter()
        .filter_map(|star| {
            let key = pillars.get(star.key_pillar()).stem();
            let targets = star_branches(star, key);
            let matched: Vec<Pillar> = ALL_PILLARS
                .into_iter()
                .filter(|&p| targets.contains(&pillars.get(p).branch()))
                .collect();
            (!matched.is_empty()).then(|| StarActivation {
                star,
                targets: targets.to_vec(),
                pillars: matched,
            })
        })
        .collect()
}
