//! Inauspicious stars (신살).
//!
//! Three families of predicate:
//!
//! - day stem × target branch: 羊刃, 飛刃, 落井關, 紅艶
//! - day branch's triad × target branch: 驛馬, 桃花, 華蓋 (the day pillar itself is skipped)
//! - month branch × hour branch: day-general clash

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::branch::EarthlyBranch as B;
use crate::branch_relation::{Triad, triad_of};
use crate::pillars::{ALL_PILLARS, FourPillars, Pillar};
use crate::stem::HeavenlyStem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InauspiciousStar {
    /// 羊刃
    Yangin,
    /// 飛刃
    Biin,
    /// 落井關殺
    Nakjeong,
    /// 紅艶殺
    Hongyeom,
    /// 驛馬殺
    Yeokma,
    /// 桃花殺
    Dohwa,
    /// 華蓋殺
    Hwagae,
    /// Month and hour branches in the 子未 丑午 寅酉 卯申 辰亥 巳戌 set.
    DayGeneralClash,
}

pub const ALL_INAUSPICIOUS_STARS: [InauspiciousStar; 8] = [
    InauspiciousStar::Yangin,
    InauspiciousStar::Biin,
    InauspiciousStar::Nakjeong,
    InauspiciousStar::Hongyeom,
    InauspiciousStar::Yeokma,
    InauspiciousStar::Dohwa,
    InauspiciousStar::Hwagae,
    InauspiciousStar::DayGeneralClash,
];

/// Stars keyed by the day stem.
pub const STEM_KEYED_STARS: [InauspiciousStar; 4] = [
    InauspiciousStar::Yangin,
    InauspiciousStar::Biin,
    InauspiciousStar::Nakjeong,
    InauspiciousStar::Hongyeom,
];

/// Stars keyed by the day branch's triad.
pub const TRIAD_KEYED_STARS: [InauspiciousStar; 3] = [
    InauspiciousStar::Yeokma,
    InauspiciousStar::Dohwa,
    InauspiciousStar::Hwagae,
];

impl InauspiciousStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yangin => "Yangin",
            Self::Biin => "Biin",
            Self::Nakjeong => "Nakjeong",
            Self::Hongyeom => "Hongyeom",
            Self::Yeokma => "Yeokma",
            Self::Dohwa => "Dohwa",
            Self::Hwagae => "Hwagae",
            Self::DayGeneralClash => "Day-General Clash",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Yangin => "羊刃",
            Self::Biin => "飛刃",
            Self::Nakjeong => "落井關",
            Self::Hongyeom => "紅艶",
            Self::Yeokma => "驛馬",
            Self::Dohwa => "桃花",
            Self::Hwagae => "華蓋",
            Self::DayGeneralClash => "怨嗔",
        }
    }
}

impl std::fmt::Display for InauspiciousStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Target branch per day stem 甲..癸.
#[rustfmt::skip]
const YANGIN: [EarthlyBranch; 10] = [B::Myo, B::Jin, B::O, B::Mi, B::O, B::Mi, B::Yu, B::Sul, B::Ja, B::Chuk];
#[rustfmt::skip]
const BIIN: [EarthlyBranch; 10] = [B::Yu, B::Sul, B::Ja, B::Chuk, B::Ja, B::Chuk, B::Myo, B::Jin, B::O, B::Mi];
#[rustfmt::skip]
const NAKJEONG: [EarthlyBranch; 10] = [B::Sa, B::Ja, B::Sin, B::Sul, B::Myo, B::Sa, B::Ja, B::Sin, B::Sul, B::Myo];
#[rustfmt::skip]
const HONGYEOM: [EarthlyBranch; 10] = [B::O, B::O, B::In, B::Mi, B::Jin, B::Jin, B::Sul, B::Yu, B::Ja, B::Sin];

const DAY_GENERAL_CLASH: [(EarthlyBranch, EarthlyBranch); 6] = [
    (B::Ja, B::Mi),
    (B::Chuk, B::O),
    (B::In, B::Yu),
    (B::Myo, B::Sin),
    (B::Jin, B::Hae),
    (B::Sa, B::Sul),
];

/// Target branch of a day-stem star, `None` for the other families.
pub fn stem_star_branch(star: InauspiciousStar, day_stem: HeavenlyStem) -> Option<EarthlyBranch> {
    let i = day_stem.index() as usize;
    match star {
        InauspiciousStar::Yangin => Some(YANGIN[i]),
        InauspiciousStar::Biin => Some(BIIN[i]),
        InauspiciousStar::Nakjeong => Some(NAKJEONG[i]),
        InauspiciousStar::Hongyeom => Some(HONGYEOM[i]),
        _ => None,
    }
}

/// Target branch of a triad star for the day branch, `None` for the other families.
pub fn triad_star_branch(star: InauspiciousStar, day_branch: EarthlyBranch) -> Option<EarthlyBranch> {
    let triad = triad_of(day_branch);
    match star {
        InauspiciousStar::Yeokma => Some(match triad {
            Triad::Water => B::In,
            Triad::Fire => B::Sin,
            Triad::Metal => B::Hae,
            Triad::Wood => B::Sa,
        }),
        InauspiciousStar::Dohwa => Some(match triad {
            Triad::Water => B::Yu,
            Triad::Fire => B::Myo,
            Triad::Metal => B::O,
            Triad::Wood => B::Ja,
        }),
        InauspiciousStar::Hwagae => Some(match triad {
            Triad::Water => B::Jin,
            Triad::Fire => B::Sul,
            Triad::Metal => B::Chuk,
            Triad::Wood => B::Mi,
        }),
        _ => None,
    }
}

/// Whether a day-stem star falls on `target`.
pub fn is_stem_star(star: InauspiciousStar, day_stem: HeavenlyStem, target: EarthlyBranch) -> bool {
    stem_star_branch(star, day_stem) == Some(target)
}

/// Whether a triad star falls on `target`.
pub fn is_triad_star(star: InauspiciousStar, day_branch: EarthlyBranch, target: EarthlyBranch) -> bool {
    triad_star_branch(star, day_branch) == Some(target)
}

/// Day-general clash between two branches (unordered).
pub fn is_day_general_clash(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    DAY_GENERAL_CLASH
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Stars landing on one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarStars {
    pub pillar: Pillar,
    pub stars: Vec<InauspiciousStar>,
}

/// Inauspicious stars per pillar, all four pillars in chart order.
pub fn inauspicious_stars(pillars: &FourPillars) -> Vec<PillarStars> {
    let day_stem = pillars.day.stem();
    let day_branch = pillars.day.branch();
    let general_clash = is_day_general_clash(pillars.month.branch(), pillars.hour.branch());

    ALL_PILLARS
        .into_iter()
        .map(|pillar| {
            let target = pillars.get(pillar).branch();
            let mut stars: Vec<InauspiciousStar> = STEM_KEYED_STARS
                .into_iter()
                .filter(|&s| is_stem_star(s, day_stem, target))
                .collect();
            if pillar != Pillar::Day {
                stars.extend(
                    TRIAD_KEYED_STARS
                        .into_iter()
                        .filter(|&s| is_triad_star(s, day_branch, target)),
                );
            }
            if general_clash && matches!(pillar, Pillar::Month | Pillar::Hour) {
                stars.push(InauspiciousStar::DayGeneralClash);
            }
            PillarStars { pillar, stars }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch_relation::is_clash;
    use crate::pair::SexagenaryPair;
    use crate::stem::ALL_STEMS;
    use crate::stem::HeavenlyStem as S;
    use chrono::NaiveDate;
    use saju_time::Gender;

    #[test]
    fn biin_clashes_yangin() {
        for s in ALL_STEMS {
            let y = stem_star_branch(InauspiciousStar::Yangin, s).unwrap();
            let b = stem_star_branch(InauspiciousStar::Biin, s).unwrap();
            assert!(is_clash(y, b), "{s}");
        }
    }

    #[test]
    fn nakjeong_follows_stem_combination() {
        for s in ALL_STEMS {
            assert_eq!(
                stem_star_branch(InauspiciousStar::Nakjeong, s),
                stem_star_branch(InauspiciousStar::Nakjeong, s.combination_partner()),
            );
        }
    }

    #[test]
    fn triad_stars() {
        assert!(is_triad_star(InauspiciousStar::Yeokma, B::Ja, B::In));
        assert!(is_triad_star(InauspiciousStar::Dohwa, B::O, B::Myo));
        assert!(is_triad_star(InauspiciousStar::Hwagae, B::Yu, B::Chuk));
        assert!(!is_triad_star(InauspiciousStar::Yangin, B::Ja, B::In));
        assert_eq!(stem_star_branch(InauspiciousStar::Dohwa, S::Gap), None);
    }

    #[test]
    fn general_clash_unordered() {
        assert!(is_day_general_clash(B::Mi, B::Ja));
        assert!(is_day_general_clash(B::Sul, B::Sa));
        assert!(!is_day_general_clash(B::Ja, B::O));
    }

    fn pillars(year: &str, month: &str, day: &str, hour: &str) -> FourPillars {
        let p = |s: &str| s.parse::<SexagenaryPair>().unwrap();
        FourPillars {
            year: p(year),
            month: p(month),
            day: p(day),
            hour: p(hour),
            birth_year: 2000,
            gender: Gender::Male,
            time_known: true,
            civil: NaiveDate::from_ymd_opt(2000, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn chart_scan() {
        // day 甲子: 羊刃 卯, 飛刃 酉, 驛馬 寅, 桃花 酉; 寅 month × 酉 hour is a general clash
        let chart = pillars("癸卯", "丙寅", "甲子", "癸酉");
        let found = inauspicious_stars(&chart);
        assert_eq!(found.len(), 4);
        assert_eq!(found[0].stars, vec![InauspiciousStar::Yangin]);
        assert_eq!(
            found[1].stars,
            vec![InauspiciousStar::Yeokma, InauspiciousStar::DayGeneralClash]
        );
        assert!(found[2].stars.is_empty());
        assert_eq!(
            found[3].stars,
            vec![
                InauspiciousStar::Biin,
                InauspiciousStar::Dohwa,
                InauspiciousStar::DayGeneralClash
            ]
        );
    }

    #[test]
    fn day_pillar_skips_triad_stars() {
        // day 甲辰: 華蓋 for 申子辰 is 辰 itself
        let chart = pillars("甲子", "丙子", "甲辰", "甲子");
        let found = inauspicious_stars(&chart);
        assert!(!found[2].stars.contains(&InauspiciousStar::Hwagae));
    }
}
