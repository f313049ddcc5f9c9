//! Day-relative fortune ("today's fortune").
//!
//! Today's day pillar (00:00, no rollover) is compared against a person's
//! chart. The raw factors are capped and weighted into a total:
//!
//! ```text
//! total = 50 + 0.50·clamp(stem + branch, 0, 35)
//!            + 0.25·clamp(43 + stars, 0, 43)
//!            + 0.15·clamp(auspicious, 0, 32)
//!            + 0.10·clamp(heuristic, 0, 5)
//! ```
//!
//! Category scores then adjust the total for specific factors. 驛馬 and 桃花
//! on today's branch feed only the career and love categories and are
//! reported as [`Interaction::CategoryStar`].

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use saju_base::sinsal::{STEM_KEYED_STARS, is_stem_star, is_triad_star};
use saju_base::{
    ALL_AUSPICIOUS_STARS, AuspiciousStar, ChartAnalysis, HeavenlyStem, InauspiciousStar,
    SexagenaryPair, day_pillar_of, guin::is_star_branch, is_clash, is_paired_combination,
    is_triad_pair,
};

use crate::types::{Category, CategoryScore, Interaction, ScoreResult, clamp_score};

const BASE: i32 = 50;
const STEM_BRANCH_CAP: i32 = 35;
/// Sum of all star penalties; stars are scored as headroom left below it.
const STAR_HEADROOM: i32 = 43;
/// Sum of all auspicious bonuses.
const AUSPICIOUS_CAP: i32 = 32;
const HEURISTIC_CAP: i32 = 5;

/// Weekday bonus, Monday first.
pub const WEEKDAY_BONUS: [i32; 7] = [2, 1, 1, 1, 2, 2, 1];

/// Stem factor: identical +8, generating either way +15, overcoming either way −10.
pub fn stem_factor(person: HeavenlyStem, today: HeavenlyStem) -> (i32, Option<Interaction>) {
    let (a, b) = (person.element(), today.element());
    if person == today {
        (8, Some(Interaction::StemIdentical))
    } else if a.generates_either(b) {
        (15, Some(Interaction::StemGenerating))
    } else if a.overcomes_either(b) {
        (-10, Some(Interaction::StemOvercoming))
    } else {
        (0, None)
    }
}

pub const fn star_penalty(star: InauspiciousStar) -> i32 {
    match star {
        InauspiciousStar::Yangin => -15,
        InauspiciousStar::Biin => -10,
        InauspiciousStar::Nakjeong => -10,
        InauspiciousStar::Hongyeom => -8,
        _ => 0,
    }
}

pub const fn auspicious_bonus(star: AuspiciousStar) -> i32 {
    match star {
        AuspiciousStar::HeavenlyNoble => 10,
        AuspiciousStar::Literary => 6,
        AuspiciousStar::Academy => 5,
        AuspiciousStar::GoldenCarriage => 4,
        AuspiciousStar::HiddenProsperity => 4,
        AuspiciousStar::HeavenlyKitchen => 3,
    }
}

fn is_monthly_marker(date: NaiveDate) -> bool {
    matches!(date.day(), 1 | 15)
}

/// Calendar heuristic: weekday bonus, +2 on the 1st or 15th, +1 in months
/// 1/4/7/10, capped at 5.
pub fn heuristic_bonus(date: NaiveDate) -> i32 {
    let mut bonus = WEEKDAY_BONUS[date.weekday().num_days_from_monday() as usize];
    if is_monthly_marker(date) {
        bonus += 2;
    }
    if matches!(date.month(), 1 | 4 | 7 | 10) {
        bonus += 1;
    }
    bonus.min(HEURISTIC_CAP)
}

/// Everything today's pillar triggers against a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Factors {
    stem: i32,
    branch: i32,
    stars: i32,
    auspicious: i32,
    triad: bool,
    paired: bool,
    clash: bool,
    active_stars: Vec<InauspiciousStar>,
    active_auspicious: Vec<AuspiciousStar>,
    interactions: Vec<Interaction>,
}

fn factors(person: &ChartAnalysis, today: SexagenaryPair) -> Factors {
    let mut f = Factors::default();
    let day_stem = person.pillars.day.stem();
    let branch = today.branch();
    let branches = person.branches();

    let (stem, note) = stem_factor(day_stem, today.stem());
    f.stem = stem;
    f.interactions.extend(note);

    f.triad = branches.iter().any(|&b| is_triad_pair(b, branch));
    f.paired = branches.iter().any(|&b| is_paired_combination(b, branch));
    f.clash = branches.iter().any(|&b| is_clash(b, branch));
    if f.triad {
        f.branch += 12;
        f.interactions.push(Interaction::BranchTriad);
    }
    if f.paired {
        f.branch += 8;
        f.interactions.push(Interaction::BranchPaired);
    }
    if f.clash {
        f.branch -= 15;
        f.interactions.push(Interaction::BranchClash);
    }

    for star in STEM_KEYED_STARS {
        if is_stem_star(star, day_stem, branch) {
            f.stars += star_penalty(star);
            f.active_stars.push(star);
            f.interactions.push(Interaction::InauspiciousActive(star));
        }
    }
    for star in ALL_AUSPICIOUS_STARS {
        let key = person.pillars.get(star.key_pillar()).stem();
        if is_star_branch(star, key, branch) {
            f.auspicious += auspicious_bonus(star);
            f.active_auspicious.push(star);
            f.interactions.push(Interaction::AuspiciousActive(star));
        }
    }
    f
}

/// Weighted total in hundredths, before rounding.
fn weighted_total(f: &Factors, heuristic: i32) -> i32 {
    BASE * 100
        + 50 * (f.stem + f.branch).clamp(0, STEM_BRANCH_CAP)
        + 25 * (STAR_HEADROOM + f.stars).clamp(0, STAR_HEADROOM)
        + 15 * f.auspicious.clamp(0, AUSPICIOUS_CAP)
        + 10 * heuristic.clamp(0, HEURISTIC_CAP)
}

fn bonus(cond: bool, points: i32) -> i32 {
    if cond { points } else { 0 }
}

/// Today's fortune for a chart. Deterministic for a (chart, date) pair.
pub fn score_today_fortune(person: &ChartAnalysis, date: NaiveDate) -> ScoreResult {
    let today = day_pillar_of(date);
    let mut f = factors(person, today);
    let heuristic = heuristic_bonus(date);
    let total = clamp_score((weighted_total(&f, heuristic) + 50) / 100);

    let weekday = date.weekday();
    let day_branch = person.pillars.day.branch();
    let yeokma = is_triad_star(InauspiciousStar::Yeokma, day_branch, today.branch());
    let dohwa = is_triad_star(InauspiciousStar::Dohwa, day_branch, today.branch());
    if yeokma {
        f.interactions
            .push(Interaction::CategoryStar(InauspiciousStar::Yeokma));
    }
    if dohwa {
        f.interactions
            .push(Interaction::CategoryStar(InauspiciousStar::Dohwa));
    }
    let star = |s: InauspiciousStar| f.active_stars.contains(&s);
    let lucky = |s: AuspiciousStar| f.active_auspicious.contains(&s);
    let base = i32::from(total);

    let career = base
        + bonus(weekday == Weekday::Mon, 5)
        + bonus(lucky(AuspiciousStar::HeavenlyNoble), 3)
        + bonus(yeokma, 2)
        - bonus(f.clash, 3);
    let love = base
        + bonus(weekday == Weekday::Fri, 5)
        + bonus(dohwa, 4)
        + bonus(star(InauspiciousStar::Hongyeom), 3)
        + bonus(f.paired, 2);
    let wealth = base
        + bonus(lucky(AuspiciousStar::HiddenProsperity), 3)
        + bonus(lucky(AuspiciousStar::GoldenCarriage), 3)
        + bonus(is_monthly_marker(date), 2)
        - bonus(star(InauspiciousStar::Yangin), 4)
        - bonus(star(InauspiciousStar::Biin), 3);
    let relationship = base + bonus(f.paired, 3) + bonus(f.triad, 2)
        - bonus(f.clash, 5)
        + bonus(matches!(weekday, Weekday::Sat | Weekday::Sun), 2);

    debug!(%date, %today, total, heuristic, "today's fortune scored");
    ScoreResult {
        total,
        categories: vec![
            CategoryScore {
                category: Category::Career,
                score: clamp_score(career),
            },
            CategoryScore {
                category: Category::Love,
                score: clamp_score(love),
            },
            CategoryScore {
                category: Category::Wealth,
                score: clamp_score(wealth),
            },
            CategoryScore {
                category: Category::Relationship,
                score: clamp_score(relationship),
            },
        ],
        interactions: f.interactions,
    }
}
