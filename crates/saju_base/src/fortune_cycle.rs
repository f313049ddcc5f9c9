//! Ten-year fortune cycles (대운).
//!
//! Cycles step through the 60-cycle from the month pillar, forward or
//! backward depending on gender and the polarity of the year stem. Each cycle
//! spans ten years.

use serde::{Deserialize, Serialize};
use tracing::trace;

use saju_time::{Gender, days_since_last_boundary, days_to_next_boundary};

use crate::pair::SexagenaryPair;
use crate::pillars::FourPillars;
use crate::stem::HeavenlyStem;
use crate::ten_god::{TenGod, ten_god};
use crate::twelve_stage::{TwelveStage, twelve_stage};

/// Years covered by one cycle.
pub const CYCLE_YEARS: u32 = 10;

/// Fewest cycles a chart lists.
pub const MIN_DECADES: u8 = 8;

/// Most cycles a chart lists.
pub const MAX_DECADES: u8 = 12;

/// Cycles listed when nothing else is configured.
pub const DEFAULT_DECADES: u8 = 10;

/// Age of the first cycle under [`StartAgeRule::Fixed`] by default.
pub const DEFAULT_START_AGE: u32 = 1;

/// Days of distance to a solar-term boundary that make up one year of age.
pub const DAYS_PER_START_YEAR: i64 = 3;

/// How the age of the first cycle is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartAgeRule {
    /// Same first age for every chart.
    Fixed(u32),
    /// Days to the next (forward) or since the previous (backward) boundary,
    /// divided by three and rounded, at least 1.
    SolarTermProximity,
}

impl Default for StartAgeRule {
    fn default() -> Self {
        Self::Fixed(DEFAULT_START_AGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FortuneOptions {
    /// Number of cycles, clamped to `MIN_DECADES..=MAX_DECADES`.
    pub decades: u8,
    pub start_age: StartAgeRule,
}

impl Default for FortuneOptions {
    fn default() -> Self {
        Self {
            decades: DEFAULT_DECADES,
            start_age: StartAgeRule::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Forward for a male with a yang year stem or a female with a yin one.
pub fn direction(gender: Gender, year_stem: HeavenlyStem) -> Direction {
    let yang = year_stem.polarity().is_yang();
    match (gender, yang) {
        (Gender::Male, true) | (Gender::Female, false) => Direction::Forward,
        _ => Direction::Backward,
    }
}

/// Age at which the first cycle begins.
pub fn start_age(pillars: &FourPillars, rule: StartAgeRule, direction: Direction) -> u32 {
    match rule {
        StartAgeRule::Fixed(age) => age,
        StartAgeRule::SolarTermProximity => {
            let date = pillars.civil.date();
            let days = match direction {
                Direction::Forward => days_to_next_boundary(date),
                Direction::Backward => days_since_last_boundary(date),
            }
            .unwrap_or(0);
            let rounded = (days + DAYS_PER_START_YEAR / 2) / DAYS_PER_START_YEAR;
            u32::try_from(rounded).unwrap_or(0).max(1)
        }
    }
}

/// One ten-year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FortuneCycle {
    /// 1-indexed position.
    pub order: u8,
    pub start_age: u32,
    /// `birth_year + start_age - 1`.
    pub start_year: i32,
    pub pair: SexagenaryPair,
    /// Ten god of the cycle stem relative to the day master.
    pub ten_god: TenGod,
    /// Stage of the day master in the cycle branch.
    pub twelve_stage: TwelveStage,
}

impl FortuneCycle {
    /// Last calendar year of the cycle, inclusive.
    pub const fn end_year(&self) -> i32 {
        self.start_year + CYCLE_YEARS as i32 - 1
    }

    pub const fn contains_year(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year()
    }
}

/// Fortune cycles for a chart.
pub fn fortune_cycles(pillars: &FourPillars, options: &FortuneOptions) -> Vec<FortuneCycle> {
    let dir = direction(pillars.gender, pillars.year.stem());
    let first_age = start_age(pillars, options.start_age, dir);
    let decades = options.decades.clamp(MIN_DECADES, MAX_DECADES);
    let day_master = pillars.day_master();
    trace!(?dir, first_age, decades, "fortune cycles");

    (1..=decades)
        .map(|order| {
            let pair = pillars.month.offset(dir.step() * i32::from(order));
            let age = first_age + CYCLE_YEARS * u32::from(order - 1);
            FortuneCycle {
                order,
                start_age: age,
                start_year: pillars.birth_year + age as i32 - 1,
                pair,
                ten_god: ten_god(day_master, pair.stem()),
                twelve_stage: twelve_stage(day_master, pair.branch()),
            }
        })
        .collect()
}

/// The cycle covering a calendar year.
pub fn active_cycle(cycles: &[FortuneCycle], year: i32) -> Option<&FortuneCycle> {
    cycles.iter().find(|c| c.contains_year(year))
}
