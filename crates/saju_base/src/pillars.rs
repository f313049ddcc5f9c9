//! Four-pillar derivation (year, month, day, hour).
//!
//! Works on a civil date-time with the fixed solar-term boundaries from
//! `saju_time`:
//!
//! - year changes at spring start (Feb 4)
//! - month changes at each month's entry day
//! - day pillar counts elapsed days from 1900-01-01 (甲戌)
//! - hour pillar uses two-hour windows anchored at :30, starting at 23:30

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_time::{Gender, has_reached_spring_start, is_past_solar_term_boundary};

use crate::branch::EarthlyBranch;
use crate::error::SajuError;
use crate::pair::SexagenaryPair;
use crate::stem::HeavenlyStem;
use crate::stem::HeavenlyStem as S;

/// Position of a pillar in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pillar {
    Year,
    Month,
    Day,
    Hour,
}

/// All four pillars in chart order.
pub const ALL_PILLARS: [Pillar; 4] = [Pillar::Year, Pillar::Month, Pillar::Day, Pillar::Hour];

impl Pillar {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: SexagenaryPair,
    pub month: SexagenaryPair,
    pub day: SexagenaryPair,
    pub hour: SexagenaryPair,
    /// Gregorian year of the birth date (not the astrological or lunar year).
    pub birth_year: i32,
    pub gender: Gender,
    /// False when the clock time was unknown and 00:00 was used.
    pub time_known: bool,
    /// Civil date-time the pillars were derived from.
    pub civil: NaiveDateTime,
}

impl FourPillars {
    pub const fn get(&self, pillar: Pillar) -> SexagenaryPair {
        match pillar {
            Pillar::Year => self.year,
            Pillar::Month => self.month,
            Pillar::Day => self.day,
            Pillar::Hour => self.hour,
        }
    }

    /// `(pillar, pair)` in chart order.
    pub fn pairs(&self) -> [(Pillar, SexagenaryPair); 4] {
        ALL_PILLARS.map(|p| (p, self.get(p)))
    }

    pub fn stems(&self) -> [HeavenlyStem; 4] {
        ALL_PILLARS.map(|p| self.get(p).stem())
    }

    pub fn branches(&self) -> [EarthlyBranch; 4] {
        ALL_PILLARS.map(|p| self.get(p).branch())
    }

    /// The day stem (일간), reference point for every relative attribute.
    pub const fn day_master(&self) -> HeavenlyStem {
        self.day.stem()
    }

    /// Mark the clock time as unknown.
    pub fn time_unknown(mut self) -> Self {
        self.time_known = false;
        self
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Year stem keyed by `year mod 10`.
const YEAR_STEMS: [HeavenlyStem; 10] = [
    S::Gyeong, S::Sin, S::Im, S::Gye, S::Gap, S::Eul, S::Byeong, S::Jeong, S::Mu, S::Gi,
];

/// Year branch keyed by `year mod 12`.
const YEAR_BRANCHES: [EarthlyBranch; 12] = {
    use EarthlyBranch::*;
    [Sin, Yu, Sul, Hae, Ja, Chuk, In, Myo, Jin, Sa, O, Mi]
};

/// Month stems by year-stem group; slot 0 = 丑 month, slot 11 = 子 month.
#[rustfmt::skip]
const MONTH_STEMS: [[HeavenlyStem; 12]; 5] = [
    // 甲己 year
    [S::Jeong, S::Byeong, S::Jeong, S::Mu, S::Gi, S::Gyeong, S::Sin, S::Im, S::Gye, S::Gap, S::Eul, S::Byeong],
    // 乙庚 year
    [S::Gi, S::Mu, S::Gi, S::Gyeong, S::Sin, S::Im, S::Gye, S::Gap, S::Eul, S::Byeong, S::Jeong, S::Mu],
    // 丙辛 year
    [S::Sin, S::Gyeong, S::Sin, S::Im, S::Gye, S::Gap, S::Eul, S::Byeong, S::Jeong, S::Mu, S::Gi, S::Gyeong],
    // 丁壬 year
    [S::Gye, S::Im, S::Gye, S::Gap, S::Eul, S::Byeong, S::Jeong, S::Mu, S::Gi, S::Gyeong, S::Sin, S::Im],
    // 戊癸 year
    [S::Eul, S::Gap, S::Eul, S::Byeong, S::Jeong, S::Mu, S::Gi, S::Gyeong, S::Sin, S::Im, S::Gye, S::Gap],
];

/// Hour stems by day-stem group; slot 0 = 子 hour.
#[rustfmt::skip]
const HOUR_STEMS: [[HeavenlyStem; 12]; 5] = [
    // 甲己 day
    [S::Gap, S::Eul, S::Byeong, S::Jeong, S::Mu, S::Gi, S::Gyeong, S::Sin, S::Im, S::Gye, S::Gap, S::Eul],
    // 乙庚 day
    [S::Byeong, S::Jeong, S::Mu, S::Gi, S::Gyeong, S::Sin, S::Im, S::Gye, S::Gap, S::Eul, S::Byeong, S::Jeong],
    // 丙辛 day
    [S::Mu, S::Gi, S::Gyeong, S::Sin, S::Im, S::Gye, S::Gap, S::Eul, S::Byeong, S::Jeong, S::Mu, S::Gi],
    // 丁壬 day
    [S::Gyeong, S::Sin, S::Im, S::Gye, S::Gap, S::Eul, S::Byeong, S::Jeong, S::Mu, S::Gi, S::Gyeong, S::Sin],
    // 戊癸 day
    [S::Im, S::Gye, S::Gap, S::Eul, S::Byeong, S::Jeong, S::Mu, S::Gi, S::Gyeong, S::Sin, S::Im, S::Gye],
];

/// Day-pillar epoch: 1900-01-01 is 甲戌 (cycle index 10).
const DAY_EPOCH: (i32, u32, u32) = (1900, 1, 1);
const DAY_EPOCH_INDEX: i64 = 10;

/// Minute of day (23:30) at which the 子 hour, and the late-night rollover, begin.
const LATE_ZI_MINUTE: u32 = 23 * 60 + 30;

// ---------------------------------------------------------------------------
// Pillars
// ---------------------------------------------------------------------------

/// Year pillar; dates before spring start belong to the previous year.
pub fn year_pillar(date: NaiveDate) -> Result<SexagenaryPair, SajuError> {
    let y = if has_reached_spring_start(&date) {
        date.year()
    } else {
        date.year() - 1
    };
    let stem = YEAR_STEMS[y.rem_euclid(10) as usize];
    let branch = YEAR_BRANCHES[y.rem_euclid(12) as usize];
    SexagenaryPair::from_parts(stem, branch)
}

/// Month slot (0 = 丑 .. 11 = 子) for a date.
///
/// The calendar month is stepped back once when its boundary has not been
/// reached, then once more to move from 1-based months to slots.
pub fn month_slot(date: NaiveDate) -> usize {
    let mut idx = date.month() as usize;
    if !is_past_solar_term_boundary(&date) {
        idx = if idx == 0 { 11 } else { idx - 1 };
    }
    if idx == 0 { 11 } else { idx - 1 }
}

/// Month pillar for a date given its year stem.
pub fn month_pillar(date: NaiveDate, year_stem: HeavenlyStem) -> Result<SexagenaryPair, SajuError> {
    let slot = month_slot(date);
    let stem = MONTH_STEMS[(year_stem.index() % 5) as usize][slot];
    let branch = EarthlyBranch::from_index((slot as u8 + 1) % 12);
    SexagenaryPair::from_parts(stem, branch)
}

fn elapsed_days(date: NaiveDate) -> i64 {
    let (y, m, d) = DAY_EPOCH;
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(epoch) => date.signed_duration_since(epoch).num_days(),
        None => 0,
    }
}

// stem and branch advance together, so every day lands on a valid pair
fn day_pair_from_elapsed(days: i64) -> SexagenaryPair {
    SexagenaryPair::from_cycle_index((days + DAY_EPOCH_INDEX).rem_euclid(60) as u8)
}

fn is_late_zi(civil: &NaiveDateTime) -> bool {
    civil.hour() * 60 + civil.minute() >= LATE_ZI_MINUTE
}

/// Day pillar. With `rollover`, times from 23:30 count as the next day.
pub fn day_pillar(civil: NaiveDateTime, rollover: bool) -> SexagenaryPair {
    let mut days = elapsed_days(civil.date());
    if rollover && is_late_zi(&civil) {
        days += 1;
    }
    day_pair_from_elapsed(days)
}

/// Day pillar of a calendar date (its 00:00).
pub fn day_pillar_of(date: NaiveDate) -> SexagenaryPair {
    day_pair_from_elapsed(elapsed_days(date))
}

/// Hour slot (0 = 子, 23:30–01:29 .. 11 = 亥, 21:30–23:29).
pub fn hour_slot(hour: u32, minute: u32) -> usize {
    (((hour * 60 + minute + 30) / 120) % 12) as usize
}

/// Hour pillar.
///
/// Between 23:30 and 23:59 the stem follows the next calendar day's day stem,
/// whether or not the day pillar itself rolled over.
pub fn hour_pillar(civil: NaiveDateTime) -> Result<SexagenaryPair, SajuError> {
    let slot = hour_slot(civil.hour(), civil.minute());
    let mut days = elapsed_days(civil.date());
    if is_late_zi(&civil) {
        days += 1;
    }
    let day_stem = HeavenlyStem::from_index(days.rem_euclid(10) as u8);
    let stem = HOUR_STEMS[(day_stem.index() % 5) as usize][slot];
    SexagenaryPair::from_parts(stem, EarthlyBranch::from_index(slot as u8))
}

/// Derive the four pillars for a civil date-time.
pub fn derive(
    civil: NaiveDateTime,
    include_time_in_rollover: bool,
    birth_year: i32,
    gender: Gender,
) -> Result<FourPillars, SajuError> {
    let date = civil.date();
    let year = year_pillar(date)?;
    let month = month_pillar(date, year.stem())?;
    let day = day_pillar(civil, include_time_in_rollover);
    let hour = hour_pillar(civil)?;
    debug!(%civil, %year, %month, %day, %hour, "pillars derived");
    Ok(FourPillars {
        year,
        month,
        day,
        hour,
        birth_year,
        gender,
        time_known: true,
        civil,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn chart(dt: NaiveDateTime) -> String {
        derive(dt, true, dt.year(), Gender::Male).unwrap().to_string()
    }

    #[test]
    fn year_after_spring_start() {
        assert_eq!(chart(at(1992, 2, 6, 14, 10)), "壬申 壬寅 壬子 丁未");
    }

    #[test]
    fn year_before_spring_start() {
        assert_eq!(chart(at(1992, 2, 3, 0, 0)), "辛未 辛丑 己酉 甲子");
    }

    #[test]
    fn day_epoch() {
        assert_eq!(chart(at(1900, 1, 1, 0, 0)), "己亥 丙子 甲戌 甲子");
        assert_eq!(chart(at(2000, 1, 1, 0, 0)), "己卯 丙子 戊午 壬子");
    }

    #[test]
    fn month_boundary() {
        assert_eq!(chart(at(2024, 8, 7, 12, 0)), "甲辰 辛未 癸卯 戊午");
        assert_eq!(chart(at(2024, 8, 8, 12, 0)), "甲辰 壬申 甲辰 庚午");
    }

    #[test]
    fn january_before_boundary_wraps_to_zi_month() {
        assert_eq!(month_slot(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), 11);
        assert_eq!(chart(at(2024, 1, 5, 0, 0)), "癸卯 甲子 戊辰 壬子");
        assert_eq!(chart(at(1984, 1, 3, 7, 30)), "癸亥 甲子 丙申 壬辰");
    }

    #[test]
    fn late_zi_with_and_without_rollover() {
        let dt = at(1990, 5, 15, 23, 45);
        let rolled = derive(dt, true, 1990, Gender::Male).unwrap();
        let plain = derive(dt, false, 1990, Gender::Male).unwrap();
        assert_eq!(rolled.to_string(), "庚午 辛巳 辛巳 戊子");
        assert_eq!(plain.to_string(), "庚午 辛巳 庚辰 戊子");
    }

    #[test]
    fn hour_slots() {
        assert_eq!(hour_slot(23, 30), 0);
        assert_eq!(hour_slot(0, 0), 0);
        assert_eq!(hour_slot(1, 29), 0);
        assert_eq!(hour_slot(1, 30), 1);
        assert_eq!(hour_slot(21, 30), 11);
        assert_eq!(hour_slot(23, 29), 11);
    }

    #[test]
    fn consecutive_days_step_by_one() {
        let mut date = NaiveDate::from_ymd_opt(2023, 12, 20).unwrap();
        let mut prev = day_pillar(date.and_hms_opt(12, 0, 0).unwrap(), true);
        for _ in 0..90 {
            date = date.succ_opt().unwrap();
            let next = day_pillar(date.and_hms_opt(12, 0, 0).unwrap(), true);
            assert_eq!(next.index(), (prev.index() + 1) % 60);
            prev = next;
        }
    }

    #[test]
    fn derive_is_idempotent() {
        let dt = at(1975, 7, 9, 18, 5);
        assert_eq!(
            derive(dt, true, 1975, Gender::Female).unwrap(),
            derive(dt, true, 1975, Gender::Female).unwrap()
        );
    }

    #[test]
    fn day_pillar_of_date() {
        assert_eq!(day_pillar_of(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()).to_string(), "甲戌");
        assert_eq!(day_pillar_of(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()).to_string(), "甲辰");
        assert_eq!(day_pillar_of(NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()).to_string(), "癸酉");
    }

    #[test]
    fn time_unknown_flag() {
        let p = derive(at(2000, 1, 1, 0, 0), false, 2000, Gender::Male)
            .unwrap()
            .time_unknown();
        assert!(!p.time_known);
        assert_eq!(p.day_master(), HeavenlyStem::Mu);
    }
}
