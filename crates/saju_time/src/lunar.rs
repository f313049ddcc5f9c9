//! Lunar ↔ solar date conversion.
//!
//! The engine treats the lunar calendar as an external lookup: anything that
//! implements [`LunarTable`] can back the conversion. [`PackedLunarTable`] is
//! the built-in implementation over the 1900-2100 month-length table in
//! [`crate::lunar_data`].

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::lunar_data::{EPOCH_SOLAR, FIRST_YEAR, LAST_YEAR, LUNAR_INFO};

/// A date on the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    /// 1-based month number (a leap month repeats the number of the month it follows).
    pub month: u32,
    pub day: u32,
    pub leap_month: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap_month,
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.leap_month {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

/// Static lunar-calendar lookup keyed by (year, month, day, leap flag).
pub trait LunarTable {
    /// Solar date for a lunar date, or `None` if the key is not in the table.
    fn to_solar(&self, date: LunarDate) -> Option<NaiveDate>;

    /// Lunar date for a solar date, or `None` outside the covered range.
    fn to_lunar(&self, date: NaiveDate) -> Option<LunarDate>;

    /// Lunar years the table covers.
    fn year_range(&self) -> RangeInclusive<i32>;
}

/// Built-in lunar table over [`LUNAR_INFO`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedLunarTable;

impl PackedLunarTable {
    fn info(year: i32) -> Option<u32> {
        if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
            Some(LUNAR_INFO[(year - FIRST_YEAR) as usize])
        } else {
            None
        }
    }

    fn epoch() -> Option<NaiveDate> {
        let (y, m, d) = EPOCH_SOLAR;
        NaiveDate::from_ymd_opt(y, m, d)
    }

    /// Leap month of a lunar year, if it has one.
    pub fn leap_month(year: i32) -> Option<u32> {
        match Self::info(year)? & 0xf {
            0 => None,
            m => Some(m),
        }
    }

    /// Length in days of a regular (non-leap) month.
    pub fn month_days(year: i32, month: u32) -> Option<u32> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Self::info(year).map(|info| regular_month_days(info, month))
    }

    /// Length in days of the year's leap month, if it has one.
    pub fn leap_month_days(year: i32) -> Option<u32> {
        let info = Self::info(year)?;
        match leap_days(info) {
            0 => None,
            d => Some(d),
        }
    }

    /// Total days in a lunar year, leap month included.
    pub fn year_days(year: i32) -> Option<u32> {
        Self::info(year).map(total_year_days)
    }
}

fn regular_month_days(info: u32, month: u32) -> u32 {
    if info & (0x10000 >> month) != 0 { 30 } else { 29 }
}

fn leap_days(info: u32) -> u32 {
    if info & 0xf == 0 {
        0
    } else if info & 0x10000 != 0 {
        30
    } else {
        29
    }
}

fn total_year_days(info: u32) -> u32 {
    let big_months = (1..=12).filter(|&m| info & (0x10000 >> m) != 0).count() as u32;
    348 + big_months + leap_days(info)
}

impl LunarTable for PackedLunarTable {
    fn to_solar(&self, date: LunarDate) -> Option<NaiveDate> {
        let info = Self::info(date.year)?;
        if !(1..=12).contains(&date.month) || date.day == 0 {
            return None;
        }
        let leap = info & 0xf;
        if date.leap_month && leap != date.month {
            return None;
        }
        let month_len = if date.leap_month {
            leap_days(info)
        } else {
            regular_month_days(info, date.month)
        };
        if date.day > month_len {
            return None;
        }

        let mut offset: u64 = LUNAR_INFO[..(date.year - FIRST_YEAR) as usize]
            .iter()
            .map(|&i| total_year_days(i) as u64)
            .sum();
        for m in 1..date.month {
            offset += regular_month_days(info, m) as u64;
            if m == leap {
                offset += leap_days(info) as u64;
            }
        }
        if date.leap_month {
            // the leap month follows the regular month of the same number
            offset += regular_month_days(info, date.month) as u64;
        }
        offset += (date.day - 1) as u64;

        Self::epoch()?.checked_add_days(Days::new(offset))
    }

    fn to_lunar(&self, date: NaiveDate) -> Option<LunarDate> {
        let mut offset = date.signed_duration_since(Self::epoch()?).num_days();
        if offset < 0 {
            return None;
        }
        for (i, &info) in LUNAR_INFO.iter().enumerate() {
            let year_len = total_year_days(info) as i64;
            if offset >= year_len {
                offset -= year_len;
                continue;
            }
            let year = FIRST_YEAR + i as i32;
            let leap = info & 0xf;
            for month in 1..=12 {
                let len = regular_month_days(info, month) as i64;
                if offset < len {
                    return Some(LunarDate::new(year, month, offset as u32 + 1, false));
                }
                offset -= len;
                if month == leap {
                    let len = leap_days(info) as i64;
                    if offset < len {
                        return Some(LunarDate::new(year, month, offset as u32 + 1, true));
                    }
                    offset -= len;
                }
            }
        }
        None
    }

    fn year_range(&self) -> RangeInclusive<i32> {
        FIRST_YEAR..=LAST_YEAR
    }
}

/// Lunar date for a solar date using the built-in table.
pub fn solar_to_lunar(date: NaiveDate) -> Option<LunarDate> {
    PackedLunarTable.to_lunar(date)
}

/// Solar date for a lunar date using the built-in table.
pub fn lunar_to_solar(date: LunarDate) -> Option<NaiveDate> {
    PackedLunarTable.to_solar(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_maps_to_first_day() {
        let t = PackedLunarTable;
        assert_eq!(t.to_solar(LunarDate::new(1900, 1, 1, false)), Some(ymd(1900, 1, 31)));
    }

    #[test]
    fn new_year_2024() {
        let t = PackedLunarTable;
        assert_eq!(t.to_solar(LunarDate::new(2024, 1, 1, false)), Some(ymd(2024, 2, 10)));
    }

    #[test]
    fn chuseok_2024() {
        let t = PackedLunarTable;
        assert_eq!(t.to_solar(LunarDate::new(2024, 8, 15, false)), Some(ymd(2024, 9, 17)));
    }

    #[test]
    fn leap_month_2020() {
        let t = PackedLunarTable;
        assert_eq!(PackedLunarTable::leap_month(2020), Some(4));
        assert_eq!(t.to_solar(LunarDate::new(2020, 4, 1, true)), Some(ymd(2020, 5, 23)));
    }

    #[test]
    fn leap_flag_on_regular_month_rejected() {
        let t = PackedLunarTable;
        assert_eq!(t.to_solar(LunarDate::new(2024, 4, 1, true)), None);
    }

    #[test]
    fn day_past_month_length_rejected() {
        let t = PackedLunarTable;
        // 2024 month 1 has 29 days
        assert_eq!(PackedLunarTable::month_days(2024, 1), Some(29));
        assert_eq!(t.to_solar(LunarDate::new(2024, 1, 30, false)), None);
    }

    #[test]
    fn out_of_range_years_rejected() {
        let t = PackedLunarTable;
        assert_eq!(t.to_solar(LunarDate::new(1899, 12, 1, false)), None);
        assert_eq!(t.to_solar(LunarDate::new(2101, 1, 1, false)), None);
        assert_eq!(t.to_lunar(ymd(1900, 1, 30)), None);
    }

    #[test]
    fn year_lengths_are_plausible() {
        for y in t_range() {
            let days = PackedLunarTable::year_days(y).unwrap();
            assert!((353..=385).contains(&days), "year {y}: {days} days");
        }
    }

    fn t_range() -> RangeInclusive<i32> {
        PackedLunarTable.year_range()
    }

    #[test]
    fn to_lunar_inverts_to_solar() {
        let t = PackedLunarTable;
        for lunar in [
            LunarDate::new(1950, 1, 1, false),
            LunarDate::new(1984, 10, 15, true),
            LunarDate::new(2023, 2, 29, true),
            LunarDate::new(2024, 12, 29, false),
        ] {
            let solar = t.to_solar(lunar).unwrap();
            assert_eq!(t.to_lunar(solar), Some(lunar), "round trip of {lunar}");
        }
    }

    #[test]
    fn free_functions_use_packed_table() {
        let lunar = LunarDate::new(2024, 8, 15, false);
        assert_eq!(lunar_to_solar(lunar), Some(ymd(2024, 9, 17)));
        assert_eq!(solar_to_lunar(ymd(2024, 9, 17)), Some(lunar));
    }

    #[test]
    fn to_lunar_new_years_eve() {
        let t = PackedLunarTable;
        // day before 2024 lunar new year is the last day of 2023 month 12
        let l = t.to_lunar(ymd(2024, 2, 9)).unwrap();
        assert_eq!((l.year, l.month, l.leap_month), (2023, 12, false));
    }
}
