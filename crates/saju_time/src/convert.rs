//! Birth input → civil (Gregorian) date-time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, trace};

use crate::birth::{BirthInput, CalendarType};
use crate::error::CalendarError;
use crate::lunar::{LunarDate, LunarTable, PackedLunarTable};

/// Resolve a birth input using the built-in lunar table.
pub fn to_civil_date_time(input: &BirthInput) -> Result<NaiveDateTime, CalendarError> {
    to_civil_date_time_with(input, &PackedLunarTable)
}

/// Resolve a birth input against a caller-supplied lunar table.
///
/// Solar dates pass through; lunar dates are looked up in `table`. Unknown
/// clock time is read as 00:00.
pub fn to_civil_date_time_with<T: LunarTable + ?Sized>(
    input: &BirthInput,
    table: &T,
) -> Result<NaiveDateTime, CalendarError> {
    let date = match input.calendar {
        CalendarType::Solar => NaiveDate::from_ymd_opt(input.year, input.month, input.day)
            .ok_or_else(|| invalid(input))?,
        CalendarType::Lunar => {
            let lunar = LunarDate::new(input.year, input.month, input.day, input.leap_month);
            let solar = table
                .to_solar(lunar)
                .ok_or(CalendarError::UnsupportedLunarDate {
                    year: input.year,
                    month: input.month,
                    day: input.day,
                    leap_month: input.leap_month,
                })?;
            debug!(%lunar, %solar, "lunar date resolved");
            solar
        }
    };
    let (hour, minute) = input.clock();
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid(input))?;
    let civil = date.and_time(time);
    trace!(%civil, time_known = input.time_known(), "civil date-time");
    Ok(civil)
}

fn invalid(input: &BirthInput) -> CalendarError {
    let (hour, minute) = input.clock();
    CalendarError::InvalidCivilDateTime {
        year: input.year,
        month: input.month,
        day: input.day,
        hour,
        minute,
    }
}

#[cfg(test)]
mod tests {
    use std::ops::RangeInclusive;

    use super::*;

    struct EmptyTable;

    impl LunarTable for EmptyTable {
        fn to_solar(&self, _date: LunarDate) -> Option<NaiveDate> {
            None
        }
        fn to_lunar(&self, _date: NaiveDate) -> Option<LunarDate> {
            None
        }
        fn year_range(&self) -> RangeInclusive<i32> {
            0..=-1
        }
    }

    #[test]
    fn solar_passes_through() {
        let civil = to_civil_date_time(&BirthInput::solar(1992, 2, 6).with_time(14, 10)).unwrap();
        assert_eq!(civil.to_string(), "1992-02-06 14:10:00");
    }

    #[test]
    fn unknown_time_is_midnight() {
        let civil = to_civil_date_time(&BirthInput::solar(1992, 2, 6)).unwrap();
        assert_eq!(civil.to_string(), "1992-02-06 00:00:00");
    }

    #[test]
    fn lunar_is_converted() {
        let civil = to_civil_date_time(&BirthInput::lunar(2024, 1, 1, false)).unwrap();
        assert_eq!(civil.date(), NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }

    #[test]
    fn lunar_outside_table_fails() {
        let err = to_civil_date_time(&BirthInput::lunar(1850, 3, 3, false)).unwrap_err();
        assert!(matches!(err, CalendarError::UnsupportedLunarDate { year: 1850, .. }));
    }

    #[test]
    fn custom_table_is_consulted() {
        let err = to_civil_date_time_with(&BirthInput::lunar(2024, 1, 1, false), &EmptyTable)
            .unwrap_err();
        assert!(matches!(err, CalendarError::UnsupportedLunarDate { .. }));
    }

    #[test]
    fn solar_ignores_leap_flag() {
        let mut input = BirthInput::solar(2020, 5, 23);
        input.leap_month = true;
        let civil = to_civil_date_time(&input).unwrap();
        assert_eq!(civil.date(), NaiveDate::from_ymd_opt(2020, 5, 23).unwrap());
    }

    #[test]
    fn impossible_solar_date_surfaces_error() {
        let err = to_civil_date_time(&BirthInput::solar(2023, 2, 30)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidCivilDateTime { .. }));
    }
}
