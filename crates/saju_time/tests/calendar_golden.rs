//! Golden values for lunar conversion and solar-term boundaries.

use chrono::NaiveDate;
use saju_time::{
    BirthInput, CalendarError, LunarDate, LunarTable, PackedLunarTable, days_to_next_boundary,
    has_reached_spring_start, is_past_solar_term_boundary, to_civil_date_time,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn lunar_new_years() {
    let cases = [
        (1950, ymd(1950, 2, 17)),
        (1960, ymd(1960, 1, 28)),
        (1970, ymd(1970, 2, 6)),
        (1980, ymd(1980, 2, 16)),
        (1990, ymd(1990, 1, 27)),
        (2000, ymd(2000, 2, 5)),
        (2010, ymd(2010, 2, 14)),
        (2020, ymd(2020, 1, 25)),
        (2023, ymd(2023, 1, 22)),
        (2025, ymd(2025, 1, 29)),
    ];
    for (year, expected) in cases {
        let got = PackedLunarTable.to_solar(LunarDate::new(year, 1, 1, false));
        assert_eq!(got, Some(expected), "lunar new year {year}");
    }
}

#[test]
fn leap_month_input_through_converter() {
    let input = BirthInput::lunar(2020, 4, 1, true).with_time(9, 0);
    let civil = to_civil_date_time(&input).unwrap();
    assert_eq!(civil.date(), ymd(2020, 5, 23));
}

#[test]
fn missing_leap_month_is_unsupported() {
    let err = to_civil_date_time(&BirthInput::lunar(2024, 4, 1, true)).unwrap_err();
    assert_eq!(
        err,
        CalendarError::UnsupportedLunarDate {
            year: 2024,
            month: 4,
            day: 1,
            leap_month: true
        }
    );
}

#[test]
fn every_month_start_is_a_boundary() {
    for month in 1..=12 {
        let first = ymd(2024, month, 1);
        assert!(!is_past_solar_term_boundary(&first), "month {month}");
        assert!(days_to_next_boundary(first).unwrap() >= 3);
    }
}

#[test]
fn spring_start_edge() {
    assert!(!has_reached_spring_start(&ymd(2024, 2, 3)));
    assert!(has_reached_spring_start(&ymd(2024, 2, 4)));
}

#[test]
fn solar_lunar_roundtrip_over_a_year() {
    let mut date = ymd(2023, 1, 1);
    while date < ymd(2024, 1, 1) {
        let lunar = PackedLunarTable.to_lunar(date).unwrap();
        assert_eq!(PackedLunarTable.to_solar(lunar), Some(date), "{date}");
        date = date.succ_opt().unwrap();
    }
}
