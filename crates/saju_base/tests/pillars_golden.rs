//! Golden four-pillar charts.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use saju_base::{EarthlyBranch, FourPillars, Gender, SexagenaryPair, derive};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn compact(p: &FourPillars) -> String {
    format!("{}{}{}{}", p.year, p.month, p.day, p.hour)
}

#[test]
fn golden_charts_with_rollover() {
    let cases = [
        (at(1950, 6, 25, 4, 0), "庚寅壬午辛卯庚寅"),
        (at(1969, 7, 20, 20, 17), "己酉辛未丙申戊戌"),
        (at(1988, 9, 17, 10, 0), "戊辰辛酉乙亥辛巳"),
        (at(1992, 2, 6, 14, 10), "壬申壬寅壬子丁未"),
        (at(2001, 12, 31, 23, 40), "辛巳庚子己巳甲子"),
        (at(2010, 3, 5, 9, 0), "庚寅戊寅甲寅戊辰"),
        (at(2010, 3, 6, 9, 0), "庚寅己卯乙卯庚辰"),
        (at(2030, 11, 7, 16, 0), "庚戌丁亥丙午丙申"),
        (at(2099, 12, 31, 0, 0), "己未丙子壬寅庚子"),
    ];
    for (civil, expected) in cases {
        let p = derive(civil, true, civil.year(), Gender::Male).unwrap();
        assert_eq!(compact(&p), expected, "{civil}");
    }
}

#[test]
fn late_zi_starts_at_23_30() {
    // 23:29 is still 亥 hour on 庚辰, with 庚's hour stems
    let before = derive(at(1990, 5, 15, 23, 29), true, 1990, Gender::Male).unwrap();
    assert_eq!(compact(&before), "庚午辛巳庚辰丁亥");
    assert_eq!(before.hour.branch(), EarthlyBranch::Hae);

    // 23:30 rolls to 辛巳 and takes 辛's 子 hour
    let after = derive(at(1990, 5, 15, 23, 30), true, 1990, Gender::Male).unwrap();
    assert_eq!(compact(&after), "庚午辛巳辛巳戊子");
    assert_eq!(after.hour.branch(), EarthlyBranch::Ja);
    assert_eq!(after.day.index(), (before.day.index() + 1) % 60);
}

#[test]
fn late_zi_edge_without_rollover() {
    let before = derive(at(1990, 5, 15, 23, 29), false, 1990, Gender::Male).unwrap();
    assert_eq!(compact(&before), "庚午辛巳庚辰丁亥");
    // the day stays, the hour stem still comes from the next day
    let after = derive(at(1990, 5, 15, 23, 30), false, 1990, Gender::Male).unwrap();
    assert_eq!(compact(&after), "庚午辛巳庚辰戊子");
}

#[test]
fn late_zi_without_rollover_keeps_day() {
    let p = derive(at(2001, 12, 31, 23, 40), false, 2001, Gender::Male).unwrap();
    assert_eq!(compact(&p), "辛巳庚子戊辰甲子");
}

#[test]
fn late_zi_hour_uses_next_day_stem() {
    // 23:45 on a 庚辰 day: next day is 辛, so the 子 hour is 戊子
    let p = derive(at(1990, 5, 15, 23, 45), false, 1990, Gender::Female).unwrap();
    assert_eq!(p.day.to_string(), "庚辰");
    assert_eq!(p.hour.to_string(), "戊子");
    let same_day_zi = derive(at(1990, 5, 15, 0, 15), false, 1990, Gender::Female).unwrap();
    assert_eq!(same_day_zi.hour.to_string(), "丙子");
}

#[test]
fn spring_start_switches_year() {
    let before = derive(at(1992, 2, 3, 12, 0), true, 1992, Gender::Male).unwrap();
    let after = derive(at(1992, 2, 4, 12, 0), true, 1992, Gender::Male).unwrap();
    assert_eq!(before.year.to_string(), "辛未");
    assert_eq!(after.year.to_string(), "壬申");
}

#[test]
fn day_index_advances_across_a_century() {
    let mut date = NaiveDate::from_ymd_opt(1999, 12, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2001, 3, 1).unwrap();
    let mut prev: Option<SexagenaryPair> = None;
    while date < end {
        let p = derive(date.and_hms_opt(6, 0, 0).unwrap(), true, 2000, Gender::Male).unwrap();
        if let Some(prev) = prev {
            assert_eq!(p.day, prev.offset(1), "{date}");
        }
        prev = Some(p.day);
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn every_month_pillar_is_a_valid_pair() {
    for month in 1..=12 {
        for day in [1, 4, 5, 6, 7, 8, 28] {
            let p = derive(at(2024, month, day, 12, 0), true, 2024, Gender::Male).unwrap();
            assert_eq!(
                SexagenaryPair::from_parts(p.month.stem(), p.month.branch()).unwrap(),
                p.month
            );
        }
    }
}
