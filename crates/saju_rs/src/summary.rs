//! Structured birth metadata handed to downstream consumers alongside a chart.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use saju_base::{Element, FourPillars, HeavenlyStem};
use saju_time::{BirthInput, CalendarType, Gender, LunarDate, solar_to_lunar};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthSummary {
    pub calendar: CalendarType,
    /// The date as the caller gave it.
    pub input_date: String,
    pub solar_date: NaiveDate,
    /// `None` outside the lunar table's range.
    pub lunar_date: Option<LunarDate>,
    /// `None` when the clock time was unknown.
    pub time: Option<NaiveTime>,
    pub gender: Gender,
    pub pillars: String,
    pub zodiac: &'static str,
    pub day_master: HeavenlyStem,
    pub day_master_element: Element,
}

/// Summarise a birth input and the pillars computed from it.
pub fn birth_summary(input: &BirthInput, pillars: &FourPillars) -> BirthSummary {
    let solar_date = pillars.civil.date();
    let input_date = match input.calendar {
        CalendarType::Solar => format!("{:04}-{:02}-{:02}", input.year, input.month, input.day),
        CalendarType::Lunar => format!(
            "{} (lunar)",
            LunarDate::new(input.year, input.month, input.day, input.leap_month)
        ),
    };
    BirthSummary {
        calendar: input.calendar,
        input_date,
        solar_date,
        lunar_date: solar_to_lunar(solar_date),
        time: pillars.time_known.then(|| pillars.civil.time()),
        gender: pillars.gender,
        pillars: pillars.to_string(),
        zodiac: pillars.year.branch().animal(),
        day_master: pillars.day_master(),
        day_master_element: pillars.day_master().element(),
    }
}
