//! Fixed solar-term month boundaries.
//!
//! Each civil month has a fixed "entry day" on which its astrological month
//! begins. The table stands in for the true sectional solar terms (小寒 … 大雪);
//! it ignores the year-to-year drift of a day or so.

use chrono::{Datelike, Months, NaiveDate};

/// Entry day of the astrological month, indexed by civil month - 1 (Jan..Dec).
pub const SOLAR_TERM_ENTRY_DAYS: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Civil month in which the astrological year begins (立春).
pub const SPRING_START_MONTH: u32 = 2;

/// Day of [`SPRING_START_MONTH`] on which the astrological year begins.
pub const SPRING_START_DAY: u32 = 4;

/// Entry day for a civil month (1..=12).
pub fn entry_day(month: u32) -> u32 {
    SOLAR_TERM_ENTRY_DAYS[(month.clamp(1, 12) - 1) as usize]
}

/// Whether the date is on or after its month's entry day.
pub fn is_past_solar_term_boundary<D: Datelike>(date: &D) -> bool {
    date.day() >= entry_day(date.month())
}

/// Whether the astrological year containing this civil year has begun.
pub fn has_reached_spring_start<D: Datelike>(date: &D) -> bool {
    match date.month().cmp(&SPRING_START_MONTH) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => date.day() >= SPRING_START_DAY,
        std::cmp::Ordering::Less => false,
    }
}

fn boundary_in_month_of(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(entry_day(date.month()))
}

/// First boundary strictly after `date`.
pub fn next_boundary(date: NaiveDate) -> Option<NaiveDate> {
    if !is_past_solar_term_boundary(&date) {
        return boundary_in_month_of(date);
    }
    let first = date.with_day(1)?;
    boundary_in_month_of(first.checked_add_months(Months::new(1))?)
}

/// Last boundary on or before `date`.
pub fn previous_boundary(date: NaiveDate) -> Option<NaiveDate> {
    if is_past_solar_term_boundary(&date) {
        return boundary_in_month_of(date);
    }
    let first = date.with_day(1)?;
    boundary_in_month_of(first.checked_sub_months(Months::new(1))?)
}

/// Whole days from `date` to the next boundary (always ≥ 1).
pub fn days_to_next_boundary(date: NaiveDate) -> Option<i64> {
    next_boundary(date).map(|b| b.signed_duration_since(date).num_days())
}

/// Whole days since the last boundary (0 on a boundary day).
pub fn days_since_last_boundary(date: NaiveDate) -> Option<i64> {
    previous_boundary(date).map(|b| date.signed_duration_since(b).num_days())
}
