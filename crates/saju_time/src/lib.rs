//! Calendar front end for the saju engine.
//!
//! This crate provides:
//! - [`BirthInput`]: year/month/day with optional clock time, solar or lunar
//! - Lunar → solar conversion through a [`LunarTable`] (built-in 1900-2100 table)
//! - Fixed solar-term month boundaries used by the pillar derivation
//!
//! Everything here is a pure function of its arguments.

pub mod birth;
pub mod convert;
pub mod error;
pub mod lunar;
pub mod lunar_data;
pub mod solar_term;

pub use birth::{BirthInput, CalendarType, Gender};
pub use convert::{to_civil_date_time, to_civil_date_time_with};
pub use error::CalendarError;
pub use lunar::{LunarDate, LunarTable, PackedLunarTable, lunar_to_solar, solar_to_lunar};
pub use solar_term::{
    SOLAR_TERM_ENTRY_DAYS, SPRING_START_DAY, SPRING_START_MONTH, days_since_last_boundary,
    days_to_next_boundary, entry_day, has_reached_spring_start, is_past_solar_term_boundary,
    next_boundary, previous_boundary,
};
