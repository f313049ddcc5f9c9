//! Error types for birth-input calendar conversion.

use thiserror::Error;

/// Errors from resolving a birth input to a civil (Gregorian) date-time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The lunar date has no entry in the lunar table (outside the covered
    /// years, a leap flag on a month that is not leap, or a day past the
    /// month's length).
    #[error("unsupported lunar date {year}-{month:02}-{day:02}{}", leap_suffix(.leap_month))]
    UnsupportedLunarDate {
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
    },
    /// The solar date or clock time does not exist on the civil calendar.
    ///
    /// Callers are expected to validate input before it reaches the engine;
    /// this surfaces the violation instead of panicking.
    #[error("invalid civil date-time {year}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidCivilDateTime {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
}

fn leap_suffix(leap_month: &bool) -> &'static str {
    if *leap_month { " (leap)" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_marks_leap_month() {
        let e = CalendarError::UnsupportedLunarDate {
            year: 2024,
            month: 4,
            day: 1,
            leap_month: true,
        };
        assert_eq!(e.to_string(), "unsupported lunar date 2024-04-01 (leap)");
    }

    #[test]
    fn display_plain_month() {
        let e = CalendarError::UnsupportedLunarDate {
            year: 1850,
            month: 1,
            day: 1,
            leap_month: false,
        };
        assert_eq!(e.to_string(), "unsupported lunar date 1850-01-01");
    }
}
