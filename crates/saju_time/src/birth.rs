//! Birth input as supplied by callers.

use serde::{Deserialize, Serialize};

/// Calendar the birth date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    #[default]
    Solar,
    Lunar,
}

/// Gender flag. Only the fortune-cycle direction depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// A birth date with optional clock time.
///
/// `hour`/`minute` of `None` mean the time is unknown; it is treated as 00:00
/// and the 23:30 day rollover is not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: Option<u32>,
    #[serde(default)]
    pub minute: Option<u32>,
    #[serde(default)]
    pub calendar: CalendarType,
    /// Only meaningful when `calendar` is [`CalendarType::Lunar`].
    #[serde(default)]
    pub leap_month: bool,
    #[serde(default)]
    pub gender: Gender,
}

impl BirthInput {
    /// A solar (Gregorian) birth date with unknown time.
    pub fn solar(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: None,
            minute: None,
            calendar: CalendarType::Solar,
            leap_month: false,
            gender: Gender::Male,
        }
    }

    /// A lunar birth date with unknown time.
    pub fn lunar(year: i32, month: u32, day: u32, leap_month: bool) -> Self {
        Self {
            calendar: CalendarType::Lunar,
            leap_month,
            ..Self::solar(year, month, day)
        }
    }

    pub fn with_time(mut self, hour: u32, minute: u32) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Whether a clock time was supplied.
    pub fn time_known(&self) -> bool {
        self.hour.is_some()
    }

    /// `(hour, minute)` with unknown parts read as 0.
    pub fn clock(&self) -> (u32, u32) {
        (self.hour.unwrap_or(0), self.minute.unwrap_or(0))
    }
}
