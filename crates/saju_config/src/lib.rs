//! Engine configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! [fortune]
//! decades = 10
//! start_age = { fixed = 1 }        # or "solar-term-proximity"
//!
//! [time]
//! late_zi_rollover = true
//!
//! [log]
//! level = "warn"
//! ```
//!
//! Every section and key is optional; missing values take their defaults.
//! Unknown keys and out-of-range values are rejected.

pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_base::fortune_cycle::{DEFAULT_DECADES, MAX_DECADES, MIN_DECADES};
use saju_base::{ChartOptions, FortuneOptions, StartAgeRule};

pub use error::ConfigError;

/// Log levels accepted by `[log] level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FortuneSection {
    pub decades: u8,
    pub start_age: StartAgeRule,
}

impl Default for FortuneSection {
    fn default() -> Self {
        Self {
            decades: DEFAULT_DECADES,
            start_age: StartAgeRule::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeSection {
    /// Count births from 23:30 as the next day when the time is known.
    pub late_zi_rollover: bool,
}

impl Default for TimeSection {
    fn default() -> Self {
        Self {
            late_zi_rollover: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Engine configuration used at startup time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub fortune: FortuneSection,
    pub time: TimeSection,
    pub log: LogSection,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DECADES..=MAX_DECADES).contains(&self.fortune.decades) {
            return Err(ConfigError::Invalid(
                "fortune.decades must be between 8 and 12",
            ));
        }
        if self.fortune.start_age == StartAgeRule::Fixed(0) {
            return Err(ConfigError::Invalid(
                "fortune.start_age must be at least 1",
            ));
        }
        if !LOG_LEVELS
            .iter()
            .any(|l| l.eq_ignore_ascii_case(&self.log.level))
        {
            return Err(ConfigError::Invalid(
                "log.level must be one of error, warn, info, debug, trace",
            ));
        }
        Ok(())
    }

    pub fn fortune_options(&self) -> FortuneOptions {
        FortuneOptions {
            decades: self.fortune.decades,
            start_age: self.fortune.start_age,
        }
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            fortune: self.fortune_options(),
        }
    }
}
