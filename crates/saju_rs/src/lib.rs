//! Convenience facade for the saju four-pillars engine.
//!
//! Takes a [`BirthInput`] all the way to a chart and its scores without the
//! caller wiring the calendar, derivation and scoring crates together.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let input = BirthInput::solar(1992, 2, 6).with_time(14, 10);
//! let pillars = compute_four_pillars(&input)?;
//! assert_eq!(pillars.to_string(), "壬申 壬寅 壬子 丁未");
//!
//! let chart = analyze_chart(&pillars);
//! let today = score_today_fortune(&chart, chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! println!("today: {}", today.total);
//! ```

pub mod convenience;
pub mod summary;

// Primary re-exports: callers should only need `use saju_rs::*`
pub use convenience::{
    analyze_chart, analyze_chart_with, compute_four_pillars, compute_four_pillars_with,
    compute_four_pillars_with_table, score_compatibility, score_today_fortune,
};
pub use summary::{BirthSummary, birth_summary};

pub use saju_config::{ConfigError, EngineConfig};
pub use saju_time::{
    BirthInput, CalendarError, CalendarType, Gender, LunarDate, LunarTable, PackedLunarTable,
    lunar_to_solar, solar_to_lunar,
};

pub use saju_base::{
    ALL_ELEMENTS, AuspiciousStar, BranchRelation, ChartAnalysis, EarthlyBranch, Element,
    FortuneCycle, FourPillars, HeavenlyStem, InauspiciousStar, Pillar, RelationKind, SajuError,
    SexagenaryPair, StartAgeRule, TenGod, TwelveStage, active_cycle, day_pillar_of,
};
pub use saju_score::{Category, CategoryScore, Interaction, ScoreResult};
