//! Scores over analysed four-pillar charts.
//!
//! - [`score_compatibility`]: symmetric two-person score
//! - [`score_today_fortune`]: one person against a calendar day
//!
//! Both return a [`ScoreResult`] with every score in `[1, 100]`.

pub mod compatibility;
pub mod today;
pub mod types;

pub use compatibility::score_compatibility;
pub use today::score_today_fortune;
pub use types::{
    Category, CategoryScore, Interaction, MAX_SCORE, MIN_SCORE, ScoreResult, clamp_score,
};
