//! Error types for pillar derivation and chart analysis.

use saju_time::CalendarError;
use thiserror::Error;

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Errors from the sexagenary layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Birth input could not be placed on the civil calendar.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Stem and branch have different polarity, so they never meet in the 60-cycle.
    #[error("{stem}{branch} is not a sexagenary pair (polarity mismatch)")]
    InvalidSexagenaryPair {
        stem: HeavenlyStem,
        branch: EarthlyBranch,
    },

    /// Text did not parse as a two-character stem-branch pair.
    #[error("cannot parse sexagenary pair from {0:?}")]
    ParsePair(String),
}
