//! Sexagenary (stem, branch) pairs: the 60-cycle.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::branch::EarthlyBranch;
use crate::error::SajuError;
use crate::stem::HeavenlyStem;

/// A stem-branch pair of equal polarity.
///
/// Only 60 of the 120 raw combinations exist; the fields are private so every
/// value is one of them. Serializes as its two hanja characters (`"壬辰"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SexagenaryPair {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl SexagenaryPair {
    /// Number of pairs in the cycle.
    pub const CYCLE_LEN: u8 = 60;

    /// Pair from its parts. Fails when stem and branch polarity differ.
    pub fn from_parts(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, SajuError> {
        if stem.polarity() != branch.polarity() {
            return Err(SajuError::InvalidSexagenaryPair { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Pair at a cycle position, taken modulo 60 (0 = 甲子, 59 = 癸亥).
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % Self::CYCLE_LEN;
        Self {
            stem: HeavenlyStem::from_index(i % 10),
            branch: EarthlyBranch::from_index(i % 12),
        }
    }

    /// Position in the 60-cycle: `(6·stem − 5·branch) mod 60`.
    pub const fn index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    /// The pair `n` steps further along the cycle (negative steps go back).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_cycle_index((self.index() as i32 + n).rem_euclid(60) as u8)
    }

    /// Every pair in cycle order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::CYCLE_LEN).map(Self::from_cycle_index)
    }
}

impl std::fmt::Display for SexagenaryPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl FromStr for SexagenaryPair {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => {
                HeavenlyStem::from_hanja(a).zip(EarthlyBranch::from_hanja(b))
            }
            _ => None,
        };
        let (stem, branch) = parsed.ok_or_else(|| SajuError::ParsePair(s.to_string()))?;
        Self::from_parts(stem, branch)
    }
}

impl Serialize for SexagenaryPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SexagenaryPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
