//! Heavenly stems (천간).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The ten heavenly stems, 甲 (Gap) through 癸 (Gye).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All ten stems in order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

impl HeavenlyStem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for an index, taken modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Korean romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    pub const fn hanja(self) -> char {
        match self {
            Self::Gap => '甲',
            Self::Eul => '乙',
            Self::Byeong => '丙',
            Self::Jeong => '丁',
            Self::Mu => '戊',
            Self::Gi => '己',
            Self::Gyeong => '庚',
            Self::Sin => '辛',
            Self::Im => '壬',
            Self::Gye => '癸',
        }
    }

    pub fn from_hanja(c: char) -> Option<Self> {
        ALL_STEMS.into_iter().find(|s| s.hanja() == c)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// 甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal, 壬癸 water.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// The stem `n` steps further along the cycle.
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index((self.index() as i32 + n).rem_euclid(10) as u8)
    }

    /// Partner in a stem combination (甲己, 乙庚, 丙辛, 丁壬, 戊癸).
    pub const fn combination_partner(self) -> Self {
        self.offset(5)
    }

    pub fn combines_with(self, other: Self) -> bool {
        self.combination_partner() == other
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}
