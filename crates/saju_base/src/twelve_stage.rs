//! Twelve life stages (12운성) of the day master across the branches.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// The twelve stages in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwelveStage {
    /// 長生
    Birth,
    /// 沐浴
    Bath,
    /// 冠帶
    Cap,
    /// 建祿
    Official,
    /// 帝旺
    Prosperity,
    /// 衰
    Decline,
    /// 病
    Illness,
    /// 死
    Death,
    /// 墓
    Burial,
    /// 絶
    Nothingness,
    /// 胎
    Embryo,
    /// 養
    Nurture,
}

pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::Birth,
    TwelveStage::Bath,
    TwelveStage::Cap,
    TwelveStage::Official,
    TwelveStage::Prosperity,
    TwelveStage::Decline,
    TwelveStage::Illness,
    TwelveStage::Death,
    TwelveStage::Burial,
    TwelveStage::Nothingness,
    TwelveStage::Embryo,
    TwelveStage::Nurture,
];

impl TwelveStage {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Birth => "長生",
            Self::Bath => "沐浴",
            Self::Cap => "冠帶",
            Self::Official => "建祿",
            Self::Prosperity => "帝旺",
            Self::Decline => "衰",
            Self::Illness => "病",
            Self::Death => "死",
            Self::Burial => "墓",
            Self::Nothingness => "絶",
            Self::Embryo => "胎",
            Self::Nurture => "養",
        }
    }
}

impl std::fmt::Display for TwelveStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

const BI: TwelveStage = TwelveStage::Birth;
const BA: TwelveStage = TwelveStage::Bath;
const CA: TwelveStage = TwelveStage::Cap;
const OF: TwelveStage = TwelveStage::Official;
const PR: TwelveStage = TwelveStage::Prosperity;
const DE: TwelveStage = TwelveStage::Decline;
const IL: TwelveStage = TwelveStage::Illness;
const DT: TwelveStage = TwelveStage::Death;
const BU: TwelveStage = TwelveStage::Burial;
const NO: TwelveStage = TwelveStage::Nothingness;
const EM: TwelveStage = TwelveStage::Embryo;
const NU: TwelveStage = TwelveStage::Nurture;

/// Rows: stem 甲..癸. Columns: branch 子..亥.
#[rustfmt::skip]
const STAGE_TABLE: [[TwelveStage; 12]; 10] = [
    [BA, CA, OF, PR, DE, IL, DT, BU, NO, EM, NU, BI], // 甲
    [IL, DE, PR, OF, CA, BA, BI, NU, EM, NO, BU, DT], // 乙
    [EM, NU, BI, BA, CA, OF, PR, DE, IL, DT, BU, NO], // 丙
    [NO, BU, DT, IL, DE, PR, OF, CA, BA, BI, NU, EM], // 丁
    [EM, NU, BI, BA, CA, OF, PR, DE, IL, DT, BU, NO], // 戊
    [NO, BU, DT, IL, DE, PR, OF, CA, BA, BI, NU, EM], // 己
    [DT, BU, NO, EM, NU, BI, BA, CA, OF, PR, DE, IL], // 庚
    [BI, NU, EM, NO, BU, DT, IL, DE, PR, OF, CA, BA], // 辛
    [PR, DE, IL, DT, BU, NO, EM, NU, BI, BA, CA, OF], // 壬
    [OF, CA, BA, BI, NU, EM, NO, BU, DT, IL, DE, PR], // 癸
];

/// Stage of `stem` in `branch`.
pub fn twelve_stage(stem: HeavenlyStem, branch: EarthlyBranch) -> TwelveStage {
    STAGE_TABLE[stem.index() as usize][branch.index() as usize]
}
