//! Ten gods (십신): a stem's role relative to the day master.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::hidden_stem::hidden_stems;
use crate::stem::HeavenlyStem;

/// The ten relational labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// 比肩
    Companion,
    /// 劫財
    RobWealth,
    /// 食神
    EatingGod,
    /// 傷官
    HurtingOfficer,
    /// 偏財
    IndirectWealth,
    /// 正財
    DirectWealth,
    /// 偏官 (七殺)
    SevenKillings,
    /// 正官
    DirectOfficer,
    /// 偏印
    IndirectResource,
    /// 正印
    DirectResource,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

const CO: TenGod = TenGod::Companion;
const RW: TenGod = TenGod::RobWealth;
const EG: TenGod = TenGod::EatingGod;
const HO: TenGod = TenGod::HurtingOfficer;
const IW: TenGod = TenGod::IndirectWealth;
const DW: TenGod = TenGod::DirectWealth;
const SK: TenGod = TenGod::SevenKillings;
const DO: TenGod = TenGod::DirectOfficer;
const IR: TenGod = TenGod::IndirectResource;
const DR: TenGod = TenGod::DirectResource;

/// Rows: day stem 甲..癸. Columns: other stem 甲..癸.
#[rustfmt::skip]
const TEN_GOD_TABLE: [[TenGod; 10]; 10] = [
    [CO, RW, EG, HO, IW, DW, SK, DO, IR, DR], // 甲
    [RW, CO, HO, EG, DW, IW, DO, SK, DR, IR], // 乙
    [IR, DR, CO, RW, EG, HO, IW, DW, SK, DO], // 丙
    [DR, IR, RW, CO, HO, EG, DW, IW, DO, SK], // 丁
    [SK, DO, IR, DR, CO, RW, EG, HO, IW, DW], // 戊
    [DO, SK, DR, IR, RW, CO, HO, EG, DW, IW], // 己
    [IW, DW, SK, DO, IR, DR, CO, RW, EG, HO], // 庚
    [DW, IW, DO, SK, DR, IR, RW, CO, HO, EG], // 辛
    [EG, HO, IW, DW, SK, DO, IR, DR, CO, RW], // 壬
    [HO, EG, DW, IW, DO, SK, DR, IR, RW, CO], // 癸
];

/// Labels that win over the main hidden stem when a branch carries them.
pub const BRANCH_TEN_GOD_PRIORITY: [TenGod; 4] = [
    TenGod::DirectOfficer,
    TenGod::DirectWealth,
    TenGod::DirectResource,
    TenGod::EatingGod,
];

/// Ten god of `other` as seen from `day_master`.
pub fn ten_god(day_master: HeavenlyStem, other: HeavenlyStem) -> TenGod {
    TEN_GOD_TABLE[day_master.index() as usize][other.index() as usize]
}

/// Ten god of a branch, read through its hidden stems.
pub fn branch_ten_god(day_master: HeavenlyStem, branch: EarthlyBranch) -> TenGod {
    let stems = hidden_stems(branch);
    BRANCH_TEN_GOD_PRIORITY
        .into_iter()
        .find(|wanted| stems.iter().any(|&s| ten_god(day_master, s) == *wanted))
        .unwrap_or_else(|| ten_god(day_master, stems[0]))
}
