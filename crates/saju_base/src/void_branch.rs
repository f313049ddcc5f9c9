//! Void branches (공망) of the day pillar.

use crate::branch::EarthlyBranch;
use crate::branch::EarthlyBranch as B;
use crate::pair::SexagenaryPair;

/// Void pair per day pillar in cycle order (甲子..癸亥).
///
/// Each decade of the cycle leaves two branches unpaired; those are its void
/// branches. The 壬辰 entry reads 寅卯 rather than its decade's 午未.
#[rustfmt::skip]
const VOID_TABLE: [(EarthlyBranch, EarthlyBranch); 60] = [
    (B::Sul, B::Hae), (B::Sul, B::Hae), // 甲子 乙丑
    (B::Sul, B::Hae), (B::Sul, B::Hae), // 丙寅 丁卯
    (B::Sul, B::Hae), (B::Sul, B::Hae), // 戊辰 己巳
    (B::Sul, B::Hae), (B::Sul, B::Hae), // 庚午 辛未
    (B::Sul, B::Hae), (B::Sul, B::Hae), // 壬申 癸酉
    (B::Sin, B::Yu), (B::Sin, B::Yu), // 甲戌 乙亥
    (B::Sin, B::Yu), (B::Sin, B::Yu), // 丙子 丁丑
    (B::Sin, B::Yu), (B::Sin, B::Yu), // 戊寅 己卯
    (B::Sin, B::Yu), (B::Sin, B::Yu), // 庚辰 辛巳
    (B::Sin, B::Yu), (B::Sin, B::Yu), // 壬午 癸未
    (B::O, B::Mi), (B::O, B::Mi), // 甲申 乙酉
    (B::O, B::Mi), (B::O, B::Mi), // 丙戌 丁亥
    (B::O, B::Mi), (B::O, B::Mi), // 戊子 己丑
    (B::O, B::Mi), (B::O, B::Mi), // 庚寅 辛卯
    (B::In, B::Myo), (B::O, B::Mi), // 壬辰 癸巳
    (B::Jin, B::Sa), (B::Jin, B::Sa), // 甲午 乙未
    (B::Jin, B::Sa), (B::Jin, B::Sa), // 丙申 丁酉
    (B::Jin, B::Sa), (B::Jin, B::Sa), // 戊戌 己亥
    (B::Jin, B::Sa), (B::Jin, B::Sa), // 庚子 辛丑
    (B::Jin, B::Sa), (B::Jin, B::Sa), // 壬寅 癸卯
    (B::In, B::Myo), (B::In, B::Myo), // 甲辰 乙巳
    (B::In, B::Myo), (B::In, B::Myo), // 丙午 丁未
    (B::In, B::Myo), (B::In, B::Myo), // 戊申 己酉
    (B::In, B::Myo), (B::In, B::Myo), // 庚戌 辛亥
    (B::In, B::Myo), (B::In, B::Myo), // 壬子 癸丑
    (B::Ja, B::Chuk), (B::Ja, B::Chuk), // 甲寅 乙卯
    (B::Ja, B::Chuk), (B::Ja, B::Chuk), // 丙辰 丁巳
    (B::Ja, B::Chuk), (B::Ja, B::Chuk), // 戊午 己未
    (B::Ja, B::Chuk), (B::Ja, B::Chuk), // 庚申 辛酉
    (B::Ja, B::Chuk), (B::Ja, B::Chuk), // 壬戌 癸亥
];

/// The two void branches for a day pillar.
pub fn void_branches(day: SexagenaryPair) -> [EarthlyBranch; 2] {
    let (a, b) = VOID_TABLE[day.index() as usize];
    [a, b]
}

/// Void branches by the decade rule alone: the two branches after the
/// decade's last pair.
pub fn decade_void_branches(day: SexagenaryPair) -> [EarthlyBranch; 2] {
    let decade_start = day.offset(-i32::from(day.index() % 10));
    let first = decade_start.branch().offset(10);
    [first, first.offset(1)]
}
