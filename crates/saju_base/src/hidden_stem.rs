//! Hidden stems (지장간) carried by each branch.

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;
use crate::stem::HeavenlyStem as S;

/// Hidden stems per branch (子..亥), main stem first.
const HIDDEN_STEMS: [&[HeavenlyStem]; 12] = [
    &[S::Gye],                     // 子
    &[S::Gi, S::Gye, S::Sin],      // 丑
    &[S::Gap, S::Byeong, S::Mu],   // 寅
    &[S::Eul],                     // 卯
    &[S::Mu, S::Eul, S::Gye],      // 辰
    &[S::Byeong, S::Gyeong, S::Mu], // 巳
    &[S::Jeong, S::Gi],            // 午
    &[S::Gi, S::Jeong, S::Eul],    // 未
    &[S::Gyeong, S::Im, S::Mu],    // 申
    &[S::Sin],                     // 酉
    &[S::Mu, S::Sin, S::Jeong],    // 戌
    &[S::Im, S::Gap],              // 亥
];

/// Hidden stems of a branch, main stem first (1 to 3 entries).
pub fn hidden_stems(branch: EarthlyBranch) -> &'static [HeavenlyStem] {
    HIDDEN_STEMS[branch.index() as usize]
}

/// Main (first) hidden stem of a branch.
pub fn main_hidden_stem(branch: EarthlyBranch) -> HeavenlyStem {
    hidden_stems(branch)[0]
}
