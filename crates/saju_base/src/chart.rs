//! Chart analysis: every resolver applied to one set of pillars.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::branch::EarthlyBranch;
use crate::branch_relation::{BranchRelation, branch_relations};
use crate::element::Element;
use crate::five_element::{ElementDistribution, Napeum, element_distribution, napeum};
use crate::fortune_cycle::{FortuneCycle, FortuneOptions, fortune_cycles};
use crate::guin::{AuspiciousStar, StarActivation, auspicious_stars};
use crate::hidden_stem::hidden_stems;
use crate::pair::SexagenaryPair;
use crate::pillars::{FourPillars, Pillar};
use crate::sinsal::{InauspiciousStar, PillarStars, inauspicious_stars};
use crate::stem::HeavenlyStem;
use crate::ten_god::{TenGod, branch_ten_god, ten_god};
use crate::twelve_stage::{TwelveStage, twelve_stage};
use crate::void_branch::void_branches;

/// Knobs for [`analyze_chart`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartOptions {
    pub fortune: FortuneOptions,
}

/// A hidden stem with its ten god.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: HeavenlyStem,
    pub ten_god: TenGod,
}

/// Everything derived for one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarColumn {
    pub pillar: Pillar,
    pub pair: SexagenaryPair,
    /// `None` on the day pillar: its stem is the day master.
    pub stem_ten_god: Option<TenGod>,
    pub branch_ten_god: TenGod,
    pub hidden_stems: Vec<HiddenStem>,
    pub twelve_stage: TwelveStage,
    pub stem_element: Element,
    pub branch_element: Element,
    pub napeum: Napeum,
}

/// Derived view over a set of four pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub pillars: FourPillars,
    pub day_master: HeavenlyStem,
    /// Year, month, day, hour.
    pub columns: Vec<PillarColumn>,
    pub elements: ElementDistribution,
    pub void_branches: [EarthlyBranch; 2],
    pub auspicious_stars: Vec<StarActivation>,
    pub inauspicious_stars: Vec<PillarStars>,
    pub branch_relations: Vec<BranchRelation>,
    pub fortune_cycles: Vec<FortuneCycle>,
}

impl ChartAnalysis {
    pub fn column(&self, pillar: Pillar) -> Option<&PillarColumn> {
        self.columns.iter().find(|c| c.pillar == pillar)
    }

    pub fn has_auspicious(&self, star: AuspiciousStar) -> bool {
        self.auspicious_stars.iter().any(|a| a.star == star)
    }

    /// Whether the star appears on any pillar.
    pub fn has_inauspicious(&self, star: InauspiciousStar) -> bool {
        self.inauspicious_stars
            .iter()
            .any(|p| p.stars.contains(&star))
    }

    pub fn branches(&self) -> [EarthlyBranch; 4] {
        self.pillars.branches()
    }
}

fn column(pillars: &FourPillars, pillar: Pillar) -> PillarColumn {
    let day_master = pillars.day_master();
    let pair = pillars.get(pillar);
    let stem = pair.stem();
    let branch = pair.branch();
    PillarColumn {
        pillar,
        pair,
        stem_ten_god: (pillar != Pillar::Day).then(|| ten_god(day_master, stem)),
        branch_ten_god: branch_ten_god(day_master, branch),
        hidden_stems: hidden_stems(branch)
            .iter()
            .map(|&s| HiddenStem {
                stem: s,
                ten_god: ten_god(day_master, s),
            })
            .collect(),
        twelve_stage: twelve_stage(day_master, branch),
        stem_element: stem.element(),
        branch_element: branch.element(),
        napeum: napeum(pair),
    }
}

/// Apply every resolver to the pillars.
pub fn analyze_chart(pillars: &FourPillars, options: &ChartOptions) -> ChartAnalysis {
    let analysis = ChartAnalysis {
        pillars: *pillars,
        day_master: pillars.day_master(),
        columns: pillars
            .pairs()
            .into_iter()
            .map(|(p, _)| column(pillars, p))
            .collect(),
        elements: element_distribution(pillars),
        void_branches: void_branches(pillars.day),
        auspicious_stars: auspicious_stars(pillars),
        inauspicious_stars: inauspicious_stars(pillars),
        branch_relations: branch_relations(pillars),
        fortune_cycles: fortune_cycles(pillars, &options.fortune),
    };
    debug!(
        chart = %pillars,
        auspicious = analysis.auspicious_stars.len(),
        relations = analysis.branch_relations.len(),
        "chart analysed"
    );
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use saju_time::Gender;

    fn sample() -> ChartAnalysis {
        let civil = NaiveDate::from_ymd_opt(1992, 2, 6)
            .unwrap()
            .and_hms_opt(14, 10, 0)
            .unwrap();
        let pillars = crate::pillars::derive(civil, true, 1992, Gender::Male).unwrap();
        analyze_chart(&pillars, &ChartOptions::default())
    }

    #[test]
    fn day_master_has_no_stem_ten_god() {
        let a = sample();
        assert_eq!(a.columns.len(), 4);
        assert_eq!(a.column(Pillar::Day).unwrap().stem_ten_god, None);
        // 壬 over 壬 year stem
        assert_eq!(
            a.column(Pillar::Year).unwrap().stem_ten_god,
            Some(TenGod::Companion)
        );
        // 丁 hour stem is 正財 for 壬
        assert_eq!(
            a.column(Pillar::Hour).unwrap().stem_ten_god,
            Some(TenGod::DirectWealth)
        );
    }

    #[test]
    fn hidden_stems_carry_ten_gods() {
        let a = sample();
        // 未 = 己丁乙 under 壬: 正官, 正財, 傷官
        let hour = a.column(Pillar::Hour).unwrap();
        let gods: Vec<_> = hour.hidden_stems.iter().map(|h| h.ten_god).collect();
        assert_eq!(
            gods,
            vec![TenGod::DirectOfficer, TenGod::DirectWealth, TenGod::HurtingOfficer]
        );
        assert_eq!(hour.branch_ten_god, TenGod::DirectOfficer);
    }

    #[test]
    fn void_and_cycles() {
        let a = sample();
        // 壬子 day sits in the 甲辰 decade
        assert_eq!(a.void_branches, [EarthlyBranch::In, EarthlyBranch::Myo]);
        assert_eq!(a.fortune_cycles.len(), 10);
    }

    #[test]
    fn serializes() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["pillars"]["day"], "壬子");
        assert_eq!(json["columns"][3]["napeum"]["name"], "天河水");
    }
}
