//! Sexagenary alphabet, four-pillar derivation and chart attributes.
//!
//! This crate provides:
//! - Stems, branches, elements and the 60-pair cycle
//! - Four-pillar derivation from a civil date-time
//! - Attribute resolvers: ten gods, twelve stages, hidden stems, napeum and
//!   element distribution, void branches, auspicious and inauspicious stars,
//!   branch relations, fortune cycles
//! - [`analyze_chart`], which runs every resolver over one chart
//!
//! All resolvers are pure functions over `const` tables.

pub mod branch;
pub mod branch_relation;
pub mod chart;
pub mod element;
pub mod error;
pub mod five_element;
pub mod fortune_cycle;
pub mod guin;
pub mod hidden_stem;
pub mod pair;
pub mod pillars;
pub mod sinsal;
pub mod stem;
pub mod ten_god;
pub mod twelve_stage;
pub mod void_branch;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use branch_relation::{
    BranchRelation, RelationKind, Triad, branch_relations, is_clash, is_paired_combination,
    is_punishment_pair, is_triad_pair, relations_among, triad_of,
};
pub use chart::{ChartAnalysis, ChartOptions, HiddenStem, PillarColumn, analyze_chart};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::SajuError;
pub use saju_time::Gender;
pub use five_element::{
    ElementDistribution, Napeum, element_distribution, napeum, napeum_by_name,
};
pub use fortune_cycle::{
    Direction, FortuneCycle, FortuneOptions, StartAgeRule, active_cycle, fortune_cycles,
};
pub use guin::{ALL_AUSPICIOUS_STARS, AuspiciousStar, StarActivation, auspicious_stars};
pub use hidden_stem::{hidden_stems, main_hidden_stem};
pub use pair::SexagenaryPair;
pub use pillars::{ALL_PILLARS, FourPillars, Pillar, day_pillar_of, derive};
pub use sinsal::{ALL_INAUSPICIOUS_STARS, InauspiciousStar, PillarStars, inauspicious_stars};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_god::{TenGod, branch_ten_god, ten_god};
pub use twelve_stage::{TwelveStage, twelve_stage};
pub use void_branch::void_branches;
