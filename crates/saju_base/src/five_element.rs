//! Element lookups, napeum (납음) and element distribution over a chart.

use serde::{Deserialize, Deserializer, Serialize};

use crate::element::{ALL_ELEMENTS, Element};
use crate::pair::SexagenaryPair;
use crate::pillars::FourPillars;

/// Sound element of a sexagenary pair; consecutive pairs share one.
///
/// Deserializing looks the name up in the napeum table, so only the thirty
/// known names are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Napeum {
    pub name: &'static str,
    pub element: Element,
}

#[rustfmt::skip]
const NAPEUM_TABLE: [(&str, Element); 30] = [
    ("海中金", Element::Metal), ("爐中火", Element::Fire),  ("大林木", Element::Wood),
    ("路旁土", Element::Earth), ("劍鋒金", Element::Metal), ("山頭火", Element::Fire),
    ("澗下水", Element::Water), ("城頭土", Element::Earth), ("白蠟金", Element::Metal),
    ("楊柳木", Element::Wood),  ("泉中水", Element::Water), ("屋上土", Element::Earth),
    ("霹靂火", Element::Fire),  ("松柏木", Element::Wood),  ("長流水", Element::Water),
    ("沙中金", Element::Metal), ("山下火", Element::Fire),  ("平地木", Element::Wood),
    ("壁上土", Element::Earth), ("金箔金", Element::Metal), ("覆燈火", Element::Fire),
    ("天河水", Element::Water), ("大驛土", Element::Earth), ("釵釧金", Element::Metal),
    ("桑柘木", Element::Wood),  ("大溪水", Element::Water), ("沙中土", Element::Earth),
    ("天上火", Element::Fire),  ("石榴木", Element::Wood),  ("大海水", Element::Water),
];

pub fn napeum(pair: SexagenaryPair) -> Napeum {
    let (name, element) = NAPEUM_TABLE[(pair.index() / 2) as usize];
    Napeum { name, element }
}

/// Napeum with the given hanja name.
pub fn napeum_by_name(name: &str) -> Option<Napeum> {
    NAPEUM_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(name, element)| Napeum { name, element })
}

impl<'de> Deserialize<'de> for Napeum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            name: String,
            element: Element,
        }
        let raw = Raw::deserialize(deserializer)?;
        match napeum_by_name(&raw.name) {
            Some(n) if n.element == raw.element => Ok(n),
            Some(n) => Err(serde::de::Error::custom(format_args!(
                "napeum {} is {}, not {}",
                n.name, n.element, raw.element
            ))),
            None => Err(serde::de::Error::custom(format_args!(
                "unknown napeum {}",
                raw.name
            ))),
        }
    }
}

/// Element counts over the eight visible characters of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDistribution {
    /// Counts indexed by [`Element::index`].
    pub counts: [u8; 5],
    /// Most frequent element; ties go to the earlier one in generating order.
    pub strongest: Element,
    /// Elements that do not appear at all.
    pub missing: Vec<Element>,
}

impl ElementDistribution {
    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    pub fn lacks(&self, element: Element) -> bool {
        self.count(element) == 0
    }
}

pub fn element_distribution(pillars: &FourPillars) -> ElementDistribution {
    let mut counts = [0u8; 5];
    for (_, pair) in pillars.pairs() {
        counts[pair.stem().element().index() as usize] += 1;
        counts[pair.branch().element().index() as usize] += 1;
    }
    let mut strongest = Element::Wood;
    for e in ALL_ELEMENTS {
        if counts[e.index() as usize] > counts[strongest.index() as usize] {
            strongest = e;
        }
    }
    let missing = ALL_ELEMENTS
        .into_iter()
        .filter(|e| counts[e.index() as usize] == 0)
        .collect();
    ElementDistribution {
        counts,
        strongest,
        missing,
    }
}
