//! Branch relations: combinations, clashes and punishments.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::branch::EarthlyBranch as B;
use crate::element::Element;
use crate::pillars::{FourPillars, Pillar};

// ---------------------------------------------------------------------------
// Relation sets
// ---------------------------------------------------------------------------

/// Triad (삼합) groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Triad {
    /// 申子辰
    Water,
    /// 亥卯未
    Wood,
    /// 寅午戌
    Fire,
    /// 巳酉丑
    Metal,
}

pub const ALL_TRIADS: [Triad; 4] = [Triad::Water, Triad::Wood, Triad::Fire, Triad::Metal];

impl Triad {
    /// Members in birth, peak, storage order.
    pub const fn members(self) -> [EarthlyBranch; 3] {
        match self {
            Self::Water => [B::Sin, B::Ja, B::Jin],
            Self::Wood => [B::Hae, B::Myo, B::Mi],
            Self::Fire => [B::In, B::O, B::Sul],
            Self::Metal => [B::Sa, B::Yu, B::Chuk],
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water => Element::Water,
            Self::Wood => Element::Wood,
            Self::Fire => Element::Fire,
            Self::Metal => Element::Metal,
        }
    }
}

/// The triad a branch belongs to. Every branch is in exactly one.
pub const fn triad_of(branch: EarthlyBranch) -> Triad {
    match branch {
        B::Sin | B::Ja | B::Jin => Triad::Water,
        B::Hae | B::Myo | B::Mi => Triad::Wood,
        B::In | B::O | B::Sul => Triad::Fire,
        B::Sa | B::Yu | B::Chuk => Triad::Metal,
    }
}

/// Paired combinations (육합).
pub const PAIRED_COMBINATIONS: [(EarthlyBranch, EarthlyBranch); 6] = [
    (B::Ja, B::Chuk),
    (B::In, B::Hae),
    (B::Myo, B::Sul),
    (B::Jin, B::Yu),
    (B::Sa, B::Sin),
    (B::O, B::Mi),
];

/// Directional combinations (방합 neighbours).
pub const DIRECTIONAL_COMBINATIONS: [(EarthlyBranch, EarthlyBranch); 6] = [
    (B::In, B::Myo),
    (B::Myo, B::Jin),
    (B::Sa, B::O),
    (B::Sin, B::Yu),
    (B::Yu, B::Sul),
    (B::Hae, B::Ja),
];

/// Clashes (충), opposite branches.
pub const CLASHES: [(EarthlyBranch, EarthlyBranch); 6] = [
    (B::Ja, B::O),
    (B::Chuk, B::Mi),
    (B::In, B::Sin),
    (B::Myo, B::Yu),
    (B::Jin, B::Sul),
    (B::Sa, B::Hae),
];

/// Punishment (형) groups.
pub const PUNISHMENT_GROUPS: [&[EarthlyBranch]; 3] = [
    &[B::In, B::Sa, B::Sin],
    &[B::Chuk, B::Sul, B::Mi],
    &[B::Ja, B::Myo],
];

fn in_pair_set(set: &[(EarthlyBranch, EarthlyBranch)], a: EarthlyBranch, b: EarthlyBranch) -> bool {
    set.iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Two distinct branches of the same triad.
pub fn is_triad_pair(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    a != b && triad_of(a) == triad_of(b)
}

pub fn is_paired_combination(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    in_pair_set(&PAIRED_COMBINATIONS, a, b)
}

pub fn is_directional_combination(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    in_pair_set(&DIRECTIONAL_COMBINATIONS, a, b)
}

pub fn is_clash(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    in_pair_set(&CLASHES, a, b)
}

/// Two distinct branches of the same punishment group.
pub fn is_punishment_pair(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    a != b
        && PUNISHMENT_GROUPS
            .iter()
            .any(|g| g.contains(&a) && g.contains(&b))
}

// ---------------------------------------------------------------------------
// Chart scan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelationKind {
    /// Two or three members of a triad; `complete` when all three distinct members are present.
    TriadCombination { triad: Triad, complete: bool },
    PairedCombination,
    DirectionalCombination,
    Clash,
    Punishment,
    SelfPunishment,
}

impl RelationKind {
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::TriadCombination { complete: true, .. } => "三合",
            Self::TriadCombination { complete: false, .. } => "半合",
            Self::PairedCombination => "六合",
            Self::DirectionalCombination => "方合",
            Self::Clash => "沖",
            Self::Punishment => "刑",
            Self::SelfPunishment => "自刑",
        }
    }

    pub const fn is_combination(self) -> bool {
        matches!(
            self,
            Self::TriadCombination { .. } | Self::PairedCombination | Self::DirectionalCombination
        )
    }
}

/// One relation found among a chart's branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRelation {
    #[serde(flatten)]
    pub kind: RelationKind,
    pub branches: Vec<EarthlyBranch>,
    pub pillars: Vec<Pillar>,
}

impl std::fmt::Display for BranchRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in &self.branches {
            write!(f, "{b}")?;
        }
        write!(f, " {}", self.kind.hanja())
    }
}

fn relation(
    kind: RelationKind,
    found: impl IntoIterator<Item = (Pillar, EarthlyBranch)>,
) -> BranchRelation {
    let (pillars, branches) = found.into_iter().unzip();
    BranchRelation {
        kind,
        branches,
        pillars,
    }
}

/// All relations among a set of placed branches.
///
/// Every pair is checked against each relation set, then whole-chart
/// patterns are added: complete triads, punishment groups with two or more
/// distinct members, and any branch seen three or more times (a triad
/// combination and a self-punishment).
pub fn relations_among(placed: &[(Pillar, EarthlyBranch)]) -> Vec<BranchRelation> {
    let mut out = Vec::new();

    for (i, &(pa, a)) in placed.iter().enumerate() {
        for &(pb, b) in &placed[i + 1..] {
            let pair = [(pa, a), (pb, b)];
            if is_triad_pair(a, b) {
                let kind = RelationKind::TriadCombination {
                    triad: triad_of(a),
                    complete: false,
                };
                out.push(relation(kind, pair));
            }
            if is_paired_combination(a, b) {
                out.push(relation(RelationKind::PairedCombination, pair));
            }
            if is_directional_combination(a, b) {
                out.push(relation(RelationKind::DirectionalCombination, pair));
            }
            if is_clash(a, b) {
                out.push(relation(RelationKind::Clash, pair));
            }
        }
    }

    for triad in ALL_TRIADS {
        let members = triad.members();
        if members.iter().all(|m| placed.iter().any(|&(_, b)| b == *m)) {
            let kind = RelationKind::TriadCombination {
                triad,
                complete: true,
            };
            let found = placed.iter().copied().filter(|(_, b)| members.contains(b));
            out.push(relation(kind, found));
        }
    }

    for group in PUNISHMENT_GROUPS {
        let present = group
            .iter()
            .filter(|m| placed.iter().any(|(_, b)| b == *m))
            .count();
        if present >= 2 {
            let found = placed.iter().copied().filter(|(_, b)| group.contains(b));
            out.push(relation(RelationKind::Punishment, found));
        }
    }

    let mut seen: Vec<EarthlyBranch> = Vec::new();
    for &(_, b) in placed {
        if seen.contains(&b) {
            continue;
        }
        seen.push(b);
        let repeated: Vec<_> = placed.iter().copied().filter(|&(_, x)| x == b).collect();
        if repeated.len() >= 3 {
            let kind = RelationKind::TriadCombination {
                triad: triad_of(b),
                complete: false,
            };
            out.push(relation(kind, repeated.clone()));
            out.push(relation(RelationKind::SelfPunishment, repeated));
        }
    }

    out
}

/// All branch relations inside one chart.
pub fn branch_relations(pillars: &FourPillars) -> Vec<BranchRelation> {
    let placed: Vec<_> = pillars
        .pairs()
        .into_iter()
        .map(|(p, pair)| (p, pair.branch()))
        .collect();
    relations_among(&placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::pillars::ALL_PILLARS;

    fn placed(branches: [EarthlyBranch; 4]) -> Vec<(Pillar, EarthlyBranch)> {
        ALL_PILLARS.into_iter().zip(branches).collect()
    }

    fn kinds(rel: &[BranchRelation]) -> Vec<RelationKind> {
        rel.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn every_branch_in_one_triad() {
        for b in ALL_BRANCHES {
            let n = ALL_TRIADS
                .iter()
                .filter(|t| t.members().contains(&b))
                .count();
            assert_eq!(n, 1, "{b}");
            assert!(triad_of(b).members().contains(&b));
        }
    }

    #[test]
    fn clashes_are_opposites() {
        for b in ALL_BRANCHES {
            assert!(is_clash(b, b.offset(6)));
            assert!(!is_clash(b, b.offset(5)));
        }
    }

    #[test]
    fn pair_sets_are_unordered() {
        assert!(is_paired_combination(B::Hae, B::In));
        assert!(is_paired_combination(B::In, B::Hae));
        assert!(is_directional_combination(B::Ja, B::Hae));
        assert!(!is_directional_combination(B::Ja, B::Chuk));
    }

    #[test]
    fn three_jin_flags_triad_and_self_punishment() {
        let rel = relations_among(&placed([B::Jin, B::O, B::Jin, B::Jin]));
        let self_p: Vec<_> = rel
            .iter()
            .filter(|r| r.kind == RelationKind::SelfPunishment)
            .collect();
        assert_eq!(self_p.len(), 1);
        assert_eq!(self_p[0].to_string(), "辰辰辰 自刑");
        assert_eq!(self_p[0].pillars, vec![Pillar::Year, Pillar::Day, Pillar::Hour]);
        assert!(rel.iter().any(|r| r.kind
            == RelationKind::TriadCombination {
                triad: Triad::Water,
                complete: false
            }
            && r.branches == vec![B::Jin; 3]));
    }

    #[test]
    fn complete_triad_reported_with_pairs() {
        let rel = relations_among(&placed([B::Sin, B::Ja, B::Jin, B::Yu]));
        let k = kinds(&rel);
        let complete = RelationKind::TriadCombination {
            triad: Triad::Water,
            complete: true,
        };
        assert!(k.contains(&complete));
        let partial = k
            .iter()
            .filter(|k| matches!(k, RelationKind::TriadCombination { complete: false, .. }))
            .count();
        assert_eq!(partial, 3);
        // 辰酉 六合, 申酉 方合
        assert!(k.contains(&RelationKind::PairedCombination));
        assert!(k.contains(&RelationKind::DirectionalCombination));
    }

    #[test]
    fn punishment_needs_two_distinct_members() {
        let rel = relations_among(&placed([B::In, B::Sa, B::O, B::O]));
        let p: Vec<_> = rel
            .iter()
            .filter(|r| r.kind == RelationKind::Punishment)
            .collect();
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].branches, vec![B::In, B::Sa]);

        let rel = relations_among(&placed([B::In, B::In, B::O, B::Mi]));
        assert!(!kinds(&rel).contains(&RelationKind::Punishment));
    }

    #[test]
    fn clash_reported_per_pair() {
        let rel = relations_among(&placed([B::Ja, B::O, B::Ja, B::Hae]));
        let clashes = rel.iter().filter(|r| r.kind == RelationKind::Clash).count();
        assert_eq!(clashes, 2);
    }

    #[test]
    fn relation_serializes_flat() {
        let rel = relations_among(&placed([B::Ja, B::O, B::Myo, B::Yu]));
        let json = serde_json::to_value(&rel[0]).unwrap();
        assert_eq!(json["kind"], "clash");
        assert_eq!(json["pillars"][0], "Year");
    }
}
