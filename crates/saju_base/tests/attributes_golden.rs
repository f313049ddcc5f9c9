//! Attribute resolvers over whole charts.

use chrono::NaiveDate;
use saju_base::{
    ALL_BRANCHES, ALL_STEMS, AuspiciousStar, ChartOptions, EarthlyBranch, FourPillars, Gender,
    InauspiciousStar, Pillar, RelationKind, SexagenaryPair, TenGod, analyze_chart, ten_god,
    twelve_stage, void_branches,
};

fn pair(s: &str) -> SexagenaryPair {
    s.parse().unwrap()
}

fn chart(year: &str, month: &str, day: &str, hour: &str) -> FourPillars {
    FourPillars {
        year: pair(year),
        month: pair(month),
        day: pair(day),
        hour: pair(hour),
        birth_year: 1988,
        gender: Gender::Female,
        time_known: true,
        civil: NaiveDate::from_ymd_opt(1988, 5, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
    }
}

#[test]
fn im_jin_day_void_is_in_myo() {
    assert_eq!(
        void_branches(pair("壬辰")),
        [EarthlyBranch::In, EarthlyBranch::Myo]
    );
}

#[test]
fn three_jin_chart() {
    let p = chart("戊辰", "丙辰", "壬辰", "甲辰");
    let a = analyze_chart(&p, &ChartOptions::default());
    let self_punish: Vec<_> = a
        .branch_relations
        .iter()
        .filter(|r| r.kind == RelationKind::SelfPunishment)
        .collect();
    assert_eq!(self_punish.len(), 1);
    assert_eq!(self_punish[0].branches.len(), 4);
    assert!(
        a.branch_relations
            .iter()
            .any(|r| matches!(r.kind, RelationKind::TriadCombination { .. }))
    );
    assert_eq!(a.void_branches, [EarthlyBranch::In, EarthlyBranch::Myo]);
}

#[test]
fn tables_are_total() {
    for s in ALL_STEMS {
        for o in ALL_STEMS {
            let _: TenGod = ten_god(s, o);
        }
        for b in ALL_BRANCHES {
            let _ = twelve_stage(s, b);
        }
    }
}

#[test]
fn heavenly_noble_activation_reports_pillars() {
    // day 甲: 天乙 is 丑 or 未; only the month branch 丑 matches
    let p = chart("庚午", "丁丑", "甲子", "丙寅");
    let a = analyze_chart(&p, &ChartOptions::default());
    let noble = a
        .auspicious_stars
        .iter()
        .find(|s| s.star == AuspiciousStar::HeavenlyNoble)
        .unwrap();
    assert_eq!(noble.pillars, vec![Pillar::Month]);
    assert!(a.has_auspicious(AuspiciousStar::HeavenlyNoble));
}

#[test]
fn inactive_star_not_reported() {
    // day 甲: 文昌 is 巳, absent here
    let p = chart("庚午", "丁丑", "甲子", "丙寅");
    let a = analyze_chart(&p, &ChartOptions::default());
    assert!(!a.has_auspicious(AuspiciousStar::Literary));
}

#[test]
fn yangin_on_day_branch_is_reported() {
    // 丙午 day: 羊刃 of 丙 is 午
    let p = chart("甲子", "丙子", "丙午", "戊子");
    let a = analyze_chart(&p, &ChartOptions::default());
    let day = &a.inauspicious_stars[2];
    assert_eq!(day.pillar, Pillar::Day);
    assert!(day.stars.contains(&InauspiciousStar::Yangin));
    assert!(a.has_inauspicious(InauspiciousStar::Yangin));
}

#[test]
fn analysis_is_deterministic() {
    let p = chart("戊辰", "丁巳", "癸酉", "丙辰");
    let opts = ChartOptions::default();
    assert_eq!(analyze_chart(&p, &opts), analyze_chart(&p, &opts));
}
