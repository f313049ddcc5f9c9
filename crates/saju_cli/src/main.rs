use std::path::PathBuf;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use saju_rs::{
    ALL_ELEMENTS, BirthInput, BirthSummary, ChartAnalysis, EngineConfig, FourPillars, Gender,
    LunarDate, ScoreResult, analyze_chart_with, birth_summary, compute_four_pillars_with,
    day_pillar_of, lunar_to_solar, score_compatibility, score_today_fortune, solar_to_lunar,
};

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillars chart and scoring CLI")]
struct Cli {
    /// Engine configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth
    Pillars {
        /// Birth: YYYY-MM-DD[THH:MM][,lunar][,leap][,female]
        birth: String,
    },
    /// Full chart analysis for a birth
    Chart {
        /// Birth: YYYY-MM-DD[THH:MM][,lunar][,leap][,female]
        birth: String,
    },
    /// Compatibility of two births
    Compat {
        /// First birth
        a: String,
        /// Second birth
        b: String,
    },
    /// Today's fortune for a birth
    Today {
        /// Birth: YYYY-MM-DD[THH:MM][,lunar][,leap][,female]
        birth: String,
        /// Day to score (YYYY-MM-DD, default: today)
        #[arg(long)]
        on: Option<String>,
    },
    /// Convert between solar and lunar dates
    Lunar {
        /// Date (YYYY-MM-DD); solar unless --to-solar
        date: String,
        /// Treat the date as lunar and print the solar date
        #[arg(long)]
        to_solar: bool,
        /// Lunar date is in a leap month (with --to-solar)
        #[arg(long)]
        leap: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    init_logging(cli.verbose, &config);

    match cli.command {
        Commands::Pillars { birth } => {
            let input = require_birth(&birth);
            let pillars = require_pillars(&input, &config);
            if cli.json {
                #[derive(Serialize)]
                struct Output<'a> {
                    pillars: &'a FourPillars,
                    summary: BirthSummary,
                }
                print_json(&Output {
                    pillars: &pillars,
                    summary: birth_summary(&input, &pillars),
                });
            } else {
                print_pillars(&input, &pillars);
            }
        }

        Commands::Chart { birth } => {
            let input = require_birth(&birth);
            let pillars = require_pillars(&input, &config);
            let chart = analyze_chart_with(&pillars, &config);
            if cli.json {
                print_json(&chart);
            } else {
                print_pillars(&input, &pillars);
                print_chart(&chart);
            }
        }

        Commands::Compat { a, b } => {
            let a = analyze_chart_with(&require_pillars(&require_birth(&a), &config), &config);
            let b = analyze_chart_with(&require_pillars(&require_birth(&b), &config), &config);
            let result = score_compatibility(&a, &b);
            if cli.json {
                print_json(&result);
            } else {
                println!("{} × {}", a.pillars, b.pillars);
                print_score(&result);
            }
        }

        Commands::Today { birth, on } => {
            let date = match on {
                Some(s) => require_date(&s),
                None => Local::now().date_naive(),
            };
            let pillars = require_pillars(&require_birth(&birth), &config);
            let chart = analyze_chart_with(&pillars, &config);
            let result = score_today_fortune(&chart, date);
            if cli.json {
                print_json(&result);
            } else {
                println!("{date} ({}) for {pillars}", day_pillar_of(date));
                print_score(&result);
            }
        }

        Commands::Lunar {
            date,
            to_solar,
            leap,
        } => {
            if to_solar {
                let (year, month, day) = parse_ymd(&date).unwrap_or_else(|e| {
                    eprintln!("Invalid date: {e}");
                    std::process::exit(1);
                });
                let lunar = LunarDate::new(year, month, day, leap);
                match lunar_to_solar(lunar) {
                    Some(d) if cli.json => print_json(&d),
                    Some(d) => println!("{lunar} (lunar) = {d}"),
                    None => {
                        eprintln!("Lunar date not in table: {lunar}");
                        std::process::exit(1);
                    }
                }
            } else {
                let solar = require_date(&date);
                match solar_to_lunar(solar) {
                    Some(l) if cli.json => print_json(&l),
                    Some(l) => println!("{solar} = {l} (lunar)"),
                    None => {
                        eprintln!("Date outside the lunar table: {solar}");
                        std::process::exit(1);
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn load_config(path: Option<&PathBuf>) -> EngineConfig {
    match path {
        Some(path) => EngineConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => EngineConfig::default(),
    }
}

fn init_logging(verbose: u8, config: &EngineConfig) {
    let level = match verbose {
        0 => Level::from_str(&config.log.level).unwrap_or(Level::WARN),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("{s}: {e}"))
}

fn parse_clock(s: &str) -> Result<(u32, u32), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got {s}"))?;
    let hour: u32 = h.parse().map_err(|e| format!("{s}: {e}"))?;
    let minute: u32 = m.parse().map_err(|e| format!("{s}: {e}"))?;
    if hour > 23 || minute > 59 {
        return Err(format!("time out of range: {s}"));
    }
    Ok((hour, minute))
}

/// Split "YYYY-MM-DD" without checking it against the Gregorian calendar.
fn parse_ymd(s: &str) -> Result<(i32, u32, u32), String> {
    let fields: Vec<&str> = s.split('-').collect();
    if fields.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = fields[0].parse().map_err(|e| format!("{s}: {e}"))?;
    let month: u32 = fields[1].parse().map_err(|e| format!("{s}: {e}"))?;
    let day: u32 = fields[2].parse().map_err(|e| format!("{s}: {e}"))?;
    Ok((year, month, day))
}

/// Parse "YYYY-MM-DD[THH:MM][,lunar][,leap][,female|,male]".
fn parse_birth(arg: &str) -> Result<BirthInput, String> {
    let mut parts = arg.split(',');
    let moment = parts.next().unwrap_or_default();
    let (date, clock) = match moment.split_once('T') {
        Some((d, t)) => (d, Some(parse_clock(t)?)),
        None => (moment, None),
    };
    let (year, month, day) = parse_ymd(date)?;

    let mut lunar = false;
    let mut leap = false;
    let mut gender = Gender::Male;
    for flag in parts {
        match flag.trim().to_lowercase().as_str() {
            "lunar" => lunar = true,
            "leap" => leap = true,
            "female" | "f" => gender = Gender::Female,
            "male" | "m" => gender = Gender::Male,
            other => return Err(format!("unknown birth flag: {other}")),
        }
    }

    let mut input = if lunar {
        BirthInput::lunar(year, month, day, leap)
    } else {
        // solar dates are validated here; the engine does not re-check them
        parse_date(date)?;
        BirthInput::solar(year, month, day)
    };
    if let Some((hour, minute)) = clock {
        input = input.with_time(hour, minute);
    }
    Ok(input.with_gender(gender))
}

fn require_birth(arg: &str) -> BirthInput {
    parse_birth(arg).unwrap_or_else(|e| {
        eprintln!("Invalid birth: {e}");
        std::process::exit(1);
    })
}

fn require_date(s: &str) -> NaiveDate {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn require_pillars(input: &BirthInput, config: &EngineConfig) -> FourPillars {
    compute_four_pillars_with(input, config).unwrap_or_else(|e| {
        eprintln!("Failed to compute pillars: {e}");
        std::process::exit(1);
    })
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_pillars(input: &BirthInput, pillars: &FourPillars) {
    let summary = birth_summary(input, pillars);
    println!("Birth:   {} ({})", summary.input_date, summary.gender.name());
    println!("Solar:   {}", summary.solar_date);
    if let Some(lunar) = summary.lunar_date {
        println!("Lunar:   {lunar}");
    }
    match summary.time {
        Some(t) => println!("Time:    {}", t.format("%H:%M")),
        None => println!("Time:    unknown"),
    }
    println!("Pillars: {pillars}");
    println!(
        "Zodiac:  {}  Day master: {} ({})",
        summary.zodiac,
        summary.day_master.hanja(),
        summary.day_master_element
    );
}

fn print_chart(chart: &ChartAnalysis) {
    println!();
    println!(
        "{:<6} {:<5} {:<16} {:<16} {:<12} Hidden",
        "Pillar", "Pair", "Stem god", "Branch god", "Stage"
    );
    for column in &chart.columns {
        let stem_god = column
            .stem_ten_god
            .map_or("(day master)", |g| g.name());
        let hidden: Vec<String> = column
            .hidden_stems
            .iter()
            .map(|h| format!("{}:{}", h.stem.hanja(), h.ten_god.hanja()))
            .collect();
        println!(
            "{:<6} {:<5} {:<16} {:<16} {:<12} {}",
            column.pillar.to_string(),
            column.pair.to_string(),
            stem_god,
            column.branch_ten_god.name(),
            column.twelve_stage.hanja(),
            hidden.join(" ")
        );
    }
    println!();
    let counts: Vec<String> = ALL_ELEMENTS
        .iter()
        .map(|&e| format!("{e} {}", chart.elements.count(e)))
        .collect();
    println!("Elements: {}", counts.join(", "));
    println!(
        "Void:     {}{}",
        chart.void_branches[0].hanja(),
        chart.void_branches[1].hanja()
    );
    for star in &chart.auspicious_stars {
        println!("Guin:     {} ({})", star.star.hanja(), star.star.name());
    }
    for pillar in &chart.inauspicious_stars {
        for star in &pillar.stars {
            println!("Sinsal:   {} on {}", star.hanja(), pillar.pillar);
        }
    }
    for relation in &chart.branch_relations {
        println!("Relation: {relation}");
    }
    println!();
    for cycle in &chart.fortune_cycles {
        println!(
            "Daewoon {:>2}: age {:>3} ({}-{}) {} {}",
            cycle.order,
            cycle.start_age,
            cycle.start_year,
            cycle.end_year(),
            cycle.pair,
            cycle.ten_god.name()
        );
    }
}

fn print_score(result: &ScoreResult) {
    println!("Total: {}", result.total);
    for c in &result.categories {
        println!("  {:<16} {}", c.category.name(), c.score);
    }
    for i in &result.interactions {
        println!("  - {i}");
    }
}
