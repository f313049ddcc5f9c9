use chrono::{Datelike, NaiveDate};
use tracing::debug;

use saju_base::{ChartAnalysis, FourPillars, SajuError, derive};
use saju_config::EngineConfig;
use saju_score::ScoreResult;
use saju_time::{BirthInput, LunarTable, PackedLunarTable, to_civil_date_time_with};

/// Four pillars for a birth input under the default configuration.
pub fn compute_four_pillars(input: &BirthInput) -> Result<FourPillars, SajuError> {
    compute_four_pillars_with(input, &EngineConfig::default())
}

/// Four pillars for a birth input, lunar dates resolved through the built-in
/// lunar table.
pub fn compute_four_pillars_with(
    input: &BirthInput,
    config: &EngineConfig,
) -> Result<FourPillars, SajuError> {
    compute_four_pillars_with_table(input, config, &PackedLunarTable)
}

/// Four pillars for a birth input, lunar dates resolved through `table`.
///
/// With an unknown clock time the chart is derived at 00:00, the 23:30
/// rollover is skipped and the result is marked as time-unknown. The birth
/// year recorded on the pillars is the Gregorian year of the resolved date.
pub fn compute_four_pillars_with_table<T: LunarTable + ?Sized>(
    input: &BirthInput,
    config: &EngineConfig,
    table: &T,
) -> Result<FourPillars, SajuError> {
    let civil = to_civil_date_time_with(input, table)?;
    let rollover = config.time.late_zi_rollover && input.time_known();
    let pillars = derive(civil, rollover, civil.year(), input.gender)?;
    debug!(%pillars, time_known = input.time_known(), rollover, "four pillars computed");
    Ok(if input.time_known() {
        pillars
    } else {
        pillars.time_unknown()
    })
}

/// Full chart analysis under the default configuration.
pub fn analyze_chart(pillars: &FourPillars) -> ChartAnalysis {
    analyze_chart_with(pillars, &EngineConfig::default())
}

pub fn analyze_chart_with(pillars: &FourPillars, config: &EngineConfig) -> ChartAnalysis {
    saju_base::analyze_chart(pillars, &config.chart_options())
}

/// Symmetric compatibility of two charts.
pub fn score_compatibility(a: &ChartAnalysis, b: &ChartAnalysis) -> ScoreResult {
    saju_score::score_compatibility(a, b)
}

/// Fortune of a chart for one calendar day.
pub fn score_today_fortune(person: &ChartAnalysis, date: NaiveDate) -> ScoreResult {
    saju_score::score_today_fortune(person, date)
}
