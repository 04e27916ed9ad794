use crate::analyze::aggregate::{Aggregation, PathAccumulator, ParseSummary};
use crate::analyze::error::AnalyzeError;
use crate::analyze::median::upper_median;
use serde::{Deserialize, Serialize};

/// Number of decimal places kept in every fractional report field.
pub const ROUND_PRECISION: usize = 3;

/// One line of the "slowest endpoints" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub url: String,
    pub count: u64,
    pub count_perc: f64,
    pub time_avg: f64,
    pub time_max: f64,
    pub time_med: f64,
    pub time_perc: f64,
    pub time_sum: f64,
}

/// Order paths by total time, keep the top `report_size` and turn them into
/// rounded report rows.
///
/// The sort is stable, so paths with an equal `time_sum` stay in the order
/// they first appeared in the log. Percentages are relative to the totals of
/// the whole log, not of the truncated table.
pub fn rank(aggregation: Aggregation, report_size: usize) -> Result<Vec<ReportRow>, AnalyzeError> {
    let Aggregation { mut paths, summary } = aggregation;

    if paths.is_empty() {
        return Ok(Vec::new());
    }

    if summary.total_request_count == 0 || summary.total_request_time_sum <= 0.0 {
        return Err(AnalyzeError::ZeroTotals {
            requests: summary.total_request_count,
            time_sum: summary.total_request_time_sum,
        });
    }

    paths.sort_by(|a, b| b.time_sum.total_cmp(&a.time_sum));
    paths.truncate(report_size);

    Ok(paths.iter().map(|acc| report_row(acc, &summary)).collect())
}

fn report_row(acc: &PathAccumulator, summary: &ParseSummary) -> ReportRow {
    let count = acc.count as f64;
    let time_med = upper_median(&acc.durations).unwrap_or_default();

    ReportRow {
        url: acc.path.clone(),
        count: acc.count,
        count_perc: round3(count * 100.0 / summary.total_request_count as f64),
        time_avg: round3(acc.time_sum / count),
        time_max: round3(acc.time_max),
        time_med: round3(time_med),
        time_perc: round3(acc.time_sum * 100.0 / summary.total_request_time_sum),
        time_sum: round3(acc.time_sum),
    }
}

/// Round to [`ROUND_PRECISION`] decimal places.
///
/// Goes through the exact decimal expansion of the float, so the result is
/// correctly rounded and exact ties go to the even digit.
pub fn round3(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    format!("{value:.prec$}", prec = ROUND_PRECISION)
        .parse()
        .unwrap_or(value)
}
