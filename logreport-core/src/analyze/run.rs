use crate::analyze::aggregate::{Aggregation, Aggregator, ParseSummary};
use crate::analyze::error::AnalyzeError;
use crate::analyze::parse::parse_line;
use std::io;
use std::path::Path;

/// Parse and aggregate in-memory lines. Every item counts as one log line.
pub fn aggregate_lines<I, S>(lines: I) -> Aggregation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut agg = Aggregator::new();
    for line in lines {
        push_line(&mut agg, line.as_ref());
    }
    agg.finalize()
}

/// Parse and aggregate lines streamed from the log at `path`.
///
/// An I/O failure mid-stream aborts the whole log; unparsable lines do not.
pub fn aggregate_log<I>(lines: I, path: &Path) -> Result<Aggregation, AnalyzeError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut agg = Aggregator::new();
    for line in lines {
        let line = line.map_err(|e| AnalyzeError::read_log(path, e))?;
        push_line(&mut agg, &line);
    }

    let summary = agg.summary();
    tracing::debug!(
        lines = summary.total_lines,
        errors = summary.error_lines,
        requests = summary.total_request_count,
        "log aggregated"
    );

    Ok(agg.finalize())
}

fn push_line(agg: &mut Aggregator, line: &str) {
    match parse_line(line) {
        Some(request) => agg.ingest(request),
        None => agg.reject(),
    }
}

/// Fail once the share of unparsable lines reaches `threshold` percent.
pub fn check_error_rate(summary: &ParseSummary, threshold: f64) -> Result<(), AnalyzeError> {
    let error_rate = summary.error_rate();
    tracing::info!("Percentage of errors when parsing a log: {error_rate:.3}%");

    if error_rate >= threshold {
        return Err(AnalyzeError::ErrorThresholdExceeded {
            error_rate,
            threshold,
        });
    }
    Ok(())
}
