use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to read log file {path}: {source}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("critical error percentage when parsing a log: {error_rate:.3}% (threshold {threshold}%)")]
    ErrorThresholdExceeded { error_rate: f64, threshold: f64 },

    #[error("requests were recorded but totals are degenerate (requests={requests}, time_sum={time_sum})")]
    ZeroTotals { requests: u64, time_sum: f64 },
}

impl AnalyzeError {
    pub fn read_log(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadLog {
            path: path.into(),
            source,
        }
    }
}
