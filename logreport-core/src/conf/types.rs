use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_REPORT_SIZE: usize = 1000;
pub const DEFAULT_ERROR_THRESHOLD: f64 = 51.0;

/// Settings for one analyzer run.
///
/// Built once at startup and passed around by reference. Keys follow the
/// upper-case JSON naming of the config file; anything missing falls back to
/// the built-in default and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum number of rows in the report.
    #[serde(rename = "REPORT_SIZE")]
    pub report_size: usize,

    #[serde(rename = "REPORT_DIR")]
    pub report_dir: PathBuf,

    #[serde(rename = "LOG_DIR")]
    pub log_dir: PathBuf,

    /// Percentage of unparsable lines at which the run is abandoned.
    #[serde(rename = "ERROR_THRESHOLD")]
    pub error_threshold: f64,

    /// HTML template containing the `$table_json` placeholder.
    #[serde(rename = "REPORT_TEMPLATE")]
    pub report_template: PathBuf,

    /// Optional file receiving the analyzer's own log; stderr when unset.
    #[serde(rename = "TS_DIR", skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_size: DEFAULT_REPORT_SIZE,
            report_dir: PathBuf::from("./reports"),
            log_dir: PathBuf::from("./log"),
            error_threshold: DEFAULT_ERROR_THRESHOLD,
            report_template: PathBuf::from("./templates/report.html"),
            log_file: None,
        }
    }
}

impl AnalyzerConfig {
    /// Where the report for the log of `date` lives.
    pub fn report_path_for(&self, date: NaiveDate) -> PathBuf {
        self.report_dir.join(report_file_name(date))
    }
}

pub fn report_file_name(date: NaiveDate) -> String {
    format!("report-{}.html", date.format("%Y-%m-%d"))
}
