use flate2::Compression;
use flate2::write::GzEncoder;
use logreport_core::analyze::ReportRow;
use logreport_core::conf::{AnalyzerConfig, load_config};
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE: &str = "<html><body><script>var table = $table_json;</script></body></html>";

/// A throwaway directory laid out like a deployment: `log/`, `reports/`,
/// `templates/report.html` and `config.json`.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("log")).unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        fs::write(dir.path().join("templates/report.html"), TEMPLATE).unwrap();

        let ws = Self { dir };
        ws.write_config(json!({}));
        ws
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root().join("log")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.root().join("reports")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config.json")
    }

    /// Write `config.json`. Directory keys point into this workspace unless
    /// `overrides` says otherwise.
    pub fn write_config(&self, overrides: serde_json::Value) {
        let mut config = json!({
            "REPORT_SIZE": 1000,
            "REPORT_DIR": self.report_dir(),
            "LOG_DIR": self.log_dir(),
            "REPORT_TEMPLATE": self.root().join("templates/report.html"),
        });
        if let (Some(base), Some(extra)) = (config.as_object_mut(), overrides.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        fs::write(self.config_path(), config.to_string()).unwrap();
    }

    pub fn config(&self) -> AnalyzerConfig {
        load_config(&self.config_path()).expect("workspace config must load")
    }

    pub fn write_plain_log<S: AsRef<str>>(&self, name: &str, lines: &[S]) -> PathBuf {
        let path = self.log_dir().join(name);
        fs::write(&path, join_lines(lines)).unwrap();
        path
    }

    pub fn write_gz_log<S: AsRef<str>>(&self, name: &str, lines: &[S]) -> PathBuf {
        let path = self.log_dir().join(name);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(join_lines(lines).as_bytes()).unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();
        path
    }

    pub fn report_path(&self, date: &str) -> PathBuf {
        self.report_dir().join(format!("report-{date}.html"))
    }

    /// Pull the JSON table back out of a rendered report.
    pub fn read_report_rows(&self, date: &str) -> Vec<ReportRow> {
        let html = fs::read_to_string(self.report_path(date)).unwrap();
        let json = html
            .split_once("var table = ")
            .and_then(|(_, rest)| rest.split_once(";</script>"))
            .map(|(json, _)| json)
            .expect("report does not contain the table");
        serde_json::from_str(json).unwrap()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}
