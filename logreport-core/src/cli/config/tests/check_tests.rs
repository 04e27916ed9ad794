use crate::cli::config::check;
use crate::pipeline::PipelineError;
use crate::source::SourceError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const LOG_NAME: &str = "nginx-access-ui.log-20170630";

struct CheckWorkspace {
    dir: TempDir,
    config: PathBuf,
}

impl CheckWorkspace {
    fn new(with_template: bool) -> Self {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("log")).unwrap();
        if with_template {
            fs::write(root.join("report.html"), "$table_json").unwrap();
        }

        let config = root.join("config.json");
        let body = serde_json::json!({
            "LOG_DIR": root.join("log"),
            "REPORT_DIR": root.join("reports"),
            "REPORT_TEMPLATE": root.join("report.html"),
        });
        fs::write(&config, body.to_string()).unwrap();

        Self { dir, config }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn add_log(&self) {
        fs::write(self.root().join("log").join(LOG_NAME), "").unwrap();
    }
}

#[test]
fn passes_when_report_already_exists() {
    // Arrange
    let ws = CheckWorkspace::new(true);
    ws.add_log();
    fs::create_dir(ws.root().join("reports")).unwrap();
    fs::write(ws.root().join("reports").join("report-2017-06-30.html"), "").unwrap();

    // Act
    let result = check(&ws.config);

    // Assert
    assert!(result.is_ok(), "check failed: {result:?}");
}

#[test]
fn missing_template_is_reported_but_not_fatal() {
    // Arrange
    let ws = CheckWorkspace::new(false);
    ws.add_log();

    // Act
    let result = check(&ws.config);

    // Assert
    assert!(result.is_ok(), "check failed: {result:?}");
    assert!(!ws.root().join("reports").exists());
}

#[test]
fn fails_without_any_log() {
    // Arrange
    let ws = CheckWorkspace::new(true);

    // Act
    let err = check(&ws.config).unwrap_err();

    // Assert
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::Source(SourceError::NoLogFiles { .. }))
    ));
}

#[test]
fn fails_on_unreadable_config() {
    let dir = tempdir().unwrap();

    let result = check(&dir.path().join("missing.json"));

    assert!(result.is_err());
}
