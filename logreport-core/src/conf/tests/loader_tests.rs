use crate::conf::{AnalyzerConfig, ConfigError, load_config};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_documented_keys() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"{"REPORT_SIZE": 10, "REPORT_DIR": "/tmp/reports", "LOG_DIR": "/tmp/log"}"#,
    );

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(
        cfg,
        AnalyzerConfig {
            report_size: 10,
            report_dir: PathBuf::from("/tmp/reports"),
            log_dir: PathBuf::from("/tmp/log"),
            ..AnalyzerConfig::default()
        }
    );
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "{}");

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg, AnalyzerConfig::default());
    assert_eq!(cfg.report_size, 1000);
    assert_eq!(cfg.error_threshold, 51.0);
}

#[test]
fn unknown_keys_are_ignored() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), r#"{"REPORT_SIZE": 5, "SOMETHING_ELSE": true}"#);

    let cfg = load_config(&path).unwrap();

    assert_eq!(cfg.report_size, 5);
}

#[test]
fn optional_keys_are_read() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"{"ERROR_THRESHOLD": 10.5, "REPORT_TEMPLATE": "t.html", "TS_DIR": "analyzer.log"}"#,
    );

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.error_threshold, 10.5);
    assert_eq!(cfg.report_template, PathBuf::from("t.html"));
    assert_eq!(cfg.log_file, Some(PathBuf::from("analyzer.log")));
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn broken_json_is_fatal() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "some text, which broke json-format");

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn wrong_value_type_is_fatal() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), r#"{"REPORT_SIZE": "many"}"#);

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), r#"{"ERROR_THRESHOLD": 150}"#);

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    match err {
        ConfigError::InvalidValue { key, .. } => assert_eq!(key, "ERROR_THRESHOLD"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn report_path_uses_dashed_date() {
    let cfg = AnalyzerConfig {
        report_dir: PathBuf::from("/srv/reports"),
        ..AnalyzerConfig::default()
    };

    let path = cfg.report_path_for(NaiveDate::from_ymd_opt(2017, 6, 30).unwrap());

    assert_eq!(path, PathBuf::from("/srv/reports/report-2017-06-30.html"));
}
