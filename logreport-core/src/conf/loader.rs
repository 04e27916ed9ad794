use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use std::fs;
use std::path::Path;

/// Read and validate the JSON config at `path`.
///
/// A missing file, malformed JSON, a key of the wrong type, or an out of range
/// value are all hard failures.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let raw = fs::read(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config: AnalyzerConfig =
        serde_json::from_slice(&raw).map_err(|e| ConfigError::parse(path, e))?;

    validate(&config, path)?;
    Ok(config)
}

fn validate(config: &AnalyzerConfig, path: &Path) -> Result<(), ConfigError> {
    let threshold = config.error_threshold;
    if !(threshold > 0.0 && threshold <= 100.0) {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: "ERROR_THRESHOLD",
            reason: format!("{threshold} is not a percentage in (0, 100]"),
        });
    }
    Ok(())
}
