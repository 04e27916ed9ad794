use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("directory with logs does not exist: {path}")]
    LogDirMissing { path: PathBuf },

    #[error("no nginx-access-ui logs found in {path}")]
    NoLogFiles { path: PathBuf },

    #[error("incorrect date in log file name '{name}', expected %Y%m%d")]
    MalformedDate { name: String },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
