use crate::source::error::SourceError;
use crate::source::name::{LOG_FILE_PREFIX, LogFileName};
use glob::glob;
use std::path::{Path, PathBuf};

/// The newest access log in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestLog {
    pub path: PathBuf,
    pub name: LogFileName,
}

/// Find the access log with the greatest embedded date in `dir`.
///
/// When a plain and a gzipped log share that date, the plain one wins.
///
/// # Errors
///
/// - `SourceError::LogDirMissing` if `dir` is not a directory
/// - `SourceError::MalformedDate` if any log-prefixed name carries a bad date
/// - `SourceError::NoLogFiles` if nothing matches
pub fn find_latest_log(dir: &Path) -> Result<LatestLog, SourceError> {
    if !dir.is_dir() {
        return Err(SourceError::LogDirMissing {
            path: dir.to_path_buf(),
        });
    }

    let mut latest: Option<LatestLog> = None;

    for path in discover_candidates(dir)? {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(name) = LogFileName::parse(file_name)? else {
            continue;
        };

        tracing::debug!(path = %path.display(), date = %name.date, "log candidate");

        let newer = match &latest {
            None => true,
            Some(current) => {
                (name.date, !name.gzipped) > (current.name.date, !current.name.gzipped)
            }
        };
        if newer {
            latest = Some(LatestLog { path, name });
        }
    }

    latest.ok_or_else(|| SourceError::NoLogFiles {
        path: dir.to_path_buf(),
    })
}

/// Regular files in `dir` carrying the access log prefix, in sorted order.
pub fn discover_candidates(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let pattern = resolve_glob(dir, &format!("{LOG_FILE_PREFIX}*"));
    let mut paths: Vec<_> = glob(&pattern)
        .map_err(|e| SourceError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Joins `pattern` onto `root`, escaping glob metacharacters in the root.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let root = glob::Pattern::escape(&root.to_string_lossy());
    Path::new(&root).join(pattern).to_string_lossy().into_owned()
}
