use anyhow::{Context, Result};
use std::path::Path;
use tracing::subscriber::DefaultGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt};

const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Keeps the analyzer's subscriber installed for the current thread.
///
/// Logging reverts to whatever was installed before once this is dropped.
pub struct LoggingGuard {
    _default: DefaultGuard,
}

/// Install the run's subscriber.
///
/// Filtering comes from `RUST_LOG` (default "info"). Output goes to stderr,
/// or is appended to `log_file` when one is configured.
pub fn init_logging(format: LogFormat, log_file: Option<&Path>) -> Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, ansi) = match log_file {
        Some(path) => (BoxMakeWriter::new(file_appender(path)?), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

    let default = match format {
        LogFormat::Text => tracing::subscriber::set_default(
            builder.with_ansi(ansi).with_target(false).compact().finish(),
        ),
        LogFormat::Json => {
            tracing::subscriber::set_default(builder.json().flatten_event(true).finish())
        }
    };

    Ok(LoggingGuard { _default: default })
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid log file path {}", path.display()))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
