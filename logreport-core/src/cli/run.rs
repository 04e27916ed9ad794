use crate::cli::hint::error_hint;
use crate::conf::load_config;
use crate::logging::{LogFormat, init_logging};
use crate::pipeline::{self, RunOutcome};
use anyhow::Result;
use std::path::Path;

/// `logreport run`: load config, install logging for the run, build the report.
///
/// Returns an error for every fatal condition; the already-generated case is a
/// successful no-op.
pub fn run(config_path: &Path, log_format: LogFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let _logging = init_logging(log_format, config.log_file.as_deref())?;

    tracing::info!("Program started");

    match pipeline::run(&config) {
        Ok(RunOutcome::AlreadyGenerated { report }) => {
            println!(
                "The newest report has already been generated: {}",
                report.display()
            );
            Ok(())
        }
        Ok(RunOutcome::Generated { report, .. }) => {
            tracing::info!("Done!");
            println!("{}", report.display());
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "run aborted");
            if let Some(hint) = error_hint(&err) {
                tracing::info!("{hint}");
            }
            Err(err.into())
        }
    }
}
