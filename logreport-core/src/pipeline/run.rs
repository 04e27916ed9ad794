use crate::analyze::{ParseSummary, ReportRow, aggregate_log, check_error_rate, rank};
use crate::conf::AnalyzerConfig;
use crate::pipeline::error::PipelineError;
use crate::report::write_report;
use crate::source::{LatestLog, find_latest_log, open_log};
use std::path::{Path, PathBuf};

/// What a run would work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub log: LatestLog,
    pub report: PathBuf,
}

impl RunPlan {
    pub fn is_done(&self) -> bool {
        self.report.exists()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The report for the newest log already exists; nothing was done.
    AlreadyGenerated { report: PathBuf },

    Generated {
        log: PathBuf,
        report: PathBuf,
        rows: usize,
        summary: ParseSummary,
    },
}

/// Resolve the newest log and the report it maps to.
pub fn plan(config: &AnalyzerConfig) -> Result<RunPlan, PipelineError> {
    let log = find_latest_log(&config.log_dir)?;
    let report = config.report_path_for(log.name.date);
    Ok(RunPlan { log, report })
}

/// Build the report for the newest log in `config.log_dir`.
pub fn run(config: &AnalyzerConfig) -> Result<RunOutcome, PipelineError> {
    let plan = plan(config)?;

    if plan.is_done() {
        tracing::info!(
            report = %plan.report.display(),
            "The newest report has already been generated"
        );
        return Ok(RunOutcome::AlreadyGenerated {
            report: plan.report,
        });
    }

    tracing::info!(log = %plan.log.path.display(), "analyzing log");
    let (rows, summary) = analyze_log(&plan.log.path, config)?;

    write_report(&config.report_template, &plan.report, &rows)?;

    Ok(RunOutcome::Generated {
        log: plan.log.path,
        report: plan.report,
        rows: rows.len(),
        summary,
    })
}

/// Read one log to the end and produce its ranked table.
pub fn analyze_log(
    path: &Path,
    config: &AnalyzerConfig,
) -> Result<(Vec<ReportRow>, ParseSummary), PipelineError> {
    let lines = open_log(path)?;
    let aggregation = aggregate_log(lines, path)?;
    let summary = aggregation.summary;

    check_error_rate(&summary, config.error_threshold)?;

    let rows = rank(aggregation, config.report_size)?;
    Ok((rows, summary))
}
