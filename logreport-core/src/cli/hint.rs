use crate::analyze::AnalyzeError;
use crate::pipeline::PipelineError;
use crate::report::RenderError;
use crate::source::SourceError;

pub fn error_hint(err: &PipelineError) -> Option<&'static str> {
    match err {
        PipelineError::Source(SourceError::LogDirMissing { .. }) => Some(
            "Point LOG_DIR in the config file at the directory holding the nginx logs.",
        ),

        PipelineError::Source(SourceError::NoLogFiles { .. }) => Some(
            "Log files must be named nginx-access-ui.log-YYYYMMDD, optionally with a .gz suffix.",
        ),

        PipelineError::Source(SourceError::MalformedDate { .. }) => Some(
            "The date after nginx-access-ui.log- must be a real calendar date in YYYYMMDD form.\n\
             Rename or move the offending file.",
        ),

        PipelineError::Analyze(AnalyzeError::ErrorThresholdExceeded { .. }) => Some(
            "Too many lines did not match the ui_short log format.\n\
             Check the nginx log_format, or raise ERROR_THRESHOLD in the config file.",
        ),

        PipelineError::Render(RenderError::ReadTemplate { .. }) => Some(
            "Set REPORT_TEMPLATE to an HTML file containing the $table_json placeholder.",
        ),

        _ => None,
    }
}
