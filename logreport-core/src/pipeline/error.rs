use crate::analyze::AnalyzeError;
use crate::report::RenderError;
use crate::source::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
