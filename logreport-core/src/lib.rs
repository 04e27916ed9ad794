pub mod analyze;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod source;
