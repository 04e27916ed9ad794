pub mod config;
mod hint;
mod run;

pub use hint::error_hint;
pub use run::run;
