//! Pipeline Driver
//!
//! One run, in order:
//!
//! find_latest_log
//! report already there? -> done
//! open_log
//! aggregate_log
//! check_error_rate
//! rank
//! write_report
//!
//! Nothing is written until the whole log has been read and ranked.

mod error;
mod run;


pub use error::*;
pub use run::*;
