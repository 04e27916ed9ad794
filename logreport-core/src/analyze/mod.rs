//! Log Analysis Core
//!
//! Turns the raw lines of one access log into the ranked latency table that
//! ends up in the HTML report. Data only ever flows forward:
//!
//! raw line
//! parse_line
//! ParsedRequest
//! Aggregator
//! PathAccumulator + ParseSummary
//! rank
//! ReportRow
//!
//! Unparsable lines are counted, never raised. They only turn into an error in
//! aggregate, once the whole log has been read and the error rate is known.

mod aggregate;
mod error;
mod median;
mod parse;
mod rank;
mod run;

#[cfg(test)]
mod tests;

pub use aggregate::*;
pub use error::*;
pub use median::*;
pub use parse::*;
pub use rank::*;
pub use run::*;
