use crate::source::error::SourceError;
use chrono::NaiveDate;

pub const LOG_FILE_PREFIX: &str = "nginx-access-ui.log-";
pub const GZIP_SUFFIX: &str = ".gz";

const DATE_STAMP_LEN: usize = 8;

/// A recognised access log file name, e.g. `nginx-access-ui.log-20170630.gz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFileName {
    pub date: NaiveDate,
    pub gzipped: bool,
}

impl LogFileName {
    /// `Ok(None)` for files that are not access logs at all, including logs
    /// with a valid date but an extension other than `.gz`. A name that has
    /// the log prefix but no valid `%Y%m%d` date right after it is an error.
    pub fn parse(name: &str) -> Result<Option<Self>, SourceError> {
        let Some(rest) = name.strip_prefix(LOG_FILE_PREFIX) else {
            return Ok(None);
        };

        let malformed = || SourceError::MalformedDate {
            name: name.to_string(),
        };

        let Some(stamp) = rest.get(..DATE_STAMP_LEN) else {
            return Err(malformed());
        };
        if !stamp.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let date = NaiveDate::parse_from_str(stamp, "%Y%m%d").map_err(|_| malformed())?;

        let gzipped = match &rest[DATE_STAMP_LEN..] {
            "" => false,
            GZIP_SUFFIX => true,
            other => {
                tracing::debug!(name, extension = other, "skipping log with unsupported extension");
                return Ok(None);
            }
        };

        Ok(Some(Self { date, gzipped }))
    }
}
