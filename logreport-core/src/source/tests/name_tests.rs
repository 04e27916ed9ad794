use crate::source::{LogFileName, SourceError};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parses_plain_log_name() {
    let name = LogFileName::parse("nginx-access-ui.log-20170630").unwrap();

    assert_eq!(
        name,
        Some(LogFileName {
            date: date(2017, 6, 30),
            gzipped: false,
        })
    );
}

#[test]
fn parses_gzipped_log_name() {
    let name = LogFileName::parse("nginx-access-ui.log-20170630.gz").unwrap();

    assert_eq!(
        name,
        Some(LogFileName {
            date: date(2017, 6, 30),
            gzipped: true,
        })
    );
}

#[test]
fn ignores_unrelated_names() {
    assert_eq!(LogFileName::parse("nginx-access.log-30062017").unwrap(), None);
    assert_eq!(LogFileName::parse("report.html").unwrap(), None);
}

#[test]
fn rejects_wrong_date_order() {
    let err = LogFileName::parse("nginx-access-ui.log-30062017").unwrap_err();

    match err {
        SourceError::MalformedDate { name } => {
            assert_eq!(name, "nginx-access-ui.log-30062017");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_impossible_calendar_date() {
    assert!(LogFileName::parse("nginx-access-ui.log-20170231").is_err());
}

#[test]
fn rejects_short_or_non_numeric_stamp() {
    assert!(LogFileName::parse("nginx-access-ui.log-2017063").is_err());
    assert!(LogFileName::parse("nginx-access-ui.log-2017o630").is_err());
    assert!(LogFileName::parse("nginx-access-ui.log-2017o630.bz2").is_err());
}

#[test]
fn skips_valid_date_with_other_extension() {
    assert_eq!(LogFileName::parse("nginx-access-ui.log-20170630.bz2").unwrap(), None);
    assert_eq!(LogFileName::parse("nginx-access-ui.log-201706301").unwrap(), None);
}
