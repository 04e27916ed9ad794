use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the `ui_short` nginx format:
///
/// `$remote_addr $remote_user $http_x_real_ip [$time_local] "$request" $status
/// $body_bytes_sent "$http_referer" "$http_user_agent" "$http_x_forwarded_for"
/// "$http_X_REQUEST_ID" "$http_X_RB_USER" $request_time`
///
/// Only the request path and the trailing `$request_time` are captured.
static REQUEST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<path>\S+) HTTP/1\.\d".*"(?P<request_time>.*)"#)
        .expect("request line pattern is valid")
});

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    pub path: String,
    /// Seconds, always finite and non-negative.
    pub duration: f64,
}

/// Extract the request path and duration from one access log line.
///
/// Returns `None` for anything that does not follow the expected layout,
/// including a trailing field that is not a non-negative number.
pub fn parse_line(line: &str) -> Option<ParsedRequest> {
    let caps = REQUEST_LINE.captures(line)?;

    let duration = caps["request_time"].trim().parse::<f64>().ok()?;
    if !duration.is_finite() || duration < 0.0 {
        return None;
    }

    Some(ParsedRequest {
        path: caps["path"].to_string(),
        duration,
    })
}
