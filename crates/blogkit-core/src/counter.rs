//! Visitor counters.
//!
//! Two independent counters exist: a per-browser count kept in localStorage
//! and a site-wide hit count served by a public counter API.

use serde::Deserialize;
use serde_json::{Number, Value};

/// Storage key for the local count of a page.
pub fn visitor_key(prefix: &str, pathname: &str) -> String {
    format!("{prefix}{pathname}")
}

/// Parse a stored count.
///
/// Reads the leading decimal digits, so `"12px"` is 12. Anything without
/// leading digits, including negative values, counts as zero. Values too
/// large for `u64` saturate.
pub fn parse_count(stored: Option<&str>) -> u64 {
    let Some(stored) = stored else {
        return 0;
    };

    let trimmed = stored.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..digits_end];

    if digits.is_empty() {
        return 0;
    }

    digits.parse().unwrap_or(u64::MAX)
}

/// Count to store and display after this visit.
pub fn next_count(stored: Option<&str>) -> u64 {
    parse_count(stored).saturating_add(1)
}

/// Counter API key for a page path.
pub fn hit_key(pathname: &str) -> String {
    if pathname.is_empty() {
        "home".to_string()
    } else {
        pathname.replace('/', "_")
    }
}

/// Counter API URL registering one hit.
pub fn hit_url(api_base: &str, namespace: &str, key: &str) -> String {
    format!("{}/{namespace}/{key}", api_base.trim_end_matches('/'))
}

/// Response of the counter API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HitResponse {
    /// Current hit count. Other JSON types are ignored.
    #[serde(default)]
    pub value: Option<Value>,
}

impl HitResponse {
    /// The count, if the API returned a number.
    pub fn count(&self) -> Option<&Number> {
        match &self.value {
            Some(Value::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Display text for the count, with thousands separators.
    pub fn display(&self) -> Option<String> {
        self.count().map(format_count)
    }
}

/// Format a number with `,` thousands separators and at most three
/// fractional digits.
pub fn format_count(value: &Number) -> String {
    if let Some(n) = value.as_u64() {
        return group_digits(&n.to_string());
    }
    if let Some(n) = value.as_i64() {
        return format!("-{}", group_digits(&n.unsigned_abs().to_string()));
    }

    let f = value.as_f64().unwrap_or_default();
    let rounded = format!("{:.3}", f.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let sign = if f < 0.0 && rounded != "0.000" { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{}", group_digits(int_part))
    } else {
        format!("{sign}{}.{frac_part}", group_digits(int_part))
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
