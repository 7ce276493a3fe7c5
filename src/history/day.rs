//! Date label resolution.
//!
//! History sources label days either as ISO dates (`2024-03-09`), full
//! RFC 3339 timestamps, or long-form labels (`Mar 9th, 2024`,
//! `March 9, 2024`).  Anything else stays unresolved and the estimator
//! falls back to a plain day count.

use chrono::{DateTime, NaiveDate};

const LONG_FORMS: [&str; 2] = ["%b %d, %Y", "%b %d %Y"];

/// Resolve a day label to a calendar date.
pub fn resolve(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(label) {
        return Some(dt.date_naive());
    }
    let plain = strip_ordinals(label);
    LONG_FORMS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&plain, fmt).ok())
}

/// Canonical label for a resolved day.
pub fn label(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// `9th,` -> `9,`; month names such as `August` are left alone.
fn strip_ordinals(label: &str) -> String {
    label
        .split_whitespace()
        .map(|tok| {
            let (core, comma) = match tok.strip_suffix(',') {
                Some(c) => (c, ","),
                None => (tok, ""),
            };
            let digits = ["st", "nd", "rd", "th"].iter().find_map(|suffix| {
                core.strip_suffix(suffix)
                    .filter(|d| !d.is_empty() && d.chars().all(|c| c.is_ascii_digit()))
            });
            format!("{}{}", digits.unwrap_or(core), comma)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
