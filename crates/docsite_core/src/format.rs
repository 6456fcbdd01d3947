//! Display formatting for dates and numbers.
//!
//! # Invariants
//! - Formatting never fails: unparsable dates render as [`INVALID_DATE`].
//! - Date-only ISO input (`2026-01-07`) is UTC midnight; date-time input
//!   without an offset is wall time in the display zone.

use crate::config::{DisplayZone, SiteConfig};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;

/// Placeholder rendered for unparsable date input.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_PATTERN: &str = "%Y/%m/%d";
const DATE_TIME_PATTERN: &str = "%Y/%m/%d %H:%M";

const FLOATING_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

static LEADING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?)(\d+)(.*)$").expect("valid leading digits regex"));

enum ParsedDate {
    Instant(DateTime<FixedOffset>),
    Floating(NaiveDateTime),
}

/// Renders dates in one display zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    zone: DisplayZone,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(DisplayZone::Local)
    }
}

impl DateFormatter {
    pub fn new(zone: DisplayZone) -> Self {
        Self { zone }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.display_zone())
    }

    /// `YYYY/MM/DD`, e.g. `2026/01/07`.
    pub fn format_date(&self, input: &str) -> String {
        self.render(input, DATE_PATTERN)
    }

    /// `YYYY/MM/DD HH:MM`, e.g. `2026/01/07 09:30`.
    pub fn format_date_time(&self, input: &str) -> String {
        self.render(input, DATE_TIME_PATTERN)
    }

    fn render(&self, input: &str, pattern: &str) -> String {
        let Some(parsed) = parse_date_input(input) else {
            return INVALID_DATE.to_string();
        };
        let rendered = match self.zone {
            DisplayZone::Local => render_in(&Local, parsed, pattern),
            DisplayZone::Fixed(offset) => render_in(&offset, parsed, pattern),
        };
        rendered.unwrap_or_else(|| INVALID_DATE.to_string())
    }
}

/// Formats a date in the host zone.
pub fn format_date(input: &str) -> String {
    DateFormatter::default().format_date(input)
}

/// Formats a date and minute-precision time in the host zone.
pub fn format_date_time(input: &str) -> String {
    DateFormatter::default().format_date_time(input)
}

/// Inserts thousands separators into the integer part of `value`'s display
/// form.
///
/// Non-finite floats keep their textual names (`NaN`, `Infinity`).
pub fn format_number<N: Display>(value: N) -> String {
    let raw = value.to_string();
    match raw.as_str() {
        "inf" => return "Infinity".to_string(),
        "-inf" => return "-Infinity".to_string(),
        _ => {}
    }
    let Some(captures) = LEADING_DIGITS.captures(&raw) else {
        return raw;
    };
    let sign = &captures[1];
    let digits = &captures[2];
    let rest = &captures[3];

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{rest}")
}

fn parse_date_input(input: &str) -> Option<ParsedDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ParsedDate::Instant(instant));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(ParsedDate::Instant(Utc.from_utc_datetime(&midnight).fixed_offset()));
    }
    for format in FLOATING_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(ParsedDate::Floating(naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y/%m/%d") {
        return Some(ParsedDate::Floating(date.and_hms_opt(0, 0, 0)?));
    }
    None
}

fn render_in<Tz>(zone: &Tz, parsed: ParsedDate, pattern: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = match parsed {
        ParsedDate::Instant(instant) => instant.with_timezone(zone),
        ParsedDate::Floating(naive) => zone.from_local_datetime(&naive).earliest()?,
    };
    Some(local.format(pattern).to_string())
}
