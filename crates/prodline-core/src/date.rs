//! Lenient calendar-day normalization.
//!
//! Dates reach the dashboard in several shapes: already-parsed days, ISO
//! `YYYY-MM-DD` strings, the localized dot form `YYYY. M. D.`, and full
//! RFC 3339 timestamps. This module folds all of them into a `NaiveDate`.
//!
//! Recognition order: passthrough → dot form converted to ISO → ISO →
//! RFC 3339 truncated to its UTC date → slash-separated forms → fallback
//! to "today" with a logged warning. The fallback keeps a half-broken
//! record renderable instead of taking down the whole timeline; it is a
//! documented lenient-parsing behavior, not silent corruption — the
//! warning carries the rejected input.

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::warn;

/// Reference frame for resolving "today". Declared once per call site and
/// never mixed within one computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Local,
    Utc,
}

impl Frame {
    pub fn today(self) -> NaiveDate {
        match self {
            Frame::Local => Local::now().date_naive(),
            Frame::Utc => Utc::now().date_naive(),
        }
    }
}

/// A date value as received from a collaborator.
#[derive(Clone, Debug, PartialEq)]
pub enum DateInput {
    Day(NaiveDate),
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(day: NaiveDate) -> Self {
        DateInput::Day(day)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// Normalize any supported date representation to a calendar day.
///
/// Never fails: unparseable input falls back to today in the given frame.
pub fn normalize(input: impl Into<DateInput>, frame: Frame) -> NaiveDate {
    normalize_or(input, frame.today())
}

/// Same recognition logic with an injected fallback day, for callers that
/// want a sentinel instead of "today" (and for deterministic tests).
pub fn normalize_or(input: impl Into<DateInput>, fallback: NaiveDate) -> NaiveDate {
    match input.into() {
        DateInput::Day(day) => day,
        DateInput::Text(text) => parse_text(&text).unwrap_or_else(|| {
            warn!(input = %text, fallback = %fallback, "unparseable date, substituting fallback day");
            fallback
        }),
    }
}

fn parse_text(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(iso) = dotted_to_iso(text) {
        if let Ok(day) = NaiveDate::parse_from_str(&iso, "%Y-%m-%d") {
            return Some(day);
        }
    }

    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(day);
    }

    // Full timestamps truncate to their UTC calendar day
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc).date_naive());
    }

    for format in ["%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(day) = NaiveDate::parse_from_str(text, format) {
            return Some(day);
        }
    }

    None
}

/// Convert the localized dot form `YYYY. M. D.` (trailing dot optional,
/// spaces optional) to ISO. Requires a four-digit year so short numeric
/// fragments are not claimed by this branch.
fn dotted_to_iso(text: &str) -> Option<String> {
    if !text.contains('.') {
        return None;
    }
    let parts: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 3 || parts[0].len() != 4 {
        return None;
    }
    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}
