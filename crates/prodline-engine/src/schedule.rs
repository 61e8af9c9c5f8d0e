//! Task date scheduling.
//!
//! Walks an ordered template list and accumulates date ranges along the
//! dependency chain. A template that depends on its predecessor starts the
//! day after that predecessor ends; one that does not starts at the same
//! cursor as its predecessor, which is how the container and packaging
//! tracks run concurrently with manufacturing.

use chrono::{Duration, NaiveDate};
use prodline_core::{DateRange, TaskTemplate};

/// Compute one date range per template, index-aligned with the input.
///
/// The cursor starts at `anchor`. For each template: when its
/// `depends_on_previous` flag is set (and a predecessor exists) the cursor
/// advances to the previous end date + 1 day; the template then occupies
/// `[cursor, cursor + duration - 1]`. A template without the flag leaves
/// the cursor where it was, starting a parallel branch. No range can
/// precede the anchor.
pub fn schedule(templates: &[&TaskTemplate], anchor: NaiveDate) -> Vec<DateRange> {
    let mut ranges = Vec::with_capacity(templates.len());
    let mut cursor = anchor;
    let mut previous_end: Option<NaiveDate> = None;

    for template in templates {
        if template.depends_on_previous {
            if let Some(end) = previous_end {
                cursor = end + Duration::days(1);
            }
        }
        let start = cursor;
        let end = start + Duration::days(i64::from(template.duration_days) - 1);
        ranges.push(DateRange::new(start, end));
        previous_end = Some(end);
    }

    ranges
}
