//! Calendar-to-pixel mapping on the timeline day grid.
//!
//! The timeline renders a contiguous window of calendar days, one fixed-
//! width cell per day. The forward mapping places a task's date range as
//! an `{x, width}` pair on that grid; the inverse resolves a pixel offset
//! back to the calendar day under it, which is what drag gestures use.

use chrono::NaiveDate;
use prodline_core::DateRange;
use serde::Serialize;

/// Default pixel width of one day cell.
pub const DEFAULT_CELL_WIDTH: f64 = 50.0;

/// Pixel placement of one task bar. Derived on every render pass, never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridPosition {
    pub x: f64,
    pub width: f64,
}

impl GridPosition {
    /// Sentinel meaning "do not render this bar".
    pub fn off_screen(cell_width: f64) -> Self {
        Self {
            x: -cell_width,
            width: 0.0,
        }
    }

    pub fn is_off_screen(&self) -> bool {
        self.width == 0.0
    }
}

/// Place a date range on the visible grid.
///
/// The start day is located by exact calendar-day match. A range starting
/// before the window clamps to the first cell; a range lying entirely
/// outside the window returns the off-screen sentinel. Width is the
/// inclusive day count times the cell width, but never narrower than one
/// cell — a same-day task still shows a full bar.
pub fn to_pixels(range: DateRange, visible_days: &[NaiveDate], cell_width: f64) -> GridPosition {
    let (Some(first), Some(last)) = (visible_days.first(), visible_days.last()) else {
        return GridPosition::off_screen(cell_width);
    };
    if range.start > *last || range.end < *first {
        return GridPosition::off_screen(cell_width);
    }

    let index = visible_days
        .iter()
        .position(|day| *day == range.start)
        .unwrap_or(0);

    let width = (range.days() as f64 * cell_width).max(cell_width);
    GridPosition {
        x: index as f64 * cell_width,
        width,
    }
}

/// Resolve a pixel offset to the calendar day under it.
///
/// Returns `None` for offsets left of the grid or past its right edge.
pub fn to_date(x: f64, visible_days: &[NaiveDate], cell_width: f64) -> Option<NaiveDate> {
    if x < 0.0 || cell_width <= 0.0 {
        return None;
    }
    let index = (x / cell_width).floor() as usize;
    visible_days.get(index).copied()
}

/// Like [`to_date`], but clamps out-of-range offsets to the nearest edge
/// of the window instead of rejecting them. Drag gestures use this so a
/// pointer that overshoots the grid sticks to the boundary day.
pub fn to_date_clamped(x: f64, visible_days: &[NaiveDate], cell_width: f64) -> Option<NaiveDate> {
    if visible_days.is_empty() || cell_width <= 0.0 {
        return None;
    }
    let index = (x / cell_width).floor().max(0.0) as usize;
    Some(visible_days[index.min(visible_days.len() - 1)])
}
