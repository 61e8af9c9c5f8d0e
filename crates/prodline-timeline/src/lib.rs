//! # prodline-timeline
//!
//! Timeline positioning for the prodline dashboard.
//!
//! This crate provides:
//! - Calendar-to-pixel mapping on the day grid ([`grid`])
//! - The drag-to-reschedule state machine ([`drag`])
//! - Track bar colors with injected persistence ([`palette`])
//! - A plain-text timeline renderer ([`text`])
//!
//! The engine produces finished tasks; this crate only derives render
//! coordinates from them and translates pointer gestures back into date
//! mutations. Nothing here mutates the task collection directly.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use prodline_core::DateRange;
//! use prodline_timeline::{grid, window_days};
//!
//! let window = window_days(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(), 14);
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 3, 13).unwrap(),
//! );
//! let position = grid::to_pixels(range, &window, 50.0);
//! assert_eq!(position.x, 0.0);
//! assert_eq!(position.width, 200.0);
//! ```

pub mod drag;
pub mod grid;
pub mod palette;
pub mod text;

pub use drag::{DragController, DragEdge, DragPhase};
pub use grid::{GridPosition, DEFAULT_CELL_WIDTH};
pub use palette::TrackPalette;
pub use text::TextTimeline;

use chrono::{Duration, NaiveDate};

/// Build the contiguous day window the grid and renderers consume.
pub fn window_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .map(|offset| start + Duration::days(offset as i64))
        .collect()
}
