//! Drag-to-reschedule state machine.
//!
//! Models the bar-drag interaction as explicit transitions over abstract
//! pointer events, independent of the concrete input technology: Idle →
//! Dragging on `pointer_down`, Dragging → Previewing as `pointer_move`
//! recomputes a candidate range through the inverse grid mapping, and
//! back to Idle on `pointer_up` (emitting the commit) or `pointer_cancel`
//! (emitting nothing). The candidate is never applied here — the caller
//! feeds the returned `TaskUpdate` through the engine's commit path.

use chrono::NaiveDate;
use prodline_core::{DateRange, TaskId, TaskUpdate};

use crate::grid;

/// Which part of the bar was grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEdge {
    /// Whole bar: the range shifts, keeping its length
    Move,
    /// Left edge: the start date moves
    ResizeStart,
    /// Right edge: the end date moves
    ResizeEnd,
}

/// Observable phase of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    /// Pointer is down but no candidate has been computed yet
    Dragging,
    /// A non-committed candidate range is on display
    Previewing,
}

#[derive(Clone, Debug)]
struct ActiveDrag {
    task_id: TaskId,
    edge: DragEdge,
    origin_x: f64,
    original: DateRange,
    candidate: Option<DateRange>,
}

/// The drag controller. One instance per timeline surface; transient
/// state lives only here and dies with the gesture.
#[derive(Clone, Debug)]
pub struct DragController {
    cell_width: f64,
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new(cell_width: f64) -> Self {
        Self {
            cell_width,
            active: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        match &self.active {
            None => DragPhase::Idle,
            Some(drag) if drag.candidate.is_none() => DragPhase::Dragging,
            Some(_) => DragPhase::Previewing,
        }
    }

    /// The candidate range currently on display, if any.
    pub fn preview(&self) -> Option<DateRange> {
        self.active.as_ref().and_then(|drag| drag.candidate)
    }

    /// Begin a gesture over a rendered bar. Ignored while another gesture
    /// is active — one pointer, one drag.
    pub fn pointer_down(&mut self, task_id: impl Into<TaskId>, edge: DragEdge, x: f64, range: DateRange) {
        if self.active.is_some() {
            return;
        }
        self.active = Some(ActiveDrag {
            task_id: task_id.into(),
            edge,
            origin_x: x,
            original: range,
            candidate: None,
        });
    }

    /// Recompute the candidate range for the current pointer position.
    ///
    /// Returns the fresh candidate, or `None` when idle or when the
    /// window cannot resolve the pointer (the previous preview stands).
    pub fn pointer_move(&mut self, x: f64, visible_days: &[NaiveDate]) -> Option<DateRange> {
        let cell_width = self.cell_width;
        let drag = self.active.as_mut()?;
        let candidate = compute_candidate(drag, x, visible_days, cell_width)?;
        drag.candidate = Some(candidate);
        Some(candidate)
    }

    /// Release: commit the previewed range as a task update and return to
    /// idle. Releasing without a preview, or with a preview equal to the
    /// original range, commits nothing.
    pub fn pointer_up(&mut self) -> Option<TaskUpdate> {
        let drag = self.active.take()?;
        let candidate = drag.candidate?;
        if candidate == drag.original {
            return None;
        }
        Some(TaskUpdate::reschedule(drag.task_id, candidate))
    }

    /// Abort the gesture with zero side effects.
    pub fn pointer_cancel(&mut self) {
        self.active = None;
    }
}

fn compute_candidate(
    drag: &ActiveDrag,
    x: f64,
    visible_days: &[NaiveDate],
    cell_width: f64,
) -> Option<DateRange> {
    let pointer_day = grid::to_date_clamped(x, visible_days, cell_width)?;

    Some(match drag.edge {
        DragEdge::Move => {
            let origin_day = grid::to_date_clamped(drag.origin_x, visible_days, cell_width)?;
            let delta = (pointer_day - origin_day).num_days();
            drag.original.shifted(delta)
        }
        // A resize that would invert the range clamps to a single-day
        // task; the edges never swap.
        DragEdge::ResizeStart => {
            if pointer_day > drag.original.end {
                DateRange::day(drag.original.end)
            } else {
                DateRange::new(pointer_day, drag.original.end)
            }
        }
        DragEdge::ResizeEnd => {
            if pointer_day < drag.original.start {
                DateRange::day(drag.original.start)
            } else {
                DateRange::new(drag.original.start, pointer_day)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn window() -> Vec<NaiveDate> {
        crate::window_days(date(2026, 3, 10), 14)
    }

    fn task_range() -> DateRange {
        DateRange::new(date(2026, 3, 12), date(2026, 3, 15))
    }

    #[test]
    fn starts_idle_and_returns_to_idle() {
        let mut controller = DragController::new(50.0);
        assert_eq!(controller.phase(), DragPhase::Idle);

        controller.pointer_down("t3", DragEdge::Move, 100.0, task_range());
        assert_eq!(controller.phase(), DragPhase::Dragging);

        controller.pointer_move(200.0, &window());
        assert_eq!(controller.phase(), DragPhase::Previewing);

        controller.pointer_up();
        assert_eq!(controller.phase(), DragPhase::Idle);
    }

    #[test]
    fn move_shifts_the_whole_range() {
        let mut controller = DragController::new(50.0);
        // Grab at cell 2 (Mar 12), drag to cell 4 (Mar 14): +2 days
        controller.pointer_down("t3", DragEdge::Move, 100.0, task_range());
        let preview = controller.pointer_move(210.0, &window()).unwrap();

        assert_eq!(preview.start, date(2026, 3, 14));
        assert_eq!(preview.end, date(2026, 3, 17));
        assert_eq!(preview.days(), task_range().days());

        let update = controller.pointer_up().unwrap();
        assert_eq!(update.task_id, "t3");
        assert_eq!(update.start_date, Some(date(2026, 3, 14)));
        assert_eq!(update.end_date, Some(date(2026, 3, 17)));
    }

    #[test]
    fn resize_end_extends_the_range() {
        let mut controller = DragController::new(50.0);
        controller.pointer_down("t3", DragEdge::ResizeEnd, 250.0, task_range());
        let preview = controller.pointer_move(400.0, &window()).unwrap();

        assert_eq!(preview.start, date(2026, 3, 12));
        assert_eq!(preview.end, date(2026, 3, 18));
    }

    #[test]
    fn resize_start_pulls_the_start_forward() {
        let mut controller = DragController::new(50.0);
        controller.pointer_down("t3", DragEdge::ResizeStart, 100.0, task_range());
        let preview = controller.pointer_move(0.0, &window()).unwrap();

        assert_eq!(preview.start, date(2026, 3, 10));
        assert_eq!(preview.end, date(2026, 3, 15));
    }

    #[test]
    fn inverting_resize_clamps_to_a_single_day() {
        let mut controller = DragController::new(50.0);
        // Drag the right edge left of the start: 1-day task, never inverted
        controller.pointer_down("t3", DragEdge::ResizeEnd, 250.0, task_range());
        let preview = controller.pointer_move(0.0, &window()).unwrap();
        assert_eq!(preview, DateRange::day(date(2026, 3, 12)));

        controller.pointer_cancel();

        // And the left edge right of the end
        controller.pointer_down("t3", DragEdge::ResizeStart, 100.0, task_range());
        let preview = controller.pointer_move(650.0, &window()).unwrap();
        assert_eq!(preview, DateRange::day(date(2026, 3, 15)));
    }

    #[test]
    fn pointer_overshoot_sticks_to_the_window_edge() {
        let mut controller = DragController::new(50.0);
        controller.pointer_down("t3", DragEdge::Move, 100.0, task_range());
        let preview = controller.pointer_move(-500.0, &window()).unwrap();
        // Pointer clamped to the first cell: -2 days
        assert_eq!(preview.start, date(2026, 3, 10));
    }

    #[test]
    fn cancel_commits_nothing() {
        let mut controller = DragController::new(50.0);
        controller.pointer_down("t3", DragEdge::Move, 100.0, task_range());
        controller.pointer_move(300.0, &window());
        controller.pointer_cancel();

        assert_eq!(controller.phase(), DragPhase::Idle);
        assert_eq!(controller.preview(), None);
        assert_eq!(controller.pointer_up(), None);
    }

    #[test]
    fn release_without_movement_commits_nothing() {
        let mut controller = DragController::new(50.0);
        controller.pointer_down("t3", DragEdge::Move, 100.0, task_range());
        assert_eq!(controller.pointer_up(), None);

        // A preview identical to the original range is also a no-op
        controller.pointer_down("t3", DragEdge::Move, 100.0, task_range());
        controller.pointer_move(101.0, &window());
        assert_eq!(controller.pointer_up(), None);
    }

    #[test]
    fn second_pointer_down_is_ignored_mid_gesture() {
        let mut controller = DragController::new(50.0);
        controller.pointer_down("t3", DragEdge::Move, 100.0, task_range());
        controller.pointer_down("t9", DragEdge::ResizeEnd, 400.0, task_range());

        controller.pointer_move(210.0, &window());
        let update = controller.pointer_up().unwrap();
        assert_eq!(update.task_id, "t3");
    }
}
