//! Task status and progress derivation.
//!
//! Status is computed, not stored: a task's date range, the owning
//! project's phase, and "today" fully determine it. Evaluation order
//! mirrors the project lifecycle — cancelled and completed projects
//! override any date arithmetic, a planning project pins everything to
//! pending, and only an active project compares calendar days.

use chrono::NaiveDate;
use prodline_core::{DateRange, ProjectPhase, TaskStatus};

/// What to call a task whose end date has passed on an active project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ElapsedPolicy {
    /// Elapsed work reads as done — the dashboard default
    #[default]
    AutoComplete,
    /// Elapsed work reads as missed until someone closes it out
    MarkOverdue,
}

/// Everything beyond the task's own range that status derivation needs.
#[derive(Clone, Copy, Debug)]
pub struct StatusContext {
    pub phase: ProjectPhase,
    /// Project completion (0-100); drives the cancelled-project cutoff
    pub project_progress: u8,
    pub today: NaiveDate,
    pub elapsed: ElapsedPolicy,
}

impl StatusContext {
    pub fn new(phase: ProjectPhase, project_progress: u8, today: NaiveDate) -> Self {
        Self {
            phase,
            project_progress,
            today,
            elapsed: ElapsedPolicy::default(),
        }
    }

    pub fn elapsed(mut self, policy: ElapsedPolicy) -> Self {
        self.elapsed = policy;
        self
    }
}

/// Derive the status of the task at `index` of `total` in its project.
///
/// The position only matters for cancelled projects, where the work
/// stopped partway: tasks before the completed-fraction cutoff finished,
/// the one at the cutoff was cut off mid-flight, and everything later
/// never started.
pub fn resolve(range: DateRange, index: usize, total: usize, ctx: &StatusContext) -> TaskStatus {
    match ctx.phase {
        ProjectPhase::Cancelled => resolve_cancelled(index, total, ctx.project_progress),
        ProjectPhase::Completed => TaskStatus::Completed,
        ProjectPhase::Planning => TaskStatus::Pending,
        ProjectPhase::Active => resolve_active(range, ctx.today, ctx.elapsed),
    }
}

/// Date comparison for an active project. The end date is inclusive on
/// the completed side: a task is done on its final day, not the day after.
pub fn resolve_active(range: DateRange, today: NaiveDate, elapsed: ElapsedPolicy) -> TaskStatus {
    if today < range.start {
        TaskStatus::Pending
    } else if today > range.end {
        match elapsed {
            ElapsedPolicy::AutoComplete => TaskStatus::Completed,
            ElapsedPolicy::MarkOverdue => TaskStatus::Overdue,
        }
    } else if today == range.end {
        TaskStatus::Completed
    } else {
        TaskStatus::InProgress
    }
}

/// Positional status for a cancelled project.
///
/// `cutoff = total × progress / 100` (floor). Indexes below the cutoff are
/// completed, the index at the cutoff is blocked, later ones pending.
pub fn resolve_cancelled(index: usize, total: usize, project_progress: u8) -> TaskStatus {
    let cutoff = total * usize::from(project_progress.min(100)) / 100;
    if index < cutoff {
        TaskStatus::Completed
    } else if index == cutoff {
        TaskStatus::Blocked
    } else {
        TaskStatus::Pending
    }
}

/// Completion percentage for a task in the given status.
///
/// In-progress (and overdue) tasks interpolate linearly across the range;
/// everything else is pinned to 0 or 100.
pub fn progress_for(status: TaskStatus, range: DateRange, today: NaiveDate) -> u8 {
    match status {
        TaskStatus::Completed => 100,
        TaskStatus::Pending | TaskStatus::Blocked => 0,
        TaskStatus::InProgress | TaskStatus::Overdue => interpolate(range, today),
    }
}

/// Like [`progress_for`], but clamps interpolated values into [10, 90] so a
/// bar visually distinguishes "just started" from "done but not closed".
pub fn display_progress(status: TaskStatus, range: DateRange, today: NaiveDate) -> u8 {
    match status {
        TaskStatus::InProgress | TaskStatus::Overdue => {
            interpolate(range, today).clamp(10, 90)
        }
        other => progress_for(other, range, today),
    }
}

fn interpolate(range: DateRange, today: NaiveDate) -> u8 {
    let span = (range.end - range.start).num_days();
    if span == 0 {
        // Single-day task mid-flight: midpoint
        return 50;
    }
    let elapsed = (today - range.start).num_days();
    let pct = (elapsed as f64 / span as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn range(from: NaiveDate, to: NaiveDate) -> DateRange {
        DateRange::new(from, to)
    }

    // Ten-day reference range used across the tests
    fn r() -> DateRange {
        range(date(2026, 3, 10), date(2026, 3, 19))
    }

    #[test]
    fn active_before_start_is_pending() {
        let status = resolve_active(r(), date(2026, 3, 9), ElapsedPolicy::AutoComplete);
        assert_eq!(status, TaskStatus::Pending);
    }

    #[test]
    fn active_inside_range_is_in_progress() {
        let status = resolve_active(r(), date(2026, 3, 14), ElapsedPolicy::AutoComplete);
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn active_on_end_date_is_completed_with_full_progress() {
        let today = date(2026, 3, 19);
        let status = resolve_active(r(), today, ElapsedPolicy::MarkOverdue);
        assert_eq!(status, TaskStatus::Completed);
        assert_eq!(progress_for(status, r(), today), 100);
    }

    #[test]
    fn active_past_end_follows_the_elapsed_policy() {
        let today = date(2026, 3, 25);
        assert_eq!(
            resolve_active(r(), today, ElapsedPolicy::AutoComplete),
            TaskStatus::Completed
        );
        assert_eq!(
            resolve_active(r(), today, ElapsedPolicy::MarkOverdue),
            TaskStatus::Overdue
        );
    }

    #[test]
    fn planning_project_pins_pending() {
        let ctx = StatusContext::new(ProjectPhase::Planning, 0, date(2026, 3, 14));
        assert_eq!(resolve(r(), 0, 5, &ctx), TaskStatus::Pending);
    }

    #[test]
    fn completed_project_pins_completed() {
        let ctx = StatusContext::new(ProjectPhase::Completed, 100, date(2026, 3, 1));
        assert_eq!(resolve(r(), 4, 5, &ctx), TaskStatus::Completed);
    }

    #[test]
    fn cancelled_project_splits_at_the_cutoff() {
        // 10 tasks, 40% done: cutoff index 4
        assert_eq!(resolve_cancelled(3, 10, 40), TaskStatus::Completed);
        assert_eq!(resolve_cancelled(4, 10, 40), TaskStatus::Blocked);
        assert_eq!(resolve_cancelled(5, 10, 40), TaskStatus::Pending);
        assert_eq!(resolve_cancelled(9, 10, 40), TaskStatus::Pending);
    }

    #[test]
    fn cancelled_at_zero_progress_blocks_the_first_task() {
        assert_eq!(resolve_cancelled(0, 5, 0), TaskStatus::Blocked);
        assert_eq!(resolve_cancelled(1, 5, 0), TaskStatus::Pending);
    }

    #[test]
    fn cancelled_at_full_progress_completes_everything() {
        for index in 0..5 {
            assert_eq!(resolve_cancelled(index, 5, 100), TaskStatus::Completed);
        }
    }

    #[test]
    fn progress_interpolates_linearly() {
        // 10-day range, day 3 of 9 elapsed spans
        let r = r();
        assert_eq!(progress_for(TaskStatus::InProgress, r, date(2026, 3, 10)), 0);
        assert_eq!(progress_for(TaskStatus::InProgress, r, date(2026, 3, 13)), 33);
        assert_eq!(progress_for(TaskStatus::InProgress, r, date(2026, 3, 19)), 100);
    }

    #[test]
    fn progress_pinned_for_terminal_states() {
        let today = date(2026, 3, 14);
        assert_eq!(progress_for(TaskStatus::Completed, r(), today), 100);
        assert_eq!(progress_for(TaskStatus::Pending, r(), today), 0);
        assert_eq!(progress_for(TaskStatus::Blocked, r(), today), 0);
    }

    #[test]
    fn single_day_in_progress_reads_as_midpoint() {
        let r = range(date(2026, 3, 10), date(2026, 3, 10));
        assert_eq!(interpolate(r, date(2026, 3, 10)), 50);
    }

    #[test]
    fn display_progress_clamps_into_the_band() {
        let r = r();
        // Linear 0% on the first day reads as 10 in the band
        assert_eq!(display_progress(TaskStatus::InProgress, r, date(2026, 3, 10)), 10);
        // Linear 89% stays untouched
        assert_eq!(display_progress(TaskStatus::InProgress, r, date(2026, 3, 18)), 89);
        // Completed stays pinned at 100
        assert_eq!(display_progress(TaskStatus::Completed, r, date(2026, 3, 20)), 100);
        assert_eq!(display_progress(TaskStatus::Pending, r, date(2026, 3, 1)), 0);
    }
}
