//! Plain-text timeline output.
//!
//! One character per day cell, so the grid math is shared with the pixel
//! mapper at a cell width of 1.0. The task table next to the bars renders
//! each cell through a column → render-fn dispatch table built once,
//! instead of branching on a column id at every cell.

use chrono::NaiveDate;
use prodline_core::ScheduledTask;

use crate::grid::{self, GridPosition};

/// Identifier for a task-table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Status,
    Dates,
    Progress,
    Factory,
}

type CellFn = fn(&ScheduledTask) -> String;

/// The dispatch table: column tag → cell renderer, built once.
pub fn column_renderers() -> Vec<(Column, CellFn)> {
    vec![
        (Column::Title, |task| task.title.clone()),
        (Column::Status, |task| task.status.to_string()),
        (Column::Dates, |task| {
            format!("{} - {}", task.start_date, task.end_date)
        }),
        (Column::Progress, |task| format!("{}%", task.progress)),
        (Column::Factory, render_factory_cell),
    ]
}

fn render_factory_cell(task: &ScheduledTask) -> String {
    match task.factory_assignments.as_slice() {
        [] => "unassigned".to_owned(),
        [only] => only.factory_name.clone(),
        many => format!("{} sampling runs", many.len()),
    }
}

/// Fixed-width text renderer for a task list against a visible window.
#[derive(Clone, Debug)]
pub struct TextTimeline {
    /// Characters reserved for the task label column
    pub label_width: usize,
    /// Character used for bar cells
    pub bar_char: char,
}

impl Default for TextTimeline {
    fn default() -> Self {
        Self {
            label_width: 28,
            bar_char: '=',
        }
    }
}

impl TextTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one bar row per task. Off-screen tasks get an empty row.
    pub fn render(&self, tasks: &[ScheduledTask], visible_days: &[NaiveDate]) -> String {
        let mut out = String::new();
        out.push_str(&self.header(visible_days));

        for task in tasks {
            let position = grid::to_pixels(task.range(), visible_days, 1.0);
            out.push_str(&format!(
                "{:<width$} |{}\n",
                truncate(&task.title, self.label_width),
                self.bar(position, visible_days.len()),
                width = self.label_width,
            ));
        }
        out
    }

    /// Render the task table through the column dispatch table.
    pub fn render_table(&self, tasks: &[ScheduledTask]) -> String {
        let renderers = column_renderers();
        let mut out = String::new();
        for task in tasks {
            let cells: Vec<String> = renderers.iter().map(|(_, cell)| cell(task)).collect();
            out.push_str(&cells.join("  "));
            out.push('\n');
        }
        out
    }

    fn header(&self, visible_days: &[NaiveDate]) -> String {
        match (visible_days.first(), visible_days.last()) {
            (Some(first), Some(last)) => format!(
                "{:<width$} |{} .. {}\n",
                "",
                first,
                last,
                width = self.label_width,
            ),
            _ => String::new(),
        }
    }

    fn bar(&self, position: GridPosition, window_len: usize) -> String {
        if position.is_off_screen() {
            return String::new();
        }
        let offset = position.x as usize;
        let cells = (position.width as usize).min(window_len.saturating_sub(offset));
        let mut row = " ".repeat(offset);
        row.push_str(&self.bar_char.to_string().repeat(cells));
        row
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_owned()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
