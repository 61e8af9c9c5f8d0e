//! # prodline-engine
//!
//! The scheduling core of the prodline dashboard: expands a project into
//! an ordered task list from reusable templates, derives each task's
//! status and progress from calendar dates and project state, and routes
//! tasks to concrete factories.
//!
//! Control flow: [`TemplateCatalog`] + project start date →
//! [`schedule::schedule`] → raw date ranges → [`status`] (lifecycle state
//! and progress) → [`assign`] (factory assignments) → display-ready
//! [`ScheduledTask`]s. Drag commits re-enter through
//! [`apply_task_update`], which recomputes the same derivations for the
//! affected task before the next render.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use prodline_core::{Factory, FactoryType, Project, ProjectPhase};
//! use prodline_engine::{expand_project, TemplateCatalog};
//!
//! let project = Project {
//!     id: "p1".into(),
//!     name: "Spring serum".into(),
//!     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2026, 5, 29).unwrap(),
//!     phase: ProjectPhase::Active,
//!     progress: 0,
//!     manufacturer_ids: vec!["m1".into()],
//!     container_ids: vec![],
//!     packaging_ids: vec![],
//! };
//! let factories = vec![Factory::new("m1", "Seoul Cosmetics Lab", FactoryType::Manufacturing)];
//!
//! let tasks = expand_project(
//!     &project,
//!     &factories,
//!     &TemplateCatalog::standard(),
//!     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
//! );
//! assert_eq!(tasks.len(), 15);
//! assert_eq!(tasks[0].start_date, project.start_date);
//! ```

pub mod assign;
pub mod catalog;
pub mod schedule;
pub mod status;

pub use assign::{assign, classify, clear_assignments, reassign, MAX_SAMPLE_FACTORIES};
pub use catalog::{CatalogError, TemplateCatalog};
pub use status::{display_progress, progress_for, ElapsedPolicy, StatusContext};

use chrono::{NaiveDate, Utc};
use prodline_core::{
    AssignmentRole, DateRange, Factory, Participant, Project, ScheduledTask, TaskId, TaskUpdate,
    UpdateError,
};
use tracing::debug;

/// Expand a project into its display-ready task list.
///
/// Task-centric mode: every template in the catalog is scheduled against
/// the project's start date, then annotated with status, progress, and
/// factory assignments. `today` is the status date — pass the frame-
/// appropriate current day (or any as-of day for reporting).
pub fn expand_project(
    project: &Project,
    factories: &[Factory],
    catalog: &TemplateCatalog,
    today: NaiveDate,
) -> Vec<ScheduledTask> {
    let templates = catalog.all_templates();
    let ranges = schedule::schedule(&templates, project.start_date);
    let candidates = candidate_factories(project, factories);
    let ctx = StatusContext::new(project.phase, project.progress, today);
    let created = Utc::now();
    let total = templates.len();

    let mut tasks: Vec<ScheduledTask> = Vec::with_capacity(total);
    let mut previous_id: Option<TaskId> = None;

    for (index, (template, range)) in templates.iter().zip(ranges).enumerate() {
        let status = status::resolve(range, index, total, &ctx);
        let depends_on = if template.depends_on_previous {
            previous_id.clone().into_iter().collect()
        } else {
            Vec::new()
        };

        let mut task = ScheduledTask {
            id: format!("{}-t{:02}", project.id, index + 1),
            title: template.title.clone(),
            task_type: template.task_type,
            status,
            start_date: range.start,
            end_date: range.end,
            progress: status::progress_for(status, range, today),
            participants: template
                .participant_roles
                .iter()
                .map(|role| Participant {
                    user_id: None,
                    role: *role,
                })
                .collect(),
            factory_assignments: Vec::new(),
            priority: template.priority,
            depends_on,
            created_at: created,
            updated_at: created,
        };
        task.factory_assignments = assign::assign(&task, &candidates);

        previous_id = Some(task.id.clone());
        tasks.push(task);
    }

    debug!(project = %project.id, count = tasks.len(), "expanded project into tasks");
    tasks
}

/// Resolve the project's selected factory ids against the loaded factory
/// records, preserving the selection order.
pub fn candidate_factories(project: &Project, factories: &[Factory]) -> Vec<Factory> {
    project
        .factory_ids()
        .into_iter()
        .filter_map(|id| factories.iter().find(|f| &f.id == id))
        .cloned()
        .collect()
}

/// Apply a drag-commit date mutation to the task collection.
///
/// Validates first and mutates only on success, so a rejected update
/// leaves the prior state intact. On success the affected task's status
/// and progress are recomputed and its assignment windows move with it —
/// the commit is fully applied before the caller's next render.
pub fn apply_task_update(
    tasks: &mut [ScheduledTask],
    update: &TaskUpdate,
    ctx: &StatusContext,
) -> Result<(), UpdateError> {
    if update.start_date.is_none() && update.end_date.is_none() {
        return Err(UpdateError::EmptyUpdate {
            task_id: update.task_id.clone(),
        });
    }

    let total = tasks.len();
    let index = tasks
        .iter()
        .position(|t| t.id == update.task_id)
        .ok_or_else(|| UpdateError::TaskNotFound(update.task_id.clone()))?;

    let start = update.start_date.unwrap_or(tasks[index].start_date);
    let end = update.end_date.unwrap_or(tasks[index].end_date);
    if end < start {
        return Err(UpdateError::InvertedRange {
            task_id: update.task_id.clone(),
            start,
            end,
        });
    }

    let range = DateRange::new(start, end);
    let status = status::resolve(range, index, total, ctx);
    let progress = status::progress_for(status, range, ctx.today);

    let task = &mut tasks[index];
    task.set_range(range, Utc::now());
    task.status = status;
    task.progress = progress;
    for assignment in &mut task.factory_assignments {
        assignment.start_date = range.start;
        assignment.end_date = range.end;
        if assignment.role == AssignmentRole::Primary {
            assignment.status = status;
            assignment.progress = progress;
        }
    }

    debug!(task = %update.task_id, start = %range.start, end = %range.end, "applied reschedule");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodline_core::{FactoryType, ProjectPhase};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn project() -> Project {
        Project {
            id: "p1".into(),
            name: "Spring serum".into(),
            start_date: date(2026, 3, 2),
            end_date: date(2026, 5, 29),
            phase: ProjectPhase::Active,
            progress: 0,
            manufacturer_ids: vec!["m1".into()],
            container_ids: vec!["c1".into()],
            packaging_ids: vec![],
        }
    }

    fn factories() -> Vec<Factory> {
        vec![
            Factory::new("m1", "Seoul Cosmetics Lab", FactoryType::Manufacturing),
            Factory::new("c1", "Glasspack Molding", FactoryType::Container),
            Factory::new("p9", "Unselected Printer", FactoryType::Packaging),
        ]
    }

    #[test]
    fn candidate_factories_respect_the_selection() {
        let candidates = candidate_factories(&project(), &factories());
        let ids: Vec<&str> = candidates.iter().map(|f| f.id.as_str()).collect();
        // p9 exists but was never selected by the project
        assert_eq!(ids, vec!["m1", "c1"]);
    }

    #[test]
    fn candidate_factories_skip_unknown_ids() {
        let mut p = project();
        p.manufacturer_ids.push("ghost".into());
        let candidates = candidate_factories(&p, &factories());
        assert_eq!(candidates.len(), 2);
    }
}
