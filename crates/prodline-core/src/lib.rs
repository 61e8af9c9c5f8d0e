//! # prodline-core
//!
//! Core domain model for the prodline manufacturing timeline engine.
//!
//! This crate provides:
//! - Domain types: `Project`, `Factory`, `ScheduledTask`, `FactoryAssignment`, `TaskTemplate`
//! - Calendar-day plumbing: `DateRange` and lenient date normalization (the `date` module)
//! - A small key-value persistence seam for injected services (the `store` module)
//! - Shared error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use prodline_core::{DateRange, TaskTemplate, TaskType, Priority};
//!
//! let template = TaskTemplate::new("Sample production", TaskType::Prototyping, 10)
//!     .priority(Priority::High)
//!     .depends_on_previous();
//!
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
//! );
//! assert_eq!(range.days(), i64::from(template.duration_days));
//! ```

pub mod date;
pub mod store;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Type Aliases
// ============================================================================

/// Unique identifier for a scheduled task
pub type TaskId = String;

/// Unique identifier for a factory
pub type FactoryId = String;

/// Unique identifier for a project
pub type ProjectId = String;

// ============================================================================
// Calendar Ranges
// ============================================================================

/// An inclusive span of calendar days.
///
/// Durations count both endpoints: a range covering a single day has
/// `days() == 1`. The constructor clamps an inverted pair to a single-day
/// range at `start` instead of propagating the violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let end = end.max(start);
        Self { start, end }
    }

    /// Single-day range.
    pub fn day(start: NaiveDate) -> Self {
        Self { start, end: start }
    }

    /// Inclusive day count: `end - start + 1`.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Shift both endpoints by a signed number of days.
    pub fn shifted(&self, days: i64) -> Self {
        Self {
            start: self.start + chrono::Duration::days(days),
            end: self.end + chrono::Duration::days(days),
        }
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// Which kind of physical facility a factory is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactoryType {
    /// Produces the cosmetic contents themselves
    Manufacturing,
    /// Produces bottles, jars, and other containers
    Container,
    /// Produces boxes, labels, and printed packaging
    Packaging,
}

impl FactoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactoryType::Manufacturing => "Manufacturing",
            FactoryType::Container => "Container",
            FactoryType::Packaging => "Packaging",
        }
    }
}

impl std::fmt::Display for FactoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stage of production a task belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Design,
    Sourcing,
    /// Sample runs sent to multiple factories in parallel
    Prototyping,
    QualityCheck,
    MassProduction,
    FinalInspection,
    /// Mold design and fabrication for containers
    Tooling,
    Printing,
}

/// Lifecycle state of a task or assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    /// Past its end date without being closed out
    Overdue,
    /// Halted by a cancelled project
    Blocked,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::InProgress => write!(f, "In Progress"),
            TaskStatus::Completed => write!(f, "Completed"),
            TaskStatus::Overdue => write!(f, "Overdue"),
            TaskStatus::Blocked => write!(f, "Blocked"),
        }
    }
}

/// Lifecycle state of the owning project. Read-only to the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPhase {
    #[default]
    Planning,
    Active,
    Completed,
    Cancelled,
}

/// Scheduling priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Participant role tags carried by templates and task participant slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Designer,
    SourcingManager,
    ProcessEngineer,
    QualityInspector,
    ProductionManager,
    PrintOperator,
}

/// How a factory participates in a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentRole {
    /// The single factory responsible for the task
    Primary,
    /// One of several parallel sampling runs
    Sample,
}

// ============================================================================
// Task Template
// ============================================================================

/// Immutable blueprint from which concrete tasks are generated per project.
///
/// Defined at catalog-load time and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub title: String,
    pub task_type: TaskType,
    /// Calendar days, inclusive counting. Must be > 0.
    pub duration_days: u32,
    pub priority: Priority,
    pub participant_roles: Vec<Role>,
    /// When set, the generated task starts the day after the previous
    /// task ends. When clear, it starts in parallel with the previous one.
    pub depends_on_previous: bool,
}

impl TaskTemplate {
    pub fn new(title: impl Into<String>, task_type: TaskType, duration_days: u32) -> Self {
        Self {
            title: title.into(),
            task_type,
            duration_days,
            priority: Priority::Medium,
            participant_roles: Vec::new(),
            depends_on_previous: false,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn roles(mut self, roles: &[Role]) -> Self {
        self.participant_roles = roles.to_vec();
        self
    }

    pub fn depends_on_previous(mut self) -> Self {
        self.depends_on_previous = true;
        self
    }
}

// ============================================================================
// Scheduled Task
// ============================================================================

/// A participant slot on a task. Seeded from the template's role tags at
/// expansion; the host application fills in the user later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: Option<String>,
    pub role: Role,
}

/// A record linking a task to a specific production facility, with its own
/// status, progress, and date window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactoryAssignment {
    pub factory_id: FactoryId,
    pub factory_name: String,
    pub factory_type: FactoryType,
    pub role: AssignmentRole,
    pub status: TaskStatus,
    pub progress: u8,
    /// Always within the owning task's date range
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
}

/// A concrete task generated from a template for one project.
///
/// Created by project expansion; mutated by status recomputation and by
/// drag-reschedule commits; destroyed with its owning project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub title: String,
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 0 at pending, 100 at completed, strictly between only in progress
    pub progress: u8,
    pub participants: Vec<Participant>,
    pub factory_assignments: Vec<FactoryAssignment>,
    pub priority: Priority,
    pub depends_on: Vec<TaskId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduledTask {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Inclusive duration in days.
    pub fn duration_days(&self) -> i64 {
        self.range().days()
    }

    /// Move the task onto a new date range, touching `updated_at`.
    pub fn set_range(&mut self, range: DateRange, at: DateTime<Utc>) {
        self.start_date = range.start;
        self.end_date = range.end;
        self.updated_at = at;
    }

    pub fn primary_assignment(&self) -> Option<&FactoryAssignment> {
        self.factory_assignments
            .iter()
            .find(|a| a.role == AssignmentRole::Primary)
    }
}

// ============================================================================
// External Inputs
// ============================================================================

/// A production order, as loaded by the host application. Read-only here:
/// the engine consumes its dates, phase, and factory selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub phase: ProjectPhase,
    /// Overall completion (0-100), used for the cancelled-project cutoff
    pub progress: u8,
    #[serde(default)]
    pub manufacturer_ids: Vec<FactoryId>,
    #[serde(default)]
    pub container_ids: Vec<FactoryId>,
    #[serde(default)]
    pub packaging_ids: Vec<FactoryId>,
}

impl Project {
    /// All selected factory ids, across the three tracks.
    pub fn factory_ids(&self) -> Vec<&FactoryId> {
        self.manufacturer_ids
            .iter()
            .chain(self.container_ids.iter())
            .chain(self.packaging_ids.iter())
            .collect()
    }
}

/// A physical production facility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Factory {
    pub id: FactoryId,
    pub name: String,
    pub factory_type: FactoryType,
}

impl Factory {
    pub fn new(id: impl Into<String>, name: impl Into<String>, factory_type: FactoryType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            factory_type,
        }
    }
}

// ============================================================================
// Mutation Events
// ============================================================================

/// A date mutation produced by a drag commit, consumed by the persistence
/// collaborator and by `apply_task_update`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub task_id: TaskId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TaskUpdate {
    /// Update carrying a complete new range.
    pub fn reschedule(task_id: impl Into<String>, range: DateRange) -> Self {
        Self {
            task_id: task_id.into(),
            start_date: Some(range.start),
            end_date: Some(range.end),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Rejection of a task-collection mutation. The prior state is left intact.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("update for '{task_id}' has start {start} after end {end}")]
    InvertedRange {
        task_id: TaskId,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("update for '{task_id}' carries no date change")]
    EmptyUpdate { task_id: TaskId },
}

// ============================================================================
// Tests
// ============================================================================
