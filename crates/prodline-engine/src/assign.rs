//! Factory-to-task assignment.
//!
//! Two regimes. Prototyping tasks fan out to several manufacturing
//! factories at once (parallel sampling runs); every other task is routed
//! to exactly one factory by matching keywords in its title against the
//! three factory tracks. A task with no matching candidate keeps zero
//! assignments — an unassigned task is a valid, displayable state, and
//! defaulting to an arbitrary factory would be worse than showing none.

use prodline_core::{
    AssignmentRole, Factory, FactoryAssignment, FactoryType, ScheduledTask, TaskStatus, TaskType,
};

/// Most parallel sampling runs a prototyping task fans out to.
pub const MAX_SAMPLE_FACTORIES: usize = 3;

const PACKAGING_KEYWORDS: &[&str] = &["packaging", "printing", "color correction"];
const CONTAINER_KEYWORDS: &[&str] = &["container", "mold", "injection"];

/// Classify a task into a factory track by its title.
///
/// Quality checks and anything else without a container or packaging
/// keyword route to manufacturing.
pub fn classify(title: &str) -> FactoryType {
    let lower = title.to_lowercase();
    if PACKAGING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        FactoryType::Packaging
    } else if CONTAINER_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        FactoryType::Container
    } else {
        FactoryType::Manufacturing
    }
}

/// Produce the assignment records for one task.
pub fn assign(task: &ScheduledTask, candidates: &[Factory]) -> Vec<FactoryAssignment> {
    if task.task_type == TaskType::Prototyping {
        assign_samples(task, candidates)
    } else {
        assign_primary(task, candidates)
    }
}

/// Sampling regime: up to three manufacturing factories run the sample in
/// parallel. Only the first run is in progress; later runs queue behind it
/// with staggered (halved) progress.
fn assign_samples(task: &ScheduledTask, candidates: &[Factory]) -> Vec<FactoryAssignment> {
    let mut assignments = Vec::new();
    let mut progress = task.progress;

    for (index, factory) in candidates
        .iter()
        .filter(|f| f.factory_type == FactoryType::Manufacturing)
        .take(MAX_SAMPLE_FACTORIES)
        .enumerate()
    {
        let label = char::from(b'A' + index as u8);
        assignments.push(FactoryAssignment {
            factory_id: factory.id.clone(),
            factory_name: factory.name.clone(),
            factory_type: FactoryType::Manufacturing,
            role: AssignmentRole::Sample,
            status: if index == 0 {
                TaskStatus::InProgress
            } else {
                TaskStatus::Pending
            },
            progress,
            start_date: task.start_date,
            end_date: task.end_date,
            notes: Some(format!("Sample {label}")),
        });
        progress /= 2;
    }

    assignments
}

/// Single-assignment regime: first candidate of the matching track gets a
/// primary assignment mirroring the task's own status and progress.
fn assign_primary(task: &ScheduledTask, candidates: &[Factory]) -> Vec<FactoryAssignment> {
    let wanted = classify(&task.title);
    let Some(factory) = candidates.iter().find(|f| f.factory_type == wanted) else {
        return Vec::new();
    };
    vec![FactoryAssignment {
        factory_id: factory.id.clone(),
        factory_name: factory.name.clone(),
        factory_type: wanted,
        role: AssignmentRole::Primary,
        status: task.status,
        progress: task.progress,
        start_date: task.start_date,
        end_date: task.end_date,
        notes: None,
    }]
}

/// Strip every task's assignments of one factory type. Run before adding
/// replacements so a changed factory selection cannot leave stale
/// duplicates behind.
pub fn clear_assignments(tasks: &mut [ScheduledTask], factory_type: FactoryType) {
    for task in tasks {
        task.factory_assignments
            .retain(|a| a.factory_type != factory_type);
    }
}

/// Replace every task's assignments of one factory type against a new
/// candidate list: clear, then re-run the resolver and keep only the
/// affected type.
pub fn reassign(tasks: &mut [ScheduledTask], factory_type: FactoryType, candidates: &[Factory]) {
    clear_assignments(tasks, factory_type);
    for task in tasks.iter_mut() {
        let additions: Vec<FactoryAssignment> = assign(task, candidates)
            .into_iter()
            .filter(|a| a.factory_type == factory_type)
            .collect();
        task.factory_assignments.extend(additions);
    }
}
