//! Drag-commit application: atomic date mutation, recomputation, and
//! rejection with the prior state intact.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use prodline_core::{
    DateRange, Factory, FactoryType, Project, ProjectPhase, TaskStatus, TaskUpdate, UpdateError,
};
use prodline_engine::{apply_task_update, expand_project, StatusContext, TemplateCatalog};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn setup(today: NaiveDate) -> (Vec<prodline_core::ScheduledTask>, StatusContext) {
    let project = Project {
        id: "order-7".into(),
        name: "Spring serum line".into(),
        start_date: date(2026, 3, 2),
        end_date: date(2026, 5, 29),
        phase: ProjectPhase::Active,
        progress: 0,
        manufacturer_ids: vec!["m1".into()],
        container_ids: vec!["c1".into()],
        packaging_ids: vec!["p1".into()],
    };
    let factories = vec![
        Factory::new("m1", "Seoul Cosmetics Lab", FactoryType::Manufacturing),
        Factory::new("c1", "Glasspack Molding", FactoryType::Container),
        Factory::new("p1", "Hanil Printing", FactoryType::Packaging),
    ];
    let tasks = expand_project(&project, &factories, &TemplateCatalog::standard(), today);
    let ctx = StatusContext::new(project.phase, project.progress, today);
    (tasks, ctx)
}

#[test]
fn commit_moves_dates_and_recomputes_status() {
    let today = date(2026, 3, 16);
    let (mut tasks, ctx) = setup(today);

    // "Sample quality check" is pending (Mar 24-26); drag it back so it
    // covers today and it must flip to in progress
    let id = tasks[3].id.clone();
    let update = TaskUpdate::reschedule(&id, DateRange::new(date(2026, 3, 14), date(2026, 3, 20)));

    apply_task_update(&mut tasks, &update, &ctx).unwrap();

    assert_eq!(tasks[3].start_date, date(2026, 3, 14));
    assert_eq!(tasks[3].end_date, date(2026, 3, 20));
    assert_eq!(tasks[3].status, TaskStatus::InProgress);
    assert!(tasks[3].progress > 0 && tasks[3].progress < 100);
}

#[test]
fn commit_moves_assignment_windows_with_the_task() {
    let today = date(2026, 3, 16);
    let (mut tasks, ctx) = setup(today);

    let molding = tasks
        .iter()
        .position(|t| t.title == "Injection molding run")
        .unwrap();
    let id = tasks[molding].id.clone();
    let range = DateRange::new(date(2026, 5, 1), date(2026, 5, 7));

    apply_task_update(&mut tasks, &TaskUpdate::reschedule(&id, range), &ctx).unwrap();

    let assignment = &tasks[molding].factory_assignments[0];
    assert_eq!(assignment.start_date, range.start);
    assert_eq!(assignment.end_date, range.end);
    // Primary assignments mirror the recomputed task state
    assert_eq!(assignment.status, tasks[molding].status);
    assert_eq!(assignment.progress, tasks[molding].progress);
}

#[test]
fn partial_update_keeps_the_other_endpoint() {
    let today = date(2026, 3, 16);
    let (mut tasks, ctx) = setup(today);

    let id = tasks[4].id.clone();
    let old_start = tasks[4].start_date;
    let update = TaskUpdate {
        task_id: id,
        start_date: None,
        end_date: Some(date(2026, 4, 20)),
    };

    apply_task_update(&mut tasks, &update, &ctx).unwrap();
    assert_eq!(tasks[4].start_date, old_start);
    assert_eq!(tasks[4].end_date, date(2026, 4, 20));
}

#[test]
fn unknown_task_is_rejected_without_side_effects() {
    let today = date(2026, 3, 16);
    let (mut tasks, ctx) = setup(today);
    let snapshot = tasks.clone();

    let update = TaskUpdate::reschedule("ghost", DateRange::day(date(2026, 4, 1)));
    let err = apply_task_update(&mut tasks, &update, &ctx).unwrap_err();

    assert!(matches!(err, UpdateError::TaskNotFound(_)));
    assert_eq!(tasks, snapshot);
}

#[test]
fn inverted_range_is_rejected_without_side_effects() {
    let today = date(2026, 3, 16);
    let (mut tasks, ctx) = setup(today);
    let snapshot = tasks.clone();

    let update = TaskUpdate {
        task_id: tasks[2].id.clone(),
        start_date: Some(date(2026, 4, 10)),
        end_date: Some(date(2026, 4, 5)),
    };
    let err = apply_task_update(&mut tasks, &update, &ctx).unwrap_err();

    assert!(matches!(err, UpdateError::InvertedRange { .. }));
    assert_eq!(tasks, snapshot);
}

#[test]
fn empty_update_is_rejected() {
    let today = date(2026, 3, 16);
    let (mut tasks, ctx) = setup(today);

    let update = TaskUpdate {
        task_id: tasks[0].id.clone(),
        start_date: None,
        end_date: None,
    };
    assert!(matches!(
        apply_task_update(&mut tasks, &update, &ctx),
        Err(UpdateError::EmptyUpdate { .. })
    ));
}
