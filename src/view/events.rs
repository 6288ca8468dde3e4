use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::{EntityKind, Status};
use crate::store::EntityStore;

/// Reported by the Kanban surface when a card is dropped into a column.
///
/// The bucket arrives as the column's display name and is validated here,
/// at the boundary, before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub kind: EntityKind,
    pub id: Uuid,
    pub bucket: String,
}

/// Reported by the calendar surface when an event is dragged to a new day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateDragEvent {
    pub kind: EntityKind,
    pub id: Uuid,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Outcome of a view-originated mutation. `Reverted` means the item could
/// not be matched back to an entity (or the bucket was unrecognized) and
/// the view must show it at its source location again — which falls out of
/// re-rendering from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Applied,
    Reverted,
}

/// Translate a Kanban drop back into a status mutation.
///
/// Unrecognized bucket names are rejected rather than coerced; stale ids
/// revert. Neither is an error.
pub fn apply_drop(store: &mut EntityStore, project_id: Uuid, event: &DropEvent) -> DropOutcome {
    let Some(status) = Status::parse(&event.bucket) else {
        return DropOutcome::Reverted;
    };
    if store.set_status(project_id, event.kind, event.id, status) {
        DropOutcome::Applied
    } else {
        DropOutcome::Reverted
    }
}

/// Translate a calendar date-drag back into a date mutation. Never touches
/// status.
pub fn apply_date_drag(
    store: &mut EntityStore,
    project_id: Uuid,
    event: &DateDragEvent,
) -> DropOutcome {
    if store.set_dates(project_id, event.kind, event.id, event.start, event.end) {
        DropOutcome::Applied
    } else {
        DropOutcome::Reverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ProjectDraft, TaskDraft};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_task() -> (EntityStore, Uuid, Uuid) {
        let mut store = EntityStore::new();
        let pid = store
            .create_project(ProjectDraft {
                name: "P".into(),
                ..Default::default()
            })
            .unwrap();
        let tid = store
            .create_task(
                pid,
                TaskDraft {
                    title: "Build".into(),
                    start: Some(date(2024, 1, 1)),
                    end: Some(date(2024, 1, 10)),
                    ..Default::default()
                },
            )
            .unwrap();
        (store, pid, tid)
    }

    #[test]
    fn drop_into_completed_column_sets_status() {
        let (mut store, pid, tid) = store_with_task();
        let event = DropEvent {
            kind: EntityKind::Task,
            id: tid,
            bucket: "Completed".into(),
        };
        assert_eq!(apply_drop(&mut store, pid, &event), DropOutcome::Applied);
        assert_eq!(
            store.project(pid).unwrap().task(tid).unwrap().status,
            Status::Completed
        );
    }

    #[test]
    fn backlog_column_maps_to_not_started() {
        let (mut store, pid, tid) = store_with_task();
        store.set_status(pid, EntityKind::Task, tid, Status::Completed);
        let event = DropEvent {
            kind: EntityKind::Task,
            id: tid,
            bucket: "Backlog".into(),
        };
        assert_eq!(apply_drop(&mut store, pid, &event), DropOutcome::Applied);
        assert_eq!(
            store.project(pid).unwrap().task(tid).unwrap().status,
            Status::NotStarted
        );
    }

    #[test]
    fn unrecognized_bucket_is_rejected_not_coerced() {
        let (mut store, pid, tid) = store_with_task();
        let event = DropEvent {
            kind: EntityKind::Task,
            id: tid,
            bucket: "Blocked".into(),
        };
        assert_eq!(apply_drop(&mut store, pid, &event), DropOutcome::Reverted);
        assert_eq!(
            store.project(pid).unwrap().task(tid).unwrap().status,
            Status::NotStarted
        );
    }

    #[test]
    fn stale_card_reverts() {
        let (mut store, pid, _) = store_with_task();
        let event = DropEvent {
            kind: EntityKind::Task,
            id: Uuid::new_v4(),
            bucket: "Completed".into(),
        };
        assert_eq!(apply_drop(&mut store, pid, &event), DropOutcome::Reverted);
    }

    #[test]
    fn date_drag_moves_dates_only() {
        let (mut store, pid, tid) = store_with_task();
        let event = DateDragEvent {
            kind: EntityKind::Task,
            id: tid,
            start: date(2024, 2, 1),
            end: date(2024, 2, 10),
        };
        assert_eq!(apply_date_drag(&mut store, pid, &event), DropOutcome::Applied);
        let task = store.project(pid).unwrap().task(tid).unwrap();
        assert_eq!((task.start, task.end), (date(2024, 2, 1), date(2024, 2, 10)));
        assert_eq!(task.status, Status::NotStarted);
    }
}
