use std::path::Path;

use tracing::warn;
use uuid::Uuid;

use crate::error::Result;
use crate::io::{self, Storage};
use crate::model::Project;
use crate::store::{EntityStore, MilestoneDraft, ProjectDraft, TaskDraft};
use crate::view::events::{self, DateDragEvent, DropEvent, DropOutcome};
use crate::view::Projections;

/// The store, the active selection, the persistence slot, and the four
/// projections, bundled into one explicit value.
///
/// Every mutation goes through here and is followed by the same two steps,
/// in order: persist the full store, then recompute all four projections
/// against the active selection. Callers never invoke either separately.
/// The whole sequence is synchronous and runs to completion before the next
/// interaction event is processed.
pub struct Workspace {
    store: EntityStore,
    storage: Storage,
    active: Option<Uuid>,
    pub projections: Projections,
}

impl Workspace {
    /// Construct from the persistence slot. The first project (if any)
    /// becomes active.
    pub fn load(storage: Storage) -> Self {
        let store = EntityStore::from_projects(storage.load());
        let active = store.projects().first().map(|p| p.id);
        let mut projections = Projections::default();
        projections.rebuild(&store, active);
        Self {
            store,
            storage,
            active,
            projections,
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn active(&self) -> Option<Uuid> {
        self.active
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.active.and_then(|id| self.store.project(id))
    }

    pub fn data_path(&self) -> &Path {
        self.storage.path()
    }

    /// Switch the active project. Selection is not persisted state, so this
    /// only re-derives the projections.
    pub fn set_active(&mut self, id: Option<Uuid>) {
        self.active = id.filter(|id| self.store.project(*id).is_some());
        self.projections.rebuild(&self.store, self.active);
    }

    /// Persist, then re-derive. The single propagation path behind every
    /// mutation.
    fn commit(&mut self) {
        if let Err(e) = self.storage.save(self.store.projects()) {
            warn!(error = %e, "failed to persist projects");
        }
        // A deleted active project falls back to the first remaining one.
        if self.active.map(|id| self.store.project(id).is_none()).unwrap_or(false) {
            self.active = self.store.projects().first().map(|p| p.id);
        }
        self.projections.rebuild(&self.store, self.active);
    }

    // --- Project operations ---

    /// Create a project and make it active.
    pub fn create_project(&mut self, draft: ProjectDraft) -> Result<Uuid> {
        let id = self.store.create_project(draft)?;
        self.active = Some(id);
        self.commit();
        Ok(id)
    }

    pub fn update_project(&mut self, id: Uuid, draft: ProjectDraft) -> Result<()> {
        self.store.update_project(id, draft)?;
        self.commit();
        Ok(())
    }

    pub fn delete_project(&mut self, id: Uuid) {
        self.store.delete_project(id);
        self.commit();
    }

    // --- Milestone / task operations ---

    pub fn create_milestone(&mut self, project_id: Uuid, draft: MilestoneDraft) -> Result<Uuid> {
        let id = self.store.create_milestone(project_id, draft)?;
        self.commit();
        Ok(id)
    }

    pub fn update_milestone(&mut self, project_id: Uuid, id: Uuid, draft: MilestoneDraft) -> Result<()> {
        self.store.update_milestone(project_id, id, draft)?;
        self.commit();
        Ok(())
    }

    pub fn delete_milestone(&mut self, project_id: Uuid, id: Uuid) {
        self.store.delete_milestone(project_id, id);
        self.commit();
    }

    pub fn create_task(&mut self, project_id: Uuid, draft: TaskDraft) -> Result<Uuid> {
        let id = self.store.create_task(project_id, draft)?;
        self.commit();
        Ok(id)
    }

    pub fn update_task(&mut self, project_id: Uuid, id: Uuid, draft: TaskDraft) -> Result<()> {
        self.store.update_task(project_id, id, draft)?;
        self.commit();
        Ok(())
    }

    pub fn delete_task(&mut self, project_id: Uuid, id: Uuid) {
        self.store.delete_task(project_id, id);
        self.commit();
    }

    // --- View-originated mutations ---

    /// Apply a Kanban drop against the active project. A `Reverted` outcome
    /// still commits nothing and re-renders from the unchanged store.
    pub fn apply_drop(&mut self, event: &DropEvent) -> DropOutcome {
        let Some(project_id) = self.active else {
            return DropOutcome::Reverted;
        };
        let outcome = events::apply_drop(&mut self.store, project_id, event);
        if outcome == DropOutcome::Applied {
            self.commit();
        }
        outcome
    }

    /// Apply a calendar date-drag against the active project.
    pub fn apply_date_drag(&mut self, event: &DateDragEvent) -> DropOutcome {
        let Some(project_id) = self.active else {
            return DropOutcome::Reverted;
        };
        let outcome = events::apply_date_drag(&mut self.store, project_id, event);
        if outcome == DropOutcome::Applied {
            self.commit();
        }
        outcome
    }

    // --- Import / export ---

    /// Replace the whole collection from a JSON file. Rejected wholesale on
    /// parse failure. Returns the number of imported projects.
    pub fn import_json(&mut self, path: &Path) -> Result<usize> {
        let projects = io::json::import_json(path)?;
        let count = projects.len();
        self.store.replace_all(projects);
        self.active = self.store.projects().first().map(|p| p.id);
        self.commit();
        Ok(count)
    }

    pub fn export_json(&self, path: &Path) -> Result<()> {
        io::json::export_json(self.store.projects(), path)
    }

    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        io::csv_export::export_csv(self.store.projects(), path)
    }

    pub fn export_pdf(&self, path: &Path) -> Result<()> {
        io::pdf_export::export_pdf(self.store.projects(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityKind, Status};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workspace() -> (Workspace, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::at(dir.path().join("projects.json"));
        (Workspace::load(storage), dir)
    }

    fn task_draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.into(),
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 1, 10)),
            ..Default::default()
        }
    }

    #[test]
    fn every_mutation_persists_and_reprojects() {
        let (mut ws, dir) = workspace();
        let pid = ws
            .create_project(ProjectDraft {
                name: "Launch".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(ws.active(), Some(pid));

        let tid = ws.create_task(pid, task_draft("Build")).unwrap();
        // Projections were rebuilt in the same call.
        assert_eq!(ws.projections.gantt.bars.len(), 1);
        assert_eq!(ws.projections.kanban.column(Status::NotStarted).count(), 1);

        // And the slot on disk already holds the task.
        let reloaded = Workspace::load(Storage::at(dir.path().join("projects.json")));
        assert_eq!(reloaded.store().projects().len(), 1);
        assert!(reloaded.store().project(pid).unwrap().task(tid).is_some());
    }

    #[test]
    fn status_drag_moves_kanban_but_not_calendar() {
        // The §8 scenario: complete a task via drag; Gantt shows 100,
        // Kanban moves it, the calendar keeps Jan 1–10.
        let (mut ws, _dir) = workspace();
        let pid = ws
            .create_project(ProjectDraft {
                name: "Launch".into(),
                ..Default::default()
            })
            .unwrap();
        let tid = ws.create_task(pid, task_draft("Build")).unwrap();

        let outcome = ws.apply_drop(&DropEvent {
            kind: EntityKind::Task,
            id: tid,
            bucket: "Completed".into(),
        });
        assert_eq!(outcome, DropOutcome::Applied);

        assert_eq!(ws.projections.gantt.bars[0].completion, 100);
        assert_eq!(ws.projections.kanban.column(Status::Completed).count(), 1);
        assert_eq!(ws.projections.kanban.column(Status::NotStarted).count(), 0);
        let event = &ws.projections.calendar.events[0];
        assert_eq!((event.start, event.end), (date(2024, 1, 1), date(2024, 1, 10)));
    }

    #[test]
    fn deleting_the_active_project_falls_back() {
        let (mut ws, _dir) = workspace();
        let a = ws
            .create_project(ProjectDraft { name: "A".into(), ..Default::default() })
            .unwrap();
        let b = ws
            .create_project(ProjectDraft { name: "B".into(), ..Default::default() })
            .unwrap();
        assert_eq!(ws.active(), Some(b));

        ws.delete_project(b);
        assert_eq!(ws.active(), Some(a));
        ws.delete_project(a);
        assert_eq!(ws.active(), None);
        // Empty projections are the valid terminal state.
        assert!(ws.projections.timeline.items.is_empty());
    }

    #[test]
    fn import_replaces_wholesale_and_rejects_bad_files() {
        let (mut ws, dir) = workspace();
        ws.create_project(ProjectDraft { name: "Old".into(), ..Default::default() })
            .unwrap();

        let good = dir.path().join("import.json");
        std::fs::write(&good, r#"[{"name": "New", "start": "2025-01-01", "end": "2025-02-01"}]"#)
            .unwrap();
        assert_eq!(ws.import_json(&good).unwrap(), 1);
        assert_eq!(ws.store().projects().len(), 1);
        assert_eq!(ws.store().projects()[0].name, "New");
        assert!(!ws.store().projects()[0].id.is_nil());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"not": "an array"}"#).unwrap();
        assert!(ws.import_json(&bad).is_err());
        // Rejected wholesale: the collection is untouched.
        assert_eq!(ws.store().projects()[0].name, "New");
    }

    #[test]
    fn drop_with_no_active_project_reverts() {
        let (mut ws, _dir) = workspace();
        let outcome = ws.apply_drop(&DropEvent {
            kind: EntityKind::Task,
            id: Uuid::new_v4(),
            bucket: "Completed".into(),
        });
        assert_eq!(outcome, DropOutcome::Reverted);
    }
}
