use chrono::NaiveDate;
use egui::Color32;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{default_color, EntityKind, Milestone, Project, Status, Task};

/// Field input for creating or editing a project.
///
/// Dialogs fill one of these and hand it to the store; the store owns
/// validation and id assignment.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub team: Vec<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Field input for creating or editing a milestone.
#[derive(Debug, Clone)]
pub struct MilestoneDraft {
    pub title: String,
    pub description: String,
    pub due: Option<NaiveDate>,
    pub status: Status,
    pub color: Color32,
}

impl Default for MilestoneDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due: None,
            status: Status::NotStarted,
            color: Color32::from_rgb(255, 165, 0),
        }
    }
}

/// Field input for creating or editing a task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub status: Status,
    pub color: Color32,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start: None,
            end: None,
            status: Status::NotStarted,
            color: default_color(),
        }
    }
}

/// The canonical collection of projects: single source of truth for all
/// four views.
///
/// The store is an explicit value passed by reference — no ambient
/// singletons. It knows nothing about persistence or projections; the
/// `Workspace` wraps every mutation with those.
#[derive(Debug, Default)]
pub struct EntityStore {
    projects: Vec<Project>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn project_mut(&mut self, id: Uuid) -> Result<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::NotFound(id))
    }

    // --- Projects ---

    /// Create a project from draft fields. Fails with `Validation` if the
    /// name is empty after trimming.
    pub fn create_project(&mut self, draft: ProjectDraft) -> Result<Uuid> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("name"));
        }
        let today = chrono::Local::now().date_naive();
        let mut project = Project::new(
            name,
            draft.start.unwrap_or(today),
            draft.end.unwrap_or(today),
        );
        project.description = draft.description;
        project.team = draft.team;
        let id = project.id;
        self.projects.push(project);
        Ok(id)
    }

    /// Overwrite a project's own fields. The id and the owned milestone/task
    /// lists are untouched.
    pub fn update_project(&mut self, id: Uuid, draft: ProjectDraft) -> Result<()> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Validation("name"));
        }
        let project = self.project_mut(id)?;
        project.name = name;
        project.description = draft.description;
        project.team = draft.team;
        if let Some(start) = draft.start {
            project.start = start;
        }
        if let Some(end) = draft.end {
            project.end = end;
        }
        Ok(())
    }

    /// Remove a project and everything it owns. Idempotent.
    pub fn delete_project(&mut self, id: Uuid) {
        self.projects.retain(|p| p.id != id);
    }

    // --- Milestones ---

    /// Create a milestone under the named project. Fails with `NotFound` if
    /// the project is unknown, `Validation` if the title is empty.
    pub fn create_milestone(&mut self, project_id: Uuid, draft: MilestoneDraft) -> Result<Uuid> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(Error::Validation("title"));
        }
        let title = title.to_string();
        let project = self.project_mut(project_id)?;
        let mut milestone = Milestone::new(title, draft.due);
        milestone.description = draft.description;
        milestone.status = draft.status;
        milestone.color = draft.color;
        let id = milestone.id;
        project.milestones.push(milestone);
        Ok(id)
    }

    /// Edit a possibly-stale milestone reference: if the id is no longer
    /// present in the project, the call is a no-op, not an error.
    pub fn update_milestone(&mut self, project_id: Uuid, id: Uuid, draft: MilestoneDraft) -> Result<()> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::Validation("title"));
        }
        let project = self.project_mut(project_id)?;
        if let Some(milestone) = project.milestone_mut(id) {
            milestone.title = title;
            milestone.description = draft.description;
            milestone.due = draft.due;
            milestone.status = draft.status;
            milestone.color = draft.color;
        }
        Ok(())
    }

    /// Remove a milestone by id. Idempotent: deleting an absent id is a no-op.
    pub fn delete_milestone(&mut self, project_id: Uuid, id: Uuid) {
        if let Ok(project) = self.project_mut(project_id) {
            project.milestones.retain(|m| m.id != id);
        }
    }

    // --- Tasks ---

    /// Create a task under the named project. Fails with `NotFound` if the
    /// project is unknown, `Validation` if title, start, or end is missing.
    pub fn create_task(&mut self, project_id: Uuid, draft: TaskDraft) -> Result<Uuid> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(Error::Validation("title"));
        }
        let start = draft.start.ok_or(Error::Validation("start date"))?;
        let end = draft.end.ok_or(Error::Validation("end date"))?;
        let title = title.to_string();
        let project = self.project_mut(project_id)?;
        let mut task = Task::new(title, start, end);
        task.description = draft.description;
        task.status = draft.status;
        task.color = draft.color;
        let id = task.id;
        project.tasks.push(task);
        Ok(id)
    }

    /// Edit a possibly-stale task reference: no-op if the id is gone.
    pub fn update_task(&mut self, project_id: Uuid, id: Uuid, draft: TaskDraft) -> Result<()> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::Validation("title"));
        }
        let start = draft.start.ok_or(Error::Validation("start date"))?;
        let end = draft.end.ok_or(Error::Validation("end date"))?;
        let project = self.project_mut(project_id)?;
        if let Some(task) = project.task_mut(id) {
            task.title = title;
            task.description = draft.description;
            task.start = start;
            task.end = end;
            task.status = draft.status;
            task.color = draft.color;
        }
        Ok(())
    }

    /// Remove a task by id. Idempotent.
    pub fn delete_task(&mut self, project_id: Uuid, id: Uuid) {
        if let Ok(project) = self.project_mut(project_id) {
            project.tasks.retain(|t| t.id != id);
        }
    }

    // --- Drag-driven mutations ---

    /// The single mutation path for Kanban drops. Returns `true` if the
    /// status was applied; `false` means the target entity is gone and the
    /// view should revert the move.
    pub fn set_status(
        &mut self,
        project_id: Uuid,
        kind: EntityKind,
        id: Uuid,
        status: Status,
    ) -> bool {
        let Ok(project) = self.project_mut(project_id) else {
            return false;
        };
        match kind {
            EntityKind::Milestone => match project.milestone_mut(id) {
                Some(m) => {
                    m.status = status;
                    true
                }
                None => false,
            },
            EntityKind::Task => match project.task_mut(id) {
                Some(t) => {
                    t.status = status;
                    true
                }
                None => false,
            },
        }
    }

    /// The mutation path for calendar date-drags: rewrites the milestone due
    /// date or the task start/end. Status is never touched here. Returns
    /// `false` when the reference is stale.
    pub fn set_dates(
        &mut self,
        project_id: Uuid,
        kind: EntityKind,
        id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> bool {
        let Ok(project) = self.project_mut(project_id) else {
            return false;
        };
        match kind {
            EntityKind::Milestone => match project.milestone_mut(id) {
                Some(m) => {
                    m.due = Some(start);
                    true
                }
                None => false,
            },
            EntityKind::Task => match project.task_mut(id) {
                Some(t) => {
                    t.start = start;
                    t.end = end;
                    true
                }
                None => false,
            },
        }
    }

    // --- Import ---

    /// Wholesale replacement used by import. Incoming records are already
    /// normalized during deserialization (fresh id when absent, empty
    /// milestone/task lists when missing).
    pub fn replace_all(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_project() -> (EntityStore, Uuid) {
        let mut store = EntityStore::new();
        let id = store
            .create_project(ProjectDraft {
                name: "Launch".into(),
                start: Some(date(2024, 1, 1)),
                end: Some(date(2024, 6, 30)),
                ..Default::default()
            })
            .unwrap();
        (store, id)
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
    fn create_project_assigns_unique_ids() {
        let mut store = EntityStore::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..50 {
            let id = store
                .create_project(ProjectDraft {
                    name: format!("P{i}"),
                    ..Default::default()
                })
                .unwrap();
            assert!(seen.insert(id), "id issued twice");
        }
        assert_eq!(store.projects().len(), 50);
    }

    #[test]
    fn create_project_rejects_blank_name() {
        let mut store = EntityStore::new();
        let err = store
            .create_project(ProjectDraft {
                name: "   ".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::Validation("name")));
        assert_eq!(store.projects().len(), 0);
    }

    #[test]
    fn create_task_requires_title_and_dates() {
        let (mut store, pid) = store_with_project();
        let err = store
            .create_task(pid, TaskDraft { title: "T".into(), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, Error::Validation("start date")));

        let err = store
            .create_task(
                pid,
                TaskDraft {
                    title: "".into(),
                    start: Some(date(2024, 1, 1)),
                    end: Some(date(2024, 1, 2)),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::Validation("title")));
    }

    #[test]
    fn create_under_unknown_project_is_not_found() {
        let mut store = EntityStore::new();
        let ghost = Uuid::new_v4();
        let err = store.create_task(ghost, task_draft("T")).unwrap_err();
        assert!(matches!(err, Error::NotFound(id) if id == ghost));
    }

    #[test]
    fn update_with_stale_id_is_a_noop() {
        let (mut store, pid) = store_with_project();
        let before = store.project(pid).unwrap().clone();
        store
            .update_task(pid, Uuid::new_v4(), task_draft("Ghost"))
            .unwrap();
        assert_eq!(store.project(pid).unwrap(), &before);
    }

    #[test]
    fn update_keeps_identity_stable() {
        let (mut store, pid) = store_with_project();
        let tid = store.create_task(pid, task_draft("Build")).unwrap();
        let mut draft = task_draft("Build v2");
        draft.status = Status::InProgress;
        store.update_task(pid, tid, draft).unwrap();
        let task = store.project(pid).unwrap().task(tid).unwrap();
        assert_eq!(task.id, tid);
        assert_eq!(task.title, "Build v2");
        assert_eq!(task.status, Status::InProgress);
    }

    #[test]
    fn delete_is_idempotent() {
        let (mut store, pid) = store_with_project();
        let tid = store.create_task(pid, task_draft("Build")).unwrap();
        store.delete_task(pid, tid);
        assert_eq!(store.project(pid).unwrap().tasks.len(), 0);
        // Deleting again, and deleting under an unknown project, change nothing.
        store.delete_task(pid, tid);
        store.delete_task(Uuid::new_v4(), tid);
        store.delete_milestone(pid, Uuid::new_v4());
        assert_eq!(store.project(pid).unwrap().tasks.len(), 0);
    }

    #[test]
    fn set_status_applies_and_reports_stale() {
        let (mut store, pid) = store_with_project();
        let tid = store.create_task(pid, task_draft("Build")).unwrap();
        assert!(store.set_status(pid, EntityKind::Task, tid, Status::Completed));
        assert_eq!(
            store.project(pid).unwrap().task(tid).unwrap().status,
            Status::Completed
        );
        // Stale entity and stale project both report failure, mutate nothing.
        assert!(!store.set_status(pid, EntityKind::Task, Uuid::new_v4(), Status::Completed));
        assert!(!store.set_status(Uuid::new_v4(), EntityKind::Task, tid, Status::NotStarted));
        assert_eq!(
            store.project(pid).unwrap().task(tid).unwrap().status,
            Status::Completed
        );
    }

    #[test]
    fn set_dates_moves_task_and_milestone() {
        let (mut store, pid) = store_with_project();
        let tid = store.create_task(pid, task_draft("Build")).unwrap();
        let mid = store
            .create_milestone(
                pid,
                MilestoneDraft {
                    title: "Beta".into(),
                    due: Some(date(2024, 2, 1)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(store.set_dates(pid, EntityKind::Task, tid, date(2024, 3, 1), date(2024, 3, 10)));
        let task = store.project(pid).unwrap().task(tid).unwrap();
        assert_eq!((task.start, task.end), (date(2024, 3, 1), date(2024, 3, 10)));
        // Task status is untouched by a date move.
        assert_eq!(task.status, Status::NotStarted);

        assert!(store.set_dates(pid, EntityKind::Milestone, mid, date(2024, 4, 1), date(2024, 4, 1)));
        assert_eq!(
            store.project(pid).unwrap().milestone(mid).unwrap().due,
            Some(date(2024, 4, 1))
        );
    }

    #[test]
    fn replace_all_swaps_the_collection_wholesale() {
        let (mut store, _) = store_with_project();
        let incoming = vec![Project::new("Imported", date(2025, 1, 1), date(2025, 2, 1))];
        let expected = incoming.clone();
        store.replace_all(incoming);
        assert_eq!(store.projects(), expected.as_slice());
    }
}
