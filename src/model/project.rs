use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Milestone, Task};

/// A project: the aggregate root owning its milestones and tasks.
///
/// Ownership is exclusive — no milestone or task is shared between projects.
/// The serde defaults normalize legacy records on load: a record missing
/// `id` gets a fresh v4 id, missing `milestones`/`tasks` become empty lists,
/// and missing dates fall back to today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub team: Vec<String>,
    #[serde(default = "today")]
    pub start: NaiveDate,
    #[serde(default = "today")]
    pub end: NaiveDate,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl Project {
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            team: Vec::new(),
            start,
            end,
            milestones: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn milestone(&self, id: Uuid) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn milestone_mut(&mut self, id: Uuid) -> Option<&mut Milestone> {
        self.milestones.iter_mut().find(|m| m.id == id)
    }

    pub fn task_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn legacy_record_backfills_id_and_lists() {
        // A persisted record from before tasks existed: no id, no lists.
        let json = r#"{"name": "Old", "start": "2024-01-01", "end": "2024-06-30"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(!project.id.is_nil());
        assert_eq!(project.milestones.len(), 0);
        assert_eq!(project.tasks.len(), 0);
        assert_eq!(project.team.len(), 0);
    }

    #[test]
    fn record_with_milestones_but_no_tasks_gets_empty_task_list() {
        let json = r#"{
            "name": "Mid-era",
            "start": "2024-01-01",
            "end": "2024-06-30",
            "milestones": [{"title": "Beta"}]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.milestones.len(), 1);
        assert_eq!(project.tasks, Vec::new());
    }
}
