use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::model::Project;

/// The persistence slot: one JSON file holding the serialized array of
/// projects, fully overwritten on every mutation.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Slot at an explicit path (tests, portable installs).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot in the platform data directory.
    pub fn default_slot() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "planboard").ok_or(Error::NoDataDir)?;
        Ok(Self::at(dirs.data_dir().join("projects.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the project collection. An absent or unparsable slot degrades to
    /// an empty collection — load is never fatal.
    pub fn load(&self) -> Vec<Project> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no saved data, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read saved data");
                return Vec::new();
            }
        };
        match serde_json::from_str(&json) {
            Ok(projects) => projects,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "saved data is not valid JSON, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full collection.
    pub fn save(&self, projects: &[Project]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(projects)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn absent_slot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::at(dir.path().join("projects.json"));
        assert_eq!(storage.load(), Vec::new());
    }

    #[test]
    fn unparsable_slot_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, "{not json").unwrap();
        let storage = Storage::at(&path);
        assert_eq!(storage.load(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::at(dir.path().join("nested").join("projects.json"));
        let projects = vec![Project::new("P", date(2024, 1, 1), date(2024, 6, 30))];
        storage.save(&projects).unwrap();
        assert_eq!(storage.load(), projects);
    }

    #[test]
    fn legacy_slot_without_tasks_lists_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"[{"name": "Old", "start": "2024-01-01", "end": "2024-06-30",
                 "milestones": [{"title": "Beta", "status": "Not Started"}]}]"#,
        )
        .unwrap();
        let projects = Storage::at(&path).load();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].tasks, Vec::new());
        assert_eq!(projects[0].milestones.len(), 1);
        assert!(!projects[0].id.is_nil());
    }
}
