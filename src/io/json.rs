use std::path::Path;

use crate::error::Result;
use crate::model::Project;

/// Serialize the full project collection, pretty-printed.
pub fn export_json(projects: &[Project], path: &Path) -> Result<()> {
    let json = to_json_string(projects)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Parse a JSON array of project records from a file.
///
/// Errors reject the import wholesale — there is no partial import. Records
/// that parse are normalized on the way in (fresh id when absent, empty
/// milestone/task lists when missing).
pub fn import_json(path: &Path) -> Result<Vec<Project>> {
    let json = std::fs::read_to_string(path)?;
    from_json_str(&json)
}

pub fn to_json_string(projects: &[Project]) -> Result<String> {
    Ok(serde_json::to_string_pretty(projects)?)
}

pub fn from_json_str(json: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Milestone, Status, Task};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn export_then_import_is_lossless() {
        let mut project = Project::new("Launch", date(2024, 1, 1), date(2024, 6, 30));
        project.description = "Q1 launch".into();
        project.team = vec!["Ada".into(), "Grace".into()];
        let mut m = Milestone::new("Beta", Some(date(2024, 3, 1)));
        m.status = Status::InProgress;
        project.milestones.push(m);
        let mut t = Task::new("Build", date(2024, 1, 1), date(2024, 1, 10));
        t.status = Status::Completed;
        t.color = egui::Color32::from_rgb(229, 57, 53);
        project.tasks.push(t);
        let projects = vec![project];

        let json = to_json_string(&projects).unwrap();
        let back = from_json_str(&json).unwrap();
        assert_eq!(back, projects);
    }

    #[test]
    fn non_array_root_is_rejected() {
        let err = from_json_str(r#"{"name": "not an array"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        let err = from_json_str("garbage").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn malformed_record_is_normalized_not_rejected() {
        // Missing id and milestones: both are backfilled, tasks defaults too.
        let json = r#"[{"name": "Bare", "start": "2024-01-01", "end": "2024-02-01"}]"#;
        let projects = from_json_str(json).unwrap();
        assert_eq!(projects.len(), 1);
        assert!(!projects[0].id.is_nil());
        assert_eq!(projects[0].milestones, Vec::new());
        assert_eq!(projects[0].tasks, Vec::new());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let projects = vec![Project::new("P", date(2024, 1, 1), date(2024, 2, 1))];
        export_json(&projects, &path).unwrap();
        assert_eq!(import_json(&path).unwrap(), projects);
    }
}
