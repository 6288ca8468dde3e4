use std::path::Path;

use crate::error::Result;
use crate::model::Project;

/// Format a color tag the way the CSV consumer expects it.
fn color_hex(color: egui::Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Export every milestone and task across all projects, one row each.
///
/// Columns: Project, Type, Title, Description, Start Date, End Date,
/// Status, Priority. Milestones emit their due date in both date columns
/// (blank when unset). Returns the number of rows written.
pub fn export_csv(projects: &[Project], path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "Project",
        "Type",
        "Title",
        "Description",
        "Start Date",
        "End Date",
        "Status",
        "Priority",
    ])?;

    let mut rows = 0usize;
    for project in projects {
        for m in &project.milestones {
            let due = m
                .due
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            wtr.write_record([
                project.name.as_str(),
                "Milestone",
                m.title.as_str(),
                m.description.as_str(),
                due.as_str(),
                due.as_str(),
                m.status.label(),
                color_hex(m.color).as_str(),
            ])?;
            rows += 1;
        }
        for t in &project.tasks {
            wtr.write_record([
                project.name.as_str(),
                "Task",
                t.title.as_str(),
                t.description.as_str(),
                t.start.format("%Y-%m-%d").to_string().as_str(),
                t.end.format("%Y-%m-%d").to_string().as_str(),
                t.status.label(),
                color_hex(t.color).as_str(),
            ])?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Milestone, Status, Task};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_row_per_entity_across_projects() {
        let mut a = Project::new("Alpha", date(2024, 1, 1), date(2024, 6, 30));
        a.milestones.push(Milestone::new("Beta", Some(date(2024, 3, 1))));
        let mut t = Task::new("Build", date(2024, 1, 1), date(2024, 1, 10));
        t.status = Status::InProgress;
        a.tasks.push(t);
        let mut b = Project::new("Bravo", date(2024, 2, 1), date(2024, 7, 31));
        b.milestones.push(Milestone::new("Kickoff", None));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let rows = export_csv(&[a, b], &path).unwrap();
        assert_eq!(rows, 3);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "Project");
        assert_eq!(&headers[6], "Status");

        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);

        // Milestone row carries the due date in both date columns.
        assert_eq!(&records[0][1], "Milestone");
        assert_eq!(&records[0][4], "2024-03-01");
        assert_eq!(&records[0][5], "2024-03-01");

        assert_eq!(&records[1][1], "Task");
        assert_eq!(&records[1][6], "In Progress");

        // Unset due date leaves both date columns blank.
        assert_eq!(&records[2][0], "Bravo");
        assert_eq!(&records[2][4], "");
        assert_eq!(&records[2][5], "");
    }
}
