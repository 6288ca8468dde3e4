use serde::{Deserialize, Serialize};

/// Lifecycle state shared by milestones and tasks.
///
/// This is the single canonical representation; every view derives its own
/// rendering concept from it (Kanban column, completion percentage, label).
/// The Kanban "Backlog" column is a display alias for `NotStarted`, never a
/// distinct state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(alias = "Not Started", alias = "Backlog", alias = "not-started")]
    NotStarted,
    #[serde(alias = "In Progress", alias = "in-progress")]
    InProgress,
    #[serde(alias = "Completed", alias = "Done", alias = "completed")]
    Completed,
}

impl Status {
    /// All states, in Kanban column order.
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Completed];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }

    /// Kanban column title. "Backlog" is the display alias for `NotStarted`.
    pub fn bucket_label(self) -> &'static str {
        match self {
            Status::NotStarted => "Backlog",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }

    /// Completion percentage shown in the timeline and Gantt views.
    pub fn completion_percent(self) -> u8 {
        match self {
            Status::NotStarted => 0,
            Status::InProgress => 50,
            Status::Completed => 100,
        }
    }

    /// Parse a status from a display label, bucket name, or legacy string.
    ///
    /// Returns `None` for unrecognized input; callers treat that as a
    /// rejected transition, not an error.
    pub fn parse(s: &str) -> Option<Status> {
        match s.trim().to_lowercase().as_str() {
            "not started" | "not-started" | "notstarted" | "backlog" | "new" => {
                Some(Status::NotStarted)
            }
            "in progress" | "in-progress" | "inprogress" | "active" | "started" => {
                Some(Status::InProgress)
            }
            "completed" | "complete" | "done" | "finished" => Some(Status::Completed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn completion_follows_status() {
        assert_eq!(Status::NotStarted.completion_percent(), 0);
        assert_eq!(Status::InProgress.completion_percent(), 50);
        assert_eq!(Status::Completed.completion_percent(), 100);
    }

    #[test]
    fn backlog_is_an_alias_not_a_state() {
        assert_eq!(Status::parse("Backlog"), Some(Status::NotStarted));
        assert_eq!(Status::NotStarted.bucket_label(), "Backlog");
        assert_eq!(Status::NotStarted.label(), "Not Started");
    }

    #[test]
    fn parse_accepts_labels_and_rejects_garbage() {
        assert_eq!(Status::parse("In Progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("  done "), Some(Status::Completed));
        assert_eq!(Status::parse("Blocked"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn legacy_json_labels_deserialize() {
        let s: Status = serde_json::from_str("\"Not Started\"").unwrap();
        assert_eq!(s, Status::NotStarted);
        let s: Status = serde_json::from_str("\"Backlog\"").unwrap();
        assert_eq!(s, Status::NotStarted);
        let s: Status = serde_json::from_str("\"InProgress\"").unwrap();
        assert_eq!(s, Status::InProgress);
    }

    #[test]
    fn round_trips_through_json() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            let back: Status = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
