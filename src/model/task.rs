use chrono::NaiveDate;
use egui::Color32;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{color_serde, default_color, Status};

/// A date-ranged task within a project.
///
/// `end >= start` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub status: Status,
    /// Color/priority tag (stored as RGBA).
    #[serde(default = "default_color", with = "color_serde")]
    pub color: Color32,
}

impl Task {
    pub fn new(title: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            start,
            end,
            status: Status::NotStarted,
            color: default_color(),
        }
    }
}
