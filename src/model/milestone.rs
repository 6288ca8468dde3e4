use chrono::NaiveDate;
use egui::Color32;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{color_serde, default_color, Status};

/// A single point-in-time milestone within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Due date; may be unset, in which case views fall back to the
    /// project's own bounds.
    #[serde(default)]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub status: Status,
    /// Color/priority tag (stored as RGBA).
    #[serde(default = "default_color", with = "color_serde")]
    pub color: Color32,
}

impl Milestone {
    pub fn new(title: impl Into<String>, due: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            due,
            status: Status::NotStarted,
            color: Color32::from_rgb(255, 165, 0), // Orange
        }
    }
}
