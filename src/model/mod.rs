pub mod milestone;
pub mod project;
pub mod status;
pub mod task;

pub use milestone::Milestone;
pub use project::Project;
pub use status::Status;
pub use task::Task;

/// Tags which leaf entity a view payload or lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EntityKind {
    Milestone,
    Task,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Milestone => write!(f, "Milestone"),
            EntityKind::Task => write!(f, "Task"),
        }
    }
}

/// Serde helper for `Color32` (stored as RGBA).
pub(crate) mod color_serde {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rgba = [color.r(), color.g(), color.b(), color.a()];
        rgba.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rgba: [u8; 4] = Deserialize::deserialize(deserializer)?;
        Ok(Color32::from_rgba_premultiplied(
            rgba[0], rgba[1], rgba[2], rgba[3],
        ))
    }
}

/// Default entity color tag: steel blue.
pub(crate) fn default_color() -> egui::Color32 {
    egui::Color32::from_rgb(70, 130, 180)
}
