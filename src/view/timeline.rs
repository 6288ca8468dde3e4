use chrono::NaiveDate;
use egui::Color32;
use uuid::Uuid;

use crate::model::{EntityKind, Project, Status};

/// One entry on the timeline: a point event (milestone) or an interval
/// event (task), each occupying its own lane.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    pub id: Uuid,
    pub kind: EntityKind,
    pub label: String,
    pub start: NaiveDate,
    /// Equal to `start` for point events.
    pub end: NaiveDate,
    pub lane: usize,
    pub status: Status,
    pub color: Color32,
}

impl TimelineItem {
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

/// Presentation model for the timeline view. Pure derivation; never
/// authoritative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineProjection {
    pub items: Vec<TimelineItem>,
}

impl TimelineProjection {
    pub fn lanes(&self) -> usize {
        self.items.len()
    }

    /// Earliest and latest date across all items, if any.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.items.iter().map(|i| i.start).min()?;
        let max = self.items.iter().map(|i| i.end).max()?;
        Some((min, max))
    }
}

/// Derive the timeline projection for the active project. `None` yields the
/// empty placeholder projection.
pub fn project(active: Option<&Project>) -> TimelineProjection {
    let Some(project) = active else {
        return TimelineProjection::default();
    };

    let mut items = Vec::with_capacity(project.milestones.len() + project.tasks.len());
    let mut lane = 0;

    for m in &project.milestones {
        // A milestone with no due date sits at the project start.
        let at = m.due.unwrap_or(project.start);
        items.push(TimelineItem {
            id: m.id,
            kind: EntityKind::Milestone,
            label: m.title.clone(),
            start: at,
            end: at,
            lane,
            status: m.status,
            color: m.color,
        });
        lane += 1;
    }
    for t in &project.tasks {
        items.push(TimelineItem {
            id: t.id,
            kind: EntityKind::Task,
            label: t.title.clone(),
            start: t.start,
            end: t.end,
            lane,
            status: t.status,
            color: t.color,
        });
        lane += 1;
    }

    TimelineProjection { items }
}
