use chrono::NaiveDate;
use egui::Color32;
use uuid::Uuid;

use crate::model::{EntityKind, Project};

/// One bar on the Gantt chart, annotated with status-derived completion.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttBar {
    pub id: Uuid,
    pub kind: EntityKind,
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// 0, 50 or 100, derived from status.
    pub completion: u8,
    pub color: Color32,
}

impl GanttBar {
    /// Milestones render as zero-duration diamonds.
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

/// Presentation model for the Gantt view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GanttProjection {
    pub bars: Vec<GanttBar>,
}

impl GanttProjection {
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.bars.iter().map(|b| b.start).min()?;
        let max = self.bars.iter().map(|b| b.end).max()?;
        Some((min, max))
    }
}

/// Derive the Gantt projection for the active project.
pub fn project(active: Option<&Project>) -> GanttProjection {
    let Some(project) = active else {
        return GanttProjection::default();
    };

    let mut bars = Vec::with_capacity(project.milestones.len() + project.tasks.len());

    for m in &project.milestones {
        // Due date gives a point bar; unset due falls back to the project
        // bounds so the milestone still shows up.
        let (start, end) = match m.due {
            Some(due) => (due, due),
            None => (project.start, project.end),
        };
        bars.push(GanttBar {
            id: m.id,
            kind: EntityKind::Milestone,
            label: m.title.clone(),
            start,
            end,
            completion: m.status.completion_percent(),
            color: m.color,
        });
    }
    for t in &project.tasks {
        bars.push(GanttBar {
            id: t.id,
            kind: EntityKind::Task,
            label: t.title.clone(),
            start: t.start,
            end: t.end,
            completion: t.status.completion_percent(),
            color: t.color,
        });
    }

    GanttProjection { bars }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Milestone, Status, Task};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn completion_tracks_status() {
        let mut p = Project::new("P", date(2024, 1, 1), date(2024, 12, 31));
        let mut t = Task::new("Build", date(2024, 1, 1), date(2024, 1, 10));
        t.status = Status::InProgress;
        p.tasks.push(t);

        let projection = project(Some(&p));
        assert_eq!(projection.bars[0].completion, 50);
    }

    #[test]
    fn dateless_milestone_falls_back_to_project_bounds() {
        let mut p = Project::new("P", date(2024, 1, 1), date(2024, 12, 31));
        p.milestones.push(Milestone::new("Someday", None));
        p.milestones.push(Milestone::new("Beta", Some(date(2024, 3, 1))));

        let projection = project(Some(&p));
        assert_eq!(projection.bars[0].start, date(2024, 1, 1));
        assert_eq!(projection.bars[0].end, date(2024, 12, 31));
        assert!(!projection.bars[0].is_point());
        assert!(projection.bars[1].is_point());
    }

    #[test]
    fn no_active_project_projects_empty() {
        assert_eq!(project(None), GanttProjection::default());
    }
}
