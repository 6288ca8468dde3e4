use chrono::NaiveDate;
use egui::Color32;
use uuid::Uuid;

use crate::model::{EntityKind, Project};

/// One calendar entry: an all-day event for a milestone, a ranged event for
/// a task. Status is deliberately not part of this model — the calendar
/// visualizes dates only.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub kind: EntityKind,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: Color32,
}

impl CalendarEvent {
    pub fn all_day(&self) -> bool {
        self.start == self.end
    }

    /// Whether this event covers the given day.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Presentation model for the calendar view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarProjection {
    pub events: Vec<CalendarEvent>,
}

impl CalendarProjection {
    pub fn events_on(&self, day: NaiveDate) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(move |e| e.covers(day))
    }
}

/// Derive the calendar projection for the active project. Milestones with
/// no due date have nothing to place on a day and are skipped.
pub fn project(active: Option<&Project>) -> CalendarProjection {
    let Some(project) = active else {
        return CalendarProjection::default();
    };

    let mut events = Vec::new();
    for m in &project.milestones {
        if let Some(due) = m.due {
            events.push(CalendarEvent {
                id: m.id,
                kind: EntityKind::Milestone,
                title: m.title.clone(),
                start: due,
                end: due,
                color: m.color,
            });
        }
    }
    for t in &project.tasks {
        events.push(CalendarEvent {
            id: t.id,
            kind: EntityKind::Task,
            title: t.title.clone(),
            start: t.start,
            end: t.end,
            color: t.color,
        });
    }

    CalendarProjection { events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Milestone, Task};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn milestones_without_due_dates_are_skipped() {
        let mut p = Project::new("P", date(2024, 1, 1), date(2024, 12, 31));
        p.milestones.push(Milestone::new("Someday", None));
        p.milestones.push(Milestone::new("Beta", Some(date(2024, 3, 1))));
        p.tasks.push(Task::new("Build", date(2024, 1, 1), date(2024, 1, 10)));

        let projection = project(Some(&p));
        assert_eq!(projection.events.len(), 2);
        assert!(projection.events[0].all_day());
        assert!(!projection.events[1].all_day());
    }

    #[test]
    fn events_on_filters_by_coverage() {
        let mut p = Project::new("P", date(2024, 1, 1), date(2024, 12, 31));
        p.tasks.push(Task::new("Build", date(2024, 1, 5), date(2024, 1, 10)));

        let projection = project(Some(&p));
        assert_eq!(projection.events_on(date(2024, 1, 7)).count(), 1);
        assert_eq!(projection.events_on(date(2024, 1, 11)).count(), 0);
    }
}
