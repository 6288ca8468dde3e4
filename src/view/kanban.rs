use egui::Color32;
use uuid::Uuid;

use crate::model::{EntityKind, Project, Status};

/// One card on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanCard {
    pub id: Uuid,
    pub kind: EntityKind,
    pub title: String,
    /// Short date summary rendered under the title.
    pub date_label: String,
    pub color: Color32,
}

/// One status bucket and its cards.
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanColumn {
    pub status: Status,
    pub cards: Vec<KanbanCard>,
}

impl KanbanColumn {
    pub fn title(&self) -> &'static str {
        self.status.bucket_label()
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Presentation model for the Kanban view: exactly three columns
/// partitioning every milestone and task of the active project.
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanProjection {
    pub columns: [KanbanColumn; 3],
}

impl Default for KanbanProjection {
    fn default() -> Self {
        Self {
            columns: Status::ALL.map(|status| KanbanColumn {
                status,
                cards: Vec::new(),
            }),
        }
    }
}

impl KanbanProjection {
    pub fn column(&self, status: Status) -> &KanbanColumn {
        // Columns are laid out in Status::ALL order.
        &self.columns[Status::ALL.iter().position(|s| *s == status).unwrap_or(0)]
    }
}

/// Derive the Kanban projection for the active project.
pub fn project(active: Option<&Project>) -> KanbanProjection {
    let mut projection = KanbanProjection::default();
    let Some(project) = active else {
        return projection;
    };

    for m in &project.milestones {
        let date_label = match m.due {
            Some(due) => format!("due {}", due.format("%Y-%m-%d")),
            None => "no due date".to_string(),
        };
        push_card(
            &mut projection,
            m.status,
            KanbanCard {
                id: m.id,
                kind: EntityKind::Milestone,
                title: m.title.clone(),
                date_label,
                color: m.color,
            },
        );
    }
    for t in &project.tasks {
        push_card(
            &mut projection,
            t.status,
            KanbanCard {
                id: t.id,
                kind: EntityKind::Task,
                title: t.title.clone(),
                date_label: format!(
                    "{} → {}",
                    t.start.format("%Y-%m-%d"),
                    t.end.format("%Y-%m-%d")
                ),
                color: t.color,
            },
        );
    }

    projection
}

fn push_card(projection: &mut KanbanProjection, status: Status, card: KanbanCard) {
    for column in &mut projection.columns {
        if column.status == status {
            column.cards.push(card);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Milestone, Task};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_project() -> Project {
        let mut p = Project::new("P", date(2024, 1, 1), date(2024, 12, 31));
        for (i, status) in [Status::NotStarted, Status::InProgress, Status::Completed, Status::NotStarted]
            .into_iter()
            .enumerate()
        {
            let mut m = Milestone::new(format!("M{i}"), Some(date(2024, 2, 1)));
            m.status = status;
            p.milestones.push(m);
            let mut t = Task::new(format!("T{i}"), date(2024, 1, 1), date(2024, 1, 10));
            t.status = status;
            p.tasks.push(t);
        }
        p
    }

    #[test]
    fn buckets_partition_every_item_exactly_once() {
        let p = sample_project();
        let projection = project(Some(&p));

        let total: usize = projection.columns.iter().map(|c| c.count()).sum();
        assert_eq!(total, p.milestones.len() + p.tasks.len());

        let mut seen = HashSet::new();
        for column in &projection.columns {
            for card in &column.cards {
                assert!(seen.insert(card.id), "item appears in two buckets");
            }
        }
    }

    #[test]
    fn cards_land_in_their_status_bucket() {
        let p = sample_project();
        let projection = project(Some(&p));
        for column in &projection.columns {
            for card in &column.cards {
                let status = match card.kind {
                    EntityKind::Milestone => {
                        p.milestones.iter().find(|m| m.id == card.id).unwrap().status
                    }
                    EntityKind::Task => p.tasks.iter().find(|t| t.id == card.id).unwrap().status,
                };
                assert_eq!(status, column.status);
            }
        }
        // NotStarted items show under the "Backlog" display alias.
        assert_eq!(projection.columns[0].title(), "Backlog");
        assert_eq!(projection.columns[0].count(), 4);
    }

    #[test]
    fn no_active_project_projects_three_empty_columns() {
        let projection = project(None);
        assert_eq!(projection.columns.len(), 3);
        assert!(projection.columns.iter().all(|c| c.cards.is_empty()));
    }
}
