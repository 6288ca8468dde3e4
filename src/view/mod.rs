pub mod calendar;
pub mod events;
pub mod gantt;
pub mod kanban;
pub mod timeline;

use std::collections::HashMap;

use uuid::Uuid;

use crate::model::EntityKind;
use crate::store::EntityStore;

pub use calendar::CalendarProjection;
pub use gantt::GanttProjection;
pub use kanban::KanbanProjection;
pub use timeline::TimelineProjection;

/// The four view projections plus the entity index, all derived together.
///
/// Projections are pure recomputations from the store and the active
/// selection; none of them holds authoritative state. The index maps entity
/// id to kind for every entity currently projected and is invalidated and
/// rebuilt wholesale on every re-projection — incoming drag payloads are
/// checked against it before they reach the store.
#[derive(Debug, Default)]
pub struct Projections {
    pub timeline: TimelineProjection,
    pub gantt: GanttProjection,
    pub kanban: KanbanProjection,
    pub calendar: CalendarProjection,
    index: HashMap<Uuid, EntityKind>,
}

impl Projections {
    /// Recompute everything against the active project. There is no partial
    /// re-render: full recomputation is what keeps the views consistent.
    pub fn rebuild(&mut self, store: &EntityStore, active: Option<Uuid>) {
        let project = active.and_then(|id| store.project(id));

        self.timeline = timeline::project(project);
        self.gantt = gantt::project(project);
        self.kanban = kanban::project(project);
        self.calendar = calendar::project(project);

        self.index.clear();
        if let Some(project) = project {
            for m in &project.milestones {
                self.index.insert(m.id, EntityKind::Milestone);
            }
            for t in &project.tasks {
                self.index.insert(t.id, EntityKind::Task);
            }
        }
    }

    /// Look up the kind of a projected entity. `None` marks a stale payload.
    pub fn kind_of(&self, id: Uuid) -> Option<EntityKind> {
        self.index.get(&id).copied()
    }
}
