pub mod calendar_view;
pub mod chart;
pub mod dialogs;
pub mod gantt_view;
pub mod kanban_view;
pub mod theme;
pub mod time_axis;
pub mod timeline_view;
pub mod toolbar;
