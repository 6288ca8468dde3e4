use chrono::Duration;
use tracing::info;
use uuid::Uuid;

use crate::model::EntityKind;
use crate::store::{MilestoneDraft, ProjectDraft, TaskDraft};
use crate::ui::calendar_view::{self, MonthCursor};
use crate::ui::dialogs::{self, Dialog, MilestoneForm, ProjectForm, TaskForm};
use crate::ui::kanban_view::{self, BoardAction};
use crate::ui::time_axis::TimeAxis;
use crate::ui::{gantt_view, theme, timeline_view, toolbar};
use crate::view::events::DropOutcome;
use crate::workspace::Workspace;

/// Which of the four synchronized views fills the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTab {
    Timeline,
    Gantt,
    Kanban,
    Calendar,
}

pub struct PlannerApp {
    pub workspace: Workspace,
    pub view: ViewTab,
    pub axis: TimeAxis,
    pub calendar_cursor: MonthCursor,
    pub dialog: Option<Dialog>,
    status: String,
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, workspace: Workspace) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        theme::apply_theme(&cc.egui_ctx);

        let mut app = Self {
            axis: TimeAxis::around(workspace.projections.timeline.bounds()),
            workspace,
            view: ViewTab::Timeline,
            calendar_cursor: MonthCursor::current(),
            dialog: None,
            status: String::new(),
        };
        if app.workspace.store().projects().is_empty() {
            app.seed_sample_project();
        }
        app
    }

    /// First-run content so the views have something to show.
    fn seed_sample_project(&mut self) {
        info!("empty data slot, seeding sample project");
        let today = chrono::Local::now().date_naive();
        let Ok(pid) = self.workspace.create_project(ProjectDraft {
            name: "Website Relaunch".into(),
            description: "Sample project".into(),
            team: vec!["Ada".into(), "Grace".into()],
            start: Some(today),
            end: Some(today + Duration::days(60)),
        }) else {
            return;
        };
        let _ = self.workspace.create_milestone(
            pid,
            MilestoneDraft {
                title: "Content freeze".into(),
                due: Some(today + Duration::days(21)),
                ..Default::default()
            },
        );
        let _ = self.workspace.create_milestone(
            pid,
            MilestoneDraft {
                title: "Launch".into(),
                due: Some(today + Duration::days(56)),
                color: theme::entity_color(5),
                ..Default::default()
            },
        );
        let _ = self.workspace.create_task(
            pid,
            TaskDraft {
                title: "Design mockups".into(),
                start: Some(today),
                end: Some(today + Duration::days(14)),
                color: theme::entity_color(2),
                ..Default::default()
            },
        );
        let _ = self.workspace.create_task(
            pid,
            TaskDraft {
                title: "Build pages".into(),
                start: Some(today + Duration::days(10)),
                end: Some(today + Duration::days(40)),
                color: theme::entity_color(0),
                ..Default::default()
            },
        );
        let _ = self.workspace.create_task(
            pid,
            TaskDraft {
                title: "QA pass".into(),
                start: Some(today + Duration::days(40)),
                end: Some(today + Duration::days(54)),
                color: theme::entity_color(1),
                ..Default::default()
            },
        );
        self.refit_axis();
    }

    /// Refit the time axis to the current data, keeping the zoom level.
    pub fn refit_axis(&mut self) {
        let zoom = self.axis.pixels_per_day;
        self.axis = TimeAxis::around(self.workspace.projections.timeline.bounds());
        self.axis.pixels_per_day = zoom;
    }

    pub fn select_project(&mut self, id: Uuid) {
        self.workspace.set_active(Some(id));
        self.refit_axis();
    }

    // --- Dialog openers ---

    pub fn open_project_form(&mut self, edit: Option<Uuid>) {
        let form = match edit.and_then(|id| self.workspace.store().project(id)) {
            Some(project) => ProjectForm::edit(project),
            None => ProjectForm::create(),
        };
        self.dialog = Some(Dialog::Project(form));
    }

    pub fn open_milestone_form(&mut self, edit: Option<Uuid>) {
        let Some(project) = self.workspace.active_project() else {
            return;
        };
        let form = match edit.and_then(|id| project.milestone(id)) {
            Some(m) => MilestoneForm::edit(project.id, m),
            None => MilestoneForm::create(project.id),
        };
        self.dialog = Some(Dialog::Milestone(form));
    }

    pub fn open_task_form(&mut self, edit: Option<Uuid>) {
        let Some(project) = self.workspace.active_project() else {
            return;
        };
        let form = match edit.and_then(|id| project.task(id)) {
            Some(t) => TaskForm::edit(project.id, t),
            None => TaskForm::create(project.id),
        };
        self.dialog = Some(Dialog::Task(form));
    }

    pub fn open_about(&mut self) {
        self.dialog = Some(Dialog::About);
    }

    // --- Destructive actions, confirmed via native dialogs ---

    pub fn delete_active_project(&mut self) {
        let Some(project) = self.workspace.active_project() else {
            return;
        };
        let confirmed = rfd::MessageDialog::new()
            .set_title("Delete Project")
            .set_description(format!(
                "Delete \"{}\" and all of its milestones and tasks?",
                project.name
            ))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show()
            == rfd::MessageDialogResult::Yes;
        if confirmed {
            let id = project.id;
            self.workspace.delete_project(id);
            self.refit_axis();
            self.status = "Project deleted".into();
        }
    }

    fn delete_entity(&mut self, kind: EntityKind, id: Uuid) {
        let Some(project_id) = self.workspace.active() else {
            return;
        };
        let confirmed = rfd::MessageDialog::new()
            .set_title(format!("Delete {kind}"))
            .set_description(format!("Delete this {kind}?"))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show()
            == rfd::MessageDialogResult::Yes;
        if !confirmed {
            return;
        }
        match kind {
            EntityKind::Milestone => self.workspace.delete_milestone(project_id, id),
            EntityKind::Task => self.workspace.delete_task(project_id, id),
        }
        self.refit_axis();
        self.status = format!("{kind} deleted");
    }

    // --- Import / export through native file pickers ---

    pub fn import_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        match self.workspace.import_json(&path) {
            Ok(count) => {
                self.refit_axis();
                self.status = format!("Imported {count} project(s)");
            }
            Err(e) => self.status = format!("Import failed: {e}"),
        }
    }

    pub fn export_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("projects.json")
            .save_file()
        else {
            return;
        };
        match self.workspace.export_json(&path) {
            Ok(()) => self.status = format!("Exported to {}", path.display()),
            Err(e) => self.status = format!("Export failed: {e}"),
        }
    }

    pub fn export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("projects.csv")
            .save_file()
        else {
            return;
        };
        match self.workspace.export_csv(&path) {
            Ok(rows) => self.status = format!("Exported {rows} row(s) to {}", path.display()),
            Err(e) => self.status = format!("Export failed: {e}"),
        }
    }

    pub fn export_pdf(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name("projects.pdf")
            .save_file()
        else {
            return;
        };
        match self.workspace.export_pdf(&path) {
            Ok(()) => self.status = format!("Exported to {}", path.display()),
            Err(e) => self.status = format!("Export failed: {e}"),
        }
    }

    pub fn open_data_folder(&mut self) {
        if let Some(dir) = self.workspace.data_path().parent() {
            let _ = open::that(dir);
        }
    }

    // --- Central panel ---

    fn show_view(&mut self, ui: &mut egui::Ui) {
        match self.view {
            ViewTab::Timeline => {
                timeline_view::show_timeline(
                    &self.workspace.projections.timeline,
                    &mut self.axis,
                    ui,
                );
            }
            ViewTab::Gantt => {
                gantt_view::show_gantt(&self.workspace.projections.gantt, &mut self.axis, ui);
            }
            ViewTab::Kanban => {
                let output = kanban_view::show_kanban(&self.workspace.projections.kanban, ui);
                if let Some(event) = output.dropped {
                    match self.workspace.apply_drop(&event) {
                        DropOutcome::Applied => {
                            self.status = format!("Moved to {}", event.bucket);
                        }
                        DropOutcome::Reverted => {
                            self.status = "Reverted: item could not be moved".into();
                        }
                    }
                }
                match output.action {
                    Some(BoardAction::Edit(EntityKind::Milestone, id)) => {
                        self.open_milestone_form(Some(id));
                    }
                    Some(BoardAction::Edit(EntityKind::Task, id)) => {
                        self.open_task_form(Some(id));
                    }
                    Some(BoardAction::Delete(kind, id)) => self.delete_entity(kind, id),
                    None => {}
                }
            }
            ViewTab::Calendar => {
                let dragged = calendar_view::show_calendar(
                    &self.workspace.projections.calendar,
                    &mut self.calendar_cursor,
                    ui,
                );
                if let Some(event) = dragged {
                    match self.workspace.apply_date_drag(&event) {
                        DropOutcome::Applied => {
                            self.refit_axis();
                            self.status =
                                format!("Rescheduled to {}", event.start.format("%Y-%m-%d"));
                        }
                        DropOutcome::Reverted => {
                            self.status = "Reverted: item no longer exists".into();
                        }
                    }
                }
            }
        }
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::show_toolbar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status).font(theme::font_sub()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.workspace.data_path().display().to_string())
                            .font(theme::font_small())
                            .color(theme::TEXT_DIM),
                    );
                    if let Some(project) = self.workspace.active_project() {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} milestones · {} tasks",
                                project.milestones.len(),
                                project.tasks.len(),
                            ))
                            .font(theme::font_sub())
                            .color(theme::TEXT_SECONDARY),
                        );
                    }
                });
            });
        });

        if let Some(message) = dialogs::show_dialog(&mut self.dialog, &mut self.workspace, ctx) {
            self.refit_axis();
            self.status = message;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::BG_DARK).inner_margin(8.0))
            .show(ctx, |ui| {
                self.show_view(ui);
            });
    }
}
