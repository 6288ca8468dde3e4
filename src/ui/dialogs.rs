use chrono::NaiveDate;
use egui::{Color32, Context, RichText, Window};
use uuid::Uuid;

use crate::model::{Milestone, Project, Status, Task};
use crate::store::{MilestoneDraft, ProjectDraft, TaskDraft};
use crate::ui::theme;
use crate::workspace::Workspace;

/// The dialog currently shown, if any. One at a time keeps the focus
/// handling simple.
pub enum Dialog {
    Project(ProjectForm),
    Milestone(MilestoneForm),
    Task(TaskForm),
    About,
}

/// Render the active dialog. Returns a status-bar message once a form
/// commits; validation failures keep the dialog open with an inline error.
pub fn show_dialog(
    dialog: &mut Option<Dialog>,
    workspace: &mut Workspace,
    ctx: &Context,
) -> Option<String> {
    let mut message = None;
    let mut close = false;

    match dialog {
        None => return None,
        Some(Dialog::Project(form)) => match form.show(workspace, ctx) {
            FormResult::Open => {}
            FormResult::Cancelled => close = true,
            FormResult::Committed(msg) => {
                message = Some(msg);
                close = true;
            }
        },
        Some(Dialog::Milestone(form)) => match form.show(workspace, ctx) {
            FormResult::Open => {}
            FormResult::Cancelled => close = true,
            FormResult::Committed(msg) => {
                message = Some(msg);
                close = true;
            }
        },
        Some(Dialog::Task(form)) => match form.show(workspace, ctx) {
            FormResult::Open => {}
            FormResult::Cancelled => close = true,
            FormResult::Committed(msg) => {
                message = Some(msg);
                close = true;
            }
        },
        Some(Dialog::About) => {
            if show_about(ctx) {
                close = true;
            }
        }
    }

    if close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        *dialog = None;
    }
    message
}

enum FormResult {
    Open,
    Cancelled,
    Committed(String),
}

fn form_error(ui: &mut egui::Ui, error: &Option<String>) {
    if let Some(error) = error {
        ui.label(RichText::new(error).color(theme::TODAY_LINE));
        ui.add_space(4.0);
    }
}

fn form_buttons(ui: &mut egui::Ui, submit_label: &str) -> (bool, bool) {
    let mut submitted = false;
    let mut cancelled = false;
    ui.separator();
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let submit = egui::Button::new(RichText::new(submit_label).color(Color32::WHITE))
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(4.0));
        if ui.add_sized([80.0, 28.0], submit).clicked() {
            submitted = true;
        }
        if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
            cancelled = true;
        }
    });
    (submitted, cancelled)
}

// --- Project form ---

pub struct ProjectForm {
    id: Option<Uuid>,
    name: String,
    description: String,
    /// Comma-separated in the form, split into members on submit.
    team: String,
    start: NaiveDate,
    end: NaiveDate,
    error: Option<String>,
}

impl ProjectForm {
    pub fn create() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            team: String::new(),
            start: today,
            end: today + chrono::Duration::days(30),
            error: None,
        }
    }

    pub fn edit(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            name: project.name.clone(),
            description: project.description.clone(),
            team: project.team.join(", "),
            start: project.start,
            end: project.end,
            error: None,
        }
    }

    fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            team: self
                .team
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            start: Some(self.start),
            end: Some(self.end),
        }
    }

    fn show(&mut self, workspace: &mut Workspace, ctx: &Context) -> FormResult {
        let title = if self.id.is_some() { "Edit Project" } else { "New Project" };
        let mut result = FormResult::Open;

        Window::new(RichText::new(title).strong().size(14.0))
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(4.0);
                form_error(ui, &self.error);

                egui::Grid::new("project_form_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Name").color(theme::TEXT_SECONDARY));
                        ui.add_sized(
                            [220.0, 24.0],
                            egui::TextEdit::singleline(&mut self.name).hint_text("Project name..."),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
                        ui.add_sized(
                            [220.0, 24.0],
                            egui::TextEdit::singleline(&mut self.description),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Team").color(theme::TEXT_SECONDARY));
                        ui.add_sized(
                            [220.0, 24.0],
                            egui::TextEdit::singleline(&mut self.team)
                                .hint_text("Ada, Grace, Linus"),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut self.start)
                                .id_salt("project_dp_start"),
                        );
                        ui.end_row();

                        ui.label(RichText::new("End").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut self.end)
                                .id_salt("project_dp_end"),
                        );
                        ui.end_row();
                    });

                ui.add_space(6.0);
                let (submitted, cancelled) = form_buttons(ui, if self.id.is_some() { "Save" } else { "Create" });
                if submitted {
                    let outcome = match self.id {
                        Some(id) => workspace.update_project(id, self.draft()).map(|()| "Project updated"),
                        None => workspace.create_project(self.draft()).map(|_| "Project created"),
                    };
                    match outcome {
                        Ok(msg) => result = FormResult::Committed(msg.to_string()),
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
                if cancelled {
                    result = FormResult::Cancelled;
                }
            });

        result
    }
}

// --- Milestone form ---

pub struct MilestoneForm {
    project: Uuid,
    id: Option<Uuid>,
    title: String,
    description: String,
    has_due: bool,
    due: NaiveDate,
    status: Status,
    color: Color32,
    error: Option<String>,
}

impl MilestoneForm {
    pub fn create(project: Uuid) -> Self {
        Self {
            project,
            id: None,
            title: String::new(),
            description: String::new(),
            has_due: true,
            due: chrono::Local::now().date_naive(),
            status: Status::NotStarted,
            color: theme::entity_color(3),
            error: None,
        }
    }

    pub fn edit(project: Uuid, milestone: &Milestone) -> Self {
        Self {
            project,
            id: Some(milestone.id),
            title: milestone.title.clone(),
            description: milestone.description.clone(),
            has_due: milestone.due.is_some(),
            due: milestone.due.unwrap_or_else(|| chrono::Local::now().date_naive()),
            status: milestone.status,
            color: milestone.color,
            error: None,
        }
    }

    fn draft(&self) -> MilestoneDraft {
        MilestoneDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            due: self.has_due.then_some(self.due),
            status: self.status,
            color: self.color,
        }
    }

    fn show(&mut self, workspace: &mut Workspace, ctx: &Context) -> FormResult {
        let title = if self.id.is_some() { "Edit Milestone" } else { "New Milestone" };
        let mut result = FormResult::Open;

        Window::new(RichText::new(title).strong().size(14.0))
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(4.0);
                form_error(ui, &self.error);

                egui::Grid::new("milestone_form_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Title").color(theme::TEXT_SECONDARY));
                        ui.add_sized(
                            [220.0, 24.0],
                            egui::TextEdit::singleline(&mut self.title)
                                .hint_text("Milestone title..."),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
                        ui.add_sized(
                            [220.0, 24.0],
                            egui::TextEdit::singleline(&mut self.description),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Due").color(theme::TEXT_SECONDARY));
                        ui.horizontal(|ui| {
                            ui.checkbox(&mut self.has_due, "");
                            ui.add_enabled(
                                self.has_due,
                                egui_extras::DatePickerButton::new(&mut self.due)
                                    .id_salt("milestone_dp_due"),
                            );
                        });
                        ui.end_row();

                        ui.label(RichText::new("Status").color(theme::TEXT_SECONDARY));
                        status_combo("milestone_status", &mut self.status, ui);
                        ui.end_row();

                        ui.label(RichText::new("Color").color(theme::TEXT_SECONDARY));
                        ui.color_edit_button_srgba(&mut self.color);
                        ui.end_row();
                    });

                ui.add_space(6.0);
                let (submitted, cancelled) = form_buttons(ui, if self.id.is_some() { "Save" } else { "Create" });
                if submitted {
                    let outcome = match self.id {
                        Some(id) => workspace
                            .update_milestone(self.project, id, self.draft())
                            .map(|()| "Milestone updated"),
                        None => workspace
                            .create_milestone(self.project, self.draft())
                            .map(|_| "Milestone created"),
                    };
                    match outcome {
                        Ok(msg) => result = FormResult::Committed(msg.to_string()),
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
                if cancelled {
                    result = FormResult::Cancelled;
                }
            });

        result
    }
}

// --- Task form ---

pub struct TaskForm {
    project: Uuid,
    id: Option<Uuid>,
    title: String,
    description: String,
    start: NaiveDate,
    end: NaiveDate,
    status: Status,
    color: Color32,
    error: Option<String>,
}

impl TaskForm {
    pub fn create(project: Uuid) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            project,
            id: None,
            title: String::new(),
            description: String::new(),
            start: today,
            end: today + chrono::Duration::days(7),
            status: Status::NotStarted,
            color: theme::entity_color(0),
            error: None,
        }
    }

    pub fn edit(project: Uuid, task: &Task) -> Self {
        Self {
            project,
            id: Some(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            start: task.start,
            end: task.end,
            status: task.status,
            color: task.color,
            error: None,
        }
    }

    fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            start: Some(self.start),
            end: Some(self.end),
            status: self.status,
            color: self.color,
        }
    }

    fn show(&mut self, workspace: &mut Workspace, ctx: &Context) -> FormResult {
        let title = if self.id.is_some() { "Edit Task" } else { "New Task" };
        let mut result = FormResult::Open;

        Window::new(RichText::new(title).strong().size(14.0))
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(4.0);
                form_error(ui, &self.error);

                egui::Grid::new("task_form_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Title").color(theme::TEXT_SECONDARY));
                        ui.add_sized(
                            [220.0, 24.0],
                            egui::TextEdit::singleline(&mut self.title).hint_text("Task title..."),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
                        ui.add_sized(
                            [220.0, 24.0],
                            egui::TextEdit::singleline(&mut self.description),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut self.start)
                                .id_salt("task_dp_start"),
                        );
                        ui.end_row();

                        ui.label(RichText::new("End").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut self.end)
                                .id_salt("task_dp_end"),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Status").color(theme::TEXT_SECONDARY));
                        status_combo("task_status", &mut self.status, ui);
                        ui.end_row();

                        ui.label(RichText::new("Color").color(theme::TEXT_SECONDARY));
                        ui.color_edit_button_srgba(&mut self.color);
                        ui.end_row();
                    });

                ui.add_space(6.0);
                let (submitted, cancelled) = form_buttons(ui, if self.id.is_some() { "Save" } else { "Create" });
                if submitted {
                    let outcome = match self.id {
                        Some(id) => workspace
                            .update_task(self.project, id, self.draft())
                            .map(|()| "Task updated"),
                        None => workspace
                            .create_task(self.project, self.draft())
                            .map(|_| "Task created"),
                    };
                    match outcome {
                        Ok(msg) => result = FormResult::Committed(msg.to_string()),
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
                if cancelled {
                    result = FormResult::Cancelled;
                }
            });

        result
    }
}

fn status_combo(id: &str, status: &mut Status, ui: &mut egui::Ui) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(status.label())
        .show_ui(ui, |ui| {
            for candidate in Status::ALL {
                ui.selectable_value(status, candidate, candidate.label());
            }
        });
}

// --- About ---

fn show_about(ctx: &Context) -> bool {
    let mut close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([280.0, 160.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Planboard").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("Timeline, Gantt, Kanban and calendar");
                ui.label("views over one project tracker.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    close = true;
                }
            });
        });
    close
}
