use egui::{menu, RichText, Ui};

use crate::app::{PlannerApp, ViewTab};
use crate::ui::theme;

/// Render the top toolbar / menu bar: file actions, the view tabs, and the
/// project selector.
pub fn show_toolbar(app: &mut PlannerApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_bar()), |ui| {
            if ui.button("  New Project...").clicked() {
                app.open_project_form(None);
                ui.close_menu();
            }
            let has_active = app.workspace.active().is_some();
            if ui.add_enabled(has_active, egui::Button::new("  Edit Project...")).clicked() {
                app.open_project_form(app.workspace.active());
                ui.close_menu();
            }
            if ui.add_enabled(has_active, egui::Button::new("  Delete Project...")).clicked() {
                app.delete_active_project();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Import JSON...").clicked() {
                app.import_json();
                ui.close_menu();
            }
            if ui.button("  Export JSON...").clicked() {
                app.export_json();
                ui.close_menu();
            }
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
            if ui.button("  Export PDF...").clicked() {
                app.export_pdf();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Open Data Folder").clicked() {
                app.open_data_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Add  ").font(theme::font_bar()), |ui| {
            let has_active = app.workspace.active().is_some();
            if ui.add_enabled(has_active, egui::Button::new("  New Milestone...")).clicked() {
                app.open_milestone_form(None);
                ui.close_menu();
            }
            if ui.add_enabled(has_active, egui::Button::new("  New Task...")).clicked() {
                app.open_task_form(None);
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_bar()), |ui| {
            if ui.button("About").clicked() {
                app.open_about();
                ui.close_menu();
            }
        });

        ui.separator();

        for (tab, label) in [
            (ViewTab::Timeline, format!("{} Timeline", egui_phosphor::regular::LIST_DASHES)),
            (ViewTab::Gantt, format!("{} Gantt", egui_phosphor::regular::CHART_BAR_HORIZONTAL)),
            (ViewTab::Kanban, format!("{} Kanban", egui_phosphor::regular::KANBAN)),
            (ViewTab::Calendar, format!("{} Calendar", egui_phosphor::regular::CALENDAR_BLANK)),
        ] {
            if ui.selectable_value(&mut app.view, tab, label).clicked() {
                app.refit_axis();
            }
        }

        ui.separator();

        let selected = app
            .workspace
            .active_project()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "No project".to_string());
        let mut switch_to = None;
        egui::ComboBox::from_id_salt("project_selector")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for project in app.workspace.store().projects() {
                    let is_active = app.workspace.active() == Some(project.id);
                    if ui.selectable_label(is_active, &project.name).clicked() {
                        switch_to = Some(project.id);
                    }
                }
            });
        if let Some(id) = switch_to {
            app.select_project(id);
        }

        // Right-aligned active project date range
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(project) = app.workspace.active_project() {
                ui.label(
                    RichText::new(format!(
                        "{} → {}",
                        project.start.format("%Y-%m-%d"),
                        project.end.format("%Y-%m-%d"),
                    ))
                    .size(11.0)
                    .weak(),
                );
            }
        });
    });
}
