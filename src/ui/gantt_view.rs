use egui::{Pos2, Rect, Rounding, Sense, Ui, Vec2};

use crate::ui::chart;
use crate::ui::theme;
use crate::ui::time_axis::TimeAxis;
use crate::view::GanttProjection;

/// Render the Gantt chart: one bar per milestone/task with a
/// status-derived completion overlay. Read-only; status and dates change
/// in the Kanban board, the calendar, or the edit dialogs.
pub fn show_gantt(projection: &GanttProjection, axis: &mut TimeAxis, ui: &mut Ui) {
    if projection.bars.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No project selected — nothing to show")
                    .color(theme::TEXT_DIM),
            );
        });
        return;
    }

    chart::handle_zoom(ui, axis);

    let available = ui.available_size();
    let chart_width = axis.total_width().max(available.x);
    let chart_height = theme::HEADER_HEIGHT
        + projection.bars.len() as f32 * (theme::ROW_HEIGHT + theme::ROW_GAP)
        + 40.0;

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(chart_width, chart_height.max(available.y)),
                Sense::hover(),
            );
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);
            chart::draw_row_backgrounds(&painter, origin, projection.bars.len(), chart_width);
            chart::draw_header(&painter, origin, axis, chart_width, chart_height);
            chart::draw_today_line(&painter, origin, axis, chart_height);

            for (lane, bar) in projection.bars.iter().enumerate() {
                let y = chart::lane_y(origin, lane);

                let hover_rect = if bar.is_point() {
                    let cx = origin.x + axis.date_to_x(bar.start);
                    let cy = y + theme::ROW_HEIGHT / 2.0;
                    let radius = theme::ROW_HEIGHT / 2.0 - theme::BAR_INSET;
                    chart::draw_diamond(&painter, Pos2::new(cx, cy), radius, bar.color);
                    painter.text(
                        Pos2::new(cx + radius + 6.0, cy),
                        egui::Align2::LEFT_CENTER,
                        format!("{} ({}%)", bar.label, bar.completion),
                        theme::font_bar(),
                        theme::TEXT_PRIMARY,
                    );
                    Rect::from_center_size(Pos2::new(cx, cy), Vec2::splat(radius * 2.0))
                } else {
                    let x_start = origin.x + axis.date_to_x(bar.start);
                    let x_end = origin.x + axis.date_to_x(bar.end);
                    let bar_rect = Rect::from_min_size(
                        Pos2::new(x_start, y + theme::BAR_INSET),
                        Vec2::new(
                            (x_end - x_start).max(6.0),
                            theme::ROW_HEIGHT - theme::BAR_INSET * 2.0,
                        ),
                    );
                    let rounding = Rounding::same(theme::BAR_ROUNDING);

                    painter.rect_filled(bar_rect, rounding, bar.color);

                    // Completion overlay: filled portion of the bar.
                    if bar.completion > 0 {
                        let fill = bar_rect.width() * f32::from(bar.completion) / 100.0;
                        painter.rect_filled(
                            Rect::from_min_size(
                                bar_rect.min,
                                Vec2::new(fill, bar_rect.height()),
                            ),
                            rounding,
                            theme::PROGRESS_OVERLAY,
                        );
                    }

                    if bar_rect.width() > 60.0 {
                        painter.text(
                            bar_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            format!("{}%", bar.completion),
                            theme::font_small(),
                            theme::TEXT_PRIMARY,
                        );
                    }
                    painter.text(
                        Pos2::new(bar_rect.right() + 6.0, bar_rect.center().y),
                        egui::Align2::LEFT_CENTER,
                        &bar.label,
                        theme::font_bar(),
                        theme::TEXT_PRIMARY,
                    );
                    bar_rect
                };

                let id = ui.make_persistent_id(("gantt-bar", bar.id));
                let bar_response = ui.interact(hover_rect, id, Sense::hover());
                if bar_response.hovered() {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("gantt-tip", bar.id)),
                        |ui| {
                            ui.strong(&bar.label);
                            ui.label(format!(
                                "{} → {}",
                                bar.start.format("%Y-%m-%d"),
                                bar.end.format("%Y-%m-%d"),
                            ));
                            ui.label(format!("Completion: {}%", bar.completion));
                        },
                    );
                }
            }
        });
}
