use egui::{Pos2, Rect, Rounding, Sense, Ui, Vec2};

use crate::ui::chart;
use crate::ui::theme;
use crate::ui::time_axis::TimeAxis;
use crate::view::TimelineProjection;

/// Render the timeline: one lane per item, milestones as diamonds, tasks as
/// bars. Status shows through the style only — this view is read-only.
pub fn show_timeline(projection: &TimelineProjection, axis: &mut TimeAxis, ui: &mut Ui) {
    if projection.items.is_empty() {
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
        + projection.lanes() as f32 * (theme::ROW_HEIGHT + theme::ROW_GAP)
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
            chart::draw_row_backgrounds(&painter, origin, projection.lanes(), chart_width);
            chart::draw_header(&painter, origin, axis, chart_width, chart_height);
            chart::draw_today_line(&painter, origin, axis, chart_height);

            for item in &projection.items {
                let y = chart::lane_y(origin, item.lane);
                let status_tint = theme::status_color(item.status);

                let hover_rect = if item.is_point() {
                    let cx = origin.x + axis.date_to_x(item.start);
                    let cy = y + theme::ROW_HEIGHT / 2.0;
                    let radius = theme::ROW_HEIGHT / 2.0 - theme::BAR_INSET;
                    chart::draw_diamond(&painter, Pos2::new(cx, cy), radius, item.color);
                    painter.text(
                        Pos2::new(cx + radius + 6.0, cy),
                        egui::Align2::LEFT_CENTER,
                        &item.label,
                        theme::font_bar(),
                        theme::TEXT_PRIMARY,
                    );
                    Rect::from_center_size(Pos2::new(cx, cy), Vec2::splat(radius * 2.0))
                } else {
                    let x_start = origin.x + axis.date_to_x(item.start);
                    let x_end = origin.x + axis.date_to_x(item.end);
                    let bar_rect = Rect::from_min_size(
                        Pos2::new(x_start, y + theme::BAR_INSET),
                        Vec2::new(
                            (x_end - x_start).max(6.0),
                            theme::ROW_HEIGHT - theme::BAR_INSET * 2.0,
                        ),
                    );
                    painter.rect_filled(bar_rect, Rounding::same(theme::BAR_ROUNDING), item.color);
                    // Status shows as a thin underline along the bar.
                    painter.rect_filled(
                        Rect::from_min_max(
                            Pos2::new(bar_rect.left(), bar_rect.bottom() - 3.0),
                            bar_rect.max,
                        ),
                        Rounding::same(theme::BAR_ROUNDING),
                        status_tint,
                    );
                    painter.text(
                        Pos2::new(bar_rect.right() + 6.0, bar_rect.center().y),
                        egui::Align2::LEFT_CENTER,
                        &item.label,
                        theme::font_bar(),
                        theme::TEXT_PRIMARY,
                    );
                    bar_rect
                };

                let id = ui.make_persistent_id(("timeline-item", item.id));
                let item_response = ui.interact(hover_rect, id, Sense::hover());
                if item_response.hovered() {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("timeline-tip", item.id)),
                        |ui| {
                            ui.strong(&item.label);
                            if item.is_point() {
                                ui.label(item.start.format("%Y-%m-%d").to_string());
                            } else {
                                ui.label(format!(
                                    "{} → {}",
                                    item.start.format("%Y-%m-%d"),
                                    item.end.format("%Y-%m-%d"),
                                ));
                            }
                            ui.label(item.status.label());
                        },
                    );
                }
            }
        });
}
