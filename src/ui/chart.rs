use chrono::{Datelike, NaiveDate};
use egui::{Color32, Pos2, Rect, Rounding, Stroke, Vec2};

use crate::ui::theme;
use crate::ui::time_axis::TimeAxis;

/// Draw the month/week header strip shared by the timeline and Gantt views.
pub fn draw_header(painter: &egui::Painter, origin: Pos2, axis: &TimeAxis, width: f32, height: f32) {
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, theme::HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + theme::HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + theme::HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    // Week gridlines, month labels on the first week of each month.
    let mut date = axis.start;
    let weekday = date.weekday().num_days_from_monday();
    date -= chrono::Duration::days(weekday as i64);

    while date <= axis.end {
        let x = origin.x + axis.date_to_x(date);

        painter.line_segment(
            [
                Pos2::new(x, origin.y + theme::HEADER_HEIGHT),
                Pos2::new(x, origin.y + height),
            ],
            Stroke::new(0.5, theme::GRID_LINE),
        );

        painter.text(
            Pos2::new(x + 3.0, origin.y + 28.0),
            egui::Align2::LEFT_CENTER,
            date.format("W%V").to_string(),
            theme::font_sub(),
            theme::TEXT_SECONDARY,
        );

        if date.day() <= 7 {
            painter.text(
                Pos2::new(x + 3.0, origin.y + 12.0),
                egui::Align2::LEFT_CENTER,
                date.format("%b %Y").to_string(),
                theme::font_header(),
                theme::TEXT_PRIMARY,
            );
        }

        date += chrono::Duration::days(7);
    }
}

/// Vertical "today" marker with its badge.
pub fn draw_today_line(painter: &egui::Painter, origin: Pos2, axis: &TimeAxis, height: f32) {
    let today = chrono::Local::now().date_naive();
    if today < axis.start || today > axis.end {
        return;
    }
    let x = origin.x + axis.date_to_x(today);

    painter.line_segment(
        [
            Pos2::new(x, origin.y + theme::HEADER_HEIGHT),
            Pos2::new(x, origin.y + height),
        ],
        Stroke::new(1.5, theme::TODAY_LINE),
    );

    let badge_w = 42.0;
    let badge_rect = Rect::from_min_size(
        Pos2::new(x - badge_w / 2.0, origin.y + theme::HEADER_HEIGHT - 1.0),
        Vec2::new(badge_w, 14.0),
    );
    painter.rect_filled(badge_rect, Rounding::same(3.0), theme::TODAY_LINE);
    painter.text(
        badge_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Today",
        theme::font_small(),
        Color32::WHITE,
    );
}

/// Diamond marker for point events (milestones).
pub fn draw_diamond(painter: &egui::Painter, center: Pos2, radius: f32, color: Color32) {
    let points = vec![
        Pos2::new(center.x, center.y - radius),
        Pos2::new(center.x + radius, center.y),
        Pos2::new(center.x, center.y + radius),
        Pos2::new(center.x - radius, center.y),
    ];
    painter.add(egui::Shape::convex_polygon(
        points,
        color,
        Stroke::new(1.0, Color32::WHITE),
    ));
}

/// Handle Ctrl+scroll zoom over the chart area.
pub fn handle_zoom(ui: &egui::Ui, axis: &mut TimeAxis) {
    if !ui.rect_contains_pointer(ui.max_rect()) {
        return;
    }
    if ui.input(|i| i.modifiers.ctrl) {
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta);
        if scroll_delta.y > 0.0 {
            axis.zoom_in();
        } else if scroll_delta.y < 0.0 {
            axis.zoom_out();
        }
    }
}

/// Alternating row backgrounds under the header.
pub fn draw_row_backgrounds(painter: &egui::Painter, origin: Pos2, rows: usize, width: f32) {
    for i in 0..rows {
        let y = origin.y + theme::HEADER_HEIGHT + i as f32 * (theme::ROW_HEIGHT + theme::ROW_GAP);
        let row_bg = if i % 2 == 0 { theme::BG_PANEL } else { theme::BG_DARK };
        painter.rect_filled(
            Rect::from_min_size(
                Pos2::new(origin.x, y),
                Vec2::new(width, theme::ROW_HEIGHT + theme::ROW_GAP),
            ),
            0.0,
            row_bg,
        );
    }
}

/// Y coordinate of a lane's row, below the header.
pub fn lane_y(origin: Pos2, lane: usize) -> f32 {
    origin.y + theme::HEADER_HEIGHT + lane as f32 * (theme::ROW_HEIGHT + theme::ROW_GAP) + theme::ROW_GAP
}
