use chrono::{Datelike, Duration, NaiveDate};
use egui::{RichText, Ui};
use uuid::Uuid;

use crate::model::EntityKind;
use crate::ui::theme;
use crate::view::events::DateDragEvent;
use crate::view::CalendarProjection;

/// Which month the calendar shows. Navigation moves this cursor; the
/// underlying data is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn prev(&mut self) {
        if self.month == 1 {
            self.year -= 1;
            self.month = 12;
        } else {
            self.month -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.month == 12 {
            self.year += 1;
            self.month = 1;
        } else {
            self.month += 1;
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// Payload carried by a dragged calendar event. Keeps the original span so
/// a drop can preserve the task's duration.
#[derive(Debug, Clone, Copy)]
struct EventPayload {
    kind: EntityKind,
    id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Render the month grid. Dropping an event onto a day reports a
/// `DateDragEvent` rescheduling it to start there (tasks keep their length,
/// milestones move their due date).
pub fn show_calendar(
    projection: &CalendarProjection,
    cursor: &mut MonthCursor,
    ui: &mut Ui,
) -> Option<DateDragEvent> {
    let mut dragged = None;

    ui.horizontal(|ui| {
        if ui.button("\u{2039} Prev").clicked() {
            cursor.prev();
        }
        if ui.button("Today").clicked() {
            *cursor = MonthCursor::current();
        }
        if ui.button("Next \u{203a}").clicked() {
            cursor.next();
        }
        ui.label(
            RichText::new(cursor.label())
                .font(theme::font_header())
                .color(theme::TEXT_PRIMARY)
                .strong(),
        );
    });
    ui.add_space(6.0);

    ui.columns(7, |columns| {
        for (ui, name) in columns.iter_mut().zip(WEEKDAYS) {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(name)
                        .font(theme::font_sub())
                        .color(theme::TEXT_SECONDARY),
                );
            });
        }
    });

    let first = cursor.first_day();
    let lead = first.weekday().num_days_from_monday() as i64;
    let grid_start = first - Duration::days(lead);
    let today = chrono::Local::now().date_naive();

    // Six rows of seven days covers every month layout.
    let row_height = ((ui.available_height() - 8.0) / 6.0).max(64.0);
    for week in 0..6 {
        ui.columns(7, |columns| {
            for (slot, ui) in columns.iter_mut().enumerate() {
                let day = grid_start + Duration::days(week * 7 + slot as i64);
                if let Some(event) =
                    show_day_cell(projection, cursor, day, today, row_height, ui)
                {
                    dragged = Some(event);
                }
            }
        });
    }

    dragged
}

fn show_day_cell(
    projection: &CalendarProjection,
    cursor: &MonthCursor,
    day: NaiveDate,
    today: NaiveDate,
    height: f32,
    ui: &mut Ui,
) -> Option<DateDragEvent> {
    let in_month = day.month() == cursor.month && day.year() == cursor.year;
    let fill = if day == today {
        theme::BG_SELECTED
    } else if in_month {
        theme::BG_PANEL
    } else {
        theme::BG_DARK
    };

    let frame = egui::Frame::default()
        .fill(fill)
        .rounding(egui::Rounding::same(4.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(4.0));

    let (_, payload) = ui.dnd_drop_zone::<EventPayload, ()>(frame, |ui| {
        ui.set_min_height(height - 10.0);
        let number_color = if in_month {
            theme::TEXT_PRIMARY
        } else {
            theme::TEXT_DIM
        };
        ui.label(
            RichText::new(day.day().to_string())
                .font(theme::font_sub())
                .color(number_color),
        );

        for event in projection.events_on(day) {
            show_event_chip(event, day, ui);
        }
    });

    payload.map(|payload| {
        let span = payload.end - payload.start;
        DateDragEvent {
            kind: payload.kind,
            id: payload.id,
            start: day,
            end: day + span,
        }
    })
}

fn show_event_chip(event: &crate::view::calendar::CalendarEvent, day: NaiveDate, ui: &mut Ui) {
    // Continuation days render as plain chips; only the start day is
    // draggable so one event cannot drop onto itself mid-span.
    let marker = if event.all_day() {
        "\u{25c6} "
    } else if day == event.start {
        ""
    } else {
        "\u{2026} "
    };
    let text = RichText::new(format!("{marker}{}", event.title))
        .font(theme::font_small())
        .color(theme::TEXT_PRIMARY);

    if day == event.start {
        let drag_id = ui.make_persistent_id(("calendar-event", event.id));
        let payload = EventPayload {
            kind: event.kind,
            id: event.id,
            start: event.start,
            end: event.end,
        };
        ui.dnd_drag_source(drag_id, payload, |ui| {
            chip_frame(event.color).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(text.clone());
            });
        });
    } else {
        chip_frame(event.color.gamma_multiply(0.6)).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(text);
        });
    }
}

fn chip_frame(color: egui::Color32) -> egui::Frame {
    egui::Frame::default()
        .fill(color.gamma_multiply(0.35))
        .rounding(egui::Rounding::same(3.0))
        .stroke(egui::Stroke::new(1.0, color))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
}
