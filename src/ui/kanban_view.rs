use egui::{RichText, Ui};
use uuid::Uuid;

use crate::model::EntityKind;
use crate::ui::theme;
use crate::view::events::DropEvent;
use crate::view::kanban::{KanbanColumn, KanbanProjection};

/// Payload carried by a dragged card. Explicit tagged record — the drop
/// zone reads it back and builds a `DropEvent` from it.
#[derive(Debug, Clone, Copy)]
struct CardPayload {
    kind: EntityKind,
    id: Uuid,
}

/// Card-level request raised from a context menu.
#[derive(Debug, Clone, Copy)]
pub enum BoardAction {
    Edit(EntityKind, Uuid),
    Delete(EntityKind, Uuid),
}

/// What the board reported this frame.
#[derive(Debug, Default)]
pub struct BoardOutput {
    pub dropped: Option<DropEvent>,
    pub action: Option<BoardAction>,
}

/// Render the three status columns. Dropping a card into a column reports a
/// `DropEvent` naming that column; the caller translates it into a status
/// mutation (or a revert).
pub fn show_kanban(projection: &KanbanProjection, ui: &mut Ui) -> BoardOutput {
    let mut output = BoardOutput::default();

    ui.columns(3, |columns| {
        for (ui, column) in columns.iter_mut().zip(&projection.columns) {
            show_column(column, ui, &mut output);
        }
    });

    output
}

fn show_column(column: &KanbanColumn, ui: &mut Ui, output: &mut BoardOutput) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(column.title())
                .font(theme::font_header())
                .color(theme::status_color(column.status))
                .strong(),
        );
        ui.label(
            RichText::new(format!("({})", column.count()))
                .font(theme::font_sub())
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);

    let frame = egui::Frame::default()
        .fill(theme::BG_PANEL)
        .rounding(egui::Rounding::same(6.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(6.0));

    let (_, payload) = ui.dnd_drop_zone::<CardPayload, ()>(frame, |ui| {
        ui.set_min_height(ui.available_height() - 12.0);
        egui::ScrollArea::vertical()
            .id_salt(("kanban-column", column.status))
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for card in &column.cards {
                    show_card(card, ui, output);
                    ui.add_space(4.0);
                }
                if column.cards.is_empty() {
                    ui.label(RichText::new("Drop items here").color(theme::TEXT_DIM).italics());
                }
            });
    });

    if let Some(payload) = payload {
        output.dropped = Some(DropEvent {
            kind: payload.kind,
            id: payload.id,
            bucket: column.title().to_string(),
        });
    }
}

fn show_card(card: &crate::view::kanban::KanbanCard, ui: &mut Ui, output: &mut BoardOutput) {
    let drag_id = ui.make_persistent_id(("kanban-card", card.id));
    let response = ui
        .dnd_drag_source(drag_id, CardPayload { kind: card.kind, id: card.id }, |ui| {
            egui::Frame::default()
                .fill(theme::BG_CARD)
                .rounding(egui::Rounding::same(5.0))
                .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        // Color/priority tag.
                        let (rect, _) = ui.allocate_exact_size(
                            egui::Vec2::new(4.0, 28.0),
                            egui::Sense::hover(),
                        );
                        ui.painter()
                            .rect_filled(rect, egui::Rounding::same(2.0), card.color);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&card.title)
                                    .font(theme::font_bar())
                                    .color(theme::TEXT_PRIMARY),
                            );
                            ui.label(
                                RichText::new(format!("{} · {}", card.kind, card.date_label))
                                    .font(theme::font_small())
                                    .color(theme::TEXT_SECONDARY),
                            );
                        });
                    });
                });
        })
        .response;

    response.context_menu(|ui| {
        if ui.button("Edit...").clicked() {
            output.action = Some(BoardAction::Edit(card.kind, card.id));
            ui.close_menu();
        }
        if ui.button("Delete").clicked() {
            output.action = Some(BoardAction::Delete(card.kind, card.id));
            ui.close_menu();
        }
    });
}
