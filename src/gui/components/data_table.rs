// src/gui/components/data_table.rs
//
// Draws the current view. Purely a view; the only state it writes is which
// row's source snippet to open (double-click the index, or right-click it).

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, model::COLUMNS};

/// Initial widths per report column.
const WIDTHS: [f32; 8] = [48.0, 110.0, 300.0, 70.0, 110.0, 100.0, 80.0, 90.0];

/// Text columns are left-aligned; the rest are numbers.
fn is_numeric(ci: usize) -> bool {
    !matches!(ci, 1 | 2)
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.table.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No products loaded");
        });
        return;
    }

    // Ensure scroll bars allocate space instead of floating over content
    ui.style_mut().spacing.scroll.floating = false;

    let rows = app.view().display_rows();
    let mut open_row: Option<usize> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for w in WIDTHS {
        table = table.column(Column::initial(w).at_least(20.0).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for (ci, title) in COLUMNS.iter().enumerate() {
                header.col(|ui| {
                    let label = egui::Label::new(RichText::new(*title).strong()).selectable(false);
                    if is_numeric(ci) {
                        ui.centered_and_justified(|ui| { ui.add(label); });
                    } else {
                        ui.add(label);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(cells) = rows.get(row.index()) else { return };
                let view_ix = row.index() + 1;

                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if ci == 0 {
                            let resp = ui.add(egui::Label::new(cell.as_str()).sense(Sense::click()));
                            if resp.double_clicked() {
                                open_row = Some(view_ix);
                            }
                            resp.on_hover_text("Double-click to view source").context_menu(|ui| {
                                if ui.button("Show source").clicked() {
                                    open_row = Some(view_ix);
                                }
                            });
                        } else if is_numeric(ci) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(cell.as_str());
                            });
                        } else {
                            ui.label(cell.as_str());
                        }
                    });
                }
            });
        });

    if let Some(k) = open_row {
        logd!("UI: source viewer → row {k}");
        app.snippet_row = Some(k);
    }
}
