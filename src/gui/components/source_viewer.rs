// src/gui/components/source_viewer.rs
//
// Floating window with the audit snippet of one view row.

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(k) = app.snippet_row else { return };
    let found = app
        .view()
        .get(k)
        .map(|p| (format!("#{k} {}", p.name), p.source_snippet.clone()));
    let Some((title, snippet)) = found else {
        app.snippet_row = None;
        return;
    };

    let mut open = true;
    egui::Window::new(title)
        .id(egui::Id::new("source_viewer"))
        .open(&mut open)
        .default_size([640.0, 420.0])
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Copy").clicked() {
                    ui.ctx().copy_text(snippet.clone());
                }
            });
            ui.separator();
            egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(&snippet).monospace()).extend());
            });
        });

    if !open {
        app.snippet_row = None;
    }
}
