// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{config::options::ExportFormat, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.out_path_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(320.0),
            )
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        let can_export = !app.row_ix.is_empty();
        for (fmt, label) in [(ExportFormat::Csv, "Export CSV"), (ExportFormat::Xlsx, "Export XLSX")] {
            if ui.add_enabled(can_export, egui::Button::new(label)).clicked() {
                crate::gui::actions::export(app, fmt);
            }
        }
    });
}
