// src/gui/components/load_bar.rs
//
// Document list + exchange rate + Load. Files can also be dropped anywhere
// on the window; they are appended to the list.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Documents:");
        let hint = if app.state.gui.last_browse_dir.is_empty() {
            s!("One saved page per line, or drop files here")
        } else {
            format!("e.g. {}", app.state.gui.last_browse_dir)
        };
        ui.add(
            egui::TextEdit::multiline(&mut app.paths_text)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text(hint)
                .font(egui::TextStyle::Monospace),
        );
    });

    ui.horizontal(|ui| {
        ui.label("JPY → TWD:");
        let rate = &mut app.state.options.pipeline.exchange_rate;
        if ui
            .add(egui::DragValue::new(rate).speed(0.001).range(0.0..=10.0).max_decimals(4))
            .changed()
        {
            logd!("UI: rate → {rate}");
        }

        let n = app.paths().len();
        if ui.add_enabled(n > 0, egui::Button::new("Load")).clicked() {
            crate::gui::actions::load(app);
        }
        if ui.button("Clear").clicked() {
            app.paths_text.clear();
        }
        ui.label(format!("{n} document(s)"));
    });
}
