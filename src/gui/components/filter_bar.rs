// src/gui/components/filter_bar.rs

use eframe::egui;
use crate::{gui::app::App, model::Category};

const ALL_LABEL: &str = "全部";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cats = app.table.categories();
    let before = app.filter.clone();

    ui.horizontal(|ui| {
        ui.label("種類:");
        let selected = app.filter.category.map_or(ALL_LABEL, Category::label);
        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.filter.category, None, ALL_LABEL);
                for c in cats {
                    ui.selectable_value(&mut app.filter.category, Some(c), c.label());
                }
            });

        ui.label("商品名稱:");
        ui.add(
            egui::TextEdit::singleline(&mut app.filter.name)
                .hint_text("search")
                .desired_width(200.0),
        );
        if ui.button("Reset").clicked() {
            app.filter = Default::default();
        }

        ui.label(format!("{} / {} rows", app.row_ix.len(), app.table.len()));
    });

    if app.filter != before {
        logd!("UI: filter → {:?}", app.filter);
        app.rebuild_view();
    }
}
