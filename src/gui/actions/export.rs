// src/gui/actions/export.rs
use crate::{config::options::ExportFormat, file, gui::app::App};

pub fn export(app: &mut App, format: ExportFormat) {
    if app.row_ix.is_empty() {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }

    let export = &mut app.state.options.export;
    if app.out_path_dirty {
        export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
    }
    // the button decides the format; the field shows the path it implies
    export.format = format;
    app.out_path_text = export.out_path().to_string_lossy().into_owned();
    logf!("Export: Begin rows={}, format={:?}, path={}", app.row_ix.len(), format, app.out_path_text);

    match file::export_with(&app.state.options.export, &app.view()) {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            app.status(format!("Exported {} rows to {}", app.row_ix.len(), path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
