// src/gui/actions/load.rs
use crate::{
    gui::{app::App, progress::GuiProgress},
    report::LoadNotice,
    scrape,
};

/// Load the listed documents, replacing the current table.
/// Runs on the UI thread; local files only.
pub fn load(app: &mut App) {
    let paths = app.paths();
    if paths.is_empty() {
        app.status("No documents listed");
        return;
    }

    logf!("Load: Begin documents={}", paths.len());
    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the pipeline runs ←
    let batch = scrape::load_documents_with_progress(&paths, &app.state.options.pipeline, Some(&mut prog));

    if let Some(dir) = paths.first().and_then(|p| p.parent()) {
        app.state.gui.last_browse_dir = dir.to_string_lossy().into_owned();
    }

    app.warnings = batch.warnings();
    for w in &app.warnings {
        loge!("Load: {w}");
    }

    let notice = batch.notice();
    let summary = batch.summary();
    app.replace_table(batch.table);

    match notice {
        Some(LoadNotice::NothingFound) => app.status(format!("No products found. {summary}")),
        None => app.status(summary),
    }
}
