// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::{CanonicalTable, Filter, ViewTable},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Vending Machine Analyzer",
        options,
        Box::new(|cc| {
            super::fonts::install_cjk(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::default())))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // documents to load, one path per line
    pub paths_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // canonical data of the last load + current predicates
    pub table: CanonicalTable,
    pub filter: Filter,

    // positions of the visible rows in `table`; rebuilt on filter/load
    pub row_ix: Vec<usize>,

    // view index whose snippet is open, if any
    pub snippet_row: Option<usize>,

    // status line (progress writes here) + per-document warnings of the last load
    pub status: Arc<Mutex<String>>,
    pub warnings: Vec<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!("Init: rate={}, out={}", state.options.pipeline.exchange_rate, out_path_text);

        Self {
            state,
            paths_text: s!(),
            out_path_text,
            out_path_dirty: false,
            table: CanonicalTable::empty(),
            filter: Filter::default(),
            row_ix: Vec::new(),
            snippet_row: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            warnings: Vec::new(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Paths listed in the load box; blank lines ignored.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.paths_text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    pub fn add_paths(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        for p in paths {
            if !self.paths_text.is_empty() && !self.paths_text.ends_with('\n') {
                self.paths_text.push('\n');
            }
            self.paths_text.push_str(&p.to_string_lossy());
        }
    }

    /// Current view over the canonical table.
    pub fn view(&self) -> ViewTable<'_> {
        ViewTable::from_indices(&self.table, self.row_ix.clone())
    }

    /// Re-apply the filter. Called whenever the table or a predicate changes.
    pub fn rebuild_view(&mut self) {
        self.row_ix = self.filter.apply(&self.table).row_ix;
        self.snippet_row = None;
        logd!("View: {} of {} rows (filter={:?})", self.row_ix.len(), self.table.len(), self.filter);
    }

    /// Swap in a freshly loaded table.
    pub fn replace_table(&mut self, table: CanonicalTable) {
        self.table = table;
        if let Some(c) = self.filter.category {
            if !self.table.categories().contains(&c) {
                self.filter.category = None;
            }
        }
        self.rebuild_view();
    }

    fn take_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect()
        });
        if !dropped.is_empty() {
            logf!("UI: {} file(s) dropped", dropped.len());
            self.add_paths(dropped);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.take_dropped_files(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let warn = ui.visuals().warn_fg_color;
            ui.horizontal_wrapped(|ui| {
                ui.label(self.status_text());
                for w in &self.warnings {
                    ui.colored_label(warn, w);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::load_bar::draw(ui, self);

            ui.separator();

            super::components::filter_bar::draw(ui, self);
            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });

        super::components::source_viewer::draw(ctx, self);
    }
}
