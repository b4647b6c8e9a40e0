// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use vm_analyzer::{config::state::GuiState, gui, log};

fn main() {
    log::init(false);

    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        vm_analyzer::loge!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
