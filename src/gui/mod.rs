// src/gui/mod.rs
pub mod app;
mod actions;
mod components;
mod fonts;
pub mod progress;

pub use app::run;
