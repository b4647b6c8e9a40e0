// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod classify;
pub mod csv;
pub mod data;
pub mod engine;
pub mod error;
pub mod file;
pub mod gui;
pub mod model;
pub mod normalize;
pub mod progress;
pub mod report;
pub mod scrape;
pub mod xlsx;
