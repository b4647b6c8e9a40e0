// src/engine/mod.rs
//! Metric & sort engine: derive the per-record metrics, then fix the
//! canonical order and its 1-based sequence indices.

mod metrics;
mod order;

pub use metrics::compute;
pub use order::sort_and_index;
