// src/core/mod.rs

pub mod dom;
