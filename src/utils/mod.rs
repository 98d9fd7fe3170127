// src/utils/mod.rs

pub mod pdf;
