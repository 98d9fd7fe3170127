// src/handlers/mod.rs

pub mod certificate;
pub mod linkedin;
