// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod logos;

pub use app::run;
