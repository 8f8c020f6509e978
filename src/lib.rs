// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;

pub mod data;
pub mod gui;
pub mod log;
