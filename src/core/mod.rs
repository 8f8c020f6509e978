// src/core/mod.rs

pub mod fetch;
pub mod filter;
pub mod normalize;
