// src/gui/components/mod.rs
pub mod header;
pub mod job_card;
pub mod job_list;
