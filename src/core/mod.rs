//! Core translation pipeline module

pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod providers;
