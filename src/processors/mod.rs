//! Text processors built on the fallback pipeline

pub mod structured;
