//! Bridge between the UI command queue and the analysis service.

pub mod commands;
pub mod runtime;
