//! CLI library components for the drawing renamer.

pub mod logging;
pub mod pipeline;
pub mod types;
