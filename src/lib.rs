//! Color wheel picker library.
//!
//! A fixed palette is arranged around a circle. Selecting a color turns the
//! wheel so that color sits at the top; colors can be locked against
//! selection; the wheel can be dragged to rotate it. The `wheel` module is
//! the headless core, `tui` draws it in a terminal.

// Module declarations
pub mod config;
pub mod logging;
pub mod models;
#[cfg(feature = "ratatui")]
pub mod tui;
pub mod wheel;
