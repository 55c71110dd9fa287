//! Data models for the color wheel palette.
//!
//! Models are independent of the wheel logic and of any UI.

pub mod color;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use color::{Color, ColorId};
pub use palette::Palette;
pub use rgb::RgbColor;
