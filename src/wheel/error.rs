//! Errors raised while constructing a wheel.

use crate::models::ColorId;

/// Configuration errors that keep a wheel from being created.
///
/// Runtime misuse (unknown ids, stray pointer events) is logged and ignored
/// instead of being reported through this type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WheelError {
    /// The palette has no colors, so the spacing between items is undefined
    #[error("Palette is empty: a color wheel needs at least one color")]
    EmptyPalette,

    /// The drag threshold is not a positive finite number of pixels
    #[error("Invalid drag threshold: {0} (expected a positive number of pixels)")]
    InvalidThreshold(f64),

    /// Two palette entries share an id
    #[error("Duplicate color id in palette: {0}")]
    DuplicateId(ColorId),
}
