//! A single palette entry.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Identifier of a palette entry. Unique within a palette.
pub type ColorId = u32;

/// One color on the wheel.
///
/// `id` and `hex` never change after loading. `locked` is flipped by the
/// wheel's lock toggle and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Unique identifier within the palette
    pub id: ColorId,
    /// Optional display name (e.g., "Red")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Color value, written as "#RRGGBB" or "#RGB" in palette files
    pub hex: RgbColor,
    /// Locked colors cannot be selected and never rotate the wheel
    #[serde(default)]
    pub locked: bool,
}

impl Color {
    /// Creates an unlocked, unnamed color.
    #[must_use]
    pub const fn new(id: ColorId, hex: RgbColor) -> Self {
        Self {
            id,
            name: None,
            hex,
            locked: false,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the initial lock state.
    #[must_use]
    pub const fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Name for display, falling back to the hex value.
    #[must_use]
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.hex.to_hex())
    }
}
