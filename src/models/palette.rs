//! Ordered, fixed-size palette that feeds the color wheel.
//!
//! The default palette holds the 500 shade of 12 Tailwind CSS base colors
//! and is embedded in the binary. Users can supply their own JSON file with
//! the same shape:
//!
//! ```json
//! { "colors": [ { "id": 1, "hex": "#f00" }, { "id": 2, "hex": "#0f0", "locked": true } ] }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::{Color, ColorId};

/// Ordered collection of wheel colors.
///
/// Order defines the position on the wheel: index 0 sits at the wheel's
/// zero angle, index `i` at `i * 360 / len` degrees from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from colors in wheel order.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Load the built-in palette from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the embedded JSON cannot be parsed.
    pub fn load_default() -> Result<Self> {
        let json_data = include_str!("../data/palette.json");
        Self::from_json(json_data).context("Failed to parse built-in palette")
    }

    /// Parse a palette from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let palette: Self = serde_json::from_str(json).context("Invalid palette JSON")?;
        Ok(palette)
    }

    /// Load a palette from a JSON file on disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read palette file: {}", path.display()))?;
        Self::from_json(&content)
            .context(format!("Failed to load palette file: {}", path.display()))
    }

    /// All colors in wheel order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors on the wheel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate colors in wheel order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Get a color by its id.
    #[must_use]
    pub fn get(&self, id: ColorId) -> Option<&Color> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// Wheel position of the color with the given id.
    #[must_use]
    pub fn index_of(&self, id: ColorId) -> Option<usize> {
        self.colors.iter().position(|c| c.id == id)
    }

    /// Get a color by wheel position.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// First id that appears more than once, if any.
    #[must_use]
    pub fn duplicate_id(&self) -> Option<ColorId> {
        let mut seen = HashSet::new();
        self.colors.iter().map(|c| c.id).find(|id| !seen.insert(*id))
    }

    /// Flip the lock flag of the color with `id`.
    ///
    /// Returns the new lock state, or `None` when the id is not in the palette.
    pub(crate) fn toggle_lock(&mut self, id: ColorId) -> Option<bool> {
        let color = self.colors.iter_mut().find(|c| c.id == id)?;
        color.locked = !color.locked;
        Some(color.locked)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
