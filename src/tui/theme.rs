//! Theme system for consistent UI colors across dark and light modes.
//!
//! `ThemeMode::Auto` asks the OS for its dark/light preference.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders and titles
    pub primary: Color,
    /// Highlights such as the top-of-wheel marker
    pub accent: Color,
    /// Confirmation messages
    pub success: Color,
    /// Warning messages (locked colors, ignored input)
    pub warning: Color,
    /// Primary text content color
    pub text: Color,
    /// Help text and dim content
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(200, 100, 0),
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_theme_contrast() {
        let dark = Theme::dark();
        assert_eq!(dark.text, Color::White);
        assert_eq!(dark.background, Color::Black);

        let light = Theme::light();
        assert_eq!(light.text, Color::Black);
        assert_eq!(light.background, Color::White);
        // Yellow is too bright on a light background
        assert_ne!(light.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_detect() {
        let theme = Theme::detect();
        assert!(theme == Theme::dark() || theme == Theme::light());
    }
}
