//! Shared test fixtures for wheel integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use colorwheel::models::{Color, Palette, RgbColor};
use colorwheel::wheel::{DragRelease, WheelSettings, WheelState};

/// Tolerance for angle comparisons.
pub const EPS: f64 = 1e-9;

/// The three-color red/green/blue palette (ids 1, 2, 3).
pub fn rgb_palette() -> Palette {
    Palette::from_json(
        r##"{"colors": [
            {"id": 1, "hex": "#f00"},
            {"id": 2, "hex": "#0f0"},
            {"id": 3, "hex": "#00f"}
        ]}"##,
    )
    .expect("fixture palette should parse")
}

/// A palette of `count` gray colors with ids `1..=count`.
#[allow(clippy::cast_possible_truncation)]
pub fn gray_palette(count: usize) -> Palette {
    Palette::new(
        (1..=count)
            .map(|id| {
                let level = (id * 10 % 256) as u8;
                Color::new(id as u32, RgbColor::new(level, level, level))
            })
            .collect(),
    )
}

/// Wheel with default settings over `palette`.
pub fn wheel(palette: Palette) -> WheelState {
    WheelState::new(palette, WheelSettings::default()).expect("fixture wheel should mount")
}

/// Wheel with the given drag release policy.
pub fn wheel_with_release(palette: Palette, drag_release: DragRelease) -> WheelState {
    let settings = WheelSettings {
        drag_release,
        ..WheelSettings::default()
    };
    WheelState::new(palette, settings).expect("fixture wheel should mount")
}

/// Angle difference modulo 360, in `[0, 180]`.
pub fn mod360_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
