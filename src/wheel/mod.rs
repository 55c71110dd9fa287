//! Color wheel state: rotation, selection, locking and drag gestures.
//!
//! `WheelState` owns the palette for its whole lifetime. The rotation lives
//! in `base_angle`; every change to it goes through one place that also
//! rebuilds the cached angle table, so `angles()` is always
//! `derive_angles(base_angle, len)`.
//!
//! Selecting a color rotates the wheel so that color sits at the top
//! (`INITIAL_ANGLE`, -90 degrees). Dragging horizontally rotates the wheel
//! by one degree per pixel of pointer movement.

pub mod error;
pub mod geometry;
pub mod gesture;
pub mod sink;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::{Color, ColorId, Palette, RgbColor};

pub use error::WheelError;
pub use geometry::{derive_angles, project_position, Placement, INITIAL_ANGLE};
pub use gesture::{DragState, GestureOutcome, GestureTracker, DEFAULT_DRAG_THRESHOLD};
pub use sink::SelectionSink;

/// What happens to the drag rotation when the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragRelease {
    /// Keep the dragged rotation: it is added to the base angle
    #[default]
    Commit,
    /// Show the rotation only while dragging, then return to the base angle
    Preview,
}

/// Tunables fixed at wheel creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSettings {
    /// Pointer distance in pixels that turns a click into a drag
    pub drag_threshold: f64,
    /// Release policy for drag rotation
    pub drag_release: DragRelease,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            drag_release: DragRelease::default(),
        }
    }
}

/// Result of a selection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The color was recorded, emitted and rotated to the top
    Selected(Color),
    /// The color was selected earlier; nothing changed
    AlreadySelected,
    /// The color is locked; nothing changed
    Locked,
    /// No color with that id exists; nothing changed
    Unknown,
}

/// Everything a renderer needs to draw one palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPlacement {
    /// Palette id
    pub id: ColorId,
    /// Position on the wheel
    pub index: usize,
    /// Swatch color
    pub hex: RgbColor,
    /// Whether to draw the lock marker
    pub locked: bool,
    /// Whether the color is in the selection history
    pub selected: bool,
    /// Where the swatch sits relative to the wheel center
    pub placement: Placement,
}

/// The color wheel.
#[derive(Debug, Clone)]
pub struct WheelState {
    palette: Palette,
    settings: WheelSettings,
    angle_between: f64,
    base_angle: f64,
    angles: Vec<f64>,
    selected: Vec<Color>,
    gesture: GestureTracker,
}

impl WheelState {
    /// Mount a wheel over `palette` with no rotation and no selections.
    ///
    /// # Errors
    ///
    /// Fails when the palette is empty, has duplicate ids, or the drag
    /// threshold is not a positive finite number.
    pub fn new(palette: Palette, settings: WheelSettings) -> Result<Self, WheelError> {
        let count = palette.len();
        let angle_between = geometry::angle_between(count).ok_or(WheelError::EmptyPalette)?;
        if let Some(id) = palette.duplicate_id() {
            return Err(WheelError::DuplicateId(id));
        }
        if !settings.drag_threshold.is_finite() || settings.drag_threshold <= 0.0 {
            return Err(WheelError::InvalidThreshold(settings.drag_threshold));
        }

        debug!(count, ?settings, "wheel mounted");
        Ok(Self {
            angle_between,
            base_angle: 0.0,
            angles: derive_angles(0.0, count),
            selected: Vec::new(),
            gesture: GestureTracker::new(settings.drag_threshold),
            palette,
            settings,
        })
    }

    /// The owned palette, including current lock flags.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Settings the wheel was created with.
    #[must_use]
    pub const fn settings(&self) -> &WheelSettings {
        &self.settings
    }

    /// Number of colors on the wheel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.palette.len()
    }

    /// Whether the wheel has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// Spacing between adjacent colors in degrees.
    #[must_use]
    pub const fn angle_between(&self) -> f64 {
        self.angle_between
    }

    /// Committed wheel rotation in degrees.
    #[must_use]
    pub const fn base_angle(&self) -> f64 {
        self.base_angle
    }

    /// Cached per-item angles for the committed rotation.
    #[must_use]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Selection history, oldest first.
    #[must_use]
    pub fn selected(&self) -> &[Color] {
        &self.selected
    }

    /// Whether the color with `id` has been selected.
    #[must_use]
    pub fn is_selected(&self, id: ColorId) -> bool {
        self.selected.iter().any(|c| c.id == id)
    }

    /// Pointer tracking state.
    #[must_use]
    pub const fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    fn set_base_angle(&mut self, angle: f64) {
        self.base_angle = angle;
        self.angles = derive_angles(angle, self.palette.len());
    }

    /// Select the color with `id`.
    ///
    /// On success the color is appended to the history, handed to `sink`,
    /// and the wheel turns so the color's angle becomes `INITIAL_ANGLE`.
    /// Locked, already selected and unknown colors leave everything as is.
    pub fn select_color(&mut self, id: ColorId, sink: &mut impl SelectionSink) -> Selection {
        let Some(index) = self.palette.index_of(id) else {
            warn!(id, "select_color: no such color in palette");
            return Selection::Unknown;
        };
        let color = &self.palette.colors()[index];

        if color.locked {
            debug!(id, "select_color: color is locked");
            return Selection::Locked;
        }
        if self.is_selected(id) {
            debug!(id, "select_color: color already selected");
            return Selection::AlreadySelected;
        }

        let color = color.clone();
        self.selected.push(color.clone());
        sink.on_select(&color);

        let color_angle = geometry::item_angle(index, self.base_angle, self.angle_between);
        self.set_base_angle(self.base_angle + (INITIAL_ANGLE - color_angle));
        info!(id, hex = %color.hex, base_angle = self.base_angle, "color selected");

        Selection::Selected(color)
    }

    /// Flip the lock of the color with `id`.
    ///
    /// Returns the new lock state, or `None` if the id is unknown. Rotation
    /// and selection history are not touched.
    pub fn toggle_lock(&mut self, id: ColorId) -> Option<bool> {
        match self.palette.toggle_lock(id) {
            Some(locked) => {
                info!(id, locked, "color lock toggled");
                Some(locked)
            }
            None => {
                warn!(id, "toggle_lock: no such color in palette");
                None
            }
        }
    }

    /// Pointer pressed at `x`.
    pub fn begin_pointer_gesture(&mut self, x: f64) {
        self.gesture.begin(x);
    }

    /// Pointer moved to `x`. Returns whether the gesture is a drag.
    pub fn update_pointer_gesture(&mut self, x: f64) -> bool {
        self.gesture.update(x)
    }

    /// Pointer released.
    ///
    /// A `Drag` outcome must not be treated as a click by the caller. With
    /// `DragRelease::Commit` the dragged delta becomes part of the base angle.
    pub fn end_pointer_gesture(&mut self) -> GestureOutcome {
        let outcome = self.gesture.end();
        if let GestureOutcome::Drag { delta } = outcome {
            match self.settings.drag_release {
                DragRelease::Commit => {
                    self.set_base_angle(self.base_angle + delta);
                    debug!(delta, base_angle = self.base_angle, "drag committed");
                }
                DragRelease::Preview => {
                    debug!(delta, "drag preview released");
                }
            }
        }
        outcome
    }

    /// Rotation currently on screen: the base angle plus any live drag.
    #[must_use]
    pub fn live_angle(&self) -> f64 {
        self.base_angle + self.gesture.drag_delta()
    }

    /// CSS transform for the wheel container.
    #[must_use]
    pub fn wheel_transform(&self) -> String {
        format!("rotate({}deg)", self.live_angle())
    }

    /// Placement of every color at `radius`, in wheel order, using the live
    /// angle so swatches follow an active drag.
    #[must_use]
    pub fn placements(&self, radius: f64) -> Vec<ItemPlacement> {
        let live = self.live_angle();
        self.palette
            .iter()
            .enumerate()
            .map(|(index, color)| ItemPlacement {
                id: color.id,
                index,
                hex: color.hex,
                locked: color.locked,
                selected: self.is_selected(color.id),
                placement: project_position(index, live, self.angle_between, radius),
            })
            .collect()
    }

    /// Rotate the committed angle by `delta` degrees.
    pub fn rotate_by(&mut self, delta: f64) {
        self.set_base_angle(self.base_angle + delta);
        debug!(delta, base_angle = self.base_angle, "wheel rotated");
    }

    /// Back to the mount state: no rotation, no history, no gesture.
    ///
    /// Locks belong to the palette and survive.
    pub fn reset(&mut self) {
        self.gesture.cancel();
        self.selected.clear();
        self.set_base_angle(0.0);
        info!("wheel reset");
    }

    /// Color currently closest to the top of the wheel.
    #[must_use]
    pub fn top_color(&self) -> Option<&Color> {
        let live = self.live_angle();
        self.palette
            .iter()
            .enumerate()
            .map(|(index, color)| {
                let angle = geometry::item_angle(index, live, self.angle_between);
                (geometry::angular_distance(angle, INITIAL_ANGLE), color)
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, color)| color)
    }
}
