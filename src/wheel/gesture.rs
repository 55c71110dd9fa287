//! Click versus drag classification for pointer gestures.
//!
//! A gesture runs from pointer-down to pointer-up. It stays a click until
//! the pointer moves more than the drag threshold away from where it went
//! down; from then on it is a drag until release, no matter where the
//! pointer goes.

use tracing::debug;

/// Default drag threshold in pixels.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// Transient pointer tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// True only between a threshold crossing and release
    pub is_dragging: bool,
    /// Pointer x when the gesture began
    pub start_x: f64,
    /// Latest pointer x seen while dragging
    pub current_x: f64,
}

impl DragState {
    /// Horizontal distance covered by the drag so far.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.current_x - self.start_x
    }
}

/// How a finished gesture was classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// The pointer never left the threshold; treat as a click
    Click,
    /// The pointer crossed the threshold; `delta` is `current_x - start_x`
    Drag {
        /// Net horizontal movement in pixels
        delta: f64,
    },
    /// Release without a matching pointer-down
    Ignored,
}

/// Tracks a single pointer gesture at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    threshold: f64,
    state: DragState,
    active: bool,
}

impl GestureTracker {
    /// Creates a tracker with the given threshold in pixels.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: DragState::default(),
            active: false,
        }
    }

    /// Drag threshold in pixels.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Current drag state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a pointer is currently down.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the current gesture has become a drag.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Live drag delta, zero unless dragging.
    #[must_use]
    pub fn drag_delta(&self) -> f64 {
        if self.state.is_dragging {
            self.state.delta()
        } else {
            0.0
        }
    }

    /// Pointer went down at `x`.
    ///
    /// A new press always starts a fresh gesture, even if the previous
    /// release was never seen.
    pub fn begin(&mut self, x: f64) {
        self.state = DragState {
            is_dragging: false,
            start_x: x,
            current_x: x,
        };
        self.active = true;
        debug!(x, "gesture started");
    }

    /// Pointer moved to `x`. Returns whether the gesture is now a drag.
    pub fn update(&mut self, x: f64) -> bool {
        if !self.active {
            return false;
        }

        if self.state.is_dragging {
            self.state.current_x = x;
        } else if (self.state.start_x - x).abs() > self.threshold {
            self.state.is_dragging = true;
            self.state.current_x = x;
            debug!(start_x = self.state.start_x, x, "drag threshold crossed");
        }

        self.state.is_dragging
    }

    /// Pointer released. Classifies and clears the gesture.
    pub fn end(&mut self) -> GestureOutcome {
        if !self.active {
            return GestureOutcome::Ignored;
        }

        let outcome = if self.state.is_dragging {
            GestureOutcome::Drag {
                delta: self.state.delta(),
            }
        } else {
            GestureOutcome::Click
        };

        self.active = false;
        self.state.is_dragging = false;
        debug!(?outcome, "gesture ended");
        outcome
    }

    /// Drop the current gesture without classifying it.
    pub fn cancel(&mut self) {
        self.active = false;
        self.state = DragState::default();
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_moves_stay_click() {
        let mut tracker = GestureTracker::default();
        tracker.begin(100.0);
        for x in [101.0, 97.0, 104.0, 95.0, 105.0] {
            assert!(!tracker.update(x), "moved to {x}");
        }
        assert_eq!(tracker.end(), GestureOutcome::Click);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut tracker = GestureTracker::new(5.0);
        tracker.begin(0.0);
        assert!(!tracker.update(5.0));
        assert!(!tracker.update(-5.0));
        assert!(tracker.update(5.5));
    }

    #[test]
    fn test_drag_latches_until_release() {
        let mut tracker = GestureTracker::default();
        tracker.begin(100.0);
        assert!(tracker.update(110.0));
        // Coming back inside the threshold does not turn it back into a click.
        assert!(tracker.update(101.0));
        assert!(tracker.is_dragging());
        assert!((tracker.drag_delta() - 1.0).abs() < f64::EPSILON);
        assert_eq!(tracker.end(), GestureOutcome::Drag { delta: 1.0 });
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_crossing_records_current_x() {
        let mut tracker = GestureTracker::default();
        tracker.begin(100.0);
        tracker.update(103.0);
        assert!((tracker.state().current_x - 100.0).abs() < f64::EPSILON);
        tracker.update(140.0);
        assert!((tracker.state().current_x - 140.0).abs() < f64::EPSILON);
        assert!((tracker.drag_delta() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_events_without_press_are_ignored() {
        let mut tracker = GestureTracker::default();
        assert!(!tracker.update(500.0));
        assert_eq!(tracker.end(), GestureOutcome::Ignored);

        tracker.begin(0.0);
        tracker.end();
        assert!(!tracker.update(50.0));
        assert_eq!(tracker.end(), GestureOutcome::Ignored);
    }

    #[test]
    fn test_cancel_clears_drag() {
        let mut tracker = GestureTracker::default();
        tracker.begin(0.0);
        tracker.update(20.0);
        tracker.cancel();
        assert!(!tracker.is_active());
        assert!(tracker.drag_delta().abs() < f64::EPSILON);
    }
}
