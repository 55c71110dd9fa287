//! Component trait pattern for TUI components.
//!
//! Components own their state, handle keyboard and mouse input, and report
//! anything the parent must act on as an event.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::models::{Color, ColorId};
use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Handle mouse input. `area` is where the component was last rendered.
    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Why a selection request changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The color is locked
    Locked,
    /// The color was selected before
    AlreadySelected,
}

/// Events emitted by the color wheel component.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    /// User selected a color; the wheel has turned it to the top
    ColorSelected(Color),

    /// User tried to select a color that cannot be selected
    SelectionIgnored {
        /// Color the user picked
        id: ColorId,
        /// Why nothing happened
        reason: IgnoredReason,
    },

    /// A color was locked or unlocked
    LockToggled {
        /// Affected color
        id: ColorId,
        /// New lock state
        locked: bool,
    },

    /// The wheel turned without a selection (drag or arrow keys)
    Rotated {
        /// Committed base angle after the rotation
        base_angle: f64,
    },

    /// Rotation and selection history were cleared
    Reset,

    /// User asked to leave
    Quit,
}
