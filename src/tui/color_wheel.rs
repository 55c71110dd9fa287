//! Color wheel widget: draws the palette around a circle and turns mouse
//! and keyboard input into wheel operations.
//!
//! Mouse:
//! - Left click: select a color (on a locked color, clicks the lock and unlocks it)
//! - Right click: toggle the lock of a color
//! - Left drag: rotate the wheel horizontally
//!
//! Keys: ←/→ rotate one slot, Enter/Space select the top color, `l` lock the
//! top color, `r` reset, `q`/Esc quit.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use super::component::{Component, IgnoredReason, WheelEvent};
use super::Theme;
use crate::models::{Color, ColorId};
use crate::wheel::{GestureOutcome, ItemPlacement, Selection, WheelState};

/// Swatch width in terminal columns.
const SWATCH_WIDTH: u16 = 6;
/// Swatch height in terminal rows.
const SWATCH_HEIGHT: u16 = 3;
/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// One drawn swatch and the cells it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    /// Screen cells covered by the swatch
    pub rect: Rect,
    /// Wheel data for the swatch
    pub item: ItemPlacement,
}

/// Color wheel component.
#[derive(Debug, Clone)]
pub struct ColorWheel {
    wheel: WheelState,
    pointer_scale: f64,
}

impl ColorWheel {
    /// Wrap a wheel. `pointer_scale` is pixels per terminal column.
    #[must_use]
    pub const fn new(wheel: WheelState, pointer_scale: f64) -> Self {
        Self {
            wheel,
            pointer_scale,
        }
    }

    /// The underlying wheel state.
    #[must_use]
    pub const fn wheel(&self) -> &WheelState {
        &self.wheel
    }

    fn block() -> Block<'static> {
        Block::default().title(" Color Wheel ").borders(Borders::ALL)
    }

    /// Radius in rows that fits swatches inside `inner`, if any.
    fn fit_radius(inner: Rect) -> Option<f64> {
        let vertical = (f64::from(inner.height) - f64::from(SWATCH_HEIGHT)) / 2.0;
        let horizontal =
            (f64::from(inner.width) - f64::from(SWATCH_WIDTH)) / (2.0 * CELL_ASPECT);
        let radius = vertical.min(horizontal);
        (radius >= 1.0).then_some(radius)
    }

    fn center(inner: Rect) -> (f64, f64) {
        (
            f64::from(inner.x) + f64::from(inner.width) / 2.0,
            f64::from(inner.y) + f64::from(inner.height) / 2.0,
        )
    }

    /// Place a span of `size` cells around `pos`, kept within `[min, min + extent)`.
    fn cell_origin(pos: f64, size: u16, min: u16, extent: u16) -> u16 {
        let start = (pos - f64::from(size) / 2.0).round();
        let max_start = f64::from(min) + f64::from(extent.saturating_sub(size));
        start.clamp(f64::from(min), max_start) as u16
    }

    /// Where every swatch is drawn when the component occupies `area`.
    ///
    /// Empty when the area is too small to hold a wheel.
    #[must_use]
    pub fn swatches(&self, area: Rect) -> Vec<Swatch> {
        let inner = Self::block().inner(area);
        let Some(radius) = Self::fit_radius(inner) else {
            return Vec::new();
        };
        let (cx, cy) = Self::center(inner);

        self.wheel
            .placements(radius)
            .into_iter()
            .map(|item| {
                let x = Self::cell_origin(
                    cx + item.placement.x_offset * CELL_ASPECT,
                    SWATCH_WIDTH,
                    inner.x,
                    inner.width,
                );
                let y = Self::cell_origin(
                    cy + item.placement.y_offset,
                    SWATCH_HEIGHT,
                    inner.y,
                    inner.height,
                );
                Swatch {
                    rect: Rect::new(
                        x,
                        y,
                        SWATCH_WIDTH.min(inner.width),
                        SWATCH_HEIGHT.min(inner.height),
                    ),
                    item,
                }
            })
            .collect()
    }

    /// Color under the cell at `column`, `row`, if any.
    ///
    /// Swatches drawn later sit on top, so they win.
    #[must_use]
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<ColorId> {
        let position = Position::new(column, row);
        self.swatches(area)
            .iter()
            .rev()
            .find(|swatch| swatch.rect.contains(position))
            .map(|swatch| swatch.item.id)
    }

    fn pointer_x(&self, column: u16) -> f64 {
        f64::from(column) * self.pointer_scale
    }

    /// Select `id`, bridging the wheel's sink to a component event.
    fn select(&mut self, id: ColorId) -> Option<WheelEvent> {
        let mut emitted: Option<Color> = None;
        let result = self
            .wheel
            .select_color(id, &mut |color: &Color| emitted = Some(color.clone()));

        match result {
            Selection::Selected(_) => emitted.map(WheelEvent::ColorSelected),
            Selection::Locked => Some(WheelEvent::SelectionIgnored {
                id,
                reason: IgnoredReason::Locked,
            }),
            Selection::AlreadySelected => Some(WheelEvent::SelectionIgnored {
                id,
                reason: IgnoredReason::AlreadySelected,
            }),
            Selection::Unknown => None,
        }
    }

    fn toggle_lock(&mut self, id: ColorId) -> Option<WheelEvent> {
        self.wheel
            .toggle_lock(id)
            .map(|locked| WheelEvent::LockToggled { id, locked })
    }

    /// A click landed on `id`. Locked colors only show their lock, and
    /// clicking it unlocks the color.
    fn click(&mut self, id: ColorId) -> Option<WheelEvent> {
        let locked = self.wheel.palette().get(id).is_some_and(|c| c.locked);
        if locked {
            self.toggle_lock(id)
        } else {
            self.select(id)
        }
    }

    fn rotated(&self) -> WheelEvent {
        WheelEvent::Rotated {
            base_angle: self.wheel.base_angle(),
        }
    }

    fn render_swatch(f: &mut Frame, swatch: &Swatch) {
        let item = &swatch.item;
        let fill = if item.locked {
            item.hex.dim(50)
        } else {
            item.hex
        };
        let ink = if fill.is_light() {
            TermColor::Black
        } else {
            TermColor::White
        };

        let marker = if item.locked {
            "🔒"
        } else if item.selected {
            "✓"
        } else {
            ""
        };

        let style = Style::default().fg(ink).bg(fill.to_ratatui_color());
        let lines = vec![
            Line::from(marker),
            Line::from(item.id.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
        ];
        let swatch_widget = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(swatch_widget, swatch.rect);
    }
}

impl Component for ColorWheel {
    type Event = WheelEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Event> {
        let step = self.wheel.angle_between();
        match key.code {
            KeyCode::Left => {
                self.wheel.rotate_by(-step);
                Some(self.rotated())
            }
            KeyCode::Right => {
                self.wheel.rotate_by(step);
                Some(self.rotated())
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = self.wheel.top_color()?.id;
                self.select(id)
            }
            KeyCode::Char('l') => {
                let id = self.wheel.top_color()?.id;
                self.toggle_lock(id)
            }
            KeyCode::Char('r') => {
                self.wheel.reset();
                Some(WheelEvent::Reset)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(WheelEvent::Quit),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Option<Self::Event> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let x = self.pointer_x(mouse.column);
                self.wheel.begin_pointer_gesture(x);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let x = self.pointer_x(mouse.column);
                self.wheel.update_pointer_gesture(x);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => match self.wheel.end_pointer_gesture() {
                GestureOutcome::Click => {
                    let id = self.hit_test(area, mouse.column, mouse.row)?;
                    debug!(id, column = mouse.column, row = mouse.row, "swatch clicked");
                    self.click(id)
                }
                GestureOutcome::Drag { .. } => Some(self.rotated()),
                GestureOutcome::Ignored => None,
            },
            MouseEventKind::Down(MouseButton::Right) => {
                let id = self.hit_test(area, mouse.column, mouse.row)?;
                self.toggle_lock(id)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Self::block()
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(radius) = Self::fit_radius(inner) else {
            let message = Paragraph::new("Terminal too small for the wheel")
                .style(Style::default().fg(theme.warning));
            f.render_widget(message, inner);
            return;
        };

        let (cx, cy) = Self::center(inner);

        // Top-of-wheel marker, just above the top swatch
        let marker_y = cy - radius - f64::from(SWATCH_HEIGHT) / 2.0 - 1.0;
        if marker_y >= f64::from(inner.y) {
            let x = Self::cell_origin(cx, 1, inner.x, inner.width);
            f.render_widget(
                Paragraph::new("▼").style(Style::default().fg(theme.accent)),
                Rect::new(x, marker_y.round() as u16, 1, 1),
            );
        }

        // Live rotation in the middle of the wheel
        let label = format!("{:.0}°", self.wheel.live_angle());
        let label_width = (label.chars().count() as u16).min(inner.width);
        let label_x = Self::cell_origin(cx, label_width, inner.x, inner.width);
        let label_y = Self::cell_origin(cy, 1, inner.y, inner.height);
        let label_style = if self.wheel.is_dragging() {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };
        f.render_widget(
            Paragraph::new(label).style(label_style),
            Rect::new(label_x, label_y, label_width, 1),
        );

        for swatch in self.swatches(area) {
            Self::render_swatch(f, &swatch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Palette, RgbColor};
    use crate::wheel::{DragRelease, WheelSettings};
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::{backend::TestBackend, Terminal};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 30,
    };

    fn component(release: DragRelease) -> ColorWheel {
        let palette = Palette::new(vec![
            Color::new(1, RgbColor::new(255, 0, 0)),
            Color::new(2, RgbColor::new(0, 255, 0)),
            Color::new(3, RgbColor::new(0, 0, 255)),
            Color::new(4, RgbColor::new(255, 255, 0)),
        ]);
        let settings = WheelSettings {
            drag_release: release,
            ..WheelSettings::default()
        };
        ColorWheel::new(WheelState::new(palette, settings).unwrap(), 8.0)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn center_of(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    fn swatch_center(wheel: &ColorWheel, id: ColorId) -> (u16, u16) {
        let swatch = wheel
            .swatches(AREA)
            .into_iter()
            .find(|s| s.item.id == id)
            .expect("swatch should be drawn");
        center_of(swatch.rect)
    }

    fn click(wheel: &mut ColorWheel, column: u16, row: u16) -> Option<WheelEvent> {
        wheel.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row), AREA);
        wheel.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), column, row), AREA)
    }

    #[test]
    fn test_swatches_sit_on_circle() {
        let wheel = component(DragRelease::Commit);
        let swatches = wheel.swatches(AREA);
        assert_eq!(swatches.len(), 4);

        // Unrotated: index 0 points right, index 3 points up.
        let right = center_of(swatches[0].rect);
        let up = center_of(swatches[3].rect);
        assert!(right.0 > 60, "right swatch at {right:?}");
        assert!(up.1 < 8, "top swatch at {up:?}");
        for swatch in &swatches {
            assert!(AREA.contains(Position::new(swatch.rect.x, swatch.rect.y)));
            assert!(swatch.rect.right() <= AREA.right());
            assert!(swatch.rect.bottom() <= AREA.bottom());
        }
    }

    #[test]
    fn test_tiny_area_has_no_swatches() {
        let wheel = component(DragRelease::Commit);
        assert!(wheel.swatches(Rect::new(0, 0, 8, 4)).is_empty());
    }

    #[test]
    fn test_click_selects_and_rotates_to_top() {
        let mut wheel = component(DragRelease::Commit);
        let (column, row) = swatch_center(&wheel, 1);
        let event = click(&mut wheel, column, row);

        assert!(matches!(event, Some(WheelEvent::ColorSelected(ref c)) if c.id == 1));
        assert_eq!(wheel.wheel().top_color().map(|c| c.id), Some(1));
        // The wheel turned a quarter: green now sits where red was clicked.
        assert_eq!(wheel.hit_test(AREA, column, row), Some(2));
    }

    #[test]
    fn test_click_on_empty_space_does_nothing() {
        let mut wheel = component(DragRelease::Commit);
        assert_eq!(click(&mut wheel, 40, 15), None);
        assert!(wheel.wheel().selected().is_empty());
    }

    #[test]
    fn test_drag_rotates_without_selecting() {
        let mut wheel = component(DragRelease::Commit);
        let (column, row) = swatch_center(&wheel, 1);
        wheel.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row), AREA);
        wheel.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), column - 5, row), AREA);
        assert!(wheel.wheel().is_dragging());
        let event = wheel.handle_mouse(
            mouse(MouseEventKind::Up(MouseButton::Left), column - 5, row),
            AREA,
        );

        assert_eq!(event, Some(WheelEvent::Rotated { base_angle: -40.0 }));
        assert!(wheel.wheel().selected().is_empty());
    }

    #[test]
    fn test_drag_preview_snaps_back() {
        let mut wheel = component(DragRelease::Preview);
        wheel.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), AREA);
        wheel.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 5), AREA);
        assert!((wheel.wheel().live_angle() - 80.0).abs() < f64::EPSILON);
        wheel.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 5), AREA);
        assert!(wheel.wheel().live_angle().abs() < f64::EPSILON);
    }

    #[test]
    fn test_right_click_locks_and_left_click_unlocks() {
        let mut wheel = component(DragRelease::Commit);
        let (column, row) = swatch_center(&wheel, 2);

        let event = wheel.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Right), column, row),
            AREA,
        );
        assert_eq!(event, Some(WheelEvent::LockToggled { id: 2, locked: true }));

        // Clicking a locked color hits its lock, never selects it.
        let event = click(&mut wheel, column, row);
        assert_eq!(event, Some(WheelEvent::LockToggled { id: 2, locked: false }));
        assert!(wheel.wheel().selected().is_empty());
        assert!(wheel.wheel().base_angle().abs() < f64::EPSILON);
    }

    #[test]
    fn test_keys_rotate_and_select_top() {
        let mut wheel = component(DragRelease::Commit);
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            wheel.handle_key(key(KeyCode::Right)),
            Some(WheelEvent::Rotated { base_angle: 90.0 })
        );
        // Rotating by one slot moves index 2 (180 + 90 = 270) to the top.
        let event = wheel.handle_key(key(KeyCode::Enter));
        assert!(matches!(event, Some(WheelEvent::ColorSelected(ref c)) if c.id == 3));

        let event = wheel.handle_key(key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(WheelEvent::SelectionIgnored {
                id: 3,
                reason: IgnoredReason::AlreadySelected
            })
        );

        assert_eq!(wheel.handle_key(key(KeyCode::Char('r'))), Some(WheelEvent::Reset));
        assert_eq!(wheel.handle_key(key(KeyCode::Char('q'))), Some(WheelEvent::Quit));
    }

    #[test]
    fn test_render_draws_lock_marker() {
        let mut wheel = component(DragRelease::Commit);
        wheel.toggle_lock(4);

        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
        terminal
            .draw(|f| wheel.render(f, f.area(), &Theme::dark()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Color Wheel"));
        assert!(text.contains("🔒"));
        assert!(text.contains("0°"));
    }
}
