//! Terminal user interface: the main loop, `App` state and event routing.
//!
//! The wheel component does the interaction work. `App` plays the role of
//! the application store: it keeps the currently selected color and the
//! status line, and reacts to the events the component emits.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod color_wheel;
pub mod component;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::models::{Color, Palette};
use crate::wheel::{DragRelease, WheelState};

// Re-export TUI components
pub use color_wheel::ColorWheel;
pub use component::{Component, IgnoredReason, WheelEvent};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state for the terminal front end.
#[derive(Debug)]
pub struct App {
    /// The wheel component
    pub wheel: ColorWheel,
    /// Colors for all widgets
    pub theme: Theme,
    /// Effective configuration
    pub config: Config,
    /// Last color handed to the selection sink
    pub current_color: Option<Color>,
    /// One-line feedback for the last action
    pub status_message: String,
    /// Overrides the default status color (warnings, confirmations)
    pub status_color_override: Option<TermColor>,
    /// Full terminal area from the last frame
    pub viewport: Rect,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl App {
    /// Build the app and mount the wheel over `palette`.
    pub fn new(config: Config, palette: Palette) -> Result<Self> {
        let wheel = WheelState::new(palette, config.wheel.settings())
            .context("Failed to create color wheel")?;
        let theme = Theme::from_mode(config.ui.theme_mode);

        Ok(Self {
            wheel: ColorWheel::new(wheel, config.wheel.pointer_scale),
            theme,
            config,
            current_color: None,
            status_message: "Click a color to select it".to_string(),
            status_color_override: None,
            viewport: Rect::default(),
            should_quit: false,
        })
    }

    /// Set a neutral status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_color_override = None;
    }

    /// Set a status message with a specific color.
    pub fn set_status_with_style(&mut self, message: impl Into<String>, color: TermColor) {
        self.status_message = message.into();
        self.status_color_override = Some(color);
    }

    /// Color of the status line.
    #[must_use]
    pub fn status_color(&self, theme: &Theme) -> TermColor {
        self.status_color_override.unwrap_or(theme.text)
    }

    /// Where the wheel component is drawn.
    #[must_use]
    pub fn wheel_area(&self) -> Rect {
        screen_areas(self.viewport)[1]
    }

    /// Route a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if let Some(event) = self.wheel.handle_key(key) {
            self.apply(event);
        }
    }

    /// Route a mouse event to the wheel.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let area = self.wheel_area();
        if let Some(event) = self.wheel.handle_mouse(mouse, area) {
            self.apply(event);
        }
    }

    /// React to a component event.
    pub fn apply(&mut self, event: WheelEvent) {
        match event {
            WheelEvent::ColorSelected(color) => {
                info!(id = color.id, hex = %color.hex, "selection received");
                self.set_status_with_style(
                    format!("Selected {} ({})", color.label(), color.hex),
                    self.theme.success,
                );
                self.current_color = Some(color);
            }
            WheelEvent::SelectionIgnored { id, reason } => {
                let why = match reason {
                    IgnoredReason::Locked => "is locked",
                    IgnoredReason::AlreadySelected => "was already selected",
                };
                self.set_status_with_style(format!("Color {id} {why}"), self.theme.warning);
            }
            WheelEvent::LockToggled { id, locked } => {
                let verb = if locked { "Locked" } else { "Unlocked" };
                self.set_status(format!("{verb} color {id}"));
            }
            WheelEvent::Rotated { base_angle } => {
                self.set_status(format!("Wheel at {base_angle:.1}°"));
            }
            WheelEvent::Reset => {
                self.current_color = None;
                self.set_status("Wheel reset");
            }
            WheelEvent::Quit => self.should_quit = true,
        }
    }
}

/// Split the screen into title bar, wheel and status bar.
fn screen_areas(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Wheel
            Constraint::Length(5), // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(app: &mut App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.viewport = f.area();
            render(f, app);
        })?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                // Resize and everything else re-render on the next loop
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let [title_area, wheel_area, status_area] = screen_areas(f.area());

    render_title_bar(f, title_area, app);
    app.wheel.render(f, wheel_area, theme);
    StatusBar::render(f, status_area, app, theme);
}

/// Render title bar with palette size and drag mode
fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let drag_mode = match app.config.wheel.drag_release {
        DragRelease::Commit => "drag rotates",
        DragRelease::Preview => "drag previews",
    };
    let title = format!(
        " Color Wheel | {} colors | {}",
        app.wheel.wheel().len(),
        drag_mode
    );

    let title_widget = Paragraph::new(title)
        .style(Style::default().fg(app.theme.primary).bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(app.theme.background)),
        );

    f.render_widget(title_widget, area);
}
