//! Status bar widget for the current selection, history and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, Theme};

/// Key and mouse help shown on the last status line.
const HELP_TEXT: &str =
    "Click: select | Right-click: lock | Drag: rotate | ←/→: turn | Enter: pick top | l: lock top | r: reset | q: quit";

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let wheel = app.wheel.wheel();

        let current = match &app.current_color {
            Some(color) => Line::from(vec![
                Span::styled("Selected: ", Style::default().fg(theme.primary)),
                Span::styled("██", Style::default().fg(color.hex.to_ratatui_color())),
                Span::styled(
                    format!(" {} {}", color.label(), color.hex),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from(vec![
                Span::styled("Selected: ", Style::default().fg(theme.primary)),
                Span::styled("nothing yet", Style::default().fg(theme.text_muted)),
            ]),
        };

        let mut history = vec![Span::styled("History: ", Style::default().fg(theme.primary))];
        history.extend(
            wheel
                .selected()
                .iter()
                .map(|c| Span::styled("■ ", Style::default().fg(c.hex.to_ratatui_color()))),
        );
        history.push(Span::styled(
            format!(
                " angle {:.1}° | locked {}",
                wheel.live_angle(),
                wheel.palette().iter().filter(|c| c.locked).count()
            ),
            Style::default().fg(theme.text_muted),
        ));

        let message = Line::from(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(app.status_color(theme)),
        ));

        let help = Line::from(Span::styled(HELP_TEXT, Style::default().fg(theme.text_muted)));

        let status = Paragraph::new(vec![current, Line::from(history), message, help])
            .style(Style::default().bg(theme.background))
            .block(Block::default().borders(Borders::TOP));

        f.render_widget(status, area);
    }
}
