//! Receivers for selected colors.

use std::sync::mpsc::Sender;

use tracing::warn;

use crate::models::Color;

/// Receives each color the user selects on the wheel.
///
/// Called exactly once per successful selection, after the color has been
/// recorded and before the wheel rotates.
pub trait SelectionSink {
    /// Handle a newly selected color.
    fn on_select(&mut self, color: &Color);
}

impl<F> SelectionSink for F
where
    F: FnMut(&Color),
{
    fn on_select(&mut self, color: &Color) {
        self(color);
    }
}

impl SelectionSink for Vec<Color> {
    fn on_select(&mut self, color: &Color) {
        self.push(color.clone());
    }
}

impl SelectionSink for Sender<Color> {
    fn on_select(&mut self, color: &Color) {
        if self.send(color.clone()).is_err() {
            warn!(id = color.id, "selection receiver dropped; color not delivered");
        }
    }
}

/// Sink that discards selections.
impl SelectionSink for () {
    fn on_select(&mut self, _color: &Color) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;
    use std::sync::mpsc;

    fn red() -> Color {
        Color::new(1, RgbColor::new(255, 0, 0))
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        let mut sink = |c: &Color| seen.push(c.id);
        sink.on_select(&red());
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_channel_sink() {
        let (mut tx, rx) = mpsc::channel();
        tx.on_select(&red());
        assert_eq!(rx.try_recv().unwrap().id, 1);

        drop(rx);
        // Sending to a closed channel is logged, not a panic.
        tx.on_select(&red());
    }
}
