use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Runtime;

/// Trait for TUI applications run by [`Runtime::run`].
pub trait App {
    /// Called once before the event loop starts. Use this to configure the tick interval.
    fn init(&mut self, runtime: &mut Runtime);

    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, ...).
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event);

    /// Draws the screen. Only called after a tick or a terminal event.
    fn draw(&self, frame: &mut Frame);

    /// Advances time-driven state (called on each tick).
    fn update(&mut self, runtime: &mut Runtime);
}
