use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// Time-driven update (based on `tick_interval`).
    Tick,
    /// Something changed since the last draw.
    Render,
    /// Key input, resize and other terminal events.
    Crossterm(CrosstermEvent),
}
