use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wythoff_engine::{Actor, Position, PositionSeed, SeedRange, TurnRecord};

/// A finished (or abandoned) game, as written by `play --save-recording`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedGame {
    /// Timestamp when the game was captured (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Seed of the session's position generator
    pub seed: PositionSeed,
    /// Range the starting position was drawn from
    pub range: SeedRange,
    pub initial: Position,
    /// `None` if the game was quit before reaching `(0, 0)`
    pub winner: Option<Actor>,
    pub history: Vec<TurnRecord>,
}
