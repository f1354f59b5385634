pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Rejection reason for a move submitted to a [`GameSession`] or applied to a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("reduction must be a natural number greater than zero")]
    InvalidMoveMagnitude,
    #[display("both piles must be reduced by the same amount")]
    UnevenReduction,
    #[display("move {mv} is not legal from position {position}")]
    IllegalMoveForPosition { position: Position, mv: Move },
    #[display("it is not the {actor}'s turn")]
    OutOfTurn { actor: Actor },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("session can only be reset after the game is over")]
pub struct GameInProgressError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedRangeError {
    #[display("range is empty: minimum {min} is greater than maximum {max}")]
    Empty { min: u32, max: u32 },
    #[display("range 0..=0 only contains the terminal position")]
    TerminalOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed {input:?}: expected 32 hex characters")]
pub struct ParseSeedError {
    #[error(not(source))]
    input: String,
}

impl ParseSeedError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
