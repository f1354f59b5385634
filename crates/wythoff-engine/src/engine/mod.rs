//! Game session and starting-position generation.
//!
//! - [`GameSession`] - the human-versus-automated-player state machine
//! - [`PositionGenerator`] - seeded draws of non-losing starting positions
//! - [`PositionSeed`] / [`SeedRange`] - what the generator draws from
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`]; the human is to move on a winning position
//! 2. [`GameSession::apply_human_move`] validates and applies the human's move
//! 3. [`GameSession::apply_automated_move`] answers with the selector's move
//! 4. Repeat until the position is `(0, 0)`; the player who moved last wins
//! 5. [`GameSession::reset`] draws a new starting position, keeping the losing streak
//!
//! # Example
//!
//! ```
//! use wythoff_engine::{GameSession, Move, SeedRange};
//!
//! let mut session = GameSession::new(SeedRange::DEFAULT);
//!
//! let mv = session.hint().unwrap();
//! session.apply_human_move(mv).unwrap();
//!
//! if !session.is_terminal() {
//!     let reply: Move = session.apply_automated_move().unwrap();
//!     println!("AI played {reply}, position is now {}", session.position());
//! }
//! ```

pub use self::{game_session::*, position_generator::*};

mod game_session;
mod position_generator;
