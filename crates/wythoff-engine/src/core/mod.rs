//! Game rules and optimal play.
//!
//! - [`Position`] / [`Move`] - the two piles and the reductions applied to them
//! - [`wythoff`] - Wythoff pairs and losing-position classification
//! - [`strategy`] - move selection for the automated player

pub use self::{position::*, strategy::*, wythoff::*};

pub mod position;
pub mod strategy;
pub mod wythoff;
