//! Move selection for the automated player.
//!
//! From a winning position the selector always returns a move onto a Wythoff
//! pair. Candidate shapes are tried in a fixed priority order:
//!
//! 1. [`MoveShape::Finishing`] - equal piles, or one pile already empty: take everything
//! 2. [`MoveShape::ReduceLarger`] - cut the larger pile down to the partner of the smaller
//! 3. [`MoveShape::ReduceSmaller`] - cut the smaller pile down to the partner of the larger
//! 4. [`MoveShape::Uniform`] - reduce both piles onto the pair whose difference is `hi - lo`
//!
//! Steps 2 and 4 together cover every winning position: if `lo = B_m` then its
//! partner `A_m` is below `hi`; if `lo = A_n` and `hi < B_n` then `d = hi - lo < n`
//! and `A_d < A_n = lo`.
//!
//! From a losing position no move keeps the opponent losing, and
//! [`MoveShape::Minimal`] takes a single unit (from both piles when possible).

use log::trace;

use crate::core::{
    position::{Move, Position},
    wythoff::{lower_wythoff, partner},
};

/// How a selected move was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum MoveShape {
    Finishing,
    ReduceLarger,
    ReduceSmaller,
    Uniform,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub mv: Move,
    pub shape: MoveShape,
}

/// Selects the automated player's move for position `(a, b)`.
///
/// # Panics
///
/// Panics if `(a, b)` is terminal: there is no move to select, and asking for
/// one is a caller bug rather than a game situation.
#[must_use]
pub fn select_move(a: u32, b: u32) -> Move {
    select(Position::new(a, b)).mv
}

/// Like [`select_move`], but also reports the shape of the chosen move.
///
/// # Panics
///
/// Panics if `position` is terminal, or if no move from a winning position
/// reaches a losing one (classifier and selector disagree).
#[must_use]
pub fn select(position: Position) -> Selection {
    assert!(
        !position.is_terminal(),
        "move requested for terminal position {position}"
    );

    if position.is_losing() {
        let mv = minimal_move(position);
        trace!("{position} is losing, minimal move {mv}");
        return Selection {
            mv,
            shape: MoveShape::Minimal,
        };
    }

    let selection = winning_move(position).unwrap_or_else(|| {
        panic!("invariant violation: no move from winning position {position} reaches a losing position")
    });
    debug_assert!(
        position
            .apply(selection.mv)
            .is_ok_and(|next| next.is_losing()),
        "{selection:?} from {position} does not reach a losing position"
    );
    trace!("{position}: {:?} move {}", selection.shape, selection.mv);
    selection
}

fn minimal_move(position: Position) -> Move {
    match (position.first(), position.second()) {
        (0, _) => Move::second(1),
        (_, 0) => Move::first(1),
        _ => Move::both(1),
    }
}

fn winning_move(position: Position) -> Option<Selection> {
    let (lo, hi) = position.sorted();
    let first_is_smaller = position.first() <= position.second();
    // Deltas are computed for (lo, hi) and mapped back onto the original slots.
    let selection = |shape, d_lo, d_hi| {
        let mv = if first_is_smaller {
            Move::new(d_lo, d_hi)
        } else {
            Move::new(d_hi, d_lo)
        };
        Some(Selection { mv, shape })
    };
    // A target that does not fit in `u32` is larger than any pile.
    let narrow = |x: u64| u32::try_from(x).ok();

    if lo == 0 || lo == hi {
        return selection(MoveShape::Finishing, lo, hi);
    }
    if let Some(target) = narrow(partner(u64::from(lo))).filter(|&t| t < hi) {
        return selection(MoveShape::ReduceLarger, 0, hi - target);
    }
    if let Some(target) = narrow(partner(u64::from(hi))).filter(|&t| t < lo) {
        return selection(MoveShape::ReduceSmaller, lo - target, 0);
    }
    if let Some(target) = narrow(lower_wythoff(u64::from(hi - lo))).filter(|&t| t < lo) {
        let amount = lo - target;
        return selection(MoveShape::Uniform, amount, amount);
    }
    None
}
