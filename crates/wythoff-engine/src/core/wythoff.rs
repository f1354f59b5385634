//! Wythoff pairs and losing-position classification.
//!
//! The losing positions (P-positions) of Wythoff's game are exactly the pairs
//!
//! ```text
//! (A_n, B_n) = (floor(n * phi), floor(n * phi) + n),   n = 0, 1, 2, ...
//! ```
//!
//! and their mirror images, where `phi = (1 + sqrt 5) / 2`. The sequences
//! `A` (lower Wythoff sequence) and `B` (upper Wythoff sequence) are
//! complementary Beatty sequences: every positive integer appears in exactly
//! one of them, exactly once.
//!
//! # Exact arithmetic
//!
//! `floor(n * phi)` is never evaluated in floating point. Since
//! `n * phi = (n + sqrt(5 n^2)) / 2` and `sqrt(5 n^2)` is irrational for
//! `n > 0`,
//!
//! ```text
//! floor(n * phi) = (n + isqrt(5 n^2)) / 2
//! ```
//!
//! holds exactly with integer division, so classification has no rounding
//! boundary at all. Index recovery (`x -> n` with `A_n = x` or `B_n = x`) uses
//! the inverse relation `n ~ x / phi` and is always verified by reconstructing
//! the sequence value.
//!
//! # Example
//!
//! ```
//! use wythoff_engine::{is_losing_position, wythoff_pairs};
//!
//! let pairs = wythoff_pairs().take(4).collect::<Vec<_>>();
//! assert_eq!(pairs, [(0, 0), (1, 2), (3, 5), (4, 7)]);
//!
//! assert!(is_losing_position(5, 3));
//! assert!(!is_losing_position(12, 19));
//! ```

use crate::core::position::Position;

/// Largest index for which [`lower_wythoff`] is exact (`5 n^2` must fit in `u128`).
pub const MAX_INDEX: u64 = 1 << 62;

/// Win/loss classification of a position for the player about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Outcome {
    /// P-position: the player to move loses against optimal play.
    Losing,
    /// N-position: the player to move can force a win.
    Winning,
}

/// Membership of a pile size in the Wythoff sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileRank {
    /// `x = A_n`
    Lower(u64),
    /// `x = B_n` (never reported for `x = 0`, which is `A_0`)
    Upper(u64),
}

/// `A_n = floor(n * phi)`.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn lower_wythoff(n: u64) -> u64 {
    debug_assert!(n <= MAX_INDEX);
    let n = u128::from(n);
    ((n + (5 * n * n).isqrt()) / 2) as u64
}

/// `B_n = A_n + n = floor(n * phi^2)`.
#[must_use]
pub fn upper_wythoff(n: u64) -> u64 {
    lower_wythoff(n) + n
}

/// The `n`-th Wythoff pair `(A_n, B_n)`.
#[must_use]
pub fn wythoff_pair(n: u64) -> (u64, u64) {
    let a = lower_wythoff(n);
    (a, a + n)
}

/// All Wythoff pairs in increasing order, starting with `(0, 0)`.
pub fn wythoff_pairs() -> impl Iterator<Item = (u64, u64)> {
    (0..=MAX_INDEX).map(wythoff_pair)
}

/// `floor(x / phi)`, exact.
#[expect(clippy::cast_possible_truncation)]
fn floor_div_phi(x: u64) -> u64 {
    let x = u128::from(x);
    ((5 * x * x).isqrt() - x) as u64 / 2
}

/// Finds the sequence (and index) containing `x`.
///
/// The candidate index is derived from `x / phi` and accepted only after the
/// sequence value at that index reconstructs `x`. `x` must not exceed
/// [`MAX_INDEX`], which covers every `u32` pile.
///
/// # Panics
///
/// Panics if neither sequence contains `x`, which would contradict the
/// complementarity of the two Beatty sequences.
#[must_use]
pub fn pile_rank(x: u64) -> PileRank {
    debug_assert!(x <= MAX_INDEX);
    if x == 0 {
        return PileRank::Lower(0);
    }
    // A_n = x  =>  x / phi < n < (x + 1) / phi, so n = floor(x / phi) + 1.
    // B_n = x  =>  n = x - floor(x / phi).
    let q = floor_div_phi(x);
    let lower = (q..=q + 2).find(|&n| lower_wythoff(n) == x);
    if let Some(n) = lower {
        return PileRank::Lower(n);
    }
    let m = x - q;
    let upper = (m.saturating_sub(1)..=m + 1).find(|&n| n > 0 && upper_wythoff(n) == x);
    match upper {
        Some(n) => PileRank::Upper(n),
        None => panic!("{x} belongs to neither Wythoff sequence"),
    }
}

/// The unique `y` such that `(x, y)` is a losing position.
#[must_use]
pub fn partner(x: u64) -> u64 {
    match pile_rank(x) {
        PileRank::Lower(n) => upper_wythoff(n),
        PileRank::Upper(n) => lower_wythoff(n),
    }
}

/// Whether `(a, b)` is a losing position (P-position) for the player to move.
///
/// With `lo = min(a, b)` and `hi = max(a, b)`, the position is the Wythoff
/// pair of index `d = hi - lo` iff `A_d = lo`, since `B_n - A_n = n`.
#[must_use]
pub fn is_losing_position(a: u32, b: u32) -> bool {
    let (lo, hi) = Position::new(a, b).sorted();
    lower_wythoff(u64::from(hi - lo)) == u64::from(lo)
}

#[must_use]
pub fn classify(position: Position) -> Outcome {
    if position.is_losing() {
        Outcome::Losing
    } else {
        Outcome::Winning
    }
}
