use serde::{Deserialize, Serialize};

use crate::{MoveError, core::wythoff::{self, Outcome}};

/// The two piles of the game.
///
/// Slot order is fixed ("first pile", "second pile") because moves can target
/// either pile independently, but the game value is symmetric in the two piles.
/// `(0, 0)` is the only terminal position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[display("({first}, {second})")]
pub struct Position {
    first: u32,
    second: u32,
}

impl Position {
    pub const TERMINAL: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub const fn first(&self) -> u32 {
        self.first
    }

    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.first == 0 && self.second == 0
    }

    /// Returns `(min, max)` of the two piles.
    #[must_use]
    pub const fn sorted(&self) -> (u32, u32) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    /// Whether the player about to move loses under optimal play.
    #[must_use]
    pub fn is_losing(&self) -> bool {
        wythoff::is_losing_position(self.first, self.second)
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        wythoff::classify(*self)
    }

    /// Checks that `mv` is a legal move from this position.
    ///
    /// Checks are ordered so that the most specific reason is reported:
    /// a terminal position rejects everything, then the shape of the move,
    /// then whether the piles are large enough.
    pub fn check_move(&self, mv: Move) -> Result<(), MoveError> {
        let illegal = MoveError::IllegalMoveForPosition {
            position: *self,
            mv,
        };
        if self.is_terminal() {
            return Err(illegal);
        }
        if mv.is_empty() {
            return Err(MoveError::InvalidMoveMagnitude);
        }
        if mv.kind().is_none() {
            return Err(MoveError::UnevenReduction);
        }
        if mv.first > self.first || mv.second > self.second {
            return Err(illegal);
        }
        Ok(())
    }

    /// Returns the position reached by playing `mv`.
    pub fn apply(&self, mv: Move) -> Result<Self, MoveError> {
        self.check_move(mv)?;
        Ok(Self::new(self.first - mv.first, self.second - mv.second))
    }

    /// Enumerates every legal move: all single-pile reductions of the first
    /// pile, then of the second pile, then all uniform reductions.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        let firsts = (1..=self.first).map(Move::first);
        let seconds = (1..=self.second).map(Move::second);
        let boths = (1..=self.first.min(self.second)).map(Move::both);
        firsts.chain(seconds).chain(boths)
    }

    /// Number of legal moves, without enumerating them.
    #[must_use]
    pub fn legal_move_count(&self) -> u64 {
        u64::from(self.first) + u64::from(self.second) + u64::from(self.first.min(self.second))
    }

    /// The `index`-th move of [`legal_moves`](Self::legal_moves), computed directly.
    ///
    /// Returns `None` if `index >= self.legal_move_count()`.
    #[must_use]
    pub fn nth_legal_move(&self, index: u64) -> Option<Move> {
        // amounts start at 1
        let amount = |i: u64| u32::try_from(i + 1).ok();
        let firsts = u64::from(self.first);
        let seconds = u64::from(self.second);
        let boths = u64::from(self.first.min(self.second));

        if index < firsts {
            return amount(index).map(Move::first);
        }
        let index = index - firsts;
        if index < seconds {
            return amount(index).map(Move::second);
        }
        let index = index - seconds;
        if index < boths {
            return amount(index).map(Move::both);
        }
        None
    }
}

/// Which pile(s) a move reduces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum MoveKind {
    First,
    Second,
    Both,
}

/// Amounts `(da, db)` subtracted from the first and second pile.
///
/// A legal move is either single-pile (exactly one non-zero component) or
/// uniform (`da == db > 0`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[display("(-{first}, -{second})")]
pub struct Move {
    first: u32,
    second: u32,
}

impl Move {
    #[must_use]
    pub const fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub const fn first(amount: u32) -> Self {
        Self::new(amount, 0)
    }

    #[must_use]
    pub const fn second(amount: u32) -> Self {
        Self::new(0, amount)
    }

    #[must_use]
    pub const fn both(amount: u32) -> Self {
        Self::new(amount, amount)
    }

    #[must_use]
    pub const fn from_kind(kind: MoveKind, amount: u32) -> Self {
        match kind {
            MoveKind::First => Self::first(amount),
            MoveKind::Second => Self::second(amount),
            MoveKind::Both => Self::both(amount),
        }
    }

    /// Amount taken from the first pile.
    #[must_use]
    pub const fn first_delta(&self) -> u32 {
        self.first
    }

    /// Amount taken from the second pile.
    #[must_use]
    pub const fn second_delta(&self) -> u32 {
        self.second
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first == 0 && self.second == 0
    }

    /// Shape of the move, or `None` if it is empty or uneven.
    #[must_use]
    pub const fn kind(&self) -> Option<MoveKind> {
        match (self.first, self.second) {
            (0, 0) => None,
            (_, 0) => Some(MoveKind::First),
            (0, _) => Some(MoveKind::Second),
            (a, b) if a == b => Some(MoveKind::Both),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_uniform(&self) -> bool {
        matches!(self.kind(), Some(MoveKind::Both))
    }

    #[must_use]
    pub const fn is_single_pile(&self) -> bool {
        matches!(self.kind(), Some(MoveKind::First | MoveKind::Second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_is_order_independent() {
        assert_eq!(Position::new(7, 3).sorted(), (3, 7));
        assert_eq!(Position::new(3, 7).sorted(), (3, 7));
        assert_eq!(Position::new(4, 4).sorted(), (4, 4));
    }

    #[test]
    fn test_move_kind() {
        assert_eq!(Move::first(3).kind(), Some(MoveKind::First));
        assert_eq!(Move::second(1).kind(), Some(MoveKind::Second));
        assert_eq!(Move::both(2).kind(), Some(MoveKind::Both));
        assert_eq!(Move::new(0, 0).kind(), None);
        assert_eq!(Move::new(2, 3).kind(), None);
        assert!(Move::both(5).is_uniform());
        assert!(Move::second(5).is_single_pile());
        assert!(!Move::new(1, 2).is_single_pile());
    }

    #[test]
    fn test_apply_legal_moves() {
        let position = Position::new(12, 19);
        assert_eq!(position.apply(Move::first(12)), Ok(Position::new(0, 19)));
        assert_eq!(position.apply(Move::second(19)), Ok(Position::new(12, 0)));
        assert_eq!(position.apply(Move::both(12)), Ok(Position::new(0, 7)));
    }

    #[test]
    fn test_zero_move_is_invalid_magnitude() {
        let position = Position::new(3, 4);
        assert_eq!(
            position.apply(Move::both(0)),
            Err(MoveError::InvalidMoveMagnitude)
        );
    }

    #[test]
    fn test_uneven_move_is_rejected() {
        let position = Position::new(3, 4);
        assert_eq!(
            position.apply(Move::new(1, 2)),
            Err(MoveError::UnevenReduction)
        );
    }

    #[test]
    fn test_move_exceeding_pile_is_illegal() {
        let position = Position::new(3, 4);
        for mv in [Move::first(4), Move::second(5), Move::both(4)] {
            assert_eq!(
                position.apply(mv),
                Err(MoveError::IllegalMoveForPosition { position, mv })
            );
        }
    }

    #[test]
    fn test_terminal_position_rejects_every_move() {
        let position = Position::TERMINAL;
        assert!(position.is_terminal());
        assert_eq!(position.legal_moves().count(), 0);
        assert_eq!(
            position.apply(Move::both(0)),
            Err(MoveError::IllegalMoveForPosition {
                position,
                mv: Move::both(0)
            })
        );
    }

    #[test]
    fn test_legal_moves_are_all_legal_and_counted() {
        let position = Position::new(3, 5);
        let moves = position.legal_moves().collect::<Vec<_>>();
        assert_eq!(moves.len() as u64, position.legal_move_count());
        assert_eq!(moves.len(), 3 + 5 + 3);
        for mv in moves {
            assert!(position.check_move(mv).is_ok(), "{mv} from {position}");
        }
    }

    #[test]
    fn test_nth_legal_move_follows_enumeration() {
        let position = Position::new(3, 5);
        for (index, mv) in (0..).zip(position.legal_moves()) {
            assert_eq!(position.nth_legal_move(index), Some(mv), "index {index}");
        }
        assert_eq!(position.nth_legal_move(position.legal_move_count()), None);
        assert_eq!(Position::TERMINAL.nth_legal_move(0), None);
    }

    #[test]
    fn test_nth_legal_move_on_huge_piles() {
        let position = Position::new(u32::MAX, u32::MAX - 1);
        let count = position.legal_move_count();
        assert_eq!(position.nth_legal_move(0), Some(Move::first(1)));
        assert_eq!(
            position.nth_legal_move(u64::from(u32::MAX)),
            Some(Move::second(1))
        );
        assert_eq!(
            position.nth_legal_move(count - 1),
            Some(Move::both(u32::MAX - 1))
        );
        assert_eq!(position.nth_legal_move(count), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(12, 19).to_string(), "(12, 19)");
        assert_eq!(Move::both(2).to_string(), "(-2, -2)");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Position::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"first":1,"second":2}"#);
        let mv: Move = serde_json::from_str(r#"{"first":0,"second":3}"#).unwrap();
        assert_eq!(mv, Move::second(3));
    }
}
