use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    GameInProgressError, MoveError,
    core::{
        position::{Move, Position},
        strategy,
    },
};

use super::position_generator::{PositionGenerator, PositionSeed, SeedRange};

/// Who made a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Actor {
    #[display("Player")]
    Human,
    #[display("AI")]
    Automated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    AwaitingHumanMove,
    AwaitingAutomatedMove,
    /// The position is `(0, 0)`; `winner` made the last move.
    Terminal { winner: Actor },
}

/// One completed move, as shown in the turn log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (1-indexed)
    pub turn: u32,
    pub actor: Actor,
    #[serde(rename = "move")]
    pub mv: Move,
    /// Position after the move
    pub position: Position,
}

/// A game between a human and the automated player.
///
/// The human always moves first, from a position drawn by a
/// [`PositionGenerator`] (never a losing one). The session alternates
/// between [`SessionState::AwaitingHumanMove`] and
/// [`SessionState::AwaitingAutomatedMove`] until the position reaches
/// `(0, 0)`; whoever made that move wins.
///
/// The losing streak counts consecutive wins of the automated player and
/// survives [`reset`](Self::reset).
///
/// ```
/// use wythoff_engine::{GameSession, Move, Position};
///
/// let mut session = GameSession::with_position(Position::new(2, 3), 0).unwrap();
/// session.apply_human_move(Move::both(1)).unwrap(); // (1, 2) is losing
/// session.apply_automated_move().unwrap();
/// assert!(!session.is_terminal());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    generator: PositionGenerator,
    initial: Position,
    position: Position,
    turn: u32,
    history: Vec<TurnRecord>,
    state: SessionState,
    losing_streak: u64,
}

impl GameSession {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new(range: SeedRange) -> Self {
        Self::from_generator(PositionGenerator::new(range))
    }

    /// Like [`Self::new`], but with a specific seed for reproducible starting positions.
    #[must_use]
    pub fn with_seed(range: SeedRange, seed: PositionSeed) -> Self {
        Self::from_generator(PositionGenerator::with_seed(range, seed))
    }

    /// Creates a session starting at a fixed position.
    ///
    /// Later [`reset`](Self::reset)s draw from [`SeedRange::DEFAULT`].
    pub fn with_position(position: Position, losing_streak: u64) -> Result<Self, MoveError> {
        if position.is_terminal() {
            return Err(MoveError::IllegalMoveForPosition {
                position,
                mv: Move::default(),
            });
        }
        let generator = PositionGenerator::new(SeedRange::DEFAULT);
        Ok(Self::start(generator, position).with_losing_streak(losing_streak))
    }

    /// Restores a persisted losing streak.
    #[must_use]
    pub fn with_losing_streak(self, losing_streak: u64) -> Self {
        Self {
            losing_streak,
            ..self
        }
    }

    fn from_generator(mut generator: PositionGenerator) -> Self {
        let position = generator.next_position();
        Self::start(generator, position)
    }

    fn start(generator: PositionGenerator, position: Position) -> Self {
        Self {
            generator,
            initial: position,
            position,
            turn: 1,
            history: vec![],
            state: SessionState::AwaitingHumanMove,
            losing_streak: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn initial_position(&self) -> Position {
        self.initial
    }

    /// Number of the next turn (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Actor> {
        match self.state {
            SessionState::Terminal { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn losing_streak(&self) -> u64 {
        self.losing_streak
    }

    #[must_use]
    pub fn seed(&self) -> PositionSeed {
        self.generator.seed()
    }

    #[must_use]
    pub fn range(&self) -> SeedRange {
        self.generator.range()
    }

    /// The move the automated player would make in the human's place.
    #[must_use]
    pub fn hint(&self) -> Option<Move> {
        self.state
            .is_awaiting_human_move()
            .then(|| strategy::select(self.position).mv)
    }

    /// Applies the human's move.
    ///
    /// On error the session is left unchanged.
    pub fn apply_human_move(&mut self, mv: Move) -> Result<(), MoveError> {
        match self.state {
            SessionState::AwaitingHumanMove => {}
            SessionState::AwaitingAutomatedMove => {
                return Err(MoveError::OutOfTurn {
                    actor: Actor::Human,
                });
            }
            SessionState::Terminal { .. } => {
                return Err(MoveError::IllegalMoveForPosition {
                    position: self.position,
                    mv,
                });
            }
        }
        let next = self.position.apply(mv)?;
        self.complete_move(Actor::Human, mv, next);
        Ok(())
    }

    /// Lets the automated player move and returns the move it made.
    ///
    /// # Panics
    ///
    /// Panics if the selector returns an illegal move, which would mean the
    /// engine itself is inconsistent.
    pub fn apply_automated_move(&mut self) -> Result<Move, MoveError> {
        if !self.state.is_awaiting_automated_move() {
            return Err(MoveError::OutOfTurn {
                actor: Actor::Automated,
            });
        }
        let selection = strategy::select(self.position);
        let next = self
            .position
            .apply(selection.mv)
            .unwrap_or_else(|e| panic!("automated player produced an illegal move: {e}"));
        debug!(
            "automated player: {} {:?} -> {next}",
            selection.mv, selection.shape
        );
        self.complete_move(Actor::Automated, selection.mv, next);
        Ok(selection.mv)
    }

    /// Starts a new game after the previous one ended.
    ///
    /// Draws a fresh starting position, clears the history and resets the
    /// turn counter; the losing streak is kept.
    pub fn reset(&mut self) -> Result<(), GameInProgressError> {
        if !self.is_terminal() {
            return Err(GameInProgressError);
        }
        let position = self.generator.next_position();
        self.initial = position;
        self.position = position;
        self.turn = 1;
        self.history.clear();
        self.state = SessionState::AwaitingHumanMove;
        Ok(())
    }

    fn complete_move(&mut self, actor: Actor, mv: Move, next: Position) {
        self.position = next;
        self.history.push(TurnRecord {
            turn: self.turn,
            actor,
            mv,
            position: next,
        });
        self.turn += 1;

        if next.is_terminal() {
            self.state = SessionState::Terminal { winner: actor };
            match actor {
                Actor::Automated => self.losing_streak += 1,
                Actor::Human => self.losing_streak = 0,
            }
            return;
        }
        self.state = match actor {
            Actor::Human => SessionState::AwaitingAutomatedMove,
            Actor::Automated => SessionState::AwaitingHumanMove,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: PositionSeed = PositionSeed::from_bytes([7; 16]);

    fn session_at(first: u32, second: u32) -> GameSession {
        GameSession::with_position(Position::new(first, second), 0).unwrap()
    }

    #[test]
    fn test_new_session_awaits_human() {
        let session = GameSession::with_seed(SeedRange::DEFAULT, SEED);
        assert!(session.state().is_awaiting_human_move());
        assert_eq!(session.turn(), 1);
        assert!(session.history().is_empty());
        assert!(!session.position().is_losing());
        assert_eq!(session.position(), session.initial_position());
    }

    #[test]
    fn test_terminal_start_is_rejected() {
        assert!(GameSession::with_position(Position::TERMINAL, 0).is_err());
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = session_at(3, 4);
        for mv in [Move::both(0), Move::new(1, 2), Move::first(4)] {
            assert!(session.apply_human_move(mv).is_err());
            assert_eq!(session.position(), Position::new(3, 4));
            assert_eq!(session.turn(), 1);
            assert!(session.history().is_empty());
            assert!(session.state().is_awaiting_human_move());
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = session_at(12, 19);
        assert_eq!(
            session.apply_automated_move(),
            Err(MoveError::OutOfTurn {
                actor: Actor::Automated
            })
        );

        session.apply_human_move(Move::first(1)).unwrap();
        assert!(session.state().is_awaiting_automated_move());
        assert_eq!(
            session.apply_human_move(Move::first(1)),
            Err(MoveError::OutOfTurn {
                actor: Actor::Human
            })
        );

        session.apply_automated_move().unwrap();
        assert!(session.state().is_awaiting_human_move());
        assert_eq!(session.turn(), 3);
        let actors = session
            .history()
            .iter()
            .map(|record| (record.turn, record.actor))
            .collect::<Vec<_>>();
        assert_eq!(actors, [(1, Actor::Human), (2, Actor::Automated)]);
    }

    #[test]
    fn test_automated_player_wins_from_winning_position() {
        // (11, 19) is winning for whoever moves; hand it to the automated player.
        let mut session = session_at(12, 19).with_losing_streak(4);
        session.apply_human_move(Move::first(1)).unwrap();
        assert!(!session.position().is_losing());

        while !session.is_terminal() {
            session.apply_automated_move().unwrap();
            if session.is_terminal() {
                break;
            }
            assert!(session.position().is_losing());
            let mv = session.position().legal_moves().next().unwrap();
            session.apply_human_move(mv).unwrap();
        }
        assert_eq!(session.winner(), Some(Actor::Automated));
        assert_eq!(session.losing_streak(), 5);
    }

    #[test]
    fn test_full_session_human_wins() {
        let mut session = session_at(12, 19).with_losing_streak(3);
        assert!(!session.position().is_losing());

        // Human always moves onto a losing position using the selector's advice.
        while !session.is_terminal() {
            let hint = session.hint().unwrap();
            session.apply_human_move(hint).unwrap();
            assert!(session.position().is_losing());
            if session.is_terminal() {
                break;
            }
            session.apply_automated_move().unwrap();
            assert!(!session.position().is_losing());
        }

        assert_eq!(session.winner(), Some(Actor::Human));
        assert_eq!(session.losing_streak(), 0);
        assert_eq!(session.position(), Position::TERMINAL);
        assert_eq!(session.history().last().unwrap().actor, Actor::Human);
        assert_eq!(session.hint(), None);
    }

    #[test]
    fn test_first_human_move_of_trace() {
        let mut session = session_at(12, 19);
        session.apply_human_move(Move::both(1)).unwrap();
        assert_eq!(session.position(), Position::new(11, 18));
        assert!(session.position().is_losing());

        let mv = session.apply_automated_move().unwrap();
        assert_eq!(mv, Move::both(1));
        assert_eq!(session.position(), Position::new(10, 17));
    }

    #[test]
    fn test_terminal_accepts_only_reset() {
        let mut session = session_at(5, 5).with_losing_streak(2);
        assert_eq!(session.reset(), Err(GameInProgressError));

        session.apply_human_move(Move::both(5)).unwrap();
        assert!(session.is_terminal());
        assert_eq!(session.winner(), Some(Actor::Human));
        assert_eq!(session.losing_streak(), 0);
        assert!(matches!(
            session.apply_human_move(Move::both(1)),
            Err(MoveError::IllegalMoveForPosition { .. })
        ));
        assert!(session.apply_automated_move().is_err());

        session.reset().unwrap();
        assert!(session.state().is_awaiting_human_move());
        assert_eq!(session.turn(), 1);
        assert!(session.history().is_empty());
        assert!(!session.position().is_losing());
        assert!(SeedRange::DEFAULT.contains(session.position().first()));
    }

    #[test]
    fn test_reset_keeps_losing_streak() {
        let mut session = session_at(0, 1);
        session.apply_human_move(Move::first(0)).unwrap_err();
        session.apply_human_move(Move::second(1)).unwrap();
        assert_eq!(session.losing_streak(), 0);

        let mut session = session_at(2, 2).with_losing_streak(0);
        session.apply_human_move(Move::first(2)).unwrap();
        session.apply_automated_move().unwrap();
        assert_eq!(session.winner(), Some(Actor::Automated));
        assert_eq!(session.losing_streak(), 1);

        session.reset().unwrap();
        assert_eq!(session.losing_streak(), 1);
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn test_resets_are_reproducible_with_seed() {
        let play_out = |session: &mut GameSession| {
            while !session.is_terminal() {
                let mv = session.position().legal_moves().last().unwrap();
                session.apply_human_move(mv).unwrap();
                if !session.is_terminal() {
                    session.apply_automated_move().unwrap();
                }
            }
        };
        let mut session1 = GameSession::with_seed(SeedRange::DEFAULT, SEED);
        let mut session2 = GameSession::with_seed(SeedRange::DEFAULT, SEED);
        for _ in 0..5 {
            assert_eq!(session1.position(), session2.position());
            play_out(&mut session1);
            play_out(&mut session2);
            session1.reset().unwrap();
            session2.reset().unwrap();
        }
    }

    #[test]
    fn test_turn_record_serialization() {
        let record = TurnRecord {
            turn: 1,
            actor: Actor::Human,
            mv: Move::both(1),
            position: Position::new(11, 18),
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["actor"], "Human");
        assert_eq!(json["move"]["first"], 1);
        assert_eq!(json["position"]["second"], 18);
    }
}
