use log::{info, warn};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use wythoff_engine::{Actor, GameSession, Move, PositionSeed, SeedRange, SessionState};

use crate::command::RangeArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: u64,
    /// Hex seed for reproducible starting positions and human moves
    #[arg(long)]
    seed: Option<PositionSeed>,
    #[clap(flatten)]
    pub(super) range: RangeArg,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SimulationSummary {
    human_wins: u64,
    automated_wins: u64,
    /// Games the automated player lost after being handed a winning position
    unexpected_losses: u64,
    losing_streak: u64,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let range = arg.range.to_range()?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());

    eprintln!("Simulating {} games (seed {seed})...", arg.games);
    let summary = simulate(range, seed, arg.games)?;

    println!("Player wins: {}", summary.human_wins);
    println!("AI wins:     {}", summary.automated_wins);
    println!("Losing streak: {}", summary.losing_streak);
    if summary.unexpected_losses > 0 {
        anyhow::bail!(
            "the automated player lost {} game(s) from a winning position",
            summary.unexpected_losses
        );
    }
    Ok(())
}

fn simulate(range: SeedRange, seed: PositionSeed, games: u64) -> anyhow::Result<SimulationSummary> {
    let mut session = GameSession::with_seed(range, seed);
    let mut rng = Pcg32::from_seed(seed.to_bytes());
    let mut summary = SimulationSummary::default();

    for game in 0..games {
        if game > 0 {
            session.reset()?;
        }

        let mut handed_winning = false;
        let winner = loop {
            match session.state() {
                SessionState::AwaitingHumanMove => {
                    let mv = random_move(&session, &mut rng);
                    session.apply_human_move(mv)?;
                }
                SessionState::AwaitingAutomatedMove => {
                    handed_winning |= !session.position().is_losing();
                    session.apply_automated_move()?;
                }
                SessionState::Terminal { winner } => break winner,
            }
        };

        match winner {
            Actor::Human => {
                summary.human_wins += 1;
                if handed_winning {
                    summary.unexpected_losses += 1;
                    warn!(
                        "game {game}: automated player lost from {}",
                        session.initial_position()
                    );
                }
            }
            Actor::Automated => summary.automated_wins += 1,
        }
        info!(
            "game {game}: {} won in {} turns",
            winner,
            session.history().len()
        );

        let played = game + 1;
        if played % 1000 == 0 {
            eprintln!("{played}/{games} games played");
        }
    }

    summary.losing_streak = session.losing_streak();
    Ok(summary)
}

/// Uniform over all legal moves, without enumerating them.
fn random_move(session: &GameSession, rng: &mut Pcg32) -> Move {
    let position = session.position();
    // The session only awaits a move from a non-terminal position.
    let index = rng.random_range(0..position.legal_move_count());
    position
        .nth_legal_move(index)
        .unwrap_or_else(|| panic!("no legal move {index} from {position}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: PositionSeed = PositionSeed::from_bytes([
        0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA,
        0xBB,
    ]);

    #[test]
    fn test_every_game_has_a_winner() {
        let summary = simulate(SeedRange::DEFAULT, SEED, 200).unwrap();
        assert_eq!(summary.human_wins + summary.automated_wins, 200);
        assert_eq!(summary.unexpected_losses, 0);
        assert!(summary.losing_streak <= summary.automated_wins);
    }

    #[test]
    fn test_same_seed_same_summary() {
        let range = SeedRange::new(1, 6).unwrap();
        assert_eq!(
            simulate(range, SEED, 100).unwrap(),
            simulate(range, SEED, 100).unwrap()
        );
    }

    #[test]
    fn test_huge_piles() {
        let range = SeedRange::new(u32::MAX - 1, u32::MAX).unwrap();
        let summary = simulate(range, SEED, 1).unwrap();
        assert_eq!(summary.human_wins + summary.automated_wins, 1);
        assert_eq!(summary.unexpected_losses, 0);
    }

    #[test]
    fn test_no_games() {
        let summary = simulate(SeedRange::DEFAULT, SEED, 0).unwrap();
        assert_eq!(summary, SimulationSummary::default());
    }
}
