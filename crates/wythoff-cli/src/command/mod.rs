use anyhow::Context as _;
use clap::{Parser, Subcommand};
use env_logger::Env;
use wythoff_engine::SeedRange;

use self::{classify::ClassifyArg, pairs::PairsArg, play::PlayArg, simulate::SimulateArg};

mod classify;
mod pairs;
mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the automated player in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Classify a position and show the automated player's move
    Classify(#[clap(flatten)] ClassifyArg),
    /// Write the first Wythoff pairs as JSON
    Pairs(#[clap(flatten)] PairsArg),
    /// Play many games with random human moves
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Classify(arg) => {
            init_logger();
            classify::run(&arg)?;
        }
        Mode::Pairs(arg) => {
            init_logger();
            pairs::run(&arg)?;
        }
        Mode::Simulate(arg) => {
            init_logger();
            simulate::run(&arg)?;
        }
    }
    Ok(())
}

/// Logs to stderr, so it is not enabled while the terminal UI owns the screen.
fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

/// Range the initial pile sizes are drawn from.
#[derive(Debug, Clone, Copy, clap::Args)]
pub(crate) struct RangeArg {
    /// Smallest initial pile size
    #[arg(long, default_value_t = SeedRange::DEFAULT.min())]
    min: u32,
    /// Largest initial pile size
    #[arg(long, default_value_t = SeedRange::DEFAULT.max())]
    max: u32,
}

impl Default for RangeArg {
    fn default() -> Self {
        Self {
            min: SeedRange::DEFAULT.min(),
            max: SeedRange::DEFAULT.max(),
        }
    }
}

impl RangeArg {
    pub(crate) fn to_range(self) -> anyhow::Result<SeedRange> {
        SeedRange::new(self.min, self.max)
            .with_context(|| format!("Invalid range --min {} --max {}", self.min, self.max))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_play() {
        let args = CommandArgs::try_parse_from(["wythoff"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_range_arguments() {
        let args = CommandArgs::try_parse_from(["wythoff", "simulate", "--min", "3", "--max", "8"])
            .unwrap();
        let Some(Mode::Simulate(arg)) = args.mode else {
            panic!("expected simulate, got {:?}", args.mode);
        };
        let range = arg.range.to_range().unwrap();
        assert_eq!((range.min(), range.max()), (3, 8));
    }

    #[test]
    fn test_invalid_range_is_reported() {
        let arg = RangeArg { min: 9, max: 2 };
        let err = arg.to_range().unwrap_err();
        assert!(err.to_string().contains("--min 9 --max 2"), "{err}");
    }

    #[test]
    fn test_pair_count_is_bounded() {
        let max = pairs::MAX_PAIRS.to_string();
        let too_many = (pairs::MAX_PAIRS + 1).to_string();
        let parse = |count: &str| CommandArgs::try_parse_from(["wythoff", "pairs", "--count", count]);
        assert!(parse(&max).is_ok());
        assert!(parse(&too_many).is_err());
    }

    #[test]
    fn test_malformed_seed_is_rejected() {
        let result = CommandArgs::try_parse_from(["wythoff", "play", "--seed", "xyz"]);
        assert!(result.is_err());
    }
}
