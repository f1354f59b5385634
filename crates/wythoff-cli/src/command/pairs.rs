use std::path::PathBuf;

use serde::Serialize;
use wythoff_engine::wythoff_pair;

use crate::util::Output;

/// Upper bound for `--count`; the pairs are collected in memory before writing.
pub(crate) const MAX_PAIRS: u64 = 1_000_000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PairsArg {
    /// Number of pairs to write, starting with (0, 0)
    #[arg(
        long,
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(0..=MAX_PAIRS)
    )]
    count: u64,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct PairEntry {
    n: u64,
    lower: u64,
    upper: u64,
}

pub(crate) fn run(arg: &PairsArg) -> anyhow::Result<()> {
    let PairsArg { count, output } = arg;

    let pairs = pair_entries(*count);
    if let Some(path) = output {
        eprintln!("Writing {} pairs to {}", pairs.len(), path.display());
    }
    Output::save_json(&pairs, output.clone())?;
    Ok(())
}

fn pair_entries(count: u64) -> Vec<PairEntry> {
    (0..count)
        .map(|n| {
            let (lower, upper) = wythoff_pair(n);
            PairEntry { n, lower, upper }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_entries() {
        let entries = pair_entries(4);
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[3],
            PairEntry {
                n: 3,
                lower: 4,
                upper: 7
            }
        );
        assert!(pair_entries(0).is_empty());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&pair_entries(2)).unwrap();
        assert_eq!(
            json,
            r#"[{"n":0,"lower":0,"upper":0},{"n":1,"lower":1,"upper":2}]"#
        );
    }
}
