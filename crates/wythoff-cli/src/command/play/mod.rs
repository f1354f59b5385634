use std::{path::PathBuf, time::Duration};

use wythoff_engine::{GameSession, PositionSeed};

use crate::{command::RangeArg, schema::streak::StreakFile, tui::Runtime};

use self::app::PlayApp;

mod app;

const DEFAULT_AI_DELAY_MS: u64 = 500;
const DEFAULT_STREAK_FILE: &str = "./data/streak.json";
const DEFAULT_RECORD_DIR: &str = "./data/recordings/";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    range: RangeArg,
    /// Hex seed for reproducible starting positions
    #[arg(long)]
    seed: Option<PositionSeed>,
    /// How long the AI "thinks" before moving, in milliseconds
    #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS)]
    ai_delay_ms: u64,
    /// File the losing streak is kept in between runs
    #[arg(long, default_value = DEFAULT_STREAK_FILE)]
    streak_file: PathBuf,
    /// Save the played games to recording files when the session ends
    #[arg(long)]
    save_recording: bool,
    /// Directory to save recording files
    #[arg(long, default_value = DEFAULT_RECORD_DIR)]
    record_dir: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            range: RangeArg::default(),
            seed: None,
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            streak_file: PathBuf::from(DEFAULT_STREAK_FILE),
            save_recording: false,
            record_dir: PathBuf::from(DEFAULT_RECORD_DIR),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        range,
        seed,
        ai_delay_ms,
        streak_file,
        save_recording,
        record_dir,
    } = arg;

    let range = range.to_range()?;
    let streak = StreakFile::load(streak_file)?;
    let session = match seed {
        Some(seed) => GameSession::with_seed(range, *seed),
        None => GameSession::new(range),
    }
    .with_losing_streak(streak.losing_streak);

    let mut app = PlayApp::new(session, Duration::from_millis(*ai_delay_ms));
    Runtime::new().run(&mut app)?;
    let (session, recorder) = app.finish();

    StreakFile {
        losing_streak: session.losing_streak(),
    }
    .save(streak_file)?;

    if *save_recording {
        for path in recorder.save(record_dir)? {
            eprintln!("Saved recording to {}", path.display());
        }
    }

    Ok(())
}
