use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use wythoff_engine::GameSession;

use crate::{schema::record::RecordedGame, util};

/// Collects the games played in one `play` run for saving on exit.
///
/// A session is reused across rematches, so each game has to be captured
/// before [`GameSession::reset`] clears its history.
#[derive(Debug, Default)]
pub struct GameRecorder {
    games: Vec<RecordedGame>,
}

impl GameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the session's current game. Games without any move are skipped.
    pub fn capture(&mut self, session: &GameSession) {
        if session.history().is_empty() {
            return;
        }
        self.games.push(RecordedGame {
            recorded_at: Utc::now(),
            seed: session.seed(),
            range: session.range(),
            initial: session.initial_position(),
            winner: session.winner(),
            history: session.history().to_vec(),
        });
    }

    #[cfg(test)]
    pub fn games(&self) -> &[RecordedGame] {
        &self.games
    }

    /// Saves every captured game to `record_dir` and returns the written paths.
    ///
    /// Files are named `game_{YYYYMMDD_HHMMSS}.json`; games captured within the
    /// same second get an index suffix.
    pub fn save(&self, record_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let mut paths: Vec<PathBuf> = Vec::with_capacity(self.games.len());
        for game in &self.games {
            let path = unused_path(record_dir, game.recorded_at, &paths);
            util::write_json_file(game, &path)?;
            paths.push(path);
        }
        Ok(paths)
    }
}

fn unused_path(record_dir: &Path, timestamp: DateTime<Utc>, taken: &[PathBuf]) -> PathBuf {
    let stem = format!("game_{}", timestamp.format("%Y%m%d_%H%M%S"));
    let mut path = record_dir.join(format!("{stem}.json"));
    let mut index = 1;
    while path.exists() || taken.contains(&path) {
        path = record_dir.join(format!("{stem}_{index}.json"));
        index += 1;
    }
    path
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use wythoff_engine::{Actor, Move, Position};

    use super::*;

    fn finished_session() -> GameSession {
        // (0, 3) -> (0, 2), then the automated player empties the second pile.
        let mut session = GameSession::with_position(Position::new(0, 3), 0).unwrap();
        session.apply_human_move(Move::second(1)).unwrap();
        session.apply_automated_move().unwrap();
        session
    }

    #[test]
    fn test_capture_records_finished_game() {
        let session = finished_session();
        let mut recorder = GameRecorder::new();
        recorder.capture(&session);

        let [game] = recorder.games() else {
            panic!("expected one game, got {:?}", recorder.games());
        };
        assert_eq!(game.initial, Position::new(0, 3));
        assert_eq!(game.winner, Some(Actor::Automated));
        assert_eq!(game.history.len(), 2);
        assert_eq!(game.history[1].position, Position::TERMINAL);
    }

    #[test]
    fn test_game_without_moves_is_skipped() {
        let session = GameSession::with_position(Position::new(4, 9), 0).unwrap();
        let mut recorder = GameRecorder::new();
        recorder.capture(&session);
        assert!(recorder.games().is_empty());
    }

    #[test]
    fn test_save_writes_one_file_per_game() {
        let dir = env::temp_dir().join(format!("wythoff-recordings-{}", process::id()));
        let session = finished_session();
        let mut recorder = GameRecorder::new();
        recorder.capture(&session);
        recorder.capture(&session);

        let paths = recorder.save(&dir).unwrap();
        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0], paths[1]);
        for path in &paths {
            let name = path.file_name().unwrap().to_string_lossy();
            assert!(name.starts_with("game_"), "{name}");
            let game: RecordedGame = util::read_json_file("recording", path).unwrap();
            assert_eq!(game.winner, Some(Actor::Automated));
            assert_eq!(game.history, session.history());
        }

        fs::remove_dir_all(&dir).unwrap();
    }
}
