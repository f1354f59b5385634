use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::util;

/// Persisted count of consecutive games the human has lost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakFile {
    pub losing_streak: u64,
}

impl StreakFile {
    /// Loads the streak file; a missing file is a streak of zero.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        util::read_json_file("streak", path)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        util::write_json_file(self, path)
    }
}
