/// High-score persistence.
///
/// The store holds a single non-negative integer as plain decimal text.
/// Persistence is best-effort: a missing or unreadable file loads as 0 and a
/// failed write is dropped.  Failures are logged, never returned.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub trait ScoreStore {
    /// The persisted high score, or 0 if there is none.
    fn load(&mut self) -> u32;
    /// Overwrite the persisted high score.
    fn save(&mut self, value: u32);
}

#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> u32 {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "no high score loaded");
                return 0;
            }
        };
        match text.trim().parse() {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring corrupt high score file");
                0
            }
        }
    }

    fn save(&mut self, value: u32) {
        if let Err(err) = std::fs::write(&self.path, value.to_string()) {
            warn!(path = %self.path.display(), %err, "could not save high score");
        }
    }
}
