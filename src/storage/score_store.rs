//! Best-score persistence.
//!
//! The score is stored as plain decimal text. A missing, unreadable or
//! malformed file is never fatal: loading falls back to 0 and reports why.

use crate::core::constants::HIGH_SCORE_FILE;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file holds {0:?}, not a non-negative integer")]
    Malformed(String),
    #[error("could not determine a data directory")]
    NoDataDir,
}

/// Result of reading the best score: either a value from the store or the
/// default together with the reason the store could not be used.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(u32),
    UseDefault { reason: ScoreStoreError },
}

impl LoadOutcome {
    pub fn value(&self) -> u32 {
        match self {
            LoadOutcome::Loaded(score) => *score,
            LoadOutcome::UseDefault { .. } => 0,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, LoadOutcome::UseDefault { .. })
    }
}

/// Source of truth for the best score across sessions.
pub trait ScoreStore {
    fn load(&self) -> LoadOutcome;

    /// Persist `best`. Best effort: failures are logged, never surfaced.
    fn save(&mut self, best: u32);
}

/// Parse the stored text. Surrounding whitespace is ignored.
pub fn parse_score(text: &str) -> Result<u32, ScoreStoreError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| ScoreStoreError::Malformed(trimmed.to_string()))
}

/// Default location: `high_score.txt` in the platform data directory.
pub fn default_score_path() -> Result<PathBuf, ScoreStoreError> {
    let dir = data_dir()?;
    Ok(dir.join(HIGH_SCORE_FILE))
}

/// Platform data directory for the game, created if needed.
pub fn data_dir() -> Result<PathBuf, ScoreStoreError> {
    let project_dirs =
        ProjectDirs::from("", "", "skyward").ok_or(ScoreStoreError::NoDataDir)?;
    let dir = project_dirs.data_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

/// Best score kept in a text file.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location, or `high_score.txt` in the working
    /// directory when no data directory is available.
    pub fn at_default_location() -> Self {
        match default_score_path() {
            Ok(path) => Self::new(path),
            Err(e) => {
                warn!(error = %e, "falling back to working directory for score file");
                Self::new(HIGH_SCORE_FILE)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<u32, ScoreStoreError> {
        let text = fs::read_to_string(&self.path)?;
        parse_score(&text)
    }

    pub fn try_save(&self, best: u32) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, best.to_string())?;
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> LoadOutcome {
        match self.try_load() {
            Ok(score) => LoadOutcome::Loaded(score),
            Err(reason) => {
                debug!(path = %self.path.display(), %reason, "using default best score");
                LoadOutcome::UseDefault { reason }
            }
        }
    }

    fn save(&mut self, best: u32) {
        if let Err(e) = self.try_save(best) {
            warn!(path = %self.path.display(), error = %e, "failed to save best score");
        }
    }
}

/// In-memory store. Records how often it was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: Option<u32>,
    pub saves: Vec<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            saves: Vec::new(),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> LoadOutcome {
        match self.best {
            Some(best) => LoadOutcome::Loaded(best),
            None => LoadOutcome::UseDefault {
                reason: ScoreStoreError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no score recorded",
                )),
            },
        }
    }

    fn save(&mut self, best: u32) {
        self.best = Some(best);
        self.saves.push(best);
    }
}
