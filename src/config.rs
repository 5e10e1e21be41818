//! Command-line options for the terminal game.

use crate::core::constants::{AVATAR_SPRITE_FILE, LOG_FILE};
use crate::storage::score_store::{data_dir, FileScoreStore};
use std::path::PathBuf;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Options),
    Version,
    Help,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Overrides the best-score file location.
    pub score_file: Option<PathBuf>,
    /// Avatar glyph file. Defaults to `avatar.txt` in the data directory when present.
    pub sprite: Option<PathBuf>,
}

impl Options {
    pub fn score_store(&self) -> FileScoreStore {
        match &self.score_file {
            Some(path) => FileScoreStore::new(path),
            None => FileScoreStore::at_default_location(),
        }
    }

    /// Log file beside the score file.
    pub fn log_path(&self) -> PathBuf {
        self.score_store()
            .path()
            .parent()
            .map(|dir| dir.join(LOG_FILE))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE))
    }

    /// Explicit sprite path, else the default file if it exists.
    pub fn sprite_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.sprite {
            return Some(path.clone());
        }
        data_dir()
            .ok()
            .map(|dir| dir.join(AVATAR_SPRITE_FILE))
            .filter(|path| path.exists())
    }
}

pub const USAGE: &str = "\
Skyward - flap through the gates

Usage: skyward [options]

Options:
  --score-file <PATH>  Where the best score is kept
  --sprite <PATH>      Avatar glyph file (rising, level, falling; one per line)
  --version, -v        Show version information
  --help, -h           Show this help message

Controls: Space/Up to flap, Space/R to restart, Q/Esc to quit";

/// Parse `args` (including the program name at index 0).
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--score-file" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--score-file needs a path".to_string())?;
                options.score_file = Some(PathBuf::from(value));
                i += 1;
            }
            "--sprite" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--sprite needs a path".to_string())?;
                options.sprite = Some(PathBuf::from(value));
                i += 1;
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Command::Play(options))
}
