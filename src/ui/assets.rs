//! Decorative resources owned by the renderer.
//!
//! Nothing here is required to play: a sprite that fails to load is
//! replaced by a placeholder glyph and the failure is logged.

use ratatui::style::Color;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not read asset: {0}")]
    Io(#[from] io::Error),
    #[error("asset file contains no glyphs")]
    Empty,
}

/// Avatar glyphs picked by tilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub rising: char,
    pub level: char,
    pub falling: char,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            rising: '▲',
            level: '►',
            falling: '▼',
        }
    }
}

impl Sprite {
    /// Shown when a sprite file was requested but could not be used.
    pub fn placeholder() -> Self {
        Self {
            rising: '■',
            level: '■',
            falling: '■',
        }
    }

    /// Parse up to three glyph lines: rising, level, falling. A single line
    /// is used for every tilt; two lines reuse the second for falling.
    pub fn parse(text: &str) -> Result<Self, AssetError> {
        let glyphs: Vec<char> = text
            .lines()
            .filter_map(|line| line.trim().chars().next())
            .take(3)
            .collect();
        match glyphs.as_slice() {
            [] => Err(AssetError::Empty),
            [only] => Ok(Self {
                rising: *only,
                level: *only,
                falling: *only,
            }),
            [rising, level] => Ok(Self {
                rising: *rising,
                level: *level,
                falling: *level,
            }),
            [rising, level, falling, ..] => Ok(Self {
                rising: *rising,
                level: *level,
                falling: *falling,
            }),
        }
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn load_or_placeholder(path: &Path) -> Self {
        match Self::load(path) {
            Ok(sprite) => sprite,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "avatar sprite unavailable, using placeholder");
                Self::placeholder()
            }
        }
    }

    /// Glyph for a tilt in degrees (positive = nose up).
    pub fn glyph_for(&self, angle: f64) -> char {
        if angle > 10.0 {
            self.rising
        } else if angle < -10.0 {
            self.falling
        } else {
            self.level
        }
    }
}

/// Colours of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub sky: Color,
    pub barrier: Color,
    pub barrier_edge: Color,
    pub avatar: Color,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            sky: Color::Rgb(135, 206, 235),
            barrier: Color::Green,
            barrier_edge: Color::Rgb(60, 100, 20),
            avatar: Color::Yellow,
        }
    }
}
