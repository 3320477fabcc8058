//! Game configuration loaded from JSON
//!
//! ```json
//! {
//!   "rows": 15,
//!   "cols": 15,
//!   "win_streak": 5,
//!   "depth": 2,
//!   "first_move": "human",
//!   "tie_break": "first"
//! }
//! ```
//!
//! Every field is optional; missing fields take the defaults above.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{MAX_DEPTH, MAX_SIDE, MIN_SIDE};
use crate::board::{DEFAULT_SIZE, DEFAULT_WIN_STREAK};
use crate::engine::DEFAULT_DEPTH;
use crate::error::{GomokuError, Result};
use crate::search::TieBreak;

/// Default configuration file looked up next to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "gomoku.json";

/// Who places the first stone in a GUI game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstMove {
    #[default]
    Human,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_streak: usize,
    pub depth: u32,
    pub first_move: FirstMove,
    pub tie_break: TieBreak,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            win_streak: DEFAULT_WIN_STREAK,
            depth: DEFAULT_DEPTH,
            first_move: FirstMove::Human,
            tie_break: TieBreak::First,
        }
    }
}

impl GameConfig {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse or validate is reported and
    /// replaced by the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Apply the same limits as a move request.
    pub fn validate(&self) -> Result<()> {
        let side = MIN_SIDE..=MAX_SIDE;
        if !side.contains(&self.rows) || !side.contains(&self.cols) {
            return Err(GomokuError::InvalidInput(format!(
                "board size {}x{} outside {}..={}",
                self.rows, self.cols, MIN_SIDE, MAX_SIDE
            )));
        }
        if self.win_streak < 3 || self.win_streak > self.rows.max(self.cols) {
            return Err(GomokuError::InvalidInput(format!(
                "win_streak {} must be between 3 and {}",
                self.win_streak,
                self.rows.max(self.cols)
            )));
        }
        if self.depth > MAX_DEPTH {
            return Err(GomokuError::InvalidInput(format!(
                "depth {} exceeds {}",
                self.depth, MAX_DEPTH
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 15);
        assert_eq!(config.cols, 15);
        assert_eq!(config.win_streak, 5);
        assert_eq!(config.depth, 2);
        assert_eq!(config.first_move, FirstMove::Human);
        assert_eq!(config.tie_break, TieBreak::First);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows": 9, "first_move": "ai"}"#).unwrap();
        assert_eq!(config.rows, 9);
        assert_eq!(config.cols, 15);
        assert_eq!(config.first_move, FirstMove::Ai);
    }

    #[test]
    fn test_tie_break_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"tie_break": {"random": {"seed": 42}}}"#).unwrap();
        assert_eq!(config.tie_break, TieBreak::Random { seed: Some(42) });
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = GameConfig { rows: 4, ..Default::default() };
        assert!(config.validate().is_err());

        let config = GameConfig { cols: 26, ..Default::default() };
        assert!(config.validate().is_err());

        let config = GameConfig { win_streak: 2, ..Default::default() };
        assert!(config.validate().is_err());

        let config = GameConfig { rows: 5, cols: 6, win_streak: 7, ..Default::default() };
        assert!(config.validate().is_err());

        let config = GameConfig { depth: 7, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_round_trip() {
        let config = GameConfig {
            rows: 10,
            cols: 12,
            win_streak: 4,
            depth: 3,
            first_move: FirstMove::Ai,
            tie_break: TieBreak::Random { seed: None },
        };
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&config).unwrap().as_bytes())
            .unwrap();

        let loaded = GameConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_values_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"depth": 99}"#).unwrap();

        assert!(matches!(
            GameConfig::load(file.path()),
            Err(GomokuError::InvalidInput(_))
        ));
        assert_eq!(GameConfig::load_or_default(file.path()), GameConfig::default());
    }

    #[test]
    fn test_load_unparsable_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(matches!(GameConfig::load(file.path()), Err(GomokuError::Json(_))));
        assert_eq!(GameConfig::load_or_default(file.path()), GameConfig::default());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);

        assert!(matches!(GameConfig::load(&path), Err(GomokuError::Io(_))));
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
    }
}
