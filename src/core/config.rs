/// Game configuration, loaded from an optional TOML file
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::games::hangman::engine::EngineConfig;
use crate::games::hangman::round::DEFAULT_MAX_WRONG_GUESSES;
use crate::games::hangman::tally::{ScoringRules, DEFAULT_WIN_AWARD};
use crate::games::hangman::vocabulary::{Vocabulary, DEFAULT_WORDS};

/// Every key is optional; missing keys fall back to the built-in defaults
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub vocabulary: Vec<String>,
    pub max_wrong_guesses: u32,
    pub win_award: u32,
    pub leaderboard_limit: usize,
    /// Where the TUI writes its logs. No logging in the TUI when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
            win_award: DEFAULT_WIN_AWARD,
            leaderboard_limit: 10,
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid game config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Validated engine settings
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let vocabulary = Vocabulary::new(self.vocabulary.iter().cloned())?;
        Ok(EngineConfig { vocabulary, max_wrong_guesses: self.max_wrong_guesses })
    }

    pub fn scoring(&self) -> ScoringRules {
        ScoringRules { win_award: self.win_award }
    }
}
