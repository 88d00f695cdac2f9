use rand::Rng;
use serde::Serialize;

use crate::core::error::HangmanError;
use crate::games::hangman::word::SecretWord;

/// Word list shipped with the game.
pub const DEFAULT_WORDS: [&str; 20] = [
    "BLOCKCHAIN", "ETHEREUM", "SEPOLIA", "PRIVY", "WALLET",
    "CRYPTO", "TOKEN", "SMART", "CONTRACT", "DEFI",
    "MINT", "BURN", "STAKE", "YIELD", "SWAP",
    "BRIDGE", "LAYER", "NODE", "HASH", "FORK",
];

/// Non-empty list of validated secret words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    words: Vec<SecretWord>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(SecretWord::new)
            .collect::<Result<Vec<_>, _>>()?;
        if words.is_empty() {
            return Err(HangmanError::config("vocabulary is empty"));
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Picks one entry uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().copied().map(SecretWord::builtin).collect(),
        }
    }
}
