use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::HangmanError;

/// A single guessable letter, always uppercase A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// Every letter A through Z, in order.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        ('A'..='Z').map(Letter)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = HangmanError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_uppercase() {
            Ok(Letter(c))
        } else {
            Err(HangmanError::input(c.to_string()))
        }
    }
}

impl FromStr for Letter {
    type Err = HangmanError;

    /// Accepts exactly one uppercase character; no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::try_from(c).map_err(|_| HangmanError::input(s)),
            _ => Err(HangmanError::input(s)),
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A word that can be the secret of a round: non-empty, letters A-Z only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretWord(String);

impl SecretWord {
    pub fn new(word: impl Into<String>) -> Result<Self, HangmanError> {
        let word = word.into();
        if word.is_empty() {
            return Err(HangmanError::config("vocabulary contains an empty word"));
        }
        if !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(HangmanError::config(format!(
                "word {word:?} must contain only letters A-Z"
            )));
        }
        Ok(Self(word))
    }

    /// Wraps one of the built-in words, which are checked by the vocabulary tests.
    pub(crate) fn builtin(word: &'static str) -> Self {
        debug_assert!(!word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase()));
        Self(word.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Letters of the word in position order, repeats included.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        // Validated on construction, so every char is already A-Z.
        self.0.chars().map(Letter)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(letter.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for SecretWord {
    type Error = HangmanError;

    fn try_from(word: String) -> Result<Self, Self::Error> {
        SecretWord::new(word)
    }
}

impl From<SecretWord> for String {
    fn from(word: SecretWord) -> Self {
        word.0
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
