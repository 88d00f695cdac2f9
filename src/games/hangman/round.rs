use std::num::NonZeroU32;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::HangmanError;
use crate::games::hangman::vocabulary::Vocabulary;
use crate::games::hangman::word::{Letter, SecretWord};

/// Wrong guesses allowed before a round is lost.
pub const DEFAULT_MAX_WRONG_GUESSES: u32 = 7;

/// Placeholder shown for letters not yet revealed.
pub const HIDDEN: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// How a finished round ended. Reported once, on the guess that ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Won,
    Lost,
}

/// Why a guess left the round untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoredGuess {
    AlreadyGuessed,
    RoundOver,
    NoRound,
    /// A round may exist, but the player is logged out or on another screen.
    NotPlaying,
}

/// Effect of a single guess on the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Correct,
    Wrong { remaining: u32 },
    Won,
    Lost,
    Ignored(IgnoredGuess),
}

impl GuessOutcome {
    /// The round-completion event carried by this outcome, if any.
    pub fn completed(self) -> Option<RoundResult> {
        match self {
            GuessOutcome::Won => Some(RoundResult::Won),
            GuessOutcome::Lost => Some(RoundResult::Lost),
            _ => None,
        }
    }

    pub fn changed_state(self) -> bool {
        !matches!(self, GuessOutcome::Ignored(_))
    }
}

/// State of one round of Hangman.
///
/// Guesses are kept in the order they were made so that wrong letters can be
/// shown in a stable order. The wrong-guess count is stored alongside but only
/// ever changes together with `guessed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundState {
    secret: SecretWord,
    guessed: Vec<Letter>,
    wrong_guesses: u32,
    max_wrong_guesses: NonZeroU32,
    status: RoundStatus,
}

/// Rejects a zero wrong-guess limit.
pub fn check_max_wrong_guesses(max: u32) -> Result<NonZeroU32, HangmanError> {
    NonZeroU32::new(max).ok_or_else(|| HangmanError::config("max_wrong_guesses must be at least 1"))
}

impl RoundState {
    pub fn new(secret: SecretWord, max_wrong_guesses: NonZeroU32) -> Self {
        Self {
            secret,
            guessed: Vec::new(),
            wrong_guesses: 0,
            max_wrong_guesses,
            status: RoundStatus::InProgress,
        }
    }

    /// Fresh round with a word drawn uniformly from `vocabulary`.
    pub fn start<R: Rng + ?Sized>(vocabulary: &Vocabulary, max_wrong_guesses: NonZeroU32, rng: &mut R) -> Self {
        Self::new(vocabulary.choose(rng).clone(), max_wrong_guesses)
    }

    /// Fresh round with a known word. A zero limit is `InvalidConfiguration`.
    pub fn with_word(secret: SecretWord, max_wrong_guesses: u32) -> Result<Self, HangmanError> {
        Ok(Self::new(secret, check_max_wrong_guesses(max_wrong_guesses)?))
    }

    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.status.is_over() {
            return GuessOutcome::Ignored(IgnoredGuess::RoundOver);
        }
        if self.guessed.contains(&letter) {
            return GuessOutcome::Ignored(IgnoredGuess::AlreadyGuessed);
        }

        self.guessed.push(letter);

        if !self.secret.contains(letter) {
            self.wrong_guesses += 1;
            debug!(%letter, wrong = self.wrong_guesses, max = self.max_wrong_guesses, "miss");
            if self.wrong_guesses >= self.max_wrong_guesses.get() {
                self.status = RoundStatus::Lost;
                return GuessOutcome::Lost;
            }
            return GuessOutcome::Wrong {
                remaining: self.remaining_tries(),
            };
        }

        debug!(%letter, "hit");
        if self.is_word_complete() {
            self.status = RoundStatus::Won;
            return GuessOutcome::Won;
        }
        GuessOutcome::Correct
    }

    fn is_word_complete(&self) -> bool {
        self.secret.letters().all(|c| self.guessed.contains(&c))
    }

    /// The word with every unguessed position replaced by `_`.
    pub fn reveal_pattern(&self) -> String {
        self.secret
            .letters()
            .map(|c| if self.guessed.contains(&c) { c.as_char() } else { HIDDEN })
            .collect()
    }

    /// Guessed letters that are not in the word, in guess order.
    pub fn wrong_letters(&self) -> Vec<Letter> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.secret.contains(*c))
            .collect()
    }

    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed
    }

    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn secret_word(&self) -> &SecretWord {
        &self.secret
    }

    pub fn wrong_guess_count(&self) -> u32 {
        self.wrong_guesses
    }

    pub fn max_wrong_guesses(&self) -> u32 {
        self.max_wrong_guesses.get()
    }

    pub fn remaining_tries(&self) -> u32 {
        self.max_wrong_guesses.get().saturating_sub(self.wrong_guesses)
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            pattern: self.reveal_pattern(),
            guessed: self.guessed.clone(),
            wrong: self.wrong_letters(),
            wrong_guesses: self.wrong_guesses,
            max_wrong_guesses: self.max_wrong_guesses.get(),
            remaining_tries: self.remaining_tries(),
            status: self.status,
            word: self.status.is_over().then(|| self.secret.as_str().to_string()),
        }
    }
}

/// Read-only view of a round for display. The secret word is only present
/// once the round has ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub pattern: String,
    pub guessed: Vec<Letter>,
    pub wrong: Vec<Letter>,
    pub wrong_guesses: u32,
    pub max_wrong_guesses: u32,
    pub remaining_tries: u32,
    pub status: RoundStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub word: Option<String>,
}
