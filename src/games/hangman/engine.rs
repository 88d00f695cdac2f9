//! Round engine: owns the current round and the random source used to pick words.

use std::num::NonZeroU32;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::core::error::HangmanError;
use crate::games::hangman::round::{
    self, GuessOutcome, IgnoredGuess, RoundSnapshot, RoundState, DEFAULT_MAX_WRONG_GUESSES,
};
use crate::games::hangman::vocabulary::Vocabulary;
use crate::games::hangman::word::Letter;

/// Settings fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub vocabulary: Vocabulary,
    pub max_wrong_guesses: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
        }
    }
}

/// Drives one round at a time. Starting a round discards the previous one.
#[derive(Debug)]
pub struct RoundEngine<R = StdRng> {
    config: EngineConfig,
    max_wrong_guesses: NonZeroU32,
    rng: R,
    round: Option<RoundState>,
}

impl<R: Rng> RoundEngine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, HangmanError> {
        let max_wrong_guesses = round::check_max_wrong_guesses(config.max_wrong_guesses)?;
        Ok(Self {
            config,
            max_wrong_guesses,
            rng,
            round: None,
        })
    }

    pub fn start_round(&mut self) -> &RoundState {
        let round = RoundState::start(
            &self.config.vocabulary,
            self.max_wrong_guesses,
            &mut self.rng,
        );
        info!(
            letters = round.secret_word().len(),
            max_wrong = round.max_wrong_guesses(),
            "round started"
        );
        self.round.insert(round)
    }

    /// Guesses one letter. The input must already be an uppercase A-Z char.
    pub fn guess(&mut self, input: char) -> Result<GuessOutcome, HangmanError> {
        let letter = Letter::try_from(input)?;
        Ok(self.guess_letter(letter))
    }

    /// Same as [`guess`](Self::guess) but takes the raw text a caller received.
    pub fn guess_str(&mut self, input: &str) -> Result<GuessOutcome, HangmanError> {
        let letter: Letter = input.parse()?;
        Ok(self.guess_letter(letter))
    }

    pub fn guess_letter(&mut self, letter: Letter) -> GuessOutcome {
        let Some(round) = self.round.as_mut() else {
            debug!(%letter, "guess without an active round");
            return GuessOutcome::Ignored(IgnoredGuess::NoRound);
        };
        let outcome = round.guess(letter);
        if let Some(result) = outcome.completed() {
            info!(?result, word = %round.secret_word(), wrong = round.wrong_guess_count(), "round finished");
        }
        outcome
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.round.as_ref().map(RoundState::snapshot)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Drops the current round without starting another.
    pub fn clear(&mut self) {
        self.round = None;
    }
}
