//! Application layer: session gating, the round engine, the running tally and
//! ledger writes, driven by [`AppCommand`]s from whatever front-end is attached.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{info, instrument, warn};

use crate::core::ledger::{GameRecord, LeaderboardEntry, Ledger};
use crate::core::session::{AccountId, IdentityProvider};
use crate::games::hangman::{
    GuessOutcome, IgnoredGuess, Letter, PlayerTally, RoundEngine, RoundResult, RoundSnapshot,
    ScoringRules,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Play,
    Leaderboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Connect,
    Disconnect,
    NewRound,
    Guess(char),
    ToggleLeaderboard,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<P, L, R = StdRng> {
    identity: P,
    ledger: L,
    engine: RoundEngine<R>,
    tally: PlayerTally,
    scoring: ScoringRules,
    leaderboard_limit: usize,
    screen: Screen,
    message: String,
}

impl<P, L, R> App<P, L, R>
where
    P: IdentityProvider,
    L: Ledger,
    R: Rng,
{
    pub fn new(identity: P, ledger: L, engine: RoundEngine<R>, scoring: ScoringRules, leaderboard_limit: usize) -> Self {
        Self {
            identity,
            ledger,
            engine,
            tally: PlayerTally::default(),
            scoring,
            leaderboard_limit,
            screen: Screen::Login,
            message: "Connect your wallet to start playing.".into(),
        }
    }

    #[instrument(skip(self))]
    pub fn apply(&mut self, command: AppCommand) -> Result<Flow> {
        match command {
            AppCommand::Connect => self.connect()?,
            AppCommand::Disconnect => self.disconnect(),
            AppCommand::NewRound => self.new_round()?,
            AppCommand::Guess(c) => {
                self.guess(c)?;
            }
            AppCommand::ToggleLeaderboard => self.toggle_leaderboard(),
            AppCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn connect(&mut self) -> Result<()> {
        let account = self.identity.connect()?;
        info!(%account, "player connected");
        self.screen = Screen::Play;
        self.new_round()
    }

    fn disconnect(&mut self) {
        self.identity.disconnect();
        self.tally.reset();
        self.engine.clear();
        self.screen = Screen::Login;
        self.message = "Wallet disconnected.".into();
    }

    /// Starts a fresh round. Only allowed with an authenticated session.
    pub fn new_round(&mut self) -> Result<()> {
        if !self.identity.session().authenticated() {
            bail!("connect a wallet before starting a round");
        }
        let letters = self.engine.start_round().secret_word().len();
        self.screen = Screen::Play;
        self.message = format!("New word with {letters} letters. Guess a letter!");
        Ok(())
    }

    /// Guesses one letter in the current round. Ignored outside the play screen.
    ///
    /// A finished round always counts toward the tally. If the ledger refuses
    /// the record, the failure is logged and shown in the status message.
    pub fn guess(&mut self, c: char) -> Result<GuessOutcome> {
        if self.screen != Screen::Play || !self.identity.session().authenticated() {
            return Ok(GuessOutcome::Ignored(IgnoredGuess::NotPlaying));
        }
        let letter = Letter::try_from(c)?;
        let outcome = self.engine.guess_letter(letter);
        let mut unsaved = None;
        let award = match outcome.completed() {
            Some(result) => {
                let award = self.tally.record(result, &self.scoring);
                if let Err(e) = self.save_game(result, award) {
                    warn!(error = %e, ?result, "game result not saved to ledger");
                    unsaved = Some(e);
                }
                award
            }
            None => 0,
        };
        self.message = self.describe(letter, outcome, award);
        if let Some(e) = unsaved {
            self.message.push_str(&format!(" Result not saved: {e}"));
        }
        Ok(outcome)
    }

    fn save_game(&mut self, result: RoundResult, award: u32) -> Result<()> {
        let Some(account) = self.identity.session().account.clone() else {
            warn!("round finished without an account in session");
            return Ok(());
        };
        let record = GameRecord {
            won: result == RoundResult::Won,
            award,
            session_score: self.tally.score,
            timestamp: unix_now(),
        };
        self.ledger.record(&account, record)?;
        info!(%account, ?result, score = self.tally.score, games = self.tally.games_played, "tally updated");
        Ok(())
    }

    fn describe(&self, letter: Letter, outcome: GuessOutcome, award: u32) -> String {
        let word = self
            .engine
            .round()
            .map(|r| r.secret_word().to_string())
            .unwrap_or_default();
        match outcome {
            GuessOutcome::Correct => format!("Good guess! '{letter}' is in the word."),
            GuessOutcome::Wrong { remaining } => {
                format!("Sorry, '{letter}' is not in the word. {remaining} tries left.")
            }
            GuessOutcome::Won => format!("You won! The word was '{word}'. +{award} points"),
            GuessOutcome::Lost => format!("Game over! The word was '{word}'."),
            GuessOutcome::Ignored(IgnoredGuess::AlreadyGuessed) => {
                format!("Letter '{letter}' already guessed.")
            }
            GuessOutcome::Ignored(IgnoredGuess::RoundOver) => {
                "Round is over. Press Enter for a new word.".into()
            }
            GuessOutcome::Ignored(IgnoredGuess::NoRound) => "Press Enter to start a round.".into(),
            GuessOutcome::Ignored(IgnoredGuess::NotPlaying) => {
                "Guesses only count on the play screen.".into()
            }
        }
    }

    fn toggle_leaderboard(&mut self) {
        self.screen = match self.screen {
            Screen::Play => Screen::Leaderboard,
            Screen::Leaderboard => Screen::Play,
            Screen::Login => Screen::Login,
        };
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tally(&self) -> PlayerTally {
        self.tally
    }

    pub fn account(&self) -> Option<&AccountId> {
        self.identity.session().account.as_ref()
    }

    pub fn engine(&self) -> &RoundEngine<R> {
        &self.engine
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn login_view(&self) -> LoginView<'_> {
        LoginView { message: &self.message }
    }

    pub fn play_view(&self) -> PlayView<'_> {
        PlayView {
            account: self.account(),
            tally: self.tally,
            round: self.engine.snapshot(),
            message: &self.message,
        }
    }

    pub fn leaderboard_view(&self, now: u64) -> LeaderboardView<'_> {
        LeaderboardView {
            account: self.account(),
            entries: self.ledger.top_entries(self.leaderboard_limit),
            total_games: self.ledger.total_games(),
            now,
        }
    }
}

pub struct LoginView<'a> {
    pub message: &'a str,
}

pub struct PlayView<'a> {
    pub account: Option<&'a AccountId>,
    pub tally: PlayerTally,
    pub round: Option<RoundSnapshot>,
    pub message: &'a str,
}

pub struct LeaderboardView<'a> {
    pub account: Option<&'a AccountId>,
    pub entries: Vec<LeaderboardEntry>,
    pub total_games: u64,
    /// Unix seconds, used for the "last played" column
    pub now: u64,
}

pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
