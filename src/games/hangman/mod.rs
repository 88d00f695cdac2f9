/// Hangman - round engine, scoring and screens
pub mod engine;
pub mod renderer;
pub mod round;
pub mod tally;
pub mod vocabulary;
pub mod word;

pub use engine::{EngineConfig, RoundEngine};
pub use renderer::{HangmanRenderer, LeaderboardRenderer, LoginRenderer};
pub use round::{GuessOutcome, IgnoredGuess, RoundResult, RoundSnapshot, RoundState, RoundStatus};
pub use tally::{PlayerTally, ScoringRules};
pub use vocabulary::Vocabulary;
pub use word::{Letter, SecretWord};
