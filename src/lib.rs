pub mod core {
	pub mod config;
	pub mod error;
	pub mod ledger;
	pub mod renderer;
	pub mod session;
}

pub mod app;
pub mod cli;
pub mod engine;
pub mod games;

// Re-export for convenience
pub use crate::app::{App, AppCommand};
pub use crate::core::error::HangmanError;
pub use crate::games::hangman::{RoundEngine, RoundState};
