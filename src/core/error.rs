//! Error types for the round engine.

/// Caller-contract violations rejected by the round engine.
///
/// Duplicate guesses and guesses after a round has ended are not errors;
/// they are reported as ignored outcomes instead.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HangmanError {
    /// Vocabulary or engine limits are unusable.
    #[display("Invalid configuration: {}", reason)]
    InvalidConfiguration { reason: String },

    /// A guess that is not exactly one letter A-Z.
    #[display("Invalid guess {:?}: expected a single letter A-Z", input)]
    InvalidInput { input: String },
}

impl HangmanError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub fn input(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }
}

impl std::error::Error for HangmanError {}
