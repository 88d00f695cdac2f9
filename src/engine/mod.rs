pub mod runner;

pub use runner::run;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppCommand, Screen};

/// Translate a key press into an app command for the current screen.
/// Letters are folded to uppercase here; the engine only takes A-Z.
pub fn command_for_key(screen: Screen, key: KeyEvent) -> Option<AppCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppCommand::Quit);
    }
    match (screen, key.code) {
        (_, KeyCode::Esc) => Some(AppCommand::Quit),
        (Screen::Login, KeyCode::Enter) => Some(AppCommand::Connect),
        (Screen::Login, _) => None,
        (_, KeyCode::Tab) => Some(AppCommand::ToggleLeaderboard),
        (_, KeyCode::F(2)) => Some(AppCommand::Disconnect),
        (Screen::Play, KeyCode::Enter) => Some(AppCommand::NewRound),
        (Screen::Play, KeyCode::Char(c)) if c.is_ascii_alphabetic() => {
            Some(AppCommand::Guess(c.to_ascii_uppercase()))
        }
        _ => None,
    }
}
