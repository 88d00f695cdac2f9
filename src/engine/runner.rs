use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use rand::Rng;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use crate::app::{unix_now, App, Flow, Screen};
use crate::core::ledger::Ledger;
use crate::core::renderer::ScreenRenderer;
use crate::core::session::IdentityProvider;
use crate::engine::command_for_key;
use crate::games::hangman::{HangmanRenderer, LeaderboardRenderer, LoginRenderer};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main loop: draw the current screen, wait for a key, apply it.
/// Returns when the player quits; the caller owns terminal setup and restore.
pub fn run<P, L, R>(app: &mut App<P, L, R>, terminal: &mut DefaultTerminal) -> Result<()>
where
    P: IdentityProvider,
    L: Ledger,
    R: Rng,
{
    info!("terminal session started");
    loop {
        terminal.draw(|f| match app.screen() {
            Screen::Login => LoginRenderer::render(f, &app.login_view()),
            Screen::Play => HangmanRenderer::render(f, &app.play_view()),
            Screen::Leaderboard => LeaderboardRenderer::render(f, &app.leaderboard_view(unix_now())),
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(command) = command_for_key(app.screen(), key) else {
            continue;
        };

        match app.apply(command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                warn!(error = %e, ?command, "command failed");
                app.set_message(e.to_string());
            }
        }
    }
    info!(tally = ?app.tally(), "terminal session ended");
    Ok(())
}
