/// Hangman screens - pure rendering, everything comes in through the view structs
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    layout::{Layout, Constraint, Direction},
};

use crate::app::{LeaderboardView, LoginView, PlayView};
use crate::core::ledger::{short_account, time_ago, win_rate};
use crate::core::renderer::ScreenRenderer;
use crate::games::hangman::round::{RoundSnapshot, RoundStatus};
use crate::games::hangman::word::Letter;

const GALLOWS: [&str; 9] = [
    "",
    "  +---+\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n=========",
];

/// Drawing for `wrong` misses out of `max`, scaled so the figure is complete
/// exactly when the round is lost.
pub fn gallows_stage(wrong: u32, max: u32) -> &'static str {
    if max == 0 {
        return GALLOWS[0];
    }
    let last = GALLOWS.len() - 1;
    let idx = (wrong.min(max) as usize * last) / max as usize;
    GALLOWS[idx]
}

/// Reveal pattern with a space between positions, e.g. `C _ _`.
pub fn spaced_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for (i, c) in pattern.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Available,
    Correct,
    Wrong,
    Unavailable,
}

/// A key is usable only while the round is running and the letter is new.
pub fn key_state(round: &RoundSnapshot, letter: Letter) -> KeyState {
    if round.wrong.contains(&letter) {
        KeyState::Wrong
    } else if round.guessed.contains(&letter) {
        KeyState::Correct
    } else if round.status != RoundStatus::InProgress {
        KeyState::Unavailable
    } else {
        KeyState::Available
    }
}

fn header(title: &str) -> Paragraph<'_> {
    Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
}

#[derive(Debug)]
pub struct LoginRenderer;

impl<'a> ScreenRenderer<LoginView<'a>> for LoginRenderer {
    fn render(frame: &mut Frame, view: &LoginView<'a>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(header("🎩 HANGMAN"), chunks[0]);

        let body = Paragraph::new(format!("{}\n\nPress Enter to connect a wallet.", view.message))
            .block(Block::default().borders(Borders::ALL).title(" Wallet "))
            .alignment(Alignment::Center);
        frame.render_widget(body, chunks[1]);

        let help = Paragraph::new("Enter: connect   Esc: quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(help, chunks[2]);
    }
}

#[derive(Debug)]
pub struct HangmanRenderer;

impl<'a> ScreenRenderer<PlayView<'a>> for HangmanRenderer {
    fn render(frame: &mut Frame, view: &PlayView<'a>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Player
                Constraint::Min(8),    // Gallows + word
                Constraint::Length(3), // Alphabet
                Constraint::Length(3), // Message
                Constraint::Length(1), // Help
            ])
            .split(frame.area());

        let account = view.account.map(short_account).unwrap_or_else(|| "-".into());
        let player = Paragraph::new(format!(
            "Player: {}   Score: {}   Games: {}   Won: {}",
            account, view.tally.score, view.tally.games_played, view.tally.games_won
        ))
        .block(Block::default().borders(Borders::ALL).title(" 🎩 HANGMAN "))
        .style(Style::default().fg(Color::Cyan));
        frame.render_widget(player, chunks[0]);

        let board = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(0)])
            .split(chunks[1]);

        let Some(round) = &view.round else {
            let idle = Paragraph::new("No round in progress.")
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(idle, chunks[1]);
            Self::render_footer(frame, view.message, chunks[3], chunks[4]);
            return;
        };

        let gallows = Paragraph::new(gallows_stage(round.wrong_guesses, round.max_wrong_guesses))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(gallows, board[0]);

        let wrong: String = round.wrong.iter().map(|l| l.as_char()).collect();
        let (status_text, status_color) = match round.status {
            RoundStatus::InProgress => ("Guess a letter", Color::Yellow),
            RoundStatus::Won => ("🎉 You Won!", Color::Green),
            RoundStatus::Lost => ("💀 Game Over!", Color::Red),
        };
        let mut lines = vec![
            Line::from(Span::styled(
                spaced_pattern(&round.pattern),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "Tries left: {} {}",
                round.remaining_tries,
                "❤".repeat(round.remaining_tries as usize)
            )),
            Line::from(format!("Wrong: {}", if wrong.is_empty() { "-".to_string() } else { wrong })),
            Line::from(""),
            Line::from(Span::styled(status_text, Style::default().fg(status_color))),
        ];
        if let Some(word) = &round.word {
            lines.push(Line::from(format!("The word was {word}")));
        }
        let word = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Word "));
        frame.render_widget(word, board[1]);

        let keys: Vec<Span> = Letter::alphabet()
            .map(|letter| {
                let style = match key_state(round, letter) {
                    KeyState::Available => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    KeyState::Correct => Style::default().fg(Color::Green),
                    KeyState::Wrong => Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT),
                    KeyState::Unavailable => Style::default().fg(Color::DarkGray),
                };
                Span::styled(format!("{letter} "), style)
            })
            .collect();
        let alphabet = Paragraph::new(Line::from(keys))
            .block(Block::default().borders(Borders::ALL).title(" Letters "));
        frame.render_widget(alphabet, chunks[2]);

        Self::render_footer(frame, view.message, chunks[3], chunks[4]);
    }
}

impl HangmanRenderer {
    fn render_footer(frame: &mut Frame, message: &str, message_area: Rect, help_area: Rect) {
        let message = Paragraph::new(message.to_string())
            .block(Block::default().borders(Borders::ALL).title(" Status "))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(message, message_area);

        let help = Paragraph::new("A-Z: guess   Enter: new word   Tab: leaderboard   F2: disconnect   Esc: quit")
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(help, help_area);
    }
}

#[derive(Debug)]
pub struct LeaderboardRenderer;

impl<'a> ScreenRenderer<LeaderboardView<'a>> for LeaderboardRenderer {
    fn render(frame: &mut Frame, view: &LeaderboardView<'a>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(
            header(&format!("👑 LEADERBOARD - {} games played", view.total_games)),
            chunks[0],
        );

        let mut rows = vec![Row::new(vec!["Rank", "Player", "Best", "Games", "Win %", "Last played"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))];
        for (i, entry) in view.entries.iter().enumerate() {
            let is_me = view.account == Some(&entry.account);
            let stats = &entry.stats;
            let style = if is_me {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            rows.push(
                Row::new(vec![
                    Cell::from(format!("#{}", i + 1)),
                    Cell::from(short_account(&entry.account)),
                    Cell::from(stats.highest_score.to_string()),
                    Cell::from(stats.total_games.to_string()),
                    Cell::from(format!("{}%", win_rate(stats.games_won, stats.total_games))),
                    Cell::from(time_ago(stats.last_game_time, view.now)),
                ])
                .style(style),
            );
        }
        if view.entries.is_empty() {
            rows.push(Row::new(vec![Cell::from("-"), Cell::from("No games recorded yet")]));
        }

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(16),
                Constraint::Length(6),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Min(10),
            ],
        )
        .block(Block::default().borders(Borders::ALL).title(" Top players "));
        frame.render_widget(table, chunks[1]);

        let help = Paragraph::new("Tab: back to game   Esc: quit").style(Style::default().fg(Color::Gray));
        frame.render_widget(help, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::{LeaderboardEntry, PlayerStats};
    use crate::core::session::AccountId;
    use crate::games::hangman::round::{RoundState, HIDDEN};
    use crate::games::hangman::tally::PlayerTally;
    use crate::games::hangman::word::SecretWord;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn l(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn gallows_complete_only_at_max() {
        assert_eq!(gallows_stage(0, 7), GALLOWS[0]);
        assert_eq!(gallows_stage(7, 7), GALLOWS[8]);
        assert_ne!(gallows_stage(6, 7), GALLOWS[8]);
        assert_eq!(gallows_stage(3, 3), GALLOWS[8]);
        assert_eq!(gallows_stage(9, 7), GALLOWS[8]);
    }

    #[test]
    fn pattern_is_spaced() {
        assert_eq!(spaced_pattern("C__"), "C _ _");
        assert_eq!(spaced_pattern(""), "");
        assert!(spaced_pattern("A_").contains(HIDDEN));
    }

    #[test]
    fn keys_lock_when_round_ends() {
        let mut round = RoundState::with_word(SecretWord::new("AB").unwrap(), 7).unwrap();
        round.guess(l('A'));
        round.guess(l('Z'));
        let snap = round.snapshot();
        assert_eq!(key_state(&snap, l('A')), KeyState::Correct);
        assert_eq!(key_state(&snap, l('Z')), KeyState::Wrong);
        assert_eq!(key_state(&snap, l('C')), KeyState::Available);

        round.guess(l('B'));
        let snap = round.snapshot();
        assert_eq!(key_state(&snap, l('C')), KeyState::Unavailable);
    }

    #[test]
    fn play_screen_shows_word_and_misses() {
        let mut round = RoundState::with_word(SecretWord::new("CAT").unwrap(), 7).unwrap();
        round.guess(l('C'));
        round.guess(l('Q'));
        let account = AccountId::new("0x742d35cc6634c0532925a3b8c17c701d2de7b94c");
        let view = PlayView {
            account: Some(&account),
            tally: PlayerTally { score: 10, games_played: 1, games_won: 1 },
            round: Some(round.snapshot()),
            message: "Sorry, 'Q' is not in the word.",
        };

        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| HangmanRenderer::render(f, &view)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("C _ _"));
        assert!(text.contains("Wrong: Q"));
        assert!(text.contains("Tries left: 6"));
        assert!(text.contains("0x742d...b94c"));
        assert!(text.contains("Score: 10"));
        assert!(text.contains("not in the word"));
        assert!(!text.contains("The word was"));
    }

    #[test]
    fn play_screen_without_round() {
        let view = PlayView {
            account: None,
            tally: PlayerTally::default(),
            round: None,
            message: "Press Enter to start a round.",
        };
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| HangmanRenderer::render(f, &view)).unwrap();
        assert!(screen_text(&terminal).contains("No round in progress"));
    }

    #[test]
    fn leaderboard_lists_entries() {
        let me = AccountId::new("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        let view = LeaderboardView {
            account: Some(&me),
            entries: vec![LeaderboardEntry {
                account: me.clone(),
                stats: PlayerStats {
                    total_games: 4,
                    games_won: 3,
                    total_score: 30,
                    highest_score: 30,
                    last_game_time: 1_000 - 120,
                },
            }],
            total_games: 4,
            now: 1_000,
        };
        let mut terminal = Terminal::new(TestBackend::new(90, 12)).unwrap();
        terminal.draw(|f| LeaderboardRenderer::render(f, &view)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("4 games played"));
        assert!(text.contains("0xaaaa...aaaa"));
        assert!(text.contains("75%"));
        assert!(text.contains("2m ago"));
    }

    #[test]
    fn login_screen_prompts_for_wallet() {
        let view = LoginView { message: "Wallet disconnected." };
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|f| LoginRenderer::render(f, &view)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Wallet disconnected."));
        assert!(text.contains("connect a wallet"));
    }
}
