/// Ledger seam: where finished games are recorded and the leaderboard is read from
use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::session::AccountId;

/// One finished round as submitted to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub won: bool,
    /// Points the round earned
    pub award: u32,
    /// Player's running score after this round
    pub session_score: u32,
    /// Unix seconds
    pub timestamp: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_games: u64,
    pub games_won: u64,
    pub total_score: u64,
    pub highest_score: u64,
    /// Unix seconds of the last recorded game, 0 if none
    pub last_game_time: u64,
}

impl PlayerStats {
    fn apply(&mut self, record: &GameRecord) {
        self.total_games += 1;
        if record.won {
            self.games_won += 1;
        }
        self.total_score += u64::from(record.award);
        self.highest_score = self.highest_score.max(u64::from(record.session_score));
        self.last_game_time = self.last_game_time.max(record.timestamp);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub account: AccountId,
    pub stats: PlayerStats,
}

pub trait Ledger {
    fn record(&mut self, account: &AccountId, record: GameRecord) -> Result<()>;

    fn player_stats(&self, account: &AccountId) -> Option<PlayerStats>;

    /// Best players first, at most `limit` of them
    fn top_entries(&self, limit: usize) -> Vec<LeaderboardEntry>;

    /// Games recorded across all players
    fn total_games(&self) -> u64;
}

/// Ledger kept in process memory for the lifetime of the program
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    players: HashMap<AccountId, PlayerStats>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ledger for InMemoryLedger {
    fn record(&mut self, account: &AccountId, record: GameRecord) -> Result<()> {
        let stats = self.players.entry(account.clone()).or_default();
        stats.apply(&record);
        debug!(%account, won = record.won, total_games = stats.total_games, "game recorded");
        Ok(())
    }

    fn player_stats(&self, account: &AccountId) -> Option<PlayerStats> {
        self.players.get(account).copied()
    }

    fn top_entries(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .players
            .iter()
            .map(|(account, stats)| LeaderboardEntry { account: account.clone(), stats: *stats })
            .collect();
        entries.sort_by(|a, b| {
            b.stats.highest_score.cmp(&a.stats.highest_score)
                .then(b.stats.games_won.cmp(&a.stats.games_won))
                .then(b.stats.total_score.cmp(&a.stats.total_score))
                .then(a.account.cmp(&b.account))
        });
        entries.truncate(limit);
        entries
    }

    fn total_games(&self) -> u64 {
        self.players.values().map(|s| s.total_games).sum()
    }
}

/// `0x1234...abcd` style shortening for long identifiers
pub fn short_account(account: &AccountId) -> String {
    let id = account.as_str();
    if id.len() <= 10 || !id.is_ascii() {
        return id.to_string();
    }
    format!("{}...{}", &id[..6], &id[id.len() - 4..])
}

/// Whole-number win percentage, 0 when no games were played
pub fn win_rate(won: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (won as f64 / total as f64 * 100.0).round() as u64
}

/// Coarse age of a timestamp relative to `now`, both in unix seconds
pub fn time_ago(timestamp: u64, now: u64) -> String {
    if timestamp == 0 {
        return "Never".into();
    }
    let diff = now.saturating_sub(timestamp);
    match diff {
        0..=59 => "Just now".into(),
        60..=3599 => format!("{}m ago", diff / 60),
        3600..=86399 => format!("{}h ago", diff / 3600),
        _ => format!("{}d ago", diff / 86400),
    }
}
