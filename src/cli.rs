use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::core::config::GameConfig;
use crate::core::ledger::InMemoryLedger;
use crate::core::session::MockWallet;
use crate::engine;
use crate::games::hangman::{
    EngineConfig, GuessOutcome, PlayerTally, RoundEngine, RoundSnapshot, Vocabulary,
};

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "🎩 Hangman in the terminal")]
#[command(version)]
pub struct Cli {
    /// TOML config file (vocabulary, max_wrong_guesses, win_award, leaderboard_limit, log_file)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for word selection, for reproducible rounds
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the number of wrong guesses allowed per round
    #[arg(long, global = true)]
    pub max_wrong_guesses: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the terminal UI (default)
    Play,
    /// Print the vocabulary
    Words {
        #[arg(long)]
        json: bool,
    },
    /// Play one round headless with the given letters, printing the round after each guess
    Simulate {
        /// Letters to guess in order, e.g. "ETAOIN" (spaces and commas are skipped)
        guesses: String,

        /// Use this secret word instead of drawing one from the vocabulary
        #[arg(short, long)]
        word: Option<String>,

        /// One JSON object per line instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(max) = cli.max_wrong_guesses {
        config.max_wrong_guesses = max;
    }

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            init_tracing(config.log_file.as_deref(), false)?;
            play(&config, cli.seed)
        }
        Commands::Words { json } => {
            init_tracing(None, true)?;
            print_words(&config, json)
        }
        Commands::Simulate { guesses, word, json } => {
            init_tracing(None, true)?;
            simulate(&config, cli.seed, &guesses, word, json)
        }
    }
}

/// TUI mode logs to `log_file` only, since stderr shares the screen.
fn init_tracing(log_file: Option<&Path>, stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match (log_file, stderr) {
        (Some(path), _) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, true) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        (None, false) => {}
    }
    Ok(())
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn play(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let round_engine = RoundEngine::new(config.engine_config()?, rng(seed))?;
    // Wallet gets its own stream so seeded word picks don't depend on logins
    let wallet = MockWallet::new(rng(seed.map(|s| s.wrapping_add(1))));
    let mut app = App::new(
        wallet,
        InMemoryLedger::new(),
        round_engine,
        config.scoring(),
        config.leaderboard_limit,
    );

    let mut terminal = ratatui::init();
    let result = engine::run(&mut app, &mut terminal);
    ratatui::restore();
    result
}

fn print_words(config: &GameConfig, json: bool) -> Result<()> {
    let vocabulary = config.engine_config()?.vocabulary;
    if json {
        println!("{}", serde_json::to_string_pretty(&vocabulary)?);
    } else {
        for word in vocabulary.words() {
            println!("{word}");
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct SimulationStep {
    guess: char,
    outcome: GuessOutcome,
    round: RoundSnapshot,
}

fn simulate(
    config: &GameConfig,
    seed: Option<u64>,
    guesses: &str,
    word: Option<String>,
    json: bool,
) -> Result<()> {
    let mut engine_config = config.engine_config()?;
    if let Some(word) = word {
        engine_config = EngineConfig {
            vocabulary: Vocabulary::new([word])?,
            ..engine_config
        };
    }
    let mut engine = RoundEngine::new(engine_config, rng(seed))?;
    let start = engine.start_round().snapshot();
    if !json {
        println!("start  {}", describe(&start));
    }

    let mut tally = PlayerTally::default();
    for c in guesses.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        let guess = c.to_ascii_uppercase();
        let outcome = engine
            .guess(guess)
            .with_context(|| format!("cannot guess {c:?}"))?;
        let round = engine.snapshot().context("round vanished mid-simulation")?;
        if let Some(result) = outcome.completed() {
            tally.record(result, &config.scoring());
        }

        if json {
            let step = SimulationStep { guess, outcome, round };
            println!("{}", serde_json::to_string(&step)?);
        } else {
            println!("{guess:<6} {}  {:?}", describe(&round), outcome);
        }
    }

    info!(score = tally.score, games = tally.games_played, "simulation finished");
    if !json {
        println!("score  {}", tally.score);
    }
    Ok(())
}

fn describe(round: &RoundSnapshot) -> String {
    let wrong: String = round.wrong.iter().map(|l| l.as_char()).collect();
    let mut text = format!(
        "{}  wrong: {}  tries left: {}  {:?}",
        round.pattern,
        if wrong.is_empty() { "-" } else { &wrong },
        round.remaining_tries,
        round.status
    );
    if let Some(word) = &round.word {
        text.push_str(&format!("  word: {word}"));
    }
    text
}
