//! Round engine behaviour through the public API.

use hangterm::games::hangman::{
    EngineConfig, GuessOutcome, IgnoredGuess, Letter, RoundEngine, RoundState, RoundStatus,
    SecretWord, Vocabulary,
};
use hangterm::HangmanError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn engine_with(words: &[&str], max: u32, seed: u64) -> RoundEngine {
    let config = EngineConfig {
        vocabulary: Vocabulary::new(words.iter().copied()).unwrap(),
        max_wrong_guesses: max,
    };
    RoundEngine::new(config, StdRng::seed_from_u64(seed)).unwrap()
}

fn random_letter(rng: &mut StdRng) -> Letter {
    let c = (b'A' + rng.random_range(0..26u8)) as char;
    Letter::try_from(c).unwrap()
}

fn word_covered(round: &RoundState) -> bool {
    round
        .secret_word()
        .letters()
        .all(|c| round.guessed_letters().contains(&c))
}

#[test]
fn test_cat_scenario() {
    let mut engine = engine_with(&["CAT"], 7, 0);
    engine.start_round();

    assert_eq!(engine.guess('C').unwrap(), GuessOutcome::Correct);
    let snap = engine.snapshot().unwrap();
    assert_eq!(snap.pattern, "C__");
    assert_eq!(snap.status, RoundStatus::InProgress);

    engine.guess('A').unwrap();
    assert_eq!(engine.snapshot().unwrap().pattern, "CA_");

    assert_eq!(engine.guess('T').unwrap(), GuessOutcome::Won);
    let snap = engine.snapshot().unwrap();
    assert_eq!(snap.pattern, "CAT");
    assert_eq!(snap.status, RoundStatus::Won);
}

#[test]
fn test_dog_scenario_lost_after_seven_misses() {
    let mut engine = engine_with(&["DOG"], 7, 0);
    engine.start_round();
    let mut last = None;
    for c in ['X', 'Y', 'Z', 'V', 'W', 'Q', 'J'] {
        last = Some(engine.guess(c).unwrap());
    }
    assert_eq!(last, Some(GuessOutcome::Lost));
    let round = engine.round().unwrap();
    assert_eq!(round.status(), RoundStatus::Lost);
    assert_eq!(round.wrong_guess_count(), 7);
}

#[test]
fn test_ab_duplicate_scenario() {
    let mut engine = engine_with(&["AB"], 7, 0);
    engine.start_round();
    engine.guess('A').unwrap();
    let before = engine.round().unwrap().clone();
    assert_eq!(
        engine.guess('A').unwrap(),
        GuessOutcome::Ignored(IgnoredGuess::AlreadyGuessed)
    );
    let round = engine.round().unwrap();
    assert_eq!(round, &before);
    assert_eq!(round.guessed_letters().len(), 1);
    assert_eq!(round.wrong_guess_count(), 0);
}

#[test]
fn test_only_word_scenario() {
    for seed in 0..20 {
        let mut engine = engine_with(&["ONLYWORD"], 7, seed);
        assert_eq!(engine.start_round().secret_word().as_str(), "ONLYWORD");
    }
}

#[test]
fn test_guess_after_loss_scenario() {
    let mut engine = engine_with(&["DOG"], 2, 0);
    engine.start_round();
    engine.guess('X').unwrap();
    engine.guess('Y').unwrap();
    let frozen = engine.round().unwrap().clone();
    assert_eq!(
        engine.guess('D').unwrap(),
        GuessOutcome::Ignored(IgnoredGuess::RoundOver)
    );
    assert_eq!(engine.round().unwrap(), &frozen);
}

#[test]
fn test_empty_vocabulary_is_invalid_configuration() {
    let err = Vocabulary::new(Vec::<&str>::new()).unwrap_err();
    assert!(matches!(err, HangmanError::InvalidConfiguration { .. }));
}

#[test]
fn test_invalid_guess_input() {
    let mut engine = engine_with(&["HASH"], 7, 0);
    engine.start_round();
    for bad in ["", "HA", "h", "1", "-"] {
        let err = engine.guess_str(bad).unwrap_err();
        assert!(matches!(err, HangmanError::InvalidInput { .. }), "{bad:?}");
    }
    assert!(engine.round().unwrap().guessed_letters().is_empty());
}

/// Drives many random rounds and checks the round invariants after every guess.
#[test]
fn test_invariants_hold_over_random_play() {
    let words = ["BLOCKCHAIN", "SEPOLIA", "DEFI", "YIELD", "HASH", "A"];
    let mut picker = StdRng::seed_from_u64(2024);

    for seed in 0..200 {
        let max = picker.random_range(1..=9);
        let mut engine = engine_with(&words, max, seed);
        engine.start_round();
        let mut prev_wrong = 0;

        for _ in 0..40 {
            let before = engine.round().unwrap().clone();
            let letter = random_letter(&mut picker);
            let outcome = engine.guess_letter(letter);
            let round = engine.round().unwrap();

            // Ignored guesses leave the round untouched.
            if !outcome.changed_state() {
                assert_eq!(round, &before);
            }
            // Repeats and post-terminal guesses are ignored.
            if before.has_guessed(letter) || before.status() != RoundStatus::InProgress {
                assert!(!outcome.changed_state());
            }
            // Terminal states are frozen.
            if before.status() != RoundStatus::InProgress {
                assert_eq!(round, &before);
            }

            // Wrong count is derived from the guesses and never decreases.
            assert_eq!(round.wrong_guess_count() as usize, round.wrong_letters().len());
            assert!(round.wrong_guess_count() >= prev_wrong);
            assert!(round.wrong_guess_count() <= max);
            prev_wrong = round.wrong_guess_count();

            // Lost exactly at the limit.
            assert_eq!(
                round.status() == RoundStatus::Lost,
                round.wrong_guess_count() == max
            );
            // Won exactly when every letter is covered (and not lost).
            match round.status() {
                RoundStatus::Won => assert!(word_covered(round)),
                RoundStatus::InProgress => assert!(!word_covered(round)),
                RoundStatus::Lost => {}
            }
        }
    }
}

#[test]
fn test_full_coverage_reveals_word() {
    for word in ["BLOCKCHAIN", "ETHEREUM", "A", "ZZZ"] {
        let mut round = RoundState::with_word(SecretWord::new(word).unwrap(), 7).unwrap();
        for letter in SecretWord::new(word).unwrap().letters() {
            round.guess(letter);
        }
        assert_eq!(round.reveal_pattern(), word);
        assert_eq!(round.status(), RoundStatus::Won);
    }
}

#[test]
fn test_round_with_zero_limit_is_invalid_configuration() {
    let err = RoundState::with_word(SecretWord::new("DOG").unwrap(), 0).unwrap_err();
    assert!(matches!(err, HangmanError::InvalidConfiguration { .. }));
}
