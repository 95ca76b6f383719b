// Integration tests (native) for the `space-hangman` crate.
// These tests avoid wasm-specific functionality and exercise the pure round
// state machine so they can run under `cargo test` on the host.

use space_hangman::{FigureStage, GuessResult, MAX_INCORRECT, Outcome, PHRASES, ROUND_SECONDS, Round};

// Every catalog phrase masks to the same length, spaces pre-revealed and all
// other positions hidden.
#[test]
fn initial_mask_holds_for_whole_catalog() {
    for phrase in PHRASES {
        let round = Round::new(phrase);
        assert_eq!(round.masked().len(), phrase.chars().count(), "mask length for '{}'", phrase);
        for (c, m) in phrase.chars().zip(round.masked()) {
            if c == ' ' {
                assert_eq!(*m, ' ', "space not pre-revealed in '{}'", phrase);
            } else {
                assert_eq!(*m, '_', "letter not masked in '{}'", phrase);
            }
        }
    }
}

// "moon landing" guessed with exactly its letters, no mistakes: won with a
// flat +1 per distinct correct letter and an untouched figure.
#[test]
fn clean_moon_landing_round_is_won() {
    assert!(PHRASES.contains(&"moon landing"));
    let mut round = Round::new("moon landing");
    for letter in ['m', 'o', 'n', 'l', 'a', 'd', 'i', 'g'] {
        assert_eq!(round.submit_guess(letter), GuessResult::Correct);
    }
    assert_eq!(round.outcome(), Outcome::Won);
    assert_eq!(round.incorrect_guesses(), 0);
    assert_eq!(round.score(), 8.0);
    assert_eq!(round.masked_display(), "M O O N   L A N D I N G");
}

// Six wrong guesses against "rocket launch": lost by mistakes at -3.0, with
// the six figure stages produced exactly once each, in order.
#[test]
fn six_wrong_guesses_lose_by_mistakes() {
    assert!(PHRASES.contains(&"rocket launch"));
    let mut round = Round::new("rocket launch");
    let mut stages = Vec::new();
    for letter in ['q', 'z', 'x', 'j', 'v', 'w'] {
        assert_eq!(round.submit_guess(letter), GuessResult::Incorrect);
        stages.push(FigureStage::for_count(round.incorrect_guesses()).unwrap());
    }
    assert_eq!(stages, FigureStage::SEQUENCE.to_vec());
    assert_eq!(round.incorrect_guesses(), MAX_INCORRECT);
    assert_eq!(round.outcome(), Outcome::LostByMistakes);
    assert_eq!(round.score(), -3.0);
}

// 300 untouched ticks: timed out at zero seconds with the continuous penalty
// accumulated to -3.00 as displayed.
#[test]
fn untouched_round_times_out_after_300_ticks() {
    let mut round = Round::new("asteroid belt");
    for _ in 0..ROUND_SECONDS {
        round.tick();
    }
    assert_eq!(round.seconds_left(), 0);
    assert_eq!(round.outcome(), Outcome::LostByTimeout);
    assert!((round.score() + 3.0).abs() < 1e-9);
    assert_eq!(round.score_display(), "-3.00");
}

// The wrong-guess penalty and the per-tick decay are independent and
// additive: interleaving them never compensates one for the other.
#[test]
fn penalties_combine_additively() {
    let mut round = Round::new("stellar wind");
    round.submit_guess('q');
    round.tick();
    round.submit_guess('s');
    round.tick();
    assert!((round.score() - (1.0 - 0.5 - 0.02)).abs() < 1e-9);
    assert_eq!(round.seconds_left(), ROUND_SECONDS - 2);
}

// Once a terminal outcome is reached, neither guesses nor ticks move any
// state; the reset replaces the Round wholesale instead.
#[test]
fn terminal_round_is_frozen_until_reset() {
    let mut round = Round::new("galaxy quest");
    for letter in ['q', 'z', 'x', 'j', 'v', 'w'] {
        round.submit_guess(letter);
    }
    let score = round.score();
    let seconds = round.seconds_left();
    assert_eq!(round.submit_guess('g'), GuessResult::RoundOver);
    assert_eq!(round.tick(), Outcome::LostByMistakes);
    assert_eq!(round.score(), score);
    assert_eq!(round.seconds_left(), seconds);

    let fresh = Round::new("galaxy quest");
    assert_eq!(fresh.outcome(), Outcome::InProgress);
    assert_eq!(fresh.incorrect_guesses(), 0);
    assert_eq!(fresh.score(), 0.0);
    assert_eq!(fresh.seconds_left(), ROUND_SECONDS);
}
