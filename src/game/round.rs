//! Round state machine: phrase masking, guess evaluation, scoring and the
//! countdown clock. Pure Rust (no browser APIs) so it runs under native
//! `cargo test`; the `game` module feeds it guess and tick events.

use std::collections::HashSet;

/// Wrong guesses allowed before the figure is complete and the round is lost.
pub const MAX_INCORRECT: u8 = 6;
/// Countdown start, in seconds.
pub const ROUND_SECONDS: u32 = 300;
/// Mask symbol for a letter not yet revealed.
pub const PLACEHOLDER: char = '_';

const CORRECT_REWARD: f64 = 1.0;
const INCORRECT_PENALTY: f64 = 0.5;
const TICK_PENALTY: f64 = 0.01;

/// Round status, derived from the current state after every guess or tick.
/// All non-`InProgress` states are terminal for the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    LostByMistakes,
    LostByTimeout,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Result of feeding one letter into [`Round::submit_guess`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessResult {
    /// Letter occurs in the phrase; every matching position was revealed.
    Correct,
    /// Letter is absent; the incorrect count rose and the figure gains a stage.
    Incorrect,
    /// Not a fresh letter (already attempted, or not a-z); nothing changed.
    Rejected,
    /// The round already reached a terminal outcome; nothing changed.
    RoundOver,
}

/// Per-round state value object. Created at round start, mutated only by
/// [`Round::submit_guess`] and [`Round::tick`], replaced wholesale on reset.
#[derive(Clone, Debug)]
pub struct Round {
    phrase: String,
    masked: Vec<char>,
    tried: HashSet<char>,
    incorrect_guesses: u8,
    score: f64,
    seconds_left: u32,
}

impl Round {
    /// Start a round on `phrase` (lowercased). Spaces are pre-revealed in the
    /// mask; every other position starts as [`PLACEHOLDER`].
    pub fn new(phrase: &str) -> Self {
        let phrase = phrase.to_ascii_lowercase();
        let masked = phrase
            .chars()
            .map(|c| if c == ' ' { ' ' } else { PLACEHOLDER })
            .collect();
        Self {
            phrase,
            masked,
            tried: HashSet::new(),
            incorrect_guesses: 0,
            score: 0.0,
            seconds_left: ROUND_SECONDS,
        }
    }

    /// Evaluate one letter guess. Duplicate letters and guesses arriving after
    /// the round ended are rejected without touching any state, so callers may
    /// forward raw input events unfiltered.
    pub fn submit_guess(&mut self, letter: char) -> GuessResult {
        if self.outcome().is_terminal() {
            return GuessResult::RoundOver;
        }
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_alphabetic() || !self.tried.insert(letter) {
            return GuessResult::Rejected;
        }
        if self.phrase.contains(letter) {
            for (i, c) in self.phrase.chars().enumerate() {
                if c == letter {
                    self.masked[i] = letter;
                }
            }
            // Flat reward regardless of how many positions the letter fills.
            self.score += CORRECT_REWARD;
            GuessResult::Correct
        } else {
            self.incorrect_guesses += 1;
            self.score -= INCORRECT_PENALTY;
            GuessResult::Incorrect
        }
    }

    /// One second of clock: deduct time and the continuous score penalty.
    /// No-op once the round is over. Returns the resulting outcome so the
    /// timer callback can stop itself on expiry.
    pub fn tick(&mut self) -> Outcome {
        if self.outcome().is_terminal() {
            return self.outcome();
        }
        self.seconds_left -= 1;
        self.score -= TICK_PENALTY;
        self.outcome()
    }

    /// Current status, checked after every guess and tick. Win takes priority
    /// over the loss conditions (a finished mask can never also time out here
    /// because both checks run before any further event is accepted).
    pub fn outcome(&self) -> Outcome {
        if !self.masked.contains(&PLACEHOLDER) {
            Outcome::Won
        } else if self.incorrect_guesses >= MAX_INCORRECT {
            Outcome::LostByMistakes
        } else if self.seconds_left == 0 {
            Outcome::LostByTimeout
        } else {
            Outcome::InProgress
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn masked(&self) -> &[char] {
        &self.masked
    }

    pub fn incorrect_guesses(&self) -> u8 {
        self.incorrect_guesses
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn is_tried(&self, letter: char) -> bool {
        self.tried.contains(&letter.to_ascii_lowercase())
    }

    /// Mask as shown to the player: uppercase, one space between positions.
    pub fn masked_display(&self) -> String {
        let shown: Vec<String> = self
            .masked
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect();
        shown.join(" ")
    }

    /// Score as shown to the player (two decimals).
    pub fn score_display(&self) -> String {
        format!("{:.2}", self.score)
    }

    /// Countdown as shown to the player.
    pub fn clock(&self) -> String {
        format_clock(self.seconds_left)
    }
}

/// `M:SS` with seconds zero-padded to two digits.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
