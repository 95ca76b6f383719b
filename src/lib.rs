//! Space Hangman core crate.
//!
//! A timed hangman round against a space-themed phrase catalog, rendered on a
//! 2D canvas with DOM letter buttons. The round state machine lives in
//! `game::round` as pure Rust so it runs under native `cargo test`; everything
//! browser-facing (canvas, buttons, interval timer) sits in the `game` module
//! behind `start_game()`.

use wasm_bindgen::prelude::*;

mod game;

pub use game::gallows::FigureStage;
pub use game::round::{GuessResult, MAX_INCORRECT, Outcome, ROUND_SECONDS, Round};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Phrase catalog
// Lowercase letters and single spaces only; one entry is picked per round.
// -----------------------------------------------------------------------------

pub const PHRASES: &[&str] = &[
    "rocket launch",
    "cosmic voyage",
    "space station",
    "alien planet",
    "stellar wind",
    "galaxy quest",
    "moon landing",
    "solar system",
    "asteroid belt",
];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_round_mode()
}
