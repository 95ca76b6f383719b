//! Browser round controller for Space Hangman.
//! Owns the canvas, the DOM overlays (phrase, score, countdown, message), the
//! 26 letter buttons and the 1-second interval timer, and routes every guess
//! and tick event through the pure [`round::Round`] state machine. Nothing
//! here is invoked until `start_game()` calls [`start_round_mode`].

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlButtonElement, HtmlCanvasElement, window};

pub mod gallows;
pub mod round;

use gallows::FigureStage;
use round::{GuessResult, Outcome, Round};

const CANVAS_SIZE: u32 = 200;
const TICK_MS: i32 = 1_000;
const RESET_DELAY_MS: i32 = 2_000;

/// Runtime game state: one live round plus the handles needed to cancel its
/// ticker before the next round starts.
struct GameState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    round: Round,
    timer_handle: Option<i32>,
    // Keeps the interval callback alive; replaced (and the old one dropped)
    // when the next round's timer starts.
    timer_closure: Option<Closure<dyn FnMut()>>,
}

// RefCell::new isn't const on this toolchain; allow Clippy lint until a const initializer is feasible.
thread_local! {
    static GAME_STATE: RefCell<Option<GameState>> = RefCell::new(None);
}

pub fn start_round_mode() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Create / reuse the gallows canvas
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("sh-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("sh-canvas");
        c.set_width(CANVAS_SIZE);
        c.set_height(CANVAS_SIZE);
        c.set_attribute("style", "position:fixed; left:50%; top:24%; transform:translate(-50%,-50%); box-shadow:0 0 32px 0 rgba(0,0,0,0.18); border-radius:18px; border:2px solid #222; background:#181818; z-index:20;").ok();
        doc.body().unwrap().append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas.get_context("2d")?.unwrap().dyn_into()?;

    // Ensure masked-phrase overlay exists
    if doc.get_element_by_id("sh-phrase").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("sh-phrase");
            div.set_text_content(Some(""));
            div.set_attribute("style", "position:fixed; top:46%; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:26px; letter-spacing:2px; padding:6px 14px; color:#ffffff; text-shadow:0 0 10px rgba(120,200,255,0.45); z-index:30; white-space:pre;").ok();
            body.append_child(&div)?;
        }
    }
    // Ensure score overlay exists (top-left)
    if doc.get_element_by_id("sh-score").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("sh-score");
            div.set_text_content(Some("Score: 0.00"));
            div.set_attribute("style", "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45; letter-spacing:0.5px;").ok();
            body.append_child(&div)?;
        }
    }
    // Ensure countdown overlay exists (top-right)
    if doc.get_element_by_id("sh-timer").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("sh-timer");
            div.set_text_content(Some(&round::format_clock(round::ROUND_SECONDS)));
            div.set_attribute("style", "position:fixed; top:10px; right:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45; letter-spacing:0.5px;").ok();
            body.append_child(&div)?;
        }
    }
    // Ensure end-of-round message overlay exists
    if doc.get_element_by_id("sh-message").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("sh-message");
            div.set_text_content(Some(""));
            div.set_attribute("style", "position:fixed; top:56%; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:20px; padding:4px 10px; background:rgba(0,0,0,0.35); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:30;").ok();
            body.append_child(&div)?;
        }
    }

    build_letter_buttons(&doc)?;
    install_zoom_guards(&doc)?;

    // Keyboard guesses mirror the buttons: a letter key plays that letter.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let key = evt.key();
            if key.len() == 1 {
                let c = key.chars().next().unwrap();
                if c.is_ascii_alphabetic() {
                    on_letter_event(c.to_ascii_lowercase());
                }
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // A previous round's ticker must never leak into the fresh state.
    GAME_STATE.with(|cell| {
        if let Some(old) = cell.borrow_mut().as_mut() {
            stop_timer(old);
        }
    });

    let state = GameState {
        canvas,
        ctx,
        round: Round::new(select_phrase()),
        timer_handle: None,
        timer_closure: None,
    };
    GAME_STATE.with(|cell| cell.replace(Some(state)));

    enable_all_letters();
    GAME_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            gallows::draw_frame(
                &state.ctx,
                state.canvas.width() as f64,
                state.canvas.height() as f64,
            );
            refresh_displays(state);
            start_timer(state);
        }
    });
    Ok(())
}

/// Build the a–z button grid. Each button fires one guess per activation
/// (click or touch) and is disabled permanently for the round on first use.
fn build_letter_buttons(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id("sh-letters").is_some() {
        return Ok(());
    }
    let container = doc.create_element("div")?;
    container.set_id("sh-letters");
    container.set_attribute("style", "position:fixed; bottom:24px; left:50%; transform:translateX(-50%); display:grid; grid-template-columns:repeat(9, 1fr); gap:6px; width:min(440px, 94vw); z-index:30;").ok();
    doc.body().unwrap().append_child(&container)?;

    for letter in 'a'..='z' {
        let button: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
        button.set_id(&letter_button_id(letter));
        button.set_text_content(Some(&letter.to_ascii_uppercase().to_string()));
        button.set_attribute("style", "font-family:'Fira Code', monospace; font-size:16px; padding:8px 0; background:#222; color:#ffd166; border:1px solid #333; border-radius:6px; cursor:pointer;").ok();
        {
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
                on_letter_event(letter);
            }) as Box<dyn FnMut(_)>);
            button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        // Touch fires before the synthetic click; swallow it so a tap guesses once.
        {
            let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
                evt.prevent_default();
                on_letter_event(letter);
            }) as Box<dyn FnMut(_)>);
            button
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        container.append_child(&button)?;
    }
    Ok(())
}

/// Swallow pinch-zoom gestures so rapid letter taps never rescale the page.
fn install_zoom_guards(doc: &Document) -> Result<(), JsValue> {
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            if evt.touches().length() > 1 {
                evt.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(false);
        doc.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        )?;
        closure.forget();
    }
    for name in ["gesturestart", "gesturechange", "gestureend"] {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            evt.prevent_default();
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn on_letter_event(letter: char) {
    GAME_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            handle_guess(state, letter);
        }
    });
}

fn handle_guess(state: &mut GameState, letter: char) {
    match state.round.submit_guess(letter) {
        GuessResult::Rejected | GuessResult::RoundOver => return,
        GuessResult::Correct => {}
        GuessResult::Incorrect => {
            if let Some(stage) = FigureStage::for_count(state.round.incorrect_guesses()) {
                gallows::draw_stage(&state.ctx, stage);
            }
        }
    }
    disable_letter(letter);
    refresh_displays(state);
    if state.round.outcome().is_terminal() {
        finish_round(state);
    }
}

fn on_tick(state: &mut GameState) {
    let outcome = state.round.tick();
    set_text("sh-timer", &state.round.clock());
    set_text("sh-score", &format!("Score: {}", state.round.score_display()));
    if outcome == Outcome::LostByTimeout {
        finish_round(state);
    }
}

/// Stop the ticker, show the terminal message (revealing the phrase on a
/// loss) and schedule the reset into a fresh round.
fn finish_round(state: &mut GameState) {
    stop_timer(state);
    let message = match state.round.outcome() {
        Outcome::Won => "Congratulations! You won!".to_string(),
        Outcome::LostByMistakes => format!(
            "Game Over! Phrase: {}",
            state.round.phrase().to_ascii_uppercase()
        ),
        Outcome::LostByTimeout => format!(
            "Time is up! Phrase: {}",
            state.round.phrase().to_ascii_uppercase()
        ),
        Outcome::InProgress => return,
    };
    set_text("sh-message", &message);
    schedule_reset();
}

/// Full reset: fresh phrase, cleared message, re-enabled buttons, empty
/// gallows, restarted ticker. The old Round is discarded wholesale.
fn reset_round(state: &mut GameState) {
    state.round = Round::new(select_phrase());
    set_text("sh-message", "");
    enable_all_letters();
    gallows::draw_frame(
        &state.ctx,
        state.canvas.width() as f64,
        state.canvas.height() as f64,
    );
    refresh_displays(state);
    start_timer(state);
}

fn start_timer(state: &mut GameState) {
    stop_timer(state);
    let closure = Closure::wrap(Box::new(move || {
        GAME_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                on_tick(state);
            }
        });
    }) as Box<dyn FnMut()>);
    if let Some(win) = window() {
        if let Ok(handle) = win
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_MS,
            )
        {
            state.timer_handle = Some(handle);
        }
    }
    // Replacing the slot drops the previous round's callback; the current one
    // is never executing at this point (resets run from the timeout callback).
    state.timer_closure = Some(closure);
}

/// Cancel the interval. Taking the handle makes a second stop a no-op; the
/// closure stays in its slot because this may be called from inside it.
fn stop_timer(state: &mut GameState) {
    if let Some(handle) = state.timer_handle.take() {
        if let Some(win) = window() {
            win.clear_interval_with_handle(handle);
        }
    }
}

fn schedule_reset() {
    let closure = Closure::wrap(Box::new(move || {
        GAME_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                reset_round(state);
            }
        });
    }) as Box<dyn FnMut()>);
    if let Some(win) = window() {
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            RESET_DELAY_MS,
        );
    }
    closure.forget();
}

fn refresh_displays(state: &GameState) {
    set_text("sh-phrase", &state.round.masked_display());
    set_text("sh-score", &format!("Score: {}", state.round.score_display()));
    set_text("sh-timer", &state.round.clock());
}

fn letter_button_id(letter: char) -> String {
    format!("sh-key-{letter}")
}

fn disable_letter(letter: char) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id(&letter_button_id(letter)) {
            if let Ok(button) = el.dyn_into::<HtmlButtonElement>() {
                button.set_disabled(true);
            }
        }
    }
}

fn enable_all_letters() {
    if let Some(doc) = window().and_then(|w| w.document()) {
        for letter in 'a'..='z' {
            if let Some(el) = doc.get_element_by_id(&letter_button_id(letter)) {
                if let Ok(button) = el.dyn_into::<HtmlButtonElement>() {
                    button.set_disabled(false);
                }
            }
        }
    }
}

fn set_text(id: &str, text: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

/// Uniform pick from the catalog for a new round.
fn select_phrase() -> &'static str {
    crate::PHRASES[rand_index(crate::PHRASES.len())]
}

#[cfg(feature = "rng")]
fn rand_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => (u64::from_le_bytes(buf) % len as u64) as usize,
        Err(_) => fallback_rand_index(len),
    }
}

#[cfg(not(feature = "rng"))]
fn rand_index(len: usize) -> usize {
    fallback_rand_index(len)
}

fn fallback_rand_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let now = window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    // Simple linear transform and modulus for prototype randomness (not crypto secure)
    (now as u64 as usize)
        .wrapping_mul(1664525)
        .wrapping_add(1013904223)
        % len
}
