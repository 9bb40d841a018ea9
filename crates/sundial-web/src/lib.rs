pub mod runner;

pub use runner::SessionRunner;

use std::cell::RefCell;

use glam::Vec2;
use wasm_bindgen::prelude::*;

use sundial_core::InputEvent;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Session not initialized. Call session_init() first.");
        f(runner)
    })
}

/// Create the session. `settings_json` is the document the host read from
/// localStorage, or an empty string when nothing was saved yet.
#[wasm_bindgen]
pub fn session_init(seed: u64, settings_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let stored = if settings_json.is_empty() {
        None
    } else {
        Some(settings_json)
    };
    let runner = SessionRunner::new(seed, stored);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("sundial: session initialized");
}

/// One frame; `dt` is the measured delta in seconds.
#[wasm_bindgen]
pub fn session_tick(dt: f64) {
    with_runner(|r| r.tick(dt));
}

// ---- Input entry points ----

#[wasm_bindgen]
pub fn session_set_zoom(value: f64) {
    with_runner(|r| r.push_input(InputEvent::Zoom { value }));
}

#[wasm_bindgen]
pub fn session_zoom_by(factor: f64) {
    with_runner(|r| r.push_input(InputEvent::ZoomDelta { factor }));
}

/// Pointer tap in scene coordinates (the host converts from screen space
/// through the current viewBox).
#[wasm_bindgen]
pub fn session_tap(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::TapAt { pos: Vec2::new(x, y) }));
}

/// Quick-select a planet by catalog index.
#[wasm_bindgen]
pub fn session_select(index: u32) {
    with_runner(|r| r.select_index(index));
}

#[wasm_bindgen]
pub fn session_set_speed(value: f64) {
    with_runner(|r| r.push_input(InputEvent::SetSpeed { value }));
}

#[wasm_bindgen]
pub fn session_toggle_pause() {
    with_runner(|r| r.push_input(InputEvent::TogglePause));
}

#[wasm_bindgen]
pub fn timer_start_pause() {
    with_runner(|r| r.push_input(InputEvent::TimerStartPause));
}

#[wasm_bindgen]
pub fn timer_reset() {
    with_runner(|r| r.push_input(InputEvent::TimerReset));
}

#[wasm_bindgen]
pub fn timer_set_work_minutes(minutes: u32) {
    with_runner(|r| r.push_input(InputEvent::SetWorkMinutes { minutes }));
}

#[wasm_bindgen]
pub fn timer_set_break_minutes(minutes: u32) {
    with_runner(|r| r.push_input(InputEvent::SetBreakMinutes { minutes }));
}

/// Apply a settings document saved from the settings panel.
#[wasm_bindgen]
pub fn session_apply_settings(json: &str) {
    with_runner(|r| r.apply_settings_json(json));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_frame_floats() -> u32 {
    with_runner(|r| r.frame_floats())
}

/// Countdown display, MM:SS.
#[wasm_bindgen]
pub fn get_timer_text() -> String {
    with_runner(|r| r.timer_text())
}

/// Selected body metadata as JSON, "null" when nothing is selected.
#[wasm_bindgen]
pub fn get_selected_json() -> String {
    with_runner(|r| r.selected_json())
}

/// Current settings as JSON, for the host to persist.
#[wasm_bindgen]
pub fn get_settings_json() -> String {
    with_runner(|r| r.settings_json())
}
