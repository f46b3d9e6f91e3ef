use macroquad::prelude::*;
use crate::application::Simulation;

/// Route the window's close button through `close_requested` instead of
/// letting macroquad tear the window down mid-generation.
pub fn intercept_quit() {
    prevent_quit();
}

/// Window close button or Escape
pub fn close_requested() -> bool {
    is_quit_requested() || is_key_pressed(KeyCode::Escape)
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 1] = [
        (KeyCode::Space, Simulation::toggle_paused),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
