//! Keyboard input
//!
//! Action sampling itself lives in `shared::controls`; the client only reports key releases.

use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use shared::KeyboardMap;

/// Log every key release, naming the bound action when there is one
pub fn log_key_releases(mut keyboard_events: MessageReader<KeyboardInput>, keymap: Res<KeyboardMap>) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Released {
            continue;
        }
        match keymap.action_for(event.key_code) {
            Some(action) => debug!("Key released: {:?} ({})", event.key_code, action.name()),
            None => debug!("Key released: {:?}", event.key_code),
        }
    }
}
