//! Game state machine

use bevy::prelude::*;

/// Main game states. The character only ticks while `Playing`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
}
