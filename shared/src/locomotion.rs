//! Character locomotion shared by the client systems and tests.
//!
//! Turns one tick of sampled actions into a heading and a horizontal velocity.
//! Nothing here is scaled by frame time: the rotation accumulator advances a
//! fixed amount per tick.

use bevy::prelude::*;

use crate::{ActionSample, MovementIntent, SpeedConfig};

/// Persistent heading accumulators. Never reset and never wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeadingState {
    /// Yaw the visual container eases toward; grows while turning
    pub rotation_target: f32,
    /// Facing angle of the last non-zero intent
    pub character_rotation_target: f32,
}

/// Apply one tick of movement input.
///
/// - Turning (`intent.x != 0`) advances `rotation_target` by `rotation_speed * x`
/// - Any non-zero intent overwrites the horizontal velocity with `speed` along `atan2(x, z)`
/// - With zero intent the horizontal velocity is left alone, so momentum from the
///   physics engine carries over
/// - The vertical component is never touched
///
/// Returns the intent that was applied.
pub fn step_locomotion(
    actions: &ActionSample,
    speeds: &SpeedConfig,
    heading: &mut HeadingState,
    velocity: &mut Vec3,
) -> MovementIntent {
    let intent = MovementIntent::from_actions(actions);
    let speed = speeds.speed(actions.run);

    if intent.x != 0 {
        heading.rotation_target += speeds.rotation_speed * intent.x as f32;
    }

    if !intent.is_zero() {
        heading.character_rotation_target = intent.heading();
        velocity.x = heading.character_rotation_target.sin() * speed;
        velocity.z = heading.character_rotation_target.cos() * speed;
    }

    intent
}
