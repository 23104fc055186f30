//! Character rig constants and the per-character controller state

use bevy::prelude::*;

use crate::{
    follow_camera::{lerp, CameraPose, CameraState, FOLLOW_SMOOTHING},
    locomotion::{step_locomotion, HeadingState},
    ActionSample, MovementIntent, SpeedConfig,
};

/// Capsule collider radius
pub const CAPSULE_RADIUS: f32 = 0.08;

/// Capsule collider half-height (cylindrical part)
pub const CAPSULE_HALF_HEIGHT: f32 = 0.154;

/// Camera rig anchor, local to the turning container (above and behind)
pub const CAMERA_RIG_OFFSET: Vec3 = Vec3::new(0.0, 4.0, -4.0);

/// Look-at anchor, local to the turning container (in front)
pub const LOOK_AT_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 1.5);

/// Uniform scale of the character visual
pub const MODEL_SCALE: f32 = 0.18;

/// Vertical offset of the character visual from the body center
pub const MODEL_OFFSET_Y: f32 = -0.25;

/// Where the camera is spawned before it starts following
pub const CAMERA_START: Vec3 = Vec3::new(3.0, 3.0, 3.0);

/// Camera vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

/// Camera near clip plane
pub const CAMERA_NEAR: f32 = 0.1;

/// Owned per-tick state of one controlled character.
///
/// Lives on the physics body entity. `container`, `camera_rig` and `look_at_anchor`
/// point at its scene-graph children.
#[derive(Component, Clone, Debug)]
pub struct CharacterController {
    pub heading: HeadingState,
    pub camera: CameraState,
    pub container: Entity,
    pub camera_rig: Entity,
    pub look_at_anchor: Option<Entity>,
}

impl CharacterController {
    pub fn new(container: Entity, camera_rig: Entity, look_at_anchor: Option<Entity>) -> Self {
        Self {
            heading: HeadingState::default(),
            camera: CameraState::new(CAMERA_START),
            container,
            camera_rig,
            look_at_anchor,
        }
    }

    /// Locomotion half of the tick. A missing body velocity makes this a no-op.
    pub fn drive(
        &mut self,
        actions: &ActionSample,
        speeds: &SpeedConfig,
        velocity: Option<&mut Vec3>,
    ) -> Option<MovementIntent> {
        let velocity = velocity?;
        Some(step_locomotion(actions, speeds, &mut self.heading, velocity))
    }

    /// Ease the container yaw toward the accumulated rotation target
    pub fn smooth_yaw(&self, current_yaw: f32) -> f32 {
        lerp(current_yaw, self.heading.rotation_target, FOLLOW_SMOOTHING)
    }

    /// Camera half of the tick
    pub fn follow(&mut self, rig_anchor: Vec3, look_anchor: Option<Vec3>) -> CameraPose {
        self.camera.follow(rig_anchor, look_anchor)
    }
}

/// Current yaw of the turning container.
///
/// Kept as a plain angle: reading yaw back out of a quaternion would wrap it into
/// (-π, π] while the rotation target grows without bound.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerYaw(pub f32);

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CharacterController {
        CharacterController::new(Entity::PLACEHOLDER, Entity::PLACEHOLDER, None)
    }

    #[test]
    fn test_drive_without_body_is_noop() {
        let mut controller = controller();
        let left = ActionSample { left: true, ..default() };

        assert_eq!(controller.drive(&left, &SpeedConfig::default(), None), None);
        assert_eq!(controller.heading, HeadingState::default());
    }

    #[test]
    fn test_drive_with_body() {
        let mut controller = controller();
        let mut velocity = Vec3::new(0.0, -2.0, 0.0);
        let forward = ActionSample { forward: true, ..default() };

        let intent = controller.drive(&forward, &SpeedConfig::default(), Some(&mut velocity));

        assert_eq!(intent, Some(MovementIntent { x: 0, z: 1 }));
        assert!((velocity.z - 0.8).abs() < 1e-6);
        assert_eq!(velocity.y, -2.0);
    }

    #[test]
    fn test_yaw_eases_toward_target() {
        let mut controller = controller();
        controller.heading.rotation_target = 10.0;

        let mut yaw = 0.0;
        yaw = controller.smooth_yaw(yaw);
        assert_eq!(yaw, 1.0);
        for _ in 0..50 {
            let next = controller.smooth_yaw(yaw);
            assert!(next > yaw && next < 10.0);
            yaw = next;
        }
    }

    #[test]
    fn test_camera_starts_at_spawn() {
        let controller = controller();
        assert_eq!(controller.camera.position, CAMERA_START);
        assert_eq!(controller.camera.look_at, Vec3::ZERO);
    }
}
