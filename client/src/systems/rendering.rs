//! Rendering systems
//!
//! Background color and the follow camera.

use bevy::prelude::*;
use shared::{CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START};

use super::character::FollowCamera;

/// Light grey backdrop behind the scene (#ececec)
pub const BACKGROUND_COLOR: Color = Color::srgb(236.0 / 255.0, 236.0 / 255.0, 236.0 / 255.0);

/// One-time rendering setup.
pub fn setup_rendering(mut commands: Commands) {
    commands.insert_resource(ClearColor(BACKGROUND_COLOR));

    commands.spawn((
        FollowCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            ..default()
        }),
        // Starts off to the side; the controller pulls it behind the character.
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Client rendering initialized");
}
