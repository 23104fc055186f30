//! Controlled character: spawning and the per-frame locomotion/camera update.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use shared::{
    CharacterController, ContainerYaw, KeyboardMap, SpeedConfig, CAMERA_RIG_OFFSET, CAPSULE_HALF_HEIGHT,
    CAPSULE_RADIUS, LOOK_AT_OFFSET, MODEL_OFFSET_Y, MODEL_SCALE,
};

// =============================================================================
// COMPONENTS
// =============================================================================

/// Marker for the camera driven by the character controller
#[derive(Component)]
pub struct FollowCamera;

/// The turning group under the physics body; anchors and the visual hang off it
#[derive(Component)]
pub struct CharacterContainer;

/// Camera position target (child of the container)
#[derive(Component)]
pub struct CameraRigAnchor;

/// Camera look-at target (child of the container)
#[derive(Component)]
pub struct CameraLookAnchor;

/// Root of the character visual
#[derive(Component)]
pub struct CharacterModel;

/// Where the body is dropped in at startup
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);

// =============================================================================
// SPAWNING
// =============================================================================

/// Spawn the physics body with its turning container, camera anchors and visual.
pub fn spawn_character(
    mut commands: Commands,
    existing: Query<(), With<CharacterController>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !existing.is_empty() {
        return;
    }

    let look_at_anchor = commands
        .spawn((
            CameraLookAnchor,
            Name::new("CameraLookAnchor"),
            Transform::from_translation(LOOK_AT_OFFSET),
            Visibility::default(),
        ))
        .id();

    let camera_rig = commands
        .spawn((
            CameraRigAnchor,
            Name::new("CameraRigAnchor"),
            Transform::from_translation(CAMERA_RIG_OFFSET),
            Visibility::default(),
        ))
        .id();

    // The visual's origin sits at the feet; the mesh is built in unscaled model units
    // so that after MODEL_SCALE it matches the collider.
    let body_height = 2.0 * (CAPSULE_HALF_HEIGHT + CAPSULE_RADIUS) / MODEL_SCALE;
    let body_radius = CAPSULE_RADIUS / MODEL_SCALE;
    let skin = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.55, 0.35),
        perceptual_roughness: 0.8,
        ..default()
    });
    let trim = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.2, 0.25),
        ..default()
    });

    let model = commands
        .spawn((
            CharacterModel,
            Name::new("CharacterModel"),
            Transform::from_xyz(0.0, MODEL_OFFSET_Y, 0.0).with_scale(Vec3::splat(MODEL_SCALE)),
            Visibility::default(),
        ))
        .with_children(|model| {
            model.spawn((
                Mesh3d(meshes.add(Capsule3d::new(body_radius, body_height - 2.0 * body_radius))),
                MeshMaterial3d(skin),
                Transform::from_xyz(0.0, body_height * 0.5, 0.0),
            ));
            // Visor on the +Z face so the facing is readable
            model.spawn((
                Mesh3d(meshes.add(Cuboid::new(body_radius * 1.2, body_radius * 0.4, body_radius * 0.5))),
                MeshMaterial3d(trim),
                Transform::from_xyz(0.0, body_height * 0.78, body_radius * 0.85),
            ));
        })
        .id();

    let container = commands
        .spawn((
            CharacterContainer,
            ContainerYaw::default(),
            Name::new("CharacterContainer"),
            Transform::default(),
            Visibility::default(),
        ))
        .add_children(&[look_at_anchor, camera_rig, model])
        .id();

    commands
        .spawn((
            CharacterController::new(container, camera_rig, Some(look_at_anchor)),
            Name::new("Character"),
            RigidBody::Dynamic,
            Collider::capsule_y(CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            Transform::from_translation(SPAWN_POSITION),
            Visibility::default(),
        ))
        .add_child(container);

    info!("Character spawned at {:?}", SPAWN_POSITION);
}

// =============================================================================
// PER-FRAME UPDATE
// =============================================================================

/// Drive every controlled character one tick, then move the follow camera.
///
/// Missing pieces are skipped silently: without a `Velocity` the locomotion step is
/// skipped, without a look-at anchor the camera keeps its orientation.
///
/// Anchor world positions are composed here from the body's `GlobalTransform`, the
/// container's freshly eased `Transform` and the anchor's local `Transform`, so the
/// camera targets already include this tick's yaw. Anchors without a container
/// fall back to their propagated `GlobalTransform`.
pub fn update_character(
    keyboard: Res<ButtonInput<KeyCode>>,
    keymap: Res<KeyboardMap>,
    speeds: Res<SpeedConfig>,
    mut characters: Query<(&mut CharacterController, Option<&mut Velocity>, Option<&GlobalTransform>)>,
    mut containers: Query<(&mut Transform, &mut ContainerYaw), Without<FollowCamera>>,
    anchor_locals: Query<&Transform, (Without<ContainerYaw>, Without<FollowCamera>)>,
    globals: Query<&GlobalTransform>,
    mut cameras: Query<&mut Transform, (With<FollowCamera>, Without<ContainerYaw>)>,
) {
    let actions = keymap.sample(&keyboard);

    for (mut controller, velocity, body_global) in characters.iter_mut() {
        // --- Locomotion ---
        let mut linvel = velocity.as_ref().map(|v| v.linvel);
        controller.drive(&actions, &speeds, linvel.as_mut());
        if let (Some(mut velocity), Some(linvel)) = (velocity, linvel) {
            velocity.linvel = linvel;
        }

        // --- Container yaw ---
        let body_global = body_global.copied().unwrap_or(GlobalTransform::IDENTITY);
        let container_world = containers
            .get_mut(controller.container)
            .ok()
            .map(|(mut transform, mut yaw)| {
                yaw.0 = controller.smooth_yaw(yaw.0);
                transform.rotation = Quat::from_rotation_y(yaw.0);
                body_global.mul_transform(*transform)
            });

        // --- Camera ---
        let anchor_world = |anchor: Entity| -> Option<Vec3> {
            match (container_world, anchor_locals.get(anchor)) {
                (Some(container), Ok(local)) => Some(container.transform_point(local.translation)),
                _ => globals.get(anchor).ok().map(|global| global.translation()),
            }
        };

        let Some(rig) = anchor_world(controller.camera_rig) else {
            continue;
        };
        let look_anchor = controller.look_at_anchor.and_then(anchor_world);

        let pose = controller.follow(rig, look_anchor);

        let Ok(mut camera) = cameras.single_mut() else {
            continue;
        };
        camera.translation = pose.position;
        if let Some(target) = pose.look_at {
            camera.look_at(target, Vec3::Y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::transform::TransformPlugin;
    use shared::CAMERA_START;

    const EPS: f32 = 1e-5;

    struct Rig {
        body: Entity,
        container: Entity,
        camera_rig: Entity,
        camera: Entity,
        body_position: Vec3,
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(TransformPlugin);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<KeyboardMap>();
        app.init_resource::<SpeedConfig>();
        app.add_systems(Update, update_character);
        app
    }

    /// Body -> container -> anchors, the same tree `spawn_character` builds
    fn spawn_rig(app: &mut App, with_body: bool, with_look_anchor: bool) -> Rig {
        let body_position = Vec3::new(1.0, 0.5, 2.0);
        let world = app.world_mut();

        let body = world.spawn(Transform::from_translation(body_position)).id();
        let container = world
            .spawn((Transform::default(), ContainerYaw::default(), ChildOf(body)))
            .id();
        let camera_rig = world
            .spawn((Transform::from_translation(CAMERA_RIG_OFFSET), ChildOf(container)))
            .id();
        let look_anchor = with_look_anchor.then(|| {
            world
                .spawn((Transform::from_translation(LOOK_AT_OFFSET), ChildOf(container)))
                .id()
        });
        let camera = world
            .spawn((FollowCamera, Transform::from_translation(CAMERA_START)))
            .id();

        let mut body_entity = world.entity_mut(body);
        body_entity.insert(CharacterController::new(container, camera_rig, look_anchor));
        if with_body {
            body_entity.insert(Velocity::linear(Vec3::new(0.0, -1.0, 0.0)));
        }

        Rig { body, container, camera_rig, camera, body_position }
    }

    #[test]
    fn test_camera_targets_include_this_tick_yaw() {
        let mut app = test_app();
        app.world_mut().resource_mut::<SpeedConfig>().rotation_speed = 1.0;
        let rig = spawn_rig(&mut app, true, true);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyA);

        app.update();

        let world = app.world();

        let velocity = world.get::<Velocity>(rig.body).unwrap();
        assert!((velocity.linvel.x - 0.8).abs() < EPS);
        assert!(velocity.linvel.z.abs() < EPS);
        assert_eq!(velocity.linvel.y, -1.0);

        let controller = world.get::<CharacterController>(rig.body).unwrap();
        assert!((controller.heading.rotation_target - 1.0).abs() < EPS);

        let yaw = world.get::<ContainerYaw>(rig.container).unwrap();
        assert!((yaw.0 - 0.1).abs() < EPS);

        // Targets are taken after the container turned by 0.1 rad this tick
        let turned = Quat::from_rotation_y(0.1);
        let rig_target = rig.body_position + turned * CAMERA_RIG_OFFSET;
        let look_target = rig.body_position + turned * LOOK_AT_OFFSET;

        let camera = world.get::<Transform>(rig.camera).unwrap();
        assert!((camera.translation - CAMERA_START.lerp(rig_target, 0.1)).length() < EPS);
        assert!((controller.camera.look_at - Vec3::ZERO.lerp(look_target, 0.1)).length() < EPS);

        // Propagation at the end of the frame lands the anchor on the same target
        let propagated = world.get::<GlobalTransform>(rig.camera_rig).unwrap().translation();
        assert!((propagated - rig_target).length() < EPS);
    }

    #[test]
    fn test_missing_body_still_moves_camera() {
        let mut app = test_app();
        let rig = spawn_rig(&mut app, false, true);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyA);

        app.update();

        let world = app.world();
        let controller = world.get::<CharacterController>(rig.body).unwrap();
        assert_eq!(controller.heading.rotation_target, 0.0);

        let rig_target = rig.body_position + CAMERA_RIG_OFFSET;
        let camera = world.get::<Transform>(rig.camera).unwrap();
        assert!((camera.translation - CAMERA_START.lerp(rig_target, 0.1)).length() < EPS);
    }

    #[test]
    fn test_missing_look_anchor_keeps_orientation() {
        let mut app = test_app();
        let rig = spawn_rig(&mut app, true, false);
        let before = app.world().get::<Transform>(rig.camera).unwrap().rotation;

        app.update();

        let world = app.world();
        let camera = world.get::<Transform>(rig.camera).unwrap();
        assert_eq!(camera.rotation, before);
        let rig_target = rig.body_position + CAMERA_RIG_OFFSET;
        assert!((camera.translation - CAMERA_START.lerp(rig_target, 0.1)).length() < EPS);

        // no input: residual velocity untouched
        let velocity = world.get::<Velocity>(rig.body).unwrap();
        assert_eq!(velocity.linvel, Vec3::new(0.0, -1.0, 0.0));
    }
}
