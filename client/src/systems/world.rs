//! World systems
//!
//! Ground slab and lighting around the character.

use bevy::light::light_consts::lux;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use shared::ShadowSettings;

// =============================================================================
// COMPONENTS
// =============================================================================

/// Root entity for all client-side world visuals
#[derive(Component)]
pub struct ClientWorldRoot;

/// Marker for the key directional light
#[derive(Component)]
pub struct KeyLight;

/// Half extent of the square ground slab
const GROUND_HALF_SIZE: f32 = 25.0;

/// Half thickness of the ground collider
const GROUND_HALF_THICKNESS: f32 = 0.1;

// =============================================================================
// SPAWNING
// =============================================================================

/// Spawn the static world: ground with a fixed collider, key light and ambient.
pub fn spawn_world(
    mut commands: Commands,
    world_roots: Query<Entity, With<ClientWorldRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    shadows: Res<ShadowSettings>,
) {
    if !world_roots.is_empty() {
        return;
    }

    let root = commands
        .spawn((
            ClientWorldRoot,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    // Top face at y = 0
    let ground = commands
        .spawn((
            Name::new("Ground"),
            Mesh3d(meshes.add(Cuboid::new(
                GROUND_HALF_SIZE * 2.0,
                GROUND_HALF_THICKNESS * 2.0,
                GROUND_HALF_SIZE * 2.0,
            ))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.78, 0.78, 0.76),
                perceptual_roughness: 1.0,
                ..default()
            })),
            RigidBody::Fixed,
            Collider::cuboid(GROUND_HALF_SIZE, GROUND_HALF_THICKNESS, GROUND_HALF_SIZE),
            Transform::from_xyz(0.0, -GROUND_HALF_THICKNESS, 0.0),
        ))
        .id();
    commands.entity(root).add_child(ground);

    let key_light = commands
        .spawn((
            KeyLight,
            DirectionalLight {
                illuminance: lux::OVERCAST_DAY,
                shadows_enabled: shadows.enabled,
                ..default()
            },
            Transform::from_xyz(4.0, 8.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id();
    commands.entity(root).add_child(key_light);

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        affects_lightmapped_meshes: true,
    });

    info!("World spawned (shadows: {})", shadows.enabled);
}
