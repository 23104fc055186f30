//! Walkabout client - a keyboard-driven capsule character with a follow camera
//!
//! Built on Bevy 0.17 / bevy_rapier3d 0.32

mod input;
mod states;
mod systems;
mod ui;

use std::path::PathBuf;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier3d::prelude::*;
use shared::{KeyboardMap, ShadowSettings, SpeedConfig, SETTINGS_FILE_NAME};
use states::GameState;

/// Get the asset path - for bundled macOS apps, use path relative to executable
fn get_asset_path() -> PathBuf {
    // Try to find assets relative to executable (for .app bundles)
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let bundled_assets = exe_dir.join("assets");
            if bundled_assets.exists() {
                return bundled_assets;
            }
        }
    }
    // Fall back to default "assets" folder (for development)
    PathBuf::from("assets")
}

fn main() {
    let asset_path = get_asset_path();
    let settings_path = asset_path.join(SETTINGS_FILE_NAME);

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Walkabout".to_string(),
                    resolution: WindowResolution::new(1280, 720),
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: asset_path.to_string_lossy().to_string(),
                ..default()
            }),
    );

    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default());

    // Game state machine
    app.init_state::<GameState>();

    // Settings: defaults until the file is read at startup
    app.insert_resource(systems::SettingsPath(settings_path));
    app.init_resource::<SpeedConfig>();
    app.init_resource::<ShadowSettings>();
    app.init_resource::<KeyboardMap>();

    // UI plugins
    app.add_plugins(ui::PauseMenuPlugin);
    app.add_plugins(ui::TuningPanelPlugin);

    // Settings must land before the light (shadow flag) is spawned.
    app.add_systems(
        Startup,
        (
            systems::load_settings,
            systems::setup_rendering,
            systems::spawn_world,
            systems::spawn_character,
        )
            .chain(),
    );

    app.add_systems(
        Update,
        (
            input::log_key_releases,
            systems::log_speed_changes.run_if(resource_changed::<SpeedConfig>),
        ),
    );

    // The character ticks once per frame while playing; pausing unhooks it.
    app.add_systems(
        Update,
        systems::update_character.run_if(in_state(GameState::Playing)),
    );

    info!("Starting walkabout client");
    app.run();
}
