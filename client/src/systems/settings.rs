//! Character settings: startup load and change logging

use std::path::PathBuf;

use bevy::prelude::*;
use shared::{load_settings_from_file, SettingsFile, SpeedConfig, Tunable};

/// Location of `character_controls.ron`
#[derive(Resource, Clone, Debug)]
pub struct SettingsPath(pub PathBuf);

/// Read the settings file into `SpeedConfig` and `ShadowSettings`.
/// Falls back to the slider defaults when the file is missing or malformed.
pub fn load_settings(mut commands: Commands, path: Res<SettingsPath>) {
    let file = match load_settings_from_file(&path.0) {
        Ok(file) => {
            info!("Loaded character settings from {:?}", path.0);
            file
        }
        Err(e) => {
            warn!("Using default character settings: {e}");
            SettingsFile::default()
        }
    };

    let (speeds, clamped) = file.speed_config();
    for tunable in clamped {
        warn!(
            "{} out of range in settings file, using {:.1}",
            tunable.label(),
            speeds.display_value(tunable)
        );
    }

    commands.insert_resource(speeds);
    commands.insert_resource(file.shadow_settings());
}

/// Runs whenever `SpeedConfig` changes (startup load or tuning panel).
pub fn log_speed_changes(speeds: Res<SpeedConfig>) {
    info!(
        "Character settings: {} {:.1}, {} {:.1}, {} {:.1} deg",
        Tunable::WalkSpeed.label(),
        speeds.walk_speed,
        Tunable::RunSpeed.label(),
        speeds.run_speed,
        Tunable::RotationSpeed.label(),
        speeds.display_value(Tunable::RotationSpeed),
    );
}
