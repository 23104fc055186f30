//! Tunable character settings and the on-disk settings file.
//!
//! The client reads `character_controls.ron` once at startup; the tuning panel
//! edits [`SpeedConfig`] live afterwards.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the settings file inside the asset directory
pub const SETTINGS_FILE_NAME: &str = "character_controls.ron";

/// The three live-tunable character parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tunable {
    WalkSpeed,
    RunSpeed,
    RotationSpeed,
}

/// Slider range of one tunable, in display units (degrees for rotation)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunableRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl TunableRange {
    /// Clamp into range and snap to the nearest step above `min`
    pub fn snap(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        // Round away float noise so 0.1 + 0.2 lands on 0.3
        let snapped = ((self.min + steps * self.step) * 1000.0).round() / 1000.0;
        snapped.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Tunable {
    pub const ALL: [Tunable; 3] = [Tunable::WalkSpeed, Tunable::RunSpeed, Tunable::RotationSpeed];

    pub fn label(self) -> &'static str {
        match self {
            Tunable::WalkSpeed => "WALK_SPEED",
            Tunable::RunSpeed => "RUN_SPEED",
            Tunable::RotationSpeed => "ROTATION_SPEED",
        }
    }

    pub fn range(self) -> TunableRange {
        match self {
            Tunable::WalkSpeed => TunableRange { min: 0.1, max: 4.0, step: 0.1, default: 0.8 },
            Tunable::RunSpeed => TunableRange { min: 1.0, max: 2.0, step: 0.1, default: 1.4 },
            Tunable::RotationSpeed => TunableRange { min: 0.1, max: 5.0, step: 0.1, default: 0.5 },
        }
    }
}

/// Speeds read by the character controller every tick.
///
/// `rotation_speed` is radians per tick; the panel and the settings file use degrees.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SpeedConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub rotation_speed: f32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            walk_speed: Tunable::WalkSpeed.range().default,
            run_speed: Tunable::RunSpeed.range().default,
            rotation_speed: Tunable::RotationSpeed.range().default.to_radians(),
        }
    }
}

impl SpeedConfig {
    /// Value of a tunable in display units
    pub fn display_value(&self, tunable: Tunable) -> f32 {
        match tunable {
            Tunable::WalkSpeed => self.walk_speed,
            Tunable::RunSpeed => self.run_speed,
            Tunable::RotationSpeed => self.rotation_speed.to_degrees(),
        }
    }

    /// Set a tunable from display units, clamped and snapped to its slider.
    /// Returns the value actually stored (display units).
    pub fn set_display_value(&mut self, tunable: Tunable, value: f32) -> f32 {
        let snapped = tunable.range().snap(value);
        match tunable {
            Tunable::WalkSpeed => self.walk_speed = snapped,
            Tunable::RunSpeed => self.run_speed = snapped,
            Tunable::RotationSpeed => self.rotation_speed = snapped.to_radians(),
        }
        snapped
    }

    /// Move a tunable by whole slider steps (negative steps go down)
    pub fn nudge(&mut self, tunable: Tunable, steps: i32) -> f32 {
        let range = tunable.range();
        let current = self.display_value(tunable);
        self.set_display_value(tunable, current + steps as f32 * range.step)
    }

    pub fn speed(&self, running: bool) -> f32 {
        if running {
            self.run_speed
        } else {
            self.walk_speed
        }
    }
}

/// Whether the key light casts shadows
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShadowSettings {
    pub enabled: bool,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Contents of `character_controls.ron`. Missing fields take the slider defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub rotation_speed_degrees: f32,
    pub shadows: bool,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            walk_speed: Tunable::WalkSpeed.range().default,
            run_speed: Tunable::RunSpeed.range().default,
            rotation_speed_degrees: Tunable::RotationSpeed.range().default,
            shadows: true,
        }
    }
}

impl SettingsFile {
    /// Build the live speed config.
    /// Values outside a slider's range are clamped; the offending tunables are returned.
    pub fn speed_config(&self) -> (SpeedConfig, Vec<Tunable>) {
        let mut config = SpeedConfig::default();
        let mut clamped = Vec::new();
        let requested = [
            (Tunable::WalkSpeed, self.walk_speed),
            (Tunable::RunSpeed, self.run_speed),
            (Tunable::RotationSpeed, self.rotation_speed_degrees),
        ];
        for (tunable, value) in requested {
            if !value.is_finite() {
                clamped.push(tunable);
                continue;
            }
            if !tunable.range().contains(value) {
                clamped.push(tunable);
            }
            config.set_display_value(tunable, value);
        }
        (config, clamped)
    }

    pub fn shadow_settings(&self) -> ShadowSettings {
        ShadowSettings { enabled: self.shadows }
    }
}

/// Parse settings from RON text
pub fn load_settings_from_str(text: &str) -> Result<SettingsFile, String> {
    ron::from_str(text).map_err(|e| format!("ron parse failed: {e}"))
}

/// Load settings from a file path (RON)
pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<SettingsFile, String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| format!("failed to read {path:?}: {e}"))?;
    load_settings_from_str(&text)
}
