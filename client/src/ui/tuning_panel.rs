//! "Character Control" tuning panel
//!
//! One row per tunable with -/+ steppers. Every press moves the value one slider
//! step and clamps it to the slider range. Values are shown in display units
//! (rotation speed in degrees).

use bevy::prelude::*;
use shared::{SpeedConfig, Tunable};

use super::styles::*;

pub struct TuningPanelPlugin;

impl Plugin for TuningPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_tuning_panel);
        app.add_systems(
            Update,
            (
                button_interactions,
                handle_tuning_buttons,
                refresh_tuning_values.run_if(resource_changed::<SpeedConfig>),
            )
                .chain(),
        );
    }
}

/// Marker for the panel root
#[derive(Component)]
struct TuningPanelRoot;

/// A stepper button: moves `tunable` by `steps` slider steps
#[derive(Component, Clone, Copy)]
struct TuningButton {
    tunable: Tunable,
    steps: i32,
}

/// Text showing the current value of a tunable
#[derive(Component, Clone, Copy)]
struct TuningValueText(Tunable);

fn spawn_tuning_panel(mut commands: Commands) {
    commands
        .spawn((
            TuningPanelRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(10.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            BorderRadius::all(Val::Px(6.0)),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Character Control"),
                panel_text_style(),
                TextColor(TEXT_MUTED),
            ));

            for tunable in Tunable::ALL {
                spawn_row(panel, tunable);
            }
        });
}

fn spawn_row(panel: &mut ChildSpawnerCommands<'_>, tunable: Tunable) {
    panel
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(tunable.label()),
                panel_text_style(),
                TextColor(TEXT_COLOR),
                Node {
                    width: Val::Px(130.0),
                    ..default()
                },
            ));

            spawn_stepper(row, "-", TuningButton { tunable, steps: -1 });

            row.spawn((
                TuningValueText(tunable),
                Text::new(format_value(tunable, &SpeedConfig::default())),
                panel_text_style(),
                TextColor(ACCENT_COLOR),
                Node {
                    width: Val::Px(48.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
            ));

            spawn_stepper(row, "+", TuningButton { tunable, steps: 1 });
        });
}

fn spawn_stepper(row: &mut ChildSpawnerCommands<'_>, text: &str, button: TuningButton) {
    row.spawn((
        Button,
        button,
        stepper_button_style(),
        BackgroundColor(BUTTON_NORMAL),
        BorderRadius::all(Val::Px(3.0)),
    ))
    .with_children(|btn| {
        btn.spawn((Text::new(text), panel_text_style(), TextColor(TEXT_COLOR)));
    });
}

fn format_value(tunable: Tunable, speeds: &SpeedConfig) -> String {
    let value = speeds.display_value(tunable);
    match tunable {
        Tunable::RotationSpeed => format!("{value:.1}°"),
        Tunable::WalkSpeed | Tunable::RunSpeed => format!("{value:.1}"),
    }
}

fn handle_tuning_buttons(
    buttons: Query<(&Interaction, &TuningButton), Changed<Interaction>>,
    mut speeds: ResMut<SpeedConfig>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let before = speeds.display_value(button.tunable);
        // Leave the resource untouched at the limits
        let mut candidate = *speeds;
        let after = candidate.nudge(button.tunable, button.steps);
        if after != before {
            *speeds = candidate;
        }
    }
}

fn refresh_tuning_values(speeds: Res<SpeedConfig>, mut texts: Query<(&TuningValueText, &mut Text)>) {
    for (value_text, mut text) in texts.iter_mut() {
        text.0 = format_value(value_text.0, &speeds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        let speeds = SpeedConfig::default();
        assert_eq!(format_value(Tunable::WalkSpeed, &speeds), "0.8");
        assert_eq!(format_value(Tunable::RunSpeed, &speeds), "1.4");
        assert_eq!(format_value(Tunable::RotationSpeed, &speeds), "0.5°");
    }

    /// Press one stepper once and report whether `SpeedConfig` was marked changed
    fn press_once(speeds: SpeedConfig, button: TuningButton) -> (SpeedConfig, bool) {
        let mut app = App::new();
        app.insert_resource(speeds);
        app.add_systems(Update, handle_tuning_buttons);
        app.world_mut().spawn((Interaction::Pressed, button));

        let before = app.world().get_resource_change_ticks::<SpeedConfig>().unwrap().changed;
        app.update();
        let after = app.world().get_resource_change_ticks::<SpeedConfig>().unwrap().changed;

        (*app.world().resource::<SpeedConfig>(), after != before)
    }

    #[test]
    fn test_stepper_at_limit_leaves_settings_unchanged() {
        let speeds = SpeedConfig { run_speed: 2.0, ..default() };
        let plus = TuningButton { tunable: Tunable::RunSpeed, steps: 1 };

        let (speeds, changed) = press_once(speeds, plus);

        assert_eq!(speeds.run_speed, 2.0);
        assert!(!changed);
    }

    #[test]
    fn test_stepper_moves_one_step() {
        let plus = TuningButton { tunable: Tunable::RunSpeed, steps: 1 };

        let (speeds, changed) = press_once(SpeedConfig::default(), plus);

        assert_eq!(speeds.run_speed, 1.5);
        assert!(changed);
    }
}
