//! Pause menu UI (escape menu)
//!
//! While paused the character stops ticking; the tuning panel stays live.

use bevy::app::AppExit;
use bevy::prelude::*;

use super::styles::*;
use crate::states::GameState;

pub struct PauseMenuPlugin;

impl Plugin for PauseMenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Paused), spawn_pause_menu);
        app.add_systems(OnExit(GameState::Paused), despawn_pause_menu);
        app.add_systems(Update, handle_pause_actions.run_if(in_state(GameState::Paused)));
        app.add_systems(Update, toggle_pause);
    }
}

/// Marker for the pause menu root
#[derive(Component)]
struct PauseMenuRoot;

/// Pause menu button actions
#[derive(Component, Clone, Copy)]
enum PauseButton {
    Resume,
    Exit,
}

fn spawn_pause_menu(mut commands: Commands) {
    commands
        .spawn((
            PauseMenuRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.55)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                title_text_style(),
                TextColor(TEXT_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    ..default()
                },
            ));

            spawn_button(parent, "RESUME", PauseButton::Resume);
            spawn_button(parent, "EXIT", PauseButton::Exit);

            parent.spawn((
                Text::new("Press ESC to resume"),
                panel_text_style(),
                TextColor(TEXT_MUTED),
                Node {
                    margin: UiRect::top(Val::Px(24.0)),
                    ..default()
                },
            ));
        });
}

fn spawn_button(parent: &mut ChildSpawnerCommands<'_>, text: &str, action: PauseButton) {
    parent
        .spawn((
            Button,
            action,
            button_style(),
            BackgroundColor(BUTTON_NORMAL),
            BorderRadius::all(Val::Px(4.0)),
        ))
        .with_children(|btn| {
            btn.spawn((Text::new(text), button_text_style(), TextColor(TEXT_COLOR)));
        });
}

fn despawn_pause_menu(mut commands: Commands, query: Query<Entity, With<PauseMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

fn handle_pause_actions(
    buttons: Query<(&Interaction, &PauseButton), Changed<Interaction>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for (interaction, action) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match action {
            PauseButton::Resume => {
                info!("Resuming");
                next_state.set(GameState::Playing);
            }
            PauseButton::Exit => {
                info!("Exiting...");
                exit.write(AppExit::Success);
            }
        }
    }
}

fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    match state.get() {
        GameState::Playing => {
            info!("Paused");
            next_state.set(GameState::Paused);
        }
        GameState::Paused => {
            info!("Resuming");
            next_state.set(GameState::Playing);
        }
    }
}
