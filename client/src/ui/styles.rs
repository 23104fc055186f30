//! Shared UI styles - neutral studio look on the light background

use bevy::prelude::*;

/// Translucent panel background
pub const PANEL_BACKGROUND: Color = Color::srgba(0.11, 0.11, 0.13, 0.88);

/// Button colors
pub const BUTTON_NORMAL: Color = Color::srgb(0.20, 0.20, 0.24);
pub const BUTTON_HOVERED: Color = Color::srgb(0.28, 0.28, 0.34);
pub const BUTTON_PRESSED: Color = Color::srgb(0.38, 0.44, 0.62);

/// Text colors
pub const TEXT_COLOR: Color = Color::srgb(0.92, 0.92, 0.94);
pub const TEXT_MUTED: Color = Color::srgb(0.58, 0.58, 0.64);

/// Accent for values the user is editing
pub const ACCENT_COLOR: Color = Color::srgb(0.47, 0.67, 1.0);

/// Standard menu button style
pub fn button_style() -> Node {
    Node {
        width: Val::Px(240.0),
        height: Val::Px(48.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        margin: UiRect::all(Val::Px(8.0)),
        ..default()
    }
}

/// Small square button used by the tuning panel
pub fn stepper_button_style() -> Node {
    Node {
        width: Val::Px(26.0),
        height: Val::Px(26.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

/// Standard button text style
pub fn button_text_style() -> TextFont {
    TextFont {
        font_size: 20.0,
        ..default()
    }
}

/// Title text style
pub fn title_text_style() -> TextFont {
    TextFont {
        font_size: 56.0,
        ..default()
    }
}

/// Small panel text style
pub fn panel_text_style() -> TextFont {
    TextFont {
        font_size: 14.0,
        ..default()
    }
}

/// Recolor any button on hover/press
pub fn button_interactions(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, mut bg_color) in buttons.iter_mut() {
        *bg_color = match interaction {
            Interaction::Pressed => BackgroundColor(BUTTON_PRESSED),
            Interaction::Hovered => BackgroundColor(BUTTON_HOVERED),
            Interaction::None => BackgroundColor(BUTTON_NORMAL),
        };
    }
}
