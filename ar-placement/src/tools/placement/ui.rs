use bevy::prelude::*;

use super::state::{StartArButton, StartScreen};

pub const START_SCREEN_BACKGROUND: Color = Color::srgba(0.05, 0.06, 0.08, 0.92);
pub const START_BUTTON_IDLE: Color = Color::srgb(0.12, 0.45, 0.70);
pub const START_BUTTON_HOVERED: Color = Color::srgb(0.16, 0.55, 0.82);
pub const START_BUTTON_PRESSED: Color = Color::srgb(0.08, 0.32, 0.52);

// Full-screen splash with a single start button
pub fn spawn_start_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
            BackgroundColor(START_SCREEN_BACKGROUND),
            StartScreen,
            Name::new("StartScreen"),
        ))
        .with_children(|screen| {
            screen.spawn((
                Text::new("Point the camera at the floor, then tap to place the cube"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            screen
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(28.0), Val::Px(14.0)),
                        ..default()
                    },
                    BackgroundColor(START_BUTTON_IDLE),
                    BorderRadius::all(Val::Px(8.0)),
                    StartArButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Start AR"),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}
