use bevy::prelude::*;

use super::state::StartArButton;
use super::ui::{START_BUTTON_HOVERED, START_BUTTON_IDLE, START_BUTTON_PRESSED};
use crate::engine::core::app_state::SessionRequest;

// Start AR button requests the tracked session
pub fn start_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<StartArButton>),
    >,
    mut requests: EventWriter<SessionRequest>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                requests.write(SessionRequest::Start);
                *bg = BackgroundColor(START_BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(START_BUTTON_HOVERED),
            Interaction::None => *bg = BackgroundColor(START_BUTTON_IDLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_app(interaction: Interaction) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<SessionRequest>()
            .add_systems(Update, start_button_interaction);
        app.world_mut().spawn((
            Button,
            interaction,
            BackgroundColor(START_BUTTON_IDLE),
            StartArButton,
        ));
        app.update();
        app
    }

    fn requests(app: &App) -> Vec<SessionRequest> {
        app.world()
            .resource::<Events<SessionRequest>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    #[test]
    fn pressing_start_requests_session() {
        let app = button_app(Interaction::Pressed);
        assert_eq!(requests(&app), vec![SessionRequest::Start]);
    }

    #[test]
    fn hovering_only_recolours() {
        let mut app = button_app(Interaction::Hovered);
        assert!(requests(&app).is_empty());

        let bg = app
            .world_mut()
            .query_filtered::<&BackgroundColor, With<StartArButton>>()
            .single(app.world())
            .unwrap();
        assert_eq!(bg.0, START_BUTTON_HOVERED);
    }
}
