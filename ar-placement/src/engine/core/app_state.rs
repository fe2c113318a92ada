use bevy::prelude::*;

/// Whether the external AR runtime reports a running tracked session.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ArSession {
    #[default]
    Idle,
    Running,
}

/// Request to enter or leave the tracked session, from UI or the host page.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRequest {
    Start,
    End,
}

impl SessionRequest {
    pub fn target_state(self) -> ArSession {
        match self {
            Self::Start => ArSession::Running,
            Self::End => ArSession::Idle,
        }
    }
}

pub fn handle_session_requests(
    mut requests: EventReader<SessionRequest>,
    state: Res<State<ArSession>>,
    mut next_state: ResMut<NextState<ArSession>>,
) {
    // Last request of the frame decides
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    let target = request.target_state();
    if *state.get() == target {
        debug!("Ignoring {:?}, session already {:?}", request, target);
        return;
    }

    info!("→ Transitioning AR session to {:?}", target);
    next_state.set(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn session_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<ArSession>()
            .add_event::<SessionRequest>()
            .add_systems(Update, handle_session_requests);
        app
    }

    fn current(app: &App) -> ArSession {
        *app.world().resource::<State<ArSession>>().get()
    }

    #[test]
    fn start_then_end_round_trips_state() {
        let mut app = session_app();
        app.update();
        assert_eq!(current(&app), ArSession::Idle);

        app.world_mut().send_event(SessionRequest::Start);
        app.update();
        app.update();
        assert_eq!(current(&app), ArSession::Running);

        app.world_mut().send_event(SessionRequest::End);
        app.update();
        app.update();
        assert_eq!(current(&app), ArSession::Idle);
    }

    #[test]
    fn last_request_in_frame_wins() {
        let mut app = session_app();
        app.world_mut().send_event(SessionRequest::Start);
        app.world_mut().send_event(SessionRequest::End);
        app.update();
        app.update();

        assert_eq!(current(&app), ArSession::Idle);
    }
}
