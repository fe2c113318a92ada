use bevy::prelude::*;

use super::controller::PlacementController;
use super::input::PointerTracker;
use super::state::{PlacementSettings, PlacementTarget, StartScreen};

/// Attach a fresh controller when the tracked session starts.
pub fn begin_placement_session(
    mut commands: Commands,
    settings: Res<PlacementSettings>,
    mut tracker: ResMut<PointerTracker>,
    start_screens: Query<Entity, With<StartScreen>>,
) {
    commands.insert_resource(PlacementController::new(&settings));
    tracker.reset();

    for entity in &start_screens {
        commands.entity(entity).despawn();
    }

    info!("AR session running, placement controller attached");
}

/// Drop the controller and return the target to its fresh-load condition.
pub fn end_placement_session(
    mut commands: Commands,
    mut tracker: ResMut<PointerTracker>,
    mut targets: Query<(&mut Transform, &mut Visibility), With<PlacementTarget>>,
) {
    commands.remove_resource::<PlacementController>();
    tracker.reset();

    for (mut transform, mut visibility) in &mut targets {
        transform.translation = Vec3::ZERO;
        transform.rotation = Quat::IDENTITY;
        *visibility = Visibility::Hidden;
    }

    info!("AR session ended, placement controller detached");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::app_state::{ArSession, SessionRequest};
    use crate::engine::tracking::HitTestBackend;
    use crate::engine::tracking::ground_plane::{
        CameraSnapshot, GroundPlaneHitTest, computed_camera,
    };
    use crate::tools::placement::{PlacementChanged, PlacementPlugin, PointerAction};
    use bevy::state::app::StatesPlugin;

    fn placement_app() -> (App, Entity) {
        // Two metres up, looking straight down. No tracked camera entity,
        // so the snapshot stays as set here.
        let camera_pose = Transform::from_xyz(0.0, 2.0, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z);
        let mut ground = GroundPlaneHitTest::new(0.0);
        ground.set_camera(CameraSnapshot {
            camera: computed_camera(60.0, UVec2::new(1280, 720)),
            transform: GlobalTransform::from(camera_pose),
        });

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<ArSession>()
            .insert_resource(HitTestBackend::GroundPlane(ground))
            .add_plugins(PlacementPlugin);

        let target = app
            .world_mut()
            .spawn((
                PlacementTarget,
                Transform::from_scale(Vec3::splat(0.3)),
                Visibility::Hidden,
            ))
            .id();

        app.update();
        (app, target)
    }

    fn start_session(app: &mut App) {
        app.world_mut().send_event(SessionRequest::Start);
        app.update();
        app.update();
    }

    fn placement_changes(app: &App) -> Vec<PlacementChanged> {
        app.world()
            .resource::<Events<PlacementChanged>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    #[test]
    fn controller_exists_only_while_running() {
        let (mut app, _) = placement_app();
        assert!(app.world().get_resource::<PlacementController>().is_none());

        start_session(&mut app);
        assert!(app.world().get_resource::<PlacementController>().is_some());

        app.world_mut().send_event(SessionRequest::End);
        app.update();
        app.update();
        assert!(app.world().get_resource::<PlacementController>().is_none());
    }

    #[test]
    fn taps_are_ignored_before_the_session_starts() {
        let (mut app, target) = placement_app();

        app.world_mut().send_event(PointerAction::Tap(Vec2::splat(0.5)));
        app.update();

        assert_eq!(app.world().get::<Visibility>(target), Some(&Visibility::Hidden));
    }

    #[test]
    fn tap_places_target_on_ground_below_camera() {
        let (mut app, target) = placement_app();
        start_session(&mut app);

        app.world_mut().send_event(PointerAction::Tap(Vec2::splat(0.5)));
        app.update();

        let transform = app.world().get::<Transform>(target).unwrap();
        assert!(transform.translation.distance(Vec3::ZERO) < 1e-3);
        assert_eq!(transform.scale, Vec3::splat(0.3));
        assert_eq!(app.world().get::<Visibility>(target), Some(&Visibility::Visible));
        assert!(matches!(
            placement_changes(&app).as_slice(),
            [PlacementChanged::Placed { first: true, .. }]
        ));
        assert!(app.world().resource::<PlacementController>().state().placed);
    }

    #[test]
    fn ending_the_session_hides_and_resets_target() {
        let (mut app, target) = placement_app();
        start_session(&mut app);

        app.world_mut().send_event(PointerAction::Tap(Vec2::new(0.7, 0.6)));
        app.update();
        assert_eq!(app.world().get::<Visibility>(target), Some(&Visibility::Visible));

        app.world_mut().send_event(SessionRequest::End);
        app.update();
        app.update();

        let transform = app.world().get::<Transform>(target).unwrap();
        assert_eq!(transform.translation, Vec3::ZERO);
        assert_eq!(transform.rotation, Quat::IDENTITY);
        assert_eq!(transform.scale, Vec3::splat(0.3));
        assert_eq!(app.world().get::<Visibility>(target), Some(&Visibility::Hidden));
    }

    #[test]
    fn start_screen_is_removed_when_session_starts() {
        let (mut app, _) = placement_app();
        let screen = app.world_mut().spawn(StartScreen).id();

        start_session(&mut app);

        assert!(app.world().get_entity(screen).is_err());
    }
}
