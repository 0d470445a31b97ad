//! Test utilities for plugin testing

use crate::plugins::simulation::SimulationPlugin;
use crate::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

/// Creates a headless test app with the simulation plugin and default configuration.
///
/// Each `app.update()` advances virtual time by exactly one emission period, so
/// every frame runs the integration pass once and the emission task once.
pub fn create_test_app() -> App {
    create_test_app_with_config(SimulationConfig::default())
}

pub fn create_test_app_with_config(config: SimulationConfig) -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        bevy::state::app::StatesPlugin,
        SimulationPlugin::with_config(config),
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / crate::physics::constants::EMISSION_RATE_HZ,
    )));

    app
}

/// Queues a command for the next frame.
pub fn send_command(app: &mut App, command: SimulationCommand) {
    app.world_mut().send_event(command);
}

/// Takes every event the engine has produced since the last drain.
pub fn drain_events(app: &mut App) -> Vec<SimulationEvent> {
    app.world_mut()
        .resource_mut::<Events<SimulationEvent>>()
        .drain()
        .collect()
}

pub fn current_state(app: &App) -> SimulationState {
    *app.world().resource::<State<SimulationState>>().get()
}

/// Updates until a `finished` event appears or `max_frames` elapse.
///
/// Returns every event produced along the way, in order.
pub fn run_until_finished(app: &mut App, max_frames: usize) -> Vec<SimulationEvent> {
    let mut collected = Vec::new();
    for _ in 0..max_frames {
        app.update();
        let events = drain_events(app);
        let finished = events
            .iter()
            .any(|event| matches!(event, SimulationEvent::Finished(_)));
        collected.extend(events);
        if finished {
            break;
        }
    }
    collected
}
