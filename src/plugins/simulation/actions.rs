//! Action handlers for simulation commands
//!
//! Commands are applied in arrival order within a frame, so a `start`
//! followed by a `reset` leaves the controller idle. Starting a run that has
//! already finished resends its final `update` and `finished` events.

use crate::prelude::*;

/// Resolves the state the controller will be in once pending transitions apply.
fn effective_state(
    current: &State<SimulationState>,
    next: &NextState<SimulationState>,
) -> SimulationState {
    match next {
        NextState::Pending(state) => *state,
        NextState::Unchanged => *current.get(),
    }
}

pub fn apply_simulation_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    mut engine: ResMut<Engine>,
    mut progress: ResMut<RunProgress>,
    current_state: Res<State<SimulationState>>,
    mut next_state: ResMut<NextState<SimulationState>>,
    mut events: EventWriter<SimulationEvent>,
) {
    let initial = effective_state(&current_state, &next_state);
    let mut state = initial;

    for command in commands_reader.read() {
        match command {
            SimulationCommand::Reset(settings) => {
                let launch = engine.reset(*settings);
                progress.clear();
                state = SimulationState::Idle;
                events.write(SimulationEvent::ResetComplete(
                    ResetCompletePayload::describe(&engine, &launch.initial_points),
                ));
            }
            _ if !engine.has_settings() => {
                debug!("Ignoring {:?}: no settings supplied yet", command);
            }
            SimulationCommand::Start => match state {
                SimulationState::Running => {}
                SimulationState::Idle | SimulationState::Paused => {
                    // a finished run reports its final snapshot again on the next tick
                    progress.clear();
                    state = SimulationState::Running;
                }
            },
            SimulationCommand::Pause => {
                if state == SimulationState::Running {
                    state = SimulationState::Paused;
                }
            }
        }
    }

    if state != initial {
        info!("Simulation {:?} -> {:?}", initial, state);
        next_state.set(state);
    }
}
