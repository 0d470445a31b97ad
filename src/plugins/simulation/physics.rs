//! Integration pass and run completion.

use crate::prelude::*;

/// Advances every active particle by one time step.
pub fn integrate_particles(mut engine: ResMut<Engine>) {
    engine.tick();
}

/// Reports a completed run exactly once: a final snapshot, then the scatter data.
pub fn report_completion(
    mut engine: ResMut<Engine>,
    mut progress: ResMut<RunProgress>,
    mut next_state: ResMut<NextState<SimulationState>>,
    mut events: EventWriter<SimulationEvent>,
) {
    if progress.completion_reported || !engine.is_complete() {
        return;
    }

    events.write(SimulationEvent::Update(UpdatePayload::flush(&mut engine)));
    events.write(SimulationEvent::Finished(FinishedPayload {
        scatter_data: engine.scatter_data(),
    }));

    let summary = engine.summary();
    info!(
        "Run finished after {} ticks: {} escaped, {} absorbed",
        engine.ticks(),
        summary.escaped,
        summary.absorbed
    );

    progress.completion_reported = true;
    next_state.set(SimulationState::Paused);
}
