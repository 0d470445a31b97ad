use crate::prelude::*;

/// Publishes the current particle snapshot and any new path points.
pub fn emit_update(mut engine: ResMut<Engine>, mut events: EventWriter<SimulationEvent>) {
    events.write(SimulationEvent::Update(UpdatePayload::flush(&mut engine)));
}
