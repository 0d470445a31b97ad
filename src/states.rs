use bevy::prelude::*;

/// Run state of the simulation controller.
///
/// A run that finishes on its own ends in `Paused`; the `finished` event is
/// what tells it apart from a user pause.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimulationState {
    #[default]
    Idle,
    Running,
    Paused,
}
