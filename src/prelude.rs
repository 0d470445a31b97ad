//! Rutherford prelude module
//!
//! Re-exports the types most systems and tests need.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - States
pub use crate::states::SimulationState;

// Internal re-exports - Resources
pub use crate::resources::{Engine, RunProgress};

// Internal re-exports - Physics
pub use crate::physics::{
    DisplayPoint, FieldGeometry, ParticleState, Scalar, ScatteringEngine, SimulationSettings,
    Termination, Vector,
};

// Internal re-exports - Messages
pub use crate::events::{
    FinishedPayload, ResetCompletePayload, SimulationCommand, SimulationEvent, UpdatePayload,
};
