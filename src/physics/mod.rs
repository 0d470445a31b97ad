//! Pure scattering physics. Nothing in here depends on the Bevy app.

pub mod analysis;
pub mod constants;
pub mod engine;
pub mod factory;
pub mod field;
pub mod integrators;
pub mod lifecycle;
pub mod math;
pub mod particle;
pub mod paths;
pub mod settings;

pub use engine::{ScatteringEngine, StepContext, step};
pub use math::{DisplayPoint, FieldGeometry, Scalar, Vector};
pub use particle::{ParticleState, Termination};
pub use settings::SimulationSettings;
