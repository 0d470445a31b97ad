//! Numerical integration for projectile motion in a static field

use crate::physics::math::{Scalar, Vector};

pub mod symplectic_euler;

pub use symplectic_euler::SymplecticEuler;

/// A position-dependent acceleration field
///
/// Integrators sample the field through this trait so the same stepping code
/// works for the Coulomb field and for constant test fields.
pub trait AccelerationField {
    /// Acceleration experienced at `position`
    fn at(&self, position: Vector) -> Vector;
}

/// Base trait for all integrators
pub trait Integrator: Send + Sync {
    /// Advance a single particle's phase-space state by one time step
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity
    /// * `field` - Acceleration field sampled by the integrator
    /// * `dt` - Time step
    fn step(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        field: &dyn AccelerationField,
        dt: Scalar,
    );

    /// Order of the local truncation error
    fn convergence_order(&self) -> usize;

    /// Name of this integrator
    fn name(&self) -> &'static str;
}
