//! Symplectic Euler integration method
//!
//! Velocity is updated first and the position then moves with the new
//! velocity. Scattering trajectories and angles depend on this order; the
//! position-first variant (explicit Euler) produces different output.

use super::{AccelerationField, Integrator};
use crate::physics::math::{Scalar, Vector};

/// Symplectic Euler integrator (also known as semi-implicit Euler)
///
/// ```text
/// a(t)     = F(x(t)) / m
/// v(t+dt)  = v(t) + a(t) * dt
/// x(t+dt)  = x(t) + v(t+dt) * dt
/// ```
///
/// First order, one field evaluation per step, bounded energy error for
/// conservative fields such as the Coulomb repulsion.
#[derive(Debug, Copy, Clone, Default)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn step(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        field: &dyn AccelerationField,
        dt: Scalar,
    ) {
        // Calculate acceleration at current position
        let acceleration = field.at(*position);

        // Update velocity first: v(t+dt) = v(t) + a(t) * dt
        *velocity += acceleration * dt;

        // Then update position using new velocity: x(t+dt) = x(t) + v(t+dt) * dt
        *position += *velocity * dt;
    }

    fn convergence_order(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "symplectic_euler"
    }
}
