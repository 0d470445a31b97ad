//! Per-projectile state.

use crate::physics::constants::{ALPHA_MASS, MEV_TO_JOULES};
use crate::physics::math::{Scalar, Vector};
use bevy::color::Srgba;
use serde::{Deserialize, Serialize};

/// Why a particle stopped being integrated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    /// Left the visible field plus the escape margin.
    Escaped,
    /// Came within the near-contact threshold of the nucleus.
    Absorbed,
}

/// A single alpha particle.
///
/// Fields are private so that the impact parameter stays immutable and a
/// finished particle cannot be moved from outside the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    id: u32,
    position: Vector,
    velocity: Vector,
    impact_parameter: Scalar,
    step_count: u64,
    termination: Option<Termination>,
    color: Srgba,
}

/// Launch speed v0 = sqrt(2E / m) for a kinetic energy in MeV.
#[inline]
pub fn launch_speed(energy_mev: Scalar) -> Scalar {
    libm::sqrt(2.0 * energy_mev * MEV_TO_JOULES / ALPHA_MASS)
}

impl ParticleState {
    /// Place a particle at `position` moving at `velocity`.
    ///
    /// `impact_parameter` is the signed launch offset in meters; only its magnitude is kept.
    pub fn new(
        id: u32,
        position: Vector,
        velocity: Vector,
        impact_parameter: Scalar,
        color: Srgba,
    ) -> Self {
        Self {
            id,
            position,
            velocity,
            impact_parameter: impact_parameter.abs(),
            step_count: 0,
            termination: None,
            color,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Unsigned impact parameter (m).
    #[inline]
    pub fn impact_parameter(&self) -> Scalar {
        self.impact_parameter
    }

    /// Integration ticks survived.
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    #[inline]
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    #[inline]
    pub fn color(&self) -> Srgba {
        self.color
    }

    /// Mutable phase-space access for the integrator. Returns `None` once finished.
    #[inline]
    pub(crate) fn phase_space_mut(&mut self) -> Option<(&mut Vector, &mut Vector)> {
        if self.is_finished() {
            return None;
        }
        Some((&mut self.position, &mut self.velocity))
    }

    #[inline]
    pub(crate) fn record_step(&mut self) {
        if !self.is_finished() {
            self.step_count += 1;
        }
    }

    /// Terminal and monotonic: the first reason sticks.
    #[inline]
    pub(crate) fn finish(&mut self, reason: Termination) {
        if self.termination.is_none() {
            self.termination = Some(reason);
        }
    }
}
