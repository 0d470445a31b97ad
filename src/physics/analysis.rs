//! Scattering-angle analytics over a finished particle set.

use crate::physics::constants::{
    ALPHA_CHARGE_NUMBER, COULOMB_CONSTANT, ELEMENTARY_CHARGE, FEMTOMETER, MEV_TO_JOULES,
};
use crate::physics::math::Scalar;
use crate::physics::particle::{ParticleState, Termination};
use serde::{Deserialize, Serialize};

/// One point of the angle-vs-impact-parameter distribution.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScatterRecord {
    /// Impact parameter (fm).
    pub x: Scalar,
    /// Scattering angle (degrees, 0..=180).
    pub y: Scalar,
}

impl ScatterRecord {
    #[inline]
    pub fn impact_parameter_fm(&self) -> Scalar {
        self.x
    }

    #[inline]
    pub fn angle_degrees(&self) -> Scalar {
        self.y
    }
}

/// Deflection of the final velocity from the +x launch direction, in degrees.
#[inline]
pub fn scattering_angle(particle: &ParticleState) -> Scalar {
    let velocity = particle.velocity();
    libm::atan2(velocity.y, velocity.x).abs().to_degrees()
}

/// One record per particle, in engine order.
pub fn scatter_data(particles: &[ParticleState]) -> Vec<ScatterRecord> {
    particles
        .iter()
        .map(|particle| ScatterRecord {
            x: particle.impact_parameter() / FEMTOMETER,
            y: scattering_angle(particle),
        })
        .collect()
}

/// Head-on distance of closest approach d = k·2Ze² / E (m).
pub fn closest_approach(energy_mev: Scalar, target_z: u32) -> Scalar {
    COULOMB_CONSTANT
        * ALPHA_CHARGE_NUMBER
        * target_z as Scalar
        * ELEMENTARY_CHARGE
        * ELEMENTARY_CHARGE
        / (energy_mev * MEV_TO_JOULES)
}

/// Closed-form Rutherford deflection θ = 2·atan(d / 2b), in degrees.
///
/// `impact_parameter` is in meters; zero gives a head-on 180°.
pub fn rutherford_angle(impact_parameter: Scalar, energy_mev: Scalar, target_z: u32) -> Scalar {
    let d = closest_approach(energy_mev, target_z);
    if impact_parameter == 0.0 {
        return 180.0;
    }
    (2.0 * libm::atan(d / (2.0 * impact_parameter.abs()))).to_degrees()
}

/// How the particles of a run terminated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminationSummary {
    pub escaped: usize,
    pub absorbed: usize,
    pub active: usize,
}

pub fn summarize(particles: &[ParticleState]) -> TerminationSummary {
    particles
        .iter()
        .fold(TerminationSummary::default(), |mut summary, particle| {
            match particle.termination() {
                Some(Termination::Escaped) => summary.escaped += 1,
                Some(Termination::Absorbed) => summary.absorbed += 1,
                None => summary.active += 1,
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::Vector;
    use bevy::color::Srgba;

    fn moving(velocity: Vector, b: Scalar) -> ParticleState {
        ParticleState::new(0, Vector::ZERO, velocity, b, Srgba::WHITE)
    }

    #[test]
    fn undeflected_particle_has_zero_angle() {
        let record = scatter_data(&[moving(Vector::new(1e7, 0.0), 30.0 * FEMTOMETER)]);
        assert_eq!(record[0].y, 0.0);
        assert!((record[0].x - 30.0).abs() < 1e-9);
    }

    #[test]
    fn backscatter_is_one_eighty() {
        let angle = scattering_angle(&moving(Vector::new(-1e7, 0.0), 0.0));
        assert!((angle - 180.0).abs() < 1e-12);
    }

    #[test]
    fn sign_of_deflection_is_dropped() {
        let up = scattering_angle(&moving(Vector::new(1e7, 1e7), 0.0));
        let down = scattering_angle(&moving(Vector::new(1e7, -1e7), 0.0));
        assert_eq!(up, down);
        assert!((up - 45.0).abs() < 1e-12);
    }

    #[test]
    fn gold_closest_approach_at_five_mev() {
        // d = 1.44 MeV·fm · 2 · 79 / 5 MeV ≈ 45.5 fm
        let d = closest_approach(5.0, 79) / FEMTOMETER;
        assert!((d - 45.5).abs() < 0.1, "d = {d}");
    }

    #[test]
    fn rutherford_angle_limits() {
        let d = closest_approach(5.0, 79);
        assert_eq!(rutherford_angle(0.0, 5.0, 79), 180.0);
        // b = d/2 gives tan(θ/2) = 1
        assert!((rutherford_angle(d / 2.0, 5.0, 79) - 90.0).abs() < 1e-9);
        assert!(rutherford_angle(1e-8, 5.0, 79) < 1e-3);
    }

    #[test]
    fn rutherford_angle_at_one_hundred_fermi() {
        // 2·atan(45.503 / 200) in degrees
        let angle = rutherford_angle(100.0 * FEMTOMETER, 5.0, 79);
        assert!((angle - 25.6349).abs() < 1e-3, "θ = {angle}");
    }

    #[test]
    fn summary_counts_each_termination() {
        let mut escaped = moving(Vector::X, 0.0);
        escaped.finish(Termination::Escaped);
        let mut absorbed = moving(Vector::X, 0.0);
        absorbed.finish(Termination::Absorbed);
        let active = moving(Vector::X, 0.0);

        let summary = summarize(&[escaped, absorbed, active]);
        assert_eq!(
            summary,
            TerminationSummary {
                escaped: 1,
                absorbed: 1,
                active: 1
            }
        );
    }
}
