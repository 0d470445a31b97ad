//! Deterministic construction of the particle set for a run.
//!
//! Candidates are generated in a fixed order (focus pairs first, then the
//! standard spread), deduplicated on a fixed-point grid, and only then
//! assigned dense ids.

use crate::physics::constants::{
    DEDUP_RESOLUTION, FOCUS_PAIR_COUNT, FOCUS_SPACING, METERS_PER_DISPLAY_UNIT, STANDARD_SPREAD,
};
use crate::physics::math::{DisplayPoint, FieldGeometry, Scalar, Vector};
use crate::physics::particle::{ParticleState, launch_speed};
use crate::physics::settings::SimulationSettings;
use crate::utils::color::cyclic_hue_color;
use std::collections::HashSet;

/// Output of [`build_particles`].
#[derive(Debug, Clone, Default)]
pub struct ParticleLaunch {
    pub particles: Vec<ParticleState>,
    /// Launch position of each particle in display space, same order as `particles`.
    pub initial_points: Vec<DisplayPoint>,
    /// Candidates dropped because their impact parameter collided with an earlier one.
    pub duplicates_dropped: usize,
}

/// Signed focus-mode impact parameters in display units: +1, −1, +2, −2, … fm.
pub fn focus_impact_parameters() -> impl Iterator<Item = Scalar> {
    (1..=FOCUS_PAIR_COUNT).flat_map(|i| {
        let b = i as Scalar * FOCUS_SPACING / METERS_PER_DISPLAY_UNIT;
        [b, -b]
    })
}

/// Signed standard impact parameters in display units.
///
/// Alternates sign and widens every second particle so the spread is
/// symmetric about the axis and covers 80 % of the half-height.
pub fn standard_impact_parameters(
    num_particles: u32,
    field: &FieldGeometry,
) -> impl Iterator<Item = Scalar> {
    let half = num_particles / 2;
    let step = if half == 0 {
        0.0
    } else {
        STANDARD_SPREAD * field.half_height() / half as Scalar
    };

    (0..num_particles).map(move |i| {
        let step_index = (i / 2 + 1) as Scalar;
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        if step == 0.0 {
            0.0
        } else {
            step_index * step * sign
        }
    })
}

/// Fixed-point grid key used for deduplication.
#[inline]
fn dedup_key(impact_parameter: Scalar) -> i64 {
    (impact_parameter / DEDUP_RESOLUTION).round() as i64
}

/// Builds the initial particle set for `settings` in the given field.
pub fn build_particles(settings: &SimulationSettings, field: &FieldGeometry) -> ParticleLaunch {
    let focus = settings
        .is_focus_mode_enabled
        .then(focus_impact_parameters)
        .into_iter()
        .flatten();
    let standard = standard_impact_parameters(settings.num_particles, field);

    let mut seen = HashSet::new();
    let mut duplicates_dropped = 0;
    let impact_parameters: Vec<Scalar> = focus
        .chain(standard)
        .filter(|&b| {
            let fresh = seen.insert(dedup_key(b));
            if !fresh {
                duplicates_dropped += 1;
            }
            fresh
        })
        .collect();

    let count = impact_parameters.len();
    let speed = launch_speed(settings.energy);
    let launch_x = -field.half_width() * METERS_PER_DISPLAY_UNIT;

    let particles: Vec<ParticleState> = impact_parameters
        .iter()
        .enumerate()
        .map(|(index, &b)| {
            let id = index as u32;
            let offset = b * METERS_PER_DISPLAY_UNIT;
            ParticleState::new(
                id,
                Vector::new(launch_x, offset),
                Vector::new(speed, 0.0),
                offset,
                cyclic_hue_color(id, count),
            )
        })
        .collect();

    let initial_points = particles
        .iter()
        .map(|particle| field.to_display(particle.position()))
        .collect();

    ParticleLaunch {
        particles,
        initial_points,
        duplicates_dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::FEMTOMETER;

    fn settings(num_particles: u32, focus: bool) -> SimulationSettings {
        SimulationSettings {
            energy: 5.0,
            num_particles,
            target_z: 79,
            is_focus_mode_enabled: focus,
        }
    }

    #[test]
    fn empty_settings_build_nothing() {
        let launch = build_particles(&settings(0, false), &FieldGeometry::default());
        assert!(launch.particles.is_empty());
        assert!(launch.initial_points.is_empty());
        assert_eq!(launch.duplicates_dropped, 0);
    }

    #[test]
    fn standard_spread_alternates_and_widens() {
        let field = FieldGeometry::new(800.0, 600.0);
        let b: Vec<Scalar> = standard_impact_parameters(4, &field).collect();
        // half = 2, step = 0.8 * 300 / 2 = 120
        assert_eq!(b, vec![120.0, -120.0, 240.0, -240.0]);
    }

    #[test]
    fn single_particle_is_head_on() {
        let field = FieldGeometry::default();
        let b: Vec<Scalar> = standard_impact_parameters(1, &field).collect();
        assert_eq!(b, vec![0.0]);
    }

    #[test]
    fn focus_mode_adds_three_hundred_particles() {
        let launch = build_particles(&settings(0, true), &FieldGeometry::default());
        assert_eq!(launch.particles.len(), 300);
        assert_eq!(launch.duplicates_dropped, 0);
        assert_eq!(launch.particles[0].impact_parameter(), FEMTOMETER);
        assert_eq!(launch.particles[1].impact_parameter(), FEMTOMETER);
        assert!(launch.particles[0].position().y > 0.0);
        assert!(launch.particles[1].position().y < 0.0);
        assert!((launch.particles[299].impact_parameter() - 150.0 * FEMTOMETER).abs() < 1e-27);
    }

    #[test]
    fn colliding_standard_particles_are_dropped() {
        // half = 120, step = 240 / 120 = 2 fm: every standard slot up to ±150 fm collides
        // with a focus pair and only ±152..±240 fm survive.
        let launch = build_particles(&settings(240, true), &FieldGeometry::new(800.0, 600.0));
        assert_eq!(launch.duplicates_dropped, 150);
        assert_eq!(launch.particles.len(), 300 + 240 - 150);
    }

    #[test]
    fn ids_are_dense_after_dedup() {
        let launch = build_particles(&settings(240, true), &FieldGeometry::default());
        for (index, particle) in launch.particles.iter().enumerate() {
            assert_eq!(particle.id() as usize, index);
        }
    }

    #[test]
    fn particles_launch_from_left_edge_toward_nucleus() {
        let field = FieldGeometry::default();
        let launch = build_particles(&settings(10, false), &field);
        let speed = launch_speed(5.0);
        for (particle, point) in launch.particles.iter().zip(&launch.initial_points) {
            assert!(point.x.abs() < 1e-9);
            assert_eq!(particle.velocity(), Vector::new(speed, 0.0));
            let offset = particle.position().y.abs();
            assert!((offset - particle.impact_parameter()).abs() < 1e-27);
        }
    }

    #[test]
    fn colors_cycle_by_id() {
        let launch = build_particles(&settings(4, false), &FieldGeometry::default());
        let colors: Vec<_> = launch.particles.iter().map(|p| p.color()).collect();
        assert_eq!(colors[0], cyclic_hue_color(0, 4));
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn construction_is_deterministic() {
        let field = FieldGeometry::default();
        let a = build_particles(&settings(77, true), &field);
        let b = build_particles(&settings(77, true), &field);
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.initial_points, b.initial_points);
    }
}
