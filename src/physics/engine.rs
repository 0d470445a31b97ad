//! The scattering engine: particle set, integration pass, and path buffers.
//!
//! [`step`] is the pure transition used by tests; [`ScatteringEngine::tick`]
//! is the in-place pass the controller drives.

use crate::physics::analysis::{self, ScatterRecord, TerminationSummary};
use crate::physics::constants::TIME_STEP;
use crate::physics::factory::{self, ParticleLaunch};
use crate::physics::field::CoulombField;
use crate::physics::integrators::{Integrator, SymplecticEuler};
use crate::physics::lifecycle;
use crate::physics::math::{DisplayPoint, FieldGeometry, Scalar};
use crate::physics::particle::{ParticleState, Termination};
use crate::physics::paths::{PathDeltas, PathSampler};
use crate::physics::settings::SimulationSettings;
use bevy::log::{debug, info};

/// Everything a single integration pass needs besides the particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepContext {
    pub field: CoulombField,
    pub geometry: FieldGeometry,
    pub dt: Scalar,
}

impl StepContext {
    pub fn new(target_z: u32, geometry: FieldGeometry) -> Self {
        Self {
            field: CoulombField::new(target_z),
            geometry,
            dt: TIME_STEP,
        }
    }
}

/// Advances one particle by one tick. Returns true if the particle finished during this tick.
///
/// Finished particles are left untouched.
pub fn advance(particle: &mut ParticleState, ctx: &StepContext) -> bool {
    if particle.is_finished() {
        return false;
    }

    // singularity guard
    if lifecycle::is_near_contact(particle.position()) {
        particle.finish(Termination::Absorbed);
        return true;
    }

    if let Some((position, velocity)) = particle.phase_space_mut() {
        SymplecticEuler.step(position, velocity, &ctx.field, ctx.dt);
    }
    particle.record_step();

    lifecycle::update(particle, &ctx.geometry)
}

/// Pure integration pass: returns the particle set one tick later.
pub fn step(particles: &[ParticleState], ctx: &StepContext) -> Vec<ParticleState> {
    let mut next = particles.to_vec();
    for particle in &mut next {
        advance(particle, ctx);
    }
    next
}

/// Engine state for one simulation instance.
#[derive(Debug, Clone)]
pub struct ScatteringEngine {
    geometry: FieldGeometry,
    settings: Option<SimulationSettings>,
    context: Option<StepContext>,
    particles: Vec<ParticleState>,
    paths: PathSampler,
    ticks: u64,
}

impl ScatteringEngine {
    pub fn new(geometry: FieldGeometry) -> Self {
        Self {
            geometry,
            settings: None,
            context: None,
            particles: Vec::new(),
            paths: PathSampler::new(),
            ticks: 0,
        }
    }

    /// Discards the current run and builds a fresh particle set.
    pub fn reset(&mut self, settings: SimulationSettings) -> ParticleLaunch {
        let launch = factory::build_particles(&settings, &self.geometry);

        info!(
            "Reset: {} particles at {} MeV on Z={} (focus mode {}, {} duplicates dropped)",
            launch.particles.len(),
            settings.energy,
            settings.target_z,
            if settings.is_focus_mode_enabled {
                "on"
            } else {
                "off"
            },
            launch.duplicates_dropped
        );

        self.settings = Some(settings);
        self.context = Some(StepContext::new(settings.target_z, self.geometry));
        self.particles = launch.particles.clone();
        self.paths.clear();
        self.ticks = 0;

        launch
    }

    /// One integration pass over every active particle, sampling paths as it goes.
    ///
    /// Returns the number of particles that finished during this pass.
    pub fn tick(&mut self) -> usize {
        let Some(ctx) = self.context else {
            return 0;
        };

        let mut finished = 0;
        for particle in &mut self.particles {
            if advance(particle, &ctx) {
                finished += 1;
                debug!(
                    "Particle {} finished after {} steps: {:?}",
                    particle.id(),
                    particle.step_count(),
                    particle.termination()
                );
            }
            self.paths.observe(particle, &ctx.geometry);
        }
        self.ticks += 1;

        finished
    }

    /// Takes the path points sampled since the previous flush.
    pub fn flush_paths(&mut self) -> PathDeltas {
        self.paths.flush()
    }

    /// True once every particle has finished. An empty set is trivially complete.
    pub fn is_complete(&self) -> bool {
        self.particles.iter().all(ParticleState::is_finished)
    }

    pub fn scatter_data(&self) -> Vec<ScatterRecord> {
        analysis::scatter_data(&self.particles)
    }

    pub fn summary(&self) -> TerminationSummary {
        analysis::summarize(&self.particles)
    }

    pub fn display_position(&self, particle: &ParticleState) -> DisplayPoint {
        self.geometry.to_display(particle.position())
    }

    pub fn has_settings(&self) -> bool {
        self.settings.is_some()
    }

    pub fn settings(&self) -> Option<&SimulationSettings> {
        self.settings.as_ref()
    }

    pub fn particles(&self) -> &[ParticleState] {
        &self.particles
    }

    pub fn geometry(&self) -> FieldGeometry {
        self.geometry
    }

    pub fn context(&self) -> Option<&StepContext> {
        self.context.as_ref()
    }

    /// Integration passes since the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for ScatteringEngine {
    fn default() -> Self {
        Self::new(FieldGeometry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::{FEMTOMETER, METERS_PER_DISPLAY_UNIT};
    use crate::physics::math::Vector;
    use crate::physics::particle::launch_speed;
    use bevy::color::Srgba;

    fn settings(num_particles: u32) -> SimulationSettings {
        SimulationSettings {
            energy: 5.0,
            num_particles,
            target_z: 79,
            is_focus_mode_enabled: false,
        }
    }

    fn run_to_completion(engine: &mut ScatteringEngine) -> u64 {
        while !engine.is_complete() {
            engine.tick();
            assert!(engine.ticks() < 100_000, "run did not terminate");
        }
        engine.ticks()
    }

    #[test]
    fn tick_without_settings_is_a_no_op() {
        let mut engine = ScatteringEngine::default();
        assert_eq!(engine.tick(), 0);
        assert_eq!(engine.ticks(), 0);
        assert!(!engine.has_settings());
    }

    #[test]
    fn empty_run_is_complete_immediately() {
        let mut engine = ScatteringEngine::default();
        let launch = engine.reset(settings(0));
        assert!(launch.particles.is_empty());
        assert!(engine.is_complete());
        assert!(engine.scatter_data().is_empty());
    }

    #[test]
    fn every_particle_terminates() {
        let mut engine = ScatteringEngine::default();
        engine.reset(settings(20));
        run_to_completion(&mut engine);

        let summary = engine.summary();
        assert_eq!(summary.active, 0);
        assert_eq!(summary.escaped + summary.absorbed, 20);
        assert_eq!(engine.scatter_data().len(), 20);
    }

    #[test]
    fn finished_particles_are_frozen() {
        let mut engine = ScatteringEngine::default();
        engine.reset(settings(6));
        run_to_completion(&mut engine);

        let before = engine.particles().to_vec();
        for _ in 0..10 {
            engine.tick();
        }
        assert_eq!(engine.particles(), before.as_slice());
    }

    #[test]
    fn near_contact_absorbs_without_stepping() {
        let ctx = StepContext::new(79, FieldGeometry::default());
        let particle = ParticleState::new(
            0,
            Vector::new(0.5 * FEMTOMETER, 0.0),
            Vector::new(1e7, 0.0),
            0.0,
            Srgba::WHITE,
        );

        let next = step(std::slice::from_ref(&particle), &ctx);
        assert_eq!(next[0].termination(), Some(Termination::Absorbed));
        assert_eq!(next[0].position(), particle.position());
        assert_eq!(next[0].step_count(), 0);
    }

    #[test]
    fn pure_step_matches_in_place_tick() {
        let mut engine = ScatteringEngine::default();
        let launch = engine.reset(settings(8));
        let ctx = *engine.context().unwrap();

        let stepped = step(&launch.particles, &ctx);
        engine.tick();
        assert_eq!(engine.particles(), stepped.as_slice());
    }

    #[test]
    fn first_tick_moves_one_step_along_x() {
        let mut engine = ScatteringEngine::default();
        engine.reset(settings(2));
        engine.tick();

        let particle = &engine.particles()[0];
        let start_x = -engine.geometry().half_width() * METERS_PER_DISPLAY_UNIT;
        let travelled = particle.position().x - start_x;
        let expected = launch_speed(5.0) * TIME_STEP;
        assert!((travelled - expected).abs() / expected < 1e-3);
        assert_eq!(particle.step_count(), 1);
    }

    #[test]
    fn paths_accumulate_until_flushed() {
        let mut engine = ScatteringEngine::default();
        engine.reset(settings(2));
        for _ in 0..10 {
            engine.tick();
        }

        let deltas = engine.flush_paths();
        assert_eq!(deltas.len(), 2);
        assert!(deltas.values().all(|points| points.len() == 2));
        assert!(engine.flush_paths().is_empty());
    }

    #[test]
    fn reset_replaces_the_run() {
        let mut engine = ScatteringEngine::default();
        engine.reset(settings(10));
        for _ in 0..20 {
            engine.tick();
        }

        let launch = engine.reset(settings(4));
        assert_eq!(engine.ticks(), 0);
        assert_eq!(engine.particles().len(), 4);
        assert!(engine.particles().iter().all(|p| p.step_count() == 0));
        assert_eq!(engine.particles(), launch.particles.as_slice());
        assert!(engine.flush_paths().is_empty());
    }
}
