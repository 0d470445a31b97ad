//! Decimated trajectory recording.
//!
//! Buffers hold only the points sampled since the last flush. The emission
//! task flushes them; the integration pass only appends.

use crate::physics::constants::PATH_DECIMATION;
use crate::physics::math::{DisplayPoint, FieldGeometry};
use crate::physics::particle::ParticleState;
use std::collections::BTreeMap;

/// Newly sampled display points keyed by particle id.
pub type PathDeltas = BTreeMap<u32, Vec<DisplayPoint>>;

#[derive(Debug, Clone, Default)]
pub struct PathSampler {
    pending: PathDeltas,
}

impl PathSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a particle's current step count is a sampling tick.
    #[inline]
    pub fn is_sample_tick(step_count: u64) -> bool {
        step_count > 0 && step_count % PATH_DECIMATION == 0
    }

    /// Appends the particle's display position if this is one of its sampling ticks.
    pub fn observe(&mut self, particle: &ParticleState, field: &FieldGeometry) {
        if particle.is_finished() || !Self::is_sample_tick(particle.step_count()) {
            return;
        }
        self.pending
            .entry(particle.id())
            .or_default()
            .push(field.to_display(particle.position()));
    }

    /// Takes every pending point, leaving the sampler empty.
    pub fn flush(&mut self) -> PathDeltas {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub(crate) fn pending_len(&self, id: u32) -> usize {
        self.pending.get(&id).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::Vector;
    use crate::physics::particle::Termination;
    use bevy::color::Srgba;

    fn particle(id: u32) -> ParticleState {
        ParticleState::new(id, Vector::ZERO, Vector::new(1.0, 0.0), 0.0, Srgba::WHITE)
    }

    #[test]
    fn samples_every_fifth_tick() {
        let field = FieldGeometry::default();
        let mut sampler = PathSampler::new();
        let mut p = particle(7);

        for _ in 0..12 {
            p.record_step();
            sampler.observe(&p, &field);
        }

        // ticks 5 and 10
        assert_eq!(sampler.pending_len(7), 2);
    }

    #[test]
    fn launch_tick_is_not_sampled() {
        let field = FieldGeometry::default();
        let mut sampler = PathSampler::new();
        sampler.observe(&particle(0), &field);
        assert!(sampler.is_empty());
    }

    #[test]
    fn flush_drains_pending_points() {
        let field = FieldGeometry::default();
        let mut sampler = PathSampler::new();
        let mut p = particle(1);
        for _ in 0..5 {
            p.record_step();
        }
        sampler.observe(&p, &field);

        let deltas = sampler.flush();
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[&1], vec![DisplayPoint::new(400.0, 300.0)]);
        assert!(sampler.is_empty());
        assert!(sampler.flush().is_empty());
    }

    #[test]
    fn finished_particles_are_not_sampled() {
        let field = FieldGeometry::default();
        let mut sampler = PathSampler::new();
        let mut p = particle(2);
        for _ in 0..5 {
            p.record_step();
        }
        p.finish(Termination::Escaped);
        sampler.observe(&p, &field);
        assert!(sampler.is_empty());
    }
}
