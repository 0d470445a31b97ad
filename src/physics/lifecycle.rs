//! Termination detection: escape from the field or near-contact with the nucleus.

use crate::physics::constants::NEAR_CONTACT_THRESHOLD;
use crate::physics::math::{FieldGeometry, Vector};
use crate::physics::particle::{ParticleState, Termination};

/// True when `position` is inside the near-contact radius around the origin.
#[inline]
pub fn is_near_contact(position: Vector) -> bool {
    position.length_squared() < NEAR_CONTACT_THRESHOLD * NEAR_CONTACT_THRESHOLD
}

/// Termination reason for a particle at `position`, if any.
///
/// Absorption wins when both conditions hold.
#[inline]
pub fn classify(position: Vector, field: &FieldGeometry) -> Option<Termination> {
    if is_near_contact(position) {
        Some(Termination::Absorbed)
    } else if field.is_outside(field.to_display(position)) {
        Some(Termination::Escaped)
    } else {
        None
    }
}

/// Marks `particle` finished if it has escaped or been absorbed.
///
/// Returns true when this call finished the particle.
pub fn update(particle: &mut ParticleState, field: &FieldGeometry) -> bool {
    if particle.is_finished() {
        return false;
    }
    match classify(particle.position(), field) {
        Some(reason) => {
            particle.finish(reason);
            true
        }
        None => false,
    }
}
