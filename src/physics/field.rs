//! Coulomb repulsion from a fixed nucleus at the origin.

use crate::physics::constants::{
    ALPHA_CHARGE_NUMBER, ALPHA_MASS, COULOMB_CONSTANT, ELEMENTARY_CHARGE,
};
use crate::physics::integrators::AccelerationField;
use crate::physics::math::{Scalar, Vector};

/// Acceleration of an alpha particle in the field of a nucleus of charge Z·e.
///
/// a = k·(2e)·(Ze) / (m_α·|r|²) along r̂.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoulombField {
    /// k·q₁·q₂ / m_α, premultiplied once per run.
    strength: Scalar,
}

impl CoulombField {
    pub fn new(target_z: u32) -> Self {
        let product = COULOMB_CONSTANT
            * (ALPHA_CHARGE_NUMBER * ELEMENTARY_CHARGE)
            * (target_z as Scalar * ELEMENTARY_CHARGE);
        Self {
            strength: product / ALPHA_MASS,
        }
    }
}

impl AccelerationField for CoulombField {
    #[inline]
    fn at(&self, position: Vector) -> Vector {
        let r_squared = position.length_squared();
        if r_squared == 0.0 {
            return Vector::ZERO;
        }
        let r = libm::sqrt(r_squared);
        position * (self.strength / (r_squared * r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::FEMTOMETER;

    #[test]
    fn acceleration_points_away_from_nucleus() {
        let field = CoulombField::new(79);
        let a = field.at(Vector::new(-30.0 * FEMTOMETER, 10.0 * FEMTOMETER));
        assert!(a.x < 0.0);
        assert!(a.y > 0.0);
    }

    #[test]
    fn inverse_square_falloff() {
        let field = CoulombField::new(79);
        let near = field.at(Vector::new(10.0 * FEMTOMETER, 0.0)).length();
        let far = field.at(Vector::new(20.0 * FEMTOMETER, 0.0)).length();
        assert!((near / far - 4.0).abs() < 1e-9);
    }

    #[test]
    fn scales_linearly_with_charge() {
        let position = Vector::new(0.0, 50.0 * FEMTOMETER);
        let gold = CoulombField::new(79).at(position).length();
        let hydrogen = CoulombField::new(1).at(position).length();
        assert!((gold / hydrogen - 79.0).abs() < 1e-9);
    }

    #[test]
    fn force_matches_coulomb_law() {
        // Two protons one fermi apart: ~230.7 N; alpha on gold at 100 fm carries 2·79 of that / 100².
        let field = CoulombField::new(79);
        let expected = 230.707 * 2.0 * 79.0 / 1e4;
        let force = field.at(Vector::new(100.0 * FEMTOMETER, 0.0)).length() * ALPHA_MASS;
        assert!((force / expected - 1.0).abs() < 1e-4, "force = {force}");
    }

    #[test]
    fn origin_is_guarded() {
        assert_eq!(CoulombField::new(1).at(Vector::ZERO), Vector::ZERO);
    }
}
