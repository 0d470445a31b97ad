//! User-facing run parameters carried by the `reset` command.

use serde::{Deserialize, Serialize};

/// Parameters for one scattering run.
///
/// The engine assumes these were validated by the consumer:
/// `energy > 0`, `target_z >= 1`. See [`SimulationSettings::validate`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSettings {
    /// Projectile kinetic energy (MeV).
    pub energy: f64,
    /// Number of standard particles spread across the field.
    pub num_particles: u32,
    /// Atomic number of the target nucleus.
    pub target_z: u32,
    /// Adds 150 ± pairs at 1 fm spacing around the nucleus.
    pub is_focus_mode_enabled: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            energy: 5.0,
            num_particles: 50,
            target_z: 79,
            is_focus_mode_enabled: false,
        }
    }
}

impl SimulationSettings {
    pub const ENERGY_RANGE: std::ops::RangeInclusive<f64> = 1.0..=15.0;
    pub const PARTICLE_RANGE: std::ops::RangeInclusive<u32> = 0..=300;
    pub const TARGET_Z_RANGE: std::ops::RangeInclusive<u32> = 1..=118;

    /// Boundary check for consumers. The engine never calls this.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::Error;

        if !self.energy.is_finite() || self.energy <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "energy must be a positive number of MeV, got {}",
                self.energy
            )));
        }
        if !Self::TARGET_Z_RANGE.contains(&self.target_z) {
            return Err(Error::InvalidSettings(format!(
                "target Z must be within {}..={}, got {}",
                Self::TARGET_Z_RANGE.start(),
                Self::TARGET_Z_RANGE.end(),
                self.target_z
            )));
        }
        if !Self::ENERGY_RANGE.contains(&self.energy) {
            bevy::log::warn!(
                "energy {} MeV is outside the recommended range {:?}",
                self.energy,
                Self::ENERGY_RANGE
            );
        }
        if !Self::PARTICLE_RANGE.contains(&self.num_particles) {
            bevy::log::warn!(
                "{} particles is outside the recommended range {:?}",
                self.num_particles,
                Self::PARTICLE_RANGE
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_energy() {
        let settings = SimulationSettings {
            energy: 0.0,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("energy"));
    }

    #[test]
    fn rejects_target_z_out_of_range() {
        let settings = SimulationSettings {
            target_z: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = SimulationSettings {
            target_z: 119,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn uses_camel_case_on_the_wire() {
        let json = serde_json::to_string(&SimulationSettings::default()).unwrap();
        assert!(json.contains("\"numParticles\":50"));
        assert!(json.contains("\"targetZ\":79"));
        assert!(json.contains("\"isFocusModeEnabled\":false"));
    }
}
