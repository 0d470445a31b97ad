//! Fixed physical and display constants. None of these are user-configurable.

use super::math::Scalar;

/// Coulomb constant k (N·m²/C²).
pub const COULOMB_CONSTANT: Scalar = 8.987_551_792_3e9;

/// Elementary charge e (C).
pub const ELEMENTARY_CHARGE: Scalar = 1.602_176_634e-19;

/// Alpha particle rest mass (kg).
pub const ALPHA_MASS: Scalar = 6.644_657_230e-27;

/// Alpha particle charge in units of e.
pub const ALPHA_CHARGE_NUMBER: Scalar = 2.0;

/// Joules per MeV.
pub const MEV_TO_JOULES: Scalar = 1.602_176_634e-13;

/// One femtometer (m).
pub const FEMTOMETER: Scalar = 1e-15;

/// Meters represented by one display unit.
pub const METERS_PER_DISPLAY_UNIT: Scalar = FEMTOMETER;

/// Integration time step Δt (s).
pub const TIME_STEP: Scalar = 1e-22;

/// Separation from the nucleus below which a particle is absorbed (m).
pub const NEAR_CONTACT_THRESHOLD: Scalar = FEMTOMETER;

/// Distance beyond the visible field, in display units, at which a particle has escaped.
pub const ESCAPE_MARGIN: Scalar = 50.0;

/// Emission task rate (Hz).
pub const EMISSION_RATE_HZ: f64 = 60.0;

/// A path point is sampled on every Nth survived tick.
pub const PATH_DECIMATION: u64 = 5;

/// Number of ± impact-parameter pairs added in focus mode.
pub const FOCUS_PAIR_COUNT: u32 = 150;

/// Spacing between focus-mode impact parameters (m).
pub const FOCUS_SPACING: Scalar = FEMTOMETER;

/// Fraction of the half-height covered by the standard particle spread.
pub const STANDARD_SPREAD: Scalar = 0.8;

/// Deduplication grid resolution in display units.
pub const DEDUP_RESOLUTION: Scalar = 1e-6;
