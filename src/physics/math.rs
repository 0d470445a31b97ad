//! Scalar and vector types plus the physical ↔ display coordinate mapping.
//!
//! Physical quantities live in [`Vector`] (meters, meters per second).
//! Anything meant for a screen lives in [`DisplayPoint`] (display units).
//! The two never share a struct; [`FieldGeometry`] is the only bridge.

use crate::physics::constants::{ESCAPE_MARGIN, METERS_PER_DISPLAY_UNIT};
use serde::{Deserialize, Serialize};

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for physical positions, velocities, and accelerations
pub type Vector = bevy::math::DVec2;

/// A point in display space.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayPoint {
    pub x: Scalar,
    pub y: Scalar,
}

impl DisplayPoint {
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }
}

/// Size of the visible field in display units.
///
/// The host owns this geometry. The nucleus sits at the centre of the field.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FieldGeometry {
    pub width: Scalar,
    pub height: Scalar,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl FieldGeometry {
    pub fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half_width(&self) -> Scalar {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> Scalar {
        self.height / 2.0
    }

    /// Maps a physical position (meters, nucleus at origin) to display space.
    ///
    /// Screen y grows downward, physical y grows upward.
    #[inline]
    pub fn to_display(&self, position: Vector) -> DisplayPoint {
        DisplayPoint {
            x: position.x / METERS_PER_DISPLAY_UNIT + self.half_width(),
            y: self.half_height() - position.y / METERS_PER_DISPLAY_UNIT,
        }
    }

    /// True once a display point lies beyond the visible field plus the escape margin.
    #[inline]
    pub fn is_outside(&self, point: DisplayPoint) -> bool {
        point.x < -ESCAPE_MARGIN
            || point.x > self.width + ESCAPE_MARGIN
            || point.y < -ESCAPE_MARGIN
            || point.y > self.height + ESCAPE_MARGIN
    }
}
