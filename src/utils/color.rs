//! Cosmetic colour assignment for particles.
//!
//! Colours are a display hint only. They are derived from the particle id and
//! the size of the set so that a particle keeps the same colour for the whole
//! run, and the same settings always produce the same palette.
//!
//! # Usage
//!
//! ```rust
//! use rutherford::utils::color::{cyclic_hue_color, to_hex};
//!
//! let first = cyclic_hue_color(0, 12);
//! assert_eq!(to_hex(first).len(), 7);
//! ```

use bevy::color::{Color, Srgba};

/// Full saturation keeps neighbouring hues distinguishable.
const SATURATION: f32 = 1.0;
/// Light enough to read against a dark background.
const LIGHTNESS: f32 = 0.65;

/// Colour for particle `id` out of `count`, walking the hue wheel once per set.
///
/// hue = id × 360 / count degrees.
#[must_use]
pub fn cyclic_hue_color(id: u32, count: usize) -> Srgba {
    let hue = if count == 0 {
        0.0
    } else {
        (id as f64 * 360.0 / count as f64) as f32
    };

    Color::hsl(hue, SATURATION, LIGHTNESS).to_srgba()
}

/// `#rrggbb` representation used on the wire.
#[must_use]
pub fn to_hex(color: Srgba) -> String {
    color.to_hex()
}
