//! Rutherford library
//!
//! Alpha-particle scattering off a fixed point nucleus. The physics lives in
//! [`physics`]; [`plugins::simulation`] drives it from a headless Bevy app and
//! [`worker`] runs that app on a background thread.

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;
pub mod utils;
pub mod worker;

// Test utilities are public for integration tests
pub mod test_utils;
