//! Simulation plugin - Self-contained plugin pattern
//!
//! Owns the scattering engine and drives it from three task groups: command
//! handling, the integration pass, and periodic update emission. The
//! integration and emission tasks only run while the controller is `Running`.

use crate::physics::constants::EMISSION_RATE_HZ;
use crate::prelude::*;
use bevy::state::app::StatesPlugin;

mod actions;
mod emission;
mod physics;

use actions::apply_simulation_commands;
use emission::emit_update;
use physics::{integrate_particles, report_completion};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Consumer commands, applied between ticks.
    Commands,
    Integrate,
    Complete,
    Emit,
}

/// Installs the engine, its run state, and the message channels.
///
/// Without an explicit configuration the plugin loads the user's config file.
#[derive(Default)]
pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
}

impl SimulationPlugin {
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }

        app.insert_resource(Engine(ScatteringEngine::new(config.field)));
        app.insert_resource(config);
        app.init_resource::<RunProgress>();
        app.insert_resource(Time::<Fixed>::from_hz(EMISSION_RATE_HZ));

        app.init_state::<SimulationState>();
        app.add_event::<SimulationCommand>();
        app.add_event::<SimulationEvent>();

        app.configure_sets(PreUpdate, SimulationSet::Commands);
        app.configure_sets(
            Update,
            (SimulationSet::Integrate, SimulationSet::Complete).chain(),
        );
        app.configure_sets(FixedUpdate, SimulationSet::Emit);

        app.add_systems(
            PreUpdate,
            apply_simulation_commands.in_set(SimulationSet::Commands),
        );
        app.add_systems(
            Update,
            (
                integrate_particles.in_set(SimulationSet::Integrate),
                report_completion.in_set(SimulationSet::Complete),
            )
                .run_if(in_state(SimulationState::Running)),
        );
        app.add_systems(
            FixedUpdate,
            emit_update
                .in_set(SimulationSet::Emit)
                .run_if(in_state(SimulationState::Running)),
        );
    }
}
