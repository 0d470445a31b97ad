use crate::error::Result;
use crate::physics::{FieldGeometry, SimulationSettings};
use bevy::log::Level;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables prefixed with this override file values,
/// e.g. `RUTHERFORD__RUN__TARGET_Z=47`.
pub const ENV_PREFIX: &str = "RUTHERFORD";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub run: RunConfig,
    pub field: FieldGeometry,
    pub logging: LoggingConfig,
}

/// Settings used for the first reset when the host does not supply its own.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub energy: f64,
    pub num_particles: u32,
    pub target_z: u32,
    pub focus_mode: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        SimulationSettings::default().into()
    }
}

impl From<SimulationSettings> for RunConfig {
    fn from(settings: SimulationSettings) -> Self {
        Self {
            energy: settings.energy,
            num_particles: settings.num_particles,
            target_z: settings.target_z,
            focus_mode: settings.is_focus_mode_enabled,
        }
    }
}

impl From<RunConfig> for SimulationSettings {
    fn from(run: RunConfig) -> Self {
        Self {
            energy: run.energy,
            num_particles: run.num_particles,
            target_z: run.target_z,
            is_focus_mode_enabled: run.focus_mode,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            filter: "bevy_app=warn,bevy_ecs=warn".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level, falling back to INFO for unknown names.
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

impl SimulationConfig {
    pub fn settings(&self) -> SimulationSettings {
        self.run.into()
    }

    /// `config.toml` inside the platform configuration directory.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "rutherford")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Layers defaults, an optional TOML file, and environment overrides.
    pub fn load_from_path(path: Option<&Path>) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Loads the user's configuration, falling back to defaults if it cannot be read
    pub fn load_from_user_config() -> Self {
        let path = Self::user_config_path();
        match Self::load_from_path(path.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
