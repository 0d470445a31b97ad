//! Command line interface for Rutherford

use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::events::{FinishedPayload, SimulationEvent};
use crate::physics::analysis::rutherford_angle;
use crate::physics::constants::FEMTOMETER;
use crate::physics::{FieldGeometry, SimulationSettings};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// How events are written to stdout.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One tagged JSON message per line
    #[default]
    Json,
    /// A table of the final scatter data with the analytic Rutherford angle
    Summary,
}

/// Rutherford - alpha-particle scattering off a point nucleus
#[derive(Parser, Debug, Default)]
#[command(version = VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Projectile kinetic energy in MeV (overrides config file)
    #[arg(short = 'e', long, value_name = "MEV")]
    pub energy: Option<f64>,

    /// Number of standard particles (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub particles: Option<u32>,

    /// Atomic number of the target nucleus (overrides config file)
    #[arg(short = 'z', long, value_name = "Z")]
    pub target_z: Option<u32>,

    /// Add the close-approach particle pairs around the nucleus
    #[arg(short = 'f', long)]
    pub focus: bool,

    /// Field width in display units
    #[arg(long, value_name = "UNITS")]
    pub width: Option<f64>,

    /// Field height in display units
    #[arg(long, value_name = "UNITS")]
    pub height: Option<f64>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load_from_path(Some(path))?,
        None => SimulationConfig::load_from_user_config(),
    };

    if let Some(energy) = args.energy {
        config.run.energy = energy;
    }
    if let Some(particles) = args.particles {
        config.run.num_particles = particles;
    }
    if let Some(target_z) = args.target_z {
        config.run.target_z = target_z;
    }
    if args.focus {
        config.run.focus_mode = true;
    }
    if args.width.is_some() || args.height.is_some() {
        config.field = FieldGeometry::new(
            args.width.unwrap_or(config.field.width),
            args.height.unwrap_or(config.field.height),
        );
    }
    if args.verbose {
        config.logging.level = "debug".to_string();
    }

    config.settings().validate()?;
    Ok(config)
}

/// Writes one event as a single JSON line.
pub fn write_json_line(out: &mut impl Write, event: &SimulationEvent) -> Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the finished scatter data next to the closed-form prediction.
pub fn write_summary(
    out: &mut impl Write,
    settings: &SimulationSettings,
    finished: &FinishedPayload,
) -> Result<()> {
    writeln!(
        out,
        "# {} MeV alpha on Z={} ({} particles), finished {}",
        settings.energy,
        settings.target_z,
        finished.scatter_data.len(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out, "      b (fm)  theta (deg)     analytic")?;

    let mut rows: Vec<(f64, f64)> = finished
        .scatter_data
        .iter()
        .map(|record| (record.impact_parameter_fm(), record.angle_degrees()))
        .collect();
    rows.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (b, angle) in rows {
        let analytic = rutherford_angle(b * FEMTOMETER, settings.energy, settings.target_z);
        writeln!(out, "{b:>12.3} {angle:>12.3} {analytic:>12.3}")?;
    }
    Ok(())
}
