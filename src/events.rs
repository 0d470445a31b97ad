//! Centralized message definitions
//!
//! All messages crossing the engine boundary are defined in this module.
//! Commands flow from the consumer into the engine; events flow back out.
//! Both serialize as `{"type": ..., "payload": ...}` objects.

use crate::physics::analysis::ScatterRecord;
use crate::physics::paths::PathDeltas;
use crate::physics::{DisplayPoint, ScatteringEngine, SimulationSettings};
use crate::utils::color::to_hex;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Consumer → engine.
#[derive(Event, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum SimulationCommand {
    Start,
    Pause,
    Reset(SimulationSettings),
}

/// Engine → consumer.
#[derive(Event, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum SimulationEvent {
    Update(UpdatePayload),
    Finished(FinishedPayload),
    ResetComplete(ResetCompletePayload),
}

impl SimulationEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            SimulationEvent::Update(_) => "update",
            SimulationEvent::Finished(_) => "finished",
            SimulationEvent::ResetComplete(_) => "resetComplete",
        }
    }
}

/// Position and colour of one particle in display space.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParticleSnapshot {
    pub id: u32,
    pub position: DisplayPoint,
    pub color: String,
}

/// Display-relevant view of a particle at the start of a run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticleDescriptor {
    pub id: u32,
    pub position: DisplayPoint,
    pub color: String,
    /// Unsigned impact parameter (fm).
    pub impact_parameter: f64,
    pub finished: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayload {
    pub particles: Vec<ParticleSnapshot>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub new_paths: PathDeltas,
}

impl UpdatePayload {
    /// Snapshot of every particle plus the path points sampled since the last flush.
    ///
    /// Flushes the engine's path buffers.
    pub fn flush(engine: &mut ScatteringEngine) -> Self {
        let particles = engine
            .particles()
            .iter()
            .map(|particle| ParticleSnapshot {
                id: particle.id(),
                position: engine.display_position(particle),
                color: to_hex(particle.color()),
            })
            .collect();

        Self {
            particles,
            new_paths: engine.flush_paths(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinishedPayload {
    pub scatter_data: Vec<ScatterRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResetCompletePayload {
    pub particles: Vec<ParticleDescriptor>,
    /// Single-point path per particle: its launch position.
    pub initial_paths: BTreeMap<u32, Vec<DisplayPoint>>,
}

impl ResetCompletePayload {
    /// Describes a freshly reset engine.
    pub fn describe(engine: &ScatteringEngine, initial_points: &[DisplayPoint]) -> Self {
        let particles = engine
            .particles()
            .iter()
            .map(|particle| ParticleDescriptor {
                id: particle.id(),
                position: engine.display_position(particle),
                color: to_hex(particle.color()),
                impact_parameter: particle.impact_parameter()
                    / crate::physics::constants::FEMTOMETER,
                finished: particle.is_finished(),
            })
            .collect();

        let initial_paths = engine
            .particles()
            .iter()
            .zip(initial_points)
            .map(|(particle, point)| (particle.id(), vec![*point]))
            .collect();

        Self {
            particles,
            initial_paths,
        }
    }
}
