use crate::physics::ScatteringEngine;
use crate::prelude::*;

/// The engine instance owned by the controller.
#[derive(Resource, Deref, DerefMut, Debug, Clone, Default)]
pub struct Engine(pub ScatteringEngine);

/// Per-run bookkeeping that outlives a single frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunProgress {
    /// Set once the `finished` event has gone out for the current run.
    pub completion_reported: bool,
}

impl RunProgress {
    pub fn clear(&mut self) {
        self.completion_reported = false;
    }
}
