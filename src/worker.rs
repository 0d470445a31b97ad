//! Runs the simulation app on its own thread and exchanges messages with it
//! over channels.
//!
//! Commands sent through [`EngineWorker::send`] are applied in order between
//! integration ticks. Events come back in the order the engine produced them.
//! Dropping the handle disconnects the command channel, which stops the app.

use crate::error::{Error, Result};
use crate::plugins::simulation::{SimulationPlugin, SimulationSet};
use crate::prelude::*;
use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::JoinHandle;
use std::time::Duration;

#[derive(Resource)]
struct CommandInbox(Mutex<Receiver<SimulationCommand>>);

#[derive(Resource)]
struct EventOutbox(Sender<SimulationEvent>);

/// Moves queued consumer commands into the app's command events.
fn receive_commands(
    inbox: Res<CommandInbox>,
    mut commands: EventWriter<SimulationCommand>,
    mut exit: EventWriter<AppExit>,
) {
    let Ok(receiver) = inbox.0.lock() else {
        exit.write(AppExit::error());
        return;
    };

    loop {
        match receiver.try_recv() {
            Ok(command) => {
                commands.write(command);
            }
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                debug!("Command channel closed, stopping simulation worker");
                exit.write(AppExit::Success);
                break;
            }
        }
    }
}

fn forward_events(
    outbox: Res<EventOutbox>,
    mut events: EventReader<SimulationEvent>,
    mut exit: EventWriter<AppExit>,
) {
    for event in events.read() {
        if outbox.0.send(event.clone()).is_err() {
            debug!("Event channel closed, stopping simulation worker");
            exit.write(AppExit::Success);
            return;
        }
    }
}

/// Builds the headless app the worker thread runs.
pub fn build_worker_app(
    config: SimulationConfig,
    with_logging: bool,
    commands: Receiver<SimulationCommand>,
    events: Sender<SimulationEvent>,
) -> App {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)));
    if with_logging {
        app.add_plugins(LogPlugin {
            level: config.logging.level(),
            filter: config.logging.filter.clone(),
            ..default()
        });
    }
    app.add_plugins(SimulationPlugin::with_config(config));

    app.insert_resource(CommandInbox(Mutex::new(commands)));
    app.insert_resource(EventOutbox(events));
    app.add_systems(
        PreUpdate,
        receive_commands.before(SimulationSet::Commands),
    );
    app.add_systems(Last, forward_events);

    app
}

/// Handle to a simulation running on a background thread.
pub struct EngineWorker {
    commands: Option<Sender<SimulationCommand>>,
    events: Receiver<SimulationEvent>,
    thread: Option<JoinHandle<()>>,
}

impl EngineWorker {
    /// Starts a worker. `with_logging` installs the log subscriber inside the
    /// worker app; pass `false` when the host has already set one up.
    pub fn spawn(config: SimulationConfig, with_logging: bool) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let thread = std::thread::Builder::new()
            .name("rutherford-engine".to_string())
            .spawn(move || {
                let mut app = build_worker_app(config, with_logging, command_rx, event_tx);
                let exit = app.run();
                debug!("Simulation worker exited: {:?}", exit);
            })?;

        Ok(Self {
            commands: Some(command_tx),
            events: event_rx,
            thread: Some(thread),
        })
    }

    pub fn send(&self, command: SimulationCommand) -> Result<()> {
        self.commands
            .as_ref()
            .ok_or(Error::WorkerDisconnected)?
            .send(command)
            .map_err(|_| Error::WorkerDisconnected)
    }

    /// Blocks until the next event arrives.
    pub fn recv(&self) -> Result<SimulationEvent> {
        self.events.recv().map_err(|_| Error::WorkerDisconnected)
    }

    /// Waits up to `timeout`; `Ok(None)` means nothing arrived in time.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<SimulationEvent>> {
        match self.events.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(Error::WorkerDisconnected),
        }
    }

    /// Events already queued, without blocking.
    pub fn try_iter(&self) -> impl Iterator<Item = SimulationEvent> + '_ {
        self.events.try_iter()
    }

    /// Disconnects the command channel and waits for the worker thread to stop.
    pub fn shutdown(mut self) -> Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> Result<()> {
        self.commands.take();
        match self.thread.take() {
            Some(thread) => thread.join().map_err(|_| Error::WorkerPanicked),
            None => Ok(()),
        }
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            error!("{}", e);
        }
    }
}
