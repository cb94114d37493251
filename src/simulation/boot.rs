//! One-shot startup.
//!
//! The physics backend arrives through a future that is awaited exactly once.
//! Until it resolves the engine is `Loading` and ignores frames and input; a
//! failed load, or a config that does not validate, parks it in `Failed` for
//! good (no retry).

use std::future::Future;

use crate::core::{EngineError, PlatformTime, TimeSource};
use crate::domain::DemoConfig;
use crate::systems::physics::PhysicsWorld;
use crate::systems::spawn::SpawnReport;

use super::{FrameReport, Session};

enum EngineState<W: PhysicsWorld, T: TimeSource> {
    Loading,
    Ready(Session<W, T>),
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineStatus {
    Loading,
    Ready,
    Failed,
}

impl EngineStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineStatus::Loading => "loading",
            EngineStatus::Ready => "ready",
            EngineStatus::Failed => "failed",
        }
    }
}

pub struct Engine<W: PhysicsWorld, T: TimeSource = PlatformTime> {
    config: DemoConfig,
    time: Option<T>,
    state: EngineState<W, T>,
}

impl<W: PhysicsWorld> Engine<W, PlatformTime> {
    pub fn new(config: DemoConfig) -> Self {
        Self::with_time_source(config, PlatformTime::new())
    }
}

impl<W: PhysicsWorld, T: TimeSource> Engine<W, T> {
    pub fn with_time_source(config: DemoConfig, time: T) -> Self {
        Self { config, time: Some(time), state: EngineState::Loading }
    }

    /// Await the physics load and build the session on success.
    ///
    /// Only the first completed call does anything; later calls return
    /// `AlreadyBooted` without polling `load`. A load future dropped before it
    /// resolves leaves the engine in `Loading`, so boot can be retried.
    pub async fn boot<F>(&mut self, load: F) -> Result<(), EngineError>
    where
        F: Future<Output = Result<W, EngineError>>,
    {
        if !matches!(self.state, EngineState::Loading) {
            return Err(EngineError::AlreadyBooted);
        }

        let result = load.await.and_then(|world| {
            let time = self.time.take().ok_or(EngineError::AlreadyBooted)?;
            Session::with_time_source(self.config.clone(), world, time)
        });

        match result {
            Ok(session) => {
                self.state = EngineState::Ready(session);
                log::info!("Physics engine initialized successfully.");
                Ok(())
            }
            Err(e) => {
                log::error!("Error during physics initialization: {}", e);
                self.state = EngineState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn status(&self) -> EngineStatus {
        match self.state {
            EngineState::Loading => EngineStatus::Loading,
            EngineState::Ready(_) => EngineStatus::Ready,
            EngineState::Failed(_) => EngineStatus::Failed,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            EngineState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&Session<W, T>> {
        match &self.state {
            EngineState::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session<W, T>> {
        match &mut self.state {
            EngineState::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// `None` until the engine is ready
    pub fn frame(&mut self) -> Option<FrameReport> {
        self.session_mut().map(Session::frame)
    }

    /// Ignored (returns false) until the engine is ready
    pub fn handle_key(&mut self, code: &str, key: &str) -> bool {
        match self.session_mut() {
            Some(session) => session.handle_key(code, key),
            None => false,
        }
    }

    pub fn spawn_batch(&mut self) -> Result<SpawnReport, EngineError> {
        self.session_mut()
            .map(Session::spawn_batch)
            .ok_or(EngineError::NotReady)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(session) = self.session_mut() {
            session.resize(width, height);
        }
    }
}
