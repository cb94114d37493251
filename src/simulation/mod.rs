//! Session - the explicit context every frame phase runs against
//!
//! A session owns the physics world, the body registry, the clock and the
//! RNG. Nothing is global: the wasm facade owns one session through
//! `Engine`, tests build their own around a scripted world.
//!
//! Frame order: clock tick -> clamp -> physics step -> sync -> extract.
//! Input (spawn, resize) runs between frames and is visible to the next sync.

use rand::rngs::StdRng;

use crate::core::clock::PerfTimer;
use crate::core::{EngineError, PlatformTime, SimulationClock, TimeSource};
use crate::domain::{DemoConfig, VisualObject};
use crate::systems::physics::PhysicsWorld;
use crate::systems::registry::BodyRegistry;
use crate::systems::spawn::SpawnReport;
use crate::systems::sync::SyncReport;

#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "render/viewport.rs"]
mod viewport;
mod boot;
#[cfg(target_arch = "wasm32")]
mod status;
#[cfg(feature = "rapier")]
mod facade;

pub use boot::{Engine, EngineStatus};
#[cfg(feature = "rapier")]
pub use facade::Demo;
#[cfg(all(feature = "rapier", target_arch = "wasm32"))]
pub use facade::start;
pub use frame_stats::FrameStats;
pub use viewport::Viewport;

/// Static ground slab: rendered, never moves, not part of the registry
pub struct Ground<H> {
    pub visual: VisualObject,
    pub body: H,
}

/// What one frame did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub raw_delta: f32,
    /// Delta actually handed to the physics step
    pub stepped_delta: f32,
    pub sync: SyncReport,
}

pub(crate) struct RenderBuffers {
    /// px, py, pz, qx, qy, qz, qw per registered entity
    pub(crate) transforms: Vec<f32>,
}

pub struct Session<W: PhysicsWorld, T: TimeSource = PlatformTime> {
    config: DemoConfig,
    world: W,
    registry: BodyRegistry<W::Handle>,
    clock: SimulationClock<T>,
    rng: StdRng,
    ground: Ground<W::Handle>,
    viewport: Viewport,
    render: RenderBuffers,

    frame: u64,
    perf_enabled: bool,
    stats: FrameStats,
}

impl<W: PhysicsWorld> Session<W, PlatformTime> {
    /// Build a session around an already-loaded world; adds the ground.
    /// Fails with `InvalidConfig` before touching the world if `config` does
    /// not validate.
    pub fn new(config: DemoConfig, world: W) -> Result<Self, EngineError> {
        init::create_session(config, world, PlatformTime::new())
    }
}

impl<W: PhysicsWorld, T: TimeSource> Session<W, T> {
    pub fn with_time_source(config: DemoConfig, world: W, time: T) -> Result<Self, EngineError> {
        init::create_session(config, world, time)
    }

    /// Run one frame using the wall clock
    pub fn frame(&mut self) -> FrameReport {
        let delta = self.clock.tick();
        step::frame(self, delta)
    }

    /// Run one frame with an explicit delta (seconds, unclamped)
    pub fn frame_with_delta(&mut self, delta: f32) -> FrameReport {
        step::frame(self, delta)
    }

    pub fn spawn_batch(&mut self) -> SpawnReport {
        commands::spawn(self)
    }

    pub fn handle_key(&mut self, code: &str, key: &str) -> bool {
        commands::handle_key(self, code, key)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        commands::resize(self, width, height)
    }

    /// Enable or disable per-phase timings (adds timer overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn registry(&self) -> &BodyRegistry<W::Handle> {
        &self.registry
    }

    pub fn ground(&self) -> &Ground<W::Handle> {
        &self.ground
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn entity_count(&self) -> usize {
        self.registry.len()
    }

    /// Transform buffer as of the last frame
    pub fn transforms(&self) -> &[f32] {
        &self.render.transforms
    }

    /// Get pointer to the transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        render_extract::transforms_ptr(self)
    }

    pub fn transforms_len(&self) -> usize {
        render_extract::transforms_len(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
