//! Sphere Drop Engine - physics-to-visual sync for the sphere drop demo
//!
//! The page renders a ground slab and batches of spheres; this crate owns the
//! physics world and keeps the renderer's transforms in step with it.
//!
//! Architecture:
//! - core/        - math, clock, errors, logging
//! - domain/      - shapes, body / visual descriptors, config
//! - systems/     - physics backend, body registry, sync, spawn
//! - simulation/  - session, frame driver, boot, wasm facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine (panic hook + console logging)
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(log::Level::Info);
    log::info!("Sphere Drop engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, Pose, Quat, SimulationClock, Vec3};
pub use domain::DemoConfig;
pub use simulation::{Engine, EngineStatus, FrameReport, FrameStats, Session};
#[cfg(feature = "rapier")]
pub use simulation::Demo;
#[cfg(all(feature = "rapier", target_arch = "wasm32"))]
pub use simulation::start;
#[cfg(feature = "rapier")]
pub use systems::physics::RapierWorld;
pub use systems::physics::PhysicsWorld;
pub use systems::registry::{BodyRegistry, EntityId, PairedEntity};
