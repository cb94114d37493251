use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::{DemoConfig, VisualObject};
use crate::systems::physics::{PhysicsWorld, RapierWorld};
use crate::systems::registry::EntityId;

use super::{Engine, FrameStats, Session};

/// Boot the demo: parse config, load physics, add the ground.
///
/// On failure the page's loading banner shows the error and the promise
/// rejects; nothing is created.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn start(config_json: Option<String>) -> Result<Demo, JsValue> {
    crate::core::logging::init_logging(log::Level::Info);

    match Demo::load(config_json.as_deref()).await {
        Ok(demo) => {
            super::status::hide_loading();
            Ok(demo)
        }
        Err(e) => {
            let msg = format!("Failed to initialize the physics engine: {}", e);
            super::status::show_loading_error(&msg);
            Err(JsValue::from_str(&msg))
        }
    }
}

#[wasm_bindgen]
pub struct Demo {
    engine: Engine<RapierWorld>,
}

impl Demo {
    pub async fn load(config_json: Option<&str>) -> Result<Demo, EngineError> {
        let config = DemoConfig::from_optional_json(config_json)?;
        let load = RapierWorld::load(config.gravity(), config.fixed_time_step);
        let mut engine = Engine::new(config);
        engine.boot(load).await?;
        Ok(Demo { engine })
    }

    fn session(&self) -> Option<&Session<RapierWorld>> {
        self.engine.session()
    }

    fn visual(&self, idx: u32) -> Option<VisualObject> {
        self.session()?.registry().get(EntityId(idx)).map(|e| e.visual)
    }
}

#[wasm_bindgen]
impl Demo {
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.engine.status().as_str().to_string()
    }

    /// Step, sync and extract one frame. Returns the number of entities synced.
    pub fn frame(&mut self) -> u32 {
        self.engine.frame().map(|r| r.sync.synced).unwrap_or(0)
    }

    /// Keydown hook. Returns true when the key was consumed.
    pub fn on_key_down(&mut self, code: &str, key: &str) -> bool {
        self.engine.handle_key(code, key)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.engine.resize(width, height);
    }

    /// Enable or disable per-phase frame timings
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        if let Some(session) = self.engine.session_mut() {
            session.enable_perf_metrics(enabled);
        }
    }

    pub fn get_frame_stats(&self) -> FrameStats {
        self.session().map(|s| s.stats().clone()).unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> usize {
        self.session().map(|s| s.entity_count()).unwrap_or(0)
    }

    /// Bodies in the physics world, ground included
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.session().map(|s| s.world().body_count()).unwrap_or(0)
    }

    /// Get pointer to the transform buffer (7 floats per entity)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.session().map(|s| s.transforms_ptr()).unwrap_or(std::ptr::null())
    }

    pub fn transforms_len(&self) -> usize {
        self.session().map(|s| s.transforms_len()).unwrap_or(0)
    }

    pub fn sphere_radius(&self, idx: u32) -> f32 {
        self.visual(idx).map(|v| v.radius()).unwrap_or(0.0)
    }

    pub fn sphere_color(&self, idx: u32) -> u32 {
        self.visual(idx).map(|v| v.color).unwrap_or(0)
    }

    /// Ground slab as [width, height, depth, center_y]
    pub fn ground_dimensions(&self) -> Vec<f32> {
        match self.session() {
            Some(s) => {
                let g = &s.config().ground;
                vec![g.width, g.height, g.depth, s.ground().visual.pose.position.y]
            }
            None => Vec::new(),
        }
    }

    pub fn ground_color(&self) -> u32 {
        self.session().map(|s| s.ground().visual.color).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn aspect(&self) -> f32 {
        self.session().map(|s| s.viewport().aspect()).unwrap_or(1.0)
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_width(&self) -> u32 {
        self.session().map(|s| s.viewport().canvas_size().0).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_height(&self) -> u32 {
        self.session().map(|s| s.viewport().canvas_size().1).unwrap_or(0)
    }
}
