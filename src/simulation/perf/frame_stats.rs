use wasm_bindgen::prelude::*;

/// Snapshot of the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(crate) frame: u64,
    pub(crate) raw_delta: f32,
    pub(crate) stepped_delta: f32,
    pub(crate) step_ms: f64,
    pub(crate) sync_ms: f64,
    pub(crate) extract_ms: f64,
    pub(crate) synced: u32,
    pub(crate) skipped: u32,
    pub(crate) entities: u32,
    pub(crate) world_bodies: u32,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn raw_delta(&self) -> f32 { self.raw_delta }
    #[wasm_bindgen(getter)]
    pub fn stepped_delta(&self) -> f32 { self.stepped_delta }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }
    #[wasm_bindgen(getter)]
    pub fn synced(&self) -> u32 { self.synced }
    #[wasm_bindgen(getter)]
    pub fn skipped(&self) -> u32 { self.skipped }
    #[wasm_bindgen(getter)]
    pub fn entities(&self) -> u32 { self.entities }
    #[wasm_bindgen(getter)]
    pub fn world_bodies(&self) -> u32 { self.world_bodies }
}
