//! Demo configuration.
//!
//! Every field has a default, so `{}` (or no JSON at all) reproduces the stock
//! demo: gravity -9.8, deltas clamped to 0.1 s, 10 sub-steps, batches of 10-20
//! spheres dropped from 10-12 m over a 10 x 10 m square.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Vec3};

use super::visual::Color;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    pub gravity: [f32; 3],
    /// Upper bound on the delta handed to the physics step (seconds)
    pub max_frame_delta: f32,
    pub max_sub_steps: u32,
    /// Internal fixed step of the physics backend (seconds)
    pub fixed_time_step: f32,
    /// Total registered bodies above which a perf warning is logged
    pub body_warn_threshold: usize,
    /// Canvas size relative to the window
    pub viewport_scale: f32,
    /// Fixed RNG seed; random per session when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub spawn: SpawnConfig,
    pub ground: GroundConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpawnConfig {
    pub min_count: u32,
    pub max_count: u32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Full X / Z extent of the spawn square, centered on the origin
    pub area_x: f32,
    pub area_z: f32,
    pub height: f32,
    pub height_jitter: f32,
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub restitution: f32,
    pub friction: f32,
    pub color: Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -9.8, 0.0],
            max_frame_delta: 0.1,
            max_sub_steps: 10,
            fixed_time_step: 1.0 / 60.0,
            body_warn_threshold: 200,
            viewport_scale: 0.8,
            seed: None,
            spawn: SpawnConfig::default(),
            ground: GroundConfig::default(),
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_count: 10,
            max_count: 20,
            min_radius: 0.2,
            max_radius: 0.8,
            area_x: 10.0,
            area_z: 10.0,
            height: 10.0,
            height_jitter: 2.0,
            restitution: 0.6,
            friction: 0.5,
            density: 1.0,
        }
    }
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            width: 25.0,
            height: 0.5,
            depth: 25.0,
            restitution: 0.7,
            friction: 0.5,
            color: 0xaaaaaa,
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// `None` or blank input falls back to the defaults
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, EngineError> {
        match json.map(str::trim) {
            Some(s) if !s.is_empty() => Self::from_json(s),
            _ => Ok(Self::default()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn gravity(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        fn invalid(msg: String) -> Result<(), EngineError> {
            Err(EngineError::InvalidConfig(msg))
        }

        if !self.gravity.iter().all(|g| g.is_finite()) {
            return invalid(format!("gravity must be finite, got {:?}", self.gravity));
        }
        if !(self.max_frame_delta > 0.0) {
            return invalid(format!("maxFrameDelta must be > 0, got {}", self.max_frame_delta));
        }
        if !(self.fixed_time_step > 0.0) {
            return invalid(format!("fixedTimeStep must be > 0, got {}", self.fixed_time_step));
        }
        if !(self.viewport_scale > 0.0 && self.viewport_scale <= 1.0) {
            return invalid(format!("viewportScale must be in (0, 1], got {}", self.viewport_scale));
        }

        let s = &self.spawn;
        if s.min_count > s.max_count {
            return invalid(format!("spawn.minCount {} > spawn.maxCount {}", s.min_count, s.max_count));
        }
        if !(s.min_radius > 0.0) || s.min_radius > s.max_radius {
            return invalid(format!(
                "spawn radius range must satisfy 0 < min <= max, got [{}, {}]",
                s.min_radius, s.max_radius
            ));
        }
        if s.area_x < 0.0 || s.area_z < 0.0 || s.height_jitter < 0.0 {
            return invalid("spawn area and height jitter must be non-negative".to_string());
        }
        if !(s.density > 0.0) {
            return invalid(format!("spawn.density must be > 0, got {}", s.density));
        }
        if !(0.0..=1.0).contains(&s.restitution) || s.friction < 0.0 {
            return invalid("spawn restitution must be in [0, 1] and friction >= 0".to_string());
        }

        let g = &self.ground;
        if !(g.width > 0.0 && g.height > 0.0 && g.depth > 0.0) {
            return invalid(format!(
                "ground dimensions must be positive, got {} x {} x {}",
                g.width, g.height, g.depth
            ));
        }
        if !(0.0..=1.0).contains(&g.restitution) || g.friction < 0.0 {
            return invalid("ground restitution must be in [0, 1] and friction >= 0".to_string());
        }

        Ok(())
    }
}
