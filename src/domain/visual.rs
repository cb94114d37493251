use crate::core::Pose;

use super::shape::Shape;

/// 0xRRGGBB
pub type Color = u32;

pub const COLOR_MASK: Color = 0x00ff_ffff;

/// Renderable mirror of a body. The JS renderer owns the actual mesh; this is
/// the state it reads back each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualObject {
    pub geometry: Shape,
    pub color: Color,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub pose: Pose,
}

impl VisualObject {
    pub fn new(geometry: Shape, color: Color, pose: Pose) -> Self {
        Self {
            geometry,
            color: color & COLOR_MASK,
            cast_shadow: false,
            receive_shadow: false,
            pose,
        }
    }

    pub fn casting_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    pub fn receiving_shadow(mut self) -> Self {
        self.receive_shadow = true;
        self
    }

    /// Sphere radius, or 0 for other geometry
    pub fn radius(&self) -> f32 {
        match self.geometry {
            Shape::Sphere { radius } => radius,
            _ => 0.0,
        }
    }
}
