use crate::core::{Pose, Vec3};

use super::shape::Shape;

/// Everything the physics world needs to build one rigid body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidBodyDesc {
    pub shape: Shape,
    /// 0 = static (immovable)
    pub mass: f32,
    pub local_inertia: Vec3,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub friction: f32,
    pub initial_pose: Pose,
}

impl RigidBodyDesc {
    /// Static body; friction defaults to 0.5
    pub fn fixed(shape: Shape, position: Vec3, restitution: f32) -> Self {
        Self {
            shape,
            mass: 0.0,
            local_inertia: Vec3::zero(),
            restitution: restitution.clamp(0.0, 1.0),
            friction: 0.5,
            initial_pose: Pose::at(position),
        }
    }

    pub fn dynamic(shape: Shape, mass: f32, local_inertia: Vec3, position: Vec3) -> Self {
        Self {
            shape,
            mass: mass.max(0.0),
            local_inertia,
            restitution: 0.0,
            friction: 0.5,
            initial_pose: Pose::at(position),
        }
    }

    pub fn with_restitution(mut self, r: f32) -> Self {
        self.restitution = r.clamp(0.0, 1.0);
        self
    }

    pub fn with_friction(mut self, f: f32) -> Self {
        self.friction = f.max(0.0);
        self
    }

    pub fn is_static(&self) -> bool {
        self.mass <= 0.0
    }
}
