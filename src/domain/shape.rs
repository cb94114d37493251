use std::f32::consts::PI;

use crate::core::Vec3;

/// Collision / render geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Axis-aligned box given by half extents
    Cuboid { half_extents: Vec3 },
}

impl Shape {
    pub fn sphere(radius: f32) -> Self {
        Shape::Sphere { radius }
    }

    /// Box from full width / height / depth
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Shape::Cuboid { half_extents: Vec3::new(width * 0.5, height * 0.5, depth * 0.5) }
    }

    pub fn volume(&self) -> f32 {
        match *self {
            Shape::Sphere { radius } => 4.0 / 3.0 * PI * radius.powi(3),
            Shape::Cuboid { half_extents: h } => 8.0 * h.x * h.y * h.z,
        }
    }

    /// Principal moments of inertia about the center of mass.
    ///
    /// Solid sphere: 2/5 m r². Solid box: m/3 (b² + c²) per axis with half
    /// extents a, b, c. A zero mass gives zero inertia (static body).
    pub fn local_inertia(&self, mass: f32) -> Vec3 {
        if mass <= 0.0 {
            return Vec3::zero();
        }
        match *self {
            Shape::Sphere { radius } => {
                let i = 0.4 * mass * radius * radius;
                Vec3::new(i, i, i)
            }
            Shape::Cuboid { half_extents: h } => {
                let (x2, y2, z2) = (h.x * h.x, h.y * h.y, h.z * h.z);
                Vec3::new(
                    mass / 3.0 * (y2 + z2),
                    mass / 3.0 * (x2 + z2),
                    mass / 3.0 * (x2 + y2),
                )
            }
        }
    }
}

/// Mass of a uniform-density sphere: density · 4/3 · π · r³
#[inline]
pub fn sphere_mass(radius: f32, density: f32) -> f32 {
    density * Shape::sphere(radius).volume()
}
