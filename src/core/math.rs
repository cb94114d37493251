//! Minimal 3D math shared between the physics backend and the render extract.
//!
//! Only what the sync path needs: positions, unit quaternions, poses.

/// 3D vector (world units are meters)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    pub fn from_array(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

/// Orientation quaternion, stored x, y, z, w (same order the renderer expects)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Quat = Quat { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Position + orientation of a body or a visual
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self { position, orientation }
    }

    pub const fn at(position: Vec3) -> Self {
        Self { position, orientation: Quat::IDENTITY }
    }

    /// Pack as px, py, pz, qx, qy, qz, qw
    #[inline]
    pub fn write_to(&self, out: &mut [f32]) {
        out[0] = self.position.x;
        out[1] = self.position.y;
        out[2] = self.position.z;
        out[3] = self.orientation.x;
        out[4] = self.orientation.y;
        out[5] = self.orientation.z;
        out[6] = self.orientation.w;
    }
}

/// Floats per packed pose
pub const POSE_STRIDE: usize = 7;
