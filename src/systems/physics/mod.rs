//! Physics collaborator contract.
//!
//! The engine never looks inside the solver: it hands over body descriptors,
//! asks for a step, and reads poses back by handle. `RapierWorld` is the real
//! backend; tests inject their own world.

#[cfg(feature = "rapier")]
mod rapier;
#[cfg(test)]
pub(crate) mod fake;

#[cfg(feature = "rapier")]
pub use rapier::RapierWorld;

use std::fmt::Debug;

use crate::core::{Pose, Vec3};
use crate::domain::{RigidBodyDesc, Shape};

pub trait PhysicsWorld {
    /// Non-owning lookup handle; may go stale
    type Handle: Copy + Debug + PartialEq;

    /// Advance dynamics by `delta_seconds`, using at most `max_sub_steps`
    /// internal steps.
    fn step_simulation(&mut self, delta_seconds: f32, max_sub_steps: u32);

    fn add_rigid_body(&mut self, desc: &RigidBodyDesc) -> Self::Handle;

    /// Current world transform of a body, `None` if the handle is stale
    fn motion_state(&self, handle: Self::Handle) -> Option<Pose>;

    /// Principal inertia of `shape` with the given mass
    fn local_inertia(&self, shape: &Shape, mass: f32) -> Vec3 {
        shape.local_inertia(mass)
    }

    fn body_count(&self) -> usize;

    fn gravity(&self) -> Vec3;
}

/// Bound a frame delta before it reaches the stepper.
///
/// Long gaps (backgrounded tab) are capped at `max_delta`; negative or NaN
/// deltas become zero.
#[inline]
pub fn clamp_delta(delta: f32, max_delta: f32) -> f32 {
    if delta.is_nan() {
        return 0.0;
    }
    delta.clamp(0.0, max_delta)
}
