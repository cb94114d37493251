//! Scripted physics world for unit tests: records every call and moves
//! dynamic bodies with plain explicit Euler, no collisions.

use crate::core::{Pose, Vec3};
use crate::domain::RigidBodyDesc;

use super::PhysicsWorld;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FakeHandle(pub(crate) usize);

pub(crate) struct FakeBody {
    pub(crate) desc: RigidBodyDesc,
    pub(crate) pose: Pose,
    pub(crate) velocity: Vec3,
}

#[derive(Default)]
pub(crate) struct FakeWorld {
    pub(crate) bodies: Vec<Option<FakeBody>>,
    /// (delta, max_sub_steps) per call
    pub(crate) steps: Vec<(f32, u32)>,
    pub(crate) gravity: Vec3,
}

impl FakeWorld {
    pub(crate) fn new(gravity: Vec3) -> Self {
        Self { gravity, ..Default::default() }
    }

    /// Drop a body so its handle goes stale
    pub(crate) fn invalidate(&mut self, handle: FakeHandle) {
        if let Some(slot) = self.bodies.get_mut(handle.0) {
            *slot = None;
        }
    }

    pub(crate) fn body(&self, handle: FakeHandle) -> Option<&FakeBody> {
        self.bodies.get(handle.0).and_then(|b| b.as_ref())
    }
}

impl PhysicsWorld for FakeWorld {
    type Handle = FakeHandle;

    fn step_simulation(&mut self, delta_seconds: f32, max_sub_steps: u32) {
        self.steps.push((delta_seconds, max_sub_steps));
        let gravity = self.gravity;
        for body in self.bodies.iter_mut().flatten() {
            if body.desc.is_static() {
                continue;
            }
            body.velocity = body.velocity + gravity * delta_seconds;
            body.pose.position = body.pose.position + body.velocity * delta_seconds;
        }
    }

    fn add_rigid_body(&mut self, desc: &RigidBodyDesc) -> FakeHandle {
        self.bodies.push(Some(FakeBody {
            desc: *desc,
            pose: desc.initial_pose,
            velocity: Vec3::zero(),
        }));
        FakeHandle(self.bodies.len() - 1)
    }

    fn motion_state(&self, handle: FakeHandle) -> Option<Pose> {
        self.body(handle).map(|b| b.pose)
    }

    fn body_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_some()).count()
    }

    fn gravity(&self) -> Vec3 {
        self.gravity
    }
}
