//! rapier3d backend.
//!
//! Stepping follows fixed-step accumulator semantics: the requested delta is
//! added to an accumulator that is drained in whole `fixed_time_step` steps,
//! at most `max_sub_steps` of them per call. Time left over after hitting the
//! cap is dropped so a slow frame cannot snowball into the next one.

use rapier3d::na::{Isometry3, Quaternion, Translation3, UnitQuaternion};
use rapier3d::prelude::*;

use crate::core::{EngineError, Pose, Quat, Vec3};
use crate::domain::{RigidBodyDesc, Shape};

use super::PhysicsWorld;

pub struct RapierWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    fixed_time_step: f32,
    accumulator: f32,
    steps_taken: u64,
}

impl RapierWorld {
    pub fn new(gravity: Vec3, fixed_time_step: f32) -> Self {
        let fixed_time_step = if fixed_time_step > 0.0 { fixed_time_step } else { 1.0 / 60.0 };
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = fixed_time_step;

        Self {
            gravity: Vector::new(gravity.x, gravity.y, gravity.z),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            fixed_time_step,
            accumulator: 0.0,
            steps_taken: 0,
        }
    }

    /// Boot-time loader for `Engine::boot`. rapier is linked into the module,
    /// so there is nothing to fetch; only the world parameters are checked.
    pub async fn load(gravity: Vec3, fixed_time_step: f32) -> Result<Self, EngineError> {
        if !(gravity.x.is_finite() && gravity.y.is_finite() && gravity.z.is_finite()) {
            return Err(EngineError::LoadFailed(format!("non-finite gravity {:?}", gravity)));
        }
        if !(fixed_time_step > 0.0 && fixed_time_step.is_finite()) {
            return Err(EngineError::LoadFailed(format!("bad fixed time step {}", fixed_time_step)));
        }
        Ok(Self::new(gravity, fixed_time_step))
    }

    /// Internal solver steps run since construction
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Handle that never resolves to a body
    pub fn invalid_handle() -> RigidBodyHandle {
        RigidBodyHandle::invalid()
    }

    fn step_once(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
        self.steps_taken += 1;
    }

    fn collider_for(desc: &RigidBodyDesc) -> Collider {
        let builder = match desc.shape {
            Shape::Sphere { radius } => ColliderBuilder::ball(radius),
            Shape::Cuboid { half_extents: h } => ColliderBuilder::cuboid(h.x, h.y, h.z),
        };
        let builder = builder.restitution(desc.restitution).friction(desc.friction);
        if desc.is_static() {
            builder.build()
        } else {
            let inertia = desc.local_inertia;
            builder
                .mass_properties(MassProperties::new(
                    Point::origin(),
                    desc.mass,
                    Vector::new(inertia.x, inertia.y, inertia.z),
                ))
                .build()
        }
    }
}

impl PhysicsWorld for RapierWorld {
    type Handle = RigidBodyHandle;

    fn step_simulation(&mut self, delta_seconds: f32, max_sub_steps: u32) {
        if !(delta_seconds > 0.0) {
            return;
        }

        if max_sub_steps == 0 {
            self.step_once(delta_seconds);
            return;
        }

        self.accumulator += delta_seconds;
        let available = (self.accumulator / self.fixed_time_step).floor() as u32;
        self.accumulator -= available as f32 * self.fixed_time_step;
        let steps = available.min(max_sub_steps);

        for _ in 0..steps {
            self.step_once(self.fixed_time_step);
        }
    }

    fn add_rigid_body(&mut self, desc: &RigidBodyDesc) -> RigidBodyHandle {
        let p = desc.initial_pose.position;
        let q = desc.initial_pose.orientation;
        let rotation = UnitQuaternion::from_quaternion(Quaternion::new(q.w, q.x, q.y, q.z));

        let builder = if desc.is_static() {
            RigidBodyBuilder::fixed()
        } else {
            RigidBodyBuilder::dynamic()
        };
        let body = builder
            .position(Isometry3::from_parts(Translation3::new(p.x, p.y, p.z), rotation))
            .build();

        let handle = self.bodies.insert(body);
        let collider = Self::collider_for(desc);
        self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    fn motion_state(&self, handle: RigidBodyHandle) -> Option<Pose> {
        let body = self.bodies.get(handle)?;
        let iso = body.position();
        let t = iso.translation.vector;
        let c = iso.rotation.quaternion().coords;
        Some(Pose::new(Vec3::new(t.x, t.y, t.z), Quat::new(c.x, c.y, c.z, c.w)))
    }

    fn local_inertia(&self, shape: &Shape, mass: f32) -> Vec3 {
        if mass <= 0.0 {
            return Vec3::zero();
        }
        let shared = match *shape {
            Shape::Sphere { radius } => SharedShape::ball(radius),
            Shape::Cuboid { half_extents: h } => SharedShape::cuboid(h.x, h.y, h.z),
        };
        let unit = shared.mass_properties(1.0);
        if unit.mass() <= 0.0 {
            return shape.local_inertia(mass);
        }
        let i = unit.principal_inertia() * (mass / unit.mass());
        Vec3::new(i.x, i.y, i.z)
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn gravity(&self) -> Vec3 {
        Vec3::new(self.gravity.x, self.gravity.y, self.gravity.z)
    }
}
