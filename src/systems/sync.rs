//! Mirror physics poses onto visuals.
//!
//! Runs once per frame, after the physics step and before the renderer reads
//! the transform buffer. Entities whose body no longer resolves keep their
//! last pose and are counted as skipped.

use crate::systems::physics::PhysicsWorld;
use crate::systems::registry::BodyRegistry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: u32,
    pub skipped: u32,
}

pub fn sync_step<W: PhysicsWorld>(world: &W, registry: &mut BodyRegistry<W::Handle>) -> SyncReport {
    let mut report = SyncReport::default();

    registry.for_each(|id, entity| match world.motion_state(entity.body) {
        Some(pose) => {
            entity.visual.pose.position = pose.position;
            entity.visual.pose.orientation = pose.orientation;
            report.synced += 1;
        }
        None => {
            log::debug!("sync: entity {} has a stale body handle {:?}, skipping", id.0, entity.body);
            report.skipped += 1;
        }
    });

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pose, Quat, Vec3};
    use crate::domain::{RigidBodyDesc, Shape, VisualObject};
    use crate::systems::physics::fake::{FakeHandle, FakeWorld};

    fn spawn(world: &mut FakeWorld, registry: &mut BodyRegistry<FakeHandle>, pos: Vec3) -> FakeHandle {
        let shape = Shape::sphere(0.5);
        let desc = RigidBodyDesc::dynamic(shape, 1.0, shape.local_inertia(1.0), pos);
        let handle = world.add_rigid_body(&desc);
        registry.register(VisualObject::new(shape, 0x00ff00, Pose::at(pos)), handle);
        handle
    }

    #[test]
    fn copies_position_and_orientation() {
        let mut world = FakeWorld::new(Vec3::new(0.0, -9.8, 0.0));
        let mut registry = BodyRegistry::new();
        let h = spawn(&mut world, &mut registry, Vec3::new(1.0, 10.0, -2.0));

        let rotated = Quat::new(0.0, 0.7071068, 0.0, 0.7071068);
        world.bodies[h.0].as_mut().unwrap().pose = Pose::new(Vec3::new(1.0, 4.0, -2.0), rotated);

        let report = sync_step(&world, &mut registry);
        assert_eq!(report, SyncReport { synced: 1, skipped: 0 });

        let visual = registry.iter().next().unwrap().visual;
        assert_eq!(visual.pose.position, Vec3::new(1.0, 4.0, -2.0));
        assert_eq!(visual.pose.orientation, rotated);
    }

    #[test]
    fn repeated_sync_without_step_is_idempotent() {
        let mut world = FakeWorld::new(Vec3::new(0.0, -9.8, 0.0));
        let mut registry = BodyRegistry::new();
        spawn(&mut world, &mut registry, Vec3::new(0.0, 10.0, 0.0));
        spawn(&mut world, &mut registry, Vec3::new(2.0, 11.0, 1.0));

        world.step_simulation(0.05, 10);
        sync_step(&world, &mut registry);
        let first: Vec<Pose> = registry.iter().map(|e| e.visual.pose).collect();

        sync_step(&world, &mut registry);
        sync_step(&world, &mut registry);
        let again: Vec<Pose> = registry.iter().map(|e| e.visual.pose).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn stale_body_is_skipped_and_later_entities_still_sync() {
        let mut world = FakeWorld::new(Vec3::new(0.0, -9.8, 0.0));
        let mut registry = BodyRegistry::new();
        let a = spawn(&mut world, &mut registry, Vec3::new(0.0, 10.0, 0.0));
        let b = spawn(&mut world, &mut registry, Vec3::new(1.0, 10.0, 0.0));
        let c = spawn(&mut world, &mut registry, Vec3::new(2.0, 10.0, 0.0));

        world.step_simulation(0.1, 10);
        sync_step(&world, &mut registry);
        let stale_before = registry.iter().nth(1).unwrap().visual.pose;

        world.invalidate(b);
        world.step_simulation(0.1, 10);
        let report = sync_step(&world, &mut registry);
        assert_eq!(report, SyncReport { synced: 2, skipped: 1 });

        let poses: Vec<Pose> = registry.iter().map(|e| e.visual.pose).collect();
        assert_eq!(poses[1], stale_before);
        assert_eq!(poses[0], world.motion_state(a).unwrap());
        assert_eq!(poses[2], world.motion_state(c).unwrap());
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let world = FakeWorld::new(Vec3::zero());
        let mut registry: BodyRegistry<FakeHandle> = BodyRegistry::new();
        assert_eq!(sync_step(&world, &mut registry), SyncReport::default());
    }
}
