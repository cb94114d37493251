//! SpawnBatch - drop a random batch of spheres into the world
//!
//! Each sphere is sampled independently:
//! - radius uniform in [min_radius, max_radius]
//! - x, z = (u - 0.5) * area, so the square is centered on the origin
//! - y = height + u * height_jitter
//! - mass from the sphere volume at the configured density
//!
//! The body is added to the world and paired with its visual in one go, so a
//! registry entry never exists without its body.

use rand::Rng;

use crate::core::{Pose, Vec3};
use crate::domain::visual::COLOR_MASK;
use crate::domain::{sphere_mass, Color, RigidBodyDesc, Shape, SpawnConfig, VisualObject};
use crate::systems::physics::PhysicsWorld;
use crate::systems::registry::BodyRegistry;

/// Parameters drawn for one sphere
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereSample {
    pub radius: f32,
    pub position: Vec3,
    pub color: Color,
    pub mass: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub spawned: u32,
    /// Registry size after the batch
    pub total: usize,
    /// `total` crossed the perf warning threshold
    pub over_threshold: bool,
}

/// Batch size, uniform over the inclusive count range
pub fn sample_count<R: Rng>(rng: &mut R, config: &SpawnConfig) -> u32 {
    rng.gen_range(config.min_count..=config.max_count)
}

pub fn sample_sphere<R: Rng>(rng: &mut R, config: &SpawnConfig) -> SphereSample {
    let radius = config.min_radius + rng.gen::<f32>() * (config.max_radius - config.min_radius);
    let color = rng.gen_range(0..=COLOR_MASK);
    let position = Vec3::new(
        (rng.gen::<f32>() - 0.5) * config.area_x,
        config.height + rng.gen::<f32>() * config.height_jitter,
        (rng.gen::<f32>() - 0.5) * config.area_z,
    );

    SphereSample {
        radius,
        position,
        color,
        mass: sphere_mass(radius, config.density),
    }
}

/// Build one sphere body + visual and register the pair
pub fn spawn_sphere<W: PhysicsWorld>(
    world: &mut W,
    registry: &mut BodyRegistry<W::Handle>,
    sample: &SphereSample,
    config: &SpawnConfig,
) {
    let shape = Shape::sphere(sample.radius);
    let inertia = world.local_inertia(&shape, sample.mass);
    let desc = RigidBodyDesc::dynamic(shape, sample.mass, inertia, sample.position)
        .with_restitution(config.restitution)
        .with_friction(config.friction);
    let handle = world.add_rigid_body(&desc);

    let visual = VisualObject::new(shape, sample.color, Pose::at(sample.position)).casting_shadow();
    registry.register(visual, handle);
}

pub fn spawn_batch<W: PhysicsWorld, R: Rng>(
    world: &mut W,
    registry: &mut BodyRegistry<W::Handle>,
    rng: &mut R,
    config: &SpawnConfig,
    warn_threshold: usize,
) -> SpawnReport {
    let count = sample_count(rng, config);
    log::info!("Creating {} new spheres...", count);

    for _ in 0..count {
        let sample = sample_sphere(rng, config);
        spawn_sphere(world, registry, &sample, config);
    }

    let total = registry.len();
    log::info!("Total rigid bodies now: {}", total);
    let over_threshold = total > warn_threshold;
    if over_threshold {
        log::warn!(
            "{} rigid bodies registered (threshold {}), frame rate may suffer",
            total,
            warn_threshold
        );
    }

    SpawnReport { spawned: count, total, over_threshold }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::systems::physics::fake::FakeWorld;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn counts_stay_in_inclusive_range() {
        let config = SpawnConfig::default();
        let mut r = rng(1);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let n = sample_count(&mut r, &config);
            assert!((10..=20).contains(&n));
            seen_min |= n == 10;
            seen_max |= n == 20;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn samples_stay_in_bounds() {
        let config = SpawnConfig::default();
        let mut r = rng(2);
        for _ in 0..5_000 {
            let s = sample_sphere(&mut r, &config);
            assert!((0.2..=0.8).contains(&s.radius), "radius {}", s.radius);
            assert!((-5.0..=5.0).contains(&s.position.x), "x {}", s.position.x);
            assert!((-5.0..=5.0).contains(&s.position.z), "z {}", s.position.z);
            assert!((10.0..=12.0).contains(&s.position.y), "y {}", s.position.y);
            assert!(s.color <= 0xffffff);
        }
    }

    #[test]
    fn mass_follows_radius() {
        let config = SpawnConfig::default();
        let mut r = rng(3);
        for _ in 0..100 {
            let s = sample_sphere(&mut r, &config);
            let expected = 4.0 / 3.0 * std::f32::consts::PI * s.radius.powi(3);
            assert!((s.mass - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn spawned_bodies_carry_fixed_material() {
        let config = SpawnConfig::default();
        let mut world = FakeWorld::new(Vec3::new(0.0, -9.8, 0.0));
        let mut registry = BodyRegistry::new();
        let sample = SphereSample {
            radius: 0.5,
            position: Vec3::new(1.0, 11.0, -1.0),
            color: 0x123456,
            mass: sphere_mass(0.5, 1.0),
        };
        spawn_sphere(&mut world, &mut registry, &sample, &config);

        let entity = registry.iter().next().unwrap();
        let body = world.body(entity.body).unwrap();
        assert_eq!(body.desc.restitution, 0.6);
        assert_eq!(body.desc.friction, 0.5);
        assert_eq!(body.desc.shape, Shape::sphere(0.5));
        assert!((body.desc.local_inertia.x - 0.4 * sample.mass * 0.25).abs() < 1e-6);
        assert_eq!(body.pose.position, sample.position);

        assert!(entity.visual.cast_shadow);
        assert_eq!(entity.visual.color, 0x123456);
        assert_eq!(entity.visual.radius(), 0.5);
        assert_eq!(entity.visual.pose.position, sample.position);
    }

    #[test]
    fn batch_grows_registry_and_world_together() {
        let config = SpawnConfig::default();
        let mut world = FakeWorld::new(Vec3::new(0.0, -9.8, 0.0));
        let mut registry = BodyRegistry::new();
        let mut r = rng(4);

        let mut before = 0;
        for _ in 0..5 {
            let report = spawn_batch(&mut world, &mut registry, &mut r, &config, 200);
            assert!((10..=20).contains(&report.spawned));
            assert_eq!(report.total, before + report.spawned as usize);
            assert_eq!(registry.len(), report.total);
            assert_eq!(world.body_count(), report.total);
            before = report.total;
        }
    }

    #[test]
    fn threshold_is_advisory_only() {
        let config = SpawnConfig::default();
        let mut world = FakeWorld::new(Vec3::zero());
        let mut registry = BodyRegistry::new();
        let mut r = rng(5);

        let first = spawn_batch(&mut world, &mut registry, &mut r, &config, 5);
        assert!(first.over_threshold);
        let second = spawn_batch(&mut world, &mut registry, &mut r, &config, 5);
        assert!(second.over_threshold);
        assert_eq!(second.total, (first.spawned + second.spawned) as usize);
    }

    #[test]
    fn same_seed_same_batch() {
        let config = SpawnConfig::default();
        let a: Vec<SphereSample> = {
            let mut r = rng(42);
            (0..10).map(|_| sample_sphere(&mut r, &config)).collect()
        };
        let b: Vec<SphereSample> = {
            let mut r = rng(42);
            (0..10).map(|_| sample_sphere(&mut r, &config)).collect()
        };
        assert_eq!(a, b);
    }
}
