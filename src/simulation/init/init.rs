use crate::core::{EngineError, Pose, SimulationClock, TimeSource, Vec3, POSE_STRIDE};
use crate::domain::{DemoConfig, RigidBodyDesc, Shape, VisualObject};
use crate::systems::physics::PhysicsWorld;
use crate::systems::registry::BodyRegistry;

use super::frame_stats::FrameStats;
use super::random::session_rng;
use super::viewport::Viewport;
use super::{Ground, RenderBuffers, Session};

pub(super) fn create_session<W: PhysicsWorld, T: TimeSource>(
    config: DemoConfig,
    mut world: W,
    time: T,
) -> Result<Session<W, T>, EngineError> {
    config.validate()?;

    let ground = create_ground(&config, &mut world);
    let rng = session_rng(config.seed);
    let viewport = Viewport::new(config.viewport_scale);

    log::info!(
        "session ready: gravity {:?}, ground {}x{}x{}",
        world.gravity().to_array(),
        config.ground.width,
        config.ground.height,
        config.ground.depth
    );

    Ok(Session {
        world,
        registry: BodyRegistry::with_capacity(256),
        clock: SimulationClock::with_source(time),
        rng,
        ground,
        viewport,
        render: RenderBuffers { transforms: Vec::with_capacity(256 * POSE_STRIDE) },
        frame: 0,
        perf_enabled: false,
        stats: FrameStats::default(),
        config,
    })
}

/// Static ground slab with its top face at y = 0
fn create_ground<W: PhysicsWorld>(config: &DemoConfig, world: &mut W) -> Ground<W::Handle> {
    let g = &config.ground;
    let shape = Shape::cuboid(g.width, g.height, g.depth);
    let position = Vec3::new(0.0, -g.height / 2.0, 0.0);

    let desc = RigidBodyDesc::fixed(shape, position, g.restitution).with_friction(g.friction);
    let body = world.add_rigid_body(&desc);
    let visual = VisualObject::new(shape, g.color, Pose::at(position)).receiving_shadow();

    Ground { visual, body }
}
