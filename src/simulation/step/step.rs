use crate::systems::physics::{clamp_delta, PhysicsWorld};
use crate::systems::sync::sync_step;

use super::render_extract::extract_transforms;
use super::{FrameReport, PerfTimer, Session, TimeSource};

/// One frame: clamp -> step -> sync -> extract, strictly in that order.
///
/// The renderer draws after this returns, from the transform buffer.
pub(super) fn frame<W: PhysicsWorld, T: TimeSource>(session: &mut Session<W, T>, raw_delta: f32) -> FrameReport {
    let perf_on = session.perf_enabled;
    session.stats.reset();

    let stepped_delta = clamp_delta(raw_delta, session.config.max_frame_delta);

    if perf_on {
        let t0 = PerfTimer::start();
        session.world.step_simulation(stepped_delta, session.config.max_sub_steps);
        session.stats.step_ms = t0.elapsed_ms();
    } else {
        session.world.step_simulation(stepped_delta, session.config.max_sub_steps);
    }

    let sync = if perf_on {
        let t0 = PerfTimer::start();
        let report = sync_step(&session.world, &mut session.registry);
        session.stats.sync_ms = t0.elapsed_ms();
        report
    } else {
        sync_step(&session.world, &mut session.registry)
    };

    if perf_on {
        let t0 = PerfTimer::start();
        extract_transforms(session);
        session.stats.extract_ms = t0.elapsed_ms();
    } else {
        extract_transforms(session);
    }

    session.frame += 1;

    let stats = &mut session.stats;
    stats.frame = session.frame;
    stats.raw_delta = raw_delta;
    stats.stepped_delta = stepped_delta;
    stats.synced = sync.synced;
    stats.skipped = sync.skipped;
    stats.entities = session.registry.len() as u32;
    stats.world_bodies = session.world.body_count() as u32;

    FrameReport {
        frame: session.frame,
        raw_delta,
        stepped_delta,
        sync,
    }
}
