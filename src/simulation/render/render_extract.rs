use crate::core::POSE_STRIDE;
use crate::systems::physics::PhysicsWorld;

use super::{Session, TimeSource};

/// Pack every visual pose into the flat transform buffer, registry order.
pub(super) fn extract_transforms<W: PhysicsWorld, T: TimeSource>(session: &mut Session<W, T>) -> usize {
    let count = session.registry.len();
    let buf = &mut session.render.transforms;
    buf.resize(count * POSE_STRIDE, 0.0);

    for (entity, out) in session.registry.iter().zip(buf.chunks_exact_mut(POSE_STRIDE)) {
        entity.visual.pose.write_to(out);
    }

    count
}

pub(super) fn transforms_ptr<W: PhysicsWorld, T: TimeSource>(session: &Session<W, T>) -> *const f32 {
    session.render.transforms.as_ptr()
}

pub(super) fn transforms_len<W: PhysicsWorld, T: TimeSource>(session: &Session<W, T>) -> usize {
    session.render.transforms.len()
}
