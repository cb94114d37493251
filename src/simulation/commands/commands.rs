use crate::systems::physics::PhysicsWorld;
use crate::systems::spawn::{spawn_batch, SpawnReport};

use super::{Session, TimeSource};

/// Space bar, by physical code or by produced character
pub(crate) fn is_spawn_key(code: &str, key: &str) -> bool {
    code == "Space" || key == " "
}

pub(super) fn spawn<W: PhysicsWorld, T: TimeSource>(session: &mut Session<W, T>) -> SpawnReport {
    spawn_batch(
        &mut session.world,
        &mut session.registry,
        &mut session.rng,
        &session.config.spawn,
        session.config.body_warn_threshold,
    )
}

/// Returns true when the key was consumed (caller should preventDefault)
pub(super) fn handle_key<W: PhysicsWorld, T: TimeSource>(session: &mut Session<W, T>, code: &str, key: &str) -> bool {
    if !is_spawn_key(code, key) {
        return false;
    }
    spawn(session);
    true
}

pub(super) fn resize<W: PhysicsWorld, T: TimeSource>(session: &mut Session<W, T>, width: u32, height: u32) {
    session.viewport.resize(width, height);
    log::debug!(
        "viewport {}x{} (canvas {:?}, aspect {:.3})",
        width,
        height,
        session.viewport.canvas_size(),
        session.viewport.aspect()
    );
}
