pub mod physics;
pub mod registry;
pub mod spawn;
pub mod sync;
