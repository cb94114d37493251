pub mod clock;
pub mod error;
pub mod logging;
pub mod math;

pub use clock::{PlatformTime, SimulationClock, TimeSource};
pub use error::EngineError;
pub use math::{Pose, Quat, Vec3, POSE_STRIDE};
