pub mod body;
pub mod config;
pub mod shape;
pub mod visual;

pub use body::RigidBodyDesc;
pub use config::{DemoConfig, GroundConfig, SpawnConfig};
pub use shape::{sphere_mass, Shape};
pub use visual::{Color, VisualObject};
