pub mod components;
pub mod environment;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{Aabb, Attitude, Control, FlightBody, InputState, Obstacle, ObstacleSet, Target, TargetKind};
pub use environment::{generate_city, CityConfig};
pub use resources::{AssistConfig, CollisionConfig, HudStyle, PhysicsConfig, SimConfig, StartConfig, TargetConfig};
pub use systems::{Collision, Simulation, TargetSpawner, TelemetrySnapshot};
pub use utils::{RngManager, SimError};
