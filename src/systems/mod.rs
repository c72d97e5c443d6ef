pub mod collision;
pub mod integrator;
pub mod spawner;
pub mod step;
pub mod telemetry;

pub use collision::Collision;
pub use spawner::TargetSpawner;
pub use step::Simulation;
pub use telemetry::TelemetrySnapshot;
