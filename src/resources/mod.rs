mod config;
mod presets;

pub use config::{
    AssistConfig, CollisionConfig, HudStyle, PhysicsConfig, SimConfig, StartConfig, TargetConfig,
};
