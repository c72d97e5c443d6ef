mod body;
mod input;
mod obstacle;
mod target;

pub use body::{Attitude, FlightBody};
pub use input::{Control, InputState};
pub use obstacle::{Aabb, Obstacle, ObstacleSet};
pub use target::{Target, TargetKind};
