use nalgebra::Vector3;

use crate::components::{FlightBody, ObstacleSet};
use crate::resources::CollisionConfig;

/// Outcome of one collision query.
///
/// Ground contact and obstacle strikes resolve differently: the ground
/// settles the body in place, an obstacle destroys it (reset to spawn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    None,
    Ground,
    Obstacle,
}

impl Collision {
    pub fn collided(self) -> bool {
        self != Collision::None
    }
}

/// Classify the body's volume against the ground plane and every obstacle.
///
/// Pure predicate: mutates neither the body, the obstacles, nor the
/// target. Obstacles are scanned linearly; fine at the counts used here.
pub fn check(body: &FlightBody, obstacles: &ObstacleSet, config: &CollisionConfig) -> Collision {
    if body.position.y < config.ground_clearance {
        return Collision::Ground;
    }
    if obstacles.intersects_any(&body.bounding_box()) {
        return Collision::Obstacle;
    }
    Collision::None
}

/// Resolve ground contact: clamp to the clearance height and kill all
/// velocity. Landing, not destruction; repeated grounded ticks are stable.
pub fn settle_on_ground(body: &mut FlightBody, config: &CollisionConfig) {
    body.position.y = config.ground_clearance;
    body.velocity = Vector3::zeros();
}
