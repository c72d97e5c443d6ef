use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in world space, stored as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Aabb {
    /// Build a box from two corners, normalising so `min <= max` per axis.
    pub fn new(a: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self {
            min: Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Cube of the given half-extent centered on `center`.
    pub fn from_center_half_extent(center: Vector3<f64>, half_extent: f64) -> Self {
        let half = Vector3::new(half_extent, half_extent, half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Per-axis interval overlap; touching faces count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// A static world obstacle. Immutable once generated.
pub type Obstacle = Aabb;

/// The static obstacle volumes of one world, generated once before the
/// simulation loop begins and read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    /// A world with no obstacles at all (ground plane only).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Linear scan of every obstacle. Adequate at the obstacle counts used
    /// here (<= ~100); a spatial index could replace it without changing
    /// the contract.
    pub fn intersects_any(&self, probe: &Aabb) -> bool {
        self.obstacles.iter().any(|b| b.intersects(probe))
    }
}
