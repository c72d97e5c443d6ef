use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::components::{Aabb, ObstacleSet};

/// Parameters for the reference block-city generator.
///
/// The core only ever sees the resulting [`ObstacleSet`]; any generator
/// producing axis-aligned volumes can stand in for this one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityConfig {
    /// Towers per side of the square grid
    pub grid: u32,
    /// Spacing between tower centers [m]
    pub spacing: f64,
    /// Tower footprint half-width range [m]
    pub min_half_width: f64,
    pub max_half_width: f64,
    /// Tower height range [m]
    pub min_height: f64,
    pub max_height: f64,
    /// No tower within this horizontal radius of the origin [m], so the
    /// spawn pose is never inside a building
    pub clear_radius: f64,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            grid: 8,
            spacing: 14.0,
            min_half_width: 1.5,
            max_half_width: 4.0,
            min_height: 6.0,
            max_height: 30.0,
            clear_radius: 10.0,
        }
    }
}

/// Generate the static obstacle volumes for a block city: towers sitting
/// on the ground plane on a jittered square grid.
pub fn generate_city(config: &CityConfig, rng: &mut ChaCha8Rng) -> ObstacleSet {
    let mut towers = Vec::new();
    let extent = (config.grid.saturating_sub(1)) as f64 * config.spacing / 2.0;

    for i in 0..config.grid {
        for j in 0..config.grid {
            let jitter = 0.3 * config.spacing;
            let cx = i as f64 * config.spacing - extent + rng.gen_range(-jitter..=jitter);
            let cz = j as f64 * config.spacing - extent + rng.gen_range(-jitter..=jitter);
            if cx.hypot(cz) < config.clear_radius {
                continue;
            }

            let half_width = rng.gen_range(config.min_half_width..=config.max_half_width);
            let height = rng.gen_range(config.min_height..=config.max_height);
            towers.push(Aabb::new(
                Vector3::new(cx - half_width, 0.0, cz - half_width),
                Vector3::new(cx + half_width, height, cz + half_width),
            ));
        }
    }

    info!(towers = towers.len(), "generated city obstacles");
    ObstacleSet::new(towers)
}
