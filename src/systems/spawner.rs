use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::components::{Aabb, FlightBody, ObstacleSet, Target};
use crate::resources::TargetConfig;

/// Places and replaces the single live target.
///
/// Candidates are sampled uniformly inside the configured region and
/// rejected while they overlap an obstacle, up to the retry budget. The
/// RNG is owned and seeded explicitly, so a fixed seed replays the exact
/// target sequence.
#[derive(Debug, Clone)]
pub struct TargetSpawner {
    config: TargetConfig,
    rng: ChaCha8Rng,
}

impl TargetSpawner {
    pub fn new(config: TargetConfig, rng: ChaCha8Rng) -> Self {
        Self { config, rng }
    }

    /// Produce a fresh target clear of every obstacle.
    ///
    /// If the retry budget runs out the final candidate is accepted,
    /// overlap and all; a rare visual glitch beats an unbounded loop.
    pub fn spawn(&mut self, obstacles: &ObstacleSet) -> Target {
        let mut candidate = self.sample();
        let mut attempts = 1u32;
        while attempts < self.config.retry_budget {
            let volume = Aabb::from_center_half_extent(candidate, self.config.target_radius);
            if !obstacles.intersects_any(&volume) {
                debug!(attempts, x = candidate.x, y = candidate.y, z = candidate.z, "placed target");
                return self.place(candidate);
            }
            candidate = self.sample();
            attempts += 1;
        }

        let volume = Aabb::from_center_half_extent(candidate, self.config.target_radius);
        if obstacles.intersects_any(&volume) {
            warn!(
                attempts,
                "target placement budget exhausted, accepting overlapping candidate"
            );
        }
        self.place(candidate)
    }

    /// Sphere test against the capture radius. Gate orientation is
    /// ignored on purpose; capture is distance only.
    pub fn check_capture(&self, body: &FlightBody, target: &Target) -> bool {
        target.distance_to(&body.position) < self.config.capture_radius
    }

    pub fn config(&self) -> &TargetConfig {
        &self.config
    }

    fn sample(&mut self) -> Vector3<f64> {
        let r = self.config.region_half_extent;
        let x = self.rng.gen_range(-r..=r);
        let z = self.rng.gen_range(-r..=r);
        let y = self
            .rng
            .gen_range(self.config.min_altitude..=self.config.max_altitude);
        Vector3::new(x, y, z)
    }

    fn place(&self, position: Vector3<f64>) -> Target {
        if self.config.gates {
            // Gates face the arena origin at their own height.
            Target::gate_facing(position, Vector3::new(0.0, position.y, 0.0))
        } else {
            Target::point(position)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TargetKind;
    use crate::utils::RngManager;

    fn spawner(config: TargetConfig, seed: u64) -> TargetSpawner {
        TargetSpawner::new(config, RngManager::new(seed).get_rng("target_spawner"))
    }

    #[test]
    fn test_targets_land_inside_the_region() {
        let config = TargetConfig::default();
        let mut spawner = spawner(config, 42);
        for _ in 0..200 {
            let target = spawner.spawn(&ObstacleSet::empty());
            assert!(target.position.x.abs() <= config.region_half_extent);
            assert!(target.position.z.abs() <= config.region_half_extent);
            assert!(target.position.y >= config.min_altitude);
            assert!(target.position.y <= config.max_altitude);
        }
    }

    #[test]
    fn test_rejection_keeps_targets_clear_of_obstacles() {
        // A slab covering the whole -X half of the region forces real
        // rejection work on roughly half of all candidates.
        let config = TargetConfig {
            region_half_extent: 20.0,
            min_altitude: 2.0,
            max_altitude: 18.0,
            ..TargetConfig::default()
        };
        let obstacles = ObstacleSet::new(vec![Aabb::new(
            Vector3::new(-25.0, 0.0, -25.0),
            Vector3::new(0.0, 30.0, 25.0),
        )]);

        let mut spawner = spawner(config, 7);
        for _ in 0..100 {
            let target = spawner.spawn(&obstacles);
            let volume = Aabb::from_center_half_extent(target.position, config.target_radius);
            assert!(
                !obstacles.intersects_any(&volume),
                "target at {:?} overlaps the slab",
                target.position
            );
        }
    }

    #[test]
    fn test_exhausted_budget_still_yields_a_target() {
        // Obstacle covering every possible candidate: the fallback must
        // accept an overlapping placement instead of spinning forever.
        let config = TargetConfig {
            region_half_extent: 10.0,
            retry_budget: 50,
            ..TargetConfig::default()
        };
        let obstacles = ObstacleSet::new(vec![Aabb::new(
            Vector3::new(-100.0, -1.0, -100.0),
            Vector3::new(100.0, 100.0, 100.0),
        )]);

        let mut spawner = spawner(config, 3);
        let target = spawner.spawn(&obstacles);
        assert!(target.position.x.abs() <= config.region_half_extent);
    }

    #[test]
    fn test_capture_is_a_strict_sphere_test() {
        let config = TargetConfig::default();
        let spawner = spawner(config, 1);
        let target = Target::point(Vector3::new(0.0, 5.0, 3.0));

        let near = FlightBody::new(Vector3::new(0.0, 5.0, 0.0), 0.0, 0.4);
        assert!(spawner.check_capture(&near, &target), "distance 3 < radius 4");

        let far = FlightBody::new(Vector3::new(0.0, 5.0, 8.0), 0.0, 0.4);
        assert!(!spawner.check_capture(&far, &target));
    }

    #[test]
    fn test_gate_variant_spawns_oriented_gates() {
        let config = TargetConfig {
            gates: true,
            ..TargetConfig::default()
        };
        let mut spawner = spawner(config, 9);
        let target = spawner.spawn(&ObstacleSet::empty());
        assert!(matches!(target.kind, TargetKind::Gate { .. }));
    }

    #[test]
    fn test_same_seed_replays_same_sequence() {
        let config = TargetConfig::default();
        let mut a = spawner(config, 1234);
        let mut b = spawner(config, 1234);
        for _ in 0..50 {
            assert_eq!(a.spawn(&ObstacleSet::empty()), b.spawn(&ObstacleSet::empty()));
        }
    }
}
