use tracing::debug;

use crate::components::{Control, FlightBody, InputState, ObstacleSet, Target};
use crate::resources::SimConfig;
use crate::systems::collision::{self, Collision};
use crate::systems::spawner::TargetSpawner;
use crate::systems::telemetry::TelemetrySnapshot;
use crate::systems::integrator;
use crate::utils::{RngManager, SimError};

/// One drone, one world, one live target.
///
/// Owns every piece of mutable simulation state and advances it tick by
/// tick. The caller owns scheduling: it supplies elapsed time to
/// [`Simulation::tick`] and consumes the returned snapshot; no particular
/// frame loop is assumed. Not re-entrant; one tick completes before the
/// next begins.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    body: FlightBody,
    obstacles: ObstacleSet,
    spawner: TargetSpawner,
    target: Target,
    score: u32,
}

impl Simulation {
    /// Build a simulation over an externally generated obstacle set and
    /// place the first target.
    pub fn new(config: SimConfig, obstacles: ObstacleSet) -> Result<Self, SimError> {
        config.validate()?;

        let rng = RngManager::new(config.seed);
        let mut spawner = TargetSpawner::new(config.target, rng.get_rng("target_spawner"));
        let body = FlightBody::new(
            config.start.position,
            config.start.throttle,
            config.collision.body_radius,
        );
        let target = spawner.spawn(&obstacles);

        Ok(Self {
            config,
            body,
            obstacles,
            spawner,
            target,
            score: 0,
        })
    }

    /// Advance one tick: integrate, collide, honor the reset command,
    /// test capture, publish.
    ///
    /// Input is sampled once up front; later edits by the event
    /// collaborator are picked up next tick. All state transitions
    /// (crash reset, capture respawn) complete within this call.
    pub fn tick(&mut self, input: &InputState, dt: f64) -> TelemetrySnapshot {
        let input = input.snapshot();

        integrator::advance(&mut self.body, &input, &self.config.physics, dt);

        match collision::check(&self.body, &self.obstacles, &self.config.collision) {
            Collision::Ground => collision::settle_on_ground(&mut self.body, &self.config.collision),
            Collision::Obstacle => self.reset_body(),
            Collision::None => {}
        }

        // The reset command behaves exactly like a crash and is honored
        // regardless of physics state.
        if input.is_held(Control::Reset) {
            self.reset_body();
        }

        if self.spawner.check_capture(&self.body, &self.target) {
            self.score += 1;
            self.target = self.spawner.spawn(&self.obstacles);
            debug!(score = self.score, "target captured");
        }

        self.snapshot()
    }

    /// The read-only view published to the render/HUD collaborator.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::capture(&self.body, self.score)
    }

    pub fn body(&self) -> &FlightBody {
        &self.body
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    fn reset_body(&mut self) {
        debug!("reset to spawn pose");
        self.body
            .reset_to(self.config.start.position, self.config.start.throttle);
    }
}
