use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::utils::SimError;

/// Flight-model constants shared by every variant. Defaults are the
/// calibrated values of the original tuning; drag is applied per tick,
/// not per second, and the other constants are tuned against that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravitational acceleration [m/s^2]
    pub gravity: f64,
    /// Thrust acceleration at full throttle [m/s^2]
    pub thrust_max: f64,
    /// Per-tick velocity decay fraction in [0, 1)
    pub drag: f64,
    /// Angular rate added per held directional input [rad/s]
    pub angular_rate: f64,
    /// Throttle slew rate [1/s]
    pub throttle_rate: f64,
    /// Altitude-hold assist; `None` flies pure acro.
    pub assist: Option<AssistConfig>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            thrust_max: 25.0,
            drag: 0.02,
            angular_rate: 3.5,
            throttle_rate: 1.5,
            assist: None,
        }
    }
}

/// Supplemental hover stabilisation. Engages only when the throttle sits
/// within `band` of `hover_throttle` AND the body is descending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssistConfig {
    /// Throttle at which the controller is trimmed to hover
    pub hover_throttle: f64,
    /// Half-width of the throttle band around the hover point
    pub band: f64,
    /// Upward correction [m/s^2] applied while engaged
    pub gain: f64,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            hover_throttle: 0.5,
            band: 0.08,
            gain: 6.0,
        }
    }
}

/// Collision geometry of the body and the world floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Minimum altitude [m]; below it the body settles onto the ground
    pub ground_clearance: f64,
    /// Collision half-extent of the body [m]
    pub body_radius: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            ground_clearance: 0.5,
            body_radius: 0.4,
        }
    }
}

/// Placement policy for the target/gate spawner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Half-size of the square horizontal placement region around the
    /// world origin [m]
    pub region_half_extent: f64,
    /// Vertical placement band [m]
    pub min_altitude: f64,
    pub max_altitude: f64,
    /// Capture sphere radius [m]
    pub capture_radius: f64,
    /// Half-extent of the candidate volume tested against obstacles [m]
    pub target_radius: f64,
    /// Placement attempts before accepting an overlapping candidate
    pub retry_budget: u32,
    /// Spawn gates (yaw facing the origin) instead of point targets
    pub gates: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            region_half_extent: 60.0,
            min_altitude: 2.0,
            max_altitude: 12.0,
            capture_radius: 4.0,
            target_radius: 2.0,
            retry_budget: 100,
            gates: false,
        }
    }
}

/// The spawn pose the body starts from and is reset to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartConfig {
    /// Spawn position [m]
    pub position: Vector3<f64>,
    /// Throttle after a reset
    pub throttle: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 5.0, 0.0),
            throttle: 0.0,
        }
    }
}

/// How the HUD strings are dressed up per variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudStyle {
    /// Unit suffix appended to the altitude readout
    pub altitude_suffix: String,
    /// Unit suffix appended to the speed readout
    pub speed_suffix: String,
    /// Whether the capture counter line is shown
    pub show_score: bool,
}

/// Complete configuration of one simulation variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Variant name, used for logs and preset lookup
    pub name: String,
    pub physics: PhysicsConfig,
    pub collision: CollisionConfig,
    pub target: TargetConfig,
    pub start: StartConfig,
    pub hud: HudStyle,
    /// Master seed for every stochastic component
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            name: "freestyle".to_string(),
            physics: PhysicsConfig::default(),
            collision: CollisionConfig::default(),
            target: TargetConfig::default(),
            start: StartConfig::default(),
            hud: HudStyle::default(),
            seed: 0,
        }
    }
}

impl SimConfig {
    pub fn load(path: &str) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: SimConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        info!(name = %config.name, "loaded simulation config");
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Reject configurations the core cannot run sanely. Per-tick inputs
    /// are clamped defensively instead; this guards the constants.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(0.0..1.0).contains(&self.physics.drag) {
            return Err(SimError::InvalidConfig(format!(
                "drag must be in [0, 1), got {}",
                self.physics.drag
            )));
        }
        if self.physics.angular_rate <= 0.0 || self.physics.throttle_rate <= 0.0 {
            return Err(SimError::InvalidConfig(
                "angular_rate and throttle_rate must be positive".to_string(),
            ));
        }
        if self.physics.thrust_max < 0.0 || self.physics.gravity < 0.0 {
            return Err(SimError::InvalidConfig(
                "thrust_max and gravity must be non-negative".to_string(),
            ));
        }
        if let Some(assist) = &self.physics.assist {
            if !(0.0..=1.0).contains(&assist.hover_throttle) || assist.band < 0.0 || assist.gain < 0.0
            {
                return Err(SimError::InvalidConfig(
                    "assist hover_throttle must be in [0, 1] with non-negative band and gain"
                        .to_string(),
                ));
            }
        }
        if self.collision.ground_clearance <= 0.0 || self.collision.body_radius <= 0.0 {
            return Err(SimError::InvalidConfig(
                "ground_clearance and body_radius must be positive".to_string(),
            ));
        }
        if self.target.capture_radius <= 0.0 || self.target.target_radius < 0.0 {
            return Err(SimError::InvalidConfig(
                "capture_radius must be positive and target_radius non-negative".to_string(),
            ));
        }
        if self.target.retry_budget == 0 {
            return Err(SimError::InvalidConfig(
                "retry_budget must be at least 1".to_string(),
            ));
        }
        if self.target.region_half_extent < 0.0 {
            return Err(SimError::InvalidConfig(
                "region_half_extent must be non-negative".to_string(),
            ));
        }
        if self.target.min_altitude > self.target.max_altitude {
            return Err(SimError::InvalidConfig(format!(
                "inverted target altitude band: {} > {}",
                self.target.min_altitude, self.target.max_altitude
            )));
        }
        if !(0.0..=1.0).contains(&self.start.throttle) {
            return Err(SimError::InvalidConfig(format!(
                "start throttle must be in [0, 1], got {}",
                self.start.throttle
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn test_out_of_range_drag_is_rejected() {
        let mut config = SimConfig::default();
        config.physics.drag = 1.0;
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_retry_budget_is_rejected() {
        let mut config = SimConfig::default();
        config.target.retry_budget = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_altitude_band_is_rejected() {
        let mut config = SimConfig::default();
        config.target.min_altitude = 10.0;
        config.target.max_altitude = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = SimConfig::default();
        let text = serde_yaml::to_string(&config).unwrap();
        let parsed: SimConfig = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
