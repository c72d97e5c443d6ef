use nalgebra::Vector3;

use super::config::{AssistConfig, HudStyle, SimConfig, StartConfig};

/// The five shipped variants, expressed as presets over the one
/// parameterized core. Flight model and game loop are identical; only the
/// constants differ.
impl SimConfig {
    /// Open field, bare HUD. The baseline tuning.
    pub fn freestyle() -> Self {
        Self::default()
    }

    /// Dense tower grid, tighter body, score on the HUD.
    pub fn city_dash() -> Self {
        let mut config = Self::default();
        config.name = "city_dash".to_string();
        config.collision.ground_clearance = 0.3;
        config.collision.body_radius = 0.35;
        config.target.region_half_extent = 70.0;
        config.target.min_altitude = 3.0;
        config.target.max_altitude = 25.0;
        config.target.capture_radius = 4.5;
        config.hud = scored_hud();
        config.seed = 7;
        config
    }

    /// Race gates instead of point targets; gates face the origin.
    pub fn gate_run() -> Self {
        let mut config = Self::default();
        config.name = "gate_run".to_string();
        config.collision.ground_clearance = 0.4;
        config.target.gates = true;
        config.target.capture_radius = 5.0;
        config.target.min_altitude = 4.0;
        config.target.max_altitude = 10.0;
        config.hud = scored_hud();
        config.seed = 11;
        config
    }

    /// Altitude-hold assist enabled, small calm arena.
    pub fn hover_trainer() -> Self {
        let mut config = Self::default();
        config.name = "hover_trainer".to_string();
        config.physics.assist = Some(AssistConfig::default());
        config.target.region_half_extent = 30.0;
        config.target.max_altitude = 8.0;
        config.start = StartConfig {
            position: Vector3::new(0.0, 4.0, 0.0),
            throttle: 0.5,
        };
        config.hud = scored_hud();
        config.seed = 23;
        config
    }

    /// Wide arena, low floor, snappier rates, tight capture radius.
    pub fn night_sprint() -> Self {
        let mut config = Self::default();
        config.name = "night_sprint".to_string();
        config.physics.angular_rate = 4.0;
        config.physics.throttle_rate = 2.0;
        config.collision.ground_clearance = 0.2;
        config.target.region_half_extent = 90.0;
        config.target.capture_radius = 4.0;
        config.hud = scored_hud();
        config.seed = 31;
        config
    }

    /// Look up a preset by its variant name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "freestyle" => Some(Self::freestyle()),
            "city_dash" => Some(Self::city_dash()),
            "gate_run" => Some(Self::gate_run()),
            "hover_trainer" => Some(Self::hover_trainer()),
            "night_sprint" => Some(Self::night_sprint()),
            _ => None,
        }
    }
}

fn scored_hud() -> HudStyle {
    HudStyle {
        altitude_suffix: " m".to_string(),
        speed_suffix: " km/h".to_string(),
        show_score: true,
    }
}
