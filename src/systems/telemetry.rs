use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{Attitude, FlightBody};
use crate::resources::HudStyle;

/// m/s to km/h.
const MPS_TO_KMH: f64 = 3.6;

/// Read-only pose and telemetry published after each tick.
///
/// This is the only view the render/HUD collaborator gets of the body:
/// a detached copy, never a live reference into the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Camera placement pose
    pub position: Vector3<f64>,
    pub attitude: Attitude,
    /// Altitude above the world floor [m]
    pub altitude: f64,
    /// Ground/air speed [km/h]
    pub speed_kmh: f64,
    /// Captures so far this run
    pub score: u32,
}

impl TelemetrySnapshot {
    pub fn capture(body: &FlightBody, score: u32) -> Self {
        Self {
            position: body.position,
            attitude: body.attitude,
            altitude: body.position.y,
            speed_kmh: body.speed() * MPS_TO_KMH,
            score,
        }
    }

    /// HUD altitude readout, one decimal.
    pub fn altitude_text(&self, style: &HudStyle) -> String {
        format!("{:.1}{}", self.altitude, style.altitude_suffix)
    }

    /// HUD speed readout, zero decimals.
    pub fn speed_text(&self, style: &HudStyle) -> String {
        format!("{:.0}{}", self.speed_kmh, style.speed_suffix)
    }

    /// Capture counter line, for variants that show one.
    pub fn score_text(&self, style: &HudStyle) -> Option<String> {
        style.show_score.then(|| self.score.to_string())
    }
}
