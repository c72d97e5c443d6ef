use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// What the live goal looks like to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetKind {
    /// A floating point target.
    Point,
    /// An upright gate. `yaw` is measured about +Y with zero facing +Z;
    /// capture ignores it (sphere test only), it exists for the renderer.
    Gate { yaw: f64 },
}

/// The single live goal of the capture mini-game.
///
/// Exactly one exists at any time; replacing it is destroy-and-recreate,
/// never an in-place update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub position: Vector3<f64>,
    pub kind: TargetKind,
}

impl Target {
    pub fn point(position: Vector3<f64>) -> Self {
        Self {
            position,
            kind: TargetKind::Point,
        }
    }

    /// A gate at `position` whose plane faces `look_at`.
    pub fn gate_facing(position: Vector3<f64>, look_at: Vector3<f64>) -> Self {
        let yaw = (look_at.x - position.x).atan2(look_at.z - position.z);
        Self {
            position,
            kind: TargetKind::Gate { yaw },
        }
    }

    pub fn distance_to(&self, point: &Vector3<f64>) -> f64 {
        (self.position - point).norm()
    }
}
