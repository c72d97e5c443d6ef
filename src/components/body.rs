use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Euler-angle attitude of the flight body.
///
/// Only the raw angle triplet is persisted; rotations are composed
/// transiently in the fixed order yaw -> pitch -> roll. The handling
/// constants are calibrated against this order, so it must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    /// Rotation about the world X axis [rad]
    pub pitch: f64,
    /// Rotation about the world Y axis [rad], unbounded (wraparound expected)
    pub yaw: f64,
    /// Rotation about the world Z axis [rad]
    pub roll: f64,
}

impl Attitude {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation from body frame to world frame, composed yaw -> pitch -> roll.
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw);
        let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch);
        let roll = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.roll);
        yaw * pitch * roll
    }

    /// The body's up axis expressed in world coordinates. Thrust acts
    /// along this vector.
    pub fn up_vector(&self) -> Vector3<f64> {
        self.rotation() * Vector3::y()
    }
}

/// The single simulated vehicle.
///
/// Created once at simulation start with a fixed spawn pose; never
/// destroyed, only reset in place on collision or explicit reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightBody {
    /// Position in world space [m], +Y up
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Euler-angle attitude [rad]
    pub attitude: Attitude,

    /// Commanded thrust fraction in [0, 1], persistent across frames
    pub throttle: f64,

    /// Collision half-extent [m], fixed per variant
    pub body_radius: f64,
}

impl FlightBody {
    /// Create a new body at rest at the spawn position.
    pub fn new(position: Vector3<f64>, throttle: f64, body_radius: f64) -> Self {
        Self {
            position,
            velocity: Vector3::zeros(),
            attitude: Attitude::default(),
            throttle,
            body_radius,
        }
    }

    /// Overwrite all mutable state with the spawn pose. The body itself
    /// survives; only its fields are rewritten.
    pub fn reset_to(&mut self, position: Vector3<f64>, throttle: f64) {
        self.position = position;
        self.velocity = Vector3::zeros();
        self.attitude = Attitude::default();
        self.throttle = throttle;
    }

    /// Velocity magnitude [m/s].
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Axis-aligned collision volume centered on the current position.
    pub fn bounding_box(&self) -> super::Aabb {
        super::Aabb::from_center_half_extent(self.position, self.body_radius)
    }
}
