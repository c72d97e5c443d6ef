use nalgebra::Vector3;

use crate::components::{Control, FlightBody, InputState};
use crate::resources::PhysicsConfig;

/// Advance the flight model by one tick.
///
/// Kinematic acro-mode update, in fixed order: angular rate integration,
/// throttle integration, force computation, forward-Euler velocity update
/// with per-tick drag, position update. Given identical `(body, input, dt)`
/// the result is bit-for-bit reproducible.
///
/// A `dt` that is zero, negative, or non-finite is a no-op; a throttle
/// outside [0, 1] handed in by an upstream bug is clamped at entry.
pub fn advance(body: &mut FlightBody, input: &InputState, config: &PhysicsConfig, dt: f64) {
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }
    body.throttle = body.throttle.clamp(0.0, 1.0);

    integrate_rates(body, input, config.angular_rate, dt);
    integrate_throttle(body, input, config.throttle_rate, dt);

    let accel = net_acceleration(body, config);
    body.velocity += accel * dt;
    // Per-tick decay, deliberately not scaled by dt: the tuning constants
    // are calibrated against it.
    body.velocity *= 1.0 - config.drag;
    body.position += body.velocity * dt;
}

/// Rate control: each held input adds or subtracts angular rate directly.
/// Opposite inputs cancel exactly; no smoothing, no self-leveling, and no
/// clamping of the angles themselves.
fn integrate_rates(body: &mut FlightBody, input: &InputState, rate: f64, dt: f64) {
    let step = rate * dt;
    let attitude = &mut body.attitude;
    if input.is_held(Control::PitchForward) {
        attitude.pitch -= step;
    }
    if input.is_held(Control::PitchBack) {
        attitude.pitch += step;
    }
    if input.is_held(Control::RollLeft) {
        attitude.roll += step;
    }
    if input.is_held(Control::RollRight) {
        attitude.roll -= step;
    }
    if input.is_held(Control::YawLeft) {
        attitude.yaw += step;
    }
    if input.is_held(Control::YawRight) {
        attitude.yaw -= step;
    }
}

/// Throttle is sticky: it only moves while a throttle input is held. Up is
/// sampled first and suppresses down when both are held.
fn integrate_throttle(body: &mut FlightBody, input: &InputState, rate: f64, dt: f64) {
    if input.is_held(Control::ThrottleUp) {
        body.throttle = (body.throttle + rate * dt).min(1.0);
    } else if input.is_held(Control::ThrottleDown) {
        body.throttle = (body.throttle - rate * dt).max(0.0);
    }
}

fn net_acceleration(body: &FlightBody, config: &PhysicsConfig) -> Vector3<f64> {
    let thrust = body.attitude.up_vector() * (body.throttle * config.thrust_max);
    let mut accel = thrust + Vector3::new(0.0, -config.gravity, 0.0);

    if let Some(assist) = &config.assist {
        // Engages only inside the throttle band AND while descending,
        // never on either condition alone.
        let in_band = (body.throttle - assist.hover_throttle).abs() <= assist.band;
        if in_band && body.velocity.y < 0.0 {
            accel.y += assist.gain;
        }
    }

    accel
}
