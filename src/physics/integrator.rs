//! Explicit Euler integration.
//!
//! Velocity is advanced first and the new velocity moves the position.
//! Energy drifts over long runs; levels are short enough for that to be
//! invisible in play.

use bevy::math::DVec2;

use crate::types::Body;

/// Advance a position/velocity pair by `dt` under constant acceleration.
///
/// Returns `(new_pos, new_vel)`.
#[inline]
pub fn euler_step(pos: DVec2, vel: DVec2, acc: DVec2, dt: f64) -> (DVec2, DVec2) {
    let vel = vel + acc * dt;
    let pos = pos + vel * dt;
    (pos, vel)
}

/// Integrate a body in place.
#[inline]
pub fn integrate_body(body: &mut Body, acc: DVec2, dt: f64) {
    let (pos, vel) = euler_step(body.pos, body.vel, acc, dt);
    body.pos = pos;
    body.vel = vel;
}
