//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use orbit_pilot::config::PhysicsConfig;
use orbit_pilot::types::{Body, BodyKind, Ship, ShipControl, TargetZone};
use orbit_pilot::world::SimWorld;

/// A target zone far away from anything a test flies near.
pub const UNREACHABLE_TARGET: TargetZone = TargetZone {
    center: DVec2::new(-1.0e6, -1.0e6),
    radius: 10.0,
};

/// A star at rest.
pub fn star(pos: DVec2, mass: f64, radius: f64) -> Body {
    Body::new("Star", BodyKind::Star, pos, DVec2::ZERO, mass, radius)
}

/// A ship with the given kinematics and engine.
pub fn ship(pos: DVec2, vel: DVec2, orientation: f64, fuel: f64, thrust_power: f64) -> Ship {
    Ship {
        body: Body::new("Ship", BodyKind::Ship, pos, vel, 50.0, 10.0),
        control: ShipControl {
            orientation,
            fuel,
            thrust_power,
        },
    }
}

/// A world with the given bodies and ship and an unreachable target.
pub fn world(bodies: Vec<Body>, ship: Ship) -> SimWorld {
    SimWorld {
        bodies,
        ship,
        target: UNREACHABLE_TARGET,
        max_arrival_speed: None,
    }
}

/// Physics config with a custom tick rate and gravitational constant.
pub fn config(tick_hz: f64, gravitational_constant: f64) -> PhysicsConfig {
    PhysicsConfig {
        tick_hz,
        gravitational_constant,
        ..PhysicsConfig::default()
    }
}

/// Reference two-body Euler integration written out longhand.
///
/// Returns the final `(pos, vel)` of both bodies.
pub fn simulate_two_body_euler(
    mut a: (DVec2, DVec2, f64),
    mut b: (DVec2, DVec2, f64),
    g: f64,
    dt: f64,
    steps: usize,
) -> ((DVec2, DVec2), (DVec2, DVec2)) {
    for _ in 0..steps {
        let delta = b.0 - a.0;
        let r = delta.length();
        let acc_a = delta * (g * b.2 / (r * r * r));
        let acc_b = -delta * (g * a.2 / (r * r * r));

        a.1 += acc_a * dt;
        a.0 += a.1 * dt;
        b.1 += acc_b * dt;
        b.0 += b.1 * dt;
    }
    ((a.0, a.1), (b.0, b.1))
}

/// Sum of momentum magnitudes, used to scale conservation tolerances.
pub fn momentum_scale(world: &SimWorld) -> f64 {
    world
        .bodies
        .iter()
        .chain(std::iter::once(&world.ship.body))
        .map(|b| b.momentum().length())
        .sum::<f64>()
        .max(1.0)
}
