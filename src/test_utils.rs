//! Test utilities for the physics and session tests.
//!
//! Provides fixtures for building small worlds and assertions for
//! verifying physical invariants like momentum conservation.

use bevy::math::DVec2;

use crate::types::{Body, BodyKind, Ship, ShipControl, TargetZone};
use crate::world::SimWorld;

/// Fixtures for creating test worlds.
pub mod fixtures {
    use super::*;

    /// Ship mass used by every fixture.
    pub const SHIP_MASS: f64 = 50.0;

    /// Ship radius used by every fixture.
    pub const SHIP_RADIUS: f64 = 10.0;

    /// Star radius used by `star_and_ship`.
    pub const STAR_RADIUS: f64 = 20.0;

    /// A plain planet at rest.
    pub fn body(pos: DVec2, mass: f64, radius: f64) -> Body {
        Body::new("Test Body", BodyKind::Planet, pos, DVec2::ZERO, mass, radius)
    }

    /// A ship at rest with the given heading, fuel and thrust power.
    pub fn ship(pos: DVec2, orientation: f64, fuel: f64, thrust_power: f64) -> Ship {
        Ship {
            body: Body::new("Ship", BodyKind::Ship, pos, DVec2::ZERO, SHIP_MASS, SHIP_RADIUS),
            control: ShipControl {
                orientation,
                fuel,
                thrust_power,
            },
        }
    }

    /// A star at the origin and a resting ship `distance` away along +x.
    ///
    /// The ship has no fuel and the target is far outside the action.
    pub fn star_and_ship(star_mass: f64, distance: f64) -> SimWorld {
        SimWorld {
            bodies: vec![Body::new(
                "Star",
                BodyKind::Star,
                DVec2::ZERO,
                DVec2::ZERO,
                star_mass,
                STAR_RADIUS,
            )],
            ship: ship(DVec2::new(distance, 0.0), 0.0, 0.0, 350.0),
            target: TargetZone {
                center: DVec2::new(-1e6, -1e6),
                radius: 10.0,
            },
            max_arrival_speed: None,
        }
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Assert that momentum is conserved within a tolerance relative to `scale`.
    ///
    /// # Panics
    /// Panics if the drift exceeds `tolerance * scale`.
    pub fn assert_momentum_conserved(initial: DVec2, current: DVec2, scale: f64, tolerance: f64) {
        let drift = (current - initial).length();
        assert!(
            drift <= tolerance * scale,
            "Momentum not conserved: initial={initial:?}, current={current:?}, drift={drift:.6e}, limit={:.6e}",
            tolerance * scale
        );
    }
}
