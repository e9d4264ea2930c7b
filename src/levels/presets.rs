//! Preset level definitions.
//!
//! Three levels of increasing difficulty. Coordinates are world units with
//! +y up on a 1200x800 playfield; G = 1.

use std::f64::consts::FRAC_PI_2;

use bevy::math::DVec2;

use crate::types::{BodyKind, TargetZone};

use super::{BodyTemplate, LevelTemplate, ShipTemplate};

/// All levels, in play order.
pub static LEVELS: &[LevelTemplate] = &[FIRST_FLIGHT, BINARY_STARS, SOFT_LANDING];

/// Standard ship: mass 50, radius 10, 350 thrust power, 1200 fuel, facing up.
const fn standard_ship(x: f64, y: f64) -> ShipTemplate {
    ShipTemplate {
        pos: DVec2::new(x, y),
        vel: DVec2::ZERO,
        orientation: FRAC_PI_2,
        mass: 50.0,
        radius: 10.0,
        thrust_power: 350.0,
        fuel: 1200.0,
    }
}

/// Level 1: First Flight (Tutorial)
///
/// A star in the middle of the field with two planets on circular orbits.
/// The ship starts above the star and has to get around it to the target
/// below.
pub const FIRST_FLIGHT: LevelTemplate = LevelTemplate {
    id: "first_flight",
    name: "First Flight",
    description: "Fly around the star to the target below it.",
    bodies: &[
        BodyTemplate {
            name: "Sun",
            kind: BodyKind::Star,
            pos: DVec2::new(600.0, 400.0),
            vel: DVec2::ZERO,
            mass: 3e5,
            radius: 28.0,
        },
        // Circular: v = sqrt(3e5 / 250) ≈ 34.6
        BodyTemplate {
            name: "Planet 1",
            kind: BodyKind::Planet,
            pos: DVec2::new(350.0, 400.0),
            vel: DVec2::new(0.0, -34.6),
            mass: 2e4,
            radius: 14.0,
        },
        // Circular: v = sqrt(3e5 / 300) ≈ 31.6
        BodyTemplate {
            name: "Planet 2",
            kind: BodyKind::Planet,
            pos: DVec2::new(900.0, 400.0),
            vel: DVec2::new(0.0, 31.6),
            mass: 1.5e4,
            radius: 12.0,
        },
    ],
    ship: standard_ship(600.0, 700.0),
    target: Some(TargetZone {
        center: DVec2::new(600.0, 50.0),
        radius: 40.0,
    }),
    // Any entry speed counts here; only Soft Landing demands a slow arrival
    max_arrival_speed: None,
};

/// Level 2: Binary Stars
///
/// Two equal stars circling their common centre with a planet around the
/// pair. The ship starts bottom left and must reach the top right corner
/// without being pulled into either star.
pub const BINARY_STARS: LevelTemplate = LevelTemplate {
    id: "binary_stars",
    name: "Binary Stars",
    description: "Slip past a binary pair to the far corner.",
    bodies: &[
        // Equal-mass binary, separation 300: v = sqrt(G m / 2d) ≈ 25.8
        BodyTemplate {
            name: "Star 1",
            kind: BodyKind::Star,
            pos: DVec2::new(450.0, 400.0),
            vel: DVec2::new(0.0, -25.8),
            mass: 4e5,
            radius: 24.0,
        },
        BodyTemplate {
            name: "Star 2",
            kind: BodyKind::Star,
            pos: DVec2::new(750.0, 400.0),
            vel: DVec2::new(0.0, 25.8),
            mass: 4e5,
            radius: 24.0,
        },
        BodyTemplate {
            name: "Planet",
            kind: BodyKind::Planet,
            pos: DVec2::new(600.0, 250.0),
            vel: DVec2::new(90.0, 0.0),
            mass: 2e4,
            radius: 14.0,
        },
    ],
    ship: standard_ship(100.0, 100.0),
    target: Some(TargetZone {
        center: DVec2::new(1100.0, 700.0),
        radius: 40.0,
    }),
    // Any entry speed counts here; only Soft Landing demands a slow arrival
    max_arrival_speed: None,
};

/// Level 3: Soft Landing
///
/// A star with a single moon. The target only accepts a slow arrival, so
/// the ship has to brake before it gets there.
pub const SOFT_LANDING: LevelTemplate = LevelTemplate {
    id: "soft_landing",
    name: "Soft Landing",
    description: "Cross the system and arrive below 50 units/s.",
    bodies: &[
        BodyTemplate {
            name: "Sun",
            kind: BodyKind::Star,
            pos: DVec2::new(600.0, 400.0),
            vel: DVec2::ZERO,
            mass: 5e5,
            radius: 30.0,
        },
        // Circular: v = sqrt(5e5 / 200) = 50
        BodyTemplate {
            name: "Moon",
            kind: BodyKind::Moon,
            pos: DVec2::new(600.0, 600.0),
            vel: DVec2::new(-50.0, 0.0),
            mass: 8e3,
            radius: 10.0,
        },
    ],
    ship: standard_ship(100.0, 400.0),
    target: Some(TargetZone {
        center: DVec2::new(1050.0, 400.0),
        radius: 40.0,
    }),
    max_arrival_speed: Some(50.0),
};
