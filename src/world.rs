//! The live world: every body of the current run plus the ship and target.

use bevy::math::DVec2;

use crate::types::{Body, Ship, TargetZone};

/// Mutable simulation state for one attempt at a level.
///
/// Instantiated fresh from a level template on load and restart, mutated
/// in place by the physics step and by spawning.
#[derive(Clone, Debug, PartialEq)]
pub struct SimWorld {
    /// Celestial bodies, excluding the ship.
    pub bodies: Vec<Body>,
    pub ship: Ship,
    pub target: TargetZone,
    /// Entering the target only counts below this speed, when set.
    pub max_arrival_speed: Option<f64>,
}

impl SimWorld {
    /// Gravity sources in step order: every body, then the ship last.
    pub fn gravity_sources(&self) -> Vec<(DVec2, f64)> {
        self.bodies
            .iter()
            .chain(std::iter::once(&self.ship.body))
            .map(|b| (b.pos, b.mass))
            .collect()
    }

    /// Total momentum of bodies and ship.
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies
            .iter()
            .map(Body::momentum)
            .sum::<DVec2>()
            + self.ship.body.momentum()
    }

    /// Iterate over all bodies with the ship last.
    pub fn all_bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies
            .iter_mut()
            .chain(std::iter::once(&mut self.ship.body))
    }
}
