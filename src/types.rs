//! Core physics types and constants for the gravity-well game.

use std::collections::VecDeque;

use bevy::math::DVec2;
use bevy::prelude::*;

/// System sets for ordering the fixed-tick pipeline.
///
/// Input is sampled immediately before the physics step, and outcome
/// handling reads the event the step produced.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Continuous input sampling (thrust, rotation).
    Input,
    /// Gravity, integration, collision and target checks.
    Physics,
    /// Scoring and outcome transitions.
    Outcome,
}

/// Playfield width in world units.
pub const WORLD_WIDTH: f64 = 1200.0;

/// Playfield height in world units.
pub const WORLD_HEIGHT: f64 = 800.0;

/// Kind of a celestial body. Only affects how it is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    /// User-spawned light body.
    Light,
    /// User-spawned massive body.
    Massive,
    /// The player's spacecraft.
    Ship,
}

/// A point/disc mass participating in gravitational interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    /// Position in world units (+y up).
    pub pos: DVec2,
    /// Velocity in world units per second.
    pub vel: DVec2,
    /// Mass, strictly positive.
    pub mass: f64,
    /// Collision radius, strictly positive.
    pub radius: f64,
    /// Recent positions, oldest first.
    pub trail: VecDeque<DVec2>,
}

impl Body {
    /// Create a body with an empty trail.
    pub fn new(
        name: impl Into<String>,
        kind: BodyKind,
        pos: DVec2,
        vel: DVec2,
        mass: f64,
        radius: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            pos,
            vel,
            mass,
            radius,
            trail: VecDeque::new(),
        }
    }

    /// Momentum vector `m * v`.
    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    /// Record the current position, dropping the oldest point past `max_len`.
    pub fn record_trail(&mut self, max_len: usize) {
        if max_len == 0 {
            return;
        }
        while self.trail.len() >= max_len {
            self.trail.pop_front();
        }
        self.trail.push_back(self.pos);
    }
}

/// Thrust, fuel and orientation: the capability that turns a body into a ship.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipControl {
    /// Heading in radians, counter-clockwise from +x.
    pub orientation: f64,
    /// Remaining fuel. Never negative.
    pub fuel: f64,
    /// Thrust force; acceleration is `thrust_power / mass`.
    pub thrust_power: f64,
}

impl ShipControl {
    /// Unit vector along the current heading.
    pub fn heading(&self) -> DVec2 {
        DVec2::from_angle(self.orientation)
    }

    /// Unit vector pointing to the ship's left (heading rotated +90°).
    pub fn lateral(&self) -> DVec2 {
        self.heading().perp()
    }
}

/// The player-controlled body.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub body: Body,
    pub control: ShipControl,
}

impl Ship {
    /// Thrust acceleration magnitude at full throttle.
    pub fn thrust_acceleration(&self) -> f64 {
        self.control.thrust_power / self.body.mass
    }

    /// Speed (velocity magnitude).
    pub fn speed(&self) -> f64 {
        self.body.vel.length()
    }
}

/// Circular region whose entry by the ship completes the level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetZone {
    pub center: DVec2,
    pub radius: f64,
}

impl TargetZone {
    /// Whether a point lies strictly inside the zone.
    pub fn contains(&self, point: DVec2) -> bool {
        (point - self.center).length() < self.radius
    }
}

/// Preset body kinds the player can drop into the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnKind {
    Light,
    Massive,
}

/// Continuous control input for a single physics tick.
///
/// Every axis is in `-1.0..=1.0`.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ShipInput {
    /// Positive rotates counter-clockwise.
    pub rotate: f64,
    /// Positive thrusts along the heading, negative against it.
    pub thrust: f64,
    /// Positive strafes to the ship's left.
    pub strafe: f64,
}

impl ShipInput {
    /// Whether any linear thruster is commanded.
    pub fn is_thrusting(&self) -> bool {
        self.thrust != 0.0 || self.strafe != 0.0
    }
}
