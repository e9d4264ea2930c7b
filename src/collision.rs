//! Collision and target-arrival detection for the ship.
//!
//! Runs at the end of every physics step. A collision with any body ends
//! the attempt; entering the target zone completes the level. If both hold
//! in the same frame the collision wins.

use crate::outcome::FrameEvent;
use crate::types::{Body, Ship};
use crate::world::SimWorld;

/// Whether two discs overlap (strictly closer than the sum of radii).
#[inline]
pub fn discs_overlap(a: &Body, b: &Body) -> bool {
    (a.pos - b.pos).length() < a.radius + b.radius
}

/// Index of the first body the ship is touching, if any.
pub fn find_ship_collision(ship: &Ship, bodies: &[Body]) -> Option<usize> {
    bodies.iter().position(|body| discs_overlap(&ship.body, body))
}

/// Whether the ship is inside the target and slow enough to count.
pub fn ship_in_target(world: &SimWorld) -> bool {
    if !world.target.contains(world.ship.body.pos) {
        return false;
    }
    match world.max_arrival_speed {
        Some(limit) => world.ship.speed() < limit,
        None => true,
    }
}

/// Classify the current frame: collision, then target, then nothing.
pub fn evaluate_frame(world: &SimWorld) -> FrameEvent {
    if let Some(index) = find_ship_collision(&world.ship, &world.bodies) {
        return FrameEvent::Collision { body: index };
    }
    if ship_in_target(world) {
        return FrameEvent::TargetReached;
    }
    FrameEvent::None
}
