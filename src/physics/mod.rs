//! Physics simulation for the ship and celestial bodies.
//!
//! One step sums pairwise gravity, applies thrust, integrates every body
//! with explicit Euler, turns the ship and finally checks for collision and
//! target arrival. It runs in Bevy's FixedUpdate schedule so that `dt` is
//! the same every tick.

mod gravity;
mod integrator;
mod thrust;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::compute_accelerations;
pub use integrator::{euler_step, integrate_body};
pub use thrust::{apply_rotation, apply_thrust};

use crate::collision::evaluate_frame;
use crate::config::PhysicsConfig;
use crate::outcome::FrameEvent;
use crate::session::GameSession;
use crate::types::{GameSet, ShipInput};
use crate::world::SimWorld;

/// Message emitted when a physics step ends the attempt.
#[derive(Message, Clone, Debug)]
pub struct FrameReport {
    pub event: FrameEvent,
    /// Name of the body hit, for collisions.
    pub body_name: Option<String>,
    /// Ship speed at the moment of the event.
    pub ship_speed: f64,
}

/// Plugin providing the fixed-rate physics step.
///
/// Adds systems for:
/// - Physics integration in FixedUpdate (`GameSet::Physics`)
/// - Fixed tick rate configured from `PhysicsConfig`
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsConfig>()
            .init_resource::<ShipInput>()
            .add_message::<FrameReport>()
            .configure_sets(
                FixedUpdate,
                (GameSet::Input, GameSet::Physics, GameSet::Outcome).chain(),
            )
            .add_systems(FixedUpdate, physics_step.in_set(GameSet::Physics));

        let tick_hz = app.world().resource::<PhysicsConfig>().tick_hz;
        app.insert_resource(Time::<Fixed>::from_hz(tick_hz));
    }
}

/// Advance the world by one fixed timestep.
///
/// Mutates every body and the ship in place and returns the single terminal
/// event of the frame, if any. The ship's thrust is computed from the
/// heading it had at the start of the frame; rotation is applied after
/// integration.
pub fn step(world: &mut SimWorld, input: &ShipInput, config: &PhysicsConfig) -> FrameEvent {
    let dt = config.dt();

    // 1. Gravity from the positions at the start of the frame
    let sources = world.gravity_sources();
    let mut accelerations =
        compute_accelerations(&sources, config.gravitational_constant, config.epsilon);

    // 2. Thrust joins the ship's acceleration (ship is the last source)
    let thrust = apply_thrust(&mut world.ship, input, dt);
    if let Some(ship_acc) = accelerations.last_mut() {
        *ship_acc += thrust;
    }

    // 3. Integrate everything
    for (body, acc) in world.all_bodies_mut().zip(accelerations) {
        integrate_body(body, acc, dt);
        body.record_trail(config.trail_length);
    }

    // 4. Attitude
    apply_rotation(&mut world.ship, input, config.angular_rate, dt);

    // 5 & 6. Collision first, then target
    evaluate_frame(world)
}

/// Main physics system.
///
/// The session skips the step while no level is loaded or the attempt is
/// over. Terminal events are forwarded as `FrameReport` messages.
fn physics_step(
    mut session: ResMut<GameSession>,
    input: Res<ShipInput>,
    config: Res<PhysicsConfig>,
    mut reports: MessageWriter<FrameReport>,
) {
    let event = session.tick(&input, &config);
    if !event.is_terminal() {
        return;
    }

    let Some(world) = session.world.as_ref() else {
        return;
    };

    let body_name = match event {
        FrameEvent::Collision { body } => world.bodies.get(body).map(|b| b.name.clone()),
        _ => None,
    };

    reports.write(FrameReport {
        event,
        body_name,
        ship_speed: world.ship.speed(),
    });
}
