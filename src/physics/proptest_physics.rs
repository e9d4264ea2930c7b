//! Property-based tests for the physics step using proptest.
//!
//! These tests verify physical invariants across a wide range of masses,
//! separations and control inputs.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::{compute_accelerations, step};
use crate::config::PhysicsConfig;
use crate::outcome::FrameEvent;
use crate::test_utils::{assertions, fixtures};
use crate::types::ShipInput;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Halving the separation quadruples the pull felt by both bodies.
    #[test]
    fn prop_inverse_square_scaling(
        m1 in 1.0f64..1e6,
        m2 in 1.0f64..1e6,
        d in 2.0f64..1e4,
        angle in 0.0f64..std::f64::consts::TAU,
    ) {
        let direction = DVec2::from_angle(angle);
        let pair = |sep: f64| [(DVec2::ZERO, m1), (direction * sep, m2)];
        let far = compute_accelerations(&pair(d), 1.0, 1.0);
        let near = compute_accelerations(&pair(d / 2.0), 1.0, 1.0);

        for (i, mass) in [m1, m2].into_iter().enumerate() {
            let ratio = (near[i].length() * mass) / (far[i].length() * mass);
            prop_assert!((ratio - 4.0).abs() < 1e-9, "body {} ratio was {}", i, ratio);
        }
    }

    /// Pairwise forces are equal and opposite, so m_i * a_i sums to zero.
    #[test]
    fn prop_net_internal_force_vanishes(
        positions in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 2..6),
        masses in prop::collection::vec(1.0f64..1e5, 6),
    ) {
        let sources: Vec<(DVec2, f64)> = positions
            .iter()
            .zip(masses.iter())
            .map(|(&(x, y), &m)| (DVec2::new(x, y), m))
            .collect();
        let acc = compute_accelerations(&sources, 1.0, 1.0);

        let net: DVec2 = sources.iter().zip(acc.iter()).map(|(s, a)| *a * s.1).sum();
        let scale: f64 = sources.iter().zip(acc.iter()).map(|(s, a)| (*a * s.1).length()).sum();
        prop_assert!(
            net.length() <= 1e-9 * scale.max(1.0),
            "net internal force {:?} (scale {})", net, scale
        );
    }

    /// Acceleration is always finite, however close the bodies get.
    #[test]
    fn prop_acceleration_finite(
        x in -2.0f64..2.0,
        y in -2.0f64..2.0,
        m in 1.0f64..1e12,
    ) {
        let sources = vec![(DVec2::ZERO, m), (DVec2::new(x, y), m)];
        for a in compute_accelerations(&sources, 1.0, 1.0) {
            prop_assert!(a.is_finite());
        }
    }

    /// Fuel never goes negative under any thrust pattern.
    #[test]
    fn prop_fuel_never_negative(
        fuel in 0.0f64..50.0,
        thrust in -1.0f64..1.0,
        strafe in -1.0f64..1.0,
        steps in 1usize..400,
    ) {
        let mut world = fixtures::star_and_ship(1e4, 300.0);
        world.ship.control.fuel = fuel;
        let input = ShipInput { thrust, strafe, rotate: 0.3 };
        let config = PhysicsConfig::default();

        for _ in 0..steps {
            step(&mut world, &input, &config);
            prop_assert!(world.ship.control.fuel >= 0.0);
            prop_assert!(world.ship.control.fuel <= fuel);
        }
    }

    /// With no thrust, total momentum only drifts by rounding error.
    #[test]
    fn prop_momentum_conserved_without_thrust(
        star_mass in 1e3f64..1e5,
        distance in 100.0f64..400.0,
        vy in -5.0f64..5.0,
    ) {
        let mut world = fixtures::star_and_ship(star_mass, distance);
        world.ship.body.vel = DVec2::new(0.0, vy);
        let config = PhysicsConfig::default();
        let initial = world.total_momentum();
        let scale = world.ship.body.mass * 10.0;

        for _ in 0..120 {
            if step(&mut world, &ShipInput::default(), &config) != FrameEvent::None {
                break;
            }
        }

        assertions::assert_momentum_conserved(initial, world.total_momentum(), scale, 1e-9);
    }
}
