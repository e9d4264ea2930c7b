//! Ship thrusters and attitude control.
//!
//! Forward/backward thrust acts along the heading, strafing acts along the
//! ship's lateral axis. Both draw from the same fuel tank at a rate equal to
//! the applied acceleration magnitude.

use bevy::math::DVec2;

use crate::types::{Ship, ShipInput};

/// Compute the thrust acceleration for this tick and burn the fuel it costs.
///
/// When the full burn would overdraw the tank, the thrust is scaled down so
/// that the tank ends at exactly zero. With an empty tank the result is zero.
pub fn apply_thrust(ship: &mut Ship, input: &ShipInput, dt: f64) -> DVec2 {
    if ship.control.fuel <= 0.0 || !input.is_thrusting() || dt <= 0.0 {
        return DVec2::ZERO;
    }

    let direction = ship.control.heading() * input.thrust.clamp(-1.0, 1.0)
        + ship.control.lateral() * input.strafe.clamp(-1.0, 1.0);
    let acc = direction * ship.thrust_acceleration();

    let burn = acc.length() * dt;
    if burn <= 0.0 {
        return DVec2::ZERO;
    }

    if burn > ship.control.fuel {
        let fraction = ship.control.fuel / burn;
        ship.control.fuel = 0.0;
        return acc * fraction;
    }

    ship.control.fuel = (ship.control.fuel - burn).max(0.0);
    acc
}

/// Turn the ship at a fixed angular rate. No rotational inertia.
pub fn apply_rotation(ship: &mut Ship, input: &ShipInput, angular_rate: f64, dt: f64) {
    let direction = input.rotate.clamp(-1.0, 1.0);
    if direction != 0.0 {
        ship.control.orientation += angular_rate * direction * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use approx::assert_relative_eq;

    fn forward() -> ShipInput {
        ShipInput {
            thrust: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_forward_thrust_along_heading() {
        // Facing +x, accel = 50/50 = 1
        let mut ship = fixtures::ship(DVec2::ZERO, 0.0, 100.0, 50.0);
        let acc = apply_thrust(&mut ship, &forward(), 0.5);
        assert_relative_eq!(acc.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(acc.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(ship.control.fuel, 99.5, epsilon = 1e-12);
    }

    #[test]
    fn test_backward_thrust_opposes_heading() {
        let mut ship = fixtures::ship(DVec2::ZERO, 0.0, 100.0, 50.0);
        let input = ShipInput {
            thrust: -1.0,
            ..Default::default()
        };
        let acc = apply_thrust(&mut ship, &input, 1.0);
        assert_relative_eq!(acc.x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_strafe_is_orthogonal_to_heading() {
        let mut ship = fixtures::ship(DVec2::ZERO, 0.0, 100.0, 50.0);
        let input = ShipInput {
            strafe: 1.0,
            ..Default::default()
        };
        let acc = apply_thrust(&mut ship, &input, 1.0);
        assert_relative_eq!(acc.dot(ship.control.heading()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(acc.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_input_burns_nothing() {
        let mut ship = fixtures::ship(DVec2::ZERO, 0.0, 100.0, 50.0);
        let acc = apply_thrust(&mut ship, &ShipInput::default(), 1.0);
        assert_eq!(acc, DVec2::ZERO);
        assert_eq!(ship.control.fuel, 100.0);
    }

    #[test]
    fn test_partial_burn_empties_tank_exactly() {
        let mut ship = fixtures::ship(DVec2::ZERO, 0.0, 0.25, 50.0);
        let acc = apply_thrust(&mut ship, &forward(), 1.0);
        assert_eq!(ship.control.fuel, 0.0);
        // Only a quarter of the requested thrust could be paid for
        assert_relative_eq!(acc.x, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_tank_has_no_effect() {
        let mut ship = fixtures::ship(DVec2::ZERO, 0.0, 0.0, 50.0);
        let acc = apply_thrust(&mut ship, &forward(), 1.0);
        assert_eq!(acc, DVec2::ZERO);
        assert_eq!(ship.control.fuel, 0.0);
    }

    #[test]
    fn test_rotation_rate() {
        let mut ship = fixtures::ship(DVec2::ZERO, 0.0, 0.0, 50.0);
        let input = ShipInput {
            rotate: -1.0,
            ..Default::default()
        };
        apply_rotation(&mut ship, &input, 2.0, 0.25);
        assert_relative_eq!(ship.control.orientation, -0.5, epsilon = 1e-12);
    }
}
