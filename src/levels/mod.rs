//! Level table: immutable templates for each level.
//!
//! A template lists the initial bodies, the ship and the target zone.
//! Instantiating it validates the data and builds a fresh `SimWorld`; the
//! template itself is never mutated, so restarting always yields the same
//! initial state.

pub mod presets;

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::types::{Body, BodyKind, Ship, ShipControl, TargetZone};
use crate::world::SimWorld;

pub use presets::LEVELS;

/// Errors raised while loading a level.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    #[error("no level at index {0}")]
    UnknownLevel(usize),

    #[error("level {0} has no target zone")]
    MissingTarget(&'static str),

    #[error("level {0} has a target zone with non-positive radius")]
    InvalidTarget(&'static str),

    #[error("body {body} in level {level} has non-positive mass {mass}")]
    NonPositiveMass {
        level: &'static str,
        body: &'static str,
        mass: f64,
    },

    #[error("body {body} in level {level} has non-positive radius {radius}")]
    NonPositiveRadius {
        level: &'static str,
        body: &'static str,
        radius: f64,
    },

    #[error("ship in level {0} starts with negative fuel")]
    NegativeFuel(&'static str),
}

/// Initial configuration of a celestial body.
#[derive(Clone, Copy, Debug)]
pub struct BodyTemplate {
    pub name: &'static str,
    pub kind: BodyKind,
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
    pub radius: f64,
}

/// Initial configuration of the ship.
#[derive(Clone, Copy, Debug)]
pub struct ShipTemplate {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Heading in radians, counter-clockwise from +x.
    pub orientation: f64,
    pub mass: f64,
    pub radius: f64,
    pub thrust_power: f64,
    pub fuel: f64,
}

/// A predefined level.
#[derive(Clone, Copy, Debug)]
pub struct LevelTemplate {
    /// Unique identifier for the level.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line objective shown in the HUD.
    pub description: &'static str,
    pub bodies: &'static [BodyTemplate],
    pub ship: ShipTemplate,
    pub target: Option<TargetZone>,
    /// Entering the target only counts below this speed, when set.
    pub max_arrival_speed: Option<f64>,
}

impl LevelTemplate {
    /// Check the template without building anything.
    pub fn validate(&self) -> Result<(), LevelError> {
        let target = self.target.ok_or(LevelError::MissingTarget(self.id))?;
        if !(target.radius > 0.0) {
            return Err(LevelError::InvalidTarget(self.id));
        }

        let ship = std::iter::once(("Ship", self.ship.mass, self.ship.radius));
        let bodies = self.bodies.iter().map(|b| (b.name, b.mass, b.radius));
        for (name, mass, radius) in bodies.chain(ship) {
            if !(mass > 0.0) {
                return Err(LevelError::NonPositiveMass {
                    level: self.id,
                    body: name,
                    mass,
                });
            }
            if !(radius > 0.0) {
                return Err(LevelError::NonPositiveRadius {
                    level: self.id,
                    body: name,
                    radius,
                });
            }
        }

        if self.ship.fuel < 0.0 {
            return Err(LevelError::NegativeFuel(self.id));
        }

        Ok(())
    }

    /// Build a fresh live world from this template.
    pub fn instantiate(&self) -> Result<SimWorld, LevelError> {
        self.validate()?;
        let target = self.target.ok_or(LevelError::MissingTarget(self.id))?;

        let bodies = self
            .bodies
            .iter()
            .map(|b| Body::new(b.name, b.kind, b.pos, b.vel, b.mass, b.radius))
            .collect();

        let ship = Ship {
            body: Body::new(
                "Ship",
                BodyKind::Ship,
                self.ship.pos,
                self.ship.vel,
                self.ship.mass,
                self.ship.radius,
            ),
            control: ShipControl {
                orientation: self.ship.orientation,
                fuel: self.ship.fuel,
                thrust_power: self.ship.thrust_power,
            },
        };

        Ok(SimWorld {
            bodies,
            ship,
            target,
            max_arrival_speed: self.max_arrival_speed,
        })
    }
}

/// Read-only table of levels referenced by the session.
#[derive(Resource, Clone, Copy, Debug)]
pub struct LevelTable {
    pub levels: &'static [LevelTemplate],
}

impl Default for LevelTable {
    fn default() -> Self {
        Self { levels: LEVELS }
    }
}

impl LevelTable {
    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the table has no levels at all.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get a level by index.
    pub fn get(&self, index: usize) -> Result<&'static LevelTemplate, LevelError> {
        self.levels.get(index).ok_or(LevelError::UnknownLevel(index))
    }

    /// Get a level by ID.
    pub fn find(&self, id: &str) -> Option<(usize, &'static LevelTemplate)> {
        self.levels.iter().enumerate().find(|(_, l)| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NO_BODIES: &[BodyTemplate] = &[];

    static ZERO_MASS: &[BodyTemplate] = &[BodyTemplate {
        name: "Ghost",
        kind: BodyKind::Planet,
        pos: DVec2::ZERO,
        vel: DVec2::ZERO,
        mass: 0.0,
        radius: 5.0,
    }];

    fn template(bodies: &'static [BodyTemplate], target: Option<TargetZone>) -> LevelTemplate {
        LevelTemplate {
            id: "test",
            name: "Test",
            description: "",
            bodies,
            ship: LEVELS[0].ship,
            target,
            max_arrival_speed: None,
        }
    }

    fn target() -> Option<TargetZone> {
        Some(TargetZone {
            center: DVec2::new(100.0, 100.0),
            radius: 20.0,
        })
    }

    #[test]
    fn test_all_presets_are_valid() {
        for level in LEVELS {
            assert!(level.validate().is_ok(), "level {} should be valid", level.id);
        }
    }

    #[test]
    fn test_preset_ids_unique() {
        for (i, a) in LEVELS.iter().enumerate() {
            for b in &LEVELS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_only_soft_landing_limits_arrival_speed() {
        let limits: Vec<_> = LEVELS.iter().map(|l| l.max_arrival_speed).collect();
        assert_eq!(limits, [None, None, Some(50.0)]);
    }

    #[test]
    fn test_presets_do_not_start_in_collision_or_success() {
        use crate::collision::evaluate_frame;
        use crate::outcome::FrameEvent;

        for level in LEVELS {
            let world = level.instantiate().expect("preset should instantiate");
            assert_eq!(evaluate_frame(&world), FrameEvent::None, "level {}", level.id);
        }
    }

    #[test]
    fn test_instantiate_copies_template() {
        let level = &LEVELS[0];
        let world = level.instantiate().expect("preset should instantiate");
        assert_eq!(world.bodies.len(), level.bodies.len());
        assert_eq!(world.ship.body.pos, level.ship.pos);
        assert_eq!(world.ship.control.fuel, level.ship.fuel);
        assert!(world.bodies.iter().all(|b| b.trail.is_empty()));
    }

    #[test]
    fn test_instantiate_is_deterministic() {
        for level in LEVELS {
            assert_eq!(level.instantiate(), level.instantiate());
        }
    }

    #[test]
    fn test_missing_target_rejected() {
        let level = template(NO_BODIES, None);
        assert_eq!(level.instantiate(), Err(LevelError::MissingTarget("test")));
    }

    #[test]
    fn test_zero_mass_rejected() {
        let level = template(ZERO_MASS, target());
        assert!(matches!(
            level.validate(),
            Err(LevelError::NonPositiveMass { body: "Ghost", .. })
        ));
    }

    #[test]
    fn test_bad_target_radius_rejected() {
        let level = template(
            NO_BODIES,
            Some(TargetZone {
                center: DVec2::ZERO,
                radius: 0.0,
            }),
        );
        assert_eq!(level.validate(), Err(LevelError::InvalidTarget("test")));
    }

    #[test]
    fn test_negative_fuel_rejected() {
        let mut level = template(NO_BODIES, target());
        level.ship.fuel = -1.0;
        assert_eq!(level.validate(), Err(LevelError::NegativeFuel("test")));
    }

    #[test]
    fn test_table_lookup() {
        let table = LevelTable::default();
        assert_eq!(table.len(), LEVELS.len());
        assert!(table.get(0).is_ok());
        assert_eq!(table.get(99).err(), Some(LevelError::UnknownLevel(99)));
        assert_eq!(table.find("binary_stars").map(|(i, _)| i), Some(1));
    }
}
