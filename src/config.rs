//! Tunable parameters for physics, scoring and spawning.
//!
//! Each struct is a Bevy resource with a `Default` impl. Plugins insert the
//! defaults only when no value is present, so an app can override any of
//! them with `insert_resource` before adding the plugins.

use bevy::prelude::*;

use crate::types::SpawnKind;

/// Physics step configuration.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravitational constant in world units. Default: 1.0.
    pub gravitational_constant: f64,
    /// Pairs closer than this are skipped in the gravity sum. Default: 1.0.
    pub epsilon: f64,
    /// Fixed tick rate in Hz. Default: 60.
    pub tick_hz: f64,
    /// Ship turn rate in radians per second. Default: 2π (one turn per second).
    pub angular_rate: f64,
    /// Number of trail points kept per body. Default: 240.
    pub trail_length: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 1.0,
            epsilon: 1.0,
            tick_hz: 60.0,
            angular_rate: std::f64::consts::TAU,
            trail_length: 240,
        }
    }
}

impl PhysicsConfig {
    /// Fixed timestep in seconds.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_hz
    }
}

/// Coefficients of the level-completion award.
///
/// `award = base_reward - time_penalty * elapsed + fuel_bonus * fuel`
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ScoringConfig {
    pub base_reward: f64,
    /// Points lost per second spent in the level.
    pub time_penalty: f64,
    /// Points gained per unit of fuel left.
    pub fuel_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_reward: 1000.0,
            time_penalty: 10.0,
            fuel_bonus: 0.5,
        }
    }
}

impl ScoringConfig {
    /// Score increment for completing a level.
    pub fn award(&self, elapsed: f64, remaining_fuel: f64) -> f64 {
        self.base_reward - self.time_penalty * elapsed + self.fuel_bonus * remaining_fuel
    }
}

/// Mass and radius of a spawnable body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnPreset {
    pub mass: f64,
    pub radius: f64,
}

/// Presets used by mouse-triggered spawning.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SpawnPresets {
    pub light: SpawnPreset,
    pub massive: SpawnPreset,
}

impl Default for SpawnPresets {
    fn default() -> Self {
        Self {
            light: SpawnPreset {
                mass: 1e4,
                radius: 12.0,
            },
            massive: SpawnPreset {
                mass: 8e4,
                radius: 22.0,
            },
        }
    }
}

impl SpawnPresets {
    /// Preset for the given kind.
    pub fn get(&self, kind: SpawnKind) -> SpawnPreset {
        match kind {
            SpawnKind::Light => self.light,
            SpawnKind::Massive => self.massive,
        }
    }
}
