//! Orbit Pilot - Gravity Well Navigation Game
//!
//! A library crate providing the simulation, level and session components
//! of the game for testing and integration purposes.

pub mod camera;
pub mod collision;
pub mod config;
pub mod input;
pub mod levels;
pub mod outcome;
pub mod physics;
pub mod render;
pub mod session;
pub mod spawn;
pub mod types;
pub mod ui;
pub mod world;

#[cfg(test)]
pub mod test_utils;
