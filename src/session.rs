//! Game session: the live world and game state for the current run.
//!
//! The session is the single owner of everything that changes during play.
//! Restart and advance requests, spawn clicks and physics reports all go
//! through it, which keeps every transition testable without a window.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::config::{PhysicsConfig, ScoringConfig, SpawnPresets};
use crate::levels::{LevelError, LevelTable};
use crate::outcome::{FrameEvent, Outcome};
use crate::physics::{self, FrameReport};
use crate::spawn::spawn_body;
use crate::types::{GameSet, ShipInput, SpawnKind};
use crate::world::SimWorld;

/// Message requesting a reload of the current level.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct RestartLevel;

/// Message requesting the next level. Ignored unless the level was won.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct AdvanceLevel;

/// Message requesting a new body at a world position.
#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnBody {
    pub pos: DVec2,
    pub kind: SpawnKind,
}

/// Progress through the campaign.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    /// Index into the level table.
    pub level_index: usize,
    /// Score accumulated over completed levels.
    pub score: f64,
    /// Score when the current level was entered. Restart returns to it.
    pub level_start_score: f64,
    /// Seconds of physics time spent in the current attempt.
    pub elapsed: f64,
    pub outcome: Outcome,
    /// Points awarded for the most recent success.
    pub last_award: Option<f64>,
}

/// Read-only values shown by the HUD.
#[derive(Clone, Debug, PartialEq)]
pub struct HudSnapshot {
    pub level_index: usize,
    pub level_count: usize,
    pub level_name: &'static str,
    pub objective: &'static str,
    pub speed: f64,
    pub fuel: f64,
    /// Remaining fuel over starting fuel, in `0.0..=1.0`.
    pub fuel_fraction: f64,
    pub score: f64,
    pub elapsed: f64,
    pub outcome: Outcome,
    pub last_award: Option<f64>,
    /// Whether another level follows this one.
    pub has_next_level: bool,
}

/// Resource owning the live world and the game state.
#[derive(Resource, Clone, Debug, Default)]
pub struct GameSession {
    /// None until the first level loads.
    pub world: Option<SimWorld>,
    pub state: GameState,
}

impl GameSession {
    /// Replace the live world with a fresh copy of a level.
    ///
    /// On error the session is left untouched.
    pub fn load_level(&mut self, table: &LevelTable, index: usize) -> Result<(), LevelError> {
        let world = table.get(index)?.instantiate()?;
        self.state.level_index = index;
        self.load_level_world(world);
        Ok(())
    }

    /// Install a fresh world and start a new attempt at the current level.
    fn load_level_world(&mut self, world: SimWorld) {
        self.world = Some(world);
        self.state.level_start_score = self.state.score;
        self.state.elapsed = 0.0;
        self.state.outcome = Outcome::Playing;
        self.state.last_award = None;
    }

    /// Reload the current level, discarding every live change.
    ///
    /// Any award earned on this level is taken back, so only score from
    /// earlier levels survives.
    pub fn restart(&mut self, table: &LevelTable) -> Result<(), LevelError> {
        let world = table.get(self.state.level_index)?.instantiate()?;
        self.state.score = self.state.level_start_score;
        self.load_level_world(world);
        Ok(())
    }

    /// Move on after a success.
    ///
    /// Returns `Ok(false)` if the current level has not been won. Past the
    /// last level a new campaign starts at level 0 with the score reset.
    pub fn advance(&mut self, table: &LevelTable) -> Result<bool, LevelError> {
        if self.state.outcome != Outcome::Success {
            return Ok(false);
        }

        let next = self.state.level_index + 1;
        if next < table.len() {
            self.load_level(table, next)?;
        } else {
            self.load_level(table, 0)?;
            self.state.score = 0.0;
            self.state.level_start_score = 0.0;
        }
        Ok(true)
    }

    /// Drop a preset body into the live world.
    ///
    /// Returns false when nothing is loaded or the attempt is over.
    pub fn spawn(&mut self, pos: DVec2, kind: SpawnKind, presets: &SpawnPresets) -> bool {
        if self.state.outcome.is_frozen() {
            return false;
        }
        let Some(world) = self.world.as_mut() else {
            return false;
        };
        spawn_body(world, pos, kind, presets);
        true
    }

    /// Run one physics step if the attempt is still in progress.
    pub fn tick(&mut self, input: &ShipInput, config: &PhysicsConfig) -> FrameEvent {
        if self.state.outcome.is_frozen() {
            return FrameEvent::None;
        }
        let Some(world) = self.world.as_mut() else {
            return FrameEvent::None;
        };
        let event = physics::step(world, input, config);
        self.state.elapsed += config.dt();
        event
    }

    /// Apply a frame event to the game state.
    ///
    /// Only the first terminal event of an attempt counts.
    pub fn resolve(&mut self, event: FrameEvent, scoring: &ScoringConfig) -> Outcome {
        if self.state.outcome.is_frozen() || !event.is_terminal() {
            return self.state.outcome;
        }

        self.state.outcome = Outcome::from(event);

        if event == FrameEvent::TargetReached {
            let fuel = self
                .world
                .as_ref()
                .map(|w| w.ship.control.fuel)
                .unwrap_or(0.0);
            let award = scoring.award(self.state.elapsed, fuel);
            self.state.score += award;
            self.state.last_award = Some(award);
        }

        self.state.outcome
    }

    /// Snapshot of the values the HUD displays.
    pub fn hud(&self, table: &LevelTable) -> Option<HudSnapshot> {
        let world = self.world.as_ref()?;
        let level = table.get(self.state.level_index).ok()?;
        let fuel = world.ship.control.fuel;
        let fuel_fraction = if level.ship.fuel > 0.0 {
            (fuel / level.ship.fuel).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Some(HudSnapshot {
            level_index: self.state.level_index,
            level_count: table.len(),
            level_name: level.name,
            objective: level.description,
            speed: world.ship.speed(),
            fuel,
            fuel_fraction,
            score: self.state.score,
            elapsed: self.state.elapsed,
            outcome: self.state.outcome,
            last_award: self.state.last_award,
            has_next_level: self.state.level_index + 1 < table.len(),
        })
    }
}

/// Plugin providing session management and level transitions.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSession>()
            .init_resource::<LevelTable>()
            .init_resource::<ScoringConfig>()
            .init_resource::<SpawnPresets>()
            .add_message::<RestartLevel>()
            .add_message::<AdvanceLevel>()
            .add_message::<SpawnBody>()
            .add_systems(Startup, load_first_level)
            .add_systems(FixedUpdate, resolve_frame_reports.in_set(GameSet::Outcome))
            .add_systems(
                Update,
                (handle_restart, handle_advance, handle_spawn).chain(),
            );
    }
}

/// Load level 0 on startup.
fn load_first_level(mut session: ResMut<GameSession>, table: Res<LevelTable>) {
    match session.load_level(&table, 0) {
        Ok(()) => info!("Loaded {} levels, starting at level 1", table.len()),
        Err(err) => error!("Failed to load first level: {err}"),
    }
}

/// Turn physics reports into outcomes and score.
fn resolve_frame_reports(
    mut reports: MessageReader<FrameReport>,
    mut session: ResMut<GameSession>,
    scoring: Res<ScoringConfig>,
) {
    for report in reports.read() {
        let before = session.state.outcome;
        let after = session.resolve(report.event, &scoring);
        if before == after {
            continue;
        }

        match report.event {
            FrameEvent::Collision { .. } => info!(
                "Ship destroyed by {} at {:.1} units/s",
                report.body_name.as_deref().unwrap_or("unknown body"),
                report.ship_speed,
            ),
            FrameEvent::TargetReached => info!(
                "Level {} complete in {:.1}s, +{:.0} points (total {:.0})",
                session.state.level_index + 1,
                session.state.elapsed,
                session.state.last_award.unwrap_or(0.0),
                session.state.score,
            ),
            FrameEvent::None => {}
        }
    }
}

/// Reload the current level on request.
fn handle_restart(
    mut events: MessageReader<RestartLevel>,
    mut session: ResMut<GameSession>,
    table: Res<LevelTable>,
) {
    // Any number of restarts in one frame is the same as one
    if events.read().count() == 0 {
        return;
    }

    match session.restart(&table) {
        Ok(()) => info!("Restarted level {}", session.state.level_index + 1),
        Err(err) => error!("Failed to restart level: {err}"),
    }
}

/// Advance to the next level after a success.
fn handle_advance(
    mut events: MessageReader<AdvanceLevel>,
    mut session: ResMut<GameSession>,
    table: Res<LevelTable>,
) {
    if events.read().count() == 0 {
        return;
    }

    match session.advance(&table) {
        Ok(true) => info!("Advanced to level {}", session.state.level_index + 1),
        Ok(false) => debug!("Advance ignored: level not complete"),
        Err(err) => error!("Failed to load next level: {err}"),
    }
}

/// Add requested bodies to the live world.
fn handle_spawn(
    mut events: MessageReader<SpawnBody>,
    mut session: ResMut<GameSession>,
    presets: Res<SpawnPresets>,
) {
    for event in events.read() {
        if session.spawn(event.pos, event.kind, &presets) {
            info!(
                "Spawned {:?} body at ({:.0}, {:.0})",
                event.kind, event.pos.x, event.pos.y
            );
        }
    }
}
