//! Simulation tick
//!
//! Phase dispatch plus the fixed per-tick order while playing:
//! player movement, monster chase, firing, projectiles, contact damage,
//! outcome check, then the spawn timer.

use glam::Vec2;

use super::combat;
use super::menu::{MenuAction, MenuLayout};
use super::session::Direction;
use super::state::{GamePhase, GameState};
use crate::audio::SoundCue;
use crate::settings::SimConfig;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held directions
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire toward this point
    pub fire_at: Option<Vec2>,
    /// Main menu click position
    pub menu_click: Option<Vec2>,
    /// Summed volume change
    pub volume_delta: f32,
    /// Restart after the round has ended
    pub restart: bool,
    /// End the session
    pub exit: bool,
}

impl TickInput {
    /// Sum of the held cardinal directions (screen space, y down)
    pub fn move_intent(&self) -> Vec2 {
        [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .into_iter()
        .filter(|&(held, _)| held)
        .map(|(_, dir)| dir.delta())
        .sum()
    }

    /// Any input that acts on the world while playing
    pub fn has_gameplay(&self) -> bool {
        self.up || self.down || self.left || self.right || self.fire_at.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Advance the game state by one tick
///
/// Movement, chase and projectiles are per tick, so a `dt <= 0` tick that
/// carries move or fire input still steps the world; only the spawn timer
/// needs elapsed time. A `dt <= 0` tick without gameplay input just handles
/// discrete commands (menu, restart, volume, exit).
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    config: &SimConfig,
    cues: &mut Vec<SoundCue>,
) {
    if state.phase == GamePhase::Exited {
        return;
    }
    if input.exit {
        log::info!("Exit requested from {:?}", state.phase);
        state.phase = GamePhase::Exited;
        return;
    }

    match state.phase {
        GamePhase::MainMenu => {
            let Some(click) = input.menu_click else { return };
            match MenuLayout::new(config.screen()).hit(click) {
                Some(MenuAction::Play) => {
                    state.reset(config);
                    state.phase = GamePhase::Playing;
                    cues.push(SoundCue::MusicStart);
                    log::info!("Game started");
                }
                Some(MenuAction::Exit) => {
                    state.phase = GamePhase::Exited;
                    log::info!("Exit selected from main menu");
                }
                None => {}
            }
        }

        GamePhase::Playing => {
            adjust_volume(state, input);
            if dt > 0.0 || input.has_gameplay() {
                step_playing(state, input, dt, config, cues);
            }
        }

        GamePhase::GameOver | GamePhase::Win => {
            adjust_volume(state, input);
            if input.restart {
                log::info!("Restarting after {:?} at wave {}", state.phase, state.wave());
                state.reset(config);
                state.phase = GamePhase::Playing;
            }
        }

        GamePhase::Exited => {}
    }
}

fn adjust_volume(state: &mut GameState, input: &TickInput) {
    if input.volume_delta != 0.0 {
        state.volume.adjust(input.volume_delta);
    }
}

/// One gameplay step in the fixed order
fn step_playing(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    config: &SimConfig,
    cues: &mut Vec<SoundCue>,
) {
    let bounds = config.screen();

    combat::move_player(&mut state.player, input.move_intent(), bounds);

    let target = state.player.pos;
    combat::chase_player(&mut state.monsters, target, bounds);

    if let Some(point) = input.fire_at {
        combat::fire(state, point, config);
    }

    combat::advance_projectiles(
        &mut state.projectiles,
        &mut state.monsters,
        config.projectile_damage,
        cues,
    );

    combat::apply_contact_damage(&mut state.player, &state.monsters, config.contact_damage);

    let outcome = combat::resolve_outcome(state);
    if outcome != GamePhase::Playing {
        log::info!(
            "Round ended: {:?} at wave {} (player hp {})",
            outcome,
            state.wave(),
            state.player.health
        );
        state.phase = outcome;
        return;
    }

    if dt > 0.0 {
        let spawned = state.spawner.tick(dt, state.monsters.len(), config);
        state.monsters.extend(spawned);
    }
}
