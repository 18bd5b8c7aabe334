//! Simulation facade
//!
//! The one entry point for drivers: feed a batch of input events and the
//! elapsed time, get back everything a renderer and audio layer need.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::menu::MenuLayout;
use super::state::{GamePhase, GameState, Monster, Player, Projectile};
use super::tick::{TickInput, tick};
use crate::audio::SoundCue;
use crate::settings::{ConfigError, SimConfig};

/// Cardinal movement direction (screen space, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// Discrete, already-debounced input signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Direction held this tick
    Move(Direction),
    /// Fire toward a screen point
    FireAt(Vec2),
    /// Mouse click on the main menu
    MenuClick(Vec2),
    /// Music volume change (typically ±0.1)
    VolumeDelta(f32),
    /// Start a new round after win or defeat
    Restart,
    /// End the session
    Exit,
}

impl InputEvent {
    /// Volume up by the configured step
    pub fn volume_up(config: &SimConfig) -> Self {
        InputEvent::VolumeDelta(config.volume_step)
    }

    /// Volume down by the configured step
    pub fn volume_down(config: &SimConfig) -> Self {
        InputEvent::VolumeDelta(-config.volume_step)
    }
}

/// Collapse an event batch into one tick's input
///
/// Repeated moves in the same direction count once, the first fire target and
/// the first menu click win, volume deltas add up.
fn collect_input(events: &[InputEvent]) -> TickInput {
    let mut input = TickInput::default();
    for event in events {
        match *event {
            InputEvent::Move(Direction::Up) => input.up = true,
            InputEvent::Move(Direction::Down) => input.down = true,
            InputEvent::Move(Direction::Left) => input.left = true,
            InputEvent::Move(Direction::Right) => input.right = true,
            InputEvent::FireAt(point) => {
                input.fire_at.get_or_insert(point);
            }
            InputEvent::MenuClick(point) => {
                input.menu_click.get_or_insert(point);
            }
            InputEvent::VolumeDelta(delta) => input.volume_delta += delta,
            InputEvent::Restart => input.restart = true,
            InputEvent::Exit => input.exit = true,
        }
    }
    input
}

/// Snapshot handed to the renderer and audio layer after each `advance`
///
/// Collections include dead monsters and spent projectiles; consumers skip
/// them with `Monster::is_alive` and `Projectile::active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    pub phase: GamePhase,
    pub player: Player,
    pub monsters: Vec<Monster>,
    pub projectiles: Vec<Projectile>,
    pub wave: u32,
    /// Music volume for display and playback (0.0 - 1.0)
    pub volume: f32,
    /// Sound cues raised this tick, in order
    pub cues: Vec<SoundCue>,
    pub game_over: bool,
    pub game_win: bool,
}

/// One game session
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    menu: MenuLayout,
    state: GameState,
}

impl Simulation {
    /// Create a session on the main menu
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "Session created ({}x{}, spawn every {}s, cap {})",
            config.screen_width,
            config.screen_height,
            config.spawn_interval,
            config.population_cap
        );
        Ok(Self {
            menu: MenuLayout::new(config.screen()),
            state: GameState::new(&config),
            config,
        })
    }

    /// Advance one tick
    ///
    /// A call with no events and `dt <= 0` changes nothing and raises no cues.
    pub fn advance(&mut self, events: &[InputEvent], dt: f32) -> FrameResult {
        let mut cues = Vec::new();
        let input = collect_input(events);
        if !(input.is_empty() && dt <= 0.0) {
            tick(&mut self.state, &input, dt, &self.config, &mut cues);
        }
        self.snapshot(cues)
    }

    /// Current frame without advancing
    pub fn frame(&self) -> FrameResult {
        self.snapshot(Vec::new())
    }

    fn snapshot(&self, cues: Vec<SoundCue>) -> FrameResult {
        let state = &self.state;
        FrameResult {
            phase: state.phase,
            player: state.player.clone(),
            monsters: state.monsters.clone(),
            projectiles: state.projectiles.clone(),
            wave: state.wave(),
            volume: state.volume.level(),
            cues,
            game_over: state.game_over(),
            game_win: state.game_win(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// True once the session has been exited
    pub fn is_finished(&self) -> bool {
        self.state.phase == GamePhase::Exited
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Menu button rectangles, for drawing and for building clicks
    pub fn menu(&self) -> &MenuLayout {
        &self.menu
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct world access for harnesses and tooling
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
