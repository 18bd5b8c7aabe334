//! Monster Arena - a top-down wave shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, combat, spawning, game phases)
//! - `settings`: Injected gameplay configuration
//! - `audio`: Sound cue identifiers and the volume level echoed to the audio layer
//!
//! Rendering, audio playback, input polling and asset loading live outside
//! this crate. Drivers call [`sim::Simulation::advance`] once per frame and
//! read the returned [`sim::FrameResult`].

pub mod audio;
pub mod settings;
pub mod sim;

pub use audio::{SoundCue, Volume};
pub use settings::{ConfigError, SimConfig};
pub use sim::{Direction, FrameResult, GamePhase, InputEvent, Simulation};

/// Default gameplay constants (overridable through [`SimConfig`])
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 100.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Units per tick
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Monster defaults
    pub const MONSTER_SIZE: f32 = 60.0;
    pub const MONSTER_MAX_HEALTH: i32 = 100;
    pub const MONSTER_BASE_SPEED: f32 = 2.0;
    /// Spawn indices per +1 speed tier
    pub const MONSTER_SPEED_TIER: u32 = 5;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 8.0;
    pub const PROJECTILE_RADIUS: f32 = 8.0;
    pub const PROJECTILE_DAMAGE: i32 = 10;

    /// Health lost per overlapping monster per tick
    pub const CONTACT_DAMAGE: i32 = 1;

    /// Wave spawning
    pub const SPAWN_INTERVAL: f32 = 5.0;
    pub const POPULATION_CAP: usize = 10;
    pub const SPAWN_ORIGIN_X: f32 = 1000.0;
    pub const SPAWN_ORIGIN_Y: f32 = 200.0;
    pub const SPAWN_SPACING: f32 = 80.0;
    pub const SPAWN_COLUMNS: u32 = 5;

    /// Music volume
    pub const INITIAL_VOLUME: f32 = 0.2;
    pub const VOLUME_STEP: f32 = 0.1;
}
