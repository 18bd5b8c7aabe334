//! Gameplay configuration
//!
//! Screen bounds and every tunable constant are injected at session start so
//! the simulation runs headlessly with any display size.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration errors, reported once when a session is built
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be a positive finite number (got {1})")]
    NotPositive(&'static str, f32),

    #[error("{0} must be at least 1")]
    Zero(&'static str),

    #[error("{0} must not be negative (got {1})")]
    Negative(&'static str, i32),

    #[error("initial volume must be within 0.0..=1.0 (got {0})")]
    VolumeOutOfRange(f32),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable session parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    /// Top-left corner at session start and after every restart
    pub player_start: Vec2,
    pub player_size: Vec2,
    pub player_max_health: i32,
    /// Units per tick per held direction
    pub player_speed: f32,

    // === Monsters ===
    pub monster_size: Vec2,
    pub monster_max_health: i32,
    pub monster_base_speed: f32,
    /// Every `monster_speed_tier` spawn indices add one unit of speed
    pub monster_speed_tier: u32,
    /// Health lost by the player per overlapping monster per tick
    pub contact_damage: i32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub projectile_damage: i32,

    // === Waves ===
    /// Seconds between spawn batches
    pub spawn_interval: f32,
    /// No new batch starts while this many monster records exist
    pub population_cap: usize,
    pub spawn_origin: Vec2,
    pub spawn_spacing: f32,
    pub spawn_columns: u32,

    // === Audio ===
    pub initial_volume: f32,
    pub volume_step: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_size: Vec2::splat(PLAYER_SIZE),
            player_max_health: PLAYER_MAX_HEALTH,
            player_speed: PLAYER_SPEED,

            monster_size: Vec2::splat(MONSTER_SIZE),
            monster_max_health: MONSTER_MAX_HEALTH,
            monster_base_speed: MONSTER_BASE_SPEED,
            monster_speed_tier: MONSTER_SPEED_TIER,
            contact_damage: CONTACT_DAMAGE,

            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_damage: PROJECTILE_DAMAGE,

            spawn_interval: SPAWN_INTERVAL,
            population_cap: POPULATION_CAP,
            spawn_origin: Vec2::new(SPAWN_ORIGIN_X, SPAWN_ORIGIN_Y),
            spawn_spacing: SPAWN_SPACING,
            spawn_columns: SPAWN_COLUMNS,

            initial_volume: INITIAL_VOLUME,
            volume_step: VOLUME_STEP,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive(name, value))
    }
}

fn non_negative(name: &'static str, value: i32) -> Result<(), ConfigError> {
    if value < 0 {
        Err(ConfigError::Negative(name, value))
    } else {
        Ok(())
    }
}

impl SimConfig {
    /// Screen size as a vector
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Check construction-time preconditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("player_size.x", self.player_size.x)?;
        positive("player_size.y", self.player_size.y)?;
        positive("player_speed", self.player_speed)?;
        positive("monster_size.x", self.monster_size.x)?;
        positive("monster_size.y", self.monster_size.y)?;
        positive("monster_base_speed", self.monster_base_speed)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("projectile_radius", self.projectile_radius)?;
        positive("spawn_interval", self.spawn_interval)?;
        positive("spawn_spacing", self.spawn_spacing)?;
        positive("volume_step", self.volume_step)?;

        if self.player_max_health < 1 {
            return Err(ConfigError::Zero("player_max_health"));
        }
        if self.monster_max_health < 1 {
            return Err(ConfigError::Zero("monster_max_health"));
        }
        if self.monster_speed_tier == 0 {
            return Err(ConfigError::Zero("monster_speed_tier"));
        }
        if self.population_cap == 0 {
            return Err(ConfigError::Zero("population_cap"));
        }
        if self.spawn_columns == 0 {
            return Err(ConfigError::Zero("spawn_columns"));
        }
        non_negative("contact_damage", self.contact_damage)?;
        non_negative("projectile_damage", self.projectile_damage)?;

        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(ConfigError::VolumeOutOfRange(self.initial_volume));
        }
        Ok(())
    }

    /// Parse and validate a JSON config (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
