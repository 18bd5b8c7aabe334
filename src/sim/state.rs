//! Game state and core simulation types
//!
//! Entities are plain value records. Dead monsters and spent projectiles are
//! never removed: they stay in their collections as inert records.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::spawn::SpawnDirector;
use crate::audio::Volume;
use crate::settings::SimConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for Play or Exit
    MainMenu,
    /// Active gameplay
    Playing,
    /// Player ran out of health, waiting for restart
    GameOver,
    /// Every monster is dead, waiting for restart
    Win,
    /// Session ended (terminal)
    Exited,
}

impl GamePhase {
    /// Round finished, entities frozen until restart
    pub fn is_round_over(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// The player avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// Units per tick
    pub speed: f32,
}

impl Player {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pos: config.player_start,
            size: config.player_size,
            health: config.player_max_health,
            max_health: config.player_max_health,
            speed: config.player_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// A chasing monster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Collection position at creation; fixes grid slot and speed tier
    pub spawn_index: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// Units per tick per axis
    pub speed: f32,
}

impl Monster {
    /// Build the monster for a given spawn index
    ///
    /// Spawn slots form a grid right of the play area, `spawn_columns` wide;
    /// every `monster_speed_tier` indices add one unit of speed.
    pub fn spawn(spawn_index: u32, config: &SimConfig) -> Self {
        let col = spawn_index % config.spawn_columns;
        let row = spawn_index / config.spawn_columns;
        let pos = config.spawn_origin + Vec2::new(col as f32, row as f32) * config.spawn_spacing;
        let tier = spawn_index / config.monster_speed_tier;

        Self {
            spawn_index,
            pos,
            size: config.monster_size,
            health: config.monster_max_health,
            max_health: config.monster_max_health,
            speed: config.monster_base_speed + tier as f32,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// A player-fired projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Cleared on first hit, never set again
    pub active: bool,
}

impl Projectile {
    /// Fire from `origin` toward `target`, or `None` if they coincide
    pub fn fire(origin: Vec2, target: Vec2, config: &SimConfig) -> Option<Self> {
        let dir = super::geometry::normalize(target - origin)?;
        Some(Self {
            pos: origin,
            vel: dir * config.projectile_speed,
            radius: config.projectile_radius,
            active: true,
        })
    }
}

/// Complete session state (exclusively owned by the simulation facade)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Player avatar
    pub player: Player,
    /// All monster records ever spawned this round, dead ones included
    pub monsters: Vec<Monster>,
    /// All projectiles fired this round, spent ones included
    pub projectiles: Vec<Projectile>,
    /// Wave counter and spawn timer
    pub spawner: SpawnDirector,
    /// Music volume, survives restarts
    pub volume: Volume,
}

impl GameState {
    /// Create a fresh session sitting on the main menu
    pub fn new(config: &SimConfig) -> Self {
        let mut state = Self {
            phase: GamePhase::MainMenu,
            player: Player::new(config),
            monsters: Vec::new(),
            projectiles: Vec::new(),
            spawner: SpawnDirector::new(),
            volume: Volume::new(config.initial_volume),
        };
        state.reset(config);
        state
    }

    /// Reinitialize the round in place
    ///
    /// Player back at the start with full health, exactly one monster at
    /// spawn index 0, no projectiles, wave 1, timer 0. Phase and volume are
    /// left to the caller.
    pub fn reset(&mut self, config: &SimConfig) {
        self.player = Player::new(config);
        self.monsters.clear();
        self.projectiles.clear();
        self.monsters.push(Monster::spawn(0, config));
        self.spawner.reset();
    }

    /// Current wave number (starts at 1)
    pub fn wave(&self) -> u32 {
        self.spawner.wave_number
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn game_win(&self) -> bool {
        self.phase == GamePhase::Win
    }

    /// True when every monster record is dead (false for an empty roster)
    pub fn all_monsters_dead(&self) -> bool {
        !self.monsters.is_empty() && self.monsters.iter().all(|m| !m.is_alive())
    }

    pub fn live_monster_count(&self) -> usize {
        self.monsters.iter().filter(|m| m.is_alive()).count()
    }

    pub fn active_projectile_count(&self) -> usize {
        self.projectiles.iter().filter(|p| p.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_on_menu() {
        let config = SimConfig::default();
        let state = GameState::new(&config);
        assert_eq!(state.phase, GamePhase::MainMenu);
        assert_eq!(state.monsters.len(), 1);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.wave(), 1);
        assert_eq!(state.player.pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.player.health, 100);
    }

    #[test]
    fn test_monster_grid_and_speed_tiers() {
        let config = SimConfig::default();

        let m0 = Monster::spawn(0, &config);
        assert_eq!(m0.pos, Vec2::new(1000.0, 200.0));
        assert_eq!(m0.speed, 2.0);
        assert_eq!(m0.size, Vec2::splat(60.0));

        let m4 = Monster::spawn(4, &config);
        assert_eq!(m4.pos, Vec2::new(1320.0, 200.0));
        assert_eq!(m4.speed, 2.0);

        // Wraps to the next row, next speed tier
        let m5 = Monster::spawn(5, &config);
        assert_eq!(m5.pos, Vec2::new(1000.0, 280.0));
        assert_eq!(m5.speed, 3.0);

        let m12 = Monster::spawn(12, &config);
        assert_eq!(m12.pos, Vec2::new(1160.0, 360.0));
        assert_eq!(m12.speed, 4.0);
    }

    #[test]
    fn test_projectile_fire_direction() {
        let config = SimConfig::default();
        let p = Projectile::fire(Vec2::ZERO, Vec2::new(30.0, 40.0), &config).expect("direction");
        assert!((p.vel.x - 4.8).abs() < 1e-5);
        assert!((p.vel.y - 6.4).abs() < 1e-5);
        assert!(p.active);
        assert_eq!(p.radius, 8.0);

        assert!(Projectile::fire(Vec2::ONE, Vec2::ONE, &config).is_none());
    }

    #[test]
    fn test_reset_restores_round() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        state.player.health = 3;
        state.player.pos = Vec2::new(500.0, 500.0);
        state.monsters.push(Monster::spawn(1, &config));
        state.projectiles.push(Projectile::fire(Vec2::ZERO, Vec2::X, &config).unwrap());
        state.spawner.wave_number = 4;
        state.spawner.spawn_timer = 3.0;

        state.reset(&config);
        assert_eq!(state.player, Player::new(&config));
        assert_eq!(state.monsters, vec![Monster::spawn(0, &config)]);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.wave(), 1);
        assert_eq!(state.spawner.spawn_timer, 0.0);
    }

    #[test]
    fn test_all_monsters_dead() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config);
        assert!(!state.all_monsters_dead());
        state.monsters[0].health = 0;
        assert!(state.all_monsters_dead());
        state.monsters.clear();
        assert!(!state.all_monsters_dead());
    }
}
