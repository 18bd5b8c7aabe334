//! Per-tick combat resolution
//!
//! Movement, projectiles and damage. `tick` calls these in a fixed order;
//! each step only reads what earlier steps have already settled.

use glam::Vec2;

use super::geometry::{circle_intersects_rect, clamp_into};
use super::state::{GamePhase, GameState, Monster, Player, Projectile};
use crate::audio::SoundCue;
use crate::settings::SimConfig;

/// Move the player by the summed direction intent, then keep it on screen
///
/// `intent` is a sum of cardinal unit vectors, so diagonals are not
/// normalized and move up to `speed * sqrt(2)` per tick.
pub fn move_player(player: &mut Player, intent: Vec2, bounds: Vec2) {
    player.pos += intent * player.speed;
    player.pos = clamp_into(player.pos, player.size, bounds);
}

/// Step every live monster toward the player's corner, one axis at a time
///
/// Each axis takes full `speed` steps with no normalization. The "toward"
/// and "away" checks run back to back, so a monster that overshoots while
/// stepping up the axis is stepped straight back in the same tick.
pub fn chase_player(monsters: &mut [Monster], target: Vec2, bounds: Vec2) {
    for monster in monsters.iter_mut().filter(|m| m.is_alive()) {
        if monster.pos.x < target.x {
            monster.pos.x += monster.speed;
        }
        if monster.pos.x > target.x {
            monster.pos.x -= monster.speed;
        }
        if monster.pos.y < target.y {
            monster.pos.y += monster.speed;
        }
        if monster.pos.y > target.y {
            monster.pos.y -= monster.speed;
        }
        monster.pos = clamp_into(monster.pos, monster.size, bounds);
    }
}

/// Launch a projectile from the player's center toward `target`
///
/// Returns false (and fires nothing) when the target is the player's center.
pub fn fire(state: &mut GameState, target: Vec2, config: &SimConfig) -> bool {
    match Projectile::fire(state.player.center(), target, config) {
        Some(projectile) => {
            state.projectiles.push(projectile);
            true
        }
        None => {
            log::warn!("Fire request at {target} has no direction, ignored");
            false
        }
    }
}

/// Move active projectiles and apply first-hit damage
///
/// Each projectile tests live monsters in collection order and stops at the
/// first hit: that monster loses `damage`, the projectile goes inactive for
/// good and an attack-hit cue is raised.
pub fn advance_projectiles(
    projectiles: &mut [Projectile],
    monsters: &mut [Monster],
    damage: i32,
    cues: &mut Vec<SoundCue>,
) {
    for projectile in projectiles.iter_mut().filter(|p| p.active) {
        projectile.pos += projectile.vel;

        let hit = monsters
            .iter_mut()
            .filter(|m| m.is_alive())
            .find(|m| circle_intersects_rect(projectile.pos, projectile.radius, &m.rect()));

        if let Some(monster) = hit {
            monster.health -= damage;
            projectile.active = false;
            cues.push(SoundCue::AttackHit);
        }
    }
}

/// Each live monster overlapping the player deals contact damage
///
/// Returns the number of monsters in contact this tick.
pub fn apply_contact_damage(player: &mut Player, monsters: &[Monster], damage: i32) -> usize {
    let player_rect = player.rect();
    let contacts = monsters
        .iter()
        .filter(|m| m.is_alive() && m.rect().intersects(&player_rect))
        .count();
    if contacts > 0 {
        let total = damage.saturating_mul(i32::try_from(contacts).unwrap_or(i32::MAX));
        player.health = player.health.saturating_sub(total).max(0);
    }
    contacts
}

/// Decide whether the round has ended
///
/// Defeat takes precedence when both conditions land on the same tick.
pub fn resolve_outcome(state: &GameState) -> GamePhase {
    if !state.player.is_alive() {
        GamePhase::GameOver
    } else if state.all_monsters_dead() {
        GamePhase::Win
    } else {
        GamePhase::Playing
    }
}
