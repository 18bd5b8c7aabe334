//! Property tests: invariants that must hold for any input sequence

use glam::Vec2;
use monster_arena::sim::{Direction, GamePhase, GameState, InputEvent, Monster, Simulation};
use monster_arena::SimConfig;
use proptest::prelude::*;

/// Small monsters and short waves so random runs reach kills, wins and
/// defeats within a few dozen ticks
fn fast_config() -> SimConfig {
    SimConfig {
        monster_max_health: 20,
        spawn_interval: 0.5,
        player_max_health: 30,
        ..Default::default()
    }
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn point() -> impl Strategy<Value = Vec2> {
    (0.0f32..1280.0, 0.0f32..720.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => direction().prop_map(InputEvent::Move),
        4 => point().prop_map(InputEvent::FireAt),
        // Play button center, or anywhere
        2 => Just(InputEvent::MenuClick(Vec2::new(640.0, 325.0))),
        1 => point().prop_map(InputEvent::MenuClick),
        1 => prop_oneof![Just(0.1f32), Just(-0.1f32)].prop_map(InputEvent::VolumeDelta),
        2 => Just(InputEvent::Restart),
    ]
}

fn tick_batch() -> impl Strategy<Value = (Vec<InputEvent>, f32)> {
    (prop::collection::vec(event(), 0..4), 0.001f32..0.8)
}

fn all_dead(state: &GameState) -> bool {
    state.monsters.iter().all(|m| m.health <= 0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_for_any_inputs(batches in prop::collection::vec(tick_batch(), 1..120)) {
        let config = fast_config();
        let mut sim = Simulation::new(config).unwrap();

        for (events, dt) in &batches {
            let before = sim.state().clone();
            let frame = sim.advance(events, *dt);
            let after = sim.state();

            // Outcome flags are exclusive and mirror the phase
            prop_assert!(!(frame.game_over && frame.game_win));
            prop_assert_eq!(frame.game_win, after.phase == GamePhase::Win);
            prop_assert_eq!(frame.game_over, after.phase == GamePhase::GameOver);

            // Win holds exactly when everything is dead, with no lag
            match after.phase {
                GamePhase::Win => prop_assert!(all_dead(after)),
                GamePhase::Playing => {
                    prop_assert!(!all_dead(after));
                    prop_assert!(after.player.health > 0);
                }
                GamePhase::GameOver => prop_assert!(after.player.health <= 0),
                _ => {}
            }

            prop_assert!(after.player.health >= 0);
            prop_assert!(after.player.health <= after.player.max_health);
            prop_assert!((0.0..=1.0).contains(&frame.volume));

            // Player stays on screen
            prop_assert!(after.player.pos.x >= 0.0 && after.player.pos.x <= 1280.0 - 100.0);
            prop_assert!(after.player.pos.y >= 0.0 && after.player.pos.y <= 720.0 - 100.0);

            if before.phase != GamePhase::Playing {
                // Only menu start or restart may reset; anything else is frozen
                if after.phase == GamePhase::Playing {
                    prop_assert_eq!(after.player.health, after.player.max_health);
                    prop_assert_eq!(after.monsters.len(), 1);
                    prop_assert!(after.projectiles.is_empty());
                    prop_assert_eq!(after.wave(), 1);
                    prop_assert_eq!(after.spawner.spawn_timer, 0.0);
                } else if before.phase.is_round_over() {
                    prop_assert_eq!(&after.player, &before.player);
                    prop_assert_eq!(&after.monsters, &before.monsters);
                    prop_assert_eq!(&after.projectiles, &before.projectiles);
                }
                continue;
            }

            // Health only ever goes down during play
            prop_assert!(after.player.health <= before.player.health);

            // Records are never removed
            prop_assert!(after.monsters.len() >= before.monsters.len());
            prop_assert!(after.projectiles.len() >= before.projectiles.len());

            // Dead monsters are inert
            for (old, new) in before.monsters.iter().zip(&after.monsters) {
                prop_assert_eq!(old.spawn_index, new.spawn_index);
                prop_assert!(new.health <= old.health);
                if old.health <= 0 {
                    prop_assert_eq!(old, new);
                }
            }

            // Spent projectiles stay spent and do not move
            for (old, new) in before.projectiles.iter().zip(&after.projectiles) {
                if !old.active {
                    prop_assert_eq!(old, new);
                }
            }

            // One hit cue per projectile that went inactive this tick
            let newly_spent = before
                .projectiles
                .iter()
                .zip(&after.projectiles)
                .filter(|(old, new)| old.active && !new.active)
                .count()
                + after.projectiles[before.projectiles.len()..]
                    .iter()
                    .filter(|p| !p.active)
                    .count();
            prop_assert_eq!(frame.cues.len(), newly_spent);
        }
    }

    #[test]
    fn spawn_never_starts_at_cap(timer in 0.0f32..20.0, wave in 1u32..8, dt in 0.001f32..2.0) {
        let config = SimConfig::default();
        let mut sim = Simulation::new(config).unwrap();
        let play = sim.menu().play.center();
        sim.advance(&[InputEvent::MenuClick(play)], 0.0);
        {
            let state = sim.state_mut();
            state.monsters = (0..10)
                .map(|i| Monster::spawn(i, &config))
                .collect();
            state.spawner.wave_number = wave;
            state.spawner.spawn_timer = timer;
        }

        let frame = sim.advance(&[], dt);
        prop_assert_eq!(frame.monsters.len(), 10);
        prop_assert_eq!(frame.wave, wave);
        prop_assert!((sim.state().spawner.spawn_timer - (timer + dt)).abs() < 1e-4);
    }

    #[test]
    fn empty_zero_dt_never_changes_anything(batches in prop::collection::vec(tick_batch(), 0..40)) {
        let mut sim = Simulation::new(fast_config()).unwrap();
        for (events, dt) in &batches {
            sim.advance(events, *dt);
        }
        let before = sim.frame();
        let frame = sim.advance(&[], 0.0);
        prop_assert_eq!(&frame, &before);
        prop_assert!(frame.cues.is_empty());
    }
}
