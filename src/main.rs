//! Monster Arena headless driver
//!
//! Runs a seeded autopilot session against the simulation core at 60 Hz and
//! logs how it goes. Useful as a soak run and as a reference for wiring the
//! core into a real frame loop.
//!
//! Usage: `monster-arena [config.json] [seed] [ticks]`

mod autopilot {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use monster_arena::SoundCue;
    use monster_arena::sim::{Direction, FrameResult, GamePhase, InputEvent, Simulation};

    /// Fixed simulation timestep (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks between progress log lines
    const REPORT_EVERY: u64 = 600;

    /// Bot that plays the game through the public event API
    pub struct Autopilot {
        rng: Pcg32,
        /// Current strafe directions, re-rolled now and then
        strafe: Vec<Direction>,
        /// Ticks left before the next shot
        cooldown: u32,
        /// Rounds played to completion
        pub rounds: u32,
        pub wins: u32,
        pub losses: u32,
    }

    impl Autopilot {
        pub fn new(seed: u64) -> Self {
            Self {
                rng: Pcg32::seed_from_u64(seed),
                strafe: Vec::new(),
                cooldown: 0,
                rounds: 0,
                wins: 0,
                losses: 0,
            }
        }

        /// Decide this tick's events from the last frame
        pub fn events(&mut self, sim: &Simulation, frame: &FrameResult) -> Vec<InputEvent> {
            let mut events = Vec::new();
            match frame.phase {
                GamePhase::MainMenu => {
                    events.push(InputEvent::MenuClick(sim.menu().play.center()));
                }
                GamePhase::Playing => {
                    if self.rng.random_bool(0.02) {
                        self.reroll_strafe();
                    }
                    events.extend(self.strafe.iter().map(|&d| InputEvent::Move(d)));

                    if self.cooldown == 0 {
                        if let Some(target) = nearest_live_monster(frame) {
                            let jitter = Vec2::new(
                                self.rng.random_range(-6.0..6.0),
                                self.rng.random_range(-6.0..6.0),
                            );
                            events.push(InputEvent::FireAt(target + jitter));
                            self.cooldown = self.rng.random_range(4..12);
                        }
                    } else {
                        self.cooldown -= 1;
                    }

                    if self.rng.random_bool(0.001) {
                        let config = sim.config();
                        events.push(if self.rng.random_bool(0.5) {
                            InputEvent::volume_up(config)
                        } else {
                            InputEvent::volume_down(config)
                        });
                    }
                }
                GamePhase::GameOver | GamePhase::Win => {
                    self.rounds += 1;
                    if frame.game_win {
                        self.wins += 1;
                    } else {
                        self.losses += 1;
                    }
                    self.strafe.clear();
                    events.push(InputEvent::Restart);
                }
                GamePhase::Exited => {}
            }
            events
        }

        fn reroll_strafe(&mut self) {
            self.strafe.clear();
            for dir in Direction::ALL {
                if self.rng.random_bool(0.3) {
                    self.strafe.push(dir);
                }
            }
        }
    }

    /// Center of the live monster closest to the player
    fn nearest_live_monster(frame: &FrameResult) -> Option<Vec2> {
        let player = frame.player.center();
        frame
            .monsters
            .iter()
            .filter(|m| m.is_alive())
            .map(|m| m.rect().center())
            .min_by(|a, b| {
                a.distance_squared(player)
                    .partial_cmp(&b.distance_squared(player))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Drive a session for `ticks` frames and return the last frame
    pub fn run(sim: &mut Simulation, seed: u64, ticks: u64) -> FrameResult {
        let mut pilot = Autopilot::new(seed);
        let mut frame = sim.frame();
        let mut hits = 0usize;

        for t in 0..ticks {
            let events = pilot.events(sim, &frame);
            frame = sim.advance(&events, SIM_DT);
            hits += frame.cues.iter().filter(|&&c| c == SoundCue::AttackHit).count();

            if t % REPORT_EVERY == 0 {
                log::info!(
                    "tick {t}: {:?} wave {} hp {} monsters {}/{} projectiles {} volume {:.1}",
                    frame.phase,
                    frame.wave,
                    frame.player.health,
                    sim.state().live_monster_count(),
                    frame.monsters.len(),
                    sim.state().active_projectile_count(),
                    frame.volume,
                );
            }
            if sim.is_finished() {
                break;
            }
        }

        // Leave through the front door
        frame = sim.advance(&[InputEvent::Exit], 0.0);
        log::info!(
            "Autopilot done: {} round(s), {} win(s), {} loss(es), {} hit(s)",
            pilot.rounds,
            pilot.wins,
            pilot.losses,
            hits
        );
        frame
    }
}

fn main() {
    use monster_arena::{SimConfig, Simulation};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Monster Arena (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid config {path}: {e}");
                std::process::exit(2);
            }
        },
        _ => SimConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let ticks = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 120);

    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Cannot start session: {e}");
            std::process::exit(2);
        }
    };
    log::info!("Running autopilot with seed {seed} for {ticks} ticks");

    let frame = autopilot::run(&mut sim, seed, ticks);
    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final frame: {e}"),
    }
}
