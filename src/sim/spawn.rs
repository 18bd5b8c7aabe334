//! Timer-driven wave spawning

use serde::{Deserialize, Serialize};

use super::state::Monster;
use crate::settings::SimConfig;

/// Wave counter and spawn timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnDirector {
    /// Size of the next batch (starts at 1)
    pub wave_number: u32,
    /// Seconds since the last batch
    pub spawn_timer: f32,
}

impl Default for SpawnDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnDirector {
    pub fn new() -> Self {
        Self {
            wave_number: 1,
            spawn_timer: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Accumulate `dt` and emit a batch once the interval has elapsed
    ///
    /// The batch holds `wave_number` monsters with spawn indices starting at
    /// `current_count`. While `current_count` is at the population cap the
    /// timer is not reset, so a held-back batch fires on the first tick the
    /// count drops below the cap. A batch may overshoot the cap.
    pub fn tick(&mut self, dt: f32, current_count: usize, config: &SimConfig) -> Vec<Monster> {
        self.spawn_timer += dt;

        if self.spawn_timer < config.spawn_interval || current_count >= config.population_cap {
            return Vec::new();
        }

        let first = current_count as u32;
        let batch: Vec<Monster> = (first..first + self.wave_number)
            .map(|index| Monster::spawn(index, config))
            .collect();

        log::debug!(
            "Wave {} spawned {} monster(s) at indices {}..{}",
            self.wave_number,
            batch.len(),
            first,
            first + self.wave_number
        );

        self.wave_number += 1;
        self.spawn_timer = 0.0;
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_spawn_before_interval() {
        let config = SimConfig::default();
        let mut director = SpawnDirector::new();
        assert!(director.tick(4.9, 1, &config).is_empty());
        assert_eq!(director.wave_number, 1);
        assert!((director.spawn_timer - 4.9).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_batch_size_tracks_wave() {
        let config = SimConfig::default();
        let mut director = SpawnDirector::new();

        let batch = director.tick(5.0, 1, &config);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].spawn_index, 1);
        assert_eq!(director.wave_number, 2);
        assert_eq!(director.spawn_timer, 0.0);

        let batch = director.tick(5.0, 2, &config);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].spawn_index, 2);
        assert_eq!(batch[1].spawn_index, 3);
        assert_eq!(director.wave_number, 3);
    }

    #[test]
    fn test_cap_holds_timer() {
        let config = SimConfig::default();
        let mut director = SpawnDirector::new();

        assert!(director.tick(5.0, 10, &config).is_empty());
        assert!(director.tick(1.0, 10, &config).is_empty());
        assert!((director.spawn_timer - 6.0).abs() < 1e-6);
        assert_eq!(director.wave_number, 1);

        // Capacity frees up: queued batch fires immediately
        let batch = director.tick(0.0, 9, &config);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].spawn_index, 9);
        assert_eq!(director.spawn_timer, 0.0);
    }

    #[test]
    fn test_batch_may_overshoot_cap() {
        let config = SimConfig::default();
        let mut director = SpawnDirector {
            wave_number: 4,
            spawn_timer: 0.0,
        };
        let batch = director.tick(5.0, 9, &config);
        assert_eq!(batch.len(), 4);
        assert_eq!(batch.last().map(|m| m.spawn_index), Some(12));
    }
}
