//! Sound cues and music volume
//!
//! The simulation never touches an audio device. It raises cues in each
//! frame result and the audio layer decides how to play them.

use serde::{Deserialize, Serialize};

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundCue {
    /// Projectile struck a monster
    AttackHit,
    /// Play was pressed on the main menu, background music should start
    MusicStart,
}

impl SoundCue {
    /// Stable identifier for the audio layer
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::AttackHit => "attack-hit",
            SoundCue::MusicStart => "music-start",
        }
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Music volume (0.0 - 1.0)
///
/// Cosmetic only: it never feeds back into gameplay, it is just echoed in
/// every frame so the audio layer can apply it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume(f32);

impl Default for Volume {
    fn default() -> Self {
        Self(crate::consts::INITIAL_VOLUME)
    }
}

impl Volume {
    pub fn new(level: f32) -> Self {
        Self(level.clamp(0.0, 1.0))
    }

    pub fn level(&self) -> f32 {
        self.0
    }

    /// Nudge the volume, saturating at both ends
    pub fn adjust(&mut self, delta: f32) {
        if delta.is_finite() {
            self.0 = (self.0 + delta).clamp(0.0, 1.0);
        }
    }
}
