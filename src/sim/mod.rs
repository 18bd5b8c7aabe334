//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven, one `advance` per external frame
//! - Stable iteration order (collection order)
//! - No rendering, audio or platform dependencies

pub mod combat;
pub mod geometry;
pub mod menu;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{Rect, circle_intersects_rect, clamp, clamp_into, normalize};
pub use menu::{MenuAction, MenuLayout};
pub use session::{Direction, FrameResult, InputEvent, Simulation};
pub use spawn::SpawnDirector;
pub use state::{GamePhase, GameState, Monster, Player, Projectile};
pub use tick::{TickInput, tick};
