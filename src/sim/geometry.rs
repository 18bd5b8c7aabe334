//! Axis-aligned geometry helpers
//!
//! Boxes are stored by top-left corner and size, screen-style (y grows down).
//! Edge conventions are fixed here and used everywhere:
//! - box vs box: strict, boxes that only touch along an edge do not overlap
//! - circle vs box: inclusive, a tangent circle counts as a hit
//! - point in box: half-open, left/top edges inside, right/bottom outside

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test (shared edges are not an overlap)
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.pos.x < b_max.x
            && a_max.x > other.pos.x
            && self.pos.y < b_max.y
            && a_max.y > other.pos.y
    }

    /// Half-open containment: [x, x + w) × [y, y + h)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.pos.x && point.x < max.x && point.y >= self.pos.y && point.y < max.y
    }
}

/// Circle vs box test (inclusive at the boundary)
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = center.clamp(rect.pos, rect.max());
    center.distance_squared(closest) <= radius * radius
}

/// Unit vector in the direction of `v`, or `None` when it has no direction
pub fn normalize(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

/// Saturating clamp: an inverted range (`hi < lo`) collapses to `lo`
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi.max(lo))
}

/// Keep a box of `size` with top-left at `pos` fully inside `bounds`
///
/// A box larger than the bounds on some axis is pinned to 0 on that axis.
pub fn clamp_into(pos: Vec2, size: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(
        clamp(pos.x, 0.0, bounds.x - size.x),
        clamp(pos.y, 0.0, bounds.y - size.y),
    )
}
