//! Main menu hit testing

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;

/// What a menu click selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Exit,
}

/// Button rectangles, centered horizontally on the configured screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuLayout {
    pub play: Rect,
    pub exit: Rect,
}

impl MenuLayout {
    pub fn new(screen: Vec2) -> Self {
        let center = screen * 0.5;
        let left = center.x - BUTTON_WIDTH / 2.0;
        Self {
            play: Rect::new(left, center.y - 60.0, BUTTON_WIDTH, BUTTON_HEIGHT),
            exit: Rect::new(left, center.y + 20.0, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    /// Button under `point`, if any
    pub fn hit(&self, point: Vec2) -> Option<MenuAction> {
        if self.play.contains_point(point) {
            Some(MenuAction::Play)
        } else if self.exit.contains_point(point) {
            Some(MenuAction::Exit)
        } else {
            None
        }
    }
}
