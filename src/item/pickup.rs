use super::ItemKind;
use crate::collision::{Body, Rect};
use crate::physics::fall;
use crate::render::{Drawable, SpriteKind};
use glam::Vec2;

/// An item placed in the level, waiting to be picked up.
///
/// Items fall under the same gravity as the player, with their own
/// velocity. They only ever move vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub body: Body,
    pub direction: Vec2,
}

impl Item {
    pub fn new(kind: ItemKind, x: i32, y: i32, width: u32, height: u32) -> Self {
        Item {
            kind,
            body: Body::new(x as f32, y as f32, width, height),
            direction: Vec2::ZERO,
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    /// Accelerates downward and moves by the new vertical velocity.
    pub fn apply_gravity(&mut self, gravity: f32, terminal_velocity: f32) {
        self.direction.y = fall(self.direction.y, gravity, terminal_velocity);
        self.body.position.y += self.direction.y;
    }
}

impl Drawable for Item {
    fn sprite(&self) -> SpriteKind {
        SpriteKind::Item(self.kind)
    }

    fn bounds(&self) -> Rect {
        self.body.rect()
    }
}
