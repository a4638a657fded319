use crate::collision::{Body, Rect, aabb_intersect};
use crate::config::Tuning;
use crate::input_system::InputSnapshot;
use crate::inventory::Inventory;
use crate::item::{Item, ItemKind};
use crate::physics::{Gravity, fall};
use crate::render::{Drawable, SpriteKind};
use glam::Vec2;

/// Size and movement constants for a player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    pub width: u32,
    pub height: u32,
    pub speed: f32,
    pub jump_speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings::from(&Tuning::default())
    }
}

impl From<&Tuning> for PlayerSettings {
    fn from(tuning: &Tuning) -> Self {
        PlayerSettings {
            width: tuning.player_width,
            height: tuning.player_height,
            speed: tuning.player_speed,
            jump_speed: tuning.jump_speed,
        }
    }
}

/// The controllable character.
///
/// `direction.x` is the horizontal intent (-1, 0 or 1) and is scaled by
/// `speed` during the horizontal pass. `direction.y` is the vertical velocity
/// in pixels per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub direction: Vec2,
    pub speed: f32,
    pub jump_speed: f32,
    /// Set by the vertical pass when the player landed on something
    pub on_ground: bool,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(x: i32, y: i32, settings: PlayerSettings) -> Self {
        Player {
            body: Body::new(x as f32, y as f32, settings.width, settings.height),
            direction: Vec2::ZERO,
            speed: settings.speed,
            jump_speed: settings.jump_speed,
            on_ground: false,
            inventory: Inventory::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    /// Reads movement intent from this frame's input.
    ///
    /// Jumping only starts from the ground.
    pub fn apply_input(&mut self, input: &InputSnapshot) {
        self.direction.x = match (input.left, input.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        if input.jump && self.on_ground {
            self.direction.y = self.jump_speed;
            self.on_ground = false;
        }
    }

    /// Moves every item touching the player into the inventory.
    ///
    /// Picked items are removed from `items`; their kinds are returned in
    /// collection order.
    pub fn pick_up(&mut self, items: &mut Vec<Item>) -> Vec<ItemKind> {
        let bounds = self.rect();
        let mut picked = Vec::new();

        items.retain(|item| {
            if aabb_intersect(&bounds, &item.rect()) {
                picked.push(item.kind);
                false
            } else {
                true
            }
        });

        for kind in &picked {
            self.inventory.add(*kind);
        }

        picked
    }

    /// Per-frame update: input first, then item pickup.
    pub fn update(&mut self, input: &InputSnapshot, items: &mut Vec<Item>) -> Vec<ItemKind> {
        self.apply_input(input);
        self.pick_up(items)
    }

    pub fn apply_gravity(&mut self, gravity: Gravity) {
        self.direction.y = fall(self.direction.y, gravity.acceleration, gravity.terminal_velocity);
        self.body.position.y += self.direction.y;
    }
}

impl Drawable for Player {
    fn sprite(&self) -> SpriteKind {
        SpriteKind::Player
    }

    fn bounds(&self) -> Rect {
        self.body.rect()
    }
}
