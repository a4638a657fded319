use crate::collision::{Body, Collidable, Rect, aabb_intersect, check_collisions_with_collection};
use crate::render::{Drawable, SpriteKind};

/// Which way an enemy is moving and looking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Patrol parameters read from the level's parameter list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    /// How far right of the spawn point the enemy travels
    pub distance: f32,
    /// Pixels per frame
    pub speed: f32,
}

/// A patrolling guard.
///
/// Moves back and forth between its spawn x and `spawn x + distance`,
/// turning around exactly at each bound. It is not affected by gravity or
/// solids. In front of it is a sight rectangle used to spot the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub facing: Facing,
    patrol: Patrol,
    min_x: f32,
    max_x: f32,
    sight_range: u32,
}

impl Enemy {
    pub fn new(x: i32, y: i32, size: u32, patrol: Patrol, sight_range: u32) -> Self {
        let min_x = x as f32;
        Enemy {
            body: Body::new(min_x, y as f32, size, size),
            facing: Facing::Right,
            patrol,
            min_x,
            max_x: min_x + patrol.distance,
            sight_range,
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    /// Patrol bounds as (min x, max x)
    pub fn bounds_x(&self) -> (f32, f32) {
        (self.min_x, self.max_x)
    }

    pub fn patrol(&self) -> Patrol {
        self.patrol
    }

    /// Advances one frame along the patrol and returns the new sight rectangle.
    pub fn update(&mut self) -> Rect {
        let x = self.body.position.x + self.facing.sign() * self.patrol.speed;

        self.body.position.x = if x >= self.max_x {
            self.facing = Facing::Left;
            self.max_x
        } else if x <= self.min_x {
            self.facing = Facing::Right;
            self.min_x
        } else {
            x
        };

        self.sight_rect()
    }

    /// Rectangle directly in front of the enemy, as tall as the enemy.
    pub fn sight_rect(&self) -> Rect {
        let rect = self.rect();
        let x = match self.facing {
            Facing::Right => rect.right(),
            Facing::Left => rect.left().saturating_sub_unsigned(self.sight_range),
        };
        Rect::new(x, rect.top(), self.sight_range, rect.height())
    }

    /// True if the player stands in the sight rectangle with no tile between.
    ///
    /// Pure in the enemy's position and facing, the player's bounds and the
    /// tiles.
    pub fn detect_player<T: Collidable>(&self, player: &Rect, tiles: &[T]) -> bool {
        let sight = self.sight_rect();
        if !aabb_intersect(&sight, player) {
            return false;
        }

        let rect = self.rect();
        let (start, end) = match self.facing {
            Facing::Right => (rect.right(), player.left()),
            Facing::Left => (player.right(), rect.left()),
        };
        if end <= start {
            return true;
        }

        let gap = Rect::new(start, sight.top(), end.abs_diff(start), sight.height());
        check_collisions_with_collection(&gap, tiles).is_empty()
    }
}

impl Drawable for Enemy {
    fn sprite(&self) -> SpriteKind {
        SpriteKind::Enemy
    }

    fn bounds(&self) -> Rect {
        self.body.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(x: i32, distance: f32, speed: f32) -> Enemy {
        Enemy::new(x, 0, 64, Patrol { distance, speed }, 256)
    }

    fn no_tiles() -> Vec<Rect> {
        Vec::new()
    }

    #[test]
    fn test_patrol_stays_within_bounds_and_reverses_at_them() {
        let mut roomba = enemy(100, 300.0, 2.0);
        let mut reached_max = false;
        let mut reached_min_again = false;

        for _ in 0..1000 {
            roomba.update();
            let x = roomba.body.position.x;
            assert!((100.0..=400.0).contains(&x), "x = {}", x);

            if x == 400.0 {
                reached_max = true;
                assert_eq!(roomba.facing, Facing::Left);
            }
            if reached_max && x == 100.0 {
                reached_min_again = true;
                assert_eq!(roomba.facing, Facing::Right);
            }
        }

        assert!(reached_max);
        assert!(reached_min_again);
    }

    #[test]
    fn test_patrol_clamps_when_speed_overshoots() {
        let mut roomba = enemy(0, 10.0, 4.0);
        let xs: Vec<f32> = (0..5).map(|_| {
            roomba.update();
            roomba.body.position.x
        }).collect();

        assert_eq!(xs, vec![4.0, 8.0, 10.0, 6.0, 2.0]);
    }

    #[test]
    fn test_sight_rect_follows_facing() {
        let mut roomba = enemy(100, 300.0, 2.0);
        assert_eq!(roomba.sight_rect(), Rect::new(164, 0, 256, 64));

        roomba.facing = Facing::Left;
        assert_eq!(roomba.sight_rect(), Rect::new(-156, 0, 256, 64));
    }

    #[test]
    fn test_detects_player_in_front() {
        let roomba = enemy(0, 300.0, 2.0);
        let player = Rect::new(200, 0, 32, 64);

        assert!(roomba.detect_player(&player, &no_tiles()));
    }

    #[test]
    fn test_ignores_player_behind() {
        let mut roomba = enemy(200, 300.0, 2.0);
        roomba.facing = Facing::Right;
        let player = Rect::new(100, 0, 32, 64);

        assert!(!roomba.detect_player(&player, &no_tiles()));
    }

    #[test]
    fn test_ignores_player_out_of_range() {
        let roomba = enemy(0, 300.0, 2.0);
        let player = Rect::new(400, 0, 32, 64);

        assert!(!roomba.detect_player(&player, &no_tiles()));
    }

    #[test]
    fn test_tile_between_blocks_sight() {
        let roomba = enemy(0, 300.0, 2.0);
        let player = Rect::new(250, 0, 32, 64);
        let wall = vec![Rect::new(128, 0, 64, 64)];

        assert!(!roomba.detect_player(&player, &wall));
    }

    #[test]
    fn test_floor_under_sight_does_not_block() {
        let roomba = enemy(0, 300.0, 2.0);
        let player = Rect::new(250, 0, 32, 64);
        let floor = vec![Rect::new(64, 64, 64, 64), Rect::new(128, 64, 64, 64)];

        assert!(roomba.detect_player(&player, &floor));
    }

    #[test]
    fn test_detection_facing_left() {
        let mut roomba = enemy(300, 300.0, 2.0);
        roomba.facing = Facing::Left;
        let player = Rect::new(150, 0, 32, 64);
        let wall = vec![Rect::new(200, 0, 64, 64)];

        assert!(roomba.detect_player(&player, &no_tiles()));
        assert!(!roomba.detect_player(&player, &wall));
    }
}
