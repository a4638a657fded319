use crate::collision::{Collidable, Rect};
use crate::render::{Drawable, SpriteKind};

/// A collectible point. Vanishes the first time the player touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct PointObstacle {
    rect: Rect,
}

impl PointObstacle {
    pub fn new(x: i32, y: i32, size: u32) -> Self {
        PointObstacle {
            rect: Rect::new(x, y, size, size),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Drawable for PointObstacle {
    fn sprite(&self) -> SpriteKind {
        SpriteKind::Point
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A solid block the player can clear by interacting while standing right
/// next to it and holding at least one item.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractObstacle {
    /// Identifier from the level's parameter list
    pub id: i32,
    rect: Rect,
}

impl InteractObstacle {
    pub fn new(id: i32, x: i32, y: i32, size: u32) -> Self {
        InteractObstacle {
            id,
            rect: Rect::new(x, y, size, size),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Collidable for InteractObstacle {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

impl Drawable for InteractObstacle {
    fn sprite(&self) -> SpriteKind {
        SpriteKind::Obstacle
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    #[test]
    fn test_obstacles_occupy_one_cell() {
        let point = PointObstacle::new(128, 64, 64);
        let obstacle = InteractObstacle::new(3, 192, 64, 64);

        assert_eq!(point.rect(), Rect::new(128, 64, 64, 64));
        assert_eq!(obstacle.get_bounds(), Rect::new(192, 64, 64, 64));
        assert_eq!(obstacle.id, 3);
    }

    #[test]
    fn test_obstacles_draw_with_their_own_sprite() {
        let mut surface = RecordingSurface::new();

        PointObstacle::new(0, 0, 64).draw(&mut surface).unwrap();
        InteractObstacle::new(1, 64, 0, 64).draw(&mut surface).unwrap();

        assert_eq!(surface.calls[0].0, SpriteKind::Point);
        assert_eq!(surface.calls[1], (SpriteKind::Obstacle, Rect::new(64, 0, 64, 64)));
    }
}
