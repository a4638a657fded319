/// Gravity and axis-separated collision resolution.
///
/// Each frame the player moves horizontally and is pushed out of every solid
/// it now overlaps. Only after that does gravity move it (and every loose
/// item) vertically, followed by a second push-out on the vertical axis.
///
/// # Algorithm
///
/// Horizontal pass:
/// 1. `x += direction.x * speed`
/// 2. For each overlapping solid, in collection order (tiles, then
///    obstacles): moving left snaps the left edge to the solid's right edge,
///    moving right snaps the right edge to the solid's left edge.
///
/// Vertical pass:
/// 1. Integrate gravity into the player's and each item's vertical velocity
///    and move by it.
/// 2. For each overlapping tile: falling snaps bottom to the tile's top,
///    rising snaps top to the tile's bottom. Either way vertical velocity
///    becomes zero.
/// 3. The same rule for the player against obstacles.
///
/// There is no penetration-depth sorting and no swept test, so a fast
/// diagonal approach can snag on a corner or pass through a thin solid.
/// Items never collide with obstacles.
use crate::collision::{Body, Collidable, aabb_intersect};
use crate::item::Item;
use crate::player::Player;

/// Gravity settings shared by the player and items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub acceleration: f32,
    pub terminal_velocity: f32,
}

/// Result of a vertical snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Was falling, now resting on top of a solid
    Landed,
    /// Was rising, hit the underside of a solid
    HeadBump,
}

/// Next vertical velocity after one frame of gravity.
pub fn fall(velocity_y: f32, acceleration: f32, terminal_velocity: f32) -> f32 {
    (velocity_y + acceleration).min(terminal_velocity)
}

/// Pushes `body` out of every overlapping solid along X.
///
/// `direction_x` decides which edge snaps; zero leaves overlaps unresolved.
pub fn snap_horizontal<T: Collidable>(body: &mut Body, direction_x: f32, solids: &[T]) {
    for solid in solids {
        let bounds = solid.get_bounds();
        if !aabb_intersect(&bounds, &body.rect()) {
            continue;
        }

        if direction_x < 0.0 {
            body.set_left(bounds.right());
        } else if direction_x > 0.0 {
            body.set_right(bounds.left());
        }
    }
}

/// Pushes `body` out of every overlapping solid along Y.
///
/// A snap zeroes `velocity_y`, so later overlaps in the same call are left
/// alone. Returns the last contact made, if any.
pub fn snap_vertical<T: Collidable>(
    body: &mut Body,
    velocity_y: &mut f32,
    solids: &[T],
) -> Option<Contact> {
    let mut contact = None;

    for solid in solids {
        let bounds = solid.get_bounds();
        if !aabb_intersect(&bounds, &body.rect()) {
            continue;
        }

        if *velocity_y > 0.0 {
            body.set_bottom(bounds.top());
            *velocity_y = 0.0;
            contact = Some(Contact::Landed);
        } else if *velocity_y < 0.0 {
            body.set_top(bounds.bottom());
            *velocity_y = 0.0;
            contact = Some(Contact::HeadBump);
        }
    }

    contact
}

/// Moves the player horizontally and resolves against tiles, then obstacles.
pub fn horizontal_movement_collision<T: Collidable, O: Collidable>(
    player: &mut Player,
    tiles: &[T],
    obstacles: &[O],
) {
    player.body.position.x += player.direction.x * player.speed;

    let direction_x = player.direction.x;
    snap_horizontal(&mut player.body, direction_x, tiles);
    snap_horizontal(&mut player.body, direction_x, obstacles);
}

/// Applies gravity to the player and every item, then resolves vertically.
///
/// The player resolves against tiles then obstacles; items against tiles
/// only. The player's grounded flag reflects whether it landed this pass.
pub fn vertical_movement_collision<T: Collidable, O: Collidable>(
    player: &mut Player,
    items: &mut [Item],
    tiles: &[T],
    obstacles: &[O],
    gravity: Gravity,
) {
    player.apply_gravity(gravity);
    for item in items.iter_mut() {
        item.apply_gravity(gravity.acceleration, gravity.terminal_velocity);
    }

    let from_tiles = snap_vertical(&mut player.body, &mut player.direction.y, tiles);
    for item in items.iter_mut() {
        snap_vertical(&mut item.body, &mut item.direction.y, tiles);
    }
    let from_obstacles = snap_vertical(&mut player.body, &mut player.direction.y, obstacles);

    player.on_ground = from_tiles == Some(Contact::Landed) || from_obstacles == Some(Contact::Landed);
}
