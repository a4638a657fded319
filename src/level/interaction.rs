//! Point collection and obstacle clearing
//!
//! Both rules remove the entity from its collection as soon as it triggers,
//! so neither can fire twice for the same entity.

use crate::collision::{Rect, aabb_intersect, edge_adjacent};
use crate::inventory::Inventory;
use crate::obstacle::{InteractObstacle, PointObstacle};

/// Removes every point the player overlaps.
///
/// Returns the top-left corner of each collected point.
pub fn collect_points(player: &Rect, points: &mut Vec<PointObstacle>) -> Vec<(i32, i32)> {
    let mut collected = Vec::new();

    points.retain(|point| {
        if aabb_intersect(player, &point.rect()) {
            collected.push(point.rect().top_left());
            false
        } else {
            true
        }
    });

    collected
}

/// Removes every obstacle edge-adjacent to the player, if the player
/// interacted this frame while holding at least one item.
///
/// The inventory is only checked, never consumed. Returns the id and
/// top-left corner of each cleared obstacle.
pub fn clear_obstacles(
    player: &Rect,
    inventory: &Inventory,
    interact: bool,
    obstacles: &mut Vec<InteractObstacle>,
) -> Vec<(i32, (i32, i32))> {
    let mut cleared = Vec::new();
    if !interact || inventory.is_empty() {
        return cleared;
    }

    obstacles.retain(|obstacle| {
        if edge_adjacent(player, &obstacle.rect()) {
            cleared.push((obstacle.id, obstacle.rect().top_left()));
            false
        } else {
            true
        }
    });

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add(ItemKind::Janitor);
        inventory
    }

    #[test]
    fn test_collect_points_is_idempotent() {
        let player = Rect::new(100, 0, 32, 64);
        let mut points = vec![PointObstacle::new(64, 0, 64), PointObstacle::new(256, 0, 64)];

        let first = collect_points(&player, &mut points);
        let second = collect_points(&player, &mut points);

        assert_eq!(first, vec![(64, 0)]);
        assert!(second.is_empty());
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_touching_point_is_not_collected() {
        let player = Rect::new(32, 0, 32, 64);
        let mut points = vec![PointObstacle::new(64, 0, 64)];

        assert!(collect_points(&player, &mut points).is_empty());
    }

    #[test]
    fn test_obstacle_needs_items() {
        let player = Rect::new(96, 0, 32, 64);
        let mut obstacles = vec![InteractObstacle::new(1, 128, 0, 64)];

        let cleared = clear_obstacles(&player, &Inventory::new(), true, &mut obstacles);

        assert!(cleared.is_empty());
        assert_eq!(obstacles.len(), 1);
    }

    #[test]
    fn test_obstacle_needs_interact() {
        let player = Rect::new(96, 0, 32, 64);
        let mut obstacles = vec![InteractObstacle::new(1, 128, 0, 64)];

        assert!(clear_obstacles(&player, &stocked(), false, &mut obstacles).is_empty());
        assert_eq!(obstacles.len(), 1);
    }

    #[test]
    fn test_adjacent_obstacles_clear_from_either_side() {
        let player = Rect::new(96, 0, 32, 64);
        let mut obstacles = vec![
            InteractObstacle::new(1, 128, 0, 64),
            InteractObstacle::new(2, 32, 0, 64),
            InteractObstacle::new(3, 129, 64, 64),
        ];
        let inventory = stocked();

        let cleared = clear_obstacles(&player, &inventory, true, &mut obstacles);

        assert_eq!(cleared, vec![(1, (128, 0)), (2, (32, 0))]);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(inventory.total(), 1);
    }

    #[test]
    fn test_one_pixel_gap_is_not_adjacent() {
        let player = Rect::new(95, 0, 32, 64);
        let mut obstacles = vec![InteractObstacle::new(1, 128, 0, 64)];

        assert!(clear_obstacles(&player, &stocked(), true, &mut obstacles).is_empty());
    }
}
