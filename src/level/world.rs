// Level struct and the per-frame orchestration
//
// The Level owns every entity collection of one stage and runs a frame in a
// fixed order: draw static geometry, update enemies, update the player,
// resolve horizontally, resolve vertically, collect points, clear
// obstacles, draw items.

use super::interaction;
use super::loader::{self, LevelContents};
use super::types::{FrameEvents, LevelEvent, Marker};
use crate::config::{LevelDefinition, Tuning};
use crate::enemy::Enemy;
use crate::error::LevelError;
use crate::input_system::InputSnapshot;
use crate::item::Item;
use crate::obstacle::{InteractObstacle, PointObstacle};
use crate::physics::{self, Gravity};
use crate::player::Player;
use crate::render::{Drawable, Surface, draw_all};
use crate::tile::{Tile, Water};
use log::{debug, info, warn};

/// One playable stage and everything in it.
///
/// Built from a `LevelDefinition`; the definition is kept so the level can
/// be restarted from scratch.
#[derive(Debug, Clone)]
pub struct Level {
    definition: LevelDefinition,
    tuning: Tuning,
    tiles: Vec<Tile>,
    player: Player,
    enemies: Vec<Enemy>,
    items: Vec<Item>,
    points: Vec<PointObstacle>,
    obstacles: Vec<InteractObstacle>,
    water: Water,
    markers: Vec<Marker>,
    points_collected: u32,
}

fn log_draw_failure(what: &str, result: Result<(), String>) {
    if let Err(e) = result {
        warn!("Failed to draw {}: {}", what, e);
    }
}

impl Level {
    /// Parses the definition and places every entity.
    ///
    /// All layout and parameter defects are reported here; once a level
    /// exists, running it cannot fail.
    pub fn new(definition: &LevelDefinition, tuning: &Tuning) -> Result<Self, LevelError> {
        let contents = loader::parse(definition, tuning)?;

        info!(
            "Built level '{}': {} tiles, {} enemies, {} items, {} points, {} obstacles, {} water, {} markers",
            definition.name,
            contents.tiles.len(),
            contents.enemies.len(),
            contents.items.len(),
            contents.points.len(),
            contents.obstacles.len(),
            contents.water.len(),
            contents.markers.len(),
        );

        let LevelContents {
            tiles,
            player,
            enemies,
            items,
            points,
            obstacles,
            water,
            markers,
        } = contents;

        Ok(Level {
            definition: definition.clone(),
            tuning: tuning.clone(),
            tiles,
            player,
            enemies,
            items,
            points,
            obstacles,
            water,
            markers,
            points_collected: 0,
        })
    }

    /// Rebuilds every collection from the stored definition.
    pub fn restart(&mut self) -> Result<(), LevelError> {
        *self = Level::new(&self.definition, &self.tuning)?;
        info!("Restarted level '{}'", self.definition.name);
        Ok(())
    }

    /// Turns all remaining water into floor tiles.
    ///
    /// Returns how many tiles were added; zero once the water is gone.
    pub fn clean_water(&mut self) -> usize {
        let cleaned = self.water.clean(&mut self.tiles);
        if cleaned > 0 {
            info!("Cleaned {} water tiles", cleaned);
        }
        cleaned
    }

    fn gravity(&self) -> Gravity {
        Gravity {
            acceleration: self.tuning.gravity,
            terminal_velocity: self.tuning.terminal_velocity,
        }
    }

    /// Advances the level by one frame and draws it onto `surface`.
    ///
    /// The caller clears and presents the surface.
    pub fn run(&mut self, input: &InputSnapshot, surface: &mut dyn Surface) -> FrameEvents {
        let mut events = FrameEvents::new();

        // Static geometry, at positions from the end of last frame
        log_draw_failure("tiles", draw_all(&self.tiles, surface));
        log_draw_failure("water", self.water.draw(surface));
        log_draw_failure("obstacles", draw_all(&self.obstacles, surface));
        log_draw_failure("points", draw_all(&self.points, surface));
        log_draw_failure("markers", draw_all(&self.markers, surface));

        let player_bounds = self.player.rect();
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            enemy.update();
            if enemy.detect_player(&player_bounds, &self.tiles) {
                debug!("Enemy {} sees the player at {:?}", index, player_bounds.top_left());
                events.push(LevelEvent::PlayerDetected { enemy: index });
            }
            log_draw_failure("enemy", enemy.draw(surface));
        }

        for kind in self.player.update(input, &mut self.items) {
            info!("Picked up {}", kind.name());
            events.push(LevelEvent::ItemPicked { kind });
        }
        log_draw_failure("player", self.player.draw(surface));

        physics::horizontal_movement_collision(&mut self.player, &self.tiles, &self.obstacles);
        let gravity = self.gravity();
        physics::vertical_movement_collision(
            &mut self.player,
            &mut self.items,
            &self.tiles,
            &self.obstacles,
            gravity,
        );

        for at in interaction::collect_points(&self.player.rect(), &mut self.points) {
            self.points_collected += 1;
            info!("Collected point at {:?} ({} total)", at, self.points_collected);
            events.push(LevelEvent::PointCollected { at });
        }

        let cleared = interaction::clear_obstacles(
            &self.player.rect(),
            &self.player.inventory,
            input.interact,
            &mut self.obstacles,
        );
        for (id, at) in cleared {
            info!("Cleared obstacle {} at {:?}", id, at);
            events.push(LevelEvent::ObstacleCleared { id, at });
        }

        log_draw_failure("items", draw_all(&self.items, surface));

        events
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &LevelDefinition {
        &self.definition
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn points(&self) -> &[PointObstacle] {
        &self.points
    }

    pub fn obstacles(&self) -> &[InteractObstacle] {
        &self.obstacles
    }

    pub fn water(&self) -> &Water {
        &self.water
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Points collected since the level was built or restarted
    pub fn points_collected(&self) -> u32 {
        self.points_collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::aabb_intersect;
    use crate::item::ItemKind;
    use crate::level::MarkerKind;
    use crate::render::{NullSurface, RecordingSurface, SpriteKind};
    use crate::tile::TileKind;

    fn build(rows: &[&str], params: &[&[i32]]) -> Level {
        Level::new(&LevelDefinition::new("test", rows, params), &Tuning::default()).unwrap()
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    fn walk_right() -> InputSnapshot {
        InputSnapshot {
            right: true,
            ..InputSnapshot::default()
        }
    }

    fn interact() -> InputSnapshot {
        InputSnapshot {
            interact: true,
            ..InputSnapshot::default()
        }
    }

    fn run_frames(level: &mut Level, input: InputSnapshot, frames: usize) -> Vec<LevelEvent> {
        let mut events = Vec::new();
        for _ in 0..frames {
            events.extend(level.run(&input, &mut NullSurface));
        }
        events
    }

    #[test]
    fn test_walking_into_point_collects_it_once() {
        let mut level = build(&["XP C X", "XXXXXX"], &[]);

        let events = run_frames(&mut level, walk_right(), 30);

        let collected: Vec<_> = events
            .iter()
            .filter(|event| matches!(event, LevelEvent::PointCollected { .. }))
            .collect();
        assert_eq!(collected, vec![&LevelEvent::PointCollected { at: (192, 0) }]);
        assert!(level.points().is_empty());
        assert_eq!(level.points_collected(), 1);
    }

    #[test]
    fn test_player_never_overlaps_tiles_after_walking() {
        let mut level = build(&["XP   X", "XXXXXX"], &[]);

        for _ in 0..60 {
            level.run(&walk_right(), &mut NullSurface);
            let bounds = level.player().rect();
            assert!(level.tiles().iter().all(|tile| !aabb_intersect(&bounds, &tile.rect())));
        }

        assert_eq!(level.player().rect().right(), 320);
    }

    #[test]
    fn test_player_falls_and_lands_on_floor() {
        let mut level = build(&[" P ", "   ", "XXX"], &[]);

        run_frames(&mut level, idle(), 40);

        assert_eq!(level.player().rect().bottom(), 128);
    }

    #[test]
    fn test_interact_with_empty_inventory_keeps_obstacle() {
        let mut level = build(&["XP OX", "XXXXX"], &[&[7]]);

        run_frames(&mut level, walk_right(), 20);
        assert_eq!(level.player().rect().right(), 192);

        let events = run_frames(&mut level, interact(), 1);

        assert!(events.is_empty());
        assert_eq!(level.obstacles().len(), 1);
    }

    #[test]
    fn test_interact_with_item_clears_adjacent_obstacle() {
        let mut level = build(&["XPJOX", "XXXXX"], &[&[7]]);

        let walked = run_frames(&mut level, walk_right(), 20);
        assert!(walked.contains(&LevelEvent::ItemPicked { kind: ItemKind::Janitor }));
        assert!(level.items().is_empty());
        assert_eq!(level.player().rect().right(), 192);

        let events = run_frames(&mut level, interact(), 1);

        assert_eq!(events, vec![LevelEvent::ObstacleCleared { id: 7, at: (192, 0) }]);
        assert!(level.obstacles().is_empty());
        assert_eq!(level.player().inventory.count(ItemKind::Janitor), 1);
    }

    #[test]
    fn test_enemy_detection_is_reported() {
        let mut level = build(&["XE  P X", "XXXXXXX"], &[&[64, 1]]);

        let events = run_frames(&mut level, idle(), 1);

        assert!(events.contains(&LevelEvent::PlayerDetected { enemy: 0 }));
    }

    #[test]
    fn test_wall_hides_player_from_enemy() {
        let mut level = build(&["XE X P X", "XXXXXXXX"], &[&[64, 1]]);

        let events = run_frames(&mut level, idle(), 3);

        assert!(!events.iter().any(|event| matches!(event, LevelEvent::PlayerDetected { .. })));
    }

    #[test]
    fn test_items_fall_onto_floor() {
        let mut level = build(&["P  J", "    ", "XXXX"], &[]);

        run_frames(&mut level, idle(), 40);

        assert_eq!(level.items()[0].rect().bottom(), 128);
    }

    #[test]
    fn test_draw_order_within_a_frame() {
        let mut level = build(&["XP  E  J  C  O  W  N  X"], &[&[0, 0], &[3]]);
        let mut surface = RecordingSurface::new();

        level.run(&idle(), &mut surface);

        let order = [
            SpriteKind::Tile(TileKind::Solid),
            SpriteKind::Water,
            SpriteKind::Obstacle,
            SpriteKind::Point,
            SpriteKind::Marker(MarkerKind::JanitorExit),
            SpriteKind::Enemy,
            SpriteKind::Player,
            SpriteKind::Item(ItemKind::Janitor),
        ];
        let indices: Vec<usize> = order
            .iter()
            .map(|sprite| surface.first_index_of(*sprite).unwrap())
            .collect();
        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", indices);
        assert_eq!(surface.calls.len(), 9);
    }

    #[test]
    fn test_clean_water_adds_floor_tiles() {
        let mut level = build(&["P   ", "XWWX"], &[]);
        assert_eq!(level.tiles().len(), 2);

        assert_eq!(level.clean_water(), 2);
        assert!(level.water().is_empty());
        assert_eq!(level.tiles().len(), 4);
        assert_eq!(level.tiles()[2].kind, TileKind::Floor);
        assert_eq!(level.tiles()[2].rect().top_left(), (64, 64));

        assert_eq!(level.clean_water(), 0);
    }

    #[test]
    fn test_water_is_not_solid_until_cleaned() {
        let mut level = build(&["P", "W", " ", "X"], &[]);

        run_frames(&mut level, idle(), 40);

        assert_eq!(level.player().rect().bottom(), 192);
    }

    #[test]
    fn test_restart_restores_layout() {
        let mut level = build(&["XP C X", "XXXXXX"], &[]);
        run_frames(&mut level, walk_right(), 30);
        assert!(level.points().is_empty());

        level.restart().unwrap();

        assert_eq!(level.points().len(), 1);
        assert_eq!(level.points_collected(), 0);
        assert_eq!(level.player().rect().top_left(), (64, 0));
    }
}
