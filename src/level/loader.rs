//! Layout parsing
//!
//! Turns the text rows of a `LevelDefinition` into typed entity collections.
//! Every cell character binds to at most one entity, placed at
//! `(col * cell_size, row * cell_size)`. `E`, `O` and `L` cells take their
//! extra values from the definition's parameter list, one entry each, in
//! reading order.

use super::types::{Marker, MarkerKind};
use crate::config::{LevelDefinition, Tuning};
use crate::enemy::{Enemy, Patrol};
use crate::error::LevelError;
use crate::item::{Item, ItemKind};
use crate::obstacle::{InteractObstacle, PointObstacle};
use crate::player::{Player, PlayerSettings};
use crate::tile::{Tile, Water, WaterTile};

/// Every character that places something
const LEGEND: &str = "XPEJBCOWNMLZ";

/// Everything a layout places, grouped by role.
#[derive(Debug, Clone)]
pub struct LevelContents {
    pub tiles: Vec<Tile>,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub points: Vec<PointObstacle>,
    pub obstacles: Vec<InteractObstacle>,
    pub water: Water,
    pub markers: Vec<Marker>,
}

/// Hands out parameter entries in reading order.
struct ParamCursor<'a> {
    params: &'a [Vec<i32>],
    next: usize,
}

impl<'a> ParamCursor<'a> {
    fn new(params: &'a [Vec<i32>]) -> Self {
        ParamCursor { params, next: 0 }
    }

    fn take(&mut self, symbol: char, row: usize, col: usize) -> Result<&'a [i32], LevelError> {
        let entry = self.params.get(self.next).ok_or(LevelError::MissingParameters {
            symbol,
            row,
            col,
            index: self.next,
        })?;
        self.next += 1;
        Ok(entry)
    }

    fn finish(self) -> Result<(), LevelError> {
        if self.next < self.params.len() {
            return Err(LevelError::UnusedParameters {
                used: self.next,
                supplied: self.params.len(),
            });
        }
        Ok(())
    }
}

fn patrol_from(entry: &[i32], row: usize, col: usize) -> Result<Patrol, LevelError> {
    match entry {
        [distance, speed] if *distance >= 0 && *speed >= 0 => Ok(Patrol {
            distance: *distance as f32,
            speed: *speed as f32,
        }),
        _ => Err(LevelError::MalformedParameters {
            symbol: 'E',
            row,
            col,
            expected: "[distance, speed], both non-negative",
            found: entry.to_vec(),
        }),
    }
}

/// Pixel origin of the cell at (row, col), for an entity of the given size.
///
/// Fails when the entity's far edge would not fit in `i32` pixel space.
fn place(row: usize, col: usize, size: u32, width: u32, height: u32) -> Result<(i32, i32), LevelError> {
    let origin = |index: usize, extent: u32| -> Option<i32> {
        let start = u64::try_from(index).ok()?.checked_mul(u64::from(size))?;
        let start = i32::try_from(start).ok()?;
        start.checked_add_unsigned(extent)?;
        Some(start)
    };

    match (origin(col, width), origin(row, height)) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(LevelError::LevelTooLarge { row, col }),
    }
}

fn id_from(symbol: char, entry: &[i32], row: usize, col: usize) -> Result<i32, LevelError> {
    match entry {
        [id] => Ok(*id),
        _ => Err(LevelError::MalformedParameters {
            symbol,
            row,
            col,
            expected: "[id]",
            found: entry.to_vec(),
        }),
    }
}

/// Parses a layout into its entity collections.
///
/// Fails on a zero cell size, on a cell whose pixel position does not fit in
/// `i32`, on zero or several `P` cells, and on any mismatch between
/// parameter-consuming cells and the parameter list.
pub fn parse(definition: &LevelDefinition, tuning: &Tuning) -> Result<LevelContents, LevelError> {
    if tuning.cell_size == 0 {
        return Err(LevelError::InvalidCellSize);
    }

    let size = tuning.cell_size;
    let mut params = ParamCursor::new(&definition.params);

    let mut tiles = Vec::new();
    let mut player_cell: Option<(usize, usize)> = None;
    let mut enemies = Vec::new();
    let mut items = Vec::new();
    let mut points = Vec::new();
    let mut obstacles = Vec::new();
    let mut water = Vec::new();
    let mut markers = Vec::new();

    for (row, line) in definition.rows.iter().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            if !LEGEND.contains(symbol) {
                continue;
            }
            let (x, y) = place(row, col, size, size, size)?;

            match symbol {
                'X' => tiles.push(Tile::new(x, y, size)),
                'P' => {
                    if let Some(first) = player_cell {
                        return Err(LevelError::MultiplePlayers {
                            first,
                            second: (row, col),
                        });
                    }
                    player_cell = Some((row, col));
                }
                'E' => {
                    let patrol = patrol_from(params.take(symbol, row, col)?, row, col)?;
                    enemies.push(Enemy::new(x, y, size, patrol, tuning.enemy_sight_range));
                }
                'J' | 'B' => {
                    let kind = if symbol == 'J' { ItemKind::Janitor } else { ItemKind::Banker };
                    let (x, y) = place(row, col, size, tuning.item_width, tuning.item_height)?;
                    items.push(Item::new(kind, x, y, tuning.item_width, tuning.item_height));
                }
                'C' => points.push(PointObstacle::new(x, y, size)),
                'O' => {
                    let id = id_from(symbol, params.take(symbol, row, col)?, row, col)?;
                    obstacles.push(InteractObstacle::new(id, x, y, size));
                }
                'W' => water.push(WaterTile::new(x, y, size)),
                'N' => markers.push(Marker::new(MarkerKind::JanitorExit, x, y, size)),
                'M' => markers.push(Marker::new(MarkerKind::BankerExit, x, y, size)),
                'L' => {
                    let id = id_from(symbol, params.take(symbol, row, col)?, row, col)?;
                    markers.push(Marker::new(MarkerKind::Lever { id }, x, y, size));
                }
                'Z' => markers.push(Marker::new(MarkerKind::Reserved, x, y, size)),
                _ => {}
            }
        }
    }

    params.finish()?;

    let (row, col) = player_cell.ok_or(LevelError::NoPlayer)?;
    let settings = PlayerSettings::from(tuning);
    let (x, y) = place(row, col, size, settings.width, settings.height)?;
    let player = Player::new(x, y, settings);

    Ok(LevelContents {
        tiles,
        player,
        enemies,
        items,
        points,
        obstacles,
        water: Water::new(water),
        markers,
    })
}
