use crate::collision::{Collidable, Rect};
use crate::render::{Drawable, SpriteKind, Surface, draw_all};

/// Kind of solid tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Wall/floor block placed directly by the layout
    Solid,
    /// Floor laid down where water used to be
    Floor,
}

/// A static, solid square of level geometry.
///
/// Tiles never move; their bounds are fixed at placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    rect: Rect,
}

impl Tile {
    pub fn new(x: i32, y: i32, size: u32) -> Self {
        Self::with_kind(TileKind::Solid, x, y, size)
    }

    pub fn with_kind(kind: TileKind, x: i32, y: i32, size: u32) -> Self {
        Tile {
            kind,
            rect: Rect::new(x, y, size, size),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Collidable for Tile {
    fn get_bounds(&self) -> Rect {
        self.rect
    }
}

impl Drawable for Tile {
    fn sprite(&self) -> SpriteKind {
        SpriteKind::Tile(self.kind)
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A single water cell. Not solid.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterTile {
    rect: Rect,
}

impl WaterTile {
    pub fn new(x: i32, y: i32, size: u32) -> Self {
        WaterTile {
            rect: Rect::new(x, y, size, size),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Drawable for WaterTile {
    fn sprite(&self) -> SpriteKind {
        SpriteKind::Water
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Every water cell of a level, handled as one unit.
///
/// Water can be cleaned exactly once per cell: cleaning converts every
/// remaining water cell into a floor tile and empties this collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Water {
    tiles: Vec<WaterTile>,
}

impl Water {
    pub fn new(tiles: Vec<WaterTile>) -> Self {
        Water { tiles }
    }

    pub fn tiles(&self) -> &[WaterTile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        draw_all(&self.tiles, surface)
    }

    /// Converts all water into floor tiles appended to `tiles`.
    ///
    /// Returns the number of tiles added. A second call adds nothing.
    pub fn clean(&mut self, tiles: &mut Vec<Tile>) -> usize {
        let cleaned = self.tiles.len();
        tiles.extend(self.tiles.drain(..).map(|water| {
            let rect = water.rect();
            Tile::with_kind(TileKind::Floor, rect.x(), rect.y(), rect.width())
        }));
        cleaned
    }
}
