/// Drawing seam between the level engine and whatever owns the window.
///
/// The engine never talks to a graphics API directly. Every entity describes
/// itself as a `SpriteKind` plus its current bounds, and a `Surface`
/// implementation decides what that looks like on screen.
///
/// # Architecture
///
/// - `Surface` trait: a draw target (SDL2 canvas, recorder, no-op)
/// - `Drawable` trait: implemented by entities; draws itself onto a surface
/// - `RecordingSurface`: keeps every draw call in order (headless runs, tests)
/// - `NullSurface`: discards everything
use crate::collision::Rect;
use crate::item::ItemKind;
use crate::level::MarkerKind;
use crate::tile::TileKind;

/// What is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Tile(TileKind),
    Water,
    Player,
    Enemy,
    Item(ItemKind),
    Point,
    Obstacle,
    Marker(MarkerKind),
}

/// A draw target.
pub trait Surface {
    fn draw(&mut self, sprite: SpriteKind, bounds: Rect) -> Result<(), String>;
}

/// Trait for entities that render themselves.
///
/// Entities only need to say what they are and where; the default `draw`
/// forwards both to the surface.
pub trait Drawable {
    fn sprite(&self) -> SpriteKind;

    fn bounds(&self) -> Rect;

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.draw(self.sprite(), self.bounds())
    }
}

/// Draws every entity in order, stopping at the first failure.
pub fn draw_all<T: Drawable>(entities: &[T], surface: &mut dyn Surface) -> Result<(), String> {
    for entity in entities {
        entity.draw(surface)?;
    }
    Ok(())
}

/// Surface that remembers every draw call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<(SpriteKind, Rect)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of recorded calls for one sprite kind.
    pub fn count(&self, sprite: SpriteKind) -> usize {
        self.calls.iter().filter(|(kind, _)| *kind == sprite).count()
    }

    /// Index of the first call drawing `sprite`, if any.
    pub fn first_index_of(&self, sprite: SpriteKind) -> Option<usize> {
        self.calls.iter().position(|(kind, _)| *kind == sprite)
    }
}

impl Surface for RecordingSurface {
    fn draw(&mut self, sprite: SpriteKind, bounds: Rect) -> Result<(), String> {
        self.calls.push((sprite, bounds));
        Ok(())
    }
}

/// Surface that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn draw(&mut self, _sprite: SpriteKind, _bounds: Rect) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(feature = "render")]
mod sdl {
    use super::{SpriteKind, Surface};
    use crate::collision::Rect;
    use crate::item::ItemKind;
    use crate::level::MarkerKind;
    use crate::tile::TileKind;
    use sdl2::pixels::Color;
    use sdl2::render::Canvas;
    use sdl2::video::Window;

    /// Flat colour per sprite kind; no textures are loaded.
    pub fn sprite_color(sprite: SpriteKind) -> Color {
        match sprite {
            SpriteKind::Tile(TileKind::Solid) => Color::RGB(90, 90, 110),
            SpriteKind::Tile(TileKind::Floor) => Color::RGB(150, 130, 100),
            SpriteKind::Water => Color::RGB(40, 90, 200),
            SpriteKind::Player => Color::RGB(255, 0, 0),
            SpriteKind::Enemy => Color::RGB(60, 200, 80),
            SpriteKind::Item(ItemKind::Janitor) => Color::RGB(255, 215, 0),
            SpriteKind::Item(ItemKind::Banker) => Color::RGB(230, 160, 40),
            SpriteKind::Point => Color::RGB(240, 240, 90),
            SpriteKind::Obstacle => Color::RGB(140, 60, 40),
            SpriteKind::Marker(MarkerKind::JanitorExit) => Color::RGB(120, 200, 240),
            SpriteKind::Marker(MarkerKind::BankerExit) => Color::RGB(200, 120, 240),
            SpriteKind::Marker(MarkerKind::Lever { .. }) => Color::RGB(200, 200, 200),
            SpriteKind::Marker(MarkerKind::Reserved) => Color::RGB(70, 70, 70),
        }
    }

    impl Surface for Canvas<Window> {
        fn draw(&mut self, sprite: SpriteKind, bounds: Rect) -> Result<(), String> {
            self.set_draw_color(sprite_color(sprite));
            self.fill_rect(sdl2::rect::Rect::new(
                bounds.x(),
                bounds.y(),
                bounds.width(),
                bounds.height(),
            ))
        }
    }
}

#[cfg(feature = "render")]
pub use sdl::sprite_color;
