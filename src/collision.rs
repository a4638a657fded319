/// Collision primitives for the level engine
///
/// Every entity in a level is reduced to an axis-aligned bounding box (AABB)
/// for collision purposes. This module owns that shape and the pure functions
/// that compare two of them.
///
/// # Architecture
///
/// - `Rect`: integer AABB (top-left corner plus size), exclusive right/bottom edges
/// - `Body`: a moving AABB whose rectangle is always derived from its position
/// - `Collidable` trait: anything that can report its current bounds
/// - Pure functions: `aabb_intersect`, `edge_adjacent`, collection queries
use glam::Vec2;

/// An axis-aligned rectangle in pixel space.
///
/// The right and bottom edges are exclusive, so two rectangles that share an
/// edge touch but do not intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    /// Saturates at `i32::MAX`
    pub fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Saturates at `i32::MAX`
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    pub fn top_left(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// True if the vertical spans of the two rectangles overlap (exclusive edges).
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top() < other.bottom() && self.bottom() > other.top()
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Touching edges do not count as an intersection.
///
/// # Example
///
/// ```rust
/// use break_the_bank::collision::{aabb_intersect, Rect};
///
/// let player_bounds = Rect::new(10, 10, 32, 32);
/// let tile_bounds = Rect::new(20, 20, 32, 32);
/// assert!(aabb_intersect(&player_bounds, &tile_bounds));
/// ```
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.left() < b.right() && a.right() > b.left();
    let y_overlap = a.top() < b.bottom() && a.bottom() > b.top();

    x_overlap && y_overlap
}

/// Checks if two rectangles sit side by side with exactly touching edges.
///
/// The left edge of one must equal the right edge of the other (in either
/// order). A gap of a single pixel, or any overlap, is not adjacency.
///
/// The vertical spans must also overlap. This is deliberately stricter than
/// comparing x edges alone: a rectangle on another row that happens to line
/// up with an edge does not count as touching.
pub fn edge_adjacent(a: &Rect, b: &Rect) -> bool {
    (a.left() == b.right() || a.right() == b.left()) && a.overlaps_vertically(b)
}

/// A moving axis-aligned box.
///
/// Position is kept in floating point so sub-pixel velocities (gravity)
/// accumulate; the collision rectangle is derived from it on every call and
/// is never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub width: u32,
    pub height: u32,
}

impl Body {
    pub fn new(x: f32, y: f32, width: u32, height: u32) -> Self {
        Body {
            position: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// Current bounding box, truncated to whole pixels.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x.floor() as i32,
            self.position.y.floor() as i32,
            self.width,
            self.height,
        )
    }

    pub fn set_left(&mut self, left: i32) {
        self.position.x = left as f32;
    }

    pub fn set_right(&mut self, right: i32) {
        self.position.x = right.saturating_sub_unsigned(self.width) as f32;
    }

    pub fn set_top(&mut self, top: i32) {
        self.position.y = top as f32;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.position.y = bottom.saturating_sub_unsigned(self.height) as f32;
    }
}

/// Trait for anything that takes part in collision checks.
///
/// Implementors return their bounds as they are *now*; callers must not hold
/// on to the result across a position change.
pub trait Collidable {
    fn get_bounds(&self) -> Rect;
}

impl Collidable for Rect {
    fn get_bounds(&self) -> Rect {
        *self
    }
}

/// Returns the indices of every entity in `entities` whose bounds intersect `bounds`.
///
/// Indices come back in collection order.
pub fn check_collisions_with_collection<T: Collidable>(bounds: &Rect, entities: &[T]) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(bounds, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_edge_adjacent_either_side() {
        let obstacle = Rect::new(64, 0, 64, 64);
        let from_left = Rect::new(32, 0, 32, 64);
        let from_right = Rect::new(128, 10, 32, 64);

        assert!(edge_adjacent(&obstacle, &from_left));
        assert!(edge_adjacent(&obstacle, &from_right));
    }

    #[test]
    fn test_edge_adjacent_requires_exact_edge() {
        let obstacle = Rect::new(64, 0, 64, 64);
        let one_pixel_gap = Rect::new(31, 0, 32, 64);
        let overlapping = Rect::new(33, 0, 32, 64);

        assert!(!edge_adjacent(&obstacle, &one_pixel_gap));
        assert!(!edge_adjacent(&obstacle, &overlapping));
    }

    #[test]
    fn test_edge_adjacent_requires_vertical_overlap() {
        let obstacle = Rect::new(64, 0, 64, 64);
        let below = Rect::new(32, 64, 32, 64);

        assert!(!edge_adjacent(&obstacle, &below));
    }

    #[test]
    fn test_far_edges_saturate() {
        let rect = Rect::new(i32::MAX - 10, i32::MAX - 10, 64, 64);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);
    }

    #[test]
    fn test_body_rect_follows_position() {
        let mut body = Body::new(10.0, 20.0, 32, 64);
        assert_eq!(body.rect(), Rect::new(10, 20, 32, 64));

        body.position.y += 0.8;
        assert_eq!(body.rect().y(), 20);

        body.set_bottom(128);
        assert_eq!(body.rect().bottom(), 128);
        body.set_right(96);
        assert_eq!(body.rect().right(), 96);
    }

    #[test]
    fn test_check_collisions_with_collection_keeps_order() {
        let walls = vec![
            Rect::new(100, 0, 10, 10),
            Rect::new(0, 0, 10, 10),
            Rect::new(5, 5, 10, 10),
        ];

        let hits = check_collisions_with_collection(&Rect::new(0, 0, 8, 8), &walls);
        assert_eq!(hits, vec![1, 2]);
    }
}
