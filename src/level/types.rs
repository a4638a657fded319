// Shared enums and helper structs used by the level engine

use crate::collision::Rect;
use crate::item::ItemKind;
use crate::render::{Drawable, SpriteKind};

/// Layout cells the engine places but does not act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    JanitorExit,
    BankerExit,
    Lever { id: i32 },
    Reserved,
}

/// An inert marker: drawn every frame, otherwise untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    rect: Rect,
}

impl Marker {
    pub fn new(kind: MarkerKind, x: i32, y: i32, size: u32) -> Self {
        Marker {
            kind,
            rect: Rect::new(x, y, size, size),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Drawable for Marker {
    fn sprite(&self) -> SpriteKind {
        SpriteKind::Marker(self.kind)
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Something noteworthy that happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEvent {
    /// Enemy at this index in `Level::enemies()` sees the player
    PlayerDetected { enemy: usize },
    ItemPicked { kind: ItemKind },
    /// Top-left corner of the collected point
    PointCollected { at: (i32, i32) },
    ObstacleCleared { id: i32, at: (i32, i32) },
}

/// Events of one frame, in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameEvents {
    events: Vec<LevelEvent>,
}

impl FrameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: LevelEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn points_collected(&self) -> usize {
        self.iter()
            .filter(|event| matches!(event, LevelEvent::PointCollected { .. }))
            .count()
    }

    pub fn obstacles_cleared(&self) -> usize {
        self.iter()
            .filter(|event| matches!(event, LevelEvent::ObstacleCleared { .. }))
            .count()
    }

    pub fn player_detected(&self) -> bool {
        self.iter()
            .any(|event| matches!(event, LevelEvent::PlayerDetected { .. }))
    }
}

impl IntoIterator for FrameEvents {
    type Item = LevelEvent;
    type IntoIter = std::vec::IntoIter<LevelEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_events_counts() {
        let mut events = FrameEvents::new();
        assert!(events.is_empty());

        events.push(LevelEvent::PlayerDetected { enemy: 0 });
        events.push(LevelEvent::PointCollected { at: (64, 0) });
        events.push(LevelEvent::PointCollected { at: (128, 0) });

        assert_eq!(events.len(), 3);
        assert_eq!(events.points_collected(), 2);
        assert_eq!(events.obstacles_cleared(), 0);
        assert!(events.player_detected());
    }

    #[test]
    fn test_lever_marker_keeps_id() {
        let lever = Marker::new(MarkerKind::Lever { id: 4 }, 64, 128, 64);
        assert_eq!(lever.sprite(), SpriteKind::Marker(MarkerKind::Lever { id: 4 }));
        assert_eq!(lever.rect().top_left(), (64, 128));
    }
}
