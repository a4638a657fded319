// Level module - the engine that runs one stage
//
// This module contains:
// - types.rs: markers, frame events
// - loader.rs: layout rows and parameters into entity collections
// - interaction.rs: point collection and obstacle clearing
// - world.rs: the Level struct and its per-frame orchestration

pub mod interaction;
pub mod loader;
pub mod types;
pub mod world;

pub use types::{FrameEvents, LevelEvent, Marker, MarkerKind};
pub use world::Level;
