//! Break the Bank: a tile platformer level engine
//!
//! A stage is a grid of characters. [`level::Level`] turns it into tiles,
//! a player, patrolling enemies, items, points and obstacles, then advances
//! them one frame at a time with axis-separated collision. Everything draws
//! through the [`render::Surface`] trait, so the engine runs headless; the
//! SDL2 front end lives behind the `render` feature.

pub mod app;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod error;
pub mod gui;
pub mod input_system;
pub mod inventory;
pub mod item;
pub mod level;
pub mod levels;
pub mod logging;
pub mod obstacle;
pub mod physics;
pub mod player;
pub mod render;
pub mod tile;
