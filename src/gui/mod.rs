//! Screen-Space GUI System
//!
//! Menus and the screen states they drive. Everything here is plain state
//! so the screen flow can be tested without a window; SDL2 drawing of menus
//! sits behind the `render` feature.
//!
//! # Available Components
//!
//! - [`Menu`] - titled list with wrapping selection
//! - [`Screen`] - main menu, stage selection, in game, paused, exited

pub mod menu;
pub mod screen;

pub use menu::{Menu, MenuItem};
#[cfg(feature = "render")]
pub use menu::MenuStyle;
pub use screen::{MainMenuOption, PauseOption, Screen, StageChoice};
