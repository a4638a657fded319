use std::collections::HashSet;

/// Keys the game reacts to, independent of the windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    K,
    Space,
    Return,
    Escape,
}

/// Discrete actions produced by key presses
///
/// Movement and interaction are not actions: they reach the level through
/// `InputSnapshot`, captured once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // === In game ===
    Pause,
    ReturnToMenu,

    // === Menus ===
    MenuUp,
    MenuDown,
    MenuConfirm,
    MenuBack,
    Resume,

    // === System ===
    Quit,
}

/// Input context determines which actions a key produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// A level is running
    Playing,
    /// Main menu or stage selection
    Menu,
    /// Pause overlay on top of a level
    Paused,
}

/// Read-only view of the input for one frame.
///
/// Captured once per frame and handed to the level, so gameplay never
/// drains an event queue itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Interact was pressed during this frame
    pub interact: bool,
}

/// Tracks held keys and turns presses into `GameAction`s.
///
/// # Frame protocol
///
/// 1. `begin_frame()` clears the one-frame flags
/// 2. `key_down` / `key_up` for every event of the frame
/// 3. `snapshot()` for the level update
pub struct InputSystem {
    pub context: InputContext,
    held: HashSet<Key>,
    interact_pressed: bool,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Menu context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
            held: HashSet::new(),
            interact_pressed: false,
        }
    }

    pub fn begin_frame(&mut self) {
        self.interact_pressed = false;
    }

    /// Records a key press and returns the action it maps to, if any.
    pub fn key_down(&mut self, key: Key) -> Option<GameAction> {
        self.held.insert(key);

        match self.context {
            InputContext::Playing => self.handle_playing_key(key),
            InputContext::Menu => Self::handle_menu_key(key),
            InputContext::Paused => Self::handle_paused_key(key),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.is_held(Key::Left) || self.is_held(Key::A),
            right: self.is_held(Key::Right) || self.is_held(Key::D),
            jump: self.is_held(Key::Space) || self.is_held(Key::Up) || self.is_held(Key::W),
            interact: self.interact_pressed,
        }
    }

    fn handle_playing_key(&mut self, key: Key) -> Option<GameAction> {
        match key {
            Key::Escape => Some(GameAction::Pause),
            Key::Return => Some(GameAction::ReturnToMenu),
            Key::K => {
                self.interact_pressed = true;
                None
            }
            _ => None,
        }
    }

    fn handle_menu_key(key: Key) -> Option<GameAction> {
        match key {
            Key::Up | Key::W => Some(GameAction::MenuUp),
            Key::Down | Key::S => Some(GameAction::MenuDown),
            Key::Return | Key::Space => Some(GameAction::MenuConfirm),
            Key::Escape => Some(GameAction::MenuBack),
            _ => None,
        }
    }

    fn handle_paused_key(key: Key) -> Option<GameAction> {
        match key {
            Key::Escape => Some(GameAction::Resume),
            other => Self::handle_menu_key(other),
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "render")]
mod sdl {
    use super::{GameAction, InputSystem, Key};
    use sdl2::EventPump;
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;

    fn key_from_keycode(keycode: Keycode) -> Option<Key> {
        match keycode {
            Keycode::Left => Some(Key::Left),
            Keycode::Right => Some(Key::Right),
            Keycode::Up => Some(Key::Up),
            Keycode::Down => Some(Key::Down),
            Keycode::A => Some(Key::A),
            Keycode::D => Some(Key::D),
            Keycode::W => Some(Key::W),
            Keycode::S => Some(Key::S),
            Keycode::K => Some(Key::K),
            Keycode::Space => Some(Key::Space),
            Keycode::Return => Some(Key::Return),
            Keycode::Escape => Some(Key::Escape),
            _ => None,
        }
    }

    impl InputSystem {
        /// Starts a new frame and drains every pending SDL2 event.
        pub fn poll_events(&mut self, event_pump: &mut EventPump) -> Vec<GameAction> {
            self.begin_frame();
            let mut actions = Vec::new();

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => actions.push(GameAction::Quit),
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        if let Some(action) = key_from_keycode(keycode).and_then(|key| self.key_down(key)) {
                            actions.push(action);
                        }
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        if let Some(key) = key_from_keycode(keycode) {
                            self.key_up(key);
                        }
                    }
                    _ => {}
                }
            }

            actions
        }
    }
}
