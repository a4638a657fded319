//! Base Menu Component
//!
//! A titled list of items with a wrapping selection. Navigation is plain
//! state and works headless; drawing is only available with the `render`
//! feature.

/// A menu item with its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub text: String,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        MenuItem { text: text.into() }
    }
}

/// A stateful menu component
///
/// # Example
///
/// ```rust
/// use break_the_bank::gui::{Menu, MenuItem};
///
/// let mut menu = Menu::new(
///     "PAUSED",
///     vec![MenuItem::new("CONTINUE"), MenuItem::new("QUIT")],
/// );
///
/// menu.select_next();
/// assert_eq!(menu.selected_index(), 1);
/// menu.select_next();
/// assert_eq!(menu.selected_index(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
    selected_index: usize,
}

impl Menu {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Menu {
            title: title.into(),
            items,
            selected_index: 0,
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.items.get(self.selected_index)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// One-line summary such as `PAUSED: > CONTINUE <`
    pub fn status_line(&self) -> String {
        match self.selected() {
            Some(item) => format!("{}: > {} <", self.title, item.text),
            None => self.title.clone(),
        }
    }
}

#[cfg(feature = "render")]
mod sdl {
    use super::Menu;
    use sdl2::pixels::Color;
    use sdl2::rect::Rect;
    use sdl2::render::Canvas;
    use sdl2::video::Window;

    /// Configuration for menu appearance
    #[derive(Debug, Clone)]
    pub struct MenuStyle {
        pub width: u32,
        /// Height of one item row
        pub item_height: u32,
        pub background_color: Color,
        pub border_color: Color,
        /// Overlay darkness (0-255, higher = darker)
        pub overlay_alpha: u8,
        pub item_color: Color,
        pub highlight_color: Color,
    }

    impl Default for MenuStyle {
        fn default() -> Self {
            MenuStyle {
                width: 640,
                item_height: 96,
                background_color: Color::RGB(30, 30, 40),
                border_color: Color::RGB(100, 100, 120),
                overlay_alpha: 180,
                item_color: Color::RGB(70, 70, 85),
                highlight_color: Color::RGB(80, 100, 140),
            }
        }
    }

    impl Menu {
        /// Draws the menu box centred on the canvas, one bar per item.
        pub fn render(&self, canvas: &mut Canvas<Window>, style: &MenuStyle) -> Result<(), String> {
            canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
            canvas.set_draw_color(Color::RGBA(0, 0, 0, style.overlay_alpha));
            canvas.fill_rect(None)?;
            canvas.set_blend_mode(sdl2::render::BlendMode::None);

            let (screen_width, screen_height) = canvas.logical_size();
            let height = style.item_height * (self.items.len() as u32 + 1);
            let menu_x = screen_width.saturating_sub(style.width) / 2;
            let menu_y = screen_height.saturating_sub(height) / 2;

            canvas.set_draw_color(style.background_color);
            canvas.fill_rect(Rect::new(menu_x as i32, menu_y as i32, style.width, height))?;
            canvas.set_draw_color(style.border_color);
            canvas.draw_rect(Rect::new(menu_x as i32, menu_y as i32, style.width, height))?;

            let bar_height = style.item_height * 2 / 3;
            for (i, _) in self.items.iter().enumerate() {
                let bar_y = menu_y + style.item_height / 2 + i as u32 * style.item_height;
                let color = if i == self.selected_index {
                    style.highlight_color
                } else {
                    style.item_color
                };
                canvas.set_draw_color(color);
                canvas.fill_rect(Rect::new(
                    (menu_x + 32) as i32,
                    bar_y as i32,
                    style.width - 64,
                    bar_height,
                ))?;
            }

            Ok(())
        }
    }
}

#[cfg(feature = "render")]
pub use sdl::MenuStyle;
