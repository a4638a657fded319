//! Screen states and the menus that belong to them

use super::menu::{Menu, MenuItem};
use crate::config::LevelDefinition;
use crate::input_system::InputContext;

/// Which screen the application is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    StageSelection,
    InGame,
    Paused,
    /// Terminal: the main loop stops
    Exited,
}

impl Screen {
    pub fn input_context(self) -> InputContext {
        match self {
            Screen::InGame => InputContext::Playing,
            Screen::Paused => InputContext::Paused,
            Screen::MainMenu | Screen::StageSelection | Screen::Exited => InputContext::Menu,
        }
    }
}

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    Start,
    Quit,
}

impl MainMenuOption {
    const ALL: [MainMenuOption; 2] = [MainMenuOption::Start, MainMenuOption::Quit];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    fn label(self) -> &'static str {
        match self {
            MainMenuOption::Start => "START",
            MainMenuOption::Quit => "QUIT",
        }
    }
}

/// Pause menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOption {
    Continue,
    Restart,
    Quit,
}

impl PauseOption {
    const ALL: [PauseOption; 3] = [PauseOption::Continue, PauseOption::Restart, PauseOption::Quit];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    fn label(self) -> &'static str {
        match self {
            PauseOption::Continue => "CONTINUE",
            PauseOption::Restart => "RESTART",
            PauseOption::Quit => "QUIT",
        }
    }
}

/// What a stage selection entry leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageChoice {
    Stage(usize),
    Back,
}

impl StageChoice {
    /// Stage entries come first, `BACK` is last.
    pub fn from_index(index: usize, stage_count: usize) -> Self {
        if index < stage_count {
            StageChoice::Stage(index)
        } else {
            StageChoice::Back
        }
    }
}

pub fn main_menu() -> Menu {
    Menu::new(
        "BREAK THE BANK",
        MainMenuOption::ALL.iter().map(|option| MenuItem::new(option.label())).collect(),
    )
}

pub fn pause_menu() -> Menu {
    Menu::new(
        "PAUSED",
        PauseOption::ALL.iter().map(|option| MenuItem::new(option.label())).collect(),
    )
}

pub fn stage_menu(stages: &[LevelDefinition]) -> Menu {
    let mut items: Vec<MenuItem> = stages
        .iter()
        .map(|stage| MenuItem::new(stage.name.to_uppercase()))
        .collect();
    items.push(MenuItem::new("BACK"));
    Menu::new("SELECT STAGE", items)
}
