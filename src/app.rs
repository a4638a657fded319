// Application state
//
// App owns everything the screens share: the current screen, one menu per
// menu screen, the stage list and the running level. The main loop feeds it
// GameActions and calls `tick` once per frame.

use crate::config::{GameConfig, LevelDefinition, Tuning};
use crate::error::LevelError;
use crate::gui::screen::{self, MainMenuOption, PauseOption, Screen, StageChoice};
use crate::gui::Menu;
use crate::input_system::{GameAction, InputContext, InputSnapshot};
use crate::level::{FrameEvents, Level};
use crate::render::Surface;
use log::{error, info};

pub struct App {
    screen: Screen,
    main_menu: Menu,
    stage_menu: Menu,
    pause_menu: Menu,
    stages: Vec<LevelDefinition>,
    tuning: Tuning,
    level: Option<Level>,
    last_error: Option<LevelError>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        App {
            screen: Screen::MainMenu,
            main_menu: screen::main_menu(),
            stage_menu: screen::stage_menu(&config.stages),
            pause_menu: screen::pause_menu(),
            stages: config.stages,
            tuning: config.tuning,
            level: None,
            last_error: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn input_context(&self) -> InputContext {
        self.screen.input_context()
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn stages(&self) -> &[LevelDefinition] {
        &self.stages
    }

    /// Error from the most recent failed stage start, if any
    pub fn last_error(&self) -> Option<&LevelError> {
        self.last_error.as_ref()
    }

    /// Menu shown on the current screen
    pub fn current_menu(&self) -> Option<&Menu> {
        match self.screen {
            Screen::MainMenu => Some(&self.main_menu),
            Screen::StageSelection => Some(&self.stage_menu),
            Screen::Paused => Some(&self.pause_menu),
            Screen::InGame | Screen::Exited => None,
        }
    }

    fn current_menu_mut(&mut self) -> Option<&mut Menu> {
        match self.screen {
            Screen::MainMenu => Some(&mut self.main_menu),
            Screen::StageSelection => Some(&mut self.stage_menu),
            Screen::Paused => Some(&mut self.pause_menu),
            Screen::InGame | Screen::Exited => None,
        }
    }

    /// Short description of the current screen, used as the window title.
    pub fn status_line(&self) -> String {
        match (self.screen, &self.level) {
            (Screen::InGame, Some(level)) => {
                format!("{} - points: {}", level.name(), level.points_collected())
            }
            _ => match self.current_menu() {
                Some(menu) => menu.status_line(),
                None => String::from("Break the Bank"),
            },
        }
    }

    fn enter(&mut self, screen: Screen) {
        info!("Screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        if let Some(menu) = self.current_menu_mut() {
            menu.reset_selection();
        }
    }

    /// Builds the stage at `index` and switches to it.
    ///
    /// On failure the error is kept in `last_error` and the screen does not
    /// change.
    pub fn start_stage(&mut self, index: usize) -> Result<(), LevelError> {
        let Some(definition) = self.stages.get(index) else {
            let e = LevelError::UnknownStage {
                index,
                count: self.stages.len(),
            };
            error!("{}", e);
            self.last_error = Some(e.clone());
            return Err(e);
        };

        match Level::new(definition, &self.tuning) {
            Ok(level) => {
                self.level = Some(level);
                self.last_error = None;
                self.enter(Screen::InGame);
                Ok(())
            }
            Err(e) => {
                error!("Cannot start stage '{}': {}", definition.name, e);
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn leave_level(&mut self, screen: Screen) {
        self.level = None;
        self.enter(screen);
    }

    /// Applies one action to the current screen.
    pub fn handle(&mut self, action: GameAction) {
        if action == GameAction::Quit {
            self.enter(Screen::Exited);
            return;
        }

        match action {
            GameAction::MenuUp => {
                if let Some(menu) = self.current_menu_mut() {
                    menu.select_previous();
                }
                return;
            }
            GameAction::MenuDown => {
                if let Some(menu) = self.current_menu_mut() {
                    menu.select_next();
                }
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::MainMenu => self.handle_main_menu(action),
            Screen::StageSelection => self.handle_stage_selection(action),
            Screen::InGame => self.handle_in_game(action),
            Screen::Paused => self.handle_paused(action),
            Screen::Exited => {}
        }
    }

    fn handle_main_menu(&mut self, action: GameAction) {
        if action != GameAction::MenuConfirm {
            return;
        }
        match MainMenuOption::from_index(self.main_menu.selected_index()) {
            Some(MainMenuOption::Start) => self.enter(Screen::StageSelection),
            Some(MainMenuOption::Quit) => self.enter(Screen::Exited),
            None => {}
        }
    }

    fn handle_stage_selection(&mut self, action: GameAction) {
        match action {
            GameAction::MenuConfirm => {
                let choice = StageChoice::from_index(self.stage_menu.selected_index(), self.stages.len());
                match choice {
                    // Failure is recorded in last_error; the menu stays up
                    StageChoice::Stage(index) => {
                        let _ = self.start_stage(index);
                    }
                    StageChoice::Back => self.enter(Screen::MainMenu),
                }
            }
            GameAction::MenuBack => self.enter(Screen::MainMenu),
            _ => {}
        }
    }

    fn handle_in_game(&mut self, action: GameAction) {
        match action {
            GameAction::Pause => self.enter(Screen::Paused),
            GameAction::ReturnToMenu => self.leave_level(Screen::MainMenu),
            _ => {}
        }
    }

    fn handle_paused(&mut self, action: GameAction) {
        match action {
            GameAction::Resume => self.enter(Screen::InGame),
            GameAction::MenuConfirm => match PauseOption::from_index(self.pause_menu.selected_index()) {
                Some(PauseOption::Continue) => self.enter(Screen::InGame),
                Some(PauseOption::Restart) => self.restart_level(),
                Some(PauseOption::Quit) => self.leave_level(Screen::StageSelection),
                None => {}
            },
            _ => {}
        }
    }

    fn restart_level(&mut self) {
        let Some(level) = self.level.as_mut() else {
            self.enter(Screen::StageSelection);
            return;
        };
        match level.restart() {
            Ok(()) => self.enter(Screen::InGame),
            Err(e) => {
                error!("Restart failed: {}", e);
                self.last_error = Some(e);
                self.leave_level(Screen::StageSelection);
            }
        }
    }

    /// Runs one frame of the level while in game.
    ///
    /// Other screens leave the level untouched and return `None`.
    pub fn tick(&mut self, input: &InputSnapshot, surface: &mut dyn Surface) -> Option<FrameEvents> {
        if self.screen != Screen::InGame {
            return None;
        }
        self.level.as_mut().map(|level| level.run(input, surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullSurface;

    fn tiny_config() -> GameConfig {
        GameConfig {
            tuning: Tuning::default(),
            stages: vec![
                LevelDefinition::new("Corridor", &["XP C X", "XXXXXX"], &[]),
                LevelDefinition::new("Broken", &["X  X"], &[]),
            ],
        }
    }

    fn walk_right() -> InputSnapshot {
        InputSnapshot {
            right: true,
            ..InputSnapshot::default()
        }
    }

    fn app_in_game() -> App {
        let mut app = App::new(tiny_config());
        app.handle(GameAction::MenuConfirm);
        app.handle(GameAction::MenuConfirm);
        assert_eq!(app.screen(), Screen::InGame);
        app
    }

    #[test]
    fn test_main_menu_start_and_back() {
        let mut app = App::new(tiny_config());
        assert_eq!(app.screen(), Screen::MainMenu);

        app.handle(GameAction::MenuConfirm);
        assert_eq!(app.screen(), Screen::StageSelection);

        app.handle(GameAction::MenuBack);
        assert_eq!(app.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_main_menu_quit_exits() {
        let mut app = App::new(tiny_config());
        app.handle(GameAction::MenuDown);
        app.handle(GameAction::MenuConfirm);
        assert_eq!(app.screen(), Screen::Exited);
    }

    #[test]
    fn test_quit_action_exits_from_anywhere() {
        let mut app = app_in_game();
        app.handle(GameAction::Quit);
        assert_eq!(app.screen(), Screen::Exited);
    }

    #[test]
    fn test_broken_stage_stays_in_selection() {
        let mut app = App::new(tiny_config());
        app.handle(GameAction::MenuConfirm);
        app.handle(GameAction::MenuDown);
        app.handle(GameAction::MenuConfirm);

        assert_eq!(app.screen(), Screen::StageSelection);
        assert_eq!(app.last_error(), Some(&LevelError::NoPlayer));
        assert!(app.level().is_none());
    }

    #[test]
    fn test_stage_menu_back_entry() {
        let mut app = App::new(tiny_config());
        app.handle(GameAction::MenuConfirm);
        app.handle(GameAction::MenuUp);
        app.handle(GameAction::MenuConfirm);
        assert_eq!(app.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_pause_preserves_level_state() {
        let mut app = app_in_game();
        for _ in 0..5 {
            app.tick(&walk_right(), &mut NullSurface);
        }
        let before = app.level().map(|level| level.player().position());

        app.handle(GameAction::Pause);
        assert_eq!(app.screen(), Screen::Paused);
        assert!(app.tick(&walk_right(), &mut NullSurface).is_none());
        assert_eq!(app.level().map(|level| level.player().position()), before);

        app.handle(GameAction::Resume);
        assert_eq!(app.screen(), Screen::InGame);
        assert!(app.tick(&walk_right(), &mut NullSurface).is_some());
    }

    #[test]
    fn test_pause_restart_rebuilds_level() {
        let mut app = app_in_game();
        for _ in 0..30 {
            app.tick(&walk_right(), &mut NullSurface);
        }
        assert_eq!(app.level().map(|level| level.points_collected()), Some(1));

        app.handle(GameAction::Pause);
        app.handle(GameAction::MenuDown);
        app.handle(GameAction::MenuConfirm);

        assert_eq!(app.screen(), Screen::InGame);
        assert_eq!(app.level().map(|level| level.points().len()), Some(1));
    }

    #[test]
    fn test_pause_quit_returns_to_stage_selection() {
        let mut app = app_in_game();
        app.handle(GameAction::Pause);
        app.handle(GameAction::MenuUp);
        app.handle(GameAction::MenuConfirm);

        assert_eq!(app.screen(), Screen::StageSelection);
        assert!(app.level().is_none());
    }

    #[test]
    fn test_return_to_menu_drops_level() {
        let mut app = app_in_game();
        app.handle(GameAction::ReturnToMenu);
        assert_eq!(app.screen(), Screen::MainMenu);
        assert!(app.level().is_none());
    }

    #[test]
    fn test_pause_menu_selection_resets_on_entry() {
        let mut app = app_in_game();
        app.handle(GameAction::Pause);
        app.handle(GameAction::MenuDown);
        app.handle(GameAction::Resume);
        app.handle(GameAction::Pause);

        assert_eq!(app.current_menu().map(|menu| menu.selected_index()), Some(0));
    }

    #[test]
    fn test_unknown_stage_index_is_an_error() {
        let mut app = App::new(tiny_config());
        let err = app.start_stage(7).unwrap_err();
        assert_eq!(err, LevelError::UnknownStage { index: 7, count: 2 });
        assert_eq!(app.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_status_line_in_game() {
        let app = app_in_game();
        assert_eq!(app.status_line(), "Corridor - points: 0");
    }
}
