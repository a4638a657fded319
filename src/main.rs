use break_the_bank::app::App;
use break_the_bank::config::GameConfig;
use break_the_bank::gui::{MenuStyle, Screen};
use break_the_bank::input_system::InputSystem;
use break_the_bank::logging;
use clap::Parser;
use log::{info, warn};
use sdl2::pixels::Color;
use std::path::PathBuf;

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

/// A tile platformer about breaking into a bank
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with tuning values and stages (bundled stages otherwise)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start this stage directly, skipping the menus
    #[arg(short, long)]
    stage: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        None => GameConfig::default(),
    };
    let (world_width, world_height) = config.world_size();
    info!(
        "Loaded {} stages (world {}x{})",
        config.stages.len(),
        world_width,
        world_height
    );

    let mut app = App::new(config);
    if let Some(index) = args.stage {
        app.start_stage(index).map_err(|e| e.to_string())?;
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Break the Bank", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps the whole stage visible whatever the window size
    if world_width > 0 && world_height > 0 {
        canvas
            .set_logical_size(world_width, world_height)
            .map_err(|e| e.to_string())?;
    }

    let mut event_pump = sdl_context.event_pump()?;
    let mut input = InputSystem::new();
    let menu_style = MenuStyle::default();
    let mut title = String::new();

    info!("Controls: arrows/WASD move, Space jump, K interact, Esc pause, Enter menu");

    'running: loop {
        input.context = app.input_context();
        for action in input.poll_events(&mut event_pump) {
            app.handle(action);
            input.context = app.input_context();
        }
        if app.screen() == Screen::Exited {
            break 'running;
        }

        canvas.set_draw_color(Color::RGB(15, 15, 20));
        canvas.clear();

        app.tick(&input.snapshot(), &mut canvas);
        if let Some(menu) = app.current_menu() {
            if let Err(e) = menu.render(&mut canvas, &menu_style) {
                warn!("Failed to draw menu: {}", e);
            }
        }

        let status = app.status_line();
        if status != title {
            canvas
                .window_mut()
                .set_title(&status)
                .map_err(|e| e.to_string())?;
            title = status;
        }

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    info!("Goodbye");
    Ok(())
}
