mod config;
mod input_system;
mod playfield;
mod render;
mod square;
mod world;

use config::GameConfig;
use input_system::{GameAction, InputSystem};
use square::Direction;
use world::GameWorld;

const WINDOW_TITLE: &str = "Color Squares";
const CONFIG_PATH: &str = "assets/config/game.json";
const FRAMES_PER_SECOND: u32 = 60;

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(
    video_subsystem: &sdl2::VideoSubsystem,
    logical_width: u32,
    logical_height: u32,
) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / logical_width as i32;
            let max_scale_h = usable_h / logical_height as i32;

            // Use smaller scale to ensure both dimensions fit
            max_scale_w.min(max_scale_h).clamp(1, 4) as u32
        }
        Err(_) => {
            println!("Warning: Could not detect monitor size, using 1x scale");
            1
        }
    }
}

/// Load the game config, falling back to defaults when no file exists.
///
/// A missing file is fine (the defaults carry the full tuning); a file
/// that fails to parse or validate is an error.
fn load_config(path: &str) -> Result<GameConfig, String> {
    if !std::path::Path::new(path).exists() {
        println!("No config file at {}, using defaults", path);
        return Ok(GameConfig::default());
    }

    let config = GameConfig::load_from_file(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))?;
    config
        .validate()
        .map_err(|e| format!("Invalid config {}: {}", path, e))?;

    println!("Loaded config from {}", path);
    Ok(config)
}

fn main() -> Result<(), String> {
    let config = load_config(CONFIG_PATH)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    // Logical resolution equals the playfield; SDL scales pixels for us
    let logical_width = config.playfield_width as u32;
    let logical_height = config.playfield_height as u32;

    let window_scale = calculate_window_scale(&video_subsystem, logical_width, logical_height);
    let window_width = logical_width * window_scale;
    let window_height = logical_height * window_scale;

    println!(
        "Monitor scale: {}x (window: {}x{})",
        window_scale, window_width, window_height
    );

    let window = video_subsystem
        .window(WINDOW_TITLE, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(logical_width, logical_height)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;

    let mut rng = rand::thread_rng();
    let mut world = GameWorld::new(&config, &mut rng);
    let input_system = InputSystem::new();

    println!("Controls:");
    println!("Left/Right Arrows - Move the falling square");
    println!("ESC - Quit");

    let mut title_seconds = 0;

    'running: loop {
        for action in input_system.poll_events(&mut event_pump) {
            match action {
                GameAction::MoveLeft => world.shift_active(Direction::Left),
                GameAction::MoveRight => world.shift_active(Direction::Right),
                GameAction::Quit => break 'running,
            }
        }

        world.tick(&mut rng);

        render::render(&mut canvas, &world)?;
        canvas.present();

        // Surface the session timer in the title once per second
        let elapsed = world.elapsed_seconds();
        if elapsed != title_seconds {
            title_seconds = elapsed;
            canvas
                .window_mut()
                .set_title(&format!("{} - {}s", WINDOW_TITLE, elapsed))
                .map_err(|e| e.to_string())?;
        }

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / FRAMES_PER_SECOND));
    }

    println!(
        "Session over after {}s, {} squares stacked",
        world.elapsed_seconds(),
        world.stacked_squares.len()
    );

    Ok(())
}
