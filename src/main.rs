//! Game of Exile
//!
//! Entry point of the menu shell: a title screen with Start, Exit and Settings buttons and an
//! animated settings panel for music, volume and fullscreen.
//!
//! # Usage
//! Run with `cargo run --bin game-of-exile`. Settings come from `config/game_of_exile.toml` and
//! `EXILE_*` environment variables when present; the background image at
//! `<assets_dir>/images/background_menu.bmp` is required.

use exile::app::App;
use exile::assets::load_image;
use exile::config::AppConfig;
use exile::logging;
use exile::menu::MenuShell;
use std::process::ExitCode;
use tracing::{error, info};
use winit::event_loop::{ControlFlow, EventLoop};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() -> ExitCode {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration and assets, then runs the event loop until the menu quits.
fn run() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default(AppConfig::game_of_exile());
    info!(program = %config.program, "Starting");

    let background = load_image(&config.background_path())?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let scene = MenuShell::new(
        config.window.width as f32,
        config.window.height as f32,
        config.window.fullscreen,
    );
    let mut app = App::new(config, scene, Some(background));
    event_loop.run_app(&mut app)?;

    info!("Goodbye");
    Ok(())
}
