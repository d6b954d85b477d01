//! Catch the Square
//!
//! Click the red square as many times as possible in 30 seconds. When time is up any click
//! starts a new round.
//!
//! # Usage
//! Run with `cargo run --bin catch-the-square`. The hit sound at
//! `<assets_dir>/sounds/click.wav` is optional.

use exile::app::App;
use exile::config::AppConfig;
use exile::game::CatchTheSquare;
use exile::game::audio::ClickSound;
use exile::logging;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;
use std::time::Instant;
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

fn run() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default(AppConfig::catch_the_square());
    info!(program = %config.program, "Starting");

    let click_sound = ClickSound::load_optional(&config.click_sound_path());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let scene = CatchTheSquare::new(
        config.window.width,
        config.window.height,
        StdRng::from_entropy(),
        click_sound,
        Instant::now(),
    );
    let mut app = App::new(config, scene, None);
    event_loop.run_app(&mut app)?;

    info!("Goodbye");
    Ok(())
}
