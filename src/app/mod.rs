//! Application runtime shared by both programs.
//!
//! # Module Structure
//!
//! - [`app_state`]: window, renderer and per-frame bookkeeping created once the window exists
//! - [`event_handler`]: the generic [`App`] driving a [`Scene`] from winit events
//! - [`input`]: logical-coordinate input events
//! - [`update`]: the per-frame drain → update → draw → present step and frame pacing
//! - [`window`]: window attributes derived from the configuration
//!
//! # Event Flow
//!
//! 1. Window events are translated into [`InputEvent`]s and queued
//! 2. On redraw the queue is drained into the scene, which may answer with [`SceneCommand`]s
//! 3. The scene advances its time-based state and describes the frame on a canvas
//! 4. The renderer draws and presents the canvas

pub mod app_state;
pub mod event_handler;
pub mod input;
pub mod update;
pub mod window;

pub use app_state::AppState;
pub use event_handler::App;
pub use input::{InputEvent, PointerButton};

use crate::math::Point;
use crate::renderer::canvas::Canvas;
use std::time::{Duration, Instant};

/// Requests a scene makes of the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneCommand {
    #[default]
    None,
    Quit,
    /// Enter (`true`) or leave borderless fullscreen. Applying the current state again is a no-op.
    SetFullscreen(bool),
}

/// A program the runtime can drive: consumes input, advances with time, describes frames.
///
/// Time is always passed in, never read, so scenes can be tested with a synthetic clock.
pub trait Scene {
    fn handle_input(&mut self, event: &InputEvent, now: Instant) -> SceneCommand;

    fn update(&mut self, dt: Duration, now: Instant);

    /// Describes the current frame. `pointer` is the latest cursor position, used for hover.
    fn draw(&self, canvas: &mut Canvas, pointer: Point, now: Instant);
}
