//! Per-frame update for [`App`].
//!
//! Each redraw drains the queued input into the scene, applies the commands it returns, advances
//! the scene by the measured frame time, and renders the canvas it describes.

use crate::app::window::fullscreen_mode;
use crate::app::{Scene, SceneCommand};
use crate::math::Point;
use crate::renderer::wgpu_lib::RendererError;
use std::time::{Duration, Instant};
use tracing::{error, info};
use winit::event_loop::ActiveEventLoop;

use super::event_handler::App;

/// Fixed-rate frame scheduler used with `ControlFlow::WaitUntil`.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    frame: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(frame: Duration, now: Instant) -> Self {
        Self { frame, next: now }
    }

    /// Returns whether a frame should be drawn at `now`, scheduling the following one if so.
    ///
    /// After a stall the schedule restarts from `now` instead of bursting to catch up.
    pub fn frame_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.frame;
        if self.next <= now {
            self.next = now + self.frame;
        }
        true
    }

    pub fn next_frame(&self) -> Instant {
        self.next
    }
}

impl<S: Scene> App<S> {
    /// Feeds every queued input event to the scene in arrival order.
    pub fn drain_input(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let now = Instant::now();
        let events = std::mem::take(&mut state.pending_input);
        for event in &events {
            let command = self.scene.handle_input(event, now);
            self.apply_command(command, event_loop);
        }
    }

    /// Runs one frame: input, update, draw, present.
    pub fn handle_redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.drain_input(event_loop);
        if event_loop.exiting() {
            return;
        }

        let Some(state) = self.state.as_mut() else {
            return;
        };

        let now = Instant::now();
        let dt = now.duration_since(state.last_frame);
        state.last_frame = now;
        self.scene.update(dt, now);

        state.canvas.reset();
        // Off-canvas until the cursor has been seen, so nothing starts out hovered.
        let pointer = state.pointer.unwrap_or(Point::new(-1.0, -1.0));
        self.scene.draw(&mut state.canvas, pointer, now);

        match state.wgpu_renderer.render(&state.canvas) {
            Ok(()) => {}
            Err(RendererError::OutOfMemory) => {
                error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => error!(error = %e, "Render error"),
        }
    }

    fn apply_command(&mut self, command: SceneCommand, event_loop: &ActiveEventLoop) {
        match command {
            SceneCommand::None => {}
            SceneCommand::Quit => {
                info!("Quitting");
                event_loop.exit();
            }
            SceneCommand::SetFullscreen(fullscreen) => {
                let Some(state) = self.state.as_mut() else {
                    return;
                };
                if state.fullscreen != fullscreen {
                    state.window.set_fullscreen(fullscreen_mode(fullscreen));
                    state.fullscreen = fullscreen;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn first_frame_is_due_immediately() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(FRAME, start);

        assert!(pacer.frame_due(start));
        assert_eq!(pacer.next_frame(), start + FRAME);
    }

    #[test]
    fn frames_are_not_due_before_the_deadline() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(FRAME, start);
        pacer.frame_due(start);

        assert!(!pacer.frame_due(start + Duration::from_millis(10)));
        assert!(pacer.frame_due(start + FRAME));
        assert_eq!(pacer.next_frame(), start + FRAME * 2);
    }

    #[test]
    fn stalls_do_not_cause_a_burst_of_frames() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(FRAME, start);
        pacer.frame_due(start);

        let late = start + Duration::from_millis(500);
        assert!(pacer.frame_due(late));
        assert_eq!(pacer.next_frame(), late + FRAME);
    }
}
