//! Event handler module.
//!
//! Contains the [`App`] struct and its winit event handling.

use crate::app::Scene;
use crate::app::app_state::AppState;
use crate::app::input::{InputEvent, button_event, to_logical};
use crate::app::window::window_attributes;
use crate::config::AppConfig;
use image::RgbaImage;
use std::sync::Arc;
use tracing::{debug, error, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::WindowId,
};

/// Drives a [`Scene`] from the winit event loop.
///
/// # Lifecycle
/// 1. Created with [`App::new`] before the event loop starts
/// 2. `resumed` creates the window and the [`AppState`]
/// 3. Window events are queued and consumed once per frame
/// 4. The loop exits when the scene asks to quit or initialization fails
pub struct App<S: Scene> {
    pub instance: wgpu::Instance,
    pub config: AppConfig,
    pub scene: S,
    /// Image uploaded as the background texture once the renderer exists.
    background: Option<RgbaImage>,
    /// None until the window is created.
    pub state: Option<AppState>,
}

impl<S: Scene> App<S> {
    pub fn new(config: AppConfig, scene: S, background: Option<RgbaImage>) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        Self {
            instance,
            config,
            scene,
            background,
            state: None,
        }
    }

    fn queue_input(&mut self, event: InputEvent) {
        if let Some(state) = self.state.as_mut() {
            state.pending_input.push(event);
        }
    }

    fn handle_resized(&mut self, width: u32, height: u32) {
        if let Some(state) = self.state.as_mut() {
            state.wgpu_renderer.resize(width, height);
        }
    }
}

impl<S: Scene> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window = match event_loop.create_window(window_attributes(&self.config.window)) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(AppState::new(
            &self.instance,
            window,
            &self.config,
            self.background.as_ref(),
        )) {
            Ok(state) => {
                info!(
                    title = %self.config.window.title,
                    width = self.config.window.width,
                    height = self.config.window.height,
                    "Window created"
                );
                state.window.request_redraw();
                self.state = Some(state);
                // The texture now lives on the GPU.
                self.background = None;
            }
            Err(e) => {
                error!("Failed to initialize graphics: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                debug!("Close requested");
                self.queue_input(InputEvent::Quit);
                // Handled straight away so closing works even while no frames are drawn.
                self.drain_input(event_loop);
            }
            WindowEvent::Resized(size) => self.handle_resized(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(state) = self.state.as_mut() {
                    let pointer = to_logical(
                        position,
                        state.wgpu_renderer.surface_size(),
                        state.logical_size(),
                    );
                    state.pointer = Some(pointer);
                    state
                        .pending_input
                        .push(InputEvent::PointerMove { position: pointer });
                }
            }
            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                let pointer = self.state.as_ref().and_then(|state| state.pointer);
                match button_event(pointer, button_state, button) {
                    Some(event) => self.queue_input(event),
                    None => debug!("Ignoring click before the cursor position is known"),
                }
            }
            WindowEvent::RedrawRequested => self.handle_redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let now = std::time::Instant::now();
        if state.pacer.frame_due(now) {
            state.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(state.pacer.next_frame()));
    }
}
