//! AppState module.
//!
//! Holds everything that only exists once a window has been created: the window itself, the GPU
//! renderer, the reusable frame canvas and the input queued since the last frame.

use crate::app::input::InputEvent;
use crate::app::update::FramePacer;
use crate::config::AppConfig;
use crate::math::Point;
use crate::renderer::canvas::Canvas;
use crate::renderer::wgpu_lib::WgpuRenderer;
use anyhow::Context;
use image::RgbaImage;
use std::sync::Arc;
use std::time::Instant;
use winit::window::Window;

pub struct AppState {
    pub window: Arc<Window>,
    pub wgpu_renderer: WgpuRenderer,
    pub canvas: Canvas,
    /// Input received since the last frame, oldest first.
    pub pending_input: Vec<InputEvent>,
    /// Latest cursor position in logical pixels; `None` until the cursor first moves.
    pub pointer: Option<Point>,
    pub last_frame: Instant,
    pub pacer: FramePacer,
    /// Whether the window is currently fullscreen, as last requested.
    pub fullscreen: bool,
}

impl AppState {
    /// Creates the surface and renderer for `window`.
    pub async fn new(
        instance: &wgpu::Instance,
        window: Arc<Window>,
        config: &AppConfig,
        background: Option<&RgbaImage>,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let logical_size = (config.window.width as f32, config.window.height as f32);

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let wgpu_renderer = WgpuRenderer::new(
            instance,
            surface,
            size.width,
            size.height,
            logical_size,
            background,
            &config.assets_dir.join("fonts"),
        )
        .await
        .context("failed to initialize renderer")?;

        let now = Instant::now();
        Ok(Self {
            window,
            wgpu_renderer,
            canvas: Canvas::new(logical_size.0, logical_size.1),
            pending_input: Vec::new(),
            pointer: None,
            last_frame: now,
            pacer: FramePacer::new(config.frame_duration(), now),
            fullscreen: config.window.fullscreen,
        })
    }

    /// Logical size the scenes draw in.
    pub fn logical_size(&self) -> (f32, f32) {
        (self.canvas.width(), self.canvas.height())
    }
}
