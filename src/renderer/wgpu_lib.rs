//! WGPU-based renderer for the scenes.
//!
//! [`WgpuRenderer`] owns the surface, device and the three drawing back ends (background quad,
//! rectangles, text). Each frame it receives a finished [`Canvas`] and draws it in a single render
//! pass: clear, background, rectangles, then text.
//!
//! Scenes draw in a fixed logical resolution. Rectangles are mapped to NDC from that logical size
//! and so stretch to the surface; text positions are scaled per axis and glyphs by the smaller
//! factor.

use crate::renderer::background::BackgroundRenderer;
use crate::renderer::canvas::Canvas;
use crate::renderer::rectangle::RectangleRenderer;
use crate::renderer::text::TextRenderer;
use image::RgbaImage;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};
use wgpu;

/// Failures while setting up or driving the GPU.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to create rendering surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("failed to create graphics device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
    #[error("graphics device is out of memory")]
    OutOfMemory,
}

/// Ratio between surface pixels and logical pixels along each axis.
pub fn scale_factors(surface_size: (u32, u32), logical_size: (f32, f32)) -> (f32, f32) {
    let (surface_width, surface_height) = surface_size;
    let (logical_width, logical_height) = logical_size;
    if logical_width <= 0.0 || logical_height <= 0.0 {
        return (1.0, 1.0);
    }
    (
        surface_width as f32 / logical_width,
        surface_height as f32 / logical_height,
    )
}

/// Main WGPU renderer.
pub struct WgpuRenderer {
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    rectangle_renderer: RectangleRenderer,
    /// Present only when the scene supplied a background image.
    background_renderer: Option<BackgroundRenderer>,
    text_renderer: TextRenderer,
    logical_size: (f32, f32),
}

impl WgpuRenderer {
    /// Initializes the device and every drawing back end.
    ///
    /// `width`/`height` are the surface's physical size; `logical_size` is the resolution the
    /// scenes draw in.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
        logical_size: (f32, f32),
        background: Option<&RgbaImage>,
        fonts_dir: &Path,
    ) -> Result<Self, RendererError> {
        let adapter = Self::create_adapter(instance, &surface).await?;
        let (device, queue) = Self::create_device(&adapter).await?;
        let surface_config = Self::create_surface_config(&surface, &adapter, width, height)?;

        surface.configure(&device, &surface_config);
        info!(
            width = surface_config.width,
            height = surface_config.height,
            format = ?surface_config.format,
            "Surface configured"
        );

        let rectangle_renderer = RectangleRenderer::new(
            &device,
            surface_config.format,
            logical_size.0,
            logical_size.1,
        );
        let background_renderer = background
            .map(|image| BackgroundRenderer::new(&device, &queue, surface_config.format, image));

        let mut text_renderer = TextRenderer::new(&device, &queue, surface_config.format);
        text_renderer.load_fonts_dir(fonts_dir);
        text_renderer.resize(
            &queue,
            glyphon::Resolution {
                width: surface_config.width,
                height: surface_config.height,
            },
        );

        Ok(Self {
            surface,
            surface_config,
            device,
            queue,
            rectangle_renderer,
            background_renderer,
            text_renderer,
            logical_size,
        })
    }

    /// Reconfigures the surface for a new physical size. Zero-sized requests are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        self.text_renderer.resize(
            &self.queue,
            glyphon::Resolution { width, height },
        );
        debug!(width, height, "Surface resized");
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// Draws `canvas` and presents the frame.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped; only running out of
    /// memory is reported to the caller.
    pub fn render(&mut self, canvas: &Canvas) -> Result<(), RendererError> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RendererError::OutOfMemory),
            Err(e) => {
                warn!(error = %e, "Skipping frame");
                return Ok(());
            }
        };
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let scale = scale_factors(self.surface_size(), self.logical_size);
        if let Err(e) = self.text_renderer.prepare(
            &self.device,
            &self.queue,
            canvas.texts(),
            scale,
            self.surface_size(),
        ) {
            warn!(error = %e, "Failed to prepare text");
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let [r, g, b, a] = canvas.clear_color().to_linear();
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: f64::from(r),
                            g: f64::from(g),
                            b: f64::from(b),
                            a: f64::from(a),
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if canvas.has_background() {
                match &self.background_renderer {
                    Some(background) => background.render(&mut render_pass),
                    None => debug!("Background requested but no image was loaded"),
                }
            }

            self.rectangle_renderer
                .render(&self.device, &mut render_pass, canvas.rectangles());

            if let Err(e) = self.text_renderer.render(&mut render_pass) {
                warn!(error = %e, "Text render failed");
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        self.text_renderer.trim();
        Ok(())
    }

    async fn create_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'static>,
    ) -> Result<wgpu::Adapter, RendererError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(surface),
            })
            .await
            .ok_or(RendererError::NoAdapter)?;

        let adapter_info = adapter.get_info();
        info!(
            name = %adapter_info.name,
            backend = ?adapter_info.backend,
            "Found GPU adapter"
        );
        Ok(adapter)
    }

    async fn create_device(
        adapter: &wgpu::Adapter,
    ) -> Result<(wgpu::Device, wgpu::Queue), RendererError> {
        let device = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;
        Ok(device)
    }

    /// Prefers an sRGB format so palette colours come out as authored.
    fn create_surface_config(
        surface: &wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<wgpu::SurfaceConfiguration, RendererError> {
        let capabilities = surface.get_capabilities(adapter);
        let format = capabilities
            .formats
            .iter()
            .find(|format| format.is_srgb())
            .or_else(|| capabilities.formats.first())
            .copied()
            .ok_or(RendererError::NoSurfaceFormat)?;
        let alpha_mode = capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        Ok(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_sizes_scale_by_one() {
        assert_eq!(scale_factors((1920, 1080), (1920.0, 1080.0)), (1.0, 1.0));
    }

    #[test]
    fn scale_is_tracked_per_axis() {
        assert_eq!(scale_factors((960, 1080), (1920.0, 1080.0)), (0.5, 1.0));
    }

    #[test]
    fn degenerate_logical_size_does_not_divide_by_zero() {
        assert_eq!(scale_factors((800, 600), (0.0, 600.0)), (1.0, 1.0));
    }
}
