//! # Rectangle Renderer
//!
//! Batched rendering of the filled, optionally rounded rectangles collected in a
//! [`Canvas`](crate::renderer::canvas::Canvas). Buttons, panels, slider tracks, the slider handle
//! (a fully rounded square) and the translucent overlay all go through this one pipeline.
//!
//! ## Coordinate System
//!
//! Rectangles arrive in logical pixels (origin top-left). The renderer maps the logical surface
//! onto normalized device coordinates, so the whole frame stretches to whatever size the real
//! surface has.

use crate::renderer::canvas::FilledRect;
use crate::renderer::pipeline_builder::PipelineBuilder;
use std::mem;
use wgpu::{
    BufferUsages, Device, RenderPass, RenderPipeline, VertexAttribute, VertexBufferLayout,
    VertexFormat, util::DeviceExt,
};

/// Per-vertex data for one corner of a rectangle.
///
/// All four corners of a rectangle carry the same colour, size and radius; only `position` and
/// `uv` differ. The fragment shader uses `uv` (pixels from the top-left corner) together with
/// `rect_size` to evaluate the rounded-corner distance field.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    /// Normalized device coordinates (-1.0 to 1.0)
    position: [f32; 2],
    /// Linear RGBA
    color: [f32; 4],
    /// Offset from the rectangle's top-left corner in pixels
    uv: [f32; 2],
    /// Rectangle size in pixels
    rect_size: [f32; 2],
    corner_radius: f32,
    _padding: f32,
}

impl Vertex {
    /// ## Shader Locations
    ///
    /// - Location 0: Position (vec2)
    /// - Location 1: Color (vec4)
    /// - Location 2: UV (vec2)
    /// - Location 3: Rectangle size (vec2)
    /// - Location 4: Corner radius (float)
    fn desc<'a>() -> VertexBufferLayout<'a> {
        const F2: wgpu::BufferAddress = mem::size_of::<[f32; 2]>() as wgpu::BufferAddress;
        const F4: wgpu::BufferAddress = mem::size_of::<[f32; 4]>() as wgpu::BufferAddress;

        VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x2,
                },
                VertexAttribute {
                    offset: F2,
                    shader_location: 1,
                    format: VertexFormat::Float32x4,
                },
                VertexAttribute {
                    offset: F2 + F4,
                    shader_location: 2,
                    format: VertexFormat::Float32x2,
                },
                VertexAttribute {
                    offset: F2 + F4 + F2,
                    shader_location: 3,
                    format: VertexFormat::Float32x2,
                },
                VertexAttribute {
                    offset: F2 + F4 + F2 + F2,
                    shader_location: 4,
                    format: VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Batches every rectangle of a frame into one vertex/index buffer pair and a single draw call.
pub struct RectangleRenderer {
    render_pipeline: RenderPipeline,
    /// Logical surface width used for the NDC transform
    logical_width: f32,
    /// Logical surface height used for the NDC transform
    logical_height: f32,
}

impl RectangleRenderer {
    /// Creates the rectangle pipeline with alpha blending enabled.
    pub fn new(
        device: &Device,
        surface_format: wgpu::TextureFormat,
        logical_width: f32,
        logical_height: f32,
    ) -> Self {
        let render_pipeline =
            PipelineBuilder::new(device, surface_format, include_str!("shaders/rectangle.wgsl"))
                .with_label("Rectangle Pipeline")
                .with_vertex_buffer(Vertex::desc())
                .with_alpha_blending()
                .build();

        Self {
            render_pipeline,
            logical_width,
            logical_height,
        }
    }

    /// Draws `rectangles` in order into the active render pass.
    pub fn render(&self, device: &Device, render_pass: &mut RenderPass, rectangles: &[FilledRect]) {
        if rectangles.is_empty() {
            return;
        }

        let (vertices, indices) =
            build_geometry(rectangles, self.logical_width, self.logical_height);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rectangle Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rectangle Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: BufferUsages::INDEX,
        });

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..indices.len() as u32, 0, 0..1);
    }
}

/// Converts rectangles into vertices and indices (4 vertices, 6 indices each).
fn build_geometry(
    rectangles: &[FilledRect],
    logical_width: f32,
    logical_height: f32,
) -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(rectangles.len() * 4);
    let mut indices = Vec::with_capacity(rectangles.len() * 6);

    for (rect_index, filled) in rectangles.iter().enumerate() {
        let rect = filled.rect;
        let color = filled.color.to_linear();

        // Screen space: (0,0) = top-left, positive Y = down
        // NDC space: (-1,-1) = bottom-left, (1,1) = top-right
        let x = (rect.x / logical_width) * 2.0 - 1.0;
        let y = 1.0 - (rect.y / logical_height) * 2.0;
        let width = (rect.width / logical_width) * 2.0;
        let height = -(rect.height / logical_height) * 2.0;

        let corner = |position: [f32; 2], uv: [f32; 2]| Vertex {
            position,
            color,
            uv,
            rect_size: [rect.width, rect.height],
            corner_radius: filled.corner_radius,
            _padding: 0.0,
        };

        vertices.extend_from_slice(&[
            corner([x, y], [0.0, 0.0]),
            corner([x + width, y], [rect.width, 0.0]),
            corner([x + width, y + height], [rect.width, rect.height]),
            corner([x, y + height], [0.0, rect.height]),
        ]);

        let base = (rect_index * 4) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}
