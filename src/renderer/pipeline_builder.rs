//! # Pipeline Builder
//!
//! Fluent helpers for the two pipelines this crate creates (flat rectangles and the textured
//! background quad). Both draw a triangle list straight onto the swapchain format with no depth
//! buffer, so the builder only exposes the knobs that actually differ between them.
//!
//! ```rust,no_run
//! # let device: wgpu::Device = unimplemented!();
//! # let surface_format = wgpu::TextureFormat::Bgra8UnormSrgb;
//! # let shader_source = "";
//! use exile::renderer::pipeline_builder::{BindGroupLayoutBuilder, PipelineBuilder};
//!
//! let layout = BindGroupLayoutBuilder::new(&device)
//!     .with_label("Texture Bind Group Layout")
//!     .with_texture(0, wgpu::ShaderStages::FRAGMENT)
//!     .with_sampler(1, wgpu::ShaderStages::FRAGMENT)
//!     .build();
//!
//! let pipeline = PipelineBuilder::new(&device, surface_format, shader_source)
//!     .with_label("Textured Pipeline")
//!     .with_bind_group_layout(&layout)
//!     .with_alpha_blending()
//!     .build();
//! ```

use wgpu::util::DeviceExt;

/// Builder for render pipelines that target the surface directly.
///
/// ## Defaults
///
/// - Entry points `vs_main` / `fs_main`
/// - `REPLACE` blending
/// - No face culling (2D quads are wound either way depending on the Y flip)
/// - Triangle list, no depth-stencil, single sample
pub struct PipelineBuilder<'a> {
    device: &'a wgpu::Device,
    surface_format: wgpu::TextureFormat,
    shader_source: &'a str,
    label: Option<&'a str>,
    vertex_buffers: Vec<wgpu::VertexBufferLayout<'a>>,
    bind_group_layouts: Vec<&'a wgpu::BindGroupLayout>,
    blend_state: wgpu::BlendState,
}

impl<'a> PipelineBuilder<'a> {
    /// Starts a pipeline from WGSL source containing `vs_main` and `fs_main`.
    pub fn new(
        device: &'a wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &'a str,
    ) -> Self {
        Self {
            device,
            surface_format,
            shader_source,
            label: None,
            vertex_buffers: Vec::new(),
            bind_group_layouts: Vec::new(),
            blend_state: wgpu::BlendState::REPLACE,
        }
    }

    /// Debug label for the shader module, layout and pipeline.
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_vertex_buffer(mut self, layout: wgpu::VertexBufferLayout<'a>) -> Self {
        self.vertex_buffers.push(layout);
        self
    }

    pub fn with_bind_group_layout(mut self, layout: &'a wgpu::BindGroupLayout) -> Self {
        self.bind_group_layouts.push(layout);
        self
    }

    /// Standard "source over" blending.
    pub fn with_alpha_blending(mut self) -> Self {
        self.blend_state = wgpu::BlendState::ALPHA_BLENDING;
        self
    }

    pub fn build(self) -> wgpu::RenderPipeline {
        let shader = self
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: self.label,
                source: wgpu::ShaderSource::Wgsl(self.shader_source.into()),
            });

        let pipeline_layout = self
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: self.label,
                bind_group_layouts: &self.bind_group_layouts,
                push_constant_ranges: &[],
            });

        self.device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: self.label,
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &self.vertex_buffers,
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: self.surface_format,
                        blend: Some(self.blend_state),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
    }
}

/// Builder for bind group layouts made of textures and samplers.
pub struct BindGroupLayoutBuilder<'a> {
    device: &'a wgpu::Device,
    entries: Vec<wgpu::BindGroupLayoutEntry>,
    label: Option<&'a str>,
}

impl<'a> BindGroupLayoutBuilder<'a> {
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self {
            device,
            entries: Vec::new(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Filterable 2D float texture, i.e. `var t: texture_2d<f32>` in WGSL.
    pub fn with_texture(mut self, binding: u32, visibility: wgpu::ShaderStages) -> Self {
        self.entries.push(wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Texture {
                multisampled: false,
                view_dimension: wgpu::TextureViewDimension::D2,
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
            },
            count: None,
        });
        self
    }

    /// Filtering sampler, i.e. `var s: sampler` in WGSL.
    pub fn with_sampler(mut self, binding: u32, visibility: wgpu::ShaderStages) -> Self {
        self.entries.push(wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        });
        self
    }

    pub fn build(self) -> wgpu::BindGroupLayout {
        self.device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &self.entries,
                label: self.label,
            })
    }
}

/// Fullscreen quad as two triangles of `[x, y, z, u, v]`, with `v` growing downwards.
pub const TEXTURED_QUAD: [[f32; 5]; 6] = [
    [-1.0, -1.0, 0.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, 1.0, 1.0],
    [-1.0, 1.0, 0.0, 0.0, 0.0],
    [1.0, -1.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0, 0.0, 0.0],
];

/// Uploads [`TEXTURED_QUAD`] into a vertex buffer.
pub fn create_textured_quad(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&TEXTURED_QUAD),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textured_quad_maps_top_of_screen_to_top_of_image() {
        for [_, y, _, _, v] in TEXTURED_QUAD {
            if y > 0.0 {
                assert_eq!(v, 0.0);
            } else {
                assert_eq!(v, 1.0);
            }
        }
    }

    #[test]
    fn textured_quad_covers_every_ndc_corner() {
        for corner in [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]] {
            assert!(
                TEXTURED_QUAD
                    .iter()
                    .any(|vertex| vertex[0] == corner[0] && vertex[1] == corner[1])
            );
        }
    }
}
