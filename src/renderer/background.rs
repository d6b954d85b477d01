use crate::renderer::pipeline_builder::{
    BindGroupLayoutBuilder, PipelineBuilder, create_textured_quad,
};
use image::RgbaImage;
use wgpu;

/// Draws a decoded image stretched over the whole surface.
pub struct BackgroundRenderer {
    pipeline: wgpu::RenderPipeline,
    /// Fullscreen quad geometry.
    vertex_buffer: wgpu::Buffer,
    /// Texture view and sampler.
    bind_group: wgpu::BindGroup,
}

impl BackgroundRenderer {
    /// Uploads `image` and builds the textured-quad pipeline.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        image: &RgbaImage,
    ) -> Self {
        let texture = Self::upload_texture(device, queue, image);

        let bind_group_layout = BindGroupLayoutBuilder::new(device)
            .with_label("Background Bind Group Layout")
            .with_texture(0, wgpu::ShaderStages::FRAGMENT)
            .with_sampler(1, wgpu::ShaderStages::FRAGMENT)
            .build();

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
            label: Some("Background Bind Group"),
        });

        // position (x, y, z) + tex_coords (u, v)
        let vertex_buffer_layout = wgpu::VertexBufferLayout {
            array_stride: 5 * 4,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 3 * 4,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        };

        let pipeline =
            PipelineBuilder::new(device, surface_format, include_str!("shaders/background.wgsl"))
                .with_label("Background Pipeline")
                .with_vertex_buffer(vertex_buffer_layout)
                .with_bind_group_layout(&bind_group_layout)
                .build();

        let vertex_buffer = create_textured_quad(device, "Background Quad Vertex Buffer");

        Self {
            pipeline,
            vertex_buffer,
            bind_group,
        }
    }

    fn upload_texture(device: &wgpu::Device, queue: &wgpu::Queue, image: &RgbaImage) -> wgpu::Texture {
        let (width, height) = image.dimensions();
        let texture_size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Background Texture"),
            size: texture_size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            image,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            texture_size,
        );

        texture
    }

    pub fn render(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.draw(0..6, 0..1);
    }
}
