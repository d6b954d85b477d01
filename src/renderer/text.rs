use crate::math::Point;
use crate::renderer::canvas::{TextAnchor, TextItem};
use crate::renderer::color::Rgba;
use glyphon::{
    Attrs, Buffer, Cache, Color, Family, FontSystem, Metrics, Resolution, Shaping, Style,
    SwashCache, TextArea, TextAtlas, TextBounds, TextRenderer as GlyphonTextRenderer, Viewport,
    Weight,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use wgpu::{Device, MultisampleState, Queue, RenderPass};

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f32,
    pub line_height: f32,
    pub color: Color,
    pub weight: Weight,
    pub style: Style,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 16.0,
            line_height: 20.0,
            color: Color::rgb(255, 255, 255),
            weight: Weight::NORMAL,
            style: Style::Normal,
        }
    }
}

impl TextStyle {
    /// Serif text at `font_size`, with a line height of 1.25× the size.
    pub fn serif(font_size: f32, bold: bool, color: Rgba) -> Self {
        Self {
            font_family: "serif".to_string(),
            font_size,
            line_height: (font_size * 1.25).round(),
            color: color.to_text_color(),
            weight: if bold { Weight::BOLD } else { Weight::NORMAL },
            style: Style::Normal,
        }
    }

    /// Default UI face (sans-serif, regular weight).
    pub fn sans(font_size: f32, color: Rgba) -> Self {
        Self {
            font_size,
            line_height: (font_size * 1.25).round(),
            color: color.to_text_color(),
            ..Self::default()
        }
    }

    /// Generic family names map to the font database's generic families; anything else is
    /// looked up by name.
    fn family(&self) -> Family<'_> {
        match self.font_family.as_str() {
            "serif" => Family::Serif,
            "sans-serif" => Family::SansSerif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        }
    }

    fn attrs(&self) -> Attrs<'_> {
        Attrs::new()
            .family(self.family())
            .weight(self.weight)
            .style(self.style)
    }
}

#[derive(Debug)]
pub struct TextBuffer {
    pub buffer: Buffer,
    pub style: TextStyle,
    pub position: Point,
    pub visible: bool,
    pub text_content: String,
}

impl TextBuffer {
    /// Laid-out size in logical pixels: widest line by total line height.
    fn measure(&self) -> (f32, f32) {
        self.buffer
            .layout_runs()
            .fold((0.0_f32, 0.0_f32), |(width, height), run| {
                (width.max(run.line_w), height + run.line_height)
            })
    }
}

/// Positions a block of `width` × `height` so that `anchor` lands on `position`.
pub fn anchored_top_left(position: Point, anchor: TextAnchor, width: f32, height: f32) -> Point {
    match anchor {
        TextAnchor::TopLeft => position,
        TextAnchor::TopCenter => Point::new(position.x - width / 2.0, position.y),
        TextAnchor::MidLeft => Point::new(position.x, position.y - height / 2.0),
        TextAnchor::Center => Point::new(position.x - width / 2.0, position.y - height / 2.0),
    }
}

/// `.ttf` and `.otf` files, any case.
fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf"))
}

pub struct TextRenderer {
    pub font_system: FontSystem,
    pub swash_cache: SwashCache,
    pub viewport: Viewport,
    pub atlas: TextAtlas,
    pub text_renderer: GlyphonTextRenderer,
    pub text_buffers: HashMap<String, TextBuffer>,
}

impl TextRenderer {
    pub fn new(device: &Device, queue: &Queue, surface_format: wgpu::TextureFormat) -> Self {
        let font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let viewport = Viewport::new(device, &cache);
        let mut atlas = TextAtlas::new(device, queue, &cache, surface_format);
        let text_renderer =
            GlyphonTextRenderer::new(&mut atlas, device, MultisampleState::default(), None);

        Self {
            font_system,
            swash_cache,
            viewport,
            atlas,
            text_renderer,
            text_buffers: HashMap::new(),
        }
    }

    /// Registers every `.ttf`/`.otf` file in `dir`. A missing directory is not an error; the font
    /// system falls back to the system fonts.
    pub fn load_fonts_dir(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "No bundled fonts, using system fonts");
                return;
            }
        };

        for path in entries.filter_map(|entry| entry.ok().map(|e| e.path())) {
            if !is_font_file(&path) {
                continue;
            }
            if let Err(e) = self.load_font(&path) {
                warn!(path = %path.display(), error = %e, "Failed to load font");
            }
        }
    }

    /// Load a font from a file path and register it with the font system
    pub fn load_font(&mut self, font_path: &Path) -> Result<(), std::io::Error> {
        let font_data = fs::read(font_path)?;
        self.font_system.db_mut().load_font_data(font_data);
        let name = font_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(font = %name, "Loaded font");
        Ok(())
    }

    /// Create or update the buffer for `item` and mark it visible for this frame
    fn sync_item(&mut self, item: &TextItem) {
        let font_system = &mut self.font_system;
        let text_buffer = self
            .text_buffers
            .entry(item.key.clone())
            .or_insert_with(|| {
                let metrics = Metrics::new(item.style.font_size, item.style.line_height);
                let mut buffer = Buffer::new(font_system, metrics);
                buffer.set_size(font_system, None, None);
                buffer.set_text(font_system, &item.text, item.style.attrs(), Shaping::Advanced);
                buffer.shape_until_scroll(font_system, false);
                TextBuffer {
                    buffer,
                    style: item.style.clone(),
                    position: item.position,
                    visible: true,
                    text_content: item.text.clone(),
                }
            });

        if text_buffer.style != item.style {
            if text_buffer.style.font_size != item.style.font_size
                || text_buffer.style.line_height != item.style.line_height
            {
                let metrics = Metrics::new(item.style.font_size, item.style.line_height);
                text_buffer.buffer.set_metrics(font_system, metrics);
            }
            text_buffer.style = item.style.clone();
            text_buffer.text_content.clear();
        }

        if text_buffer.text_content != item.text {
            text_buffer.buffer.set_text(
                font_system,
                &item.text,
                text_buffer.style.attrs(),
                Shaping::Advanced,
            );
            text_buffer.buffer.shape_until_scroll(font_system, false);
            text_buffer.text_content = item.text.clone();
        }

        let (width, height) = text_buffer.measure();
        text_buffer.position = anchored_top_left(item.position, item.anchor, width, height);
        text_buffer.visible = true;
    }

    /// Resize the viewport
    pub fn resize(&mut self, queue: &Queue, resolution: Resolution) {
        self.viewport.update(queue, resolution);
    }

    /// Prepare this frame's text. `scale` converts logical canvas pixels to surface pixels per
    /// axis; glyphs are scaled uniformly by the smaller of the two.
    pub fn prepare(
        &mut self,
        device: &Device,
        queue: &Queue,
        items: &[TextItem],
        scale: (f32, f32),
        surface_size: (u32, u32),
    ) -> Result<(), glyphon::PrepareError> {
        for buffer in self.text_buffers.values_mut() {
            buffer.visible = false;
        }
        for item in items {
            self.sync_item(item);
        }

        let (scale_x, scale_y) = scale;
        let glyph_scale = scale_x.min(scale_y);
        let bounds = TextBounds {
            left: 0,
            top: 0,
            right: surface_size.0 as i32,
            bottom: surface_size.1 as i32,
        };
        let text_areas: Vec<TextArea> = self
            .text_buffers
            .values()
            .filter(|buffer| buffer.visible)
            .map(|buffer| TextArea {
                buffer: &buffer.buffer,
                left: buffer.position.x * scale_x,
                top: buffer.position.y * scale_y,
                scale: glyph_scale,
                bounds,
                default_color: buffer.style.color,
                custom_glyphs: &[],
            })
            .collect();

        self.text_renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            text_areas,
            &mut self.swash_cache,
        )
    }

    /// Render all visible text buffers
    pub fn render(&self, render_pass: &mut RenderPass) -> Result<(), glyphon::RenderError> {
        self.text_renderer
            .render(&self.atlas, &self.viewport, render_pass)
    }

    /// Trim the atlas to free up unused space
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}
