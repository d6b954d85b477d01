//! Frame description shared by the scenes and the GPU renderer.
//!
//! A [`Canvas`] is plain data: scenes fill one per frame with rectangles and text in logical
//! coordinates, and [`crate::renderer::wgpu_lib::WgpuRenderer`] turns it into draw calls. Because
//! nothing here touches the GPU, scene drawing code is exercised directly by unit tests.
//!
//! ## Layering
//!
//! 1. Clear colour
//! 2. Background image (when requested)
//! 3. Rectangles, in insertion order
//! 4. Text, on top of all rectangles

use crate::math::{Point, Rect};
use crate::renderer::color::Rgba;
use crate::renderer::text::TextStyle;

/// A filled, optionally rounded rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledRect {
    pub rect: Rect,
    pub color: Rgba,
    pub corner_radius: f32,
}

/// Which point of the laid-out text `TextItem::position` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    TopLeft,
    /// Horizontally centred, top edge at `position.y`.
    TopCenter,
    /// Left edge at `position.x`, vertically centred.
    MidLeft,
    Center,
}

/// A run of text to draw this frame.
///
/// `key` identifies the text across frames so the renderer can reuse its shaped buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub key: String,
    pub text: String,
    pub style: TextStyle,
    pub position: Point,
    pub anchor: TextAnchor,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f32,
    height: f32,
    clear_color: Rgba,
    background: bool,
    rectangles: Vec<FilledRect>,
    texts: Vec<TextItem>,
}

impl Canvas {
    /// Creates an empty canvas for a logical surface of `width` × `height` pixels.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            clear_color: crate::renderer::color::BLACK,
            background: false,
            rectangles: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Empties the canvas for the next frame, keeping its allocations.
    pub fn reset(&mut self) {
        self.clear_color = crate::renderer::color::BLACK;
        self.background = false;
        self.rectangles.clear();
        self.texts.clear();
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Fills the whole surface with `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.clear_color = color;
    }

    /// Stretches the loaded background image over the whole surface.
    pub fn draw_background(&mut self) {
        self.background = true;
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.fill_rounded_rect(rect, color, 0.0);
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, color: Rgba, corner_radius: f32) {
        self.rectangles.push(FilledRect {
            rect,
            color,
            corner_radius,
        });
    }

    /// Draws a rounded rectangle with a `border_width` outline in `border`.
    pub fn fill_bordered_rect(
        &mut self,
        rect: Rect,
        fill: Rgba,
        border: Rgba,
        border_width: f32,
        corner_radius: f32,
    ) {
        self.fill_rounded_rect(rect, border, corner_radius);
        self.fill_rounded_rect(
            rect.inset(border_width),
            fill,
            (corner_radius - border_width).max(0.0),
        );
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.fill_rounded_rect(
            Rect::centered_at(center, radius * 2.0, radius * 2.0),
            color,
            radius,
        );
    }

    /// Blends `color` over everything drawn so far.
    pub fn overlay(&mut self, color: Rgba) {
        self.fill_rect(self.bounds(), color);
    }

    pub fn text(
        &mut self,
        key: impl Into<String>,
        text: impl Into<String>,
        style: TextStyle,
        position: Point,
        anchor: TextAnchor,
    ) {
        self.texts.push(TextItem {
            key: key.into(),
            text: text.into(),
            style,
            position,
            anchor,
        });
    }

    pub fn clear_color(&self) -> Rgba {
        self.clear_color
    }

    pub fn has_background(&self) -> bool {
        self.background
    }

    pub fn rectangles(&self) -> &[FilledRect] {
        &self.rectangles
    }

    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }

    /// Looks up a text item drawn this frame by key.
    pub fn find_text(&self, key: &str) -> Option<&TextItem> {
        self.texts.iter().find(|item| item.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::{GOLD, WHITE};

    #[test]
    fn circle_is_a_fully_rounded_square() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.fill_circle(Point::new(50.0, 40.0), 12.0, GOLD);

        let circle = &canvas.rectangles()[0];
        assert_eq!(circle.rect, Rect::new(38.0, 28.0, 24.0, 24.0));
        assert_eq!(circle.corner_radius, 12.0);
    }

    #[test]
    fn bordered_rect_draws_border_then_fill() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.fill_bordered_rect(Rect::new(0.0, 0.0, 20.0, 20.0), WHITE, GOLD, 3.0, 12.0);

        let [border, fill] = canvas.rectangles() else {
            panic!("expected two rectangles");
        };
        assert_eq!(border.color, GOLD);
        assert_eq!(fill.rect, Rect::new(3.0, 3.0, 14.0, 14.0));
        assert_eq!(fill.corner_radius, 9.0);
    }

    #[test]
    fn reset_forgets_the_previous_frame() {
        let mut canvas = Canvas::new(10.0, 10.0);
        canvas.clear(WHITE);
        canvas.draw_background();
        canvas.overlay(GOLD);
        canvas.text("a", "b", TextStyle::default(), Point::default(), TextAnchor::TopLeft);

        canvas.reset();

        assert!(!canvas.has_background());
        assert!(canvas.rectangles().is_empty());
        assert!(canvas.texts().is_empty());
        assert_ne!(canvas.clear_color(), WHITE);
    }
}
