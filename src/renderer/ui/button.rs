//! # Button Module
//!
//! Rounded, labelled buttons whose fill swaps to a hover colour while the pointer is over them.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use exile::math::{Point, Rect};
//! use exile::renderer::canvas::Canvas;
//! use exile::renderer::ui::button::{Button, styles};
//!
//! let mut canvas = Canvas::new(800.0, 600.0);
//! let start = Button::new("start_button", "START", Rect::new(250.0, 260.0, 300.0, 80.0))
//!     .with_style(styles::start_button_style());
//! start.draw(&mut canvas, Point::new(300.0, 300.0));
//! ```

use crate::math::{Point, Rect};
use crate::renderer::canvas::{Canvas, TextAnchor};
use crate::renderer::color::{GOLD, Rgba};
use crate::renderer::text::TextStyle;
use crate::renderer::ui::button_font;

/// Visual configuration of a button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    /// Fill in the normal state
    pub background_color: Rgba,

    /// Fill while the pointer is over the button
    pub hover_color: Rgba,

    /// Radius of rounded corners in pixels (0.0 = square corners)
    pub corner_radius: f32,

    /// Label styling
    pub text_style: TextStyle,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background_color: Rgba::rgb(55, 65, 81),
            hover_color: Rgba::rgb(71, 85, 105),
            corner_radius: 8.0,
            text_style: button_font(GOLD),
        }
    }
}

/// Interaction state, derived from the pointer position every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hover,
}

/// A button with a centred label.
#[derive(Debug, Clone)]
pub struct Button {
    /// Text key, unique per frame
    pub key: String,
    pub label: String,
    pub rect: Rect,
    pub style: ButtonStyle,
}

impl Button {
    pub fn new(key: impl Into<String>, label: impl Into<String>, rect: Rect) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            rect,
            style: ButtonStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// `Hover` while `pointer` is inside the rectangle, edges included.
    pub fn state(&self, pointer: Point) -> ButtonState {
        if self.rect.contains(pointer) {
            ButtonState::Hover
        } else {
            ButtonState::Normal
        }
    }

    pub fn fill_color(&self, pointer: Point) -> Rgba {
        match self.state(pointer) {
            ButtonState::Normal => self.style.background_color,
            ButtonState::Hover => self.style.hover_color,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, pointer: Point) {
        canvas.fill_rounded_rect(self.rect, self.fill_color(pointer), self.style.corner_radius);
        canvas.text(
            self.key.clone(),
            self.label.clone(),
            self.style.text_style.clone(),
            self.rect.center(),
            TextAnchor::Center,
        );
    }
}

/// Predefined button styles of the menu.
pub mod styles {
    use super::ButtonStyle;
    use crate::renderer::color::{BROWN, DARK_RED, GOLD, NIGHT_BLUE, Rgba};
    use crate::renderer::ui::button_font;

    fn style(background_color: Rgba, hover_color: Rgba) -> ButtonStyle {
        ButtonStyle {
            background_color,
            hover_color,
            corner_radius: 8.0,
            text_style: button_font(GOLD),
        }
    }

    pub fn start_button_style() -> ButtonStyle {
        style(BROWN, Rgba::rgb(180, 140, 90))
    }

    pub fn exit_button_style() -> ButtonStyle {
        style(DARK_RED, Rgba::rgb(180, 50, 50))
    }

    pub fn settings_button_style() -> ButtonStyle {
        style(NIGHT_BLUE, Rgba::rgb(30, 60, 120))
    }

    pub fn back_button_style() -> ButtonStyle {
        style(Rgba::rgb(90, 40, 10), Rgba::rgb(140, 80, 30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Button {
        Button::new("start", "START", Rect::new(10.0, 10.0, 100.0, 40.0))
            .with_style(styles::start_button_style())
    }

    #[test]
    fn hover_is_inclusive_of_the_edges() {
        let button = start();

        assert_eq!(button.state(Point::new(10.0, 10.0)), ButtonState::Hover);
        assert_eq!(button.state(Point::new(110.0, 50.0)), ButtonState::Hover);
        assert_eq!(button.state(Point::new(111.0, 50.0)), ButtonState::Normal);
    }

    #[test]
    fn draw_swaps_the_fill_on_hover() {
        let button = start();
        let mut canvas = Canvas::new(200.0, 100.0);

        button.draw(&mut canvas, Point::new(0.0, 0.0));
        button.draw(&mut canvas, Point::new(50.0, 30.0));

        let [normal, hover] = canvas.rectangles() else {
            panic!("expected two rectangles");
        };
        assert_eq!(normal.color, button.style.background_color);
        assert_eq!(hover.color, Rgba::rgb(180, 140, 90));
        assert_eq!(normal.corner_radius, 8.0);
    }

    #[test]
    fn label_is_centred_on_the_button() {
        let button = start();
        let mut canvas = Canvas::new(200.0, 100.0);

        button.draw(&mut canvas, Point::default());

        let label = canvas.find_text("start").expect("label drawn");
        assert_eq!(label.text, "START");
        assert_eq!(label.position, Point::new(60.0, 30.0));
        assert_eq!(label.anchor, TextAnchor::Center);
    }
}
