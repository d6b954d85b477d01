//! Main menu screen: background, title and the three top-level buttons.

use crate::math::Point;
use crate::menu::layout::MenuLayout;
use crate::renderer::canvas::{Canvas, TextAnchor};
use crate::renderer::color::GOLD;
use crate::renderer::ui::button::{Button, styles};
use crate::renderer::ui::title_font;

pub const TITLE_TOP: f32 = 80.0;

/// The three main menu buttons, in draw order.
pub fn main_menu_buttons(layout: &MenuLayout) -> [Button; 3] {
    [
        Button::new("start_button", "START", layout.start_button)
            .with_style(styles::start_button_style()),
        Button::new("exit_button", "EXIT", layout.exit_button)
            .with_style(styles::exit_button_style()),
        Button::new("settings_button", "SETTINGS", layout.settings_button)
            .with_style(styles::settings_button_style()),
    ]
}

pub fn draw_main_menu(canvas: &mut Canvas, layout: &MenuLayout, pointer: Point) {
    canvas.draw_background();
    canvas.text(
        "menu_title",
        "GAME OF EXILE",
        title_font(GOLD),
        Point::new((layout.width / 2.0).floor(), TITLE_TOP),
        TextAnchor::TopCenter,
    );

    for button in main_menu_buttons(layout) {
        button.draw(canvas, pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::{BROWN, DARK_RED, Rgba};

    #[test]
    fn title_is_centred_at_the_top() {
        let layout = MenuLayout::new(1920.0, 1080.0);
        let mut canvas = Canvas::new(1920.0, 1080.0);

        draw_main_menu(&mut canvas, &layout, Point::default());

        let title = canvas.find_text("menu_title").expect("title drawn");
        assert_eq!(title.position, Point::new(960.0, 80.0));
        assert_eq!(title.anchor, TextAnchor::TopCenter);
        assert_eq!(title.style.font_size, 72.0);
    }

    #[test]
    fn only_the_hovered_button_changes_colour() {
        let layout = MenuLayout::new(1920.0, 1080.0);
        let mut canvas = Canvas::new(1920.0, 1080.0);

        draw_main_menu(&mut canvas, &layout, layout.exit_button.center());

        let colors: Vec<Rgba> = canvas.rectangles().iter().map(|r| r.color).collect();
        assert_eq!(colors[0], BROWN);
        assert_eq!(colors[1], Rgba::rgb(180, 50, 50));
        assert_ne!(colors[1], DARK_RED);
        assert_eq!(
            canvas.find_text("settings_button").map(|t| t.text.as_str()),
            Some("SETTINGS")
        );
    }
}
