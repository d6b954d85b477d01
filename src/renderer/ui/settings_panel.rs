//! Settings screen.
//!
//! The panel grows from the window centre while opening. Below
//! [`CONTENT_THRESHOLD`] only the empty shell is drawn; above it every item is placed with
//! [`MenuLayout::current_rect`], the same geometry the click handler tests against.

use crate::math::{Point, Rect};
use crate::menu::animation::CONTENT_THRESHOLD;
use crate::menu::layout::{MenuItem, MenuLayout, SLIDER_HANDLE_RADIUS, volume_fill_width};
use crate::menu::settings::SettingsValues;
use crate::renderer::canvas::{Canvas, TextAnchor};
use crate::renderer::color::{GOLD, NIGHT_BLUE, Rgba, WHITE};
use crate::renderer::ui::button::{Button, styles};
use crate::renderer::ui::{button_font, small_font, title_font};

pub const OVERLAY_COLOR: Rgba = Rgba::rgba(8, 8, 12, 180);
pub const PANEL_BORDER_COLOR: Rgba = Rgba::rgb(60, 40, 30);
pub const ITEM_COLOR: Rgba = Rgba::rgb(30, 40, 60);
pub const ITEM_HOVER_COLOR: Rgba = Rgba::rgb(70, 50, 120);
const VALUE_BOX_COLOR: Rgba = Rgba::rgb(40, 40, 40);
const TRACK_COLOR: Rgba = Rgba::rgb(80, 80, 80);
const HANDLE_COLOR: Rgba = Rgba::rgb(220, 180, 140);

const PANEL_BORDER_WIDTH: f32 = 3.0;
const PANEL_RADIUS: f32 = 12.0;
const TITLE_OFFSET: f32 = 30.0;

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

fn item_key(item: MenuItem) -> String {
    format!("item_{}", item.label().to_lowercase())
}

/// Draws the settings screen at animation `scale`.
pub fn draw_settings(
    canvas: &mut Canvas,
    layout: &MenuLayout,
    scale: f32,
    settings: &SettingsValues,
    pointer: Point,
) {
    canvas.draw_background();
    canvas.overlay(OVERLAY_COLOR);

    let panel = layout.panel_rect(scale);
    canvas.fill_bordered_rect(
        panel,
        NIGHT_BLUE,
        PANEL_BORDER_COLOR,
        PANEL_BORDER_WIDTH,
        PANEL_RADIUS,
    );
    if scale < CONTENT_THRESHOLD {
        return;
    }

    canvas.text(
        "settings_title",
        "SETTINGS",
        title_font(GOLD),
        Point::new((layout.width / 2.0).floor(), panel.top() + TITLE_OFFSET),
        TextAnchor::TopCenter,
    );

    for item in MenuItem::ALL {
        let rect = layout.item_rect(item, scale);
        let color = if rect.contains(pointer) {
            ITEM_HOVER_COLOR
        } else {
            ITEM_COLOR
        };
        canvas.fill_rounded_rect(rect, color, 8.0);
        canvas.text(
            item_key(item),
            item.label(),
            button_font(GOLD),
            Point::new(rect.left() + 12.0, rect.center_y()),
            TextAnchor::MidLeft,
        );

        match item {
            MenuItem::Sound => draw_sound_controls(canvas, layout, scale, settings),
            MenuItem::Graphics => {
                let value_box = layout.graphics_box_rect(scale);
                canvas.fill_rounded_rect(value_box, VALUE_BOX_COLOR, 6.0);
                canvas.text(
                    "graphics_value",
                    format!("Fullscreen: {}", on_off(settings.fullscreen())),
                    small_font(GOLD),
                    Point::new(value_box.left() + 10.0, value_box.center_y()),
                    TextAnchor::MidLeft,
                );
            }
            MenuItem::Controls => {
                draw_item_note(canvas, rect, 200.0, "controls_value", "View controls")
            }
            MenuItem::Language => {
                draw_item_note(canvas, rect, 300.0, "language_value", "English")
            }
        }
    }

    Button::new("back_button", "BACK", layout.back_rect(scale))
        .with_style(styles::back_button_style())
        .draw(canvas, pointer);
}

fn draw_sound_controls(
    canvas: &mut Canvas,
    layout: &MenuLayout,
    scale: f32,
    settings: &SettingsValues,
) {
    let toggle = layout.music_toggle_rect(scale);
    canvas.fill_rounded_rect(toggle, VALUE_BOX_COLOR, 6.0);
    canvas.text(
        "music_value",
        on_off(settings.music_on()),
        small_font(GOLD),
        toggle.center(),
        TextAnchor::Center,
    );

    let track = layout.volume_track_rect(scale);
    canvas.fill_rounded_rect(track, TRACK_COLOR, 8.0);
    let fill = volume_fill_width(settings.volume(), track);
    if fill > 0.0 {
        canvas.fill_rounded_rect(
            Rect::new(track.left(), track.top(), fill, track.height),
            GOLD,
            8.0,
        );
    }
    canvas.fill_circle(
        layout.volume_handle_center(settings.volume(), scale),
        SLIDER_HANDLE_RADIUS,
        HANDLE_COLOR,
    );
}

fn draw_item_note(canvas: &mut Canvas, item: Rect, offset: f32, key: &str, text: &str) {
    canvas.text(
        key,
        text,
        small_font(WHITE),
        Point::new(item.left() + offset, item.center_y()),
        TextAnchor::MidLeft,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> MenuLayout {
        MenuLayout::new(1920.0, 1080.0)
    }

    fn draw(scale: f32, settings: &SettingsValues, pointer: Point) -> Canvas {
        let mut canvas = Canvas::new(1920.0, 1080.0);
        draw_settings(&mut canvas, &layout(), scale, settings, pointer);
        canvas
    }

    fn text<'a>(canvas: &'a Canvas, key: &str) -> &'a str {
        canvas
            .find_text(key)
            .map(|t| t.text.as_str())
            .unwrap_or_default()
    }

    #[test]
    fn open_panel_draws_every_control() {
        let canvas = draw(1.0, &SettingsValues::new(false), Point::default());

        // overlay, border, panel, 4 items, music box, track, fill, handle, graphics box, back
        assert_eq!(canvas.rectangles().len(), 13);
        assert_eq!(canvas.rectangles()[0].color, OVERLAY_COLOR);
        assert_eq!(text(&canvas, "settings_title"), "SETTINGS");
        assert_eq!(text(&canvas, "music_value"), "ON");
        assert_eq!(text(&canvas, "graphics_value"), "Fullscreen: OFF");
        assert_eq!(text(&canvas, "controls_value"), "View controls");
        assert_eq!(text(&canvas, "language_value"), "English");
        assert_eq!(text(&canvas, "back_button"), "BACK");
    }

    #[test]
    fn title_sits_thirty_pixels_below_the_panel_top() {
        let canvas = draw(1.0, &SettingsValues::new(false), Point::default());

        let title = canvas.find_text("settings_title").expect("title drawn");
        assert_eq!(title.position, Point::new(960.0, 220.0));
    }

    #[test]
    fn hovered_item_is_highlighted() {
        let graphics = layout().item_rect(MenuItem::Graphics, 1.0);
        let canvas = draw(1.0, &SettingsValues::new(false), graphics.top_left());

        let item_colors: Vec<Rgba> = canvas
            .rectangles()
            .iter()
            .filter(|r| r.rect.width == 420.0)
            .map(|r| r.color)
            .collect();
        assert_eq!(
            item_colors,
            vec![ITEM_COLOR, ITEM_HOVER_COLOR, ITEM_COLOR, ITEM_COLOR]
        );
    }

    #[test]
    fn handle_follows_the_volume() {
        let mut settings = SettingsValues::new(true);
        settings.set_volume(50);
        let canvas = draw(1.0, &settings, Point::default());

        let handle = canvas
            .rectangles()
            .iter()
            .find(|r| r.color == HANDLE_COLOR)
            .expect("handle drawn");
        assert_eq!(handle.rect.center(), Point::new(1160.0, 345.0));
        assert_eq!(text(&canvas, "graphics_value"), "Fullscreen: ON");
    }

    #[test]
    fn zero_volume_draws_no_fill() {
        let mut settings = SettingsValues::new(false);
        settings.set_volume(0);
        let canvas = draw(1.0, &settings, Point::default());

        assert!(!canvas.rectangles().iter().any(|r| r.color == GOLD));
    }

    #[test]
    fn contents_appear_at_the_threshold() {
        let settings = SettingsValues::new(false);

        assert!(draw(0.29, &settings, Point::default()).texts().is_empty());
        assert!(!draw(0.3, &settings, Point::default()).texts().is_empty());
    }
}
