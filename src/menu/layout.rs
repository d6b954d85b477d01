//! Menu geometry.
//!
//! Every rectangle is derived from the window size once, in its nominal (fully open) position.
//! While the settings panel animates, its contents are moved along with the panel's top-left
//! corner by [`MenuLayout::current_rect`]; drawing and hit-testing both go through it.

use crate::math::{Point, Rect};

pub const PANEL_WIDTH: f32 = 900.0;
pub const PANEL_HEIGHT: f32 = 700.0;
/// Smallest edge the animated panel is drawn with.
pub const PANEL_MIN_SIZE: f32 = 10.0;

const ITEM_WIDTH: f32 = 420.0;
const ITEM_HEIGHT: f32 = 70.0;
const ITEM_GAP: f32 = 24.0;
const ITEM_LEFT_PADDING: f32 = 70.0;
const ITEMS_TOP_OFFSET: f32 = 120.0;

pub const SLIDER_HANDLE_RADIUS: f32 = 12.0;

/// Entries of the settings list, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Sound,
    Graphics,
    Controls,
    Language,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Sound,
        MenuItem::Graphics,
        MenuItem::Controls,
        MenuItem::Language,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Sound => "Sound",
            MenuItem::Graphics => "Graphics",
            MenuItem::Controls => "Controls",
            MenuItem::Language => "Language",
        }
    }

    fn index(self) -> usize {
        match self {
            MenuItem::Sound => 0,
            MenuItem::Graphics => 1,
            MenuItem::Controls => 2,
            MenuItem::Language => 3,
        }
    }
}

/// Nominal rectangles of the main menu and the fully open settings panel.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    pub width: f32,
    pub height: f32,
    pub start_button: Rect,
    pub exit_button: Rect,
    pub settings_button: Rect,
    pub panel: Rect,
    pub items: [Rect; 4],
    pub back_button: Rect,
    pub volume_track: Rect,
}

/// Integer halving, so odd sizes centre the same way on every frame.
fn half(value: f32) -> f32 {
    (value / 2.0).floor()
}

impl MenuLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let panel = Rect::new(
            half(width - PANEL_WIDTH),
            half(height - PANEL_HEIGHT),
            PANEL_WIDTH,
            PANEL_HEIGHT,
        );

        let left_x = panel.left() + ITEM_LEFT_PADDING;
        let items = MenuItem::ALL.map(|item| {
            Rect::new(
                left_x,
                panel.top() + ITEMS_TOP_OFFSET + item.index() as f32 * (ITEM_HEIGHT + ITEM_GAP),
                ITEM_WIDTH,
                ITEM_HEIGHT,
            )
        });
        let sound = items[MenuItem::Sound.index()];

        Self {
            width,
            height,
            start_button: Rect::new(half(width) - 150.0, half(height) - 50.0, 300.0, 80.0),
            exit_button: Rect::new(50.0, 50.0, 200.0, 60.0),
            settings_button: Rect::new(width - 300.0, 50.0, 230.0, 60.0),
            panel,
            items,
            back_button: Rect::new(panel.right() - 220.0, panel.bottom() - 100.0, 180.0, 60.0),
            volume_track: Rect::new(left_x + 430.0, sound.center_y() - 8.0, 300.0, 16.0),
        }
    }

    /// The panel at animation `scale`: nominal size scaled and floored, at least
    /// [`PANEL_MIN_SIZE`], centred in the window.
    pub fn panel_rect(&self, scale: f32) -> Rect {
        let scale = scale.clamp(0.0, 1.0);
        let width = (self.panel.width * scale).floor().max(PANEL_MIN_SIZE);
        let height = (self.panel.height * scale).floor().max(PANEL_MIN_SIZE);
        Rect::new(
            half(self.width) - half(width),
            half(self.height) - half(height),
            width,
            height,
        )
    }

    /// Moves a nominal panel-content rectangle along with the animated panel's top-left corner.
    pub fn current_rect(&self, nominal: Rect, scale: f32) -> Rect {
        let panel = self.panel_rect(scale);
        nominal.translate(
            panel.left() - self.panel.left(),
            panel.top() - self.panel.top(),
        )
    }

    pub fn item_rect(&self, item: MenuItem, scale: f32) -> Rect {
        self.current_rect(self.items[item.index()], scale)
    }

    pub fn back_rect(&self, scale: f32) -> Rect {
        self.current_rect(self.back_button, scale)
    }

    pub fn volume_track_rect(&self, scale: f32) -> Rect {
        self.current_rect(self.volume_track, scale)
    }

    /// ON/OFF box at the right end of the Sound item.
    pub fn music_toggle_rect(&self, scale: f32) -> Rect {
        let sound = self.item_rect(MenuItem::Sound, scale);
        Rect::new(sound.right() - 140.0, sound.center_y() - 20.0, 120.0, 40.0)
    }

    /// Fullscreen indicator box drawn over the right end of the Graphics item.
    pub fn graphics_box_rect(&self, scale: f32) -> Rect {
        let graphics = self.item_rect(MenuItem::Graphics, scale);
        Rect::new(graphics.right() - 215.0, graphics.center_y() - 20.0, 220.0, 40.0)
    }

    /// Centre of the volume handle for `volume` in 0..=100.
    pub fn volume_handle_center(&self, volume: u8, scale: f32) -> Point {
        let track = self.volume_track_rect(scale);
        Point::new(track.left() + volume_fill_width(volume, track), track.center_y())
    }
}

/// Width of the filled part of `track` for `volume`, truncated to whole pixels.
pub fn volume_fill_width(volume: u8, track: Rect) -> f32 {
    (f32::from(volume.min(100)) / 100.0 * track.width).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd() -> MenuLayout {
        MenuLayout::new(1920.0, 1080.0)
    }

    #[test]
    fn nominal_geometry_matches_the_full_hd_menu() {
        let layout = full_hd();

        assert_eq!(layout.start_button, Rect::new(810.0, 490.0, 300.0, 80.0));
        assert_eq!(layout.settings_button, Rect::new(1620.0, 50.0, 230.0, 60.0));
        assert_eq!(layout.panel, Rect::new(510.0, 190.0, 900.0, 700.0));
        assert_eq!(layout.items[0], Rect::new(580.0, 310.0, 420.0, 70.0));
        assert_eq!(layout.items[3], Rect::new(580.0, 592.0, 420.0, 70.0));
        assert_eq!(layout.back_button, Rect::new(1190.0, 790.0, 180.0, 60.0));
        assert_eq!(layout.volume_track, Rect::new(1010.0, 337.0, 300.0, 16.0));
    }

    #[test]
    fn fully_open_panel_is_the_nominal_panel() {
        let layout = full_hd();

        assert_eq!(layout.panel_rect(1.0), layout.panel);
        assert_eq!(layout.back_rect(1.0), layout.back_button);
    }

    #[test]
    fn closed_panel_keeps_a_minimum_size() {
        let panel = full_hd().panel_rect(0.0);

        assert_eq!((panel.width, panel.height), (10.0, 10.0));
        assert_eq!(panel.center(), Point::new(960.0, 540.0));
    }

    #[test]
    fn contents_follow_the_panel_top_left() {
        let layout = full_hd();
        let panel = layout.panel_rect(0.5);
        let item = layout.item_rect(MenuItem::Graphics, 0.5);

        assert_eq!(panel, Rect::new(735.0, 365.0, 450.0, 350.0));
        assert_eq!(item.left() - panel.left(), layout.items[1].left() - layout.panel.left());
        assert_eq!(item.top() - panel.top(), layout.items[1].top() - layout.panel.top());
        assert_eq!((item.width, item.height), (420.0, 70.0));
    }

    #[test]
    fn music_toggle_sits_inside_the_sound_item() {
        let layout = full_hd();
        let sound = layout.item_rect(MenuItem::Sound, 1.0);
        let toggle = layout.music_toggle_rect(1.0);

        assert_eq!(toggle, Rect::new(860.0, 325.0, 120.0, 40.0));
        assert!(sound.contains(toggle.top_left()));
    }

    #[test]
    fn fill_width_is_proportional_and_truncated() {
        let track = Rect::new(0.0, 0.0, 300.0, 16.0);

        assert_eq!(volume_fill_width(0, track), 0.0);
        assert_eq!(volume_fill_width(80, track), 240.0);
        assert_eq!(volume_fill_width(33, track), 99.0);
        assert_eq!(volume_fill_width(100, track), 300.0);
    }
}
