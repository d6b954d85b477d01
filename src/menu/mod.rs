//! Game of Exile menu shell.
//!
//! A main menu with Start/Exit/Settings buttons and an animated settings panel holding music,
//! volume and fullscreen settings. [`MenuShell`] owns all of it and is driven through the
//! [`Scene`] trait; its drawing lives in [`crate::renderer::ui`].
//!
//! # Input
//!
//! Only the left button interacts. In [`MenuMode::Settings`] clicks are ignored until the panel
//! is at least [`animation::CONTENT_THRESHOLD`] open, then hit-tested in a fixed order where the
//! first match wins: music toggle, volume track, Graphics, Controls, Language, Back.

pub mod animation;
pub mod layout;
pub mod settings;

use crate::app::{InputEvent, PointerButton, Scene, SceneCommand};
use crate::math::Point;
use crate::renderer::canvas::Canvas;
use crate::renderer::ui;
use animation::{PanelAnimation, PanelTransition};
use layout::{MenuItem, MenuLayout};
use settings::{SettingsValues, volume_at};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Which screen receives input and is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuMode {
    #[default]
    Main,
    Settings,
}

pub struct MenuShell {
    layout: MenuLayout,
    mode: MenuMode,
    panel: PanelAnimation,
    settings: SettingsValues,
    /// Set by a press on the volume track, cleared by the next left release.
    dragging_slider: bool,
}

impl MenuShell {
    /// A shell for a `width` × `height` window in main-menu mode.
    pub fn new(width: f32, height: f32, fullscreen: bool) -> Self {
        Self {
            layout: MenuLayout::new(width, height),
            mode: MenuMode::Main,
            panel: PanelAnimation::Closed,
            settings: SettingsValues::new(fullscreen),
            dragging_slider: false,
        }
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    pub fn panel(&self) -> PanelAnimation {
        self.panel
    }

    pub fn settings(&self) -> &SettingsValues {
        &self.settings
    }

    pub fn is_dragging_slider(&self) -> bool {
        self.dragging_slider
    }

    /// Left press at `position`.
    pub fn handle_pointer_down(&mut self, position: Point) -> SceneCommand {
        match self.mode {
            MenuMode::Main => self.handle_main_click(position),
            MenuMode::Settings => self.handle_settings_click(position),
        }
    }

    /// Left release: ends any slider drag.
    pub fn handle_pointer_up(&mut self) {
        if self.mode == MenuMode::Settings {
            self.dragging_slider = false;
        }
    }

    /// Pointer motion: drags the volume while a drag is active.
    pub fn handle_pointer_move(&mut self, position: Point) {
        if self.mode == MenuMode::Settings && self.dragging_slider {
            let track = self.layout.volume_track_rect(self.panel.scale());
            self.settings.set_volume(volume_at(position.x, track));
        }
    }

    /// Advances the panel animation; finishing a close returns to the main menu.
    pub fn update(&mut self, dt: Duration) {
        match self.panel.advance(dt) {
            Some(PanelTransition::Closed) => {
                self.mode = MenuMode::Main;
                self.dragging_slider = false;
                debug!("Settings panel closed");
            }
            Some(PanelTransition::Opened) => debug!("Settings panel open"),
            None => {}
        }
    }

    fn handle_main_click(&mut self, position: Point) -> SceneCommand {
        if self.layout.start_button.contains(position) {
            info!("Start button clicked");
        }
        if self.layout.exit_button.contains(position) {
            info!("Exit button clicked");
            return SceneCommand::Quit;
        }
        if self.layout.settings_button.contains(position) {
            self.open_settings();
        }
        SceneCommand::None
    }

    fn handle_settings_click(&mut self, position: Point) -> SceneCommand {
        if !self.panel.is_interactive() {
            return SceneCommand::None;
        }
        let scale = self.panel.scale();

        if self.layout.music_toggle_rect(scale).contains(position) {
            self.settings.toggle_music();
            return SceneCommand::None;
        }

        let track = self.layout.volume_track_rect(scale);
        if track.contains(position) {
            self.dragging_slider = true;
            self.settings.set_volume(volume_at(position.x, track));
            return SceneCommand::None;
        }

        if self.layout.item_rect(MenuItem::Graphics, scale).contains(position) {
            let fullscreen = self.settings.toggle_fullscreen();
            return SceneCommand::SetFullscreen(fullscreen);
        }

        for item in [MenuItem::Controls, MenuItem::Language] {
            if self.layout.item_rect(item, scale).contains(position) {
                info!(item = item.label(), "Placeholder item clicked");
                return SceneCommand::None;
            }
        }

        if self.layout.back_rect(scale).contains(position) {
            self.close_settings();
        }
        SceneCommand::None
    }

    fn open_settings(&mut self) {
        info!("Opening settings");
        self.mode = MenuMode::Settings;
        self.panel.open();
    }

    /// Starts the close animation; the mode stays `Settings` until the panel is fully closed.
    fn close_settings(&mut self) {
        info!("Closing settings");
        self.panel.close();
    }
}

impl Scene for MenuShell {
    fn handle_input(&mut self, event: &InputEvent, _now: Instant) -> SceneCommand {
        match *event {
            InputEvent::Quit => SceneCommand::Quit,
            InputEvent::PointerDown {
                position,
                button: PointerButton::Left,
            } => self.handle_pointer_down(position),
            InputEvent::PointerUp {
                button: PointerButton::Left,
                ..
            } => {
                self.handle_pointer_up();
                SceneCommand::None
            }
            InputEvent::PointerMove { position } => {
                self.handle_pointer_move(position);
                SceneCommand::None
            }
            InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } => SceneCommand::None,
        }
    }

    fn update(&mut self, dt: Duration, _now: Instant) {
        MenuShell::update(self, dt);
    }

    fn draw(&self, canvas: &mut Canvas, pointer: Point, _now: Instant) {
        match self.mode {
            MenuMode::Main => ui::main_menu::draw_main_menu(canvas, &self.layout, pointer),
            MenuMode::Settings => ui::settings_panel::draw_settings(
                canvas,
                &self.layout,
                self.panel.scale(),
                &self.settings,
                pointer,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;

    const FRAME: Duration = Duration::from_millis(16);

    fn shell() -> MenuShell {
        MenuShell::new(1920.0, 1080.0, false)
    }

    fn open_shell() -> MenuShell {
        let mut shell = shell();
        shell.open_settings();
        shell.update(Duration::from_secs(1));
        assert_eq!(shell.panel(), PanelAnimation::Open);
        shell
    }

    fn down(position: Point) -> InputEvent {
        InputEvent::PointerDown {
            position,
            button: PointerButton::Left,
        }
    }

    fn up(position: Point) -> InputEvent {
        InputEvent::PointerUp {
            position,
            button: PointerButton::Left,
        }
    }

    fn center(rect: Rect) -> Point {
        rect.center()
    }

    #[test]
    fn exit_button_quits() {
        let mut shell = shell();
        let exit = center(shell.layout().exit_button);

        assert_eq!(
            shell.handle_input(&down(exit), Instant::now()),
            SceneCommand::Quit
        );
    }

    #[test]
    fn window_close_quits_in_either_mode() {
        let mut shell = open_shell();
        assert_eq!(
            shell.handle_input(&InputEvent::Quit, Instant::now()),
            SceneCommand::Quit
        );
    }

    #[test]
    fn start_button_only_logs() {
        let mut shell = shell();
        let start = center(shell.layout().start_button);

        assert_eq!(shell.handle_pointer_down(start), SceneCommand::None);
        assert_eq!(shell.mode(), MenuMode::Main);
    }

    #[test]
    fn right_clicks_are_ignored_by_the_menu() {
        let mut shell = shell();
        let settings = center(shell.layout().settings_button);

        let command = shell.handle_input(
            &InputEvent::PointerDown {
                position: settings,
                button: PointerButton::Right,
            },
            Instant::now(),
        );

        assert_eq!(command, SceneCommand::None);
        assert_eq!(shell.mode(), MenuMode::Main);
    }

    #[test]
    fn settings_open_and_close_round_trip() {
        let now = Instant::now();
        let mut shell = shell();
        let settings_button = center(shell.layout().settings_button);

        shell.handle_input(&down(settings_button), now);
        assert_eq!(shell.mode(), MenuMode::Settings);
        assert_eq!(shell.panel(), PanelAnimation::Opening(0.0));

        let mut elapsed = Duration::ZERO;
        while shell.panel() != PanelAnimation::Open {
            shell.update(FRAME);
            elapsed += FRAME;
            assert!((0.0..=1.0).contains(&shell.panel().scale()));
        }
        // 1 / 6 s at 16 ms frames
        assert_eq!(elapsed, FRAME * 11);

        let back = center(shell.layout().back_rect(1.0));
        shell.handle_input(&down(back), now);
        assert!(matches!(shell.panel(), PanelAnimation::Closing(_)));

        while shell.panel() != PanelAnimation::Closed {
            assert_eq!(shell.mode(), MenuMode::Settings);
            shell.update(FRAME);
        }
        assert_eq!(shell.mode(), MenuMode::Main);
        assert_eq!(shell.panel().scale(), 0.0);
    }

    #[test]
    fn panel_contents_ignore_clicks_below_threshold() {
        let mut shell = shell();
        shell.open_settings();
        shell.update(Duration::from_millis(40));
        assert!(shell.panel().scale() < 0.3);

        let scale = shell.panel().scale();
        let before = shell.settings().clone();
        for target in [
            shell.layout().music_toggle_rect(scale),
            shell.layout().volume_track_rect(scale),
            shell.layout().item_rect(MenuItem::Graphics, scale),
            shell.layout().back_rect(scale),
        ] {
            assert_eq!(shell.handle_pointer_down(center(target)), SceneCommand::None);
        }

        assert_eq!(shell.settings(), &before);
        assert!(!shell.is_dragging_slider());
        assert!(matches!(shell.panel(), PanelAnimation::Opening(_)));
    }

    #[test]
    fn music_toggle_flips_music() {
        let mut shell = open_shell();
        let toggle = center(shell.layout().music_toggle_rect(1.0));

        shell.handle_pointer_down(toggle);
        assert!(!shell.settings().music_on());
        shell.handle_pointer_down(toggle);
        assert!(shell.settings().music_on());
    }

    #[test]
    fn graphics_item_toggles_fullscreen_anywhere_on_the_item() {
        let mut shell = open_shell();
        let graphics = shell.layout().item_rect(MenuItem::Graphics, 1.0);

        assert_eq!(
            shell.handle_pointer_down(graphics.top_left()),
            SceneCommand::SetFullscreen(true)
        );
        assert_eq!(
            shell.handle_pointer_down(center(graphics)),
            SceneCommand::SetFullscreen(false)
        );
        assert!(!shell.settings().fullscreen());
    }

    #[test]
    fn placeholder_items_change_nothing() {
        let mut shell = open_shell();
        let before = shell.settings().clone();

        for item in [MenuItem::Controls, MenuItem::Language, MenuItem::Sound] {
            let rect = shell.layout().item_rect(item, 1.0);
            assert_eq!(shell.handle_pointer_down(rect.top_left()), SceneCommand::None);
        }

        assert_eq!(shell.settings(), &before);
        assert_eq!(shell.panel(), PanelAnimation::Open);
    }

    #[test]
    fn clicking_outside_everything_keeps_the_panel_open() {
        let mut shell = open_shell();
        shell.handle_pointer_down(Point::new(5.0, 5.0));
        assert_eq!(shell.panel(), PanelAnimation::Open);
        assert_eq!(shell.mode(), MenuMode::Settings);
    }

    #[test]
    fn volume_drag_to_the_right_edge_reads_full_and_release_ends_it() {
        let now = Instant::now();
        let mut shell = open_shell();
        let track = shell.layout().volume_track_rect(1.0);

        shell.handle_input(&down(track.center()), now);
        assert!(shell.is_dragging_slider());
        assert_eq!(shell.settings().volume(), 50);

        shell.handle_input(
            &InputEvent::PointerMove {
                position: Point::new(track.right(), track.center_y()),
            },
            now,
        );
        assert_eq!(shell.settings().volume(), 100);

        shell.handle_input(&up(Point::new(track.right(), track.center_y())), now);
        assert!(!shell.is_dragging_slider());

        shell.handle_input(
            &InputEvent::PointerMove {
                position: Point::new(track.left(), track.center_y()),
            },
            now,
        );
        assert_eq!(shell.settings().volume(), 100);
    }

    #[test]
    fn dragging_past_the_left_edge_saturates_at_zero() {
        let mut shell = open_shell();
        let track = shell.layout().volume_track_rect(1.0);

        shell.handle_pointer_down(track.center());
        shell.handle_pointer_move(Point::new(track.left() - 400.0, 0.0));

        assert_eq!(shell.settings().volume(), 0);
    }

    #[test]
    fn moving_without_a_drag_leaves_volume_alone() {
        let mut shell = open_shell();
        let track = shell.layout().volume_track_rect(1.0);

        shell.handle_pointer_move(track.center());

        assert_eq!(shell.settings().volume(), settings::DEFAULT_VOLUME);
    }

    #[test]
    fn main_menu_draws_title_and_three_buttons() {
        let shell = shell();
        let mut canvas = Canvas::new(1920.0, 1080.0);

        shell.draw(&mut canvas, Point::default(), Instant::now());

        assert!(canvas.has_background());
        assert_eq!(canvas.rectangles().len(), 3);
        assert_eq!(
            canvas.find_text("menu_title").map(|t| t.text.as_str()),
            Some("GAME OF EXILE")
        );
    }

    #[test]
    fn small_panel_is_drawn_as_an_empty_shell() {
        let mut shell = shell();
        shell.open_settings();
        let mut canvas = Canvas::new(1920.0, 1080.0);

        shell.draw(&mut canvas, Point::default(), Instant::now());

        assert!(canvas.texts().is_empty());
        // overlay, panel border, panel fill
        assert_eq!(canvas.rectangles().len(), 3);
    }
}
