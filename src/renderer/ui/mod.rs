//! User interface module.
//!
//! Draws the Game of Exile menu screens onto a [`crate::renderer::canvas::Canvas`]:
//!
//! - `button`: hover-aware labelled buttons and the menu's button styles
//! - `main_menu`: title screen with Start, Exit and Settings
//! - `settings_panel`: dimmed backdrop and the animated settings panel

/// Button UI components and styles.
pub mod button;
/// Main menu screen.
pub mod main_menu;
/// Settings panel screen.
pub mod settings_panel;

use crate::renderer::color::Rgba;
use crate::renderer::text::TextStyle;

/// 72 pt bold serif, used for screen titles.
pub fn title_font(color: Rgba) -> TextStyle {
    TextStyle::serif(72.0, true, color)
}

/// 48 pt bold serif, used for button and item labels.
pub fn button_font(color: Rgba) -> TextStyle {
    TextStyle::serif(48.0, true, color)
}

/// 28 pt regular serif, used for values inside settings items.
pub fn small_font(color: Rgba) -> TextStyle {
    TextStyle::serif(28.0, false, color)
}
