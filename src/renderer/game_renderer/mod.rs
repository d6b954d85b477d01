//! Catch the Square screens.
//!
//! [`draw_playfield`] draws a running session: the flash or white background, the target square,
//! and the score and timer readouts. The end-of-session screen lives in [`game_over`].

pub mod game_over;

use crate::game::{GameSession, Square};
use crate::math::Point;
use crate::renderer::canvas::{Canvas, TextAnchor};
use crate::renderer::color::{BLACK, FLASH_YELLOW, RED, WHITE};
use crate::renderer::text::TextStyle;
use std::time::Instant;

pub const SCORE_POSITION: Point = Point::new(10.0, 10.0);
pub const TIMER_POSITION: Point = Point::new(680.0, 10.0);

/// Readout font of the mini-game.
pub fn hud_font() -> TextStyle {
    TextStyle::sans(36.0, BLACK)
}

/// Draws a running session as seen at `now`.
pub fn draw_playfield(canvas: &mut Canvas, session: &GameSession, square: &Square, now: Instant) {
    canvas.clear(if session.is_flashing(now) {
        FLASH_YELLOW
    } else {
        WHITE
    });
    canvas.fill_rect(square.rect, RED);

    canvas.text(
        "score",
        format!("Score: {}", session.score()),
        hud_font(),
        SCORE_POSITION,
        TextAnchor::TopLeft,
    );
    canvas.text(
        "timer",
        format!("Time: {}", session.remaining_secs(now)),
        hud_font(),
        TIMER_POSITION,
        TextAnchor::TopLeft,
    );
}
