//! Game over screen: final score and restart prompt on a white background.

use crate::math::Point;
use crate::renderer::canvas::{Canvas, TextAnchor};
use crate::renderer::color::WHITE;
use crate::renderer::game_renderer::hud_font;

pub const SCORE_LINE_POSITION: Point = Point::new(250.0, 250.0);
pub const PROMPT_POSITION: Point = Point::new(250.0, 300.0);

pub fn draw_game_over(canvas: &mut Canvas, score: u32) {
    canvas.clear(WHITE);
    canvas.text(
        "game_over",
        format!("Game Over! Score: {score}"),
        hud_font(),
        SCORE_LINE_POSITION,
        TextAnchor::TopLeft,
    );
    canvas.text(
        "restart_prompt",
        "Click to restart",
        hud_font(),
        PROMPT_POSITION,
        TextAnchor::TopLeft,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_final_score_and_prompt() {
        let mut canvas = Canvas::new(800.0, 600.0);

        draw_game_over(&mut canvas, 17);

        assert_eq!(canvas.clear_color(), WHITE);
        assert!(canvas.rectangles().is_empty());
        let score = canvas.find_text("game_over").expect("score line drawn");
        assert_eq!(score.text, "Game Over! Score: 17");
        assert_eq!(score.position, SCORE_LINE_POSITION);
        assert_eq!(
            canvas.find_text("restart_prompt").map(|t| t.position),
            Some(PROMPT_POSITION)
        );
    }
}
