//! Catch the Square game state.
//!
//! A red square sits somewhere in the playfield; every click on it scores a point and moves it.
//! After [`TIME_LIMIT`] the session ends and any click starts a new one.
//!
//! The module is split between:
//! - [`GameSession`]: score, clock and game-over flag
//! - [`Square`]: the target and its random placement
//! - [`CatchTheSquare`]: the [`Scene`] tying them to input and the hit sound
//!
//! Randomness and time are injected, so everything here runs under a seeded RNG and a synthetic
//! clock in tests.

pub mod audio;

use self::audio::ClickSound;
use crate::app::{InputEvent, Scene, SceneCommand};
use crate::math::{Point, Rect};
use crate::renderer::canvas::Canvas;
use crate::renderer::game_renderer;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Edge length of the target square in pixels.
pub const SQUARE_SIZE: u32 = 50;
/// Length of one session.
pub const TIME_LIMIT: Duration = Duration::from_secs(30);
/// How long the background flashes after a hit.
pub const FLASH_DURATION: Duration = Duration::from_millis(100);

/// The target square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub rect: Rect,
}

impl Square {
    /// A square at a uniformly random position fully inside a `width` × `height` playfield.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> Self {
        let mut square = Self {
            rect: Rect::new(0.0, 0.0, SQUARE_SIZE as f32, SQUARE_SIZE as f32),
        };
        square.relocate(rng, width, height);
        square
    }

    /// Moves the square to a uniformly random whole-pixel position with
    /// `0 <= x <= width - size` and `0 <= y <= height - size`.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, width: u32, height: u32) {
        let x = rng.gen_range(0..=width.saturating_sub(SQUARE_SIZE));
        let y = rng.gen_range(0..=height.saturating_sub(SQUARE_SIZE));
        self.rect = Rect::new(x as f32, y as f32, SQUARE_SIZE as f32, SQUARE_SIZE as f32);
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// Score, clock and game-over state of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    score: u32,
    started_at: Instant,
    time_limit: Duration,
    game_over: bool,
    last_hit: Option<Instant>,
}

impl GameSession {
    pub fn new(now: Instant) -> Self {
        Self::with_time_limit(now, TIME_LIMIT)
    }

    pub fn with_time_limit(now: Instant, time_limit: Duration) -> Self {
        Self {
            score: 0,
            started_at: now,
            time_limit,
            game_over: false,
            last_hit: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_hit(&self) -> Option<Instant> {
        self.last_hit
    }

    /// Strictly more than the limit has passed since the session started.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) > self.time_limit
    }

    /// Whole seconds left, floored; zero once the limit is reached.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.time_limit.saturating_sub(elapsed).as_secs()
    }

    /// Whether the hit flash is still showing at `now`.
    pub fn is_flashing(&self, now: Instant) -> bool {
        self.last_hit
            .is_some_and(|hit| now.saturating_duration_since(hit) < FLASH_DURATION)
    }

    pub fn record_hit(&mut self, now: Instant) {
        self.score += 1;
        self.last_hit = Some(now);
    }

    /// Ends the session if the limit has passed. Returns whether it is over.
    pub fn check_expired(&mut self, now: Instant) -> bool {
        if !self.game_over && self.is_expired(now) {
            self.game_over = true;
            info!(score = self.score, "Time up");
        }
        self.game_over
    }

    /// Back to score 0 with the clock starting at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.score = 0;
        self.started_at = now;
        self.game_over = false;
        info!("Game restarted");
    }
}

/// The Catch the Square scene.
pub struct CatchTheSquare<R: Rng> {
    session: GameSession,
    square: Square,
    playfield: (u32, u32),
    rng: R,
    click_sound: Option<ClickSound>,
}

impl<R: Rng> CatchTheSquare<R> {
    /// A new session starting at `now` on a `width` × `height` playfield.
    pub fn new(
        width: u32,
        height: u32,
        mut rng: R,
        click_sound: Option<ClickSound>,
        now: Instant,
    ) -> Self {
        let square = Square::random(&mut rng, width, height);
        Self {
            session: GameSession::new(now),
            square,
            playfield: (width, height),
            rng,
            click_sound,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn square(&self) -> &Square {
        &self.square
    }

    /// Handles a press of any pointer button at `position`.
    pub fn handle_pointer_down(&mut self, position: Point, now: Instant) {
        if self.session.is_game_over() {
            self.session.restart(now);
            return;
        }
        // A click arriving after the limit only ends the session.
        if self.session.check_expired(now) {
            return;
        }
        if self.square.contains(position) {
            self.session.record_hit(now);
            let (width, height) = self.playfield;
            self.square.relocate(&mut self.rng, width, height);
            debug!(
                score = self.session.score(),
                x = self.square.rect.x,
                y = self.square.rect.y,
                "Hit"
            );
            if let Some(sound) = self.click_sound.as_mut() {
                sound.play();
            }
        }
    }
}

impl<R: Rng> Scene for CatchTheSquare<R> {
    fn handle_input(&mut self, event: &InputEvent, now: Instant) -> SceneCommand {
        match *event {
            InputEvent::Quit => SceneCommand::Quit,
            InputEvent::PointerDown { position, .. } => {
                self.handle_pointer_down(position, now);
                SceneCommand::None
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerMove { .. } => SceneCommand::None,
        }
    }

    fn update(&mut self, _dt: Duration, now: Instant) {
        self.session.check_expired(now);
    }

    fn draw(&self, canvas: &mut Canvas, _pointer: Point, now: Instant) {
        if self.session.is_game_over() {
            game_renderer::game_over::draw_game_over(canvas, self.session.score());
        } else {
            game_renderer::draw_playfield(canvas, &self.session, &self.square, now);
        }
    }
}
