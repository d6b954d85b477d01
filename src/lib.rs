//! Game of Exile - a menu shell prototype, and the Catch the Square mini-game
//!
//! Both programs share one runtime: a winit event loop driving a [`app::Scene`], drawn by a
//! wgpu renderer in a fixed logical resolution.
//!
//! # Architecture
//! - `app/`: event loop, input translation, frame pacing and the [`app::Scene`] seam
//! - `menu/`: Game of Exile menu state, layout and settings
//! - `game/`: Catch the Square session, target square and hit sound
//! - `renderer/`: canvas, GPU pipelines, text and the per-screen drawing code
//! - `math/`: points and rectangles used for layout and hit-testing
//! - `config`, `assets`, `logging`: start-up plumbing shared by both binaries

pub mod app;
pub mod assets;
pub mod config;
pub mod game;
pub mod logging;
pub mod math;
pub mod menu;
pub mod renderer;
