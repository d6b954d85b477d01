//! Main renderer module.
//!
//! Scenes describe each frame on a [`canvas::Canvas`]; [`wgpu_lib::WgpuRenderer`] owns the
//! surface and draws that description with the background, rectangle and text pipelines.

/// Textured full-screen background quad.
pub mod background;
/// Plain-data frame description filled by scenes.
pub mod canvas;
/// Palette and sRGB helpers.
pub mod color;
/// Catch the Square screens.
pub mod game_renderer;
/// Pipeline building utilities for WGPU.
pub mod pipeline_builder;
/// Batched rounded-rectangle rendering.
pub mod rectangle;
/// Text rendering system.
pub mod text;
/// Game of Exile menu screens.
pub mod ui;
/// Core WGPU renderer.
pub mod wgpu_lib;
