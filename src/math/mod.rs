//! Math utilities for 2D layout and hit-testing.
//!
//! # Module Organization
//!
//! - [`rect`] module contains [`Point`] and [`Rect`] (re-exported at root level)
//! - Scalar helpers shared by the animation and slider code are provided at root level

pub mod rect;

pub use rect::{Point, Rect};

/// Maps `value` from the span `[start, start + length]` onto `[0.0, 1.0]`, saturating outside it.
///
/// A zero or negative `length` maps everything to `0.0`.
///
/// # Example
/// ```
/// use exile::math::normalized_offset;
///
/// assert_eq!(normalized_offset(150.0, 100.0, 100.0), 0.5);
/// assert_eq!(normalized_offset(50.0, 100.0, 100.0), 0.0);
/// assert_eq!(normalized_offset(500.0, 100.0, 100.0), 1.0);
/// ```
pub fn normalized_offset(value: f32, start: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    ((value - start) / length).clamp(0.0, 1.0)
}
