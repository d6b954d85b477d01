//! Window-independent input events.
//!
//! The event handler translates winit events into [`InputEvent`]s in logical coordinates and
//! queues them until the next frame, where the active scene consumes them in order.

use crate::math::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

/// One discrete input event, positions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The user asked to close the window.
    Quit,
    PointerDown { position: Point, button: PointerButton },
    PointerUp { position: Point, button: PointerButton },
    PointerMove { position: Point },
}

/// Builds the press or release event for `button` at the last known cursor position.
///
/// winit reports positions only through `CursorMoved`, so a click before the first move has no
/// position and is dropped.
pub fn button_event(
    pointer: Option<Point>,
    state: ElementState,
    button: MouseButton,
) -> Option<InputEvent> {
    let position = pointer?;
    let button = button.into();
    Some(match state {
        ElementState::Pressed => InputEvent::PointerDown { position, button },
        ElementState::Released => InputEvent::PointerUp { position, button },
    })
}

/// Converts a cursor position on a `surface_size` surface into the scene's logical space.
pub fn to_logical(
    position: PhysicalPosition<f64>,
    surface_size: (u32, u32),
    logical_size: (f32, f32),
) -> Point {
    let (surface_width, surface_height) = surface_size;
    if surface_width == 0 || surface_height == 0 {
        return Point::new(position.x as f32, position.y as f32);
    }
    Point::new(
        position.x as f32 * logical_size.0 / surface_width as f32,
        position.y as f32 * logical_size.1 / surface_height as f32,
    )
}
