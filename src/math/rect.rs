//! Screen-space points and axis-aligned rectangles.
//!
//! All UI layout and hit-testing in both programs is expressed with these two types. Coordinates
//! are logical pixels with the origin in the top-left corner and `y` growing downwards.

/// A point in logical screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle of the given size whose centre is `center`.
    pub fn centered_at(center: Point, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Inclusive containment test: points lying exactly on any of the four edges are inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Returns a copy moved by `(dx, dy)`; the size is unchanged.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Returns a copy shrunk by `amount` on every side.
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let rect = Rect::new(10.0, 20.0, 50.0, 50.0);

        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(60.0, 20.0)));
        assert!(rect.contains(Point::new(10.0, 70.0)));
        assert!(rect.contains(Point::new(60.0, 70.0)));
        assert!(rect.contains(Point::new(35.0, 45.0)));
    }

    #[test]
    fn contains_rejects_points_just_outside() {
        let rect = Rect::new(10.0, 20.0, 50.0, 50.0);

        assert!(!rect.contains(Point::new(9.9, 45.0)));
        assert!(!rect.contains(Point::new(60.1, 45.0)));
        assert!(!rect.contains(Point::new(35.0, 19.9)));
        assert!(!rect.contains(Point::new(35.0, 70.1)));
    }

    #[test]
    fn translate_keeps_size() {
        let moved = Rect::new(1.0, 2.0, 3.0, 4.0).translate(10.0, -2.0);
        assert_eq!(moved, Rect::new(11.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn inset_never_produces_negative_size() {
        let shrunk = Rect::new(0.0, 0.0, 4.0, 4.0).inset(3.0);
        assert_eq!(shrunk.width, 0.0);
        assert_eq!(shrunk.height, 0.0);
    }
}
