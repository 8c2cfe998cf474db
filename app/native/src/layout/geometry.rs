//! Pixel geometry shared by displays, windows and layout slots.
//!
//! All coordinates are integer pixels in a global, top-left origin space:
//! `top` grows downward and `left` grows rightward.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in global screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Distance from the top edge of the global space.
    pub top: i32,
    /// Distance from the left edge of the global space.
    pub left: i32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(top: i32, left: i32) -> Self { Self { top, left } }
}

/// A rectangle in global screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    /// Y coordinate of the top edge.
    pub top: i32,
    /// X coordinate of the left edge.
    pub left: i32,
    /// Width of the rectangle.
    pub width: i32,
    /// Height of the rectangle.
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(top: i32, left: i32, width: i32, height: i32) -> Self {
        Self { top, left, width, height }
    }

    /// Returns the X coordinate of the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 { self.left.saturating_add(self.width) }

    /// Returns the Y coordinate of the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 { self.top.saturating_add(self.height) }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn top_left(&self) -> Point { Point::new(self.top, self.left) }

    /// Returns the bottom-right corner.
    #[must_use]
    pub const fn bottom_right(&self) -> Point { Point::new(self.bottom(), self.right()) }

    /// Returns whether a point lies inside the rectangle, edges included.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.top >= self.top
            && point.top <= self.bottom()
            && point.left >= self.left
            && point.left <= self.right()
    }

    /// Returns whether `other` lies entirely inside this rectangle.
    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.top >= self.top
            && other.left >= self.left
            && other.bottom() <= self.bottom()
            && other.right() <= self.right()
    }

    /// Returns the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> i64 { i64::from(self.width) * i64::from(self.height) }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.left, self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 20, 300, 200);
        assert_eq!(rect.right(), 320);
        assert_eq!(rect.bottom(), 210);
        assert_eq!(rect.top_left(), Point::new(10, 20));
        assert_eq!(rect.bottom_right(), Point::new(210, 320));
    }

    #[test]
    fn test_rect_contains_includes_edges() {
        let rect = Rect::new(0, 0, 100, 50);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(50, 100)));
        assert!(!rect.contains(Point::new(51, 100)));
        assert!(!rect.contains(Point::new(-1, 10)));
    }

    #[test]
    fn test_rect_contains_rect() {
        let outer = Rect::new(0, 0, 1920, 1080);
        assert!(outer.contains_rect(&Rect::new(25, 0, 1920, 1055)));
        assert!(!outer.contains_rect(&Rect::new(25, 0, 1920, 1080)));
        assert!(outer.contains_rect(&outer));
    }

    #[test]
    fn test_rect_edges_saturate() {
        let rect = Rect::new(i32::MAX - 5, i32::MAX - 10, 100, 100);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);
        assert!(rect.contains(Point::new(i32::MAX, i32::MAX)));
    }

    #[test]
    fn test_rect_area_does_not_overflow() {
        let rect = Rect::new(0, 0, 100_000, 100_000);
        assert_eq!(rect.area(), 10_000_000_000);
    }

    #[test]
    fn test_rect_serializes_camel_case() {
        let json = serde_json::to_value(Rect::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json["top"], 1);
        assert_eq!(json["left"], 2);
        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 4);
    }

    #[test]
    fn test_rect_display() {
        assert_eq!(Rect::new(400, 800, 400, 400).to_string(), "400x400 at (800, 400)");
    }
}
