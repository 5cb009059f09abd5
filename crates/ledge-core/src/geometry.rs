//! Geometry primitives in toolkit-logical units.
//!
//! All positions and sizes in the session core are expressed in logical
//! units, i.e. physical pixels divided by the screen's canvas scale.

/// A position on the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A two-dimensional extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Reports whether `point` falls within this rectangle.
    ///
    /// Bounds are inclusive on all four edges, so a point exactly on a
    /// corner or edge counts as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_interior() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert!(rect.contains(Point::new(50.0, 40.0)));
    }

    #[test]
    fn test_contains_is_inclusive_on_edges() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        // all four corners count as inside
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(110.0, 20.0)));
        assert!(rect.contains(Point::new(10.0, 70.0)));
        assert!(rect.contains(Point::new(110.0, 70.0)));
    }

    #[test]
    fn test_one_unit_outside_is_excluded() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert!(!rect.contains(Point::new(9.0, 20.0)));
        assert!(!rect.contains(Point::new(111.0, 20.0)));
        assert!(!rect.contains(Point::new(10.0, 19.0)));
        assert!(!rect.contains(Point::new(10.0, 71.0)));
    }
}
