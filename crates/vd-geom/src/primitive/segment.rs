//! Straight line segments

use serde::{Deserialize, Serialize};

use super::{BoundingBox, Point, points_equal};
use crate::constants::EPSILON;

/// A straight segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point
    pub start: Point,
    /// End point
    pub end: Point,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction vector (`end - start`, not normalized)
    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Midpoint of the segment
    pub fn midpoint(&self) -> Point {
        (self.start + self.end) * 0.5
    }

    /// True when start and end coincide within tolerance
    pub fn is_degenerate(&self) -> bool {
        points_equal(self.start, self.end)
    }

    /// Same segment traversed the other way
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Point at parameter `t` (0 = start, 1 = end)
    pub fn point_at(&self, t: f64) -> Point {
        self.start + self.direction() * t
    }

    /// Parameter of the projection of `point` onto the supporting line.
    ///
    /// Unclamped; 0 at `start`, 1 at `end`.
    pub fn project(&self, point: Point) -> f64 {
        let dir = self.direction();
        let len_sq = dir.length_squared();
        if len_sq < EPSILON * EPSILON {
            return 0.0;
        }
        (point - self.start).dot(dir) / len_sq
    }

    /// Closest point on the segment to `point`
    pub fn closest_point(&self, point: Point) -> Point {
        self.point_at(self.project(point).clamp(0.0, 1.0))
    }

    /// Closest point on the infinite supporting line to `point`
    pub fn closest_point_on_line(&self, point: Point) -> Point {
        self.point_at(self.project(point))
    }

    /// Distance from `point` to the segment
    pub fn distance_to(&self, point: Point) -> f64 {
        self.closest_point(point).distance(point)
    }

    /// Whether `point` lies on the segment (within tolerance)
    pub fn contains_point(&self, point: Point) -> bool {
        self.distance_to(point) < EPSILON
    }

    /// Axis-aligned bounds
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.start.min(self.end), self.start.max(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_project_and_closest() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
        assert_relative_eq!(seg.project(Point::new(1.0, 3.0)), 0.25);
        assert_eq!(seg.closest_point(Point::new(-2.0, 1.0)), Point::new(0.0, 0.0));
        assert_eq!(
            seg.closest_point_on_line(Point::new(-2.0, 1.0)),
            Point::new(-2.0, 0.0)
        );
        assert_relative_eq!(seg.distance_to(Point::new(2.0, 3.0)), 3.0);
    }

    #[test]
    fn test_contains_point() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        assert!(seg.contains_point(Point::new(1.0, 1.0)));
        assert!(seg.contains_point(Point::new(2.0, 2.0)));
        assert!(!seg.contains_point(Point::new(3.0, 3.0)));
    }

    #[test]
    fn test_degenerate() {
        let p = Point::new(1.0, 1.0);
        assert!(Segment::new(p, p).is_degenerate());
        assert!(!Segment::new(p, Point::ZERO).is_degenerate());
    }
}
