//! The atomic curve unit: a segment or an arc

use serde::{Deserialize, Serialize};

use super::{Arc, BoundingBox, Point, Segment, points_equal};
use crate::constants::EPSILON;

/// A segment or a circular arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Edge {
    /// Straight segment
    Segment(Segment),
    /// Circular arc
    Arc(Arc),
}

impl Edge {
    /// Create a straight edge
    pub fn segment(start: Point, end: Point) -> Self {
        Edge::Segment(Segment::new(start, end))
    }

    /// Create an arc edge
    pub fn arc(center: Point, radius: f64, start_angle: f64, end_angle: f64, ccw: bool) -> Self {
        Edge::Arc(Arc::new(center, radius, start_angle, end_angle, ccw))
    }

    /// Start point
    pub fn start(&self) -> Point {
        match self {
            Edge::Segment(s) => s.start,
            Edge::Arc(a) => a.start_point(),
        }
    }

    /// End point
    pub fn end(&self) -> Point {
        match self {
            Edge::Segment(s) => s.end,
            Edge::Arc(a) => a.end_point(),
        }
    }

    /// Point halfway along the edge
    pub fn midpoint(&self) -> Point {
        match self {
            Edge::Segment(s) => s.midpoint(),
            Edge::Arc(a) => a.midpoint(),
        }
    }

    /// Curve length
    pub fn length(&self) -> f64 {
        match self {
            Edge::Segment(s) => s.length(),
            Edge::Arc(a) => a.length(),
        }
    }

    /// True when start and end coincide.
    ///
    /// Such an edge cannot take part in the closure algorithms; this includes
    /// full-sweep arcs, which must be cut first.
    pub fn is_degenerate(&self) -> bool {
        points_equal(self.start(), self.end())
    }

    /// Same edge traversed the other way
    pub fn reversed(&self) -> Self {
        match self {
            Edge::Segment(s) => Edge::Segment(s.reversed()),
            Edge::Arc(a) => Edge::Arc(a.reversed()),
        }
    }

    /// Whether `point` lies on the edge
    pub fn contains_point(&self, point: Point) -> bool {
        match self {
            Edge::Segment(s) => s.contains_point(point),
            Edge::Arc(a) => a.contains_point(point),
        }
    }

    /// Closest point on the edge to `point`
    pub fn closest_point(&self, point: Point) -> Point {
        match self {
            Edge::Segment(s) => s.closest_point(point),
            Edge::Arc(a) => a.closest_point(point),
        }
    }

    /// Distance from `point` to the edge
    pub fn distance_to(&self, point: Point) -> f64 {
        match self {
            Edge::Segment(s) => s.distance_to(point),
            Edge::Arc(a) => a.distance_to(point),
        }
    }

    /// Axis-aligned bounds
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Edge::Segment(s) => s.bounding_box(),
            Edge::Arc(a) => a.bounding_box(),
        }
    }

    /// Whether both edges cover the same curve in the same direction (within tolerance)
    pub fn approx_eq(&self, other: &Edge) -> bool {
        match (self, other) {
            (Edge::Segment(a), Edge::Segment(b)) => {
                points_equal(a.start, b.start) && points_equal(a.end, b.end)
            }
            (Edge::Arc(a), Edge::Arc(b)) => {
                a.ccw == b.ccw
                    && points_equal(a.center, b.center)
                    && (a.radius - b.radius).abs() < EPSILON
                    && points_equal(a.start_point(), b.start_point())
                    && points_equal(a.end_point(), b.end_point())
            }
            _ => false,
        }
    }
}

impl From<Segment> for Edge {
    fn from(segment: Segment) -> Self {
        Edge::Segment(segment)
    }
}

impl From<Arc> for Edge {
    fn from(arc: Arc) -> Self {
        Edge::Arc(arc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_reversed_swaps_endpoints() {
        let seg = Edge::segment(Point::new(0.0, 0.0), Point::new(1.0, 2.0));
        let rev = seg.reversed();
        assert_eq!(rev.start(), seg.end());
        assert_eq!(rev.end(), seg.start());

        let arc = Edge::arc(Point::ZERO, 1.0, 0.0, PI, true);
        let rev = arc.reversed();
        assert!(points_equal(rev.start(), arc.end()));
        assert!(points_equal(rev.end(), arc.start()));
        assert!(rev.reversed().approx_eq(&arc));
    }

    #[test]
    fn test_arc_approx_eq_radius_tolerance() {
        let arc = Edge::arc(Point::ZERO, 1.0, 0.0, PI, true);
        let close = Edge::arc(Point::ZERO, 1.0 + EPSILON * 0.1, 0.0, PI, true);
        let far = Edge::arc(Point::ZERO, 1.0 + EPSILON * 10.0, 0.0, PI, true);
        assert!(arc.approx_eq(&close));
        assert!(!arc.approx_eq(&far));
        assert!(!arc.approx_eq(&arc.reversed()));
    }

    #[test]
    fn test_full_arc_is_degenerate_edge() {
        let full = Edge::Arc(Arc::full_circle(Point::ZERO, 1.0));
        assert!(full.is_degenerate());
        let half = Edge::arc(Point::ZERO, 1.0, 0.0, PI, true);
        assert!(!half.is_degenerate());
    }
}
