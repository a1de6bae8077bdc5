//! Drawable shapes as seen by the geometry engine

use serde::{Deserialize, Serialize};

use super::{Arc, BoundingBox, Edge, Point, Segment, points_equal};
use crate::winding::point_in_polygon;

/// Geometry of a drawing entity.
///
/// `Segment` and partial `Arc`s are open; `Circle`, `Rect`, `Polygon` and
/// full-sweep arcs are closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Straight segment
    Segment(Segment),
    /// Circular arc (closed when the sweep is a full turn)
    Arc(Arc),
    /// Full circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f64,
    },
    /// Axis-aligned rectangle
    Rect {
        /// Minimum corner
        min: Point,
        /// Maximum corner
        max: Point,
    },
    /// Closed polygon through the given vertices (implicitly closed)
    Polygon {
        /// Vertices in order
        points: Vec<Point>,
    },
}

impl Shape {
    /// Create a segment shape
    pub fn segment(start: Point, end: Point) -> Self {
        Shape::Segment(Segment::new(start, end))
    }

    /// Create a circle shape
    pub fn circle(center: Point, radius: f64) -> Self {
        Shape::Circle { center, radius }
    }

    /// Create a rectangle from any two opposite corners
    pub fn rect(corner1: Point, corner2: Point) -> Self {
        Shape::Rect {
            min: corner1.min(corner2),
            max: corner1.max(corner2),
        }
    }

    /// Create a polygon shape
    pub fn polygon(points: Vec<Point>) -> Self {
        Shape::Polygon { points }
    }

    /// Whether the shape bounds a region on its own
    pub fn is_closed(&self) -> bool {
        match self {
            Shape::Segment(_) => false,
            Shape::Arc(arc) => arc.is_full(),
            Shape::Circle { .. } | Shape::Rect { .. } | Shape::Polygon { .. } => true,
        }
    }

    /// Native inside test for closed shapes; always false for open ones
    pub fn contains_point(&self, point: Point) -> bool {
        match self {
            Shape::Segment(_) => false,
            Shape::Arc(arc) => arc.is_full() && point.distance(arc.center) < arc.radius,
            Shape::Circle { center, radius } => point.distance(*center) < *radius,
            Shape::Rect { min, max } => {
                point.x > min.x && point.x < max.x && point.y > min.y && point.y < max.y
            }
            Shape::Polygon { points } => point_in_polygon(point, points),
        }
    }

    /// Boundary curves of the shape.
    ///
    /// Full turns are cut into two half arcs so that no returned edge starts
    /// and ends at the same point. Closed shapes return their edges chained.
    pub fn edges(&self) -> Vec<Edge> {
        match self {
            Shape::Segment(segment) => vec![Edge::Segment(*segment)],
            Shape::Arc(arc) if arc.is_full() => arc.halves().map(Edge::Arc).to_vec(),
            Shape::Arc(arc) => vec![Edge::Arc(*arc)],
            Shape::Circle { center, radius } => Arc::full_circle(*center, *radius)
                .halves()
                .map(Edge::Arc)
                .to_vec(),
            Shape::Rect { min, max } => {
                let corners = [
                    *min,
                    Point::new(max.x, min.y),
                    *max,
                    Point::new(min.x, max.y),
                ];
                polygon_edges(&corners)
            }
            Shape::Polygon { points } => polygon_edges(points),
        }
    }

    /// Axis-aligned bounds
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Segment(segment) => segment.bounding_box(),
            Shape::Arc(arc) => arc.bounding_box(),
            Shape::Circle { center, radius } => BoundingBox::new(
                *center - Point::splat(*radius),
                *center + Point::splat(*radius),
            ),
            Shape::Rect { min, max } => BoundingBox::new(*min, *max),
            Shape::Polygon { points } => BoundingBox::from_points(points.iter().copied()),
        }
    }

    /// Distance from `point` to the outline of the shape
    pub fn distance_to(&self, point: Point) -> f64 {
        self.edges()
            .iter()
            .map(|edge| edge.distance_to(point))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Sides of a closed polygon, skipping repeated vertices
fn polygon_edges(points: &[Point]) -> Vec<Edge> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| (points[i], points[(i + 1) % n]))
        .filter(|(a, b)| !points_equal(*a, *b))
        .map(|(a, b)| Edge::segment(a, b))
        .collect()
}

impl From<Edge> for Shape {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Segment(segment) => Shape::Segment(segment),
            Edge::Arc(arc) => Shape::Arc(arc),
        }
    }
}
