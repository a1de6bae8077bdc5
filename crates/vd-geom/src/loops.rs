//! Closed boundary loops

use serde::{Deserialize, Serialize};

use crate::primitive::{BoundingBox, Edge, Point, points_equal};
use crate::winding::loop_winding;

/// Ordered, closed sequence of edges.
///
/// Once normalized, `edges[i].end() == edges[i + 1].start()` holds for every
/// `i` (indices modulo the length).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loop {
    edges: Vec<Edge>,
}

impl Loop {
    /// Wrap edges as a loop without reordering them
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Edges in traversal order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Consume the loop, returning its edges
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Iterate over the edges
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the loop has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Union of the edge bounds
    pub fn bounding_box(&self) -> BoundingBox {
        self.edges
            .iter()
            .fold(BoundingBox::empty(), |acc, e| acc.union(&e.bounding_box()))
    }

    /// Whether every edge ends where the next one starts (wrapping around)
    pub fn is_chained(&self) -> bool {
        let n = self.edges.len();
        n > 0
            && (0..n).all(|i| points_equal(self.edges[i].end(), self.edges[(i + 1) % n].start()))
    }

    /// Whether `point` lies inside the loop (arcs taken exactly)
    pub fn contains_point(&self, point: Point) -> bool {
        loop_winding(point, &self.edges) != 0
    }

    /// Signed enclosed area, positive for counter-clockwise loops
    pub fn signed_area(&self) -> f64 {
        let chord_polygon: Vec<Point> = self.edges.iter().map(Edge::start).collect();
        let n = chord_polygon.len();
        let mut area = 0.0;
        for i in 0..n {
            area += chord_polygon[i].perp_dot(chord_polygon[(i + 1) % n]);
        }
        area *= 0.5;

        for edge in &self.edges {
            if let Edge::Arc(arc) = edge {
                let sweep = arc.sweep();
                let segment_area = 0.5 * arc.radius * arc.radius * (sweep - sweep.sin());
                area += if arc.ccw { segment_area } else { -segment_area };
            }
        }
        area
    }

    /// Reverse edges so that each one starts where the previous one ends
    pub fn normalize_orientation(&mut self) {
        let n = self.edges.len();
        if n < 2 {
            return;
        }

        let first_end = self.edges[0].end();
        let second = self.edges[1];
        if !points_equal(first_end, second.start()) && !points_equal(first_end, second.end()) {
            self.edges[0] = self.edges[0].reversed();
        }

        for i in 0..n - 1 {
            if !points_equal(self.edges[i].end(), self.edges[i + 1].start()) {
                self.edges[i + 1] = self.edges[i + 1].reversed();
            }
        }
    }
}

impl From<Loop> for Vec<Edge> {
    fn from(boundary: Loop) -> Self {
        boundary.edges
    }
}
