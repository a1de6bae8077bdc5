//! Geometric primitives
//!
//! Immutable value types the rest of the crate is built on: points,
//! segments, arcs, the [`Edge`] curve variant, closed [`Shape`]s and
//! axis-aligned bounds.

mod arc;
mod bounds;
mod edge;
mod segment;
mod shape;

pub use arc::Arc;
pub use bounds::BoundingBox;
pub use edge::Edge;
pub use segment::Segment;
pub use shape::Shape;

use glam::DVec2;

use crate::constants::EPSILON;

/// A point in world space
pub type Point = DVec2;

/// Tolerance-based point equality (`|dx| < EPSILON && |dy| < EPSILON`).
#[inline]
pub fn points_equal(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

/// Append `point` unless an equal point (by tolerance) is already present.
pub(crate) fn push_unique(points: &mut Vec<Point>, point: Point) {
    if !points.iter().any(|p| points_equal(*p, point)) {
        points.push(point);
    }
}
