//! Planar geometry for the vecdraw editor
//!
//! This crate provides:
//! - Points, segments, arcs and closed shapes with tolerance-based equality
//! - Exact segment/arc intersections and edge splitting
//! - Enclosing boundary detection for fill and region selection
//! - Closed-polygon validation and ordering for user selections

pub mod boundary;
pub mod constants;
pub mod intersect;
pub mod loops;
pub mod polygon;
pub mod primitive;
pub mod split;
pub mod vertex;
pub mod winding;

// Re-exports for convenience
pub use boundary::{BoundaryGraph, find_closed_loops, find_enclosing_boundary};
pub use constants::{EPSILON, GUIDE_EXTENT};
pub use intersect::{intersect_edges, intersect_shapes};
pub use loops::Loop;
pub use polygon::{PolygonError, PolygonResult, check_closed_polygon, is_closed_polygon};
pub use primitive::{Arc, BoundingBox, Edge, Point, Segment, Shape, points_equal};
pub use split::split_edges_at_intersections;
pub use winding::{loop_winding, point_in_polygon};
