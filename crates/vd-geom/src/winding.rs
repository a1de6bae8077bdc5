//! Winding-number containment tests
//!
//! Loops mixing segments and arcs are handled exactly: the loop is reduced
//! to the polygon through its edge endpoints, and each arc then adds the
//! winding of the circular segment between its chord and its curve.

use crate::primitive::{Arc, Edge, Point};

/// Winding number of a closed polygon around `point`.
///
/// Zero means outside. Points exactly on the boundary may land on either side.
pub fn polygon_winding(point: Point, polygon: &[Point]) -> i32 {
    let n = polygon.len();
    if n < 3 {
        return 0;
    }

    let mut winding = 0;
    for i in 0..n {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];
        let cross = (p2.x - p1.x) * (point.y - p1.y) - (p2.y - p1.y) * (point.x - p1.x);

        if p1.y <= point.y {
            // Upward crossing
            if p2.y > point.y && cross > 0.0 {
                winding += 1;
            }
        } else if p2.y <= point.y && cross < 0.0 {
            // Downward crossing
            winding -= 1;
        }
    }
    winding
}

/// Whether `point` lies inside the closed polygon
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    polygon_winding(point, polygon) != 0
}

/// Winding of the region bounded by `arc` and its closing chord.
///
/// ±1 when `point` lies inside the circle on the same side of the chord as
/// the arc's midpoint, otherwise 0.
fn arc_segment_winding(point: Point, arc: &Arc) -> i32 {
    if point.distance_squared(arc.center) >= arc.radius * arc.radius {
        return 0;
    }
    let start = arc.start_point();
    let end = arc.end_point();
    let chord = end - start;
    let side = |p: Point| chord.perp_dot(p - start);
    let point_side = side(point);
    let mid_side = side(arc.midpoint());
    if point_side * mid_side <= 0.0 {
        return 0;
    }
    if arc.ccw { 1 } else { -1 }
}

/// Winding number of a chained loop of edges around `point`
pub fn loop_winding(point: Point, edges: &[Edge]) -> i32 {
    let chord_polygon: Vec<Point> = edges.iter().map(Edge::start).collect();
    let mut winding = polygon_winding(point, &chord_polygon);
    for edge in edges {
        if let Edge::Arc(arc) = edge {
            winding += arc_segment_winding(point, arc);
        }
    }
    winding
}
