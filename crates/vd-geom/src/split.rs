//! Edge splitting at mutual intersections
//!
//! After [`split_edges_at_intersections`] no edge's open interior contains
//! an endpoint of another edge, which is what the boundary graph relies on
//! to treat shared points as vertices.

use tracing::debug;

use crate::constants::EPSILON;
use crate::intersect::intersect_edges;
use crate::primitive::{Arc, BoundingBox, Edge, Point, Segment, points_equal, push_unique};

/// Cut every edge at every point it shares with another edge.
///
/// Zero or one edge is returned unchanged. Pieces covering the same curve
/// twice (overlapping input) are kept only once.
pub fn split_edges_at_intersections(edges: &[Edge]) -> Vec<Edge> {
    if edges.len() < 2 {
        return edges.to_vec();
    }

    let boxes: Vec<BoundingBox> = edges
        .iter()
        .map(|e| e.bounding_box().expanded(EPSILON))
        .collect();

    let mut pieces: Vec<Edge> = Vec::with_capacity(edges.len() * 2);
    for (i, edge) in edges.iter().enumerate() {
        let mut cuts = Vec::new();
        for (j, other) in edges.iter().enumerate() {
            if i == j || !boxes[i].intersects(&boxes[j]) {
                continue;
            }
            for p in intersect_edges(edge, other) {
                push_unique(&mut cuts, snap_to_endpoints(p, other));
            }
        }

        for piece in cut_edge(edge, &cuts) {
            let duplicate = pieces
                .iter()
                .any(|e| e.approx_eq(&piece) || e.approx_eq(&piece.reversed()));
            if !duplicate {
                pieces.push(piece);
            }
        }
    }

    debug!(input = edges.len(), output = pieces.len(), "split edges");
    pieces
}

/// Reuse the other edge's endpoint when the intersection lands on it
fn snap_to_endpoints(point: Point, other: &Edge) -> Point {
    let (start, end) = (other.start(), other.end());
    if points_equal(point, start) {
        start
    } else if points_equal(point, end) {
        end
    } else {
        point
    }
}

/// Cut a single edge at the given points (points off the edge are ignored)
pub fn cut_edge(edge: &Edge, cuts: &[Point]) -> Vec<Edge> {
    match edge {
        Edge::Segment(segment) => cut_segment(segment, cuts),
        Edge::Arc(arc) => cut_arc(arc, cuts),
    }
}

fn cut_segment(segment: &Segment, cuts: &[Point]) -> Vec<Edge> {
    let mut inner: Vec<(f64, Point)> = cuts
        .iter()
        .filter(|p| !points_equal(**p, segment.start) && !points_equal(**p, segment.end))
        .map(|p| (segment.project(*p), *p))
        .filter(|(t, _)| *t > 0.0 && *t < 1.0)
        .collect();
    inner.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut points = Vec::with_capacity(inner.len() + 2);
    points.push(segment.start);
    points.extend(inner.into_iter().map(|(_, p)| p));
    points.push(segment.end);

    points
        .windows(2)
        .map(|w| Edge::segment(w[0], w[1]))
        .collect()
}

fn cut_arc(arc: &Arc, cuts: &[Point]) -> Vec<Edge> {
    let sweep = arc.sweep();
    let start = arc.start_point();
    let end = arc.end_point();

    let mut offsets: Vec<f64> = cuts
        .iter()
        .filter(|p| !points_equal(**p, start) && !points_equal(**p, end))
        .map(|p| arc.offset_of_point(*p))
        .filter(|o| *o > 0.0 && *o < sweep)
        .collect();
    offsets.sort_by(f64::total_cmp);

    if offsets.is_empty() && arc.is_full() {
        // A full turn must be cut at least once to get distinct endpoints
        offsets.push(sweep * 0.5);
    }

    let mut bounds = Vec::with_capacity(offsets.len() + 2);
    bounds.push(0.0);
    bounds.extend(offsets);
    bounds.push(sweep);

    bounds
        .windows(2)
        .map(|w| Edge::Arc(arc.sub_arc(w[0], w[1])))
        .collect()
}
