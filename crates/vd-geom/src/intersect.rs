//! Exact intersections between edges and shapes
//!
//! Every routine returns the intersection points deduplicated by
//! tolerance. Overlapping collinear segments and coincident arcs report the
//! endpoints of each curve lying on the other, which is what the splitter
//! needs to cut them into shared pieces.

use crate::constants::{EPSILON, PARALLEL_EPSILON};
use crate::primitive::{Arc, Edge, Point, Segment, Shape, push_unique};

/// All points shared by two edges
pub fn intersect_edges(a: &Edge, b: &Edge) -> Vec<Point> {
    match (a, b) {
        (Edge::Segment(s1), Edge::Segment(s2)) => segment_segment(s1, s2),
        (Edge::Segment(s), Edge::Arc(arc)) | (Edge::Arc(arc), Edge::Segment(s)) => {
            segment_arc(s, arc)
        }
        (Edge::Arc(a1), Edge::Arc(a2)) => arc_arc(a1, a2),
    }
}

/// All points shared by the outlines of two shapes
pub fn intersect_shapes(a: &Shape, b: &Shape) -> Vec<Point> {
    if !a
        .bounding_box()
        .expanded(EPSILON)
        .intersects(&b.bounding_box())
    {
        return Vec::new();
    }

    let b_edges = b.edges();
    let mut points = Vec::new();
    for ea in a.edges() {
        for eb in &b_edges {
            for p in intersect_edges(&ea, eb) {
                push_unique(&mut points, p);
            }
        }
    }
    points
}

/// Parameter slack along a segment equivalent to [`EPSILON`] in world units
fn parameter_tolerance(segment: &Segment) -> f64 {
    let len = segment.length();
    if len < EPSILON { 0.0 } else { EPSILON / len }
}

fn within_segment(segment: &Segment, t: f64) -> bool {
    let tol = parameter_tolerance(segment);
    t >= -tol && t <= 1.0 + tol
}

fn arc_contains_constructed(arc: &Arc, point: Point) -> bool {
    let d = point - arc.center;
    arc.contains_angle(d.y.atan2(d.x))
}

/// Segment–segment intersection
pub fn segment_segment(a: &Segment, b: &Segment) -> Vec<Point> {
    let d1 = a.direction();
    let d2 = b.direction();
    let denom = d1.perp_dot(d2);
    let scale = d1.length() * d2.length();

    if denom.abs() <= PARALLEL_EPSILON * scale.max(1.0) {
        // Parallel: only collinear overlaps share points
        let mut points = Vec::new();
        if a.closest_point_on_line(b.start).distance(b.start) >= EPSILON {
            return points;
        }
        for p in [a.start, a.end] {
            if b.contains_point(p) {
                push_unique(&mut points, p);
            }
        }
        for p in [b.start, b.end] {
            if a.contains_point(p) {
                push_unique(&mut points, p);
            }
        }
        return points;
    }

    let offset = b.start - a.start;
    let t = offset.perp_dot(d2) / denom;
    let u = offset.perp_dot(d1) / denom;

    if within_segment(a, t) && within_segment(b, u) {
        vec![a.point_at(t.clamp(0.0, 1.0))]
    } else {
        Vec::new()
    }
}

/// Segment–arc intersection
pub fn segment_arc(segment: &Segment, arc: &Arc) -> Vec<Point> {
    let dir = segment.direction();
    let len = dir.length();
    if len < EPSILON || arc.radius < EPSILON {
        return Vec::new();
    }

    let t0 = segment.project(arc.center);
    let foot = segment.point_at(t0);
    let h = foot.distance(arc.center);

    let candidates: Vec<f64> = if (h - arc.radius).abs() < EPSILON {
        // Tangent
        vec![t0]
    } else if h > arc.radius {
        Vec::new()
    } else {
        let dt = (arc.radius * arc.radius - h * h).sqrt() / len;
        vec![t0 - dt, t0 + dt]
    };

    let mut points = Vec::new();
    for t in candidates {
        if !within_segment(segment, t) {
            continue;
        }
        let p = segment.point_at(t.clamp(0.0, 1.0));
        if arc_contains_constructed(arc, p) {
            push_unique(&mut points, p);
        }
    }
    points
}

/// Arc–arc intersection
pub fn arc_arc(a: &Arc, b: &Arc) -> Vec<Point> {
    if a.radius < EPSILON || b.radius < EPSILON {
        return Vec::new();
    }

    let delta = b.center - a.center;
    let d = delta.length();

    if d < EPSILON {
        // Concentric: shared points only when the circles coincide
        let mut points = Vec::new();
        if (a.radius - b.radius).abs() >= EPSILON {
            return points;
        }
        for p in [a.start_point(), a.end_point()] {
            if b.contains_point(p) {
                push_unique(&mut points, p);
            }
        }
        for p in [b.start_point(), b.end_point()] {
            if a.contains_point(p) {
                push_unique(&mut points, p);
            }
        }
        return points;
    }

    if d > a.radius + b.radius + EPSILON || d < (a.radius - b.radius).abs() - EPSILON {
        return Vec::new();
    }

    let along = (a.radius * a.radius - b.radius * b.radius + d * d) / (2.0 * d);
    let h = (a.radius * a.radius - along * along).max(0.0).sqrt();
    let unit = delta / d;
    let base = a.center + unit * along;

    let candidates = if h < EPSILON {
        vec![base]
    } else {
        let offset = unit.perp() * h;
        vec![base + offset, base - offset]
    };

    let mut points = Vec::new();
    for p in candidates {
        if arc_contains_constructed(a, p) && arc_contains_constructed(b, p) {
            push_unique(&mut points, p);
        }
    }
    points
}
