//! Enclosing boundary detection
//!
//! Finds the innermost closed loop around a query point, from closed shapes
//! that contain it directly and from simple cycles formed by the split
//! outlines of every shape in the drawing.

mod graph;

pub use graph::{BoundaryGraph, Component};

use tracing::{debug, trace};

use crate::loops::Loop;
use crate::primitive::{Edge, Point, Shape};
use crate::split::split_edges_at_intersections;

/// Find the smallest loop that encloses `point`.
///
/// Candidates are closed shapes containing the point and every simple cycle
/// of the split drawing that contains it. Among them the loop with the
/// smallest bounding-box area wins, which picks the inner loop when loops
/// are nested. The returned loop is chained. `None` means no region
/// encloses the point.
pub fn find_enclosing_boundary(point: Point, shapes: &[Shape]) -> Option<Loop> {
    let mut candidates: Vec<Loop> = shapes
        .iter()
        .filter(|shape| shape.is_closed() && shape.contains_point(point))
        .map(|shape| Loop::new(shape.edges()))
        .filter(|candidate| !candidate.is_empty())
        .collect();
    let direct = candidates.len();

    candidates.extend(
        closed_loops(shapes)
            .into_iter()
            .filter(|candidate| candidate.contains_point(point)),
    );

    debug!(
        direct,
        cycles = candidates.len() - direct,
        "enclosing boundary candidates"
    );

    let mut best: Option<(f64, Loop)> = None;
    for candidate in candidates {
        let area = candidate.bounding_box().area();
        trace!(area, edges = candidate.len(), "boundary candidate");
        match &best {
            Some((best_area, _)) if *best_area <= area => {}
            _ => best = Some((area, candidate)),
        }
    }

    best.map(|(_, mut boundary)| {
        boundary.normalize_orientation();
        boundary
    })
}

/// Every simple closed cycle formed by the split outlines of `shapes`.
///
/// Loops are chained; no containment filter is applied.
pub fn find_closed_loops(shapes: &[Shape]) -> Vec<Loop> {
    closed_loops(shapes)
        .into_iter()
        .map(|mut boundary| {
            boundary.normalize_orientation();
            boundary
        })
        .collect()
}

fn closed_loops(shapes: &[Shape]) -> Vec<Loop> {
    let edges: Vec<Edge> = shapes.iter().flat_map(Shape::edges).collect();
    let split = split_edges_at_intersections(&edges);
    let graph = BoundaryGraph::build(&split);

    graph
        .components()
        .iter()
        .filter(|component| graph.is_simple_cycle(component))
        .map(|component| graph.walk_cycle(component))
        .collect()
}
