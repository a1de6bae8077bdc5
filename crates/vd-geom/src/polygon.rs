//! Closed-polygon validation and ordering for user selections
//!
//! [`check_closed_polygon`] is used where the caller needs a diagnostic
//! (turning a selection into a polyline), [`is_closed_polygon`] where a
//! cheap yes/no is enough and nothing may fail.

use thiserror::Error;
use tracing::debug;

use crate::constants::EPSILON;
use crate::loops::Loop;
use crate::primitive::{Edge, Point};
use crate::vertex::{VertexId, VertexTable};

/// Why a selection cannot be turned into a single closed polygon
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonError {
    /// An edge starts and ends at the same point
    #[error("Edge {index} has zero length")]
    ZeroLengthEdge {
        /// Position of the edge in the selection
        index: usize,
    },

    /// A closed loop has as many distinct endpoints as edges
    #[error("Selection has {points} distinct endpoints for {edges} edges")]
    PointEdgeCountMismatch {
        /// Distinct endpoints after merging
        points: usize,
        /// Edges in the selection
        edges: usize,
    },

    /// An endpoint is not shared by exactly two edges
    #[error("Selection is not closed: {degree} edges meet at {point}")]
    DegreeMismatch {
        /// Offending endpoint
        point: Point,
        /// Number of edges touching it
        degree: usize,
    },
}

/// Result type for polygon checks
pub type PolygonResult<T> = Result<T, PolygonError>;

/// Endpoint incidence of a selection that passed the structural checks
struct Incidence {
    ends: Vec<(VertexId, VertexId)>,
    incident: Vec<Vec<usize>>,
}

impl Incidence {
    /// Zero-length edges, endpoint count and per-vertex degree, in that order
    fn analyze(edges: &[Edge]) -> PolygonResult<Self> {
        if let Some(index) = edges.iter().position(Edge::is_degenerate) {
            return Err(PolygonError::ZeroLengthEdge { index });
        }

        let mut vertices = VertexTable::new(EPSILON);
        let ends: Vec<(VertexId, VertexId)> = edges
            .iter()
            .map(|e| (vertices.insert(e.start()), vertices.insert(e.end())))
            .collect();

        if vertices.len() != edges.len() {
            return Err(PolygonError::PointEdgeCountMismatch {
                points: vertices.len(),
                edges: edges.len(),
            });
        }

        let mut incident = vec![Vec::new(); vertices.len()];
        for (i, &(a, b)) in ends.iter().enumerate() {
            incident[a].push(i);
            incident[b].push(i);
        }

        if let Some(v) = (0..incident.len()).find(|&v| incident[v].len() != 2) {
            return Err(PolygonError::DegreeMismatch {
                point: vertices.point(v),
                degree: incident[v].len(),
            });
        }

        Ok(Self { ends, incident })
    }

    /// Flood fill from vertex 0 reaches every vertex
    fn is_connected(&self) -> bool {
        let mut visited = vec![false; self.incident.len()];
        let mut stack = vec![0];
        visited[0] = true;
        let mut reached = 1;

        while let Some(v) = stack.pop() {
            for &e in &self.incident[v] {
                let (a, b) = self.ends[e];
                let other = if a == v { b } else { a };
                if !visited[other] {
                    visited[other] = true;
                    reached += 1;
                    stack.push(other);
                }
            }
        }
        reached == self.incident.len()
    }

    /// Chain the edges starting with edge 0 in its own direction
    fn order(&self, edges: &[Edge]) -> Vec<Edge> {
        let mut used = vec![false; edges.len()];
        let mut ordered = Vec::with_capacity(edges.len());

        used[0] = true;
        ordered.push(edges[0]);
        let mut current = self.ends[0].1;

        while ordered.len() < edges.len() {
            let Some(&next) = self.incident[current].iter().find(|&&e| !used[e]) else {
                break;
            };
            used[next] = true;
            let (a, b) = self.ends[next];
            if a == current {
                ordered.push(edges[next]);
                current = b;
            } else {
                ordered.push(edges[next].reversed());
                current = a;
            }
        }
        ordered
    }
}

/// Validate that `edges` form exactly one closed loop and return it chained.
///
/// The loop starts with the first input edge in its own direction; the
/// other edges are reordered and reversed as needed. Returns `Ok(None)` for
/// an empty selection or when the edges form several disjoint loops.
pub fn check_closed_polygon(edges: &[Edge]) -> PolygonResult<Option<Loop>> {
    if edges.is_empty() {
        return Ok(None);
    }

    let incidence = Incidence::analyze(edges)?;
    if !incidence.is_connected() {
        debug!(edges = edges.len(), "selection forms more than one loop");
        return Ok(None);
    }

    Ok(Some(Loop::new(incidence.order(edges))))
}

/// Whether `edges` form exactly one simple closed loop. Never fails.
pub fn is_closed_polygon(edges: &[Edge]) -> bool {
    if edges.is_empty() {
        return false;
    }
    match Incidence::analyze(edges) {
        Ok(incidence) => incidence.is_connected(),
        Err(err) => {
            debug!(%err, "selection is not a closed polygon");
            false
        }
    }
}
