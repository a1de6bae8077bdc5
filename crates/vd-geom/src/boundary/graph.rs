//! Vertex/edge adjacency over split edges

use tracing::warn;

use crate::constants::EPSILON;
use crate::loops::Loop;
use crate::primitive::Edge;
use crate::vertex::{VertexId, VertexTable};

/// An edge with its endpoints resolved to vertices
#[derive(Debug, Clone)]
struct GraphEdge {
    edge: Edge,
    a: VertexId,
    b: VertexId,
}

/// A connected component of the graph
#[derive(Debug, Clone, Default)]
pub struct Component {
    /// Vertices reached by the flood fill
    pub vertices: Vec<VertexId>,
    /// Edges incident to those vertices (each listed once)
    pub edges: Vec<usize>,
}

/// Undirected adjacency structure keyed by tolerance-based vertex identity
#[derive(Debug, Clone)]
pub struct BoundaryGraph {
    vertices: VertexTable,
    edges: Vec<GraphEdge>,
    incidence: Vec<Vec<usize>>,
}

impl BoundaryGraph {
    /// Build the graph; each edge adds one incidence at each endpoint.
    ///
    /// Edges whose endpoints resolve to the same vertex are dropped.
    pub fn build(edges: &[Edge]) -> Self {
        let mut vertices = VertexTable::new(EPSILON);
        let mut graph_edges = Vec::with_capacity(edges.len());
        let mut incidence: Vec<Vec<usize>> = Vec::new();

        for edge in edges {
            let a = vertices.insert(edge.start());
            let b = vertices.insert(edge.end());
            if incidence.len() < vertices.len() {
                incidence.resize(vertices.len(), Vec::new());
            }
            if a == b {
                warn!(?edge, "dropping degenerate edge from boundary graph");
                continue;
            }
            let index = graph_edges.len();
            graph_edges.push(GraphEdge { edge: *edge, a, b });
            incidence[a].push(index);
            incidence[b].push(index);
        }

        Self {
            vertices,
            edges: graph_edges,
            incidence,
        }
    }

    /// Number of distinct vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of (non-degenerate) edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edge endpoints meeting at `vertex`
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.incidence[vertex].len()
    }

    /// Flood-fill connected components
    pub fn components(&self) -> Vec<Component> {
        let mut visited = vec![false; self.vertices.len()];
        let mut edge_seen = vec![false; self.edges.len()];
        let mut components = Vec::new();

        for seed in 0..self.vertices.len() {
            if visited[seed] || self.incidence[seed].is_empty() {
                continue;
            }
            let mut component = Component::default();
            let mut stack = vec![seed];
            visited[seed] = true;

            while let Some(v) = stack.pop() {
                component.vertices.push(v);
                for &e in &self.incidence[v] {
                    if !edge_seen[e] {
                        edge_seen[e] = true;
                        component.edges.push(e);
                    }
                    let ge = &self.edges[e];
                    let other = if ge.a == v { ge.b } else { ge.a };
                    if !visited[other] {
                        visited[other] = true;
                        stack.push(other);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// Every vertex has degree 2 and there are as many edges as vertices
    pub fn is_simple_cycle(&self, component: &Component) -> bool {
        !component.edges.is_empty()
            && component.edges.len() == component.vertices.len()
            && component.vertices.iter().all(|&v| self.degree(v) == 2)
    }

    /// Walk a simple-cycle component into a chained loop
    pub fn walk_cycle(&self, component: &Component) -> Loop {
        let mut used = vec![false; self.edges.len()];
        let mut edges = Vec::with_capacity(component.edges.len());

        let Some(&first) = component.edges.first() else {
            return Loop::new(edges);
        };
        used[first] = true;
        edges.push(self.edges[first].edge);
        let mut current = self.edges[first].b;

        while edges.len() < component.edges.len() {
            let Some(&next) = self.incidence[current].iter().find(|&&e| !used[e]) else {
                break;
            };
            used[next] = true;
            let ge = &self.edges[next];
            if ge.a == current {
                edges.push(ge.edge);
                current = ge.b;
            } else {
                edges.push(ge.edge.reversed());
                current = ge.a;
            }
        }
        Loop::new(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Point;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_triangle_is_simple_cycle() {
        let graph = BoundaryGraph::build(&[
            Edge::segment(p(0.0, 0.0), p(1.0, 0.0)),
            Edge::segment(p(0.0, 1.0), p(1.0, 0.0)),
            Edge::segment(p(0.0, 0.0), p(0.0, 1.0)),
        ]);
        let components = graph.components();
        assert_eq!(components.len(), 1);
        assert!(graph.is_simple_cycle(&components[0]));

        let boundary = graph.walk_cycle(&components[0]);
        assert_eq!(boundary.len(), 3);
        assert!(boundary.is_chained());
    }

    #[test]
    fn test_branching_component_is_rejected() {
        let graph = BoundaryGraph::build(&[
            Edge::segment(p(0.0, 0.0), p(1.0, 0.0)),
            Edge::segment(p(1.0, 0.0), p(0.0, 1.0)),
            Edge::segment(p(0.0, 1.0), p(0.0, 0.0)),
            Edge::segment(p(1.0, 0.0), p(2.0, 0.0)),
        ]);
        let components = graph.components();
        assert_eq!(components.len(), 1);
        assert!(!graph.is_simple_cycle(&components[0]));
    }

    #[test]
    fn test_open_chain_is_rejected() {
        let graph = BoundaryGraph::build(&[
            Edge::segment(p(0.0, 0.0), p(1.0, 0.0)),
            Edge::segment(p(1.0, 0.0), p(1.0, 1.0)),
        ]);
        let components = graph.components();
        assert!(!graph.is_simple_cycle(&components[0]));
    }

    #[test]
    fn test_degenerate_edge_dropped() {
        let graph = BoundaryGraph::build(&[
            Edge::segment(p(0.0, 0.0), p(0.0, 0.0)),
            Edge::segment(p(0.0, 0.0), p(1.0, 0.0)),
        ]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.vertex_count(), 2);
    }
}
