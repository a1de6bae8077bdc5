//! Tolerance-based vertex deduplication
//!
//! Points are bucketed on a grid whose cell size equals the tolerance, so a
//! lookup only has to probe the 3x3 neighbourhood of the query cell.

use std::collections::HashMap;

use crate::primitive::Point;

/// Index of a vertex inside one [`VertexTable`]
pub type VertexId = usize;

/// Deduplicating point store with stable, call-local indices
#[derive(Debug, Clone)]
pub struct VertexTable {
    tolerance: f64,
    points: Vec<Point>,
    grid: HashMap<(i64, i64), Vec<VertexId>>,
}

impl VertexTable {
    /// Create an empty table merging points closer than `tolerance` on both axes
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            points: Vec::new(),
            grid: HashMap::new(),
        }
    }

    fn cell(&self, point: Point) -> (i64, i64) {
        (
            (point.x / self.tolerance).floor() as i64,
            (point.y / self.tolerance).floor() as i64,
        )
    }

    /// Find the vertex equal to `point`, if any
    pub fn find(&self, point: Point) -> Option<VertexId> {
        let (cx, cy) = self.cell(point);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(ids) = self.grid.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &id in ids {
                    let p = self.points[id];
                    if (p.x - point.x).abs() < self.tolerance
                        && (p.y - point.y).abs() < self.tolerance
                    {
                        return Some(id);
                    }
                }
            }
        }
        None
    }

    /// Return the id of the vertex equal to `point`, inserting it if new
    pub fn insert(&mut self, point: Point) -> VertexId {
        if let Some(id) = self.find(point) {
            return id;
        }
        let id = self.points.len();
        self.points.push(point);
        let cell = self.cell(point);
        self.grid.entry(cell).or_default().push(id);
        id
    }

    /// Position of a vertex
    pub fn point(&self, id: VertexId) -> Point {
        self.points[id]
    }

    /// Number of distinct vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
