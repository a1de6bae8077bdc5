//! Capability interface between drawing entities and the snap engine

use vd_geom::{Arc, Edge, Point, Shape, intersect_shapes, points_equal};

use crate::snap_point::{SnapKind, SnapPoint};

/// What the snap engine needs from a drawing entity.
///
/// The editor's entity types implement this; [`Shape`] and [`PointEntity`]
/// have stock implementations.
pub trait SnapEntity {
    /// Underlying geometry, if the entity has any
    fn shape(&self) -> Option<Shape>;

    /// Anchors the cursor can lock onto
    fn snap_points(&self) -> Vec<SnapPoint>;

    /// Points shared with another entity
    fn intersections(&self, other: &dyn SnapEntity) -> Vec<Point> {
        match (self.shape(), other.shape()) {
            (Some(a), Some(b)) => intersect_shapes(&a, &b),
            _ => Vec::new(),
        }
    }

    /// Distance from `point` to the entity
    fn distance_to(&self, point: Point) -> f64;
}

impl<T: SnapEntity + ?Sized> SnapEntity for Box<T> {
    fn shape(&self) -> Option<Shape> {
        (**self).shape()
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        (**self).snap_points()
    }

    fn intersections(&self, other: &dyn SnapEntity) -> Vec<Point> {
        (**self).intersections(other)
    }

    fn distance_to(&self, point: Point) -> f64 {
        (**self).distance_to(point)
    }
}

impl SnapEntity for Shape {
    fn shape(&self) -> Option<Shape> {
        Some(self.clone())
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        match self {
            Shape::Segment(segment) => vec![
                SnapPoint::new(segment.start, SnapKind::LineEndPoint),
                SnapPoint::new(segment.end, SnapKind::LineEndPoint),
                SnapPoint::new(segment.midpoint(), SnapKind::LineMidPoint),
            ],
            Shape::Arc(arc) if arc.is_full() => circle_snap_points(arc),
            Shape::Arc(arc) => {
                let (start, end) = (arc.start_point(), arc.end_point());
                let mut points = vec![
                    SnapPoint::new(start, SnapKind::LineEndPoint),
                    SnapPoint::new(end, SnapKind::LineEndPoint),
                    SnapPoint::new(arc.midpoint(), SnapKind::LineMidPoint),
                    SnapPoint::new(arc.center, SnapKind::CircleCenter),
                ];
                points.extend(
                    arc.cardinal_points()
                        .into_iter()
                        .filter(|p| !points_equal(*p, start) && !points_equal(*p, end))
                        .map(|p| SnapPoint::new(p, SnapKind::CircleCardinal)),
                );
                points
            }
            Shape::Circle { center, radius } => {
                circle_snap_points(&Arc::full_circle(*center, *radius))
            }
            Shape::Rect { min, max } => {
                let mut points = side_snap_points(&self.edges());
                points.push(SnapPoint::new((*min + *max) * 0.5, SnapKind::CircleCenter));
                points
            }
            Shape::Polygon { .. } => side_snap_points(&self.edges()),
        }
    }

    fn distance_to(&self, point: Point) -> f64 {
        Shape::distance_to(self, point)
    }
}

/// Center and the four cardinal points
fn circle_snap_points(arc: &Arc) -> Vec<SnapPoint> {
    std::iter::once(SnapPoint::new(arc.center, SnapKind::CircleCenter))
        .chain(
            arc.cardinal_points()
                .into_iter()
                .map(|p| SnapPoint::new(p, SnapKind::CircleCardinal)),
        )
        .collect()
}

/// Vertices and side midpoints of a closed chain
fn side_snap_points(edges: &[Edge]) -> Vec<SnapPoint> {
    let vertices = edges
        .iter()
        .map(|e| SnapPoint::new(e.start(), SnapKind::LineEndPoint));
    let midpoints = edges
        .iter()
        .map(|e| SnapPoint::new(e.midpoint(), SnapKind::LineMidPoint));
    vertices.chain(midpoints).collect()
}

/// A standalone point in the drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEntity {
    /// Position
    pub point: Point,
}

impl PointEntity {
    /// Create a point entity
    pub fn new(point: Point) -> Self {
        Self { point }
    }
}

impl SnapEntity for PointEntity {
    fn shape(&self) -> Option<Shape> {
        None
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        vec![SnapPoint::new(self.point, SnapKind::Point)]
    }

    fn distance_to(&self, point: Point) -> f64 {
        self.point.distance(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn count(points: &[SnapPoint], kind: SnapKind) -> usize {
        points.iter().filter(|s| s.kind == kind).count()
    }

    #[test]
    fn test_segment_snap_points() {
        let points = Shape::segment(p(0.0, 0.0), p(4.0, 2.0)).snap_points();
        assert_eq!(count(&points, SnapKind::LineEndPoint), 2);
        assert_eq!(points[2], SnapPoint::new(p(2.0, 1.0), SnapKind::LineMidPoint));
    }

    #[test]
    fn test_circle_snap_points() {
        let points = Shape::circle(p(1.0, 1.0), 2.0).snap_points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], SnapPoint::new(p(1.0, 1.0), SnapKind::CircleCenter));
        assert_eq!(count(&points, SnapKind::CircleCardinal), 4);
        assert!(points.iter().any(|s| points_equal(s.point, p(1.0, 3.0))));
    }

    #[test]
    fn test_arc_snap_points_skip_cardinals_at_endpoints() {
        // Quarter arc from 0 to 90 degrees: both cardinals coincide with endpoints
        let shape = Shape::Arc(Arc::new(p(0.0, 0.0), 1.0, 0.0, PI / 2.0, true));
        let points = shape.snap_points();
        assert_eq!(count(&points, SnapKind::LineEndPoint), 2);
        assert_eq!(count(&points, SnapKind::CircleCardinal), 0);
        assert_eq!(count(&points, SnapKind::CircleCenter), 1);

        let mid = points
            .iter()
            .find(|s| s.kind == SnapKind::LineMidPoint)
            .unwrap();
        assert_relative_eq!(mid.point.x, (PI / 4.0).cos(), epsilon = 1e-9);
        assert_relative_eq!(mid.point.y, (PI / 4.0).sin(), epsilon = 1e-9);
    }

    #[test]
    fn test_arc_snap_points_include_inner_cardinal() {
        let shape = Shape::Arc(Arc::new(p(0.0, 0.0), 1.0, -PI / 4.0, PI / 4.0, true));
        let points = shape.snap_points();
        let cardinals: Vec<_> = points
            .iter()
            .filter(|s| s.kind == SnapKind::CircleCardinal)
            .collect();
        assert_eq!(cardinals.len(), 1);
        assert!(points_equal(cardinals[0].point, p(1.0, 0.0)));
    }

    #[test]
    fn test_rect_snap_points() {
        let points = Shape::rect(p(0.0, 0.0), p(4.0, 2.0)).snap_points();
        assert_eq!(count(&points, SnapKind::LineEndPoint), 4);
        assert_eq!(count(&points, SnapKind::LineMidPoint), 4);
        assert!(points.contains(&SnapPoint::new(p(2.0, 1.0), SnapKind::CircleCenter)));
        assert!(points.contains(&SnapPoint::new(p(4.0, 1.0), SnapKind::LineMidPoint)));
    }

    #[test]
    fn test_polygon_snap_points() {
        let shape = Shape::polygon(vec![p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0)]);
        let points = shape.snap_points();
        assert_eq!(count(&points, SnapKind::LineEndPoint), 3);
        assert_eq!(count(&points, SnapKind::LineMidPoint), 3);
        assert!(points.contains(&SnapPoint::new(p(1.0, 1.0), SnapKind::LineMidPoint)));
    }

    #[test]
    fn test_shape_intersections() {
        let a = Shape::segment(p(-2.0, 0.0), p(2.0, 0.0));
        let b = Shape::circle(p(0.0, 0.0), 1.0);
        let points = a.intersections(&b);
        assert_eq!(points.len(), 2);
        assert!(points.iter().any(|q| points_equal(*q, p(1.0, 0.0))));
        assert!(points.iter().any(|q| points_equal(*q, p(-1.0, 0.0))));
    }

    #[test]
    fn test_point_entity() {
        let entity = PointEntity::new(p(1.0, 1.0));
        let line = Shape::segment(p(0.0, 1.0), p(2.0, 1.0));
        assert!(entity.shape().is_none());
        assert!(entity.intersections(&line).is_empty());
        assert!(line.intersections(&entity).is_empty());
        assert_eq!(entity.snap_points(), vec![SnapPoint::new(p(1.0, 1.0), SnapKind::Point)]);
        assert_relative_eq!(entity.distance_to(p(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_boxed_entities() {
        let entities: Vec<Box<dyn SnapEntity>> = vec![
            Box::new(Shape::segment(p(0.0, 0.0), p(2.0, 0.0))),
            Box::new(PointEntity::new(p(5.0, 5.0))),
        ];
        assert_eq!(entities[0].snap_points().len(), 3);
        assert_relative_eq!(entities[0].distance_to(p(1.0, 3.0)), 3.0);
        assert!(entities[1].shape().is_none());
    }
}
