//! Snap point types

use serde::{Deserialize, Serialize};
use vd_geom::Point;

/// What a snap point was derived from.
///
/// Drives the marker drawn by the renderer and the snap priority: every
/// kind except [`SnapKind::AngleGuide`] is a concrete anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapKind {
    /// Endpoint of a segment, arc or polygon side
    LineEndPoint,
    /// Midpoint of a segment, arc or polygon side
    LineMidPoint,
    /// Center of a circle, arc or rectangle
    CircleCenter,
    /// Point at 0°, 90°, 180° or 270° on a circle or arc
    CircleCardinal,
    /// Crossing of two curves
    Intersection,
    /// Point on an angle guide line
    AngleGuide,
    /// Standalone point entity
    Point,
}

impl SnapKind {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            SnapKind::LineEndPoint => "Endpoint",
            SnapKind::LineMidPoint => "Midpoint",
            SnapKind::CircleCenter => "Center",
            SnapKind::CircleCardinal => "Quadrant",
            SnapKind::Intersection => "Intersection",
            SnapKind::AngleGuide => "Angle guide",
            SnapKind::Point => "Point",
        }
    }

    /// Whether this kind only ever comes from an angle guide
    pub fn is_angle_guide(&self) -> bool {
        matches!(self, SnapKind::AngleGuide)
    }
}

/// A world-space anchor the cursor can lock onto
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapPoint {
    /// World position
    pub point: Point,
    /// Origin of the point
    pub kind: SnapKind,
}

impl SnapPoint {
    /// Create a new snap point
    pub fn new(point: Point, kind: SnapKind) -> Self {
        Self { point, kind }
    }

    /// Distance from the snap point to `point`
    pub fn distance_to(&self, point: Point) -> f64 {
        self.point.distance(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_guides_are_guides() {
        assert!(SnapKind::AngleGuide.is_angle_guide());
        assert!(!SnapKind::Intersection.is_angle_guide());
        assert!(!SnapKind::Point.is_angle_guide());
    }

    #[test]
    fn test_snap_point_distance() {
        let snap = SnapPoint::new(Point::new(3.0, 4.0), SnapKind::LineEndPoint);
        assert_eq!(snap.distance_to(Point::ZERO), 5.0);
    }
}
