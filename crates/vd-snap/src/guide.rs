//! Angle guide lines
//!
//! A guide is a construction line through an anchor point at a multiple of
//! the angle step. Lines are bidirectional, so only `[0°, 180°)` is
//! generated per anchor.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use vd_geom::{Edge, GUIDE_EXTENT, Point, Segment};

/// Smallest usable angle step (degrees); finer steps are clamped to it
pub const MIN_ANGLE_STEP: f64 = 0.1;

/// Construction line through `origin` at `angle` degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleGuideLine {
    /// Anchor the guide passes through
    pub origin: Point,
    /// Angle in degrees, in `[0, 180)`
    pub angle: f64,
    /// The guide clipped to `GUIDE_EXTENT` on each side of the origin
    pub segment: Segment,
}

impl AngleGuideLine {
    /// Guide through `origin` at `angle` degrees
    pub fn new(origin: Point, angle: f64) -> Self {
        let reach = DVec2::from_angle(angle.to_radians()) * GUIDE_EXTENT;
        Self {
            origin,
            angle,
            segment: Segment::new(origin - reach, origin + reach),
        }
    }

    /// Unit direction of the guide
    pub fn direction(&self) -> DVec2 {
        DVec2::from_angle(self.angle.to_radians())
    }

    /// Foot of the perpendicular from `point` onto the guide
    pub fn closest_point(&self, point: Point) -> Point {
        self.segment.closest_point_on_line(point)
    }

    /// Perpendicular distance from `point` to the guide
    pub fn distance_to(&self, point: Point) -> f64 {
        self.closest_point(point).distance(point)
    }

    /// The guide as an edge, for intersection tests
    pub fn edge(&self) -> Edge {
        Edge::Segment(self.segment)
    }
}

/// Angles in degrees at multiples of `step` in `[0, 180)`.
///
/// Empty for a non-positive or non-finite step. Steps below
/// [`MIN_ANGLE_STEP`] are clamped, so a fan never exceeds 1800 lines.
pub fn guide_angles(step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let step = step.max(MIN_ANGLE_STEP);
    let count = (180.0 / step - 1e-9).ceil().max(1.0) as usize;
    (0..count).map(|i| i as f64 * step).collect()
}

/// Full guide fan through every anchor
pub fn generate_angle_guides(anchors: &[Point], step: f64) -> Vec<AngleGuideLine> {
    let angles = guide_angles(step);
    anchors
        .iter()
        .flat_map(|&origin| angles.iter().map(move |&angle| AngleGuideLine::new(origin, angle)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_guide_angles() {
        let angles = guide_angles(15.0);
        assert_eq!(angles.len(), 12);
        assert_relative_eq!(angles[11], 165.0);

        assert_eq!(guide_angles(45.0), vec![0.0, 45.0, 90.0, 135.0]);
        assert_eq!(guide_angles(7.0).len(), 26);
        assert_eq!(guide_angles(200.0), vec![0.0]);
    }

    #[test]
    fn test_tiny_step_is_clamped() {
        let angles = guide_angles(1e-7);
        assert_eq!(angles.len(), 1800);
        assert_relative_eq!(angles[1], MIN_ANGLE_STEP);
        assert!(angles.iter().all(|a| *a < 180.0));
        assert_eq!(generate_angle_guides(&[Point::ZERO, Point::ONE], 1e-12).len(), 3600);
    }

    #[test]
    fn test_invalid_step_yields_no_guides() {
        assert!(guide_angles(0.0).is_empty());
        assert!(guide_angles(-15.0).is_empty());
        assert!(guide_angles(f64::NAN).is_empty());
        assert!(generate_angle_guides(&[Point::ZERO], f64::INFINITY).is_empty());
    }

    #[test]
    fn test_fan_per_anchor() {
        let anchors = [Point::ZERO, Point::new(10.0, 0.0)];
        let guides = generate_angle_guides(&anchors, 45.0);
        assert_eq!(guides.len(), 8);
        assert!(guides[..4].iter().all(|g| g.origin == anchors[0]));
        assert!(guides[4..].iter().all(|g| g.origin == anchors[1]));
    }

    #[test]
    fn test_guide_projection() {
        let guide = AngleGuideLine::new(Point::new(1.0, 1.0), 45.0);
        let foot = guide.closest_point(Point::new(3.0, 1.0));
        assert_relative_eq!(foot.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(foot.y, 2.0, epsilon = 1e-6);
        assert_relative_eq!(guide.distance_to(Point::new(3.0, 1.0)), 2f64.sqrt(), epsilon = 1e-6);

        // Bidirectional: points behind the origin project too
        let behind = guide.closest_point(Point::new(-5.0, -5.0));
        assert_relative_eq!(behind.x, -5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_horizontal_guide_direction() {
        let guide = AngleGuideLine::new(Point::ZERO, 0.0);
        assert_relative_eq!(guide.direction().x, 1.0);
        assert_relative_eq!(guide.segment.start.x, -GUIDE_EXTENT);
        assert_relative_eq!(guide.segment.end.x, GUIDE_EXTENT);
    }
}
