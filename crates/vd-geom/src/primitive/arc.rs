//! Circular arcs

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use super::{BoundingBox, Point};
use crate::constants::{ANGLE_EPSILON, EPSILON};

/// A circular arc.
///
/// The arc travels from `start_angle` to `end_angle` (radians), with
/// increasing angle when `ccw` is set and decreasing angle otherwise. The
/// sweep is always in `(0, 2π]`; a sweep of `2π` is a full-sweep arc whose
/// start and end points coincide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// Center of the supporting circle
    pub center: Point,
    /// Radius of the supporting circle
    pub radius: f64,
    /// Angle of the start point
    pub start_angle: f64,
    /// Angle of the end point
    pub end_angle: f64,
    /// Travel direction
    pub ccw: bool,
}

impl Arc {
    /// Create a new arc
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64, ccw: bool) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            ccw,
        }
    }

    /// Full-sweep counter-clockwise arc starting at angle 0
    pub fn full_circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius, 0.0, TAU, true)
    }

    /// Angular extent travelled from start to end, in `[0, 2π]`
    pub fn sweep(&self) -> f64 {
        let raw = if self.ccw {
            self.end_angle - self.start_angle
        } else {
            self.start_angle - self.end_angle
        };
        let sweep = raw.rem_euclid(TAU);
        if sweep < ANGLE_EPSILON {
            // 0 and 2π wrap onto each other; the raw span tells them apart
            if raw.abs() > ANGLE_EPSILON { TAU } else { 0.0 }
        } else {
            sweep
        }
    }

    /// Whether the arc covers the whole circle
    pub fn is_full(&self) -> bool {
        self.sweep() >= TAU - ANGLE_EPSILON
    }

    /// Arc length
    pub fn length(&self) -> f64 {
        self.radius * self.sweep()
    }

    /// Zero radius or zero sweep
    pub fn is_degenerate(&self) -> bool {
        self.radius < EPSILON || self.length() < EPSILON
    }

    /// Angular tolerance matching [`EPSILON`] at this radius
    pub fn angle_tolerance(&self) -> f64 {
        (EPSILON / self.radius.max(EPSILON)).clamp(ANGLE_EPSILON, PI)
    }

    /// Point on the supporting circle at `angle`
    pub fn point_at_angle(&self, angle: f64) -> Point {
        self.center + Point::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Start point
    pub fn start_point(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    /// End point
    pub fn end_point(&self) -> Point {
        self.point_at_angle(self.end_angle)
    }

    /// Absolute angle reached after travelling `offset` radians from the start
    pub fn angle_at(&self, offset: f64) -> f64 {
        if self.ccw {
            self.start_angle + offset
        } else {
            self.start_angle - offset
        }
    }

    /// Point reached after travelling `offset` radians from the start
    pub fn point_at_offset(&self, offset: f64) -> Point {
        self.point_at_angle(self.angle_at(offset))
    }

    /// Point halfway along the arc
    pub fn midpoint(&self) -> Point {
        self.point_at_offset(self.sweep() * 0.5)
    }

    /// Travel offset of `angle` from the start, in `[0, 2π)`.
    ///
    /// Offsets within tolerance of a full turn fold back to 0.
    pub fn offset_of(&self, angle: f64) -> f64 {
        let offset = if self.ccw {
            (angle - self.start_angle).rem_euclid(TAU)
        } else {
            (self.start_angle - angle).rem_euclid(TAU)
        };
        if offset > TAU - self.angle_tolerance() {
            0.0
        } else {
            offset
        }
    }

    /// Travel offset of the projection of `point` onto the circle
    pub fn offset_of_point(&self, point: Point) -> f64 {
        let d = point - self.center;
        self.offset_of(d.y.atan2(d.x))
    }

    /// Whether `angle` falls within the swept range
    pub fn contains_angle(&self, angle: f64) -> bool {
        if self.is_full() {
            return true;
        }
        self.offset_of(angle) <= self.sweep() + self.angle_tolerance()
    }

    /// Whether `point` lies on the arc (within tolerance)
    pub fn contains_point(&self, point: Point) -> bool {
        let d = point - self.center;
        if (d.length() - self.radius).abs() >= EPSILON {
            return false;
        }
        self.contains_angle(d.y.atan2(d.x))
    }

    /// Same arc traversed the other way
    pub fn reversed(&self) -> Self {
        Self {
            center: self.center,
            radius: self.radius,
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            ccw: !self.ccw,
        }
    }

    /// Piece of this arc between two travel offsets (`from < to`)
    pub fn sub_arc(&self, from: f64, to: f64) -> Self {
        Self {
            center: self.center,
            radius: self.radius,
            start_angle: self.angle_at(from),
            end_angle: self.angle_at(to),
            ccw: self.ccw,
        }
    }

    /// The two halves of this arc, split at its midpoint
    pub fn halves(&self) -> [Arc; 2] {
        let sweep = self.sweep();
        [self.sub_arc(0.0, sweep * 0.5), self.sub_arc(sweep * 0.5, sweep)]
    }

    /// Points at 0°, 90°, 180° and 270° that lie on the arc
    pub fn cardinal_points(&self) -> Vec<Point> {
        (0..4)
            .map(|i| i as f64 * FRAC_PI_2)
            .filter(|angle| self.contains_angle(*angle))
            .map(|angle| self.point_at_angle(angle))
            .collect()
    }

    /// Closest point on the arc to `point`
    pub fn closest_point(&self, point: Point) -> Point {
        let d = point - self.center;
        if d.length() < EPSILON {
            return self.start_point();
        }
        let angle = d.y.atan2(d.x);
        if self.contains_angle(angle) {
            return self.point_at_angle(angle);
        }
        let start = self.start_point();
        let end = self.end_point();
        if start.distance_squared(point) <= end.distance_squared(point) {
            start
        } else {
            end
        }
    }

    /// Distance from `point` to the arc
    pub fn distance_to(&self, point: Point) -> f64 {
        self.closest_point(point).distance(point)
    }

    /// Tight axis-aligned bounds (endpoints plus any cardinal extreme on the sweep)
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(
            [self.start_point(), self.end_point()]
                .into_iter()
                .chain(self.cardinal_points()),
        )
    }
}
