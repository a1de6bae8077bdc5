//! Axis-aligned bounding boxes in the drawing plane.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: DVec2,
    /// Maximum corner of the bounding box.
    pub max: DVec2,
}

impl BoundingBox {
    /// Creates a new bounding box from min and max points.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Creates an empty (inverted) bounding box.
    pub fn empty() -> Self {
        Self {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    /// Creates a bounding box that contains all given points.
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Self {
        let mut bbox = Self::empty();
        for point in points {
            bbox = bbox.expand_to_include(point);
        }
        bbox
    }

    /// Returns true if no point has been added yet.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Returns the size (full extents) of the bounding box.
    pub fn size(&self) -> DVec2 {
        if self.is_empty() {
            DVec2::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Returns the area of the bounding box.
    pub fn area(&self) -> f64 {
        let size = self.size();
        size.x * size.y
    }

    /// Returns true if the bounding box contains the given point.
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns true if this bounding box intersects another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns the union of two bounding boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns a new bounding box expanded to include the given point.
    pub fn expand_to_include(&self, point: DVec2) -> BoundingBox {
        BoundingBox {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Returns a copy grown by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> BoundingBox {
        BoundingBox {
            min: self.min - DVec2::splat(margin),
            max: self.max + DVec2::splat(margin),
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points() {
        let bbox = BoundingBox::from_points([
            DVec2::new(1.0, -2.0),
            DVec2::new(-3.0, 4.0),
            DVec2::new(0.0, 0.0),
        ]);
        assert_eq!(bbox.min, DVec2::new(-3.0, -2.0));
        assert_eq!(bbox.max, DVec2::new(1.0, 4.0));
        assert_relative_eq!(bbox.area(), 24.0);
    }

    #[test]
    fn test_empty_has_zero_area() {
        let bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
        assert_eq!(bbox.area(), 0.0);
    }

    #[test]
    fn test_intersects_touching() {
        let a = BoundingBox::new(DVec2::ZERO, DVec2::new(1.0, 1.0));
        let b = BoundingBox::new(DVec2::new(1.0, 0.0), DVec2::new(2.0, 1.0));
        let c = BoundingBox::new(DVec2::new(1.5, 0.0), DVec2::new(2.0, 1.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.expanded(0.6).intersects(&c));
    }
}
