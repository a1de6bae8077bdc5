//! Per-frame snap resolution
//!
//! Entity anchors and entity-entity intersections always outrank angle
//! guide candidates; the guides are only a fallback when no concrete anchor
//! is within reach of the cursor.

use serde::{Deserialize, Serialize};
use tracing::trace;
use vd_geom::{Point, Shape, intersect_edges, intersect_shapes, points_equal};

use crate::entity::SnapEntity;
use crate::guide::{AngleGuideLine, generate_angle_guides};
use crate::snap_point::{SnapKind, SnapPoint};

/// Outcome of one snap pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapResolution {
    /// Guides passing within the snap radius of the cursor, nearest first
    pub angle_guides: Vec<AngleGuideLine>,
    /// Closest entity anchor or intersection within the radius
    pub entity_snap: Option<SnapPoint>,
    /// Closest guide-derived candidate within the radius
    pub angle_snap: Option<SnapPoint>,
}

impl SnapResolution {
    /// The point the cursor should lock onto
    pub fn best(&self) -> Option<SnapPoint> {
        self.entity_snap.or(self.angle_snap)
    }

    /// Whether nothing was found
    pub fn is_empty(&self) -> bool {
        self.entity_snap.is_none() && self.angle_snap.is_none()
    }
}

/// Resolve the snap point for `cursor`.
///
/// `anchor_points` seed the angle guide fans (the first point of the entity
/// being drawn plus marked hover points), `angle_step` is in degrees.
pub fn resolve_snap<E: SnapEntity>(
    entities: &[E],
    anchor_points: &[Point],
    cursor: Point,
    angle_step: f64,
    snap_radius: f64,
) -> SnapResolution {
    let angle_guides = guides_near(anchor_points, cursor, angle_step, snap_radius);

    let entity_candidates = entity_snap_points(entities);
    let entity_snap = closest_snap_point_within_radius(&entity_candidates, cursor, snap_radius);

    let shapes: Vec<Shape> = entities.iter().filter_map(E::shape).collect();
    let angle_candidates = guide_snap_points(&angle_guides, &shapes, cursor);
    let angle_snap = closest_snap_point_within_radius(&angle_candidates, cursor, snap_radius);

    trace!(
        entities = entities.len(),
        anchors = anchor_points.len(),
        entity_candidates = entity_candidates.len(),
        guides = angle_guides.len(),
        "resolved snap"
    );

    SnapResolution {
        angle_guides,
        entity_snap,
        angle_snap,
    }
}

/// Pick the snap point for `cursor` out of a mixed candidate list.
///
/// Only candidates within `radius` count. Any concrete candidate beats every
/// [`SnapKind::AngleGuide`] candidate, even a nearer one; within each group
/// the nearest wins and ties go to the earlier candidate.
pub fn closest_snap_point_within_radius(
    candidates: &[SnapPoint],
    cursor: Point,
    radius: f64,
) -> Option<SnapPoint> {
    let nearest = |guides: bool| {
        candidates
            .iter()
            .filter(|c| c.kind.is_angle_guide() == guides)
            .map(|c| (c.distance_to(cursor), c))
            .filter(|(d, _)| *d <= radius)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, c)| *c)
    };
    nearest(false).or_else(|| nearest(true))
}

/// Own anchors of every entity plus pairwise intersections
fn entity_snap_points<E: SnapEntity>(entities: &[E]) -> Vec<SnapPoint> {
    let mut candidates: Vec<SnapPoint> = entities.iter().flat_map(E::snap_points).collect();
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            candidates.extend(
                a.intersections(b)
                    .into_iter()
                    .map(|p| SnapPoint::new(p, SnapKind::Intersection)),
            );
        }
    }
    candidates
}

/// Guides within `radius` of the cursor, nearest first
fn guides_near(anchors: &[Point], cursor: Point, step: f64, radius: f64) -> Vec<AngleGuideLine> {
    let mut near: Vec<(f64, AngleGuideLine)> = generate_angle_guides(anchors, step)
        .into_iter()
        .map(|g| (g.distance_to(cursor), g))
        .filter(|(d, _)| *d <= radius)
        .collect();
    near.sort_by(|a, b| a.0.total_cmp(&b.0));
    near.into_iter().map(|(_, g)| g).collect()
}

/// Candidates derived from the guides near the cursor.
///
/// The projection of the cursor onto the nearest guide, plus crossings of
/// the guides with entities and with guides of other anchors. A guide that
/// is out of reach cannot contribute a crossing within reach, so only the
/// near guides are considered.
fn guide_snap_points(guides: &[AngleGuideLine], shapes: &[Shape], cursor: Point) -> Vec<SnapPoint> {
    let Some(closest) = guides.first() else {
        return Vec::new();
    };
    let mut candidates = vec![SnapPoint::new(closest.closest_point(cursor), SnapKind::AngleGuide)];

    for guide in guides {
        let line = Shape::Segment(guide.segment);
        for shape in shapes {
            candidates.extend(
                intersect_shapes(&line, shape)
                    .into_iter()
                    .map(|p| SnapPoint::new(p, SnapKind::Intersection)),
            );
        }
    }

    for (i, a) in guides.iter().enumerate() {
        for b in &guides[i + 1..] {
            if points_equal(a.origin, b.origin) {
                continue;
            }
            candidates.extend(
                intersect_edges(&a.edge(), &b.edge())
                    .into_iter()
                    .map(|p| SnapPoint::new(p, SnapKind::Intersection)),
            );
        }
    }
    candidates
}
