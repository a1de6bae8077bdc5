//! Hover dwell tracking and promotion of marked anchors
//!
//! Driven by a fixed timer. A snap point that stays the closest candidate
//! long enough is marked when the cursor leaves it; marked points seed
//! extra angle guide fans.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vd_geom::Point;

use crate::config::SnapConfig;
use crate::snap_point::SnapPoint;

/// A snap point and how long it has been the closest candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    /// The hovered snap point
    pub snap_point: SnapPoint,
    /// Accumulated dwell time (ms)
    pub dwell_ms: u64,
}

impl HoverPoint {
    /// Start tracking a snap point
    pub fn new(snap_point: SnapPoint) -> Self {
        Self {
            snap_point,
            dwell_ms: 0,
        }
    }

    /// World position
    pub fn point(&self) -> Point {
        self.snap_point.point
    }
}

/// Timer-driven dwell tracker with a bounded marked list
#[derive(Debug, Clone)]
pub struct HoverTracker {
    promote_after_ms: u64,
    proximity: f64,
    max_marked: usize,
    current: Option<HoverPoint>,
    marked: VecDeque<HoverPoint>,
}

impl Default for HoverTracker {
    fn default() -> Self {
        Self::from_config(&SnapConfig::default())
    }
}

impl HoverTracker {
    /// Create a tracker
    pub fn new(promote_after_ms: u64, proximity: f64, max_marked: usize) -> Self {
        Self {
            promote_after_ms,
            proximity,
            max_marked,
            current: None,
            marked: VecDeque::with_capacity(max_marked),
        }
    }

    /// Create a tracker from the hover settings of `config`
    pub fn from_config(config: &SnapConfig) -> Self {
        Self::new(
            config.promote_after_ms,
            config.hover_proximity,
            config.max_marked,
        )
    }

    /// Advance the timer by `elapsed_ms` with `closest` as this tick's
    /// closest snap point.
    ///
    /// Returns the point that got marked on this tick, if any.
    pub fn tick(&mut self, closest: Option<SnapPoint>, elapsed_ms: u64) -> Option<HoverPoint> {
        if let (Some(current), Some(snap)) = (self.current.as_mut(), closest) {
            if current.point().distance(snap.point) <= self.proximity {
                current.dwell_ms = current.dwell_ms.saturating_add(elapsed_ms);
                return None;
            }
        }

        let left = self.current.take();
        self.current = closest.map(HoverPoint::new);

        left.filter(|hover| hover.dwell_ms >= self.promote_after_ms)
            .and_then(|hover| self.mark(hover))
    }

    /// Append to the marked list, evicting the oldest when full.
    ///
    /// Returns `None` when an equal point is already marked or the list has
    /// no capacity.
    pub fn mark(&mut self, hover: HoverPoint) -> Option<HoverPoint> {
        if self.max_marked == 0 || self.is_marked(hover.point()) {
            return None;
        }
        if self.marked.len() >= self.max_marked {
            self.marked.pop_front();
        }
        debug!(
            x = hover.point().x,
            y = hover.point().y,
            dwell_ms = hover.dwell_ms,
            "marked hover point"
        );
        self.marked.push_back(hover);
        Some(hover)
    }

    /// Whether a marked point lies within the proximity threshold of `point`
    pub fn is_marked(&self, point: Point) -> bool {
        self.marked
            .iter()
            .any(|m| m.point().distance(point) <= self.proximity)
    }

    /// Point currently accumulating dwell time
    pub fn current(&self) -> Option<&HoverPoint> {
        self.current.as_ref()
    }

    /// Marked points, oldest first
    pub fn marked(&self) -> impl Iterator<Item = &HoverPoint> {
        self.marked.iter()
    }

    /// Positions of the marked points, oldest first
    pub fn marked_points(&self) -> Vec<Point> {
        self.marked.iter().map(HoverPoint::point).collect()
    }

    /// Forget every marked point
    pub fn clear_marked(&mut self) {
        self.marked.clear();
    }

    /// Forget the marked points and the tracked one
    pub fn reset(&mut self) {
        self.current = None;
        self.marked.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snap_point::SnapKind;

    fn snap(x: f64, y: f64) -> SnapPoint {
        SnapPoint::new(Point::new(x, y), SnapKind::LineEndPoint)
    }

    fn dwell(tracker: &mut HoverTracker, point: SnapPoint, ticks: usize) {
        for _ in 0..ticks {
            tracker.tick(Some(point), 100);
        }
    }

    #[test]
    fn test_dwell_accumulates_within_proximity() {
        let mut tracker = HoverTracker::new(500, 1.0, 5);
        tracker.tick(Some(snap(0.0, 0.0)), 100);
        assert_eq!(tracker.current().unwrap().dwell_ms, 0);

        tracker.tick(Some(snap(0.5, 0.0)), 100);
        tracker.tick(Some(snap(0.0, 0.5)), 100);
        let current = tracker.current().unwrap();
        assert_eq!(current.dwell_ms, 200);
        assert_eq!(current.point(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_promoted_when_left_after_threshold() {
        let mut tracker = HoverTracker::new(500, 1.0, 5);
        dwell(&mut tracker, snap(0.0, 0.0), 7);
        assert_eq!(tracker.marked().count(), 0);

        let promoted = tracker.tick(Some(snap(10.0, 0.0)), 100).unwrap();
        assert_eq!(promoted.point(), Point::new(0.0, 0.0));
        assert_eq!(promoted.dwell_ms, 600);
        assert_eq!(tracker.marked_points(), vec![Point::new(0.0, 0.0)]);
        assert_eq!(tracker.current().unwrap().point(), Point::new(10.0, 0.0));
    }

    #[test]
    fn test_short_hover_is_replaced() {
        let mut tracker = HoverTracker::new(500, 1.0, 5);
        dwell(&mut tracker, snap(0.0, 0.0), 3);
        assert!(tracker.tick(Some(snap(10.0, 0.0)), 100).is_none());
        assert!(tracker.tick(None, 100).is_none());
        assert_eq!(tracker.marked().count(), 0);
        assert!(tracker.current().is_none());
    }

    #[test]
    fn test_marked_list_evicts_oldest() {
        let mut tracker = HoverTracker::new(200, 1.0, 2);
        for x in [0.0, 10.0, 20.0] {
            dwell(&mut tracker, snap(x, 0.0), 4);
        }
        tracker.tick(None, 100);

        assert_eq!(
            tracker.marked_points(),
            vec![Point::new(10.0, 0.0), Point::new(20.0, 0.0)]
        );
    }

    #[test]
    fn test_marked_point_not_duplicated() {
        let mut tracker = HoverTracker::new(200, 1.0, 5);
        dwell(&mut tracker, snap(0.0, 0.0), 4);
        tracker.tick(None, 100);
        dwell(&mut tracker, snap(0.2, 0.0), 4);
        assert!(tracker.tick(None, 100).is_none());

        assert_eq!(tracker.marked().count(), 1);
        assert!(tracker.is_marked(Point::new(0.5, 0.0)));
    }

    #[test]
    fn test_clear_marked() {
        let mut tracker = HoverTracker::new(200, 1.0, 5);
        dwell(&mut tracker, snap(0.0, 0.0), 4);
        tracker.tick(Some(snap(5.0, 5.0)), 100);
        assert_eq!(tracker.marked().count(), 1);

        tracker.clear_marked();
        assert_eq!(tracker.marked().count(), 0);
        assert!(tracker.current().is_some());

        tracker.reset();
        assert!(tracker.current().is_none());
    }

    #[test]
    fn test_zero_capacity_never_marks() {
        let mut tracker = HoverTracker::new(0, 1.0, 0);
        dwell(&mut tracker, snap(0.0, 0.0), 2);
        assert!(tracker.tick(None, 100).is_none());
        assert_eq!(tracker.marked().count(), 0);
    }

    #[test]
    fn test_from_config() {
        let config = SnapConfig::default().with_promote_after_ms(100).with_max_marked(1);
        let mut tracker = HoverTracker::from_config(&config);
        dwell(&mut tracker, snap(0.0, 0.0), 2);
        assert!(tracker.tick(None, 100).is_some());
    }
}
