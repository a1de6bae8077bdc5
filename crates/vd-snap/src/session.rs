//! Snap state carried across frames by an interactive tool

use vd_geom::Point;

use crate::config::SnapConfig;
use crate::engine::{SnapResolution, resolve_snap};
use crate::entity::SnapEntity;
use crate::hover::{HoverPoint, HoverTracker};
use crate::snap_point::SnapPoint;

/// Snap configuration plus the hover tracker of one editing session
#[derive(Debug, Clone, Default)]
pub struct SnapSession {
    config: SnapConfig,
    hover: HoverTracker,
}

impl SnapSession {
    /// Create a session with the given settings
    pub fn new(config: SnapConfig) -> Self {
        let hover = HoverTracker::from_config(&config);
        Self { config, hover }
    }

    /// Active settings
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Replace the settings, keeping marked points
    pub fn set_config(&mut self, config: SnapConfig) {
        let marked: Vec<HoverPoint> = self.hover.marked().copied().collect();
        self.hover = HoverTracker::from_config(&config);
        for hover in marked {
            self.hover.mark(hover);
        }
        self.config = config;
    }

    /// How often the host should call [`SnapSession::tick`] (ms)
    pub fn tick_interval_ms(&self) -> u64 {
        self.config.hover_tick_ms
    }

    /// Hover tracker
    pub fn hover(&self) -> &HoverTracker {
        &self.hover
    }

    /// Resolve the snap for `cursor`.
    ///
    /// Guides are anchored at `in_progress_anchor` (the first point of the
    /// entity being drawn) and at every marked hover point.
    pub fn resolve<E: SnapEntity>(
        &self,
        entities: &[E],
        in_progress_anchor: Option<Point>,
        cursor: Point,
    ) -> SnapResolution {
        let anchors: Vec<Point> = in_progress_anchor
            .into_iter()
            .chain(self.hover.marked_points())
            .collect();
        resolve_snap(
            entities,
            &anchors,
            cursor,
            self.config.angle_step,
            self.config.snap_radius,
        )
    }

    /// Forward a timer tick to the hover tracker
    pub fn tick(&mut self, closest: Option<SnapPoint>, elapsed_ms: u64) -> Option<HoverPoint> {
        self.hover.tick(closest, elapsed_ms)
    }

    /// Forget every marked point
    pub fn clear_marked(&mut self) {
        self.hover.clear_marked();
    }
}
