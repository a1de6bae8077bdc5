//! Snap resolution for the vecdraw editor
//!
//! This crate provides:
//! - The [`SnapEntity`] capability drawing entities implement
//! - Per-frame snap resolution over entity anchors, intersections and
//!   angle guides
//! - Hover dwell tracking that promotes visited points to guide anchors
//! - Snap settings persisted as RON

pub mod config;
pub mod engine;
pub mod entity;
pub mod guide;
pub mod hover;
pub mod session;
pub mod snap_point;

// Re-exports for convenience
pub use config::{ConfigError, ConfigResult, SnapConfig};
pub use engine::{SnapResolution, closest_snap_point_within_radius, resolve_snap};
pub use entity::{PointEntity, SnapEntity};
pub use guide::{AngleGuideLine, generate_angle_guides};
pub use hover::{HoverPoint, HoverTracker};
pub use session::SnapSession;
pub use snap_point::{SnapKind, SnapPoint};
