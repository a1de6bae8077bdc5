//! Geometry tolerances shared by every module of `vd-geom`

/// Point equality tolerance (per axis).
///
/// Two points are equal when `|dx| < EPSILON && |dy| < EPSILON`. Graph
/// vertices and polygon endpoints are merged with the same tolerance.
pub const EPSILON: f64 = 1e-6;

/// Slack for angle comparisons on arcs (radians)
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Denominator guard for parallel-line tests
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// Half-length of an angle guide line in world units.
///
/// Far beyond any practical drawing extent so a guide acts as an infinite
/// line for intersection purposes.
pub const GUIDE_EXTENT: f64 = 1.0e6;
