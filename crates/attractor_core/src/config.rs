//! Fixed algorithm constants.
//!
//! These pin the integration so that a given set of settings always yields the
//! same geometry.

/// Discarded Euler steps run before the first sample is recorded.
pub const WARMUP_STEPS: usize = 1000;

/// Phase-space state every build starts from.
pub const SEED_STATE: [f64; 3] = [0.0, 1.0, 1.0];

/// Projected onto the plane orthogonal to the first tangent to seed the normal.
pub const REFERENCE_NORMAL: [f64; 3] = [1.0, 0.0, 0.0];

pub const DEFAULT_SUB_STEPS: usize = 2;

/// Largest axis extent of a normalized path.
pub const DEFAULT_TARGET_SIZE: f64 = 30.0;

/// Vectors shorter than this are treated as having no direction.
pub const DEGENERATE_EPS: f64 = 1e-12;

pub const DEFAULT_COUNT: usize = 2000;
pub const DEFAULT_RADIUS: f64 = 0.1;
pub const DEFAULT_TIME_STEP: f64 = 0.02;
pub const DEFAULT_FACETS: usize = 6;

/// Radius multiplier of the long spokes of a star profile.
pub const DEFAULT_STAR_OUTER_RATIO: f64 = 1.6;
