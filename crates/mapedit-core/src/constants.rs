//! Global constants for mapedit-core

/// Snap steps at or below this magnitude are treated as "no snap".
///
/// Guards the divisions in the snapping helpers; an exact zero check is not
/// enough because UI-entered steps can round to denormals.
pub const SNAP_EPSILON: f32 = 0.0001;

/// Default grid spacing for position snapping, per axis.
pub const DEFAULT_GRID_SIZE: [f32; 3] = [1.0, 1.0, 1.0];

/// Default rotation snap step in degrees.
pub const DEFAULT_ROTATION_SNAP_DEGREES: f32 = 15.0;

/// Default uniform scale snap step.
pub const DEFAULT_SCALE_SNAP_STEP: f32 = 0.1;

/// Tolerance used when comparing quarter-turn angles.
pub const ANGLE_TOLERANCE: f32 = 0.001;
