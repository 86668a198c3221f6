//! Tuning constants for the viewport renderers

/// Camera constants
pub mod camera {
    /// Vertical field of view in degrees.
    pub const FOV_DEGREES: f32 = 60.0;
    /// Near clipping plane.
    pub const NEAR: f32 = 0.1;
    /// Far clipping plane.
    pub const FAR: f32 = 5000.0;
    /// Pitch clamp in radians, just under a quarter turn.
    pub const PITCH_LIMIT: f32 = 1.5;
    /// Preset eye offset for the top view.
    pub const TOP_OFFSET: [f32; 3] = [0.0, 50.0, 0.0];
    /// Preset eye offset for the front view.
    pub const FRONT_OFFSET: [f32; 3] = [0.0, 10.0, 50.0];
    /// Preset eye offset for the side view.
    pub const SIDE_OFFSET: [f32; 3] = [50.0, 10.0, 0.0];
}

/// Gizmo constants
pub mod gizmo {
    /// World-space length of the axis handles.
    pub const SIZE: f32 = 0.75;
    /// Rotation ring radius as a multiple of [`SIZE`].
    pub const RING_RADIUS_MULTIPLIER: f32 = 1.2;
    /// Uniform scale handle radius as a multiple of [`SIZE`].
    pub const UNIFORM_HANDLE_MULTIPLIER: f32 = 0.3;
    /// Segments used to tessellate rotation rings, both for drawing
    /// and for the sampled hit test.
    pub const RING_SEGMENTS: usize = 64;
    /// Segments used to tessellate the uniform scale handle.
    pub const HANDLE_SEGMENTS: usize = 32;
    /// Extra radius for the second ring drawn on the actively rotated axis.
    pub const ACTIVE_RING_OFFSET: f32 = 0.03;

    /// Screen-space pick threshold for axis handles, in pixels.
    pub const AXIS_HIT_THRESHOLD: f32 = 10.0;
    /// Screen-space pick threshold for rotation rings, in pixels.
    pub const RING_HIT_THRESHOLD: f32 = 12.0;
    /// Screen-space pick radius around the gizmo center for uniform scale.
    pub const CENTER_HIT_THRESHOLD: f32 = 12.0;
    /// When two axis candidates are within this many pixels of each other,
    /// the one nearer the camera wins.
    pub const DEPTH_TIE_EPSILON: f32 = 0.5;

    /// Rotation drag rate in radians per pixel of mouse travel.
    pub const RADIANS_PER_PIXEL: f32 = 0.01;

    /// Base axis colors (X, Y, Z).
    pub const X_COLOR: [f32; 3] = [0.9, 0.2, 0.2];
    pub const Y_COLOR: [f32; 3] = [0.2, 0.9, 0.2];
    pub const Z_COLOR: [f32; 3] = [0.2, 0.2, 0.9];
    /// Uniform scale handle color.
    pub const HANDLE_COLOR: [f32; 3] = [0.8, 0.8, 0.2];
    /// Selection bounding box color.
    pub const SELECTION_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
    /// Brightness multiplier for the hovered axis.
    pub const HOVER_BRIGHTEN: f32 = 1.4;
    /// Brightness multiplier for the active axis.
    pub const ACTIVE_BRIGHTEN: f32 = 1.8;
}

/// Ground grid constants
pub mod grid {
    /// Half-extent of the grid in world units.
    pub const DEFAULT_SIZE: f32 = 100.0;
    /// Spacing between grid lines.
    pub const DEFAULT_SPACING: f32 = 1.0;
    /// Regular line color.
    pub const LINE_COLOR: [f32; 3] = [0.3, 0.3, 0.3];
    /// Color of the world X axis line.
    pub const X_AXIS_COLOR: [f32; 3] = [0.6, 0.2, 0.2];
    /// Color of the world Z axis line.
    pub const Z_AXIS_COLOR: [f32; 3] = [0.2, 0.2, 0.6];
}

/// Level line overlay constants
pub mod level_lines {
    /// Entity bounding box color.
    pub const ENTITY_COLOR: [f32; 3] = [0.5, 0.7, 0.9];
    /// Camera path polyline color.
    pub const PATH_COLOR: [f32; 3] = [0.9, 0.6, 0.2];
    /// Keyframe marker color.
    pub const KEYFRAME_COLOR: [f32; 3] = [0.9, 0.9, 0.3];
    /// Half-extent of the cross drawn at each keyframe.
    pub const KEYFRAME_MARKER_SIZE: f32 = 0.3;
}
