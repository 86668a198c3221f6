//! Editor render settings and snapping helpers

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GRID_SIZE, DEFAULT_ROTATION_SNAP_DEGREES, DEFAULT_SCALE_SNAP_STEP, SNAP_EPSILON,
};

/// What the viewport draws and how gizmo drags snap.
///
/// Mutated by the settings panel, polled by the gizmo and renderer each
/// frame; there is no change-notification machinery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorRenderSettings {
    /// Draw the ground grid.
    pub show_grid: bool,
    /// Draw the transform gizmo for the current selection.
    pub show_selection_gizmo: bool,
    /// Draw the recorded camera path as a polyline.
    pub show_camera_path: bool,

    /// Snap translation drags to the grid.
    pub enable_grid_snap: bool,
    /// Snap spacing for position X/Y/Z movement.
    pub grid_size: Vec3,
    /// Snap rotation drags to a fixed degree step.
    pub enable_rotation_snap: bool,
    /// Rotation snap step in degrees.
    pub rotation_snap_degrees: f32,
    /// Snap scale drags to a fixed step.
    pub enable_scale_snap: bool,
    /// Scale snap step, applied per component.
    pub scale_snap_step: f32,
}

impl Default for EditorRenderSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_selection_gizmo: true,
            show_camera_path: true,
            enable_grid_snap: true,
            grid_size: Vec3::from_array(DEFAULT_GRID_SIZE),
            enable_rotation_snap: false,
            rotation_snap_degrees: DEFAULT_ROTATION_SNAP_DEGREES,
            enable_scale_snap: false,
            scale_snap_step: DEFAULT_SCALE_SNAP_STEP,
        }
    }
}

impl EditorRenderSettings {
    /// Snap a position to the grid if grid snapping is enabled.
    ///
    /// Components whose grid step is at or below the epsilon pass through
    /// unchanged.
    pub fn apply_position_snap(&self, position: Vec3) -> Vec3 {
        if !self.enable_grid_snap {
            return position;
        }
        Vec3::new(
            snap_value(position.x, self.grid_size.x),
            snap_value(position.y, self.grid_size.y),
            snap_value(position.z, self.grid_size.z),
        )
    }

    /// Snap an angle in degrees to the rotation step if enabled.
    pub fn apply_rotation_snap(&self, angle_degrees: f32) -> f32 {
        if !self.enable_rotation_snap {
            return angle_degrees;
        }
        snap_value(angle_degrees, self.rotation_snap_degrees)
    }

    /// Snap a scale value to the scale step if enabled.
    pub fn apply_scale_snap(&self, scale: f32) -> f32 {
        if !self.enable_scale_snap {
            return scale;
        }
        snap_value(scale, self.scale_snap_step)
    }

    /// Snap a scale vector component-wise.
    pub fn apply_scale_snap_vec(&self, scale: Vec3) -> Vec3 {
        Vec3::new(
            self.apply_scale_snap(scale.x),
            self.apply_scale_snap(scale.y),
            self.apply_scale_snap(scale.z),
        )
    }
}

/// Round `value` to the nearest multiple of `step`.
///
/// Steps at or below [`SNAP_EPSILON`] disable snapping for that value.
/// Rounding is half-away-from-zero, so 7.5 with a step of 15 snaps to 15.
pub fn snap_value(value: f32, step: f32) -> f32 {
    if step <= SNAP_EPSILON {
        return value;
    }
    (value / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_value_rounds_to_nearest_multiple() {
        assert_eq!(snap_value(1.3, 1.0), 1.0);
        assert_eq!(snap_value(1.6, 1.0), 2.0);
        assert_eq!(snap_value(-1.3, 1.0), -1.0);
    }

    #[test]
    fn snap_value_half_rounds_away_from_zero() {
        // Exact rounding boundary: 7.5 / 15 = 0.5
        assert_eq!(snap_value(7.5, 15.0), 15.0);
        assert_eq!(snap_value(-7.5, 15.0), -15.0);
    }

    #[test]
    fn snap_value_zero_step_is_identity() {
        assert_eq!(snap_value(1.37, 0.0), 1.37);
        assert_eq!(snap_value(1.37, -2.0), 1.37);
        assert_eq!(snap_value(1.37, SNAP_EPSILON / 2.0), 1.37);
    }

    #[test]
    fn position_snap_respects_toggle() {
        let mut settings = EditorRenderSettings::default();
        settings.enable_grid_snap = false;
        let p = Vec3::new(1.3, 0.0, 0.0);
        assert_eq!(settings.apply_position_snap(p), p);

        settings.enable_grid_snap = true;
        assert_eq!(settings.apply_position_snap(p), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn position_snap_is_per_component() {
        let settings = EditorRenderSettings {
            enable_grid_snap: true,
            grid_size: Vec3::new(1.0, 0.0, 2.0),
            ..Default::default()
        };
        let snapped = settings.apply_position_snap(Vec3::new(1.3, 1.3, 1.3));
        // Y step is zero, so Y passes through
        assert_eq!(snapped, Vec3::new(1.0, 1.3, 2.0));
    }

    #[test]
    fn rotation_snap_examples() {
        let settings = EditorRenderSettings {
            enable_rotation_snap: true,
            rotation_snap_degrees: 15.0,
            ..Default::default()
        };
        assert_eq!(settings.apply_rotation_snap(22.0), 15.0);
        assert_eq!(settings.apply_rotation_snap(8.0), 15.0);
        assert_eq!(settings.apply_rotation_snap(7.0), 0.0);
    }

    #[test]
    fn scale_snap_vec() {
        let settings = EditorRenderSettings {
            enable_scale_snap: true,
            scale_snap_step: 0.5,
            ..Default::default()
        };
        let snapped = settings.apply_scale_snap_vec(Vec3::new(1.2, 2.6, 0.1));
        assert_eq!(snapped, Vec3::new(1.0, 2.5, 0.0));
    }
}
