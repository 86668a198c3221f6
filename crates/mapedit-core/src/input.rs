//! Device-agnostic input snapshot

use glam::Vec2;

/// Per-frame input state consumed by the viewport, gizmo, and camera
/// controller.
///
/// The host fills one of these from whatever device layer it has (an egui
/// response, a winit event pump, a test harness); the core never branches on
/// device type.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Cursor position in viewport pixels.
    pub mouse_position: Vec2,
    /// Cursor movement since the previous frame, in pixels.
    pub mouse_delta: Vec2,

    pub left_button_down: bool,
    pub middle_button_down: bool,
    pub right_button_down: bool,

    /// Signed wheel movement since last frame, in wheel units
    /// (one detent = 120, matching classic wheel hardware).
    pub mouse_wheel_delta: f32,

    // Keyboard movement (WASD + vertical)
    pub key_forward: bool,
    pub key_backward: bool,
    pub key_left: bool,
    pub key_right: bool,
    pub key_up: bool,
    pub key_down: bool,

    /// Ctrl: routes a left-button gizmo drag to scale instead of translate.
    pub key_ctrl: bool,
    /// Shift: reserved for precision modifiers.
    pub key_shift: bool,
    /// Held to temporarily bypass grid/rotation/scale snapping.
    pub snap_override_held: bool,
}

impl InputSnapshot {
    /// Whether any movement key is held.
    pub fn any_movement(&self) -> bool {
        self.key_forward
            || self.key_backward
            || self.key_left
            || self.key_right
            || self.key_up
            || self.key_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_movement_tracks_movement_keys_only() {
        let mut input = InputSnapshot::default();
        assert!(!input.any_movement());

        input.left_button_down = true;
        input.key_ctrl = true;
        assert!(!input.any_movement());

        input.key_down = true;
        assert!(input.any_movement());
    }
}
