//! Free-fly editor camera controller
//!
//! Translates an [`InputSnapshot`] into camera motion: WASD-style flight on
//! a ground-parallel basis, right-mouse look, and wheel zoom. The discrete
//! entry points (`on_mouse_look`, `on_wheel`) are what `update` calls
//! internally, so event-driven callers and per-frame callers end up with
//! identical camera state.

use glam::{Vec2, Vec3};
use mapedit_core::InputSnapshot;
use mapedit_renderer::Camera;

/// Flight speed in world units per second.
const MOVE_SPEED: f32 = 20.0;
/// Look sensitivity in radians per pixel of mouse travel.
const ROTATE_SENSITIVITY: f32 = 0.01;
/// Pitch limit for mouse look, slightly inside the camera's own clamp so
/// the view never locks flat against a pole.
const PITCH_LIMIT: f32 = 1.4;
/// Zoom distance per wheel detent (one detent is a delta of 120).
const ZOOM_PER_DETENT: f32 = 5.0;
const WHEEL_DETENT: f32 = 120.0;
/// Preset distance when the camera sits on its own target.
const PRESET_FALLBACK_DISTANCE: f32 = 50.0;
const PRESET_MIN_DISTANCE: f32 = 0.001;

#[derive(Debug, Clone, Copy, Default)]
pub struct CameraController {
    /// Speed multiplier, adjustable from the UI.
    pub speed_scale: f32,
}

impl CameraController {
    pub fn new() -> Self {
        Self { speed_scale: 1.0 }
    }

    /// Per-frame driver. `dt` is the frame time in seconds.
    pub fn update(&self, camera: &mut Camera, input: &InputSnapshot, dt: f32) {
        if input.right_button_down && input.mouse_delta != Vec2::ZERO {
            self.on_mouse_look(camera, input.mouse_delta);
        }
        if input.mouse_wheel_delta != 0.0 {
            self.on_wheel(camera, input.mouse_wheel_delta);
        }
        self.apply_movement(camera, input, dt);
    }

    /// Right-mouse look: horizontal travel yaws, vertical travel pitches.
    pub fn on_mouse_look(&self, camera: &mut Camera, delta: Vec2) {
        let yaw = camera.yaw + delta.x * ROTATE_SENSITIVITY;
        let pitch = (camera.pitch + delta.y * ROTATE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        camera.set_yaw_pitch(yaw, pitch);
    }

    /// Wheel zoom along the view direction.
    pub fn on_wheel(&self, camera: &mut Camera, wheel_delta: f32) {
        camera.zoom(wheel_delta / WHEEL_DETENT * ZOOM_PER_DETENT);
    }

    /// Look straight down at the current target from the current distance.
    pub fn preset_top(&self, camera: &mut Camera) {
        Self::preset(camera, Vec3::Y);
    }

    /// Look along -Z at the current target from the current distance.
    pub fn preset_front(&self, camera: &mut Camera) {
        Self::preset(camera, Vec3::Z);
    }

    /// Look along -X at the current target from the current distance.
    pub fn preset_side(&self, camera: &mut Camera) {
        Self::preset(camera, Vec3::X);
    }

    /// Preset views keep whatever the user has navigated to: the target
    /// stays put and the eye is moved onto `axis` at the current
    /// eye-to-target distance, then yaw/pitch are rebuilt from the new
    /// look direction. A camera sitting on its target gets a default
    /// distance instead of a zero-length offset.
    fn preset(camera: &mut Camera, axis: Vec3) {
        let target = camera.target;
        let mut distance = (camera.eye - target).length();
        if distance <= PRESET_MIN_DISTANCE {
            distance = PRESET_FALLBACK_DISTANCE;
        }
        camera.eye = target + axis * distance;
        camera.look_at(target);
    }

    fn apply_movement(&self, camera: &mut Camera, input: &InputSnapshot, dt: f32) {
        if !input.any_movement() {
            return;
        }
        let forward = flat_forward(camera);
        let right = forward.cross(Vec3::Y);

        let mut direction = Vec3::ZERO;
        if input.key_forward {
            direction += forward;
        }
        if input.key_backward {
            direction -= forward;
        }
        if input.key_right {
            direction += right;
        }
        if input.key_left {
            direction -= right;
        }
        if input.key_up {
            direction += Vec3::Y;
        }
        if input.key_down {
            direction -= Vec3::Y;
        }

        if direction == Vec3::ZERO {
            return;
        }

        // Normalized so diagonal travel is not faster than straight travel.
        let delta = direction.normalize() * MOVE_SPEED * self.speed_scale * dt;
        camera.eye += delta;
        camera.target += delta;
    }
}

/// Ground-parallel forward. Flying forward while pitched down must not sink
/// the camera, so the vertical component is dropped before normalizing.
/// When the camera looks straight along a pole the flattened vector
/// vanishes, so it is rebuilt from yaw alone.
fn flat_forward(camera: &Camera) -> Vec3 {
    let mut forward = camera.forward();
    forward.y = 0.0;
    if forward.length_squared() < 1e-8 {
        Camera::direction_from_yaw_pitch(camera.yaw, 0.0)
    } else {
        forward.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CameraController, Camera) {
        let mut camera = Camera::new(4.0 / 3.0);
        camera.eye = Vec3::new(0.0, 10.0, -20.0);
        camera.look_at(Vec3::ZERO);
        (CameraController::new(), camera)
    }

    #[test]
    fn test_forward_key_moves_at_move_speed() {
        let (controller, mut camera) = setup();
        let start = camera.eye;
        let input = InputSnapshot {
            key_forward: true,
            ..Default::default()
        };
        controller.update(&mut camera, &input, 1.0);
        assert!(((camera.eye - start).length() - MOVE_SPEED).abs() < 1e-4);
        // Pitched down, but flight stays level.
        assert!((camera.eye.y - start.y).abs() < 1e-4);
    }

    #[test]
    fn test_diagonal_travel_is_not_faster() {
        let (controller, mut camera) = setup();
        let start = camera.eye;
        let input = InputSnapshot {
            key_forward: true,
            key_right: true,
            ..Default::default()
        };
        controller.update(&mut camera, &input, 0.5);
        assert!(((camera.eye - start).length() - MOVE_SPEED * 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_movement_preserves_orientation() {
        let (controller, mut camera) = setup();
        let yaw = camera.yaw;
        let pitch = camera.pitch;
        let input = InputSnapshot {
            key_left: true,
            key_up: true,
            ..Default::default()
        };
        controller.update(&mut camera, &input, 0.25);
        assert!((camera.yaw - yaw).abs() < 1e-6);
        assert!((camera.pitch - pitch).abs() < 1e-6);
    }

    #[test]
    fn test_look_requires_right_button() {
        let (controller, mut camera) = setup();
        let yaw = camera.yaw;
        let input = InputSnapshot {
            mouse_delta: Vec2::new(50.0, 0.0),
            ..Default::default()
        };
        controller.update(&mut camera, &input, 0.016);
        assert_eq!(camera.yaw, yaw);
    }

    #[test]
    fn test_look_rate_per_pixel() {
        let (controller, mut camera) = setup();
        let yaw = camera.yaw;
        let input = InputSnapshot {
            right_button_down: true,
            mouse_delta: Vec2::new(50.0, 0.0),
            ..Default::default()
        };
        controller.update(&mut camera, &input, 0.016);
        assert!((camera.yaw - yaw - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_pitch_clamped_inside_camera_limit() {
        let (controller, mut camera) = setup();
        controller.on_mouse_look(&mut camera, Vec2::new(0.0, 10_000.0));
        assert!((camera.pitch - PITCH_LIMIT).abs() < 1e-6);
        controller.on_mouse_look(&mut camera, Vec2::new(0.0, -20_000.0));
        assert!((camera.pitch + PITCH_LIMIT).abs() < 1e-6);
    }

    #[test]
    fn test_wheel_detent_zooms_fixed_distance() {
        let (controller, mut camera) = setup();
        let start = camera.eye;
        let forward = camera.forward();
        controller.on_wheel(&mut camera, WHEEL_DETENT);
        assert!((camera.eye - (start + forward * ZOOM_PER_DETENT)).length() < 1e-4);
    }

    #[test]
    fn test_update_matches_discrete_calls() {
        let (controller, mut via_update) = setup();
        let (_, mut via_events) = setup();
        let input = InputSnapshot {
            right_button_down: true,
            mouse_delta: Vec2::new(12.0, -7.0),
            mouse_wheel_delta: -WHEEL_DETENT,
            ..Default::default()
        };
        controller.update(&mut via_update, &input, 0.016);
        controller.on_mouse_look(&mut via_events, input.mouse_delta);
        controller.on_wheel(&mut via_events, input.mouse_wheel_delta);

        assert!((via_update.eye - via_events.eye).length() < 1e-6);
        assert!((via_update.yaw - via_events.yaw).abs() < 1e-6);
        assert!((via_update.pitch - via_events.pitch).abs() < 1e-6);
    }

    #[test]
    fn test_preset_top_keeps_target_and_distance() {
        let (controller, mut camera) = setup();
        let target = Vec3::new(5.0, 0.0, 5.0);
        camera.eye = target + Vec3::new(30.0, 0.0, 0.0).normalize() * 30.0;
        camera.look_at(target);

        controller.preset_top(&mut camera);

        assert_eq!(camera.target, target);
        assert!(((camera.eye - target).length() - 30.0).abs() < 1e-4);
        assert!((camera.eye - (target + Vec3::Y * 30.0)).length() < 1e-4);
        // Looking straight down, up to the camera's pitch clamp.
        assert!(camera.pitch < -1.4);
    }

    #[test]
    fn test_preset_front_recomputes_yaw_pitch() {
        let (controller, mut camera) = setup();
        let target = Vec3::new(-3.0, 2.0, 8.0);
        camera.eye = target + Vec3::new(0.0, 12.0, -9.0);
        camera.look_at(target);
        let distance = (camera.eye - target).length();

        controller.preset_front(&mut camera);

        assert!((camera.eye - (target + Vec3::Z * distance)).length() < 1e-4);
        // Forward is -Z, so yaw is a half turn and pitch is level.
        assert!((camera.yaw.abs() - std::f32::consts::PI).abs() < 1e-5);
        assert!(camera.pitch.abs() < 1e-5);
    }

    #[test]
    fn test_preset_side_falls_back_when_on_target() {
        let (controller, mut camera) = setup();
        camera.eye = Vec3::new(7.0, 1.0, -2.0);
        camera.target = camera.eye;

        controller.preset_side(&mut camera);

        assert!(
            ((camera.eye - camera.target).length() - PRESET_FALLBACK_DISTANCE).abs() < 1e-4
        );
        assert!((camera.eye - (camera.target + Vec3::X * PRESET_FALLBACK_DISTANCE)).length() < 1e-4);
    }

    #[test]
    fn test_no_input_is_a_no_op() {
        let (controller, mut camera) = setup();
        let eye = camera.eye;
        let target = camera.target;
        controller.update(&mut camera, &InputSnapshot::default(), 0.016);
        assert_eq!(camera.eye, eye);
        assert_eq!(camera.target, target);
    }
}
