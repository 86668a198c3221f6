//! Transform gizmo interaction state machine
//!
//! Owns the drag lifecycle for translate (left mouse on an axis handle),
//! rotate (middle mouse on a ring), and scale (Ctrl + left mouse, near the
//! center for uniform or on an axis handle for per-axis). Exactly one mode
//! can be active at a time; the state is a single tagged value so illegal
//! combinations cannot be represented.
//!
//! Drag starts are edge-triggered (button transition to down plus a
//! successful hit test); drag ends are level-triggered (the frame the button
//! is no longer down), so a release is never missed.

use glam::{Vec2, Vec3};
use mapedit_core::{EditableEntity, EditorRenderSettings, InputSnapshot};
use mapedit_renderer::camera::Camera;
use mapedit_renderer::constants::gizmo as constants;
use mapedit_renderer::gizmo::{GizmoAxis, GizmoVisual, handle_length, hit, ring_radius};

/// Which kind of scale drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    Uniform,
    Axis(GizmoAxis),
}

/// Gizmo interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoState {
    #[default]
    Idle,
    Translating(GizmoAxis),
    Rotating(GizmoAxis),
    Scaling(ScaleMode),
}

impl GizmoState {
    /// The axis being manipulated, if the active mode has one.
    pub fn active_axis(&self) -> Option<GizmoAxis> {
        match self {
            GizmoState::Idle | GizmoState::Scaling(ScaleMode::Uniform) => None,
            GizmoState::Translating(axis)
            | GizmoState::Rotating(axis)
            | GizmoState::Scaling(ScaleMode::Axis(axis)) => Some(*axis),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GizmoState::Idle)
    }
}

/// Transform gizmo state machine.
pub struct TransformGizmo {
    state: GizmoState,
    hover_axis: Option<GizmoAxis>,
    left_was_down: bool,
    middle_was_down: bool,
    drag_just_ended: bool,
    // Drag-start snapshots
    drag_start_world: Vec3,
    entity_start_position: Vec3,
    entity_start_scale: Vec3,
    uniform_start_radius: f32,
}

impl Default for TransformGizmo {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformGizmo {
    pub fn new() -> Self {
        Self {
            state: GizmoState::Idle,
            hover_axis: None,
            left_was_down: false,
            middle_was_down: false,
            drag_just_ended: false,
            drag_start_world: Vec3::ZERO,
            entity_start_position: Vec3::ZERO,
            entity_start_scale: Vec3::ONE,
            uniform_start_radius: 0.0,
        }
    }

    pub fn state(&self) -> GizmoState {
        self.state
    }

    /// True for exactly the frame on which a button release ended a drag.
    /// Hosts use this to tell a drag-ending click apart from a selection
    /// click; by the time the host sees the release the state is already
    /// back to [`GizmoState::Idle`].
    pub fn drag_just_ended(&self) -> bool {
        self.drag_just_ended
    }

    /// Reset interaction state, e.g. when the selection changes.
    pub fn clear(&mut self) {
        self.state = GizmoState::Idle;
        self.hover_axis = None;
        self.drag_just_ended = false;
    }

    /// Drive the state machine for one frame, mutating the selected entity.
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        camera: &Camera,
        viewport: Vec2,
        entity: &mut EditableEntity,
        settings: &EditorRenderSettings,
    ) {
        let left_pressed = input.left_button_down && !self.left_was_down;
        let middle_pressed = input.middle_button_down && !self.middle_was_down;
        self.left_was_down = input.left_button_down;
        self.middle_was_down = input.middle_button_down;

        // Releases end drags unconditionally, even when the gizmo is hidden
        // mid-drag.
        self.drag_just_ended = false;
        match self.state {
            GizmoState::Rotating(_) if !input.middle_button_down => {
                self.state = GizmoState::Idle;
                self.drag_just_ended = true;
            }
            GizmoState::Translating(_) | GizmoState::Scaling(_) if !input.left_button_down => {
                self.state = GizmoState::Idle;
                self.drag_just_ended = true;
            }
            _ => {}
        }

        let center = entity.position;

        // Hover highlight: recomputed while idle, pinned to the active axis
        // during a drag so the highlight cannot flicker.
        self.hover_axis = if !settings.show_selection_gizmo {
            None
        } else if self.state.is_idle() {
            hit::hit_test_axes(
                camera,
                input.mouse_position,
                viewport,
                center,
                handle_length(),
            )
        } else {
            self.state.active_axis()
        };

        if !settings.show_selection_gizmo {
            return;
        }

        // Rotation, middle mouse on a ring.
        if middle_pressed
            && self.state.is_idle()
            && let Some(axis) = hit::hit_test_rings(
                camera,
                input.mouse_position,
                viewport,
                center,
                ring_radius(),
            )
        {
            self.state = GizmoState::Rotating(axis);
            self.hover_axis = Some(axis);
        }

        if let GizmoState::Rotating(axis) = self.state {
            self.handle_rotation_drag(input, axis, entity, settings);
            // Rotation never shares a frame with move or scale.
            return;
        }

        if left_pressed && self.state.is_idle() {
            if input.key_ctrl {
                self.try_start_scale(input, camera, viewport, entity, center);
            } else if let Some(axis) = hit::hit_test_axes(
                camera,
                input.mouse_position,
                viewport,
                center,
                handle_length(),
            ) {
                self.state = GizmoState::Translating(axis);
                self.hover_axis = Some(axis);
                self.entity_start_position = entity.position;
                self.drag_start_world =
                    self.unproject_on_horizontal_plane(input.mouse_position, center.y, camera, viewport, entity);
            }
        }

        match self.state {
            GizmoState::Translating(axis) => {
                self.handle_translation_drag(input, axis, camera, viewport, entity, settings);
            }
            GizmoState::Scaling(mode) => {
                self.handle_scale_drag(input, mode, camera, viewport, entity, settings);
            }
            _ => {}
        }
    }

    /// The visual description for this frame's draw, or `None` when the
    /// gizmo is hidden.
    pub fn visual(&self, entity: &EditableEntity, settings: &EditorRenderSettings) -> Option<GizmoVisual> {
        if !settings.show_selection_gizmo {
            return None;
        }
        Some(GizmoVisual {
            center: entity.position,
            hover_axis: self.hover_axis,
            active_axis: self.state.active_axis(),
            rotating: matches!(self.state, GizmoState::Rotating(_)),
            uniform_highlight: matches!(self.state, GizmoState::Scaling(ScaleMode::Uniform)),
            selection_bounds: entity.bounds(),
        })
    }

    fn try_start_scale(
        &mut self,
        input: &InputSnapshot,
        camera: &Camera,
        viewport: Vec2,
        entity: &EditableEntity,
        center: Vec3,
    ) {
        if hit::hit_test_center(camera, input.mouse_position, viewport, center) {
            self.state = GizmoState::Scaling(ScaleMode::Uniform);
            self.entity_start_scale = entity.scale;
            self.entity_start_position = entity.position;
            self.uniform_start_radius = (center - self.entity_start_position).length();
        } else if let Some(axis) = hit::hit_test_axes(
            camera,
            input.mouse_position,
            viewport,
            center,
            handle_length(),
        ) {
            self.state = GizmoState::Scaling(ScaleMode::Axis(axis));
            self.hover_axis = Some(axis);
            self.entity_start_scale = entity.scale;
            self.entity_start_position = entity.position;
            self.drag_start_world = self.unproject_on_horizontal_plane(
                input.mouse_position,
                self.entity_start_position.y,
                camera,
                viewport,
                entity,
            );
        }
    }

    fn handle_rotation_drag(
        &mut self,
        input: &InputSnapshot,
        axis: GizmoAxis,
        entity: &mut EditableEntity,
        settings: &EditorRenderSettings,
    ) {
        let delta = input.mouse_delta;
        if delta == Vec2::ZERO {
            return;
        }

        // Horizontal travel drives the yaw-like axes, vertical (inverted)
        // drives X.
        let raw = match axis {
            GizmoAxis::X => entity.rotation.x - delta.y * constants::RADIANS_PER_PIXEL,
            GizmoAxis::Y => entity.rotation.y + delta.x * constants::RADIANS_PER_PIXEL,
            GizmoAxis::Z => entity.rotation.z + delta.x * constants::RADIANS_PER_PIXEL,
        };

        let snapped = if input.snap_override_held {
            raw
        } else {
            settings.apply_rotation_snap(raw.to_degrees()).to_radians()
        };

        match axis {
            GizmoAxis::X => entity.rotation.x = snapped,
            GizmoAxis::Y => entity.rotation.y = snapped,
            GizmoAxis::Z => entity.rotation.z = snapped,
        }
    }

    fn handle_translation_drag(
        &mut self,
        input: &InputSnapshot,
        axis: GizmoAxis,
        camera: &Camera,
        viewport: Vec2,
        entity: &mut EditableEntity,
        settings: &EditorRenderSettings,
    ) {
        let current =
            self.unproject_on_horizontal_plane(input.mouse_position, entity.position.y, camera, viewport, entity);
        // The plane-hit delta is reduced to the active axis component. This
        // is an axis mask, not a true constrained-line projection; it is the
        // established editor behavior under oblique cameras.
        let move_delta = axis.mask(current - self.drag_start_world);
        if move_delta == Vec3::ZERO {
            return;
        }

        let target = self.entity_start_position + move_delta;
        entity.position = if input.snap_override_held {
            target
        } else {
            settings.apply_position_snap(target)
        };
    }

    fn handle_scale_drag(
        &mut self,
        input: &InputSnapshot,
        mode: ScaleMode,
        camera: &Camera,
        viewport: Vec2,
        entity: &mut EditableEntity,
        settings: &EditorRenderSettings,
    ) {
        let (ray_origin, ray_direction) =
            camera.screen_to_ray(input.mouse_position.x, input.mouse_position.y, viewport.x, viewport.y);

        let target = match mode {
            ScaleMode::Uniform => {
                let factor = match uniform_scale_factor(
                    entity.position,
                    self.entity_start_position,
                    self.uniform_start_radius,
                ) {
                    Some(factor) => factor,
                    None => {
                        // Entity sits at the gizmo center; measure signed
                        // distance along camera right instead.
                        let hit = hit::ray_plane_intersection(
                            ray_origin,
                            ray_direction,
                            self.entity_start_position,
                            camera.right(),
                        );
                        let Some(hit) = hit else {
                            return;
                        };
                        (hit - self.entity_start_position).dot(camera.right())
                    }
                };
                self.entity_start_scale * factor
            }
            ScaleMode::Axis(axis) => {
                let plane_normal = match axis {
                    GizmoAxis::X => camera.right(),
                    GizmoAxis::Y => Vec3::Y,
                    GizmoAxis::Z => camera.forward(),
                };
                let Some(plane_hit) = hit::ray_plane_intersection(
                    ray_origin,
                    ray_direction,
                    self.entity_start_position,
                    plane_normal,
                ) else {
                    return;
                };

                let along_axis = (plane_hit - self.drag_start_world).dot(axis.direction());
                let start_scale_axis = self.entity_start_scale.dot(axis.direction());
                let factor = axis_scale_factor(along_axis, start_scale_axis);

                let mut target = self.entity_start_scale;
                match axis {
                    GizmoAxis::X => target.x = self.entity_start_scale.x * factor,
                    GizmoAxis::Y => target.y = self.entity_start_scale.y * factor,
                    GizmoAxis::Z => target.z = self.entity_start_scale.z * factor,
                }
                target
            }
        };

        entity.scale = if input.snap_override_held {
            target
        } else {
            settings.apply_scale_snap_vec(target)
        };
    }

    /// Intersect the cursor's pick ray with the horizontal plane at
    /// `plane_y`. Falls back to the entity's current position when the ray
    /// is parallel, so a degenerate frame becomes a no-op instead of a NaN.
    fn unproject_on_horizontal_plane(
        &self,
        mouse: Vec2,
        plane_y: f32,
        camera: &Camera,
        viewport: Vec2,
        entity: &EditableEntity,
    ) -> Vec3 {
        let (ray_origin, ray_direction) =
            camera.screen_to_ray(mouse.x, mouse.y, viewport.x, viewport.y);
        hit::ray_plane_intersection(
            ray_origin,
            ray_direction,
            Vec3::new(0.0, plane_y, 0.0),
            Vec3::Y,
        )
        .unwrap_or(entity.position)
    }
}

/// Ratio-law uniform scale factor. `None` when the start radius is too
/// small to divide by.
fn uniform_scale_factor(center: Vec3, entity_start_position: Vec3, start_radius: f32) -> Option<f32> {
    if start_radius > 0.01 {
        Some((center - entity_start_position).length() / start_radius)
    } else {
        None
    }
}

/// Per-axis scale factor from signed travel along the axis. A near-zero
/// starting scale component is treated as 1 to avoid dividing by zero.
fn axis_scale_factor(along_axis: f32, start_scale_axis: f32) -> f32 {
    let start = if start_scale_axis.abs() < 1e-4 {
        1.0
    } else {
        start_scale_axis
    };
    1.0 + along_axis / (start.abs() * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn test_camera() -> Camera {
        let mut camera = Camera::new(VIEWPORT.x / VIEWPORT.y);
        camera.eye = Vec3::new(0.0, 6.0, -12.0);
        camera.look_at(Vec3::ZERO);
        camera
    }

    fn screen_of(camera: &Camera, world: Vec3) -> Vec2 {
        camera
            .project_to_screen(world, VIEWPORT.x, VIEWPORT.y)
            .expect("point should be in front of the camera")
    }

    fn idle_input(mouse: Vec2) -> InputSnapshot {
        InputSnapshot {
            mouse_position: mouse,
            ..Default::default()
        }
    }

    /// Run a full press-drag-release cycle along the X handle.
    fn drag_x_axis(
        gizmo: &mut TransformGizmo,
        camera: &Camera,
        entity: &mut EditableEntity,
        settings: &EditorRenderSettings,
        end_world: Vec3,
    ) {
        let handle = screen_of(camera, Vec3::X * constants::SIZE);
        let mut input = idle_input(handle);
        input.left_button_down = true;
        gizmo.update(&input, camera, VIEWPORT, entity, settings);
        assert_eq!(gizmo.state(), GizmoState::Translating(GizmoAxis::X));

        input.mouse_position = screen_of(camera, end_world);
        gizmo.update(&input, camera, VIEWPORT, entity, settings);

        input.left_button_down = false;
        gizmo.update(&input, camera, VIEWPORT, entity, settings);
        assert!(gizmo.state().is_idle());
    }

    #[test]
    fn test_idle_until_press() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        let input = idle_input(screen_of(&camera, Vec3::X * constants::SIZE));
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(gizmo.state().is_idle());
        assert_eq!(gizmo.hover_axis, Some(GizmoAxis::X));
    }

    #[test]
    fn test_press_off_gizmo_stays_idle() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        let mut input = idle_input(Vec2::new(10.0, 10.0));
        input.left_button_down = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(gizmo.state().is_idle());
    }

    #[test]
    fn test_stationary_handle_click_latches_drag_end() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        // Press and release on the X handle without moving the mouse.
        let mut input = idle_input(screen_of(&camera, Vec3::X * constants::SIZE));
        input.left_button_down = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert_eq!(gizmo.state(), GizmoState::Translating(GizmoAxis::X));
        assert!(!gizmo.drag_just_ended());

        input.left_button_down = false;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(gizmo.state().is_idle());
        assert!(gizmo.drag_just_ended());

        // The latch holds for the release frame only.
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(!gizmo.drag_just_ended());
    }

    #[test]
    fn test_click_off_gizmo_never_latches_drag_end() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        let mut input = idle_input(Vec2::new(10.0, 10.0));
        input.left_button_down = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        input.left_button_down = false;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(!gizmo.drag_just_ended());
    }

    #[test]
    fn test_translate_round_trip_no_drift() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let mut settings = EditorRenderSettings::default();
        settings.enable_grid_snap = false;

        let start = entity.position;
        let handle_world = Vec3::X * constants::SIZE;
        drag_x_axis(&mut gizmo, &camera, &mut entity, &settings, handle_world);
        assert_eq!(entity.position, start);
    }

    #[test]
    fn test_translate_with_grid_snap() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        // Handle grabbed at x=0.75, dragged 1.3 further along X.
        let end = Vec3::new(constants::SIZE + 1.3, 0.0, 0.0);
        drag_x_axis(&mut gizmo, &camera, &mut entity, &settings, end);
        assert!(
            (entity.position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-3,
            "got {:?}",
            entity.position
        );
    }

    #[test]
    fn test_translate_snap_override_held() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        let handle = screen_of(&camera, Vec3::X * constants::SIZE);
        let mut input = idle_input(handle);
        input.left_button_down = true;
        input.snap_override_held = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);

        input.mouse_position = screen_of(&camera, Vec3::new(constants::SIZE + 1.3, 0.0, 0.0));
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(
            (entity.position.x - 1.3).abs() < 1e-3,
            "got {:?}",
            entity.position
        );
    }

    #[test]
    fn test_translate_masks_off_axis_delta() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let mut settings = EditorRenderSettings::default();
        settings.enable_grid_snap = false;

        // Drag diagonally on the ground plane; only X may change.
        let end = Vec3::new(constants::SIZE + 2.0, 0.0, 3.0);
        drag_x_axis(&mut gizmo, &camera, &mut entity, &settings, end);
        assert!((entity.position.x - 2.0).abs() < 1e-3);
        assert_eq!(entity.position.y, 0.0);
        assert_eq!(entity.position.z, 0.0);
    }

    #[test]
    fn test_ctrl_gates_scale_over_translate() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        let handle = screen_of(&camera, Vec3::X * constants::SIZE);
        let mut input = idle_input(handle);
        input.left_button_down = true;
        input.key_ctrl = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert_eq!(
            gizmo.state(),
            GizmoState::Scaling(ScaleMode::Axis(GizmoAxis::X))
        );
    }

    #[test]
    fn test_ctrl_near_center_is_uniform_scale() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        let mut input = idle_input(screen_of(&camera, Vec3::ZERO));
        input.left_button_down = true;
        input.key_ctrl = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert_eq!(gizmo.state(), GizmoState::Scaling(ScaleMode::Uniform));
    }

    #[test]
    fn test_axis_scale_changes_only_that_component() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let mut settings = EditorRenderSettings::default();
        settings.enable_scale_snap = false;

        let handle = screen_of(&camera, Vec3::Y * constants::SIZE);
        let mut input = idle_input(handle);
        input.left_button_down = true;
        input.key_ctrl = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert_eq!(
            gizmo.state(),
            GizmoState::Scaling(ScaleMode::Axis(GizmoAxis::Y))
        );

        input.mouse_position = handle + Vec2::new(40.0, -40.0);
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(entity.scale.y.is_finite());
        assert_eq!(entity.scale.x, 1.0);
        assert_eq!(entity.scale.z, 1.0);
    }

    #[test]
    fn test_rotation_starts_on_ring_with_middle_button() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        // A point on the Y ring away from the other two rings' planes.
        let radius = constants::SIZE * constants::RING_RADIUS_MULTIPLIER;
        let reach = radius * std::f32::consts::FRAC_1_SQRT_2;
        let ring_point = Vec3::new(reach, 0.0, reach);
        let mut input = idle_input(screen_of(&camera, ring_point));
        input.middle_button_down = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert_eq!(gizmo.state(), GizmoState::Rotating(GizmoAxis::Y));
    }

    fn rotate_y_by_pixels(
        entity: &mut EditableEntity,
        settings: &EditorRenderSettings,
        dx: f32,
    ) -> f32 {
        let camera = test_camera();
        let mut gizmo = TransformGizmo::new();

        let radius = constants::SIZE * constants::RING_RADIUS_MULTIPLIER;
        let reach = radius * std::f32::consts::FRAC_1_SQRT_2;
        let mut input = idle_input(screen_of(&camera, Vec3::new(reach, 0.0, reach)));
        input.middle_button_down = true;
        gizmo.update(&input, &camera, VIEWPORT, entity, settings);

        input.mouse_delta = Vec2::new(dx, 0.0);
        gizmo.update(&input, &camera, VIEWPORT, entity, settings);
        entity.rotation.y
    }

    #[test]
    fn test_rotation_rate_per_pixel() {
        let mut entity = EditableEntity::new("prop");
        let settings = EditorRenderSettings::default();
        let yaw = rotate_y_by_pixels(&mut entity, &settings, 50.0);
        assert!((yaw - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_snap_rounds_to_nearest_step() {
        let mut settings = EditorRenderSettings::default();
        settings.enable_rotation_snap = true;
        settings.rotation_snap_degrees = 15.0;

        // 22 degrees of raw travel snaps down to 15.
        let raw_22 = 22.0_f32.to_radians() / constants::RADIANS_PER_PIXEL;
        let mut entity = EditableEntity::new("prop");
        let yaw = rotate_y_by_pixels(&mut entity, &settings, raw_22);
        assert!((yaw.to_degrees() - 15.0).abs() < 1e-2, "got {}", yaw.to_degrees());

        // 8 degrees snaps up to 15.
        let raw_8 = 8.0_f32.to_radians() / constants::RADIANS_PER_PIXEL;
        let mut entity = EditableEntity::new("prop");
        let yaw = rotate_y_by_pixels(&mut entity, &settings, raw_8);
        assert!((yaw.to_degrees() - 15.0).abs() < 1e-2);

        // Exactly half a step rounds away from zero.
        let raw_half = 7.5_f32.to_radians() / constants::RADIANS_PER_PIXEL;
        let mut entity = EditableEntity::new("prop");
        let yaw = rotate_y_by_pixels(&mut entity, &settings, raw_half);
        assert!((yaw.to_degrees() - 15.0).abs() < 1e-2, "got {}", yaw.to_degrees());
    }

    #[test]
    fn test_rotation_x_uses_inverted_vertical_delta() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        // A point on the X ring away from the other two rings' planes.
        let radius = constants::SIZE * constants::RING_RADIUS_MULTIPLIER;
        let reach = radius * std::f32::consts::FRAC_1_SQRT_2;
        let mut input = idle_input(screen_of(&camera, Vec3::new(0.0, reach, reach)));
        input.middle_button_down = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert_eq!(gizmo.state(), GizmoState::Rotating(GizmoAxis::X));

        input.mouse_delta = Vec2::new(0.0, 30.0);
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!((entity.rotation.x + 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_ends_on_middle_release() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        let radius = constants::SIZE * constants::RING_RADIUS_MULTIPLIER;
        let reach = radius * std::f32::consts::FRAC_1_SQRT_2;
        let mut input = idle_input(screen_of(&camera, Vec3::new(reach, 0.0, reach)));
        input.middle_button_down = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(matches!(gizmo.state(), GizmoState::Rotating(_)));

        input.middle_button_down = false;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(gizmo.state().is_idle());
    }

    #[test]
    fn test_hover_pinned_to_active_axis_during_drag() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let mut settings = EditorRenderSettings::default();
        settings.enable_grid_snap = false;

        let handle = screen_of(&camera, Vec3::X * constants::SIZE);
        let mut input = idle_input(handle);
        input.left_button_down = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);

        // Move the cursor far away while dragging; hover stays on X.
        input.mouse_position = Vec2::new(20.0, 20.0);
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert_eq!(gizmo.hover_axis, Some(GizmoAxis::X));
    }

    #[test]
    fn test_hidden_gizmo_ignores_input() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        let mut gizmo = TransformGizmo::new();
        let mut settings = EditorRenderSettings::default();
        settings.show_selection_gizmo = false;

        let mut input = idle_input(screen_of(&camera, Vec3::X * constants::SIZE));
        input.left_button_down = true;
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);
        assert!(gizmo.state().is_idle());
        assert!(gizmo.visual(&entity, &settings).is_none());
    }

    #[test]
    fn test_uniform_scale_ratio_law() {
        assert_eq!(
            uniform_scale_factor(Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO, 2.0),
            Some(2.0)
        );
        // Repeated evaluation with the same radius is idempotent.
        assert_eq!(
            uniform_scale_factor(Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO, 2.0),
            Some(2.0)
        );
        assert_eq!(uniform_scale_factor(Vec3::ZERO, Vec3::ZERO, 0.0), None);
    }

    #[test]
    fn test_axis_scale_factor_formula() {
        assert!((axis_scale_factor(2.0, 1.0) - 2.0).abs() < 1e-6);
        assert!((axis_scale_factor(-1.0, 1.0) - 0.5).abs() < 1e-6);
        // Near-zero start scale falls back to 1.
        assert!((axis_scale_factor(2.0, 0.0) - 2.0).abs() < 1e-6);
        // Negative start scale uses its magnitude.
        assert!((axis_scale_factor(2.0, -1.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_visual_reflects_state() {
        let camera = test_camera();
        let mut entity = EditableEntity::new("prop");
        entity.size = Vec3::splat(2.0);
        let mut gizmo = TransformGizmo::new();
        let settings = EditorRenderSettings::default();

        let input = idle_input(screen_of(&camera, Vec3::X * constants::SIZE));
        gizmo.update(&input, &camera, VIEWPORT, &mut entity, &settings);

        let visual = gizmo.visual(&entity, &settings).unwrap();
        assert_eq!(visual.hover_axis, Some(GizmoAxis::X));
        assert_eq!(visual.active_axis, None);
        assert!(!visual.rotating);
        assert!(visual.selection_bounds.is_some());
    }
}
