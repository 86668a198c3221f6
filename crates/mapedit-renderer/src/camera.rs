//! Free-look perspective camera for the 3D viewport

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::camera as constants;

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

/// Free-look perspective camera.
///
/// Orientation is held as a yaw/pitch pair; `target` is kept consistent as
/// `eye + forward` whenever the angles change, so code that thinks in terms of
/// an eye/target pair and code that thinks in angles see the same camera.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera with default parameters, looking at the origin
    /// from the front preset offset.
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            eye: Vec3::from(constants::FRONT_OFFSET),
            target: Vec3::ZERO,
            up: Vec3::Y,
            yaw: 0.0,
            pitch: 0.0,
            fov: constants::FOV_DEGREES.to_radians(),
            aspect,
            near: constants::NEAR,
            far: constants::FAR,
        };
        camera.look_from_front(Vec3::ZERO);
        camera
    }

    /// Update the projection aspect ratio. A zero-height viewport is ignored
    /// to keep the projection finite.
    pub fn update_viewport(&mut self, width: f32, height: f32) {
        if height > 0.0 && width > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Direction vector for a yaw/pitch pair.
    ///
    /// Yaw 0 looks down +Z, increasing yaw turns toward +X, pitch raises
    /// toward +Y. The same convention is used everywhere angles and
    /// directions are converted.
    pub fn direction_from_yaw_pitch(yaw: f32, pitch: f32) -> Vec3 {
        Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            pitch.cos() * yaw.cos(),
        )
    }

    /// Inverse of [`direction_from_yaw_pitch`](Self::direction_from_yaw_pitch).
    /// Degenerate directions fall back to yaw 0, pitch 0.
    pub fn yaw_pitch_from_direction(direction: Vec3) -> (f32, f32) {
        if direction.length_squared() < 1e-12 {
            return (0.0, 0.0);
        }
        let dir = direction.normalize();
        (dir.x.atan2(dir.z), dir.y.clamp(-1.0, 1.0).asin())
    }

    /// Set the orientation angles directly. Pitch is clamped just short of
    /// straight up/down to avoid gimbal flip; `target` is re-derived from
    /// the new forward so it never goes stale.
    pub fn set_yaw_pitch(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-constants::PITCH_LIMIT, constants::PITCH_LIMIT);
        self.target = self.eye + Self::direction_from_yaw_pitch(self.yaw, self.pitch);
    }

    /// Add deltas to the orientation angles.
    pub fn add_yaw_pitch(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.set_yaw_pitch(self.yaw + delta_yaw, self.pitch + delta_pitch);
    }

    /// Camera forward direction. Falls back to +Z when eye and target
    /// coincide so downstream normalizations never see a zero vector.
    pub fn forward(&self) -> Vec3 {
        let look = self.target - self.eye;
        if look.length_squared() < 1e-12 {
            Vec3::Z
        } else {
            look.normalize()
        }
    }

    /// Camera right direction. Falls back to +X when looking straight
    /// along world up.
    pub fn right(&self) -> Vec3 {
        let right = self.forward().cross(Vec3::Y);
        if right.length_squared() < 1e-12 {
            Vec3::X
        } else {
            right.normalize()
        }
    }

    /// Camera up direction, orthogonal to forward and right.
    pub fn camera_up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Displace the eye along local axes. The vertical component uses world
    /// up rather than the pitched local up, so flying up never drifts
    /// forward. Target moves with the eye to preserve orientation.
    pub fn move_local(&mut self, forward: f32, right: f32, up: f32) {
        let delta = self.forward() * forward + self.right() * right + Vec3::Y * up;
        self.eye += delta;
        self.target += delta;
    }

    /// Move the eye along the view direction. Positive zooms in.
    pub fn zoom(&mut self, amount: f32) {
        let forward = self.forward();
        self.eye += forward * amount;
        self.target = self.eye + forward;
    }

    /// Point the camera at `center` from the current eye position.
    pub fn look_at(&mut self, center: Vec3) {
        self.target = center;
        self.sync_angles_from_look();
    }

    /// Place the eye at a fixed distance from `center` along the current
    /// view direction and look at it.
    pub fn focus_on(&mut self, center: Vec3, distance: f32) {
        let forward = self.forward();
        self.eye = center - forward * distance.max(0.1);
        self.target = center;
        self.sync_angles_from_look();
    }

    /// Top-down preset view of `center`.
    pub fn look_from_top(&mut self, center: Vec3) {
        self.look_from_offset(center, Vec3::from(constants::TOP_OFFSET));
    }

    /// Front preset view of `center`.
    pub fn look_from_front(&mut self, center: Vec3) {
        self.look_from_offset(center, Vec3::from(constants::FRONT_OFFSET));
    }

    /// Side preset view of `center`.
    pub fn look_from_side(&mut self, center: Vec3) {
        self.look_from_offset(center, Vec3::from(constants::SIDE_OFFSET));
    }

    fn look_from_offset(&mut self, center: Vec3, offset: Vec3) {
        self.eye = center + offset;
        self.target = center;
        self.sync_angles_from_look();
    }

    fn sync_angles_from_look(&mut self) {
        let (yaw, pitch) = Self::yaw_pitch_from_direction(self.target - self.eye);
        self.yaw = yaw;
        self.pitch = pitch.clamp(-constants::PITCH_LIMIT, constants::PITCH_LIMIT);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + self.forward(), self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect.max(1e-4), self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        let view_proj = proj * view;

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [self.eye.x, self.eye.y, self.eye.z, 1.0],
        }
    }

    /// Convert screen coordinates to a world-space pick ray.
    ///
    /// Unprojects the pixel at the near and far planes through the inverse
    /// view-projection; the ray origin is the near-plane point.
    pub fn screen_to_ray(
        &self,
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * screen_x / screen_width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen_y / screen_height.max(1.0));

        let inv_proj = self.projection_matrix().inverse();
        let inv_view = self.view_matrix().inverse();

        let near_ndc = Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_ndc = Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near_view = inv_proj * near_ndc;
        let far_view = inv_proj * far_ndc;
        let near_view = near_view.truncate() / near_view.w;
        let far_view = far_view.truncate() / far_view.w;

        let near_world = (inv_view * near_view.extend(1.0)).truncate();
        let far_world = (inv_view * far_view.extend(1.0)).truncate();

        let ray_origin = near_world;
        let ray_direction = (far_world - near_world).normalize();

        (ray_origin, ray_direction)
    }

    /// Project a world point to viewport pixel coordinates.
    ///
    /// Returns `None` for points at or behind the eye plane, where the
    /// perspective divide is meaningless.
    pub fn project_to_screen(
        &self,
        world: Vec3,
        screen_width: f32,
        screen_height: f32,
    ) -> Option<Vec2> {
        let clip = self.projection_matrix() * self.view_matrix() * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * screen_width,
            (1.0 - ndc.y) * 0.5 * screen_height,
        ))
    }

    /// View-space depth of a world point. Positive in front of the camera,
    /// increasing away from it.
    pub fn view_depth(&self, world: Vec3) -> f32 {
        -(self.view_matrix() * world.extend(1.0)).z
    }
}
