//! Viewport rendering state

use std::sync::Arc;

use glam::Vec2;
use parking_lot::Mutex;

use mapedit_core::InputSnapshot;
use mapedit_renderer::Renderer;

use super::AppState;
use super::camera_controller::CameraController;
use super::gizmo::TransformGizmo;

/// Render texture for viewport
struct RenderTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    egui_texture_id: egui::TextureId,
    width: u32,
    height: u32,
}

/// Viewport rendering state
pub struct ViewportState {
    pub renderer: Renderer,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
    render_texture: Option<RenderTexture>,
    pub gizmo: TransformGizmo,
    pub controller: CameraController,
}

impl ViewportState {
    /// Create a new viewport state
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        format: wgpu::TextureFormat,
    ) -> Self {
        let renderer = Renderer::new(&device, format, 800, 600);
        Self {
            renderer,
            device,
            queue,
            render_texture: None,
            gizmo: TransformGizmo::new(),
            controller: CameraController::new(),
        }
    }

    /// Ensure the render texture matches the requested size
    pub fn ensure_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> egui::TextureId {
        let width = width.max(1);
        let height = height.max(1);

        let needs_recreate = self
            .render_texture
            .as_ref()
            .is_none_or(|t| t.width != width || t.height != height);

        if needs_recreate {
            // Free old texture if exists
            if let Some(old) = self.render_texture.take() {
                egui_renderer.free_texture(&old.egui_texture_id);
            }

            let texture = self.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Viewport Render Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: self.renderer.format(),
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            });

            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

            let egui_texture_id = egui_renderer.register_native_texture(
                &self.device,
                &view,
                wgpu::FilterMode::Linear,
            );

            self.renderer.resize(&self.device, width, height);

            self.render_texture = Some(RenderTexture {
                texture,
                view,
                egui_texture_id,
                width,
                height,
            });
        }

        self.render_texture.as_ref().unwrap().egui_texture_id
    }

    /// Advance camera, path recorder, and gizmo for one frame, then upload
    /// this frame's overlay geometry.
    pub fn update(&mut self, input: &InputSnapshot, dt: f32, app: &mut AppState) {
        let (width, height) = self.renderer.size();
        let viewport = Vec2::new(width as f32, height as f32);

        // Playback owns the camera; manual flight resumes when it ends.
        if app.recorder.is_playing() {
            app.recorder.update(self.renderer.camera_mut(), dt);
        } else {
            self.controller.update(self.renderer.camera_mut(), input, dt);
            app.recorder.update(self.renderer.camera_mut(), dt);
        }

        let camera = self.renderer.camera().clone();
        let settings = app.settings.clone();
        if let Some(entity) = app.selected_entity_mut() {
            let before = (entity.position, entity.rotation, entity.scale);
            self.gizmo
                .update(input, &camera, viewport, entity, &settings);
            if (entity.position, entity.rotation, entity.scale) != before {
                app.modified = true;
            }
        } else {
            self.gizmo.clear();
        }

        self.renderer.show_grid = app.settings.show_grid;
        self.renderer
            .set_grid_spacing(&self.device, app.settings.grid_size.x);

        let gizmo_visual = app
            .selected_entity()
            .and_then(|entity| self.gizmo.visual(entity, &app.settings));
        let path_points = if app.settings.show_camera_path {
            Some(app.recorder.path_points())
        } else {
            None
        };

        self.renderer.prepare_frame(
            &self.device,
            &self.queue,
            &app.level,
            path_points.as_deref(),
            gizmo_visual.as_ref(),
        );
    }

    /// Pick the entity under the cursor, if any.
    pub fn pick_entity(
        &self,
        mouse: Vec2,
        app: &AppState,
    ) -> Option<mapedit_core::EntityId> {
        let (width, height) = self.renderer.size();
        let (origin, direction) =
            self.renderer
                .camera()
                .screen_to_ray(mouse.x, mouse.y, width as f32, height as f32);
        app.level.pick(origin, direction)
    }

    /// Render the 3D scene to the texture
    pub fn render(&mut self) {
        let Some(ref rt) = self.render_texture else {
            return;
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Render Encoder"),
            });

        self.renderer.render(&mut encoder, &rt.view);

        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

pub type SharedViewportState = Arc<Mutex<ViewportState>>;
