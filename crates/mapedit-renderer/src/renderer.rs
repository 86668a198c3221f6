//! Main viewport renderer
//!
//! Owns the camera, the shared camera uniform, and the sub-renderers, and
//! issues one render pass per frame. Draw order: grid, level overlays, then
//! the gizmo (which ignores depth so it stays on top).

use glam::Vec3;
use mapedit_core::Level;

use crate::camera::{Camera, CameraUniform};
use crate::gizmo::{GizmoRenderer, GizmoVisual};
use crate::grid::GridRenderer;
use crate::level_lines::LevelLinesRenderer;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.09,
    g: 0.09,
    b: 0.11,
    a: 1.0,
};

/// Viewport renderer
pub struct Renderer {
    format: wgpu::TextureFormat,
    camera: Camera,
    camera_buffer: wgpu::Buffer,
    camera_bind_group_layout: wgpu::BindGroupLayout,
    depth_view: wgpu::TextureView,
    grid: GridRenderer,
    level_lines: LevelLinesRenderer,
    gizmo: GizmoRenderer,
    pub show_grid: bool,
    grid_spacing: f32,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Create the renderer and all sub-renderers.
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32) -> Self {
        let camera = Camera::new(width as f32 / height.max(1) as f32);

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let grid = GridRenderer::new(
            device,
            format,
            DEPTH_FORMAT,
            &camera_bind_group_layout,
            &camera_buffer,
        );
        let level_lines = LevelLinesRenderer::new(
            device,
            format,
            DEPTH_FORMAT,
            &camera_bind_group_layout,
            &camera_buffer,
        );
        let gizmo = GizmoRenderer::new(
            device,
            format,
            DEPTH_FORMAT,
            &camera_bind_group_layout,
            &camera_buffer,
        );

        let depth_view = create_depth_view(device, width, height);

        Self {
            format,
            camera,
            camera_buffer,
            camera_bind_group_layout,
            depth_view,
            grid,
            level_lines,
            gizmo,
            show_grid: true,
            grid_spacing: crate::constants::grid::DEFAULT_SPACING,
            width,
            height,
        }
    }

    /// Output texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Viewport size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Resize the depth buffer and camera projection.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        self.width = width;
        self.height = height;
        self.depth_view = create_depth_view(device, width, height);
        self.camera.update_viewport(width as f32, height as f32);
    }

    /// Rebuild per-frame overlay geometry and upload the camera uniform.
    pub fn prepare_frame(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        level: &Level,
        camera_path: Option<&[Vec3]>,
        gizmo_visual: Option<&GizmoVisual>,
    ) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.uniform()]),
        );
        self.level_lines
            .update_geometry(device, queue, level, camera_path);
        self.gizmo.update_geometry(device, queue, gizmo_visual);
    }

    /// Keep the ground grid in step with the snap grid size. Rebuilds the
    /// line buffer only when the spacing actually changes.
    pub fn set_grid_spacing(&mut self, device: &wgpu::Device, spacing: f32) {
        let spacing = spacing.max(1e-3);
        if spacing == self.grid_spacing {
            return;
        }
        self.grid_spacing = spacing;
        self.grid
            .rebuild(device, crate::constants::grid::DEFAULT_SIZE, spacing);
    }

    /// Render a frame into the given color target.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Viewport Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if self.show_grid {
            self.grid.render(&mut render_pass);
        }
        self.level_lines.render(&mut render_pass);
        self.gizmo.render(&mut render_pass);
    }

    /// Bind group layout for the shared camera uniform, for hosts that add
    /// their own sub-renderers.
    pub fn camera_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.camera_bind_group_layout
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Viewport Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
