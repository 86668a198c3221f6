//! Transform gizmo rendering and picking
//!
//! The gizmo is drawn as a line-list overlay: three axis handles with
//! arrowheads, three rotation rings, a uniform scale handle, and the selected
//! entity's bounding box. Depth testing is disabled for the overlay pass so
//! handles stay visible through level geometry.
//!
//! Interaction state lives in the frontend; this module only knows how to
//! pick handles in screen space ([`hit`]) and how to draw whatever the
//! frontend says is hovered or active ([`GizmoVisual`]).

pub mod geometry;
pub mod hit;

use glam::Vec3;
use mapedit_core::Aabb;

use crate::constants::gizmo as constants;
use crate::pipeline::{PipelineConfig, create_camera_bind_group};
use crate::vertex::PositionColorVertex;

/// One of the three manipulation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

impl GizmoAxis {
    /// All axes in pick-priority order.
    pub const ALL: [GizmoAxis; 3] = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];

    /// World-space direction of the axis.
    pub fn direction(&self) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::X,
            GizmoAxis::Y => Vec3::Y,
            GizmoAxis::Z => Vec3::Z,
        }
    }

    /// Keep only this axis's component of a vector.
    pub fn mask(&self, v: Vec3) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::new(v.x, 0.0, 0.0),
            GizmoAxis::Y => Vec3::new(0.0, v.y, 0.0),
            GizmoAxis::Z => Vec3::new(0.0, 0.0, v.z),
        }
    }
}

/// What the gizmo should look like this frame.
///
/// Produced by the frontend interaction state machine, consumed by
/// [`GizmoRenderer::update_geometry`].
#[derive(Debug, Clone, PartialEq)]
pub struct GizmoVisual {
    /// Gizmo origin (the selected entity's position).
    pub center: Vec3,
    /// Axis under the cursor, highlighted.
    pub hover_axis: Option<GizmoAxis>,
    /// Axis being dragged, highlighted brighter.
    pub active_axis: Option<GizmoAxis>,
    /// Whether the active drag is a rotation (draws the doubled ring).
    pub rotating: bool,
    /// Whether the uniform scale handle is hot.
    pub uniform_highlight: bool,
    /// Selected entity's bounding box, when it has one.
    pub selection_bounds: Option<Aabb>,
}

/// World-space rotation ring radius.
pub fn ring_radius() -> f32 {
    constants::SIZE * constants::RING_RADIUS_MULTIPLIER
}

/// World-space axis handle length.
pub fn handle_length() -> f32 {
    constants::SIZE
}

/// Gizmo overlay renderer
pub struct GizmoRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertex_count: u32,
    bind_group: wgpu::BindGroup,
}

impl GizmoRenderer {
    /// Creates the overlay pipeline. Depth testing is disabled so the gizmo
    /// draws on top of everything.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let bind_group =
            create_camera_bind_group(device, camera_bind_group_layout, camera_buffer, "Gizmo");

        let pipeline = PipelineConfig::new(
            "Gizmo",
            include_str!("../shaders/line.wgsl"),
            format,
            depth_format,
            &[camera_bind_group_layout],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .without_depth_test()
        .build(device);

        let vertex_capacity = 4096;
        let vertex_buffer = Self::create_buffer(device, vertex_capacity);

        Self {
            pipeline,
            vertex_buffer,
            vertex_capacity,
            vertex_count: 0,
            bind_group,
        }
    }

    fn create_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Gizmo Vertex Buffer"),
            size: (capacity * std::mem::size_of::<PositionColorVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Rebuild the gizmo line list for this frame. Pass `None` to hide.
    pub fn update_geometry(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        visual: Option<&GizmoVisual>,
    ) {
        let Some(visual) = visual else {
            self.vertex_count = 0;
            return;
        };

        let vertices = geometry::build_gizmo_vertices(visual);
        if vertices.len() > self.vertex_capacity {
            self.vertex_capacity = vertices.len().next_power_of_two();
            self.vertex_buffer = Self::create_buffer(device, self.vertex_capacity);
            tracing::debug!(capacity = self.vertex_capacity, "gizmo buffer grown");
        }
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        self.vertex_count = vertices.len() as u32;
    }

    /// Draw the gizmo if it has geometry this frame.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
