//! Level overlay lines: entity bounding boxes and the recorded camera path

use glam::Vec3;
use mapedit_core::Level;

use crate::constants::level_lines as constants;
use crate::gizmo::geometry::push_aabb_outline;
use crate::pipeline::{PipelineConfig, create_camera_bind_group};
use crate::vertex::PositionColorVertex;

/// Renders wireframe outlines for every entity in the level, plus the
/// recorded camera path polyline with keyframe markers.
pub struct LevelLinesRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertex_count: u32,
    bind_group: wgpu::BindGroup,
}

impl LevelLinesRenderer {
    /// Creates a new level lines renderer.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let bind_group = create_camera_bind_group(
            device,
            camera_bind_group_layout,
            camera_buffer,
            "Level Lines",
        );

        let pipeline = PipelineConfig::new(
            "Level Lines",
            include_str!("shaders/line.wgsl"),
            format,
            depth_format,
            &[camera_bind_group_layout],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .build(device);

        let vertex_capacity = 8192;
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
            label: Some("Level Lines Vertex Buffer"),
            size: (capacity * std::mem::size_of::<PositionColorVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Rebuild the overlay for this frame.
    pub fn update_geometry(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        level: &Level,
        camera_path: Option<&[Vec3]>,
    ) {
        let vertices = build_level_vertices(level, camera_path);
        if vertices.is_empty() {
            self.vertex_count = 0;
            return;
        }

        if vertices.len() > self.vertex_capacity {
            self.vertex_capacity = vertices.len().next_power_of_two();
            self.vertex_buffer = Self::create_buffer(device, self.vertex_capacity);
            tracing::debug!(capacity = self.vertex_capacity, "level lines buffer grown");
        }
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        self.vertex_count = vertices.len() as u32;
    }

    /// Draw the overlay if it has geometry this frame.
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

fn push_keyframe_marker(vertices: &mut Vec<PositionColorVertex>, position: Vec3) {
    let s = constants::KEYFRAME_MARKER_SIZE;
    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        vertices.push(PositionColorVertex {
            position: (position - axis * s).to_array(),
            color: constants::KEYFRAME_COLOR,
        });
        vertices.push(PositionColorVertex {
            position: (position + axis * s).to_array(),
            color: constants::KEYFRAME_COLOR,
        });
    }
}

fn build_level_vertices(level: &Level, camera_path: Option<&[Vec3]>) -> Vec<PositionColorVertex> {
    let mut vertices = Vec::new();

    for entity in level.iter() {
        if let Some(bounds) = entity.bounds() {
            push_aabb_outline(&mut vertices, &bounds, constants::ENTITY_COLOR);
        }
    }

    if let Some(path) = camera_path {
        for pair in path.windows(2) {
            vertices.push(PositionColorVertex {
                position: pair[0].to_array(),
                color: constants::PATH_COLOR,
            });
            vertices.push(PositionColorVertex {
                position: pair[1].to_array(),
                color: constants::PATH_COLOR,
            });
        }
        for &point in path {
            push_keyframe_marker(&mut vertices, point);
        }
    }

    vertices
}
