//! Ground grid renderer

use wgpu::util::DeviceExt;

use crate::constants::grid as constants;
use crate::pipeline::{PipelineConfig, create_camera_bind_group};
use crate::vertex::PositionColorVertex;

/// Grid renderer for the XZ ground plane.
pub struct GridRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    bind_group: wgpu::BindGroup,
}

impl GridRenderer {
    /// Creates a new grid renderer.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let bind_group =
            create_camera_bind_group(device, camera_bind_group_layout, camera_buffer, "Grid");

        let pipeline = PipelineConfig::new(
            "Grid",
            include_str!("shaders/grid.wgsl"),
            format,
            depth_format,
            &[camera_bind_group_layout],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .build(device);

        let vertices = generate_grid_vertices(constants::DEFAULT_SIZE, constants::DEFAULT_SPACING);
        let vertex_count = vertices.len() as u32;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            vertex_count,
            bind_group,
        }
    }

    /// Renders the grid.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }

    /// Rebuild the grid with a new half-extent and spacing.
    pub fn rebuild(&mut self, device: &wgpu::Device, size: f32, spacing: f32) {
        let vertices = generate_grid_vertices(size, spacing.max(1e-3));
        self.vertex_count = vertices.len() as u32;

        self.vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
    }
}

/// Generate grid line vertices on the y=0 plane. The lines through the
/// origin take the world-axis colors.
fn generate_grid_vertices(size: f32, spacing: f32) -> Vec<PositionColorVertex> {
    let mut vertices = Vec::new();
    let half_size = size;
    let num_lines = (size / spacing) as i32;

    // Lines parallel to X
    for i in -num_lines..=num_lines {
        let z = i as f32 * spacing;
        let color = if i == 0 {
            constants::X_AXIS_COLOR
        } else {
            constants::LINE_COLOR
        };

        vertices.push(PositionColorVertex {
            position: [-half_size, 0.0, z],
            color,
        });
        vertices.push(PositionColorVertex {
            position: [half_size, 0.0, z],
            color,
        });
    }

    // Lines parallel to Z
    for i in -num_lines..=num_lines {
        let x = i as f32 * spacing;
        let color = if i == 0 {
            constants::Z_AXIS_COLOR
        } else {
            constants::LINE_COLOR
        };

        vertices.push(PositionColorVertex {
            position: [x, 0.0, -half_size],
            color,
        });
        vertices.push(PositionColorVertex {
            position: [x, 0.0, half_size],
            color,
        });
    }

    vertices
}
