//! Line geometry generation for the transform gizmo
//!
//! Produces line-list vertices for the axis handles, rotation rings, uniform
//! scale handle, and the selection bounding box. Rebuilt each frame the gizmo
//! is visible; the vertex counts are small enough that this is not worth
//! caching.

use glam::Vec3;
use mapedit_core::Aabb;

use super::hit::ring_basis;
use super::{GizmoAxis, GizmoVisual};
use crate::constants::gizmo as constants;
use crate::vertex::PositionColorVertex;

/// Scale a color toward white, clamping each channel.
pub fn brighten(color: [f32; 3], factor: f32) -> [f32; 3] {
    [
        (color[0] * factor).min(1.0),
        (color[1] * factor).min(1.0),
        (color[2] * factor).min(1.0),
    ]
}

fn axis_base_color(axis: GizmoAxis) -> [f32; 3] {
    match axis {
        GizmoAxis::X => constants::X_COLOR,
        GizmoAxis::Y => constants::Y_COLOR,
        GizmoAxis::Z => constants::Z_COLOR,
    }
}

/// Color for an axis handle given the current hover/active state.
pub fn axis_color(axis: GizmoAxis, visual: &GizmoVisual) -> [f32; 3] {
    let base = axis_base_color(axis);
    if visual.active_axis == Some(axis) {
        brighten(base, constants::ACTIVE_BRIGHTEN)
    } else if visual.hover_axis == Some(axis) {
        brighten(base, constants::HOVER_BRIGHTEN)
    } else {
        base
    }
}

fn push_line(vertices: &mut Vec<PositionColorVertex>, a: Vec3, b: Vec3, color: [f32; 3]) {
    vertices.push(PositionColorVertex {
        position: a.to_array(),
        color,
    });
    vertices.push(PositionColorVertex {
        position: b.to_array(),
        color,
    });
}

fn push_ring(
    vertices: &mut Vec<PositionColorVertex>,
    center: Vec3,
    axis: GizmoAxis,
    radius: f32,
    segments: usize,
    color: [f32; 3],
) {
    let (u, v) = ring_basis(axis);
    for i in 0..segments {
        let t0 = i as f32 / segments as f32 * std::f32::consts::TAU;
        let t1 = (i + 1) as f32 / segments as f32 * std::f32::consts::TAU;
        let a = center + (u * t0.cos() + v * t0.sin()) * radius;
        let b = center + (u * t1.cos() + v * t1.sin()) * radius;
        push_line(vertices, a, b, color);
    }
}

fn push_axis_with_arrow(
    vertices: &mut Vec<PositionColorVertex>,
    center: Vec3,
    axis: GizmoAxis,
    length: f32,
    color: [f32; 3],
) {
    let direction = axis.direction();
    let tip = center + direction * length;
    push_line(vertices, center, tip, color);

    // Four short barbs angled back from the tip.
    let barb = length * 0.15;
    let (u, v) = ring_basis(axis);
    for side in [u, -u, v, -v] {
        push_line(vertices, tip, tip - direction * barb + side * barb * 0.5, color);
    }
}

/// Outline of an axis-aligned box as 12 line segments.
pub fn push_aabb_outline(vertices: &mut Vec<PositionColorVertex>, aabb: &Aabb, color: [f32; 3]) {
    let (lo, hi) = (aabb.min, aabb.max);
    let corners = [
        Vec3::new(lo.x, lo.y, lo.z),
        Vec3::new(hi.x, lo.y, lo.z),
        Vec3::new(hi.x, lo.y, hi.z),
        Vec3::new(lo.x, lo.y, hi.z),
        Vec3::new(lo.x, hi.y, lo.z),
        Vec3::new(hi.x, hi.y, lo.z),
        Vec3::new(hi.x, hi.y, hi.z),
        Vec3::new(lo.x, hi.y, hi.z),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    for (a, b) in EDGES {
        push_line(vertices, corners[a], corners[b], color);
    }
}

/// Build the full gizmo line list for one frame.
pub fn build_gizmo_vertices(visual: &GizmoVisual) -> Vec<PositionColorVertex> {
    let mut vertices = Vec::new();
    let center = visual.center;
    let size = super::handle_length();
    let ring_radius = super::ring_radius();

    for axis in GizmoAxis::ALL {
        push_axis_with_arrow(&mut vertices, center, axis, size, axis_color(axis, visual));
    }

    for axis in GizmoAxis::ALL {
        let color = axis_color(axis, visual);
        push_ring(
            &mut vertices,
            center,
            axis,
            ring_radius,
            constants::RING_SEGMENTS,
            color,
        );
        // Actively rotated ring gets a second pass at a slightly larger
        // radius so it reads as thicker.
        if visual.rotating && visual.active_axis == Some(axis) {
            push_ring(
                &mut vertices,
                center,
                axis,
                ring_radius + constants::ACTIVE_RING_OFFSET,
                constants::RING_SEGMENTS,
                color,
            );
        }
    }

    let handle_color = if visual.uniform_highlight {
        brighten(constants::HANDLE_COLOR, constants::ACTIVE_BRIGHTEN)
    } else {
        constants::HANDLE_COLOR
    };
    push_ring(
        &mut vertices,
        center,
        GizmoAxis::Y,
        size * constants::UNIFORM_HANDLE_MULTIPLIER,
        constants::HANDLE_SEGMENTS,
        handle_color,
    );

    if let Some(bounds) = &visual.selection_bounds {
        push_aabb_outline(&mut vertices, bounds, constants::SELECTION_COLOR);
    }

    vertices
}
