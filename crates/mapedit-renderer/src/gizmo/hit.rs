//! Screen-space hit testing for the transform gizmo
//!
//! All picking happens in viewport pixel space: gizmo geometry is projected
//! through the camera and compared against the cursor with pixel thresholds,
//! so handle sensitivity is independent of zoom level.

use glam::{Vec2, Vec3};

use super::GizmoAxis;
use crate::camera::Camera;
use crate::constants::gizmo as constants;

/// Distance from a point to a line segment, all in pixels.
pub fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_squared();
    if length_sq < 1e-12 {
        return (point - start).length();
    }
    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    (point - (start + segment * t)).length()
}

/// Intersect a ray with a plane. Returns the hit point, or `None` when the
/// ray is parallel to the plane or the plane lies behind the ray origin.
pub fn ray_plane_intersection(
    ray_origin: Vec3,
    ray_direction: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<Vec3> {
    let denom = ray_direction.dot(plane_normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (plane_point - ray_origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;
    }
    Some(ray_origin + ray_direction * t)
}

/// Two unit vectors spanning the plane perpendicular to a gizmo axis.
/// Used to sweep ring sample points around that axis.
pub fn ring_basis(axis: GizmoAxis) -> (Vec3, Vec3) {
    match axis {
        GizmoAxis::X => (Vec3::Y, Vec3::Z),
        GizmoAxis::Y => (Vec3::Z, Vec3::X),
        GizmoAxis::Z => (Vec3::X, Vec3::Y),
    }
}

/// One projected axis handle considered for picking.
#[derive(Debug, Clone, Copy)]
struct AxisCandidate {
    axis: GizmoAxis,
    /// Cursor-to-segment distance in pixels.
    distance: f32,
    /// View-space depth of the handle endpoint.
    depth: f32,
}

/// Pick the best axis among candidates under the pixel threshold.
///
/// When two candidates are within [`constants::DEPTH_TIE_EPSILON`] pixels of
/// each other the one nearer the camera wins, which disambiguates axes that
/// overlap on screen from the current viewing angle.
fn pick_nearest(candidates: &[AxisCandidate], threshold: f32) -> Option<GizmoAxis> {
    let mut best: Option<AxisCandidate> = None;
    for candidate in candidates {
        if candidate.distance > threshold {
            continue;
        }
        let better = match best {
            None => true,
            Some(current) => {
                if (candidate.distance - current.distance).abs() < constants::DEPTH_TIE_EPSILON {
                    candidate.depth < current.depth
                } else {
                    candidate.distance < current.distance
                }
            }
        };
        if better {
            best = Some(*candidate);
        }
    }
    best.map(|candidate| candidate.axis)
}

/// Hit test the three axis handles.
///
/// Each handle is the segment from the gizmo center to
/// `center + handle_length * axis`, projected to the viewport.
pub fn hit_test_axes(
    camera: &Camera,
    cursor: Vec2,
    viewport: Vec2,
    center: Vec3,
    handle_length: f32,
) -> Option<GizmoAxis> {
    let center_screen = camera.project_to_screen(center, viewport.x, viewport.y)?;

    let mut candidates = Vec::with_capacity(3);
    for axis in GizmoAxis::ALL {
        let endpoint = center + axis.direction() * handle_length;
        let Some(endpoint_screen) = camera.project_to_screen(endpoint, viewport.x, viewport.y)
        else {
            continue;
        };
        candidates.push(AxisCandidate {
            axis,
            distance: distance_to_segment(cursor, center_screen, endpoint_screen),
            depth: camera.view_depth(endpoint),
        });
    }

    pick_nearest(&candidates, constants::AXIS_HIT_THRESHOLD)
}

/// Hit test the three rotation rings.
///
/// Each ring is sampled at [`constants::RING_SEGMENTS`] points, projected,
/// and the minimum point distance across all three sample sets decides the
/// winning ring.
pub fn hit_test_rings(
    camera: &Camera,
    cursor: Vec2,
    viewport: Vec2,
    center: Vec3,
    radius: f32,
) -> Option<GizmoAxis> {
    let mut best_axis = None;
    let mut best_distance = constants::RING_HIT_THRESHOLD;

    for axis in GizmoAxis::ALL {
        let (u, v) = ring_basis(axis);
        for i in 0..constants::RING_SEGMENTS {
            let theta = i as f32 / constants::RING_SEGMENTS as f32 * std::f32::consts::TAU;
            let world = center + (u * theta.cos() + v * theta.sin()) * radius;
            let Some(screen) = camera.project_to_screen(world, viewport.x, viewport.y) else {
                continue;
            };
            let distance = (cursor - screen).length();
            if distance <= best_distance {
                best_distance = distance;
                best_axis = Some(axis);
            }
        }
    }

    best_axis
}

/// Whether the cursor is within the uniform-scale pick radius of the
/// gizmo center.
pub fn hit_test_center(camera: &Camera, cursor: Vec2, viewport: Vec2, center: Vec3) -> bool {
    match camera.project_to_screen(center, viewport.x, viewport.y) {
        Some(screen) => (cursor - screen).length() <= constants::CENTER_HIT_THRESHOLD,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn test_camera() -> Camera {
        let mut camera = Camera::new(VIEWPORT.x / VIEWPORT.y);
        camera.eye = Vec3::new(0.0, 0.0, -10.0);
        camera.look_at(Vec3::ZERO);
        camera
    }

    #[test]
    fn test_distance_to_segment_interior() {
        let d = distance_to_segment(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_to_segment_clamps_to_endpoints() {
        let d = distance_to_segment(
            Vec2::new(14.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_to_degenerate_segment() {
        let p = Vec2::new(3.0, 4.0);
        let d = distance_to_segment(p, Vec2::ZERO, Vec2::ZERO);
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_plane_basic() {
        let hit = ray_plane_intersection(
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap();
        assert!(hit.length() < 1e-6);
    }

    #[test]
    fn test_ray_parallel_to_plane() {
        let hit = ray_plane_intersection(Vec3::new(0.0, 5.0, 0.0), Vec3::X, Vec3::ZERO, Vec3::Y);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_plane_behind_origin() {
        let hit = ray_plane_intersection(Vec3::new(0.0, 5.0, 0.0), Vec3::Y, Vec3::ZERO, Vec3::Y);
        assert!(hit.is_none());
    }

    #[test]
    fn test_cursor_on_axis_endpoint_picks_that_axis() {
        let camera = test_camera();
        let endpoint = Vec3::X * 0.75;
        let screen = camera
            .project_to_screen(endpoint, VIEWPORT.x, VIEWPORT.y)
            .unwrap();

        let hit = hit_test_axes(&camera, screen, VIEWPORT, Vec3::ZERO, 0.75);
        assert_eq!(hit, Some(GizmoAxis::X));
    }

    #[test]
    fn test_cursor_far_from_gizmo_misses() {
        let camera = test_camera();
        let hit = hit_test_axes(&camera, Vec2::new(5.0, 5.0), VIEWPORT, Vec3::ZERO, 0.75);
        assert!(hit.is_none());
    }

    #[test]
    fn test_depth_tie_break_prefers_nearer_axis() {
        // Synthetic candidates overlapping on screen within the tie epsilon.
        let candidates = [
            AxisCandidate {
                axis: GizmoAxis::X,
                distance: 3.0,
                depth: 20.0,
            },
            AxisCandidate {
                axis: GizmoAxis::Z,
                distance: 3.2,
                depth: 12.0,
            },
        ];
        assert_eq!(pick_nearest(&candidates, 10.0), Some(GizmoAxis::Z));
    }

    #[test]
    fn test_clearly_closer_axis_wins_regardless_of_depth() {
        let candidates = [
            AxisCandidate {
                axis: GizmoAxis::X,
                distance: 2.0,
                depth: 20.0,
            },
            AxisCandidate {
                axis: GizmoAxis::Y,
                distance: 8.0,
                depth: 1.0,
            },
        ];
        assert_eq!(pick_nearest(&candidates, 10.0), Some(GizmoAxis::X));
    }

    #[test]
    fn test_cursor_on_ring_picks_ring_axis() {
        let camera = test_camera();
        // A point on the X ring (plane perpendicular to X), off the other
        // two rings' planes.
        let reach = 0.9 * std::f32::consts::FRAC_1_SQRT_2;
        let world = Vec3::new(0.0, reach, reach);
        let screen = camera
            .project_to_screen(world, VIEWPORT.x, VIEWPORT.y)
            .unwrap();

        let hit = hit_test_rings(&camera, screen, VIEWPORT, Vec3::ZERO, 0.9);
        assert_eq!(hit, Some(GizmoAxis::X));
    }

    #[test]
    fn test_center_hit_radius() {
        let camera = test_camera();
        let center_screen = camera
            .project_to_screen(Vec3::ZERO, VIEWPORT.x, VIEWPORT.y)
            .unwrap();

        assert!(hit_test_center(
            &camera,
            center_screen + Vec2::new(5.0, 5.0),
            VIEWPORT,
            Vec3::ZERO
        ));
        assert!(!hit_test_center(
            &camera,
            center_screen + Vec2::new(30.0, 0.0),
            VIEWPORT,
            Vec3::ZERO
        ));
    }
}
