//! Editable entity definitions

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bounds::Aabb;
use crate::constants::ANGLE_TOLERANCE;

/// Stable identifier for an entity within a level.
pub type EntityId = Uuid;

/// Broad entity category, used for layer visibility and display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EntityKind {
    #[default]
    Prop,
    Terrain,
    Light,
    Trigger,
}

impl EntityKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Prop => "Prop",
            EntityKind::Terrain => "Terrain",
            EntityKind::Light => "Light",
            EntityKind::Trigger => "Trigger",
        }
    }
}

/// A placed map entity whose transform the gizmo manipulates.
///
/// `size` is the axis-aligned bounding extent used for the selection box and
/// for ray picking; it is independent of `scale`, which map formats apply to
/// the entity's mesh at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditableEntity {
    pub id: EntityId,
    pub name: String,
    pub kind: EntityKind,
    /// World position (gizmo center).
    pub position: Vec3,
    /// Euler rotation in radians, one component per gizmo ring.
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Bounding extent; zero means "no selection box".
    pub size: Vec3,
}

impl EditableEntity {
    /// Create a new entity at the origin with unit scale.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: EntityKind::default(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            size: Vec3::ZERO,
        }
    }

    /// World-space bounding box from `position` and `size`.
    ///
    /// Returns `None` when `size` is zero (the entity has no volume).
    pub fn bounds(&self) -> Option<Aabb> {
        if self.size == Vec3::ZERO {
            return None;
        }
        Some(Aabb::from_center_half_extents(
            self.position,
            self.size * 0.5,
        ))
    }

    /// Convert an integer quarter-turn (0..=3) into a Y-axis rotation.
    ///
    /// Negative and out-of-range values wrap.
    pub fn rotation_from_quarter_turns(turns: i32) -> Vec3 {
        let turns = ((turns % 4) + 4) % 4;
        match turns {
            1 => Vec3::new(0.0, FRAC_PI_2, 0.0),
            2 => Vec3::new(0.0, PI, 0.0),
            3 => Vec3::new(0.0, PI * 1.5, 0.0),
            _ => Vec3::ZERO,
        }
    }

    /// Convert a Y-axis rotation back into an integer quarter-turn.
    ///
    /// Angles that do not land on a quarter turn (within tolerance) map to 0.
    pub fn quarter_turns_from_rotation(rotation: Vec3) -> i32 {
        let y = normalize_angle(rotation.y);

        if approximately(y, 0.0) {
            0
        } else if approximately(y, FRAC_PI_2) {
            1
        } else if approximately(y, PI) {
            2
        } else if approximately(y, PI * 1.5) {
            3
        } else {
            0
        }
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    a
}

fn approximately(a: f32, b: f32) -> bool {
    (a - b).abs() < ANGLE_TOLERANCE
}
