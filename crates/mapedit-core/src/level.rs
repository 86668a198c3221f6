//! Level entity registry

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::entity::{EditableEntity, EntityId};

/// The set of entities in the open level.
///
/// An explicit registry object: picking and selection always go through a
/// `Level` instance, so multiple viewports or tests can each own their own
/// scene without shared mutable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    entities: Vec<EditableEntity>,
}

impl Level {
    /// Create an empty level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its id.
    pub fn add(&mut self, entity: EditableEntity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// Remove an entity by id. Returns the removed entity if it existed.
    pub fn remove(&mut self, id: EntityId) -> Option<EditableEntity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    /// Look up an entity by id.
    pub fn get(&self, id: EntityId) -> Option<&EditableEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Look up an entity by id, mutably.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EditableEntity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &EditableEntity> {
        self.entities.iter()
    }

    /// Number of entities in the level.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the level is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Pick the entity whose bounding box the ray hits nearest the origin.
    ///
    /// Entities with zero `size` have no volume and are never picked.
    pub fn pick(&self, ray_origin: Vec3, ray_direction: Vec3) -> Option<EntityId> {
        let mut best: Option<(EntityId, f32)> = None;

        for entity in &self.entities {
            let Some(bounds) = entity.bounds() else {
                continue;
            };
            if let Some(t) = bounds.intersect_ray(ray_origin, ray_direction)
                && best.is_none_or(|(_, best_t)| t < best_t)
            {
                best = Some((entity.id, t));
            }
        }

        best.map(|(id, _)| id)
    }
}
