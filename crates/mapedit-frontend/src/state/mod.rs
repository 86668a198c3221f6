//! Application state management

pub mod bookmarks;
pub mod camera_controller;
pub mod camera_path;
pub mod gizmo;
pub mod viewport;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use mapedit_core::{EditableEntity, EditorRenderSettings, EntityId, Level};

pub use bookmarks::CameraBookmarkStore;
pub use camera_controller::CameraController;
pub use camera_path::{CameraPathRecorder, PathState};
pub use gizmo::{GizmoState, TransformGizmo};
pub use viewport::{SharedViewportState, ViewportState};

#[derive(Debug, thiserror::Error)]
pub enum LevelFileError {
    #[error("level file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("level JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shared application state
pub struct AppState {
    pub level: Level,
    pub settings: EditorRenderSettings,
    pub selected_entity: Option<EntityId>,
    pub recorder: CameraPathRecorder,
    pub bookmarks: CameraBookmarkStore,
    pub level_path: Option<PathBuf>,
    pub modified: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            level: Level::default(),
            settings: EditorRenderSettings::default(),
            selected_entity: None,
            recorder: CameraPathRecorder::new(),
            bookmarks: CameraBookmarkStore::new(),
            level_path: None,
            modified: false,
        }
    }

    pub fn selected_entity(&self) -> Option<&EditableEntity> {
        self.level.get(self.selected_entity?)
    }

    pub fn selected_entity_mut(&mut self) -> Option<&mut EditableEntity> {
        self.level.get_mut(self.selected_entity?)
    }

    pub fn select(&mut self, id: Option<EntityId>) {
        self.selected_entity = id;
    }

    /// Add an entity and select it.
    pub fn add_entity(&mut self, entity: EditableEntity) -> EntityId {
        let id = self.level.add(entity);
        self.selected_entity = Some(id);
        self.modified = true;
        id
    }

    /// Remove an entity, clearing the selection if it pointed at it.
    pub fn remove_entity(&mut self, id: EntityId) {
        self.level.remove(id);
        if self.selected_entity == Some(id) {
            self.selected_entity = None;
        }
        self.modified = true;
    }

    pub fn save_level(&mut self, path: &Path) -> Result<(), LevelFileError> {
        let json = serde_json::to_string_pretty(&self.level)?;
        fs::write(path, json)?;
        self.level_path = Some(path.to_path_buf());
        self.modified = false;
        info!(path = %path.display(), entities = self.level.len(), "Level saved");
        Ok(())
    }

    pub fn load_level(&mut self, path: &Path) -> Result<(), LevelFileError> {
        let json = fs::read_to_string(path)?;
        self.level = serde_json::from_str(&json)?;
        self.level_path = Some(path.to_path_buf());
        self.selected_entity = None;
        self.modified = false;
        info!(path = %path.display(), entities = self.level.len(), "Level loaded");
        Ok(())
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create shared application state
pub fn create_shared_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_remove_clears_selection() {
        let mut state = AppState::new();
        let id = state.add_entity(EditableEntity::new("crate"));
        assert_eq!(state.selected_entity, Some(id));
        state.remove_entity(id);
        assert_eq!(state.selected_entity, None);
        assert!(state.level.is_empty());
    }

    #[test]
    fn test_level_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.json");

        let mut state = AppState::new();
        let mut entity = EditableEntity::new("spawn");
        entity.position = Vec3::new(4.0, 0.0, -2.0);
        entity.size = Vec3::splat(1.0);
        state.add_entity(entity);
        state.save_level(&path).unwrap();
        assert!(!state.modified);

        let mut loaded = AppState::new();
        loaded.load_level(&path).unwrap();
        assert_eq!(loaded.level.len(), 1);
        let entity = loaded.level.iter().next().unwrap();
        assert_eq!(entity.name, "spawn");
        assert_eq!(entity.position, Vec3::new(4.0, 0.0, -2.0));
    }
}
