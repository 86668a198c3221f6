//! Numbered camera bookmarks
//!
//! Nine slots for storing and recalling camera poses, persisted as JSON so
//! bookmarks survive a restart.

use std::fs;
use std::path::Path;

use glam::Vec3;
use mapedit_renderer::Camera;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const BOOKMARK_SLOTS: usize = 9;

#[derive(Debug, thiserror::Error)]
pub enum BookmarkError {
    #[error("bookmark file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("bookmark JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// A stored camera pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraBookmark {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Bookmark slots 1 through 9. Out-of-range slot numbers are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CameraBookmarkStore {
    slots: [Option<CameraBookmark>; BOOKMARK_SLOTS],
}

impl CameraBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: usize) -> Option<CameraBookmark> {
        self.slots.get(slot.checked_sub(1)?).copied().flatten()
    }

    pub fn is_set(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Capture the camera pose into `slot` (1-based).
    pub fn store(&mut self, slot: usize, camera: &Camera) {
        let Some(entry) = slot.checked_sub(1).and_then(|i| self.slots.get_mut(i)) else {
            return;
        };
        *entry = Some(CameraBookmark {
            eye: camera.eye,
            target: camera.target,
        });
        info!(slot, "Camera bookmark stored");
    }

    /// Move the camera to the pose in `slot`. Returns false when the slot
    /// is empty.
    pub fn recall(&self, slot: usize, camera: &mut Camera) -> bool {
        let Some(bookmark) = self.get(slot) else {
            return false;
        };
        camera.eye = bookmark.eye;
        camera.look_at(bookmark.target);
        true
    }

    pub fn clear(&mut self, slot: usize) {
        if let Some(entry) = slot.checked_sub(1).and_then(|i| self.slots.get_mut(i)) {
            *entry = None;
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), BookmarkError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, BookmarkError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera(eye: Vec3) -> Camera {
        let mut camera = Camera::new(4.0 / 3.0);
        camera.eye = eye;
        camera.look_at(Vec3::ZERO);
        camera
    }

    #[test]
    fn test_store_and_recall() {
        let mut store = CameraBookmarkStore::new();
        let saved = test_camera(Vec3::new(5.0, 2.0, -7.0));
        store.store(3, &saved);

        let mut camera = test_camera(Vec3::new(0.0, 10.0, 0.1));
        assert!(store.recall(3, &mut camera));
        assert_eq!(camera.eye, saved.eye);
        assert!((camera.target - Vec3::ZERO).length() < 1e-6);
    }

    #[test]
    fn test_empty_slot_does_not_move_camera() {
        let store = CameraBookmarkStore::new();
        let mut camera = test_camera(Vec3::new(1.0, 2.0, 3.0));
        let eye = camera.eye;
        assert!(!store.recall(5, &mut camera));
        assert_eq!(camera.eye, eye);
    }

    #[test]
    fn test_out_of_range_slots_ignored() {
        let mut store = CameraBookmarkStore::new();
        let camera = test_camera(Vec3::ONE);
        store.store(0, &camera);
        store.store(10, &camera);
        assert!((1..=BOOKMARK_SLOTS).all(|slot| !store.is_set(slot)));
    }

    #[test]
    fn test_persistence_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");

        let mut store = CameraBookmarkStore::new();
        store.store(1, &test_camera(Vec3::new(1.0, 2.0, 3.0)));
        store.store(9, &test_camera(Vec3::new(-4.0, 5.0, 6.0)));
        store.save(&path).unwrap();

        let loaded = CameraBookmarkStore::load(&path).unwrap();
        assert_eq!(loaded.get(1), store.get(1));
        assert_eq!(loaded.get(9), store.get(9));
        assert!(!loaded.is_set(2));
    }
}
