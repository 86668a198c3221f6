//! Map Editor Frontend
//!
//! egui-based application shell for the 3D level editor.

pub mod app;
pub mod panels;
pub mod state;

// Re-exports for convenience
pub use app::MapEditorApp;
pub use state::{AppState, SharedAppState, SharedViewportState, ViewportState};
