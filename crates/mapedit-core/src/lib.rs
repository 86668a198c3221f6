//! Map Editor Core
//!
//! Data model for the 3D map editor: editable entities, level registry,
//! render settings with snapping helpers, and the device-agnostic input
//! snapshot consumed by the viewport each frame.

pub mod bounds;
pub mod constants;
pub mod entity;
pub mod input;
pub mod level;
pub mod settings;

// Re-exports for convenience
pub use bounds::Aabb;
pub use entity::{EditableEntity, EntityId, EntityKind};
pub use input::InputSnapshot;
pub use level::Level;
pub use settings::EditorRenderSettings;
