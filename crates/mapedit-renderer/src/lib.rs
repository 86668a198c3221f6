//! Map Editor Renderer
//!
//! WGPU-based 3D viewport rendering for the map editor.
//!
//! # Module Structure
//!
//! ```text
//! mapedit-renderer/
//! ├── camera.rs        # Perspective camera (view/projection, pick rays)
//! ├── constants.rs     # Gizmo, grid, and camera tuning constants
//! ├── pipeline.rs      # Pipeline builder utilities
//! ├── vertex.rs        # Shared vertex formats
//! ├── gizmo/           # Transform gizmo (geometry, screen-space hit tests, renderer)
//! ├── grid.rs          # Ground grid renderer
//! ├── level_lines.rs   # Entity bounding boxes and camera path polylines
//! └── renderer.rs      # Main Renderer (render pass, sub-renderer wiring)
//! ```

pub mod camera;
pub mod constants;
pub mod gizmo;
pub mod grid;
pub mod level_lines;
pub mod pipeline;
pub mod renderer;
pub mod vertex;

pub use camera::{Camera, CameraUniform};
pub use gizmo::{GizmoAxis, GizmoRenderer, GizmoVisual};
pub use grid::GridRenderer;
pub use level_lines::LevelLinesRenderer;
pub use renderer::Renderer;
pub use vertex::PositionColorVertex;
