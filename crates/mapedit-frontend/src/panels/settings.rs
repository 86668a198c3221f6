//! Editor settings panel
//!
//! Snap configuration, camera path recording controls, and camera
//! bookmarks.

use std::path::Path;

use tracing::warn;

use crate::panels::Panel;
use crate::state::{SharedAppState, SharedViewportState};

const CAMERA_PATH_FILE: &str = "camera_path.json";
const BOOKMARKS_FILE: &str = "bookmarks.json";

pub struct SettingsPanel;

impl SettingsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for SettingsPanel {
    fn name(&self) -> &str {
        "Settings"
    }

    fn needs_render_context(&self) -> bool {
        true
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut app = app_state.lock();
        snap_section(ui, &mut app);
    }

    fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        _render_state: &egui_wgpu::RenderState,
        viewport_state: &SharedViewportState,
    ) {
        let mut app = app_state.lock();

        snap_section(ui, &mut app);
        ui.separator();
        camera_path_section(ui, &mut app, viewport_state);
        ui.separator();
        bookmark_section(ui, &mut app, viewport_state);
    }
}

fn snap_section(ui: &mut egui::Ui, app: &mut crate::state::AppState) {
    ui.heading("Snapping");

    ui.checkbox(&mut app.settings.enable_grid_snap, "Grid snap");
    ui.horizontal(|ui| {
        ui.label("Grid size");
        ui.add(egui::DragValue::new(&mut app.settings.grid_size.x).speed(0.1));
        ui.add(egui::DragValue::new(&mut app.settings.grid_size.y).speed(0.1));
        ui.add(egui::DragValue::new(&mut app.settings.grid_size.z).speed(0.1));
    });

    ui.checkbox(&mut app.settings.enable_rotation_snap, "Rotation snap");
    ui.horizontal(|ui| {
        ui.label("Degrees");
        ui.add(
            egui::DragValue::new(&mut app.settings.rotation_snap_degrees)
                .speed(1.0)
                .range(0.0..=90.0),
        );
    });

    ui.checkbox(&mut app.settings.enable_scale_snap, "Scale snap");
    ui.horizontal(|ui| {
        ui.label("Step");
        ui.add(
            egui::DragValue::new(&mut app.settings.scale_snap_step)
                .speed(0.01)
                .range(0.0..=10.0),
        );
    });

    ui.label("Hold Shift to bypass snapping while dragging");
}

fn camera_path_section(
    ui: &mut egui::Ui,
    app: &mut crate::state::AppState,
    viewport_state: &SharedViewportState,
) {
    ui.heading("Camera Path");

    ui.horizontal(|ui| {
        if app.recorder.is_recording() {
            if ui.button("Stop Recording").clicked() {
                app.recorder.stop_recording();
            }
        } else if ui.button("Record").clicked() {
            let state = viewport_state.lock();
            app.recorder.start_recording(state.renderer.camera());
        }

        if app.recorder.is_playing() {
            if ui.button("Stop").clicked() {
                app.recorder.stop_playback();
            }
        } else {
            let can_play = app.recorder.keyframes().len() >= 2;
            if ui
                .add_enabled(can_play, egui::Button::new("Play"))
                .clicked()
            {
                app.recorder.start_playback();
            }
        }
    });

    ui.label(format!(
        "{} keyframes, {:.1}s",
        app.recorder.keyframes().len(),
        app.recorder.duration()
    ));

    ui.horizontal(|ui| {
        if ui.button("Export").clicked()
            && let Err(err) = app.recorder.export_json(Path::new(CAMERA_PATH_FILE))
        {
            warn!(%err, "Camera path export failed");
        }
        if ui.button("Import").clicked()
            && let Err(err) = app.recorder.import_json(Path::new(CAMERA_PATH_FILE))
        {
            warn!(%err, "Camera path import failed");
        }
        if ui.button("Clear").clicked() {
            app.recorder.clear();
        }
    });
}

fn bookmark_section(
    ui: &mut egui::Ui,
    app: &mut crate::state::AppState,
    viewport_state: &SharedViewportState,
) {
    ui.heading("Bookmarks");
    ui.label("Ctrl+1..9 stores, 1..9 recalls");

    ui.horizontal_wrapped(|ui| {
        for slot in 1..=crate::state::bookmarks::BOOKMARK_SLOTS {
            let set = app.bookmarks.is_set(slot);
            let label = if set {
                format!("[{slot}]")
            } else {
                format!("{slot}")
            };
            if ui.button(label).clicked() {
                let mut state = viewport_state.lock();
                if set {
                    app.bookmarks.recall(slot, state.renderer.camera_mut());
                } else {
                    app.bookmarks.store(slot, state.renderer.camera());
                }
            }
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Save").clicked()
            && let Err(err) = app.bookmarks.save(Path::new(BOOKMARKS_FILE))
        {
            warn!(%err, "Bookmark save failed");
        }
        if ui.button("Load").clicked() {
            match crate::state::CameraBookmarkStore::load(Path::new(BOOKMARKS_FILE)) {
                Ok(store) => app.bookmarks = store,
                Err(err) => warn!(%err, "Bookmark load failed"),
            }
        }
    });
}
