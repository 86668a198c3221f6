//! Main application module

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

use crate::panels::{EntityListPanel, Panel, PropertiesPanel, SettingsPanel, ViewportPanel};
use crate::state::{SharedAppState, SharedViewportState, ViewportState, create_shared_state};

const DEFAULT_LEVEL_FILE: &str = "level.json";

/// Main application
pub struct MapEditorApp {
    app_state: SharedAppState,
    viewport_state: Option<SharedViewportState>,
    entity_list: EntityListPanel,
    properties: PropertiesPanel,
    settings: SettingsPanel,
    viewport: ViewportPanel,
}

impl MapEditorApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Create viewport state if WGPU is available
        let viewport_state = cc.wgpu_render_state.as_ref().map(|render_state| {
            let device = render_state.device.clone();
            let queue = render_state.queue.clone();
            let format = render_state.target_format;

            Arc::new(Mutex::new(ViewportState::new(device, queue, format)))
        });

        Self {
            app_state: create_shared_state(),
            viewport_state,
            entity_list: EntityListPanel::new(),
            properties: PropertiesPanel::new(),
            settings: SettingsPanel::new(),
            viewport: ViewportPanel::new(),
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Level").clicked() {
                        let mut app = self.app_state.lock();
                        app.level = Default::default();
                        app.selected_entity = None;
                        app.level_path = None;
                        app.modified = false;
                        ui.close_menu();
                    }
                    if ui.button("Open").clicked() {
                        let mut app = self.app_state.lock();
                        let path = app
                            .level_path
                            .clone()
                            .unwrap_or_else(|| DEFAULT_LEVEL_FILE.into());
                        if let Err(err) = app.load_level(&path) {
                            warn!(%err, "Level load failed");
                        }
                        ui.close_menu();
                    }
                    if ui.button("Save").clicked() {
                        let mut app = self.app_state.lock();
                        let path = app
                            .level_path
                            .clone()
                            .unwrap_or_else(|| DEFAULT_LEVEL_FILE.into());
                        if let Err(err) = app.save_level(&path) {
                            warn!(%err, "Level save failed");
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn panel_ui(
        panel: &mut dyn Panel,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        render_state: Option<&egui_wgpu::RenderState>,
        viewport_state: &Option<SharedViewportState>,
    ) {
        match (render_state, viewport_state) {
            (Some(render_state), Some(viewport_state)) if panel.needs_render_context() => {
                panel.ui_with_render_context(ui, app_state, render_state, viewport_state);
            }
            _ => panel.ui(ui, app_state),
        }
    }
}

impl eframe::App for MapEditorApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.menu_bar(ctx);

        let render_state = frame.wgpu_render_state();

        egui::SidePanel::left("entity_list")
            .default_width(220.0)
            .show(ctx, |ui| {
                Self::panel_ui(
                    &mut self.entity_list,
                    ui,
                    &self.app_state,
                    render_state,
                    &self.viewport_state,
                );
            });

        egui::SidePanel::right("inspector")
            .default_width(280.0)
            .show(ctx, |ui| {
                Self::panel_ui(
                    &mut self.properties,
                    ui,
                    &self.app_state,
                    render_state,
                    &self.viewport_state,
                );
                ui.separator();
                Self::panel_ui(
                    &mut self.settings,
                    ui,
                    &self.app_state,
                    render_state,
                    &self.viewport_state,
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            Self::panel_ui(
                &mut self.viewport,
                ui,
                &self.app_state,
                render_state,
                &self.viewport_state,
            );
        });

        // Camera flight, recording, and playback animate continuously.
        ctx.request_repaint();
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        let mut app = self.app_state.lock();
        if app.modified
            && let Some(path) = app.level_path.clone()
        {
            if let Err(err) = app.save_level(Path::new(&path)) {
                warn!(%err, "Autosave failed");
            }
        }
    }
}
