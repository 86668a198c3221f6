//! 3D viewport panel
//!
//! Hosts the wgpu render texture, translates egui pointer and keyboard
//! state into an [`InputSnapshot`], and drives the per-frame viewport
//! update.

use glam::Vec2;
use mapedit_core::InputSnapshot;

use crate::panels::Panel;
use crate::state::{SharedAppState, SharedViewportState};

/// Points of egui scroll per physical wheel notch; the camera controller
/// expects notches expressed as multiples of 120.
const SCROLL_POINTS_PER_DETENT: f32 = 50.0;

const BOOKMARK_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

/// 3D viewport panel
pub struct ViewportPanel {
    last_size: egui::Vec2,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            last_size: egui::Vec2::ZERO,
        }
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "Viewport"
    }

    fn needs_render_context(&self) -> bool {
        true
    }

    fn ui(&mut self, ui: &mut egui::Ui, _app_state: &SharedAppState) {
        // Fallback when no render context
        let available_size = ui.available_size();
        let (response, painter) =
            ui.allocate_painter(available_size, egui::Sense::click_and_drag());

        painter.rect_filled(response.rect, 0.0, egui::Color32::from_rgb(30, 30, 30));
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            "Viewport\n(WebGPU not available)",
            egui::FontId::proportional(16.0),
            egui::Color32::GRAY,
        );

        self.last_size = available_size;
    }

    fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        render_state: &egui_wgpu::RenderState,
        viewport_state: &SharedViewportState,
    ) {
        // Toolbar
        ui.horizontal(|ui| {
            ui.label("View:");
            if ui.button("Top").clicked() {
                let mut state = viewport_state.lock();
                let controller = state.controller;
                controller.preset_top(state.renderer.camera_mut());
            }
            if ui.button("Front").clicked() {
                let mut state = viewport_state.lock();
                let controller = state.controller;
                controller.preset_front(state.renderer.camera_mut());
            }
            if ui.button("Side").clicked() {
                let mut state = viewport_state.lock();
                let controller = state.controller;
                controller.preset_side(state.renderer.camera_mut());
            }
            if ui.button("Focus").clicked() {
                let mut app = app_state.lock();
                let center = app
                    .selected_entity()
                    .map(|e| e.position)
                    .unwrap_or(glam::Vec3::ZERO);
                drop(app);
                let mut state = viewport_state.lock();
                state.renderer.camera_mut().focus_on(center, 15.0);
            }

            ui.separator();

            let mut app = app_state.lock();
            ui.checkbox(&mut app.settings.show_grid, "Grid");
            ui.checkbox(&mut app.settings.show_selection_gizmo, "Gizmo");
            ui.checkbox(&mut app.settings.show_camera_path, "Path");
        });

        // Main viewport area
        let available_size = ui.available_size();
        let width = available_size.x as u32;
        let height = available_size.y as u32;

        if width == 0 || height == 0 {
            return;
        }

        let texture_id = {
            let mut state = viewport_state.lock();
            let mut egui_renderer = render_state.renderer.write();
            state.ensure_texture(width, height, &mut egui_renderer)
        };

        // Display the rendered texture
        let response = ui.add(
            egui::Image::new(egui::load::SizedTexture::new(
                texture_id,
                [available_size.x, available_size.y],
            ))
            .sense(egui::Sense::click_and_drag()),
        );

        let input = build_input_snapshot(ui, &response);
        let dt = ui.input(|i| i.stable_dt).min(0.1);

        {
            let mut app = app_state.lock();
            let mut state = viewport_state.lock();
            state.update(&input, dt, &mut app);

            // Left click on empty space or another entity changes selection.
            // A click that released a gizmo drag does not count: the state
            // machine is already idle again on the release frame, so the
            // drag-end latch is what keeps a stationary handle click from
            // clearing the selection.
            if response.clicked() && state.gizmo.state().is_idle() && !state.gizmo.drag_just_ended()
            {
                let picked = state.pick_entity(input.mouse_position, &app);
                app.select(picked);
            }

            handle_shortcuts(ui, &response, &mut app, &mut state);

            state.render();
        }

        // Context menu
        response.context_menu(|ui| {
            if ui.button("Reset View").clicked() {
                let mut state = viewport_state.lock();
                state.renderer.camera_mut().focus_on(glam::Vec3::ZERO, 50.0);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Top View").clicked() {
                let mut state = viewport_state.lock();
                let controller = state.controller;
                controller.preset_top(state.renderer.camera_mut());
                ui.close_menu();
            }
            if ui.button("Front View").clicked() {
                let mut state = viewport_state.lock();
                let controller = state.controller;
                controller.preset_front(state.renderer.camera_mut());
                ui.close_menu();
            }
            if ui.button("Side View").clicked() {
                let mut state = viewport_state.lock();
                let controller = state.controller;
                controller.preset_side(state.renderer.camera_mut());
                ui.close_menu();
            }
        });

        self.last_size = available_size;
    }
}

/// Collect this frame's pointer and keyboard state, with the mouse position
/// expressed in pixels relative to the viewport's top-left corner.
fn build_input_snapshot(ui: &egui::Ui, response: &egui::Response) -> InputSnapshot {
    let mouse_pos = response
        .hover_pos()
        .or_else(|| response.interact_pointer_pos())
        .map(|p| p - response.rect.min)
        .unwrap_or(egui::Vec2::ZERO);

    // Only feed movement keys while the pointer is over the viewport, so
    // typing in a text field elsewhere never flies the camera.
    let has_focus = response.hovered() || response.dragged();

    ui.input(|i| InputSnapshot {
        mouse_position: Vec2::new(mouse_pos.x, mouse_pos.y),
        mouse_delta: Vec2::new(i.pointer.delta().x, i.pointer.delta().y),
        left_button_down: has_focus && i.pointer.button_down(egui::PointerButton::Primary),
        middle_button_down: has_focus && i.pointer.button_down(egui::PointerButton::Middle),
        right_button_down: has_focus && i.pointer.button_down(egui::PointerButton::Secondary),
        mouse_wheel_delta: if response.hovered() {
            i.smooth_scroll_delta.y / SCROLL_POINTS_PER_DETENT * 120.0
        } else {
            0.0
        },
        key_forward: has_focus && i.key_down(egui::Key::W),
        key_backward: has_focus && i.key_down(egui::Key::S),
        key_left: has_focus && i.key_down(egui::Key::A),
        key_right: has_focus && i.key_down(egui::Key::D),
        key_up: has_focus && i.key_down(egui::Key::E),
        key_down: has_focus && i.key_down(egui::Key::Q),
        key_ctrl: i.modifiers.ctrl,
        key_shift: i.modifiers.shift,
        snap_override_held: i.modifiers.shift,
    })
}

fn handle_shortcuts(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut crate::state::AppState,
    state: &mut crate::state::ViewportState,
) {
    if !response.hovered() {
        return;
    }

    ui.input(|i| {
        if i.key_pressed(egui::Key::Delete)
            && let Some(id) = app.selected_entity
        {
            app.remove_entity(id);
        }
        if i.key_pressed(egui::Key::F) {
            let center = app
                .selected_entity()
                .map(|e| e.position)
                .unwrap_or(glam::Vec3::ZERO);
            state.renderer.camera_mut().focus_on(center, 15.0);
        }
        for (index, key) in BOOKMARK_KEYS.iter().enumerate() {
            if i.key_pressed(*key) {
                let slot = index + 1;
                if i.modifiers.ctrl {
                    app.bookmarks.store(slot, state.renderer.camera());
                } else {
                    app.bookmarks.recall(slot, state.renderer.camera_mut());
                }
            }
        }
    });
}
