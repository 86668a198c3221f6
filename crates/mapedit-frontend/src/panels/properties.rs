//! Selected entity properties panel

use glam::Vec3;

use crate::panels::Panel;
use crate::state::SharedAppState;

pub struct PropertiesPanel;

impl PropertiesPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PropertiesPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn vec3_row(ui: &mut egui::Ui, label: &str, value: &mut Vec3, speed: f32) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed |= ui
            .add(egui::DragValue::new(&mut value.x).speed(speed).prefix("x: "))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut value.y).speed(speed).prefix("y: "))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut value.z).speed(speed).prefix("z: "))
            .changed();
    });
    changed
}

impl Panel for PropertiesPanel {
    fn name(&self) -> &str {
        "Properties"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut app = app_state.lock();

        let Some(entity) = app.selected_entity_mut() else {
            ui.label("No entity selected");
            return;
        };

        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Name");
            changed |= ui.text_edit_singleline(&mut entity.name).changed();
        });

        ui.separator();

        changed |= vec3_row(ui, "Position", &mut entity.position, 0.1);

        let mut rotation_degrees = Vec3::new(
            entity.rotation.x.to_degrees(),
            entity.rotation.y.to_degrees(),
            entity.rotation.z.to_degrees(),
        );
        if vec3_row(ui, "Rotation", &mut rotation_degrees, 1.0) {
            entity.rotation = Vec3::new(
                rotation_degrees.x.to_radians(),
                rotation_degrees.y.to_radians(),
                rotation_degrees.z.to_radians(),
            );
            changed = true;
        }

        changed |= vec3_row(ui, "Scale", &mut entity.scale, 0.05);
        changed |= vec3_row(ui, "Size", &mut entity.size, 0.1);

        ui.separator();

        ui.horizontal(|ui| {
            use mapedit_core::EditableEntity;
            let turns = EditableEntity::quarter_turns_from_rotation(entity.rotation);
            if ui.button("Rotate 90° CW").clicked() {
                entity.rotation.y = EditableEntity::rotation_from_quarter_turns(turns + 1).y;
                changed = true;
            }
            if ui.button("Rotate 90° CCW").clicked() {
                entity.rotation.y = EditableEntity::rotation_from_quarter_turns(turns - 1).y;
                changed = true;
            }
        });

        if changed {
            app.modified = true;
        }
    }
}
