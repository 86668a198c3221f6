//! Entity list panel

use mapedit_core::{EditableEntity, EntityKind};

use crate::panels::Panel;
use crate::state::SharedAppState;

pub struct EntityListPanel;

impl EntityListPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EntityListPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for EntityListPanel {
    fn name(&self) -> &str {
        "Entities"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut app = app_state.lock();

        ui.horizontal(|ui| {
            if ui.button("Add Prop").clicked() {
                let mut entity = EditableEntity::new("New Prop");
                entity.size = glam::Vec3::ONE;
                app.add_entity(entity);
            }
            if ui.button("Add Light").clicked() {
                let mut entity = EditableEntity::new("New Light");
                entity.kind = EntityKind::Light;
                app.add_entity(entity);
            }
        });

        ui.separator();

        let mut clicked = None;
        let mut removed = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for entity in app.level.iter() {
                let selected = app.selected_entity == Some(entity.id);
                let label = format!("{} ({})", entity.name, entity.kind.display_name());
                let response = ui.selectable_label(selected, label);
                if response.clicked() {
                    clicked = Some(entity.id);
                }
                response.context_menu(|ui| {
                    if ui.button("Delete").clicked() {
                        removed = Some(entity.id);
                        ui.close_menu();
                    }
                });
            }
        });

        if let Some(id) = clicked {
            app.select(Some(id));
        }
        if let Some(id) = removed {
            app.remove_entity(id);
        }
    }
}
