//! Searchable list of records with expandable detail cards

use eframe::egui;

use crate::gui::constants::*;
use crate::state::{Action, AppState};
use crate::types::Entity;

pub fn ui(ui: &mut egui::Ui, state: &AppState) -> Vec<Action> {
    let mut actions = Vec::new();

    let mut query = state.query().to_string();
    if ui
        .add(
            egui::TextEdit::singleline(&mut query)
                .hint_text(SEARCH_HINT)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        actions.push(Action::SetQuery(query));
    }

    ui.add_space(ITEM_SPACING);

    let visible = state.visible();
    if visible.is_empty() {
        ui.label("No transformers found.");
        return actions;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for entity in visible {
            let expanded = state.expanded().is_expanded(&entity.id);
            card(ui, entity, expanded, &mut actions);
            ui.add_space(ITEM_SPACING);
        }
    });

    actions
}

fn card(ui: &mut egui::Ui, entity: &Entity, expanded: bool, actions: &mut Vec<Action>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());

        // Clicking the header toggles the detail panel
        let header = ui
            .scope(|ui| {
                ui.label(egui::RichText::new(&entity.name).heading().strong());
                ui.label(format!("Faction: {}", entity.faction));
            })
            .response
            .interact(egui::Sense::click());
        if header.clicked() {
            actions.push(Action::ToggleExpanded(entity.id.clone()));
        }

        if expanded {
            ui.add_space(ITEM_SPACING / 2.0);
            ui.label(format!("Alt Mode: {}", entity.alt_mode));
            let weapons = if entity.weapons.is_empty() {
                "None".to_string()
            } else {
                entity.weapons_text()
            };
            ui.label(format!("Weapons: {weapons}"));
            ui.hyperlink_to(egui::RichText::new("Image").color(STATUS_MUTED), &entity.image);
        }

        ui.horizontal(|ui| {
            if ui.button("Edit").clicked() {
                actions.push(Action::BeginEdit(entity.id.clone()));
            }
            if ui.button("Delete").clicked() {
                actions.push(Action::Delete(entity.id.clone()));
            }
        });
    });
}
