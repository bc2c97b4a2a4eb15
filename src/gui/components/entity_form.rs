//! Add/edit form

use eframe::egui;

use crate::gui::constants::*;
use crate::state::{Action, FormController};
use crate::types::Field;

pub fn ui(ui: &mut egui::Ui, form: &FormController) -> Vec<Action> {
    let mut actions = Vec::new();

    let title = match form.edit_id() {
        Some(id) => format!("{EDIT_TAB} #{id}"),
        None => ADD_TAB.to_string(),
    };
    ui.label(egui::RichText::new(title).heading().strong());
    ui.add_space(ITEM_SPACING);

    for field in Field::ALL {
        let mut value = form.draft().field(field).to_string();
        if ui
            .add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(field.placeholder())
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            actions.push(Action::EditField(field, value));
        }
        ui.add_space(ITEM_SPACING / 2.0);
    }

    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        let submit = if form.is_editing() {
            "Save Changes"
        } else {
            "Add Transformer"
        };
        if ui.button(submit).clicked() {
            actions.push(Action::Submit);
        }
        if ui.button("Cancel").clicked() {
            actions.push(Action::Cancel);
        }
        if form.pending().is_some() {
            ui.colored_label(STATUS_MUTED, "Saving...");
        }
    });

    actions
}
