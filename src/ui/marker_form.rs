//! Marker-Formular als modales Fenster (nur während `Editing` sichtbar).

use crate::app::{AppIntent, AppState};
use crate::core::{Category, ScheduleField};

/// Zeigt das Formular für den Marker-Entwurf.
///
/// Alle Feld-Änderungen laufen als Intents über den Controller; das
/// Formular selbst hält keinen eigenen Zustand.
pub fn show_marker_form(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.workflow.is_editing() {
        return events;
    }
    let draft = &state.workflow.draft;

    egui::Window::new("Adicionar Marcador")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);

            if let Some(position) = draft.position {
                ui.label(format!("Posição: {:.6}, {:.6}", position.x, position.y));
                ui.add_space(6.0);
            }

            ui.horizontal(|ui| {
                ui.label("Título:");
                let mut title = draft.title.clone();
                if ui.text_edit_singleline(&mut title).changed() {
                    events.push(AppIntent::DraftTitleChanged { title });
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Descrição:");
                let mut description = draft.description.clone();
                if ui.text_edit_singleline(&mut description).changed() {
                    events.push(AppIntent::DraftDescriptionChanged { description });
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Categoria:");
                egui::ComboBox::from_id_salt("draft_category")
                    .selected_text(draft.category.label())
                    .show_ui(ui, |ui| {
                        for category in Category::ALL {
                            let selected = category == draft.category;
                            if ui.selectable_label(selected, category.label()).clicked() {
                                // Der Selektor liefert den rohen Bezeichner;
                                // normalisiert wird erst im Command-Handler.
                                events.push(AppIntent::DraftCategorySelected {
                                    id: category.id().to_string(),
                                });
                            }
                        }
                    });
            });

            ui.add_space(4.0);
            ui.label("Horários de Atendimento:");

            for (index, range) in draft.hours.iter().enumerate() {
                ui.horizontal(|ui| {
                    let mut from = range.from.clone();
                    let from_edit = egui::TextEdit::singleline(&mut from)
                        .hint_text("08:00")
                        .desired_width(60.0);
                    if ui.add(from_edit).changed() {
                        events.push(AppIntent::ScheduleFieldEdited {
                            index,
                            field: ScheduleField::From,
                            value: from,
                        });
                    }

                    ui.label("até");

                    let mut to = range.to.clone();
                    let to_edit = egui::TextEdit::singleline(&mut to)
                        .hint_text("17:00")
                        .desired_width(60.0);
                    if ui.add(to_edit).changed() {
                        events.push(AppIntent::ScheduleFieldEdited {
                            index,
                            field: ScheduleField::To,
                            value: to,
                        });
                    }
                });
            }

            if ui.button("Adicionar Turno").clicked() {
                events.push(AppIntent::ScheduleRangeAdded);
            }

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Informações Adicionais:");
                let mut info = draft.info.clone();
                if ui.text_edit_singleline(&mut info).changed() {
                    events.push(AppIntent::DraftInfoChanged { info });
                }
            });

            if let Some(error) = &state.ui.form_error {
                ui.add_space(6.0);
                ui.label(egui::RichText::new(error).color(egui::Color32::LIGHT_RED));
            }

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Salvar").clicked() {
                    events.push(AppIntent::MarkerFormConfirmed);
                }
                if ui.button("Cancelar").clicked() {
                    events.push(AppIntent::MarkerFormCancelled);
                }
            });
        });

    events
}
