//! Filter-Panel: Kategorien-Checkboxen und "Adicionar Marcador"-Button.

use crate::app::{AppIntent, AppState};

/// Rendert die Top-Bar (Panel-Toggle + Modus-Hinweis) und das Filter-Panel.
pub fn render_filter_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let label = if state.ui.show_filter_panel {
                "Ocultar Filtros"
            } else {
                "Mostrar Filtros"
            };
            if ui.button(label).clicked() {
                events.push(AppIntent::FilterPanelToggled);
            }

            if state.workflow.is_armed() {
                ui.separator();
                ui.label(
                    egui::RichText::new("Clique no mapa para posicionar o novo marcador")
                        .color(egui::Color32::LIGHT_BLUE),
                );
            }
        });
    });

    if !state.ui.show_filter_panel {
        return events;
    }

    egui::SidePanel::left("filter_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Conectar e Ajudar: Mapa Solidário");
            ui.separator();

            for (category, visible) in state.filters.iter() {
                // Checkbox auf lokaler Kopie; die Mutation läuft über den Intent.
                let mut checked = visible;
                if ui.checkbox(&mut checked, category.label()).changed() {
                    events.push(AppIntent::FilterToggled { category });
                }
            }

            ui.add_space(8.0);
            if ui.button("Adicionar Marcador").clicked() {
                events.push(AppIntent::AddMarkerRequested);
            }
        });

    events
}
