//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, PlacementPhase};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Marcadores: {} ({} visíveis)",
                state.marker_count(),
                state.visible_count()
            ));

            ui.separator();

            let phase_text = match state.workflow.phase {
                PlacementPhase::Idle => "Pronto",
                PlacementPhase::Armed => "Posicionando…",
                PlacementPhase::Editing => "Editando marcador",
            };
            ui.label(phase_text);

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_GREEN));
            }
        });
    });
}
