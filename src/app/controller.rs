//! Application Controller für zentrale Event-Verarbeitung.

use super::map_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::MapScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Filter ===
            AppCommand::ToggleFilter { category } => handlers::filters::toggle(state, category),
            AppCommand::ToggleFilterPanel => handlers::filters::toggle_panel(state)?,

            // === Platzierungs-Workflow ===
            AppCommand::ArmPlacement => handlers::workflow::arm(state),
            AppCommand::CapturePlacementClick { position } => {
                handlers::workflow::capture_click(state, position)
            }
            AppCommand::CommitDraft => handlers::workflow::commit(state),
            AppCommand::CancelDraft => handlers::workflow::cancel(state),

            // === Entwurfs-Felder ===
            AppCommand::SetDraftTitle { title } => handlers::draft::set_title(state, title),
            AppCommand::SetDraftDescription { description } => {
                handlers::draft::set_description(state, description)
            }
            AppCommand::SetDraftInfo { info } => handlers::draft::set_info(state, info),
            AppCommand::SetDraftCategory { id } => handlers::draft::set_category(state, &id),
            AppCommand::AddScheduleRange => handlers::draft::add_schedule_range(state),
            AppCommand::SetScheduleField {
                index,
                field,
                value,
            } => handlers::draft::set_schedule_field(state, index, field, value),

            // === Selektion / Popup ===
            AppCommand::SelectMarkerAt {
                position,
                max_distance,
            } => handlers::selection::select_marker_at(state, position, max_distance),
        }

        Ok(())
    }

    /// Baut die Karten-Szene aus dem aktuellen AppState.
    pub fn build_map_scene(&self, state: &AppState) -> MapScene {
        map_scene::build(state)
    }
}
