//! Mapping von UI-Intents auf mutierende App-Commands.

use crate::shared::options;

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Einzige zustandsabhängige Weiche: ein Kartenklick wird im
/// Platzierungsmodus als Capture abgefangen und erreicht dann das
/// Marker-Picking NICHT — Armed konsumiert genau einen Klick.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FilterToggled { category } => vec![AppCommand::ToggleFilter { category }],
        AppIntent::FilterPanelToggled => vec![AppCommand::ToggleFilterPanel],
        AppIntent::AddMarkerRequested => vec![AppCommand::ArmPlacement],
        AppIntent::MapClicked { position } => {
            if state.workflow.is_armed() {
                vec![AppCommand::CapturePlacementClick { position }]
            } else {
                vec![AppCommand::SelectMarkerAt {
                    position,
                    max_distance: options::MARKER_PICK_RADIUS_DEG,
                }]
            }
        }
        AppIntent::DraftTitleChanged { title } => vec![AppCommand::SetDraftTitle { title }],
        AppIntent::DraftDescriptionChanged { description } => {
            vec![AppCommand::SetDraftDescription { description }]
        }
        AppIntent::DraftInfoChanged { info } => vec![AppCommand::SetDraftInfo { info }],
        AppIntent::DraftCategorySelected { id } => vec![AppCommand::SetDraftCategory { id }],
        AppIntent::ScheduleRangeAdded => vec![AppCommand::AddScheduleRange],
        AppIntent::ScheduleFieldEdited {
            index,
            field,
            value,
        } => vec![AppCommand::SetScheduleField {
            index,
            field,
            value,
        }],
        AppIntent::MarkerFormConfirmed => vec![AppCommand::CommitDraft],
        AppIntent::MarkerFormCancelled => vec![AppCommand::CancelDraft],
    }
}
