use crate::app::CommandLog;
use crate::core::MarkerStore;
use crate::shared::MapOptions;

use super::{FilterState, UiState, WorkflowState};

/// Hauptzustand der Anwendung.
///
/// Einziger Besitzer von Marker-Store, Filtern und Workflow; mutiert
/// ausschließlich über `AppController::handle_command`.
pub struct AppState {
    /// Append-only Sammlung aller Marker der Session
    pub markers: MarkerStore,
    /// Sichtbarkeits-Flags pro Kategorie
    pub filters: FilterState,
    /// Add-Marker-Workflow (Phase + Entwurf)
    pub workflow: WorkflowState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Validierungsregel, Panel-Start)
    pub options: MapOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            markers: MarkerStore::new(),
            filters: FilterState::all_visible(),
            workflow: WorkflowState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: MapOptions::default(),
        }
    }

    /// Gibt die Anzahl aller Marker zurück (für die Status-Bar).
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Gibt die Anzahl der aktuell sichtbaren Marker zurück.
    pub fn visible_count(&self) -> usize {
        self.filters.visible_markers(self.markers.all()).len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
