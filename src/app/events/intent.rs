use crate::core::{Category, ScheduleField};
use glam::DVec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Sichtbarkeit einer Kategorie umschalten (Checkbox)
    FilterToggled { category: Category },
    /// Filter-Panel ein-/ausblenden
    FilterPanelToggled,
    /// "Marker hinzufügen" gedrückt → Platzierungsmodus aktivieren
    AddMarkerRequested,
    /// Kartenfläche bei (lat, lng) angeklickt
    MapClicked { position: DVec2 },
    /// Titel-Feld im Formular geändert
    DraftTitleChanged { title: String },
    /// Beschreibungs-Feld im Formular geändert
    DraftDescriptionChanged { description: String },
    /// Info-Feld im Formular geändert
    DraftInfoChanged { info: String },
    /// Kategorie im Formular gewählt (roher Bezeichner aus dem Selektor)
    DraftCategorySelected { id: String },
    /// Leeres Zeitfenster an den Entwurf anhängen
    ScheduleRangeAdded,
    /// Feld eines Zeitfensters im Entwurf geändert
    ScheduleFieldEdited {
        index: usize,
        field: ScheduleField,
        value: String,
    },
    /// Formular bestätigt (Speichern)
    MarkerFormConfirmed,
    /// Formular abgebrochen
    MarkerFormCancelled,
}
