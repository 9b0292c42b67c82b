//! Handler für Entwurfs-Felder und Zeitfenster-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Category, ScheduleField};

/// Setzt den Titel des Entwurfs.
pub fn set_title(state: &mut AppState, title: String) {
    state.workflow.draft.title = title;
}

/// Setzt die Beschreibung des Entwurfs.
pub fn set_description(state: &mut AppState, description: String) {
    state.workflow.draft.description = description;
}

/// Setzt das Info-Feld des Entwurfs.
pub fn set_info(state: &mut AppState, info: String) {
    state.workflow.draft.info = info;
}

/// Normalisiert den rohen Kategorie-Bezeichner und übernimmt ihn.
///
/// Unbekannte Eingaben lassen die Entwurfs-Kategorie unverändert.
pub fn set_category(state: &mut AppState, raw: &str) {
    match Category::parse(raw) {
        Some(category) => state.workflow.draft.category = category,
        None => log::warn!("Unbekannte Kategorie-Eingabe ignoriert: {:?}", raw),
    }
}

/// Hängt ein leeres Zeitfenster an den Entwurf an.
pub fn add_schedule_range(state: &mut AppState) {
    use_cases::schedule::add_range(state);
}

/// Setzt ein Feld eines Zeitfensters im Entwurf.
pub fn set_schedule_field(state: &mut AppState, index: usize, field: ScheduleField, value: String) {
    use_cases::schedule::set_field(state, index, field, value);
}
