//! Use-Cases für die Zeitfenster-Liste des Entwurfs.

use crate::app::AppState;
use crate::core::{ScheduleField, TimeRange};

/// Hängt ein leeres Zeitfenster an den Entwurf an.
///
/// Nur während der Formular-Eingabe sinnvoll; es gibt keine Obergrenze
/// für die Anzahl der Zeitfenster.
pub fn add_range(state: &mut AppState) {
    if !state.workflow.is_editing() {
        log::warn!("Zeitfenster-Anlage ohne offenes Formular ignoriert");
        return;
    }

    state.workflow.draft.hours.push(TimeRange::default());
    log::debug!(
        "Zeitfenster angelegt ({} im Entwurf)",
        state.workflow.draft.hours.len()
    );
}

/// Setzt ein Feld des Zeitfensters an `index`.
///
/// Ein Index außerhalb der Liste ist ein stiller No-op (deterministisch,
/// nur Warn-Log) — Entfernen und Umsortieren existieren nicht.
pub fn set_field(state: &mut AppState, index: usize, field: ScheduleField, value: String) {
    if !state.workflow.is_editing() {
        log::warn!("Zeitfenster-Änderung ohne offenes Formular ignoriert");
        return;
    }

    let count = state.workflow.draft.hours.len();
    match state.workflow.draft.hours.get_mut(index) {
        Some(range) => range.set(field, value),
        None => log::warn!(
            "Zeitfenster-Index {} außerhalb des Bereichs ({} Einträge)",
            index,
            count
        ),
    }
}
