//! Use-Case: nächstgelegenen sichtbaren Marker am Klickpunkt selektieren.

use crate::app::AppState;
use glam::DVec2;

/// Selektiert den nächsten sichtbaren Marker innerhalb von `max_distance`
/// Grad; ein Klick ins Leere hebt die Selektion auf.
///
/// Ausgeblendete Marker sind nicht anklickbar.
pub fn select_marker_at(state: &mut AppState, position: DVec2, max_distance: f64) {
    let mut best: Option<(usize, f64)> = None;

    for (index, marker) in state.markers.all().iter().enumerate() {
        if !state.filters.is_visible(marker.category) {
            continue;
        }
        let distance = marker.position.distance(position);
        if distance <= max_distance && best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }

    state.ui.selected_marker = best.map(|(index, _)| index);

    match state.ui.selected_marker {
        Some(index) => log::debug!("Marker {} selektiert", index),
        None => log::debug!("Klick ins Leere, Selektion aufgehoben"),
    }
}
