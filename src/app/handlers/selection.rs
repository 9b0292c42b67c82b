//! Handler für Marker-Selektion (Popup).

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Selektiert den nächstgelegenen sichtbaren Marker am Klickpunkt.
pub fn select_marker_at(state: &mut AppState, position: DVec2, max_distance: f64) {
    use_cases::marker_pick::select_marker_at(state, position, max_distance);
}
