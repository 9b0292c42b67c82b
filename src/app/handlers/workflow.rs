//! Handler für den Add-Marker-Workflow (Arm, Capture, Commit, Cancel).

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Aktiviert den Platzierungsmodus.
pub fn arm(state: &mut AppState) {
    use_cases::placement::arm_placement(state);
}

/// Übernimmt einen abgefangenen Kartenklick in den Entwurf.
pub fn capture_click(state: &mut AppState, position: DVec2) {
    use_cases::placement::capture_click(state, position);
}

/// Validiert den Entwurf und übernimmt ihn in den Store.
pub fn commit(state: &mut AppState) {
    use_cases::placement::commit_draft(state);
}

/// Verwirft den Entwurf bedingungslos.
pub fn cancel(state: &mut AppState) {
    use_cases::placement::cancel_draft(state);
}
