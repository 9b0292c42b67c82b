//! Use-Cases des Add-Marker-Workflows: Arm, Capture, Commit, Cancel.

use crate::app::state::{MarkerDraft, PlacementPhase};
use crate::app::AppState;
use crate::core::Marker;
use crate::shared::options::MAP_BOUNDS;
use crate::shared::MapOptions;
use glam::DVec2;

/// Wiederherstellbarer Validierungsfehler beim Commit des Entwurfs.
///
/// Der Entwurf bleibt erhalten, der Workflow in `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Titel fehlt oder besteht nur aus Whitespace
    MissingTitle,
    /// Keine Position übernommen
    MissingPosition,
    /// Zeitfenster verletzt die aktivierte Chronologie-Regel
    UnorderedHours,
}

impl ValidationError {
    /// Nutzer-Meldung für das Formular.
    pub fn user_message(self) -> &'static str {
        match self {
            ValidationError::MissingTitle => "Informe um título para o marcador.",
            ValidationError::MissingPosition => "Posição no mapa ausente.",
            ValidationError::UnorderedHours => {
                "Horário de fechamento deve ser após o de abertura."
            }
        }
    }
}

/// Prüft den Entwurf und liefert bei Erfolg die Position.
///
/// Die Chronologie-Prüfung der Zeitfenster läuft nur mit aktivierter
/// Regel; dann muss jedes Zeitfenster vollständig und geordnet sein.
pub fn validate_draft(draft: &MarkerDraft, options: &MapOptions) -> Result<DVec2, ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    let Some(position) = draft.position else {
        return Err(ValidationError::MissingPosition);
    };
    if options.require_chronological_hours && !draft.hours.iter().all(|r| r.is_chronological()) {
        return Err(ValidationError::UnorderedHours);
    }

    Ok(position)
}

/// Aktiviert den Platzierungsmodus.
///
/// Idempotent bei bereits aktivem Modus; während der Formular-Eingabe
/// nicht erlaubt (das modale Formular besitzt die Interaktion).
pub fn arm_placement(state: &mut AppState) {
    match state.workflow.phase {
        PlacementPhase::Idle => {
            state.workflow.phase = PlacementPhase::Armed;
            state.ui.selected_marker = None;
            state.ui.status_message = None;
            log::info!("Platzierungsmodus aktiviert, warte auf Kartenklick");
        }
        PlacementPhase::Armed => {
            log::debug!("Platzierungsmodus bereits aktiv");
        }
        PlacementPhase::Editing => {
            log::warn!("Platzierung während offenem Formular ignoriert");
        }
    }
}

/// Übernimmt den abgefangenen Kartenklick als Entwurfs-Position.
///
/// Verlässt `Armed` automatisch — der Modus konsumiert genau einen Klick.
pub fn capture_click(state: &mut AppState, position: DVec2) {
    if state.workflow.phase != PlacementPhase::Armed {
        log::warn!("Klick-Capture außerhalb des Platzierungsmodus ignoriert");
        return;
    }

    let clamped = MAP_BOUNDS.clamp(position);
    state.workflow.draft = MarkerDraft::seeded(clamped);
    state.workflow.phase = PlacementPhase::Editing;
    state.ui.form_error = None;

    log::info!(
        "Position ({:.6}, {:.6}) übernommen, Formular geöffnet",
        clamped.x,
        clamped.y
    );
}

/// Validiert den Entwurf und übernimmt ihn als Marker in den Store.
///
/// Bei Validierungsfehler bleibt der Entwurf erhalten und der Workflow
/// in `Editing`; der Store wird nicht verändert.
pub fn commit_draft(state: &mut AppState) {
    if state.workflow.phase != PlacementPhase::Editing {
        log::warn!("Commit ohne offenes Formular ignoriert");
        return;
    }

    let position = match validate_draft(&state.workflow.draft, &state.options) {
        Ok(position) => position,
        Err(e) => {
            state.ui.form_error = Some(e.user_message().to_string());
            log::warn!("Entwurf abgelehnt: {:?}", e);
            return;
        }
    };

    let draft = std::mem::take(&mut state.workflow.draft);
    let title = draft.title.trim().to_string();
    let marker = Marker {
        position,
        title: title.clone(),
        description: draft.description,
        category: draft.category,
        hours: draft.hours,
        info: draft.info,
    };

    state.markers.append(marker);
    state.workflow.phase = PlacementPhase::Idle;
    state.ui.form_error = None;
    state.ui.status_message = Some(format!("Marcador \"{}\" adicionado.", title));

    log::info!(
        "Marker \"{}\" gespeichert ({} insgesamt)",
        title,
        state.markers.len()
    );
}

/// Verwirft den Entwurf bedingungslos und kehrt nach Idle zurück.
///
/// Funktioniert aus `Editing` wie aus `Armed`; der Store bleibt unberührt.
pub fn cancel_draft(state: &mut AppState) {
    state.workflow.reset();
    state.ui.form_error = None;
    log::info!("Marker-Entwurf verworfen");
}
