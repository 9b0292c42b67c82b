//! Zustand des Marker-Hinzufügen-Workflows (Platzierung + Entwurf).

use crate::core::{Category, TimeRange};
use glam::DVec2;

/// Phase der Marker-Platzierung.
///
/// `Armed` konsumiert genau einen Kartenklick: der Capture-Übergang
/// verlässt die Phase automatisch, erneutes Aktivieren ist idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPhase {
    /// Kein Entwurf in Arbeit
    #[default]
    Idle,
    /// Platzierungsmodus aktiv, nächster Kartenklick wird abgefangen
    Armed,
    /// Formular offen, Entwurf wird befüllt
    Editing,
}

/// Veränderlicher Marker-Entwurf während der Formular-Eingabe.
///
/// Gehört exklusiv dem Workflow und wird bei Commit wie Abbruch
/// auf den Leerzustand zurückgesetzt.
#[derive(Debug, Clone, Default)]
pub struct MarkerDraft {
    /// Vom Kartenklick übernommene Position
    pub position: Option<DVec2>,
    /// Titel (Pflichtfeld)
    pub title: String,
    /// Beschreibung
    pub description: String,
    /// Kategorie (startet mit dem ersten Registry-Eintrag)
    pub category: Category,
    /// Öffnungszeiten-Entwurf
    pub hours: Vec<TimeRange>,
    /// Zusätzliche Informationen
    pub info: String,
}

impl MarkerDraft {
    /// Erstellt einen frischen Entwurf mit übernommener Klick-Position.
    pub fn seeded(position: DVec2) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

/// Gesamtzustand des Add-Marker-Workflows.
#[derive(Debug, Default)]
pub struct WorkflowState {
    /// Aktuelle Phase
    pub phase: PlacementPhase,
    /// Entwurf (nur in `Editing` inhaltlich relevant)
    pub draft: MarkerDraft,
}

impl WorkflowState {
    /// Erstellt den Ausgangszustand (Idle, leerer Entwurf).
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` während der Platzierungsmodus aktiv ist.
    pub fn is_armed(&self) -> bool {
        self.phase == PlacementPhase::Armed
    }

    /// `true` während das Formular offen ist.
    pub fn is_editing(&self) -> bool {
        self.phase == PlacementPhase::Editing
    }

    /// Verwirft den Entwurf und kehrt nach Idle zurück.
    pub fn reset(&mut self) {
        self.phase = PlacementPhase::Idle;
        self.draft = MarkerDraft::default();
    }
}
