use crate::core::{Category, ScheduleField};
use glam::DVec2;

/// Mutierende App-Commands, erzeugt durch das Intent→Command-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Sichtbarkeits-Flag einer Kategorie kippen
    ToggleFilter { category: Category },
    /// Filter-Panel umschalten und Einstellung persistieren
    ToggleFilterPanel,
    /// Platzierungsmodus aktivieren (idempotent)
    ArmPlacement,
    /// Abgefangenen Kartenklick als Entwurfs-Position übernehmen
    CapturePlacementClick { position: DVec2 },
    /// Nächstgelegenen sichtbaren Marker selektieren (Popup)
    SelectMarkerAt { position: DVec2, max_distance: f64 },
    /// Titel des Entwurfs setzen
    SetDraftTitle { title: String },
    /// Beschreibung des Entwurfs setzen
    SetDraftDescription { description: String },
    /// Info-Feld des Entwurfs setzen
    SetDraftInfo { info: String },
    /// Kategorie aus Rohtext normalisieren und in den Entwurf übernehmen
    SetDraftCategory { id: String },
    /// Leeres Zeitfenster an den Entwurf anhängen
    AddScheduleRange,
    /// Feld eines Zeitfensters setzen (Out-of-Bounds: stiller No-op)
    SetScheduleField {
        index: usize,
        field: ScheduleField,
        value: String,
    },
    /// Entwurf validieren und als Marker in den Store übernehmen
    CommitDraft,
    /// Entwurf verwerfen und nach Idle zurückkehren
    CancelDraft,
}
