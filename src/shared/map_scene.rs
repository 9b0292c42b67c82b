//! Karten-Szene: read-only Vertrag zwischen `app` und Kartenfläche.

use crate::core::{Category, GeoBounds};
use glam::DVec2;

/// Ein darzustellender Pin (bereits gefilterter Marker).
#[derive(Debug, Clone)]
pub struct MarkerPin {
    /// Geo-Position (lat, lng)
    pub position: DVec2,
    /// Titel für das Popup
    pub title: String,
    /// Beschreibung für das Popup
    pub description: String,
    /// Öffnungszeiten als fertiger Anzeige-String
    pub hours_display: String,
    /// Kategorie (bestimmt die Pin-Farbe)
    pub category: Category,
    /// `true` für den aktuell selektierten Marker (Popup offen)
    pub selected: bool,
}

/// Vollständige Szene der Kartenfläche.
///
/// Wird bei jeder Abfrage neu aus Marker-Store + Filter-State abgeleitet
/// und nie zwischengespeichert, damit Store und Anzeige nicht divergieren.
#[derive(Debug, Clone)]
pub struct MapScene {
    /// Begrenzungsrahmen der Karte
    pub bounds: GeoBounds,
    /// Platzierungsmodus aktiv (nächster Klick setzt einen Marker)
    pub armed: bool,
    /// Sichtbare Pins in Store-Reihenfolge
    pub pins: Vec<MarkerPin>,
}
