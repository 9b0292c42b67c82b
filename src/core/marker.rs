//! Marker-Datenmodell und append-only Marker-Store.

use super::Category;
use glam::DVec2;

/// Ein Öffnungszeiten-Fenster (`HH:MM`-Strings, rein lexikalisch).
///
/// Es findet bewusst keine semantische Validierung statt; die optionale
/// Chronologie-Regel wird erst beim Commit des Formulars geprüft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// Beginn des Zeitfensters
    pub from: String,
    /// Ende des Zeitfensters
    pub to: String,
}

/// Feld-Selektor für Zeitfenster-Bearbeitung im Formular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    /// Beginn (`from`)
    From,
    /// Ende (`to`)
    To,
}

impl TimeRange {
    /// Setzt ein Feld des Zeitfensters.
    pub fn set(&mut self, field: ScheduleField, value: String) {
        match field {
            ScheduleField::From => self.from = value,
            ScheduleField::To => self.to = value,
        }
    }

    /// Anzeige-Form für Popups, z.B. "09:00 - 18:00".
    pub fn display(&self) -> String {
        format!("{} - {}", self.from, self.to)
    }

    /// `true` wenn beide Endpunkte gesetzt sind und `from` lexikalisch
    /// vor `to` liegt (für `HH:MM` gleichbedeutend mit chronologisch).
    pub fn is_chronological(&self) -> bool {
        !self.from.is_empty() && !self.to.is_empty() && self.from < self.to
    }
}

/// Ein bestätigter Hilfspunkt auf der Karte.
///
/// Nach dem Anfügen an den Store unveränderlich; Bearbeiten und Löschen
/// existieren in diesem Design bewusst nicht.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Geo-Position: `x` = Breitengrad, `y` = Längengrad
    pub position: DVec2,
    /// Anzeigename (nicht leer)
    pub title: String,
    /// Freitext-Beschreibung
    pub description: String,
    /// Kategorie aus der Registry
    pub category: Category,
    /// Öffnungszeiten in Eingabe-Reihenfolge
    pub hours: Vec<TimeRange>,
    /// Zusätzliche Informationen
    pub info: String,
}

impl Marker {
    /// Öffnungszeiten als Anzeige-String, z.B. "09:00 - 18:00, 13:00 - 17:00".
    pub fn hours_display(&self) -> String {
        self.hours
            .iter()
            .map(TimeRange::display)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Geordnete, append-only Sammlung aller Marker einer Session.
///
/// Duplikate (Titel wie Position) sind erlaubt. Die Einfüge-Reihenfolge
/// bleibt erhalten und ist die Render-Reihenfolge.
#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
}

impl MarkerStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Fügt einen Marker ans Ende an.
    pub fn append(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Alle Marker in Einfüge-Reihenfolge.
    pub fn all(&self) -> &[Marker] {
        &self.markers
    }

    /// Anzahl der Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// `true` wenn der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
