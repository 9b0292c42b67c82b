//! Zentrale Konfiguration der Solidaritätskarte.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Category, GeoBounds};
use glam::DVec2;
use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Fester Begrenzungsrahmen der Karte (Region Joinville/SC).
pub const MAP_BOUNDS: GeoBounds = GeoBounds {
    south_west: DVec2::new(-26.6, -49.2),
    north_east: DVec2::new(-25.8, -48.5),
};

/// Initialer Kartenmittelpunkt (Stadtzentrum).
pub const MAP_CENTER: DVec2 = DVec2::new(-26.292977, -48.848306);

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius für Marker-Popups in Grad (≈ Pin-Größe im Viewport).
pub const MARKER_PICK_RADIUS_DEG: f64 = 0.006;

// ── Pin-Rendering ───────────────────────────────────────────────────

/// Pin-Radius in Screen-Pixeln.
pub const PIN_RADIUS_PX: f32 = 7.0;
/// Pin-Radius für den selektierten Marker.
pub const PIN_RADIUS_SELECTED_PX: f32 = 10.0;
/// Outline-Farbe aller Pins (RGB: Weiß).
pub const PIN_OUTLINE_COLOR: [u8; 3] = [255, 255, 255];
/// Hintergrundfarbe der Kartenfläche (RGB: gedecktes Grün-Grau).
pub const MAP_BACKGROUND_COLOR: [u8; 3] = [38, 48, 42];

/// Füllfarbe eines Pins nach Kategorie.
pub fn category_color(category: Category) -> [u8; 3] {
    match category {
        Category::Food => [76, 175, 80],
        Category::Shelter => [33, 150, 243],
        Category::Emergency => [229, 57, 53],
        Category::HelpCenter => [255, 152, 0],
        Category::Caps => [156, 39, 176],
    }
}

// ── Laufzeit-Optionen ───────────────────────────────────────────────

/// Persistierte Laufzeit-Optionen (TOML neben der Binary).
///
/// Marker-Daten selbst werden nie persistiert; nur diese Einstellungen
/// überleben einen Neustart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapOptions {
    /// Zeitfenster beim Commit auf `from < to` prüfen
    #[serde(default)]
    pub require_chronological_hours: bool,
    /// Filter-Panel beim Start anzeigen
    #[serde(default = "default_show_filter_panel")]
    pub show_filter_panel: bool,
}

/// Serde-Default für `show_filter_panel` (Abwärtskompatibilität).
fn default_show_filter_panel() -> bool {
    true
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            require_chronological_hours: false,
            show_filter_panel: true,
        }
    }
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mapa_solidario"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mapa_solidario.toml")
    }
}
