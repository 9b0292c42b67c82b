//! Kategorien-Registry: feste, geordnete Menge der Hilfspunkt-Kategorien.

/// Kategorie eines Hilfspunkts.
///
/// Die Menge ist zur Laufzeit unveränderlich; `ALL` legt die
/// Registry-Reihenfolge für Filter-UI und Formular-Auswahl fest.
/// Kanonische Repräsentation im gesamten Datenfluss ist der Bezeichner
/// (`id()`), nie das Anzeige-Label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Essensausgabe
    #[default]
    Food,
    /// Notunterkunft
    Shelter,
    /// Notfall-Anlaufstelle
    Emergency,
    /// Hilfezentrum
    HelpCenter,
    /// Psychosoziales Zentrum (CAPS)
    Caps,
}

impl Category {
    /// Alle Kategorien in Registry-Reihenfolge.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Shelter,
        Category::Emergency,
        Category::HelpCenter,
        Category::Caps,
    ];

    /// Stabiler Bezeichner (lowerCamelCase).
    pub fn id(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Shelter => "shelter",
            Category::Emergency => "emergency",
            Category::HelpCenter => "helpCenter",
            Category::Caps => "caps",
        }
    }

    /// Anzeige-Label, aus dem Bezeichner abgeleitet:
    /// Wortgrenzen auftrennen und Anfangsbuchstaben großschreiben
    /// (`helpCenter` → "Help Center").
    pub fn label(self) -> String {
        derive_label(self.id())
    }

    /// Normalisiert Freitext-Eingabe zu einer Kategorie.
    ///
    /// Whitespace wird entfernt, der Vergleich ist case-insensitiv.
    /// Dies ist die einzige Stelle, an der Rohtext in die Pipeline
    /// eintritt; unbekannte Eingaben liefern `None`.
    pub fn parse(raw: &str) -> Option<Category> {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        Category::ALL
            .into_iter()
            .find(|c| c.id().to_ascii_lowercase() == normalized)
    }
}

/// Leitet das Anzeige-Label aus einem lowerCamelCase-Bezeichner ab.
fn derive_label(id: &str) -> String {
    let mut label = String::with_capacity(id.len() + 4);
    for (i, ch) in id.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_ascii_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}
