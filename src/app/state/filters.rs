//! Kategorie-Filter: Sichtbarkeits-Flags und pure Ableitung der Anzeige-Menge.

use crate::core::{Category, Marker};
use indexmap::IndexMap;

/// Sichtbarkeits-Flags pro Kategorie.
///
/// Die `IndexMap` hält die Registry-Reihenfolge für die Checkbox-Liste.
/// Ein Marker, dessen Kategorie hier keinen Eintrag hat, gilt als
/// nicht sichtbar; Toggles auf unbekannte Kategorien sind stille No-ops.
#[derive(Debug, Clone)]
pub struct FilterState {
    visible: IndexMap<Category, bool>,
}

impl FilterState {
    /// Erstellt den Standardzustand: alle Registry-Kategorien sichtbar.
    pub fn all_visible() -> Self {
        Self::from_categories(&Category::ALL)
    }

    /// Erstellt Filter über eine explizite Kategorien-Teilmenge
    /// (alle sichtbar). Kategorien außerhalb der Teilmenge bleiben
    /// dauerhaft ausgeblendet.
    pub fn from_categories(categories: &[Category]) -> Self {
        Self {
            visible: categories.iter().map(|&c| (c, true)).collect(),
        }
    }

    /// Kippt das Sichtbarkeits-Flag einer Kategorie.
    ///
    /// Unbekannte Kategorien werden still ignoriert; Rückgabewert ist
    /// `true` wenn tatsächlich geschaltet wurde.
    pub fn toggle(&mut self, category: Category) -> bool {
        match self.visible.get_mut(&category) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => {
                log::debug!("Filter-Toggle für unbekannte Kategorie: {:?}", category);
                false
            }
        }
    }

    /// `true` wenn die Kategorie einen Eintrag mit Wert `true` hat.
    pub fn is_visible(&self, category: Category) -> bool {
        self.visible.get(&category).copied().unwrap_or(false)
    }

    /// Pure Ableitung: alle sichtbaren Marker in Store-Reihenfolge.
    ///
    /// Wird bei jeder Abfrage neu berechnet, nie gecacht.
    pub fn visible_markers<'a>(&self, markers: &'a [Marker]) -> Vec<&'a Marker> {
        markers
            .iter()
            .filter(|m| self.is_visible(m.category))
            .collect()
    }

    /// Iteriert alle Einträge in Registry-Reihenfolge (für die Filter-UI).
    pub fn iter(&self) -> impl Iterator<Item = (Category, bool)> + '_ {
        self.visible.iter().map(|(&c, &v)| (c, v))
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::all_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn marker(title: &str, category: Category) -> Marker {
        Marker {
            position: DVec2::new(-26.3, -48.85),
            title: title.to_string(),
            description: String::new(),
            category,
            hours: Vec::new(),
            info: String::new(),
        }
    }

    #[test]
    fn test_all_categories_start_visible() {
        let filters = FilterState::all_visible();
        for category in Category::ALL {
            assert!(filters.is_visible(category));
        }
    }

    #[test]
    fn test_toggle_parity_restores_original_state() {
        let mut filters = FilterState::all_visible();
        filters.toggle(Category::Shelter);
        assert!(!filters.is_visible(Category::Shelter));
        filters.toggle(Category::Shelter);
        assert!(filters.is_visible(Category::Shelter));
    }

    #[test]
    fn test_unknown_category_toggle_is_silent_noop() {
        let mut filters = FilterState::from_categories(&[Category::Food]);
        assert!(!filters.toggle(Category::Shelter));
        assert!(!filters.is_visible(Category::Shelter));
        assert!(filters.is_visible(Category::Food));
    }

    #[test]
    fn test_marker_without_filter_entry_is_hidden() {
        let filters = FilterState::from_categories(&[Category::Food]);
        let markers = vec![marker("A", Category::Food), marker("B", Category::Shelter)];

        let visible = filters.visible_markers(&markers);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "A");
    }

    #[test]
    fn test_visible_markers_preserve_insertion_order() {
        let mut filters = FilterState::all_visible();
        let markers = vec![
            marker("A", Category::Food),
            marker("B", Category::Shelter),
            marker("C", Category::Food),
        ];

        filters.toggle(Category::Shelter);
        let titles: Vec<&str> = filters
            .visible_markers(&markers)
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(titles, ["A", "C"]);
    }
}
