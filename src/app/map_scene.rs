//! Ableitung der Karten-Szene aus dem aktuellen AppState.

use crate::app::AppState;
use crate::shared::options::MAP_BOUNDS;
use crate::shared::{MapScene, MarkerPin};

/// Baut die Szene für die Kartenfläche: Begrenzungsrahmen, Modus-Flag
/// und alle sichtbaren Marker als Pins in Store-Reihenfolge.
///
/// Pure Ableitung — läuft bei jedem Frame neu über Store + Filter.
pub fn build(state: &AppState) -> MapScene {
    let pins = state
        .markers
        .all()
        .iter()
        .enumerate()
        .filter(|(_, marker)| state.filters.is_visible(marker.category))
        .map(|(index, marker)| MarkerPin {
            position: marker.position,
            title: marker.title.clone(),
            description: marker.description.clone(),
            hours_display: marker.hours_display(),
            category: marker.category,
            selected: state.ui.selected_marker == Some(index),
        })
        .collect();

    MapScene {
        bounds: MAP_BOUNDS,
        armed: state.workflow.is_armed(),
        pins,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Category, Marker, TimeRange};
    use glam::DVec2;

    fn marker(title: &str, category: Category) -> Marker {
        Marker {
            position: DVec2::new(-26.3, -48.85),
            title: title.to_string(),
            description: String::new(),
            category,
            hours: vec![TimeRange {
                from: "09:00".to_string(),
                to: "18:00".to_string(),
            }],
            info: String::new(),
        }
    }

    #[test]
    fn test_scene_contains_only_visible_markers() {
        let mut state = AppState::new();
        state.markers.append(marker("A", Category::Food));
        state.markers.append(marker("B", Category::Shelter));
        state.filters.toggle(Category::Shelter);

        let scene = build(&state);
        assert_eq!(scene.pins.len(), 1);
        assert_eq!(scene.pins[0].title, "A");
        assert_eq!(scene.pins[0].hours_display, "09:00 - 18:00");
        assert!(!scene.armed);
    }

    #[test]
    fn test_scene_marks_selected_marker() {
        let mut state = AppState::new();
        state.markers.append(marker("A", Category::Food));
        state.markers.append(marker("B", Category::Food));
        state.ui.selected_marker = Some(1);

        let scene = build(&state);
        assert!(!scene.pins[0].selected);
        assert!(scene.pins[1].selected);
    }
}
