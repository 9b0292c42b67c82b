//! Handler für Kategorie-Filter und Filter-Panel.

use crate::app::AppState;
use crate::core::Category;
use crate::shared::MapOptions;

/// Kippt das Sichtbarkeits-Flag einer Kategorie.
pub fn toggle(state: &mut AppState, category: Category) {
    if state.filters.toggle(category) {
        log::info!(
            "Filter {}: {}",
            category.id(),
            if state.filters.is_visible(category) {
                "sichtbar"
            } else {
                "ausgeblendet"
            }
        );
    }
}

/// Schaltet das Filter-Panel um und persistiert die Einstellung.
pub fn toggle_panel(state: &mut AppState) -> anyhow::Result<()> {
    state.ui.show_filter_panel = !state.ui.show_filter_panel;
    state.options.show_filter_panel = state.ui.show_filter_panel;
    let path = MapOptions::config_path();
    state.options.save_to_file(&path)
}
