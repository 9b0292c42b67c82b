//! UI-bezogener Anwendungszustand (Panel-Sichtbarkeit, Meldungen, Auswahl).

/// UI-Zustand außerhalb des Workflows.
#[derive(Debug)]
pub struct UiState {
    /// Ob das Filter-Panel angezeigt wird
    pub show_filter_panel: bool,
    /// Index des selektierten Markers im Store (Popup offen)
    pub selected_marker: Option<usize>,
    /// Validierungsmeldung im Formular (bleibt bis Korrektur stehen)
    pub form_error: Option<String>,
    /// Temporäre Statusnachricht (z.B. "Marcador adicionado")
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (Panel sichtbar, nichts selektiert).
    pub fn new() -> Self {
        Self {
            show_filter_panel: true,
            selected_marker: None,
            form_error: None,
            status_message: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
