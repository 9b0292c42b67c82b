//! Conectar e Ajudar: Mapa Solidário.
//!
//! Interaktive Karte für Hilfspunkte in der Region Joinville:
//! kategorisierte Marker anzeigen, filtern und per Kartenklick hinzufügen.

use eframe::egui;
use glam::DVec2;
use mapa_solidario::core::{Category, Marker, MarkerStore, TimeRange};
use mapa_solidario::shared::MapOptions;
use mapa_solidario::{ui, AppController, AppIntent, AppState};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Mapa Solidário v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Conectar e Ajudar: Mapa Solidário"),
            ..Default::default()
        };

        eframe::run_native(
            "Mapa Solidário",
            options,
            Box::new(|_cc| Ok(Box::new(MapApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController,
}

impl MapApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MapOptions::config_path();
        let map_options = MapOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.ui.show_filter_panel = map_options.show_filter_panel;
        state.options = map_options;
        seed_markers(&mut state.markers);

        Self {
            state,
            controller: AppController::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_filter_panel(ctx, &self.state));
        events.extend(ui::show_marker_form(ctx, &self.state));

        let scene = self.controller.build_map_scene(&self.state);
        events.extend(ui::show_map_panel(ctx, &scene));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}

/// Seed-Marker der Session (nur In-Memory, nie persistiert).
fn seed_markers(store: &mut MarkerStore) {
    store.append(Marker {
        position: DVec2::new(-26.304408, -48.846383),
        title: "Centro de Ajuda".to_string(),
        description: "Local de assistência para pessoas em necessidade.".to_string(),
        category: Category::HelpCenter,
        hours: vec![TimeRange {
            from: "09:00".to_string(),
            to: "18:00".to_string(),
        }],
        info: "Oferece suporte psicológico e assistencial.".to_string(),
    });
}
