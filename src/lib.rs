//! Conectar e Ajudar: Mapa Solidário.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, FilterState, MarkerDraft, PlacementPhase,
    UiState, ValidationError, WorkflowState,
};
pub use core::{Category, GeoBounds, Marker, MarkerStore, ScheduleField, TimeRange};
pub use shared::{MapOptions, MapScene, MarkerPin};
