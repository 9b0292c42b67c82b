//! Application State — zentrale Datenhaltung.

mod app_state;
mod filters;
mod ui;
mod workflow;

pub use app_state::AppState;
pub use filters::FilterState;
pub use ui::UiState;
pub use workflow::{MarkerDraft, PlacementPhase, WorkflowState};
