//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod map_scene;
pub mod options;

pub use map_scene::{MapScene, MarkerPin};
pub use options::MapOptions;
pub use options::{MAP_BOUNDS, MAP_CENTER, MARKER_PICK_RADIUS_DEG};
