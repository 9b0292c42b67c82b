//! UI-Komponenten: Filter-Panel, Marker-Formular, Kartenfläche, Status-Bar.

pub mod filter_panel;
pub mod map_view;
pub mod marker_form;
pub mod status;

pub use filter_panel::render_filter_panel;
pub use map_view::show_map_panel;
pub use marker_form::show_marker_form;
pub use status::render_status_bar;
