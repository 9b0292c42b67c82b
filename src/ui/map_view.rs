//! Kartenfläche: Pins zeichnen, Popup anzeigen, Klicks als Geo-Position melden.
//!
//! Bewusst ohne Kachel-Rendering und Pan/Zoom: die Fläche ist eine feste
//! äquirektanguläre Projektion des Begrenzungsrahmens.

use crate::app::AppIntent;
use crate::core::GeoBounds;
use crate::shared::map_scene::{MapScene, MarkerPin};
use crate::shared::options;
use glam::DVec2;

/// Rendert die Kartenfläche und liefert Klicks als `MapClicked`-Intents.
pub fn show_map_panel(ctx: &egui::Context, scene: &MapScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
            let response = if scene.armed {
                response.on_hover_cursor(egui::CursorIcon::Crosshair)
            } else {
                response
            };

            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, color32(options::MAP_BACKGROUND_COLOR));
            draw_grid(&painter, rect);

            for pin in &scene.pins {
                let center = project(pin.position, &scene.bounds, rect);
                let radius = if pin.selected {
                    options::PIN_RADIUS_SELECTED_PX
                } else {
                    options::PIN_RADIUS_PX
                };
                painter.circle(
                    center,
                    radius,
                    color32(options::category_color(pin.category)),
                    egui::Stroke::new(1.5, color32(options::PIN_OUTLINE_COLOR)),
                );
            }

            if let Some(pin) = scene.pins.iter().find(|p| p.selected) {
                show_popup(ctx, pin, project(pin.position, &scene.bounds, rect));
            }

            if response.clicked() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    events.push(AppIntent::MapClicked {
                        position: unproject(pointer, &scene.bounds, rect),
                    });
                }
            }
        });

    events
}

/// Popup des selektierten Markers neben dem Pin.
fn show_popup(ctx: &egui::Context, pin: &MarkerPin, anchor: egui::Pos2) {
    egui::Window::new(pin.title.clone())
        .collapsible(false)
        .resizable(false)
        .fixed_pos(anchor + egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            ui.set_max_width(240.0);
            if !pin.description.is_empty() {
                ui.label(&pin.description);
            }
            if !pin.hours_display.is_empty() {
                ui.label(format!("Horário: {}", pin.hours_display));
            }
            ui.label(
                egui::RichText::new(pin.category.label())
                    .small()
                    .color(color32(options::category_color(pin.category))),
            );
        });
}

/// Dezentes Orientierungsgitter über der Kartenfläche.
fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = egui::Stroke::new(0.5, egui::Color32::from_white_alpha(10));
    const STEPS: i32 = 8;
    for i in 1..STEPS {
        let t = i as f32 / STEPS as f32;
        let x = rect.left() + t * rect.width();
        let y = rect.top() + t * rect.height();
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
    }
}

/// Projiziert (lat, lng) auf Screen-Koordinaten innerhalb des Rects.
fn project(position: DVec2, bounds: &GeoBounds, rect: egui::Rect) -> egui::Pos2 {
    let span = bounds.span();
    let x = rect.left() as f64 + (position.y - bounds.south_west.y) / span.y * rect.width() as f64;
    let y = rect.top() as f64 + (bounds.north_east.x - position.x) / span.x * rect.height() as f64;
    egui::pos2(x as f32, y as f32)
}

/// Inverse Projektion: Screen-Koordinaten zurück nach (lat, lng).
fn unproject(pointer: egui::Pos2, bounds: &GeoBounds, rect: egui::Rect) -> DVec2 {
    let span = bounds.span();
    let lng =
        bounds.south_west.y + (pointer.x - rect.left()) as f64 / rect.width() as f64 * span.y;
    let lat =
        bounds.north_east.x - (pointer.y - rect.top()) as f64 / rect.height() as f64 * span.x;
    DVec2::new(lat, lng)
}

fn color32([r, g, b]: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BOUNDS: GeoBounds = GeoBounds {
        south_west: DVec2::new(-26.6, -49.2),
        north_east: DVec2::new(-25.8, -48.5),
    };

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_project_maps_corners_to_rect() {
        // Südwest-Ecke → links unten, Nordost-Ecke → rechts oben
        let sw = project(BOUNDS.south_west, &BOUNDS, rect());
        assert_relative_eq!(sw.x, rect().left(), epsilon = 0.001);
        assert_relative_eq!(sw.y, rect().bottom(), epsilon = 0.001);

        let ne = project(BOUNDS.north_east, &BOUNDS, rect());
        assert_relative_eq!(ne.x, rect().right(), epsilon = 0.001);
        assert_relative_eq!(ne.y, rect().top(), epsilon = 0.001);
    }

    #[test]
    fn test_unproject_recovers_center() {
        let center = unproject(rect().center(), &BOUNDS, rect());
        assert_relative_eq!(center.x, BOUNDS.center().x, epsilon = 1e-6);
        assert_relative_eq!(center.y, BOUNDS.center().y, epsilon = 1e-6);
    }
}
