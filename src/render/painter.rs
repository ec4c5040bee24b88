//! Zeichnen der gespiegelten Szene mit festen Stilen.

use egui::{Align2, Color32, FontId, Pos2, Rect, Shape, Stroke};
use glam::Vec2;

use super::MapScene;
use crate::core::{GeoCoord, MapCamera};
use crate::shared::options::{
    EDGE_COLOR, EDGE_LINE_WIDTH, ROUTE_COLOR, TRIANGLE_FILL_COLOR, TRIANGLE_STROKE_COLOR,
    TRIANGLE_STROKE_WIDTH, VERTEX_MARKER_RADIUS,
};
use crate::shared::{AnnotationId, OverlayKind};

const BACKGROUND_COLOR: Color32 = Color32::from_rgb(24, 28, 36);
const GRATICULE_COLOR: Color32 = Color32::from_rgb(52, 60, 74);
const VERTEX_COLOR: Color32 = Color32::from_rgb(230, 60, 60);
const LABEL_COLOR: Color32 = Color32::WHITE;
/// Mindestabstand der Gitterlinien in Pixeln
const GRATICULE_MIN_SPACING_PX: f64 = 60.0;
/// Kandidaten für den Gitterabstand in Grad (absteigend)
const GRATICULE_STEPS_DEG: [f64; 10] = [30.0, 10.0, 5.0, 1.0, 0.5, 0.1, 0.05, 0.01, 0.005, 0.001];

/// Konvertiert eine RGBA-Farbe (0..1, nicht vormultipliziert) in `Color32`.
pub fn color32(rgba: [f32; 4]) -> Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

/// Zeichnet Hintergrund, Gitternetz, Overlays und Annotationen in `rect`.
pub fn paint_map(painter: &egui::Painter, rect: Rect, camera: &MapCamera, scene: &MapScene) {
    let viewport = Vec2::new(rect.width(), rect.height());
    let to_screen = |coord: GeoCoord| -> Pos2 {
        let p = camera.geo_to_screen(coord, viewport);
        rect.min + egui::vec2(p.x, p.y)
    };
    let path_to_screen = |path: &[GeoCoord]| -> Vec<Pos2> {
        camera
            .geo_path_to_screen(path, viewport)
            .into_iter()
            .map(|p| rect.min + egui::vec2(p.x, p.y))
            .collect()
    };

    painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);
    paint_graticule(painter, rect, camera, &to_screen);

    // Flächen zuerst, Linien darüber
    for (_, overlay) in scene.overlays() {
        if overlay.kind != OverlayKind::Triangle {
            continue;
        }
        let points = path_to_screen(&overlay.points);
        painter.add(Shape::convex_polygon(
            points,
            color32(TRIANGLE_FILL_COLOR),
            Stroke::new(TRIANGLE_STROKE_WIDTH, color32(TRIANGLE_STROKE_COLOR)),
        ));
    }

    for (_, overlay) in scene.overlays() {
        let color = match overlay.kind {
            OverlayKind::EdgeLine => EDGE_COLOR,
            OverlayKind::RoutePath => ROUTE_COLOR,
            OverlayKind::Triangle => continue,
        };
        let points = path_to_screen(&overlay.points);
        painter.add(Shape::line(
            points,
            Stroke::new(EDGE_LINE_WIDTH, color32(color)),
        ));
    }

    for (id, annotation) in scene.annotations() {
        let pos = to_screen(annotation.coord);
        match id {
            AnnotationId::Vertex(_) => {
                painter.circle_filled(pos, VERTEX_MARKER_RADIUS, VERTEX_COLOR);
                painter.circle_stroke(pos, VERTEX_MARKER_RADIUS, Stroke::new(1.5, Color32::WHITE));
            }
            AnnotationId::Label(_) => {
                if let Some(title) = &annotation.title {
                    painter.text(
                        pos,
                        Align2::CENTER_CENTER,
                        title,
                        FontId::proportional(14.0),
                        LABEL_COLOR,
                    );
                }
            }
        }
    }
}

/// Wählt den kleinsten Gitterabstand, der noch `GRATICULE_MIN_SPACING_PX` einhält.
fn graticule_step(pixels_per_degree: f64) -> f64 {
    GRATICULE_STEPS_DEG
        .iter()
        .copied()
        .take_while(|step| step * pixels_per_degree >= GRATICULE_MIN_SPACING_PX)
        .last()
        .unwrap_or(GRATICULE_STEPS_DEG[0])
}

fn paint_graticule(
    painter: &egui::Painter,
    rect: Rect,
    camera: &MapCamera,
    to_screen: &impl Fn(GeoCoord) -> Pos2,
) {
    let viewport = Vec2::new(rect.width(), rect.height());
    let (south_west, north_east) = camera.visible_bounds(viewport);
    let step = graticule_step(camera.pixels_per_degree());
    let stroke = Stroke::new(1.0, GRATICULE_COLOR);

    let mut lon = (south_west.lon / step).floor() * step;
    while lon <= north_east.lon {
        let x = to_screen(GeoCoord::new(camera.center.lat, lon)).x;
        painter.vline(x, rect.y_range(), stroke);
        lon += step;
    }

    let mut lat = (south_west.lat.max(-90.0) / step).floor() * step;
    while lat <= north_east.lat.min(90.0) {
        let y = to_screen(GeoCoord::new(lat, camera.center.lon)).y;
        painter.hline(rect.x_range(), y, stroke);
        lat += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graticule_step_keeps_minimum_spacing() {
        // 4 px/° → 30° Abstand (120 px)
        assert_eq!(graticule_step(4.0), 30.0);
        // 1000 px/° → 0.1° Abstand (100 px)
        assert_eq!(graticule_step(1000.0), 0.1);
    }

    #[test]
    fn color32_converts_opaque_green() {
        assert_eq!(color32(EDGE_COLOR), Color32::from_rgb(0, 255, 0));
    }
}
