//! Use-Cases der Dreiecks-Skizze: Tap auflösen, Eckpunkte setzen/entfernen,
//! Dreieck ableiten, Overlays leeren.

use crate::app::state::{SketchState, TriangleOverlay};
use crate::app::AppState;
use crate::core::{derive_edges, GeoCoord};
use crate::shared::{Annotation, Overlay, RenderCommand};

/// Ergebnis der Tap-Klassifizierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    /// Tap trifft einen bestehenden Eckpunkt → entfernen
    Remove { index: usize },
    /// Tap setzt einen neuen Eckpunkt
    Add,
    /// Menge voll und kein Treffer → ignorieren
    Ignore,
}

/// Klassifiziert einen Tap gegen die aktuelle Skizze.
///
/// Entfernen hat Vorrang: der erste Eckpunkt (Einfügereihenfolge) näher als
/// `threshold_m` wird getroffen, unabhängig von der Anzahl der Eckpunkte.
pub fn resolve_tap(sketch: &SketchState, coord: GeoCoord, threshold_m: f64) -> TapAction {
    if let Some(index) = sketch.vertices.find_within(coord, threshold_m) {
        return TapAction::Remove { index };
    }
    if sketch.vertices.is_full() {
        return TapAction::Ignore;
    }
    TapAction::Add
}

/// Hängt einen Eckpunkt an und setzt seinen Marker.
pub fn add_vertex(state: &mut AppState, coord: GeoCoord) {
    let Some(id) = state.sketch.vertices.push(coord) else {
        log::debug!("Eckpunkt ignoriert: bereits drei Eckpunkte gesetzt");
        return;
    };

    state.outbox.push(RenderCommand::AddAnnotation {
        id: id.into(),
        annotation: Annotation { coord, title: None },
    });

    log::info!(
        "Eckpunkt {} bei ({:.5}, {:.5}) gesetzt ({} von 3)",
        id.0,
        coord.lat,
        coord.lon,
        state.sketch.vertices.len()
    );
}

/// Entfernt den Eckpunkt am Index samt Marker und leert alle abgeleiteten Overlays.
///
/// Leitet kein neues Dreieck ab, auch wenn danach wieder drei Eckpunkte
/// erreichbar wären.
pub fn remove_vertex_at(state: &mut AppState, index: usize) {
    let Some(removed) = state.sketch.vertices.remove_at(index) else {
        log::warn!(
            "Eckpunkt-Index {} ungültig ({} Eckpunkte)",
            index,
            state.sketch.vertices.len()
        );
        return;
    };

    state.outbox.push(RenderCommand::RemoveAnnotation {
        id: removed.id.into(),
    });
    clear_overlays(state);

    log::info!(
        "Eckpunkt {} entfernt, {} verbleibend",
        removed.id.0,
        state.sketch.vertices.len()
    );
}

/// Leitet Kanten, Labels und Dreiecksfläche aus genau drei Eckpunkten ab.
pub fn derive_triangle(state: &mut AppState) {
    let Some(vertices) = state.sketch.vertices.triangle() else {
        log::debug!(
            "Kein Dreieck ableitbar: {} Eckpunkte",
            state.sketch.vertices.len()
        );
        return;
    };

    clear_overlays(state);

    for edge in derive_edges(&vertices) {
        let line_id = state.sketch.alloc_overlay_id();
        state.outbox.push(RenderCommand::AddOverlay {
            id: line_id,
            overlay: Overlay::edge(edge.from, edge.to),
        });
        state.sketch.derived.edge_lines.push(line_id);

        let label_id = state.sketch.alloc_label_id();
        log::debug!("Kante {}: {}", edge.index, edge.label);
        state.outbox.push(RenderCommand::AddAnnotation {
            id: label_id,
            annotation: Annotation {
                coord: edge.midpoint,
                title: Some(edge.label),
            },
        });
        state.sketch.derived.edge_labels.push(label_id);
    }

    let triangle_id = state.sketch.alloc_overlay_id();
    state.outbox.push(RenderCommand::AddOverlay {
        id: triangle_id,
        overlay: Overlay::triangle(&vertices),
    });
    state.sketch.derived.triangle = TriangleOverlay::Present(triangle_id);

    log::info!("Dreieck abgeleitet");
}

/// Entfernt alle gerenderten Linien- und Polygon-Overlays sowie die Kanten-Labels.
///
/// Eckpunkt-Marker bleiben bestehen. Ein zweiter Aufruf erzeugt keine Befehle.
pub fn clear_overlays(state: &mut AppState) {
    let derived = std::mem::take(&mut state.sketch.derived);
    if derived.is_empty() {
        return;
    }

    let triangle = match derived.triangle {
        TriangleOverlay::Present(id) => Some(id),
        TriangleOverlay::Absent => None,
    };

    for id in derived
        .edge_lines
        .into_iter()
        .chain(triangle)
        .chain(derived.route_paths)
    {
        state.outbox.push(RenderCommand::RemoveOverlay { id });
    }
    for id in derived.edge_labels {
        state.outbox.push(RenderCommand::RemoveAnnotation { id });
    }

    log::debug!("Abgeleitete Overlays entfernt");
}
