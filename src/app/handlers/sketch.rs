//! Handler für Eckpunkte und abgeleitete Dreiecks-Overlays.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoCoord;

/// Hängt einen neuen Eckpunkt an.
pub fn add_vertex(state: &mut AppState, coord: GeoCoord) {
    use_cases::sketch::add_vertex(state, coord);
}

/// Entfernt den Eckpunkt am Index und leert alle Overlays.
pub fn remove_vertex_at(state: &mut AppState, index: usize) {
    use_cases::sketch::remove_vertex_at(state, index);
}

/// Leitet Kanten, Labels und Dreieck neu ab.
pub fn derive_triangle(state: &mut AppState) {
    use_cases::sketch::derive_triangle(state);
}

/// Entfernt alle abgeleiteten Overlays.
pub fn clear_overlays(state: &mut AppState) {
    use_cases::sketch::clear_overlays(state);
}
