//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{derive_edges, perimeter_m};
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let edges = state.sketch.vertices.triangle().map(|v| derive_edges(&v));

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size: state.view.viewport_size,
        vertex_count: state.sketch.vertices.len(),
        edge_labels: edges
            .as_ref()
            .map(|e| e.iter().map(|edge| edge.label.clone()).collect())
            .unwrap_or_default(),
        perimeter_m: edges.as_ref().map(perimeter_m),
        routes_in_flight: state.routes.in_flight,
    }
}
