//! Use-Cases für Routen-Overlays: Anfragen einreihen, Antworten übernehmen.

use crate::app::AppState;
use crate::core::directed_edges;
use crate::routing::{RouteRequest, RouteResponse, TransportType};
use crate::shared::{Overlay, RenderCommand};

/// Reiht für jede gerichtete Dreieckskante eine Auto-Routen-Anfrage ein.
///
/// Ohne vollständiges Dreieck passiert nichts. Die Anfragen tragen die
/// aktuelle Generation der Eckpunkt-Menge.
pub fn request_route_overlays(state: &mut AppState) {
    let Some(vertices) = state.sketch.vertices.triangle() else {
        log::debug!(
            "Routen nicht angefordert: {} Eckpunkte",
            state.sketch.vertices.len()
        );
        return;
    };

    let generation = state.sketch.vertices.generation();
    for (edge_index, (source, destination)) in directed_edges(&vertices).into_iter().enumerate() {
        let request_id = state.routes.alloc_request_id();
        state.routes.pending.push(RouteRequest {
            request_id,
            generation,
            edge_index,
            source,
            destination,
            transport: TransportType::Automobile,
        });
        state.routes.in_flight += 1;
    }

    log::info!("3 Routen-Anfragen eingereiht (Generation {})", generation);
}

/// Übernimmt die erste Kandidaten-Route einer Antwort als Overlay.
///
/// Fehler und leere Ergebnisse werden still verworfen; andere Kanten sind
/// nicht betroffen. Mit `discard_stale_routes` werden Antworten einer
/// veralteten Generation ebenfalls verworfen.
pub fn apply_route_response(state: &mut AppState, response: RouteResponse) {
    state.routes.in_flight = state.routes.in_flight.saturating_sub(1);

    let request = &response.request;
    let current_generation = state.sketch.vertices.generation();
    if state.options.discard_stale_routes && request.generation != current_generation {
        log::debug!(
            "Route #{} verworfen: Generation {} statt {}",
            request.request_id,
            request.generation,
            current_generation
        );
        return;
    }

    let route = match response.result {
        Ok(routes) => routes.into_iter().next(),
        Err(e) => {
            log::warn!(
                "Route #{} (Kante {}) fehlgeschlagen: {}",
                response.request.request_id,
                response.request.edge_index,
                e
            );
            return;
        }
    };

    let Some(route) = route.filter(|r| !r.path.is_empty()) else {
        log::debug!(
            "Route #{} (Kante {}): keine Kandidaten",
            response.request.request_id,
            response.request.edge_index
        );
        return;
    };

    let id = state.sketch.alloc_overlay_id();
    state.outbox.push(RenderCommand::AddOverlay {
        id,
        overlay: Overlay::route(route.path),
    });
    state.sketch.derived.route_paths.push(id);

    log::info!(
        "Route #{} (Kante {}) gezeichnet: {:.2} km",
        response.request.request_id,
        response.request.edge_index,
        route.distance_m / 1000.0
    );
}
