//! Handler für Routen-Anfragen und -Antworten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::routing::RouteResponse;

/// Reiht Routen-Anfragen für alle drei Kanten ein.
pub fn request_route_overlays(state: &mut AppState) {
    use_cases::routing::request_route_overlays(state);
}

/// Übernimmt eine eingetroffene Routen-Antwort.
pub fn apply_route_response(state: &mut AppState, response: RouteResponse) {
    use_cases::routing::apply_route_response(state, response);
}
