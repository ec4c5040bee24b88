use std::sync::Arc;
use std::time::Duration;

use triangle_sketch::{
    AppCommand, AppController, AppIntent, AppState, DirectionsError, DirectionsProvider, GeoCoord,
    GreatCircleDirections, MapScene, Route, RouteRequest, RouteWorker,
};

const WAIT: Duration = Duration::from_secs(5);

struct NoRouteDirections;

impl DirectionsProvider for NoRouteDirections {
    fn name(&self) -> &'static str {
        "no-route"
    }

    fn calculate(&self, _request: &RouteRequest) -> Result<Vec<Route>, DirectionsError> {
        Ok(Vec::new())
    }
}

fn triangle_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    for (lat, lon) in [(10.0, 10.0), (20.0, 20.0), (30.0, 10.0)] {
        controller
            .handle_tap(&mut state, GeoCoord::new(lat, lon))
            .expect("Tap sollte ohne Fehler durchlaufen");
    }
    state
}

/// Schickt wartende Anfragen ab und speist alle Antworten als Intents zurück.
fn run_routes(controller: &mut AppController, state: &mut AppState, worker: &mut RouteWorker) {
    let pending = state.routes.take_pending();
    let count = pending.len();
    for request in pending {
        worker.submit(request);
    }
    for response in worker.wait_for(count, WAIT) {
        controller
            .handle_intent(state, AppIntent::RouteResponseReceived { response })
            .expect("RouteResponseReceived sollte ohne Fehler durchlaufen");
    }
}

#[test]
fn test_show_routes_renders_one_route_per_edge() {
    let mut controller = AppController::new();
    let mut state = triangle_state(&mut controller);
    let mut scene = MapScene::new();
    let mut worker = RouteWorker::new(Arc::new(GreatCircleDirections::new(8)));

    controller
        .handle_intent(&mut state, AppIntent::ShowRoutesRequested)
        .expect("ShowRoutesRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.routes.pending.len(), 3);

    run_routes(&mut controller, &mut state, &mut worker);
    scene.apply_all(state.outbox.drain());

    assert_eq!(scene.route_count(), 3);
    assert_eq!(state.routes.in_flight, 0);
    assert_eq!(worker.in_flight(), 0);
}

#[test]
fn test_empty_route_results_add_nothing() {
    let mut controller = AppController::new();
    let mut state = triangle_state(&mut controller);
    let mut scene = MapScene::new();
    let mut worker = RouteWorker::new(Arc::new(NoRouteDirections));
    scene.apply_all(state.outbox.drain());

    controller
        .handle_intent(&mut state, AppIntent::ShowRoutesRequested)
        .expect("ShowRoutesRequested sollte ohne Fehler durchlaufen");
    run_routes(&mut controller, &mut state, &mut worker);

    assert!(state.outbox.is_empty());
    assert_eq!(scene.route_count(), 0);
}

#[test]
fn test_show_routes_without_triangle_queues_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_tap(&mut state, GeoCoord::new(1.0, 1.0))
        .expect("Tap sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ShowRoutesRequested)
        .expect("ShowRoutesRequested sollte ohne Fehler durchlaufen");

    assert!(state.routes.pending.is_empty());
}

#[test]
fn test_stale_routes_are_drawn_and_cleared_by_next_removal() {
    let mut controller = AppController::new();
    let mut state = triangle_state(&mut controller);
    let mut scene = MapScene::new();
    let mut worker = RouteWorker::new(Arc::new(GreatCircleDirections::new(4)));

    controller
        .handle_intent(&mut state, AppIntent::ShowRoutesRequested)
        .expect("ShowRoutesRequested sollte ohne Fehler durchlaufen");
    // Eckpunkt entfernen, bevor die Antworten eintreffen
    controller
        .handle_tap(&mut state, GeoCoord::new(30.0, 10.0))
        .expect("Tap sollte ohne Fehler durchlaufen");

    run_routes(&mut controller, &mut state, &mut worker);
    scene.apply_all(state.outbox.drain());
    assert_eq!(scene.route_count(), 3);

    controller
        .handle_tap(&mut state, GeoCoord::new(20.0, 20.0))
        .expect("Tap sollte ohne Fehler durchlaufen");
    scene.apply_all(state.outbox.drain());
    assert_eq!(scene.route_count(), 0);
}

#[test]
fn test_stale_routes_are_discarded_when_configured() {
    let mut controller = AppController::new();
    let mut state = triangle_state(&mut controller);
    state.options.discard_stale_routes = true;
    let mut scene = MapScene::new();
    let mut worker = RouteWorker::new(Arc::new(GreatCircleDirections::new(4)));

    controller
        .handle_intent(&mut state, AppIntent::ShowRoutesRequested)
        .expect("ShowRoutesRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_tap(&mut state, GeoCoord::new(30.0, 10.0))
        .expect("Tap sollte ohne Fehler durchlaufen");

    run_routes(&mut controller, &mut state, &mut worker);
    scene.apply_all(state.outbox.drain());

    assert_eq!(scene.route_count(), 0);
    assert_eq!(state.routes.in_flight, 0);
}

#[test]
fn test_command_log_keeps_route_responses_without_geometry() {
    let mut controller = AppController::new();
    let mut state = triangle_state(&mut controller);
    let mut worker = RouteWorker::new(Arc::new(GreatCircleDirections::new(16)));

    controller
        .handle_intent(&mut state, AppIntent::ShowRoutesRequested)
        .expect("ShowRoutesRequested sollte ohne Fehler durchlaufen");
    run_routes(&mut controller, &mut state, &mut worker);

    let logged: Vec<_> = state
        .command_log
        .entries()
        .iter()
        .filter_map(|c| match c {
            AppCommand::ApplyRouteResponse { response } => Some(response),
            _ => None,
        })
        .collect();

    assert_eq!(logged.len(), 3);
    for response in logged {
        let route = response
            .first_route()
            .expect("Antwort sollte eine Route enthalten");
        assert!(route.path.is_empty());
        assert!(route.distance_m > 0.0);
    }
}
