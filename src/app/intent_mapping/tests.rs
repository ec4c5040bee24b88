use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::GeoCoord;

use super::map_intent_to_commands;

fn tap(lat: f64, lon: f64) -> AppIntent {
    AppIntent::MapTapped {
        coord: GeoCoord::new(lat, lon),
    }
}

#[test]
fn first_tap_maps_to_add_vertex_only() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, tap(10.0, 10.0));

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::AddVertex { .. }));
}

#[test]
fn third_tap_maps_to_add_and_derive_in_order() {
    let mut state = AppState::new();
    state.sketch.vertices.push(GeoCoord::new(10.0, 10.0));
    state.sketch.vertices.push(GeoCoord::new(20.0, 20.0));

    let commands = map_intent_to_commands(&state, tap(30.0, 10.0));

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::AddVertex { .. }));
    assert!(matches!(commands[1], AppCommand::DeriveTriangle));
}

#[test]
fn near_tap_maps_to_remove_of_first_match() {
    let mut state = AppState::new();
    state.sketch.vertices.push(GeoCoord::new(10.0, 10.0));
    state.sketch.vertices.push(GeoCoord::new(20.0, 20.0));

    let commands = map_intent_to_commands(&state, tap(20.0, 20.0005));

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RemoveVertexAt { index: 1 }));
}

#[test]
fn tap_on_full_sketch_without_hit_maps_to_nothing() {
    let mut state = AppState::new();
    state.sketch.vertices.push(GeoCoord::new(10.0, 10.0));
    state.sketch.vertices.push(GeoCoord::new(20.0, 20.0));
    state.sketch.vertices.push(GeoCoord::new(30.0, 10.0));

    let commands = map_intent_to_commands(&state, tap(-40.0, 100.0));

    assert!(commands.is_empty());
}

#[test]
fn proximity_threshold_comes_from_options() {
    let mut state = AppState::new();
    state.options.proximity_threshold_m = 10.0;
    state.sketch.vertices.push(GeoCoord::new(10.0, 10.0));

    // ~88 m entfernt: bei 10 m Radius kein Treffer
    let commands = map_intent_to_commands(&state, tap(10.0, 10.0008));

    assert!(matches!(commands[0], AppCommand::AddVertex { .. }));
}

#[test]
fn show_routes_maps_to_request_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ShowRoutesRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RequestRouteOverlays));
}
