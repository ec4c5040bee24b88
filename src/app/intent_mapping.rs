//! Mapping von UI-Intents auf mutierende App-Commands.

use super::use_cases::sketch::resolve_tap;
use super::use_cases::TapAction;
use super::{AppCommand, AppIntent, AppState};
use crate::core::MAX_VERTICES;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapTapped { coord } => {
            match resolve_tap(&state.sketch, coord, state.options.proximity_threshold_m) {
                TapAction::Remove { index } => vec![AppCommand::RemoveVertexAt { index }],
                TapAction::Add => {
                    // Der dritte Eckpunkt schließt das Dreieck
                    if state.sketch.vertices.len() + 1 == MAX_VERTICES {
                        vec![AppCommand::AddVertex { coord }, AppCommand::DeriveTriangle]
                    } else {
                        vec![AppCommand::AddVertex { coord }]
                    }
                }
                TapAction::Ignore => {
                    log::debug!(
                        "Tap bei ({:.5}, {:.5}) ignoriert: Dreieck vollständig",
                        coord.lat,
                        coord.lon
                    );
                    Vec::new()
                }
            }
        }
        AppIntent::ShowRoutesRequested => vec![AppCommand::RequestRouteOverlays],
        AppIntent::RouteResponseReceived { response } => {
            vec![AppCommand::ApplyRouteResponse { response }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { factor, focus } => vec![AppCommand::ZoomCamera { factor, focus }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
