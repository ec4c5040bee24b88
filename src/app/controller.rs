//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::GeoCoord;
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Kurzform für einen Karten-Tap.
    pub fn handle_tap(&mut self, state: &mut AppState, coord: GeoCoord) -> anyhow::Result<()> {
        self.handle_intent(state, AppIntent::MapTapped { coord })
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Alle Skizzen-Operationen sind derzeit infallibel (ungültige Eingaben
    /// sind geloggte No-ops); `Err` entsteht nur, wenn ein Handler künftig
    /// fehlschlagen kann.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Skizze ===
            AppCommand::AddVertex { coord } => handlers::sketch::add_vertex(state, coord),
            AppCommand::RemoveVertexAt { index } => {
                handlers::sketch::remove_vertex_at(state, index)
            }
            AppCommand::DeriveTriangle => handlers::sketch::derive_triangle(state),
            AppCommand::ClearOverlays => handlers::sketch::clear_overlays(state),

            // === Routen ===
            AppCommand::RequestRouteOverlays => handlers::routing::request_route_overlays(state),
            AppCommand::ApplyRouteResponse { response } => {
                handlers::routing::apply_route_response(state, response)
            }

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor, focus } => {
                handlers::view::zoom_towards(state, factor, focus)
            }
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
