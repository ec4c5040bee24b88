//! Viewport-Input-Handling: Klick, Drag, Scroll und Tastatur → AppIntent.

use crate::app::AppIntent;
use crate::core::{GeoCoord, MapCamera};
use crate::shared::SketchOptions;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Primärer Drag aktiv (Klick am Drag-Ende unterdrücken)
    dragging: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { dragging: false }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Ein Klick ohne Drag wird zur Koordinate projiziert und als
    /// `MapTapped` gemeldet; Drag verschiebt, Scroll zoomt die Karte.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        camera: &MapCamera,
        options: &SketchOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let viewport_size = [response.rect.width(), response.rect.height()];

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(collect_keyboard_intents(ui));

        if response.drag_started() {
            self.dragging = true;
        }
        if response.dragged() {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CameraPan {
                    delta: glam::Vec2::new(delta.x, delta.y),
                });
            }
        }
        if response.drag_stopped() {
            self.dragging = false;
        }

        if response.clicked_by(egui::PointerButton::Primary) && !self.dragging {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let coord = screen_pos_to_geo(pointer_pos, response, viewport_size, camera);
                events.push(AppIntent::MapTapped { coord });
            }
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                let step = options.scroll_zoom_step;
                let factor = if scroll > 0.0 { step } else { 1.0 / step };
                let focus = response
                    .hover_pos()
                    .map(|pos| pos - response.rect.min)
                    .map(|local| glam::Vec2::new(local.x, local.y))
                    .unwrap_or_else(|| glam::Vec2::from(viewport_size) * 0.5);
                events.push(AppIntent::CameraZoom { factor, focus });
            }
        }

        events
    }
}

/// Tastenkürzel: R = Routen, Pos1 = Kamera zurücksetzen.
fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    ui.input(|i| {
        if i.key_pressed(egui::Key::R) {
            events.push(AppIntent::ShowRoutesRequested);
        }
        if i.key_pressed(egui::Key::Home) {
            events.push(AppIntent::ResetCameraRequested);
        }
    });

    events
}

/// Rechnet eine Pointer-Position (Screen) in eine Koordinate um.
pub(crate) fn screen_pos_to_geo(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &MapCamera,
) -> GeoCoord {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_geo(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
