//! Use-Case-Funktionen für Kamera-Steuerung und Viewport.

use crate::app::state::ViewState;
use crate::app::AppState;

/// Setzt die Kamera auf die Start-Ansicht aus den Optionen zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = ViewState::from_options(&state.options).camera;
}

/// Verschiebt die Kamera um ein Screen-Delta in Pixeln.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen Fokuspunkt (Mausposition) hin.
///
/// Die Koordinate unter dem Fokus bleibt an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus: glam::Vec2) {
    let viewport = glam::Vec2::from(state.view.viewport_size);
    state.view.camera.zoom_towards(factor, focus, viewport);
}

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
