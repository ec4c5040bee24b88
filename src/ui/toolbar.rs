//! Toolbar mit Routen- und Kamera-Aktionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let has_triangle = state.sketch.vertices.is_full();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // Ohne Dreieck ist die Aktion ein No-op, daher nur deaktiviert
            if ui
                .add_enabled(has_triangle, egui::Button::new("Routen anzeigen (R)"))
                .clicked()
            {
                events.push(AppIntent::ShowRoutesRequested);
            }

            ui.separator();

            if ui.button("Kamera zurücksetzen").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
