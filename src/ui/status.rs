//! Status-Bar am unteren Bildschirmrand.

use crate::shared::RenderScene;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, scene: &RenderScene) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Eckpunkte: {} / 3", scene.vertex_count));

            ui.separator();

            if let Some(perimeter) = scene.perimeter_m {
                ui.label(format!(
                    "Kanten: {} | Umfang: {:.2} km",
                    scene.edge_labels.join(", "),
                    perimeter / 1000.0
                ));
            } else {
                ui.label("Kein Dreieck");
            }

            if scene.routes_in_flight > 0 {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("⏳ Routen: {}", scene.routes_in_flight))
                        .color(egui::Color32::YELLOW),
                );
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Mitte: ({:.4}, {:.4})",
                scene.camera.zoom, scene.camera.center.lat, scene.camera.center.lon
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
