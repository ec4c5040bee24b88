//! Triangle Sketch.
//!
//! Drei Punkte auf einer Karte antippen, Kantenlängen ablesen und
//! Fahrstrecken entlang der Dreieckskanten anzeigen lassen.

use eframe::egui;
use triangle_sketch::routing::{build_provider, RouteWorker};
use triangle_sketch::{render, ui, AppController, AppIntent, AppState, MapScene, SketchOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Triangle Sketch v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Triangle Sketch"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Triangle Sketch",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    scene: MapScene,
    worker: RouteWorker,
    input: ui::InputState,
}

impl SketchApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SketchOptions::config_path();
        let sketch_options = SketchOptions::load_from_file(&config_path);

        let provider = build_provider(&sketch_options)?;

        Ok(Self {
            state: AppState::with_options(sketch_options),
            controller: AppController::new(),
            scene: MapScene::new(),
            worker: RouteWorker::new(provider),
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_route_responses();
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.submit_route_requests();

        self.sync_scene();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl SketchApp {
    fn collect_route_responses(&mut self) -> Vec<AppIntent> {
        self.worker
            .drain()
            .into_iter()
            .map(|response| AppIntent::RouteResponseReceived { response })
            .collect()
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let render_scene = self.controller.build_render_scene(&self.state);
        ui::render_status_bar(ctx, &render_scene);
        events.extend(ui::render_toolbar(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                render::paint_map(ui.painter(), rect, &self.state.view.camera, &self.scene);

                if self.state.vertex_count() == 0 {
                    ui.painter().text(
                        rect.center_top() + egui::vec2(0.0, 24.0),
                        egui::Align2::CENTER_CENTER,
                        "Drei Punkte auf die Karte tippen",
                        egui::FontId::proportional(18.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Übergibt eingereihte Routen-Anfragen an den Worker.
    fn submit_route_requests(&mut self) {
        for request in self.state.routes.take_pending() {
            self.worker.submit(request);
        }
    }

    /// Spiegelt die Render-Befehle dieses Frames in die Szene.
    fn sync_scene(&mut self) {
        if self.state.outbox.is_empty() {
            return;
        }
        let commands = self.state.outbox.drain();
        log::debug!("{} Render-Befehle übernommen", commands.len());
        self.scene.apply_all(commands);
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
        // Antworten kommen ohne UI-Event an: weiter pollen
        if self.worker.in_flight() > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
