//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{GeoCoord, MapCamera, VertexSet};
use crate::routing::RouteRequest;
use crate::shared::{AnnotationId, OverlayId, RenderOutbox, SketchOptions};

/// Zustand der Dreiecks-Fläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangleOverlay {
    /// Kein Dreieck gerendert
    #[default]
    Absent,
    /// Dreieck mit Overlay-Handle gerendert
    Present(OverlayId),
}

impl TriangleOverlay {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Buchhaltung aller abgeleiteten (gerenderten) Overlays.
#[derive(Debug, Clone, Default)]
pub struct DerivedOverlays {
    /// Dreieckskanten in zyklischer Reihenfolge
    pub edge_lines: Vec<OverlayId>,
    /// Längen-Labels der Kanten
    pub edge_labels: Vec<AnnotationId>,
    /// Gefülltes Dreieck
    pub triangle: TriangleOverlay,
    /// Gerenderte Routen-Pfade (nur additiv, bis zum nächsten Clear)
    pub route_paths: Vec<OverlayId>,
}

impl DerivedOverlays {
    /// Gibt `true` zurück, wenn nichts Abgeleitetes gerendert ist.
    pub fn is_empty(&self) -> bool {
        self.edge_lines.is_empty()
            && self.edge_labels.is_empty()
            && !self.triangle.is_present()
            && self.route_paths.is_empty()
    }
}

/// Eckpunkte plus abgeleitete Overlays.
#[derive(Debug, Clone)]
pub struct SketchState {
    /// Ausgewählte Eckpunkte (0–3)
    pub vertices: VertexSet,
    /// Abgeleitete Overlays
    pub derived: DerivedOverlays,
    next_overlay_id: u64,
    next_label_id: u64,
}

impl Default for SketchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchState {
    /// Erstellt eine leere Skizze.
    pub fn new() -> Self {
        Self {
            vertices: VertexSet::new(),
            derived: DerivedOverlays::default(),
            next_overlay_id: 1,
            next_label_id: 1,
        }
    }

    /// Vergibt einen neuen Overlay-Handle.
    pub fn alloc_overlay_id(&mut self) -> OverlayId {
        let id = OverlayId(self.next_overlay_id);
        self.next_overlay_id += 1;
        id
    }

    /// Vergibt einen neuen Label-Handle.
    pub fn alloc_label_id(&mut self) -> AnnotationId {
        let id = AnnotationId::Label(self.next_label_id);
        self.next_label_id += 1;
        id
    }
}

/// Buchhaltung ausgehender Routen-Anfragen.
#[derive(Debug, Clone, Default)]
pub struct RouteState {
    /// Noch nicht an den Worker übergebene Anfragen
    pub pending: Vec<RouteRequest>,
    /// Abgeschickte, unbeantwortete Anfragen
    pub in_flight: usize,
    next_request_id: u64,
}

impl RouteState {
    /// Vergibt eine neue Request-ID (beginnend bei 1).
    pub fn alloc_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Entnimmt alle wartenden Anfragen zur Ausführung.
    pub fn take_pending(&mut self) -> Vec<RouteRequest> {
        std::mem::take(&mut self.pending)
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Karten-Kamera
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand mit Start-Kamera aus den Optionen.
    pub fn from_options(options: &SketchOptions) -> Self {
        Self {
            camera: MapCamera::new(
                GeoCoord::from(options.initial_center),
                options.initial_zoom,
            ),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Haupt-Anwendungszustand
pub struct AppState {
    /// Eckpunkte und abgeleitete Overlays
    pub sketch: SketchState,
    /// Routen-Anfragen
    pub routes: RouteState,
    /// View-Zustand (Kamera, Viewport)
    pub view: ViewState,
    /// Laufzeit-Optionen
    pub options: SketchOptions,
    /// Ausgehende Render-Befehle für den aktuellen Frame
    pub outbox: RenderOutbox,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert, dass die Anwendung beendet werden soll
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SketchOptions::default())
    }

    /// Erstellt einen neuen, leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: SketchOptions) -> Self {
        Self {
            sketch: SketchState::new(),
            routes: RouteState::default(),
            view: ViewState::from_options(&options),
            options,
            outbox: RenderOutbox::new(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Eckpunkte zurück.
    pub fn vertex_count(&self) -> usize {
        self.sketch.vertices.len()
    }
}
