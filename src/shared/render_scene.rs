//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render`/`ui` sie konsumieren.

use crate::core::MapCamera;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Anzahl gesetzter Eckpunkte (0–3)
    pub vertex_count: usize,
    /// Kanten-Labels in zyklischer Reihenfolge (leer ohne Dreieck)
    pub edge_labels: Vec<String>,
    /// Umfang des Dreiecks in Metern, falls vorhanden
    pub perimeter_m: Option<f64>,
    /// Abgeschickte, noch unbeantwortete Routen-Anfragen
    pub routes_in_flight: usize,
}

impl RenderScene {
    /// Gibt zurück, ob gerade ein vollständiges Dreieck existiert.
    pub fn has_triangle(&self) -> bool {
        self.perimeter_m.is_some()
    }
}
