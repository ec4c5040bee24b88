//! Zentrale Konfiguration für Triangle Sketch.
//!
//! `SketchOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Skizze ──────────────────────────────────────────────────────────

/// Treffer-Radius in Metern: ein Tap innerhalb dieses Radius entfernt den Eckpunkt.
pub const PROXIMITY_THRESHOLD_M: f64 = 100.0;

// ── Routing ─────────────────────────────────────────────────────────

/// Öffentlicher OSRM-Demo-Server.
pub const OSRM_BASE_URL: &str = "https://router.project-osrm.org";
/// HTTP-Timeout pro Routen-Anfrage in Sekunden.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Stützpunkte einer Großkreis-Ersatzroute.
pub const GREAT_CIRCLE_SEGMENTS: usize = 32;

// ── Kamera ──────────────────────────────────────────────────────────

/// Start-Mittelpunkt der Karte [lat, lon].
pub const INITIAL_CENTER: [f64; 2] = [20.0, 15.0];
/// Start-Zoom der Karte.
pub const INITIAL_ZOOM: f64 = 4.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Darstellung (fest, nicht konfigurierbar) ────────────────────────

/// Linienbreite der Dreieckskanten und Routen in Pixeln.
pub const EDGE_LINE_WIDTH: f32 = 3.0;
/// Farbe der Dreieckskanten (RGBA: Grün).
pub const EDGE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Farbe der Routen-Pfade (RGBA: Blau).
pub const ROUTE_COLOR: [f32; 4] = [0.2, 0.5, 1.0, 1.0];
/// Füllfarbe des Dreiecks (RGBA: Rot, halbtransparent).
pub const TRIANGLE_FILL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.5];
/// Randfarbe des Dreiecks (RGBA: Rot).
pub const TRIANGLE_STROKE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Randbreite des Dreiecks in Pixeln.
pub const TRIANGLE_STROKE_WIDTH: f32 = 1.0;
/// Radius der Eckpunkt-Marker in Pixeln.
pub const VERTEX_MARKER_RADIUS: f32 = 6.0;

/// Quelle für Fahrstrecken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionsBackend {
    /// OSRM-HTTP-Dienst
    #[default]
    Osrm,
    /// Offline: Großkreis-Linie statt Straßenroute
    GreatCircle,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `triangle_sketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchOptions {
    // ── Skizze ──────────────────────────────────────────────────
    /// Treffer-Radius zum Entfernen eines Eckpunkts (Meter)
    #[serde(default = "default_proximity_threshold_m")]
    pub proximity_threshold_m: f64,

    // ── Routing ─────────────────────────────────────────────────
    /// Routing-Backend
    #[serde(default)]
    pub directions_backend: DirectionsBackend,
    /// Basis-URL des OSRM-Servers
    #[serde(default = "default_osrm_base_url")]
    pub osrm_base_url: String,
    /// HTTP-Timeout pro Anfrage (Sekunden)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Stützpunkte der Großkreis-Route
    #[serde(default = "default_great_circle_segments")]
    pub great_circle_segments: usize,
    /// Verspätete Routen verwerfen, wenn sich die Eckpunkte inzwischen geändert haben
    #[serde(default)]
    pub discard_stale_routes: bool,

    // ── Kamera ──────────────────────────────────────────────────
    /// Start-Mittelpunkt [lat, lon]
    #[serde(default = "default_initial_center")]
    pub initial_center: [f64; 2],
    /// Start-Zoom
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    #[serde(default = "default_scroll_zoom_step")]
    pub scroll_zoom_step: f64,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            proximity_threshold_m: PROXIMITY_THRESHOLD_M,
            directions_backend: DirectionsBackend::default(),
            osrm_base_url: OSRM_BASE_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            great_circle_segments: GREAT_CIRCLE_SEGMENTS,
            discard_stale_routes: false,
            initial_center: INITIAL_CENTER,
            initial_zoom: INITIAL_ZOOM,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
        }
    }
}

fn default_proximity_threshold_m() -> f64 {
    PROXIMITY_THRESHOLD_M
}

fn default_osrm_base_url() -> String {
    OSRM_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}

fn default_great_circle_segments() -> usize {
    GREAT_CIRCLE_SEGMENTS
}

fn default_initial_center() -> [f64; 2] {
    INITIAL_CENTER
}

fn default_initial_zoom() -> f64 {
    INITIAL_ZOOM
}

fn default_scroll_zoom_step() -> f64 {
    SCROLL_ZOOM_STEP
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("triangle_sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("triangle_sketch.toml")
    }

    /// HTTP-Timeout als `Duration`.
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}
