use crate::core::GeoCoord;
use crate::routing::RouteResponse;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Karte angetippt (Koordinate bereits aus Screen-Position projiziert)
    MapTapped { coord: GeoCoord },
    /// "Routen anzeigen" gedrückt
    ShowRoutesRequested,
    /// Antwort des Richtungsdienstes eingetroffen
    RouteResponseReceived { response: RouteResponse },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um ein Screen-Delta (Pixel) verschieben
    CameraPan { delta: glam::Vec2 },
    /// Karte zoomen, Fokus in Screen-Pixeln
    CameraZoom { factor: f64, focus: glam::Vec2 },
    /// Kamera auf Start-Ansicht zurücksetzen
    ResetCameraRequested,
    /// Anwendung beenden
    ExitRequested,
}
