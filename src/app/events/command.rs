use crate::core::GeoCoord;
use crate::routing::RouteResponse;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Eckpunkt anhängen und Marker setzen
    AddVertex { coord: GeoCoord },
    /// Eckpunkt am Index entfernen (leert alle abgeleiteten Overlays)
    RemoveVertexAt { index: usize },
    /// Kanten, Labels und Dreieck neu ableiten
    DeriveTriangle,
    /// Alle abgeleiteten Overlays entfernen
    ClearOverlays,
    /// Routen-Anfragen für alle drei Kanten einreihen
    RequestRouteOverlays,
    /// Routen-Antwort als Overlay übernehmen
    ApplyRouteResponse { response: RouteResponse },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Screen-Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera auf Fokuspunkt zoomen
    ZoomCamera { factor: f64, focus: glam::Vec2 },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Anwendung beenden
    RequestExit,
}
