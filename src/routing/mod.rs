//! Routing: Fahrstrecken-Anfragen, Antworten und austauschbare Anbieter.
//!
//! Der Controller erzeugt nur `RouteRequest`s; ausgeführt werden sie vom
//! `RouteWorker` außerhalb des UI-Threads. Antworten kommen als
//! `RouteResponse` über die Intent-Schleife zurück.

mod great_circle;
mod osrm;
mod worker;

pub use great_circle::GreatCircleDirections;
pub use osrm::{parse_osrm_response, OsrmDirections};
pub use worker::RouteWorker;

use crate::core::GeoCoord;
use crate::shared::{DirectionsBackend, SketchOptions};
use std::sync::Arc;

/// Fortbewegungsart einer Routen-Anfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportType {
    /// Auto (Dreiecks-Routen werden immer als Fahrstrecke angefragt)
    #[default]
    Automobile,
}

/// Eine Routen-Anfrage für eine gerichtete Dreieckskante.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Fortlaufende ID der Anfrage
    pub request_id: u64,
    /// Generation der Eckpunkt-Menge beim Abschicken
    pub generation: u64,
    /// Index der Kante (0..3)
    pub edge_index: usize,
    /// Start-Eckpunkt
    pub source: GeoCoord,
    /// Ziel-Eckpunkt
    pub destination: GeoCoord,
    pub transport: TransportType,
}

/// Eine Kandidaten-Route.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Linienzug der Strecke
    pub path: Vec<GeoCoord>,
    /// Streckenlänge in Metern
    pub distance_m: f64,
    /// Fahrzeit in Sekunden
    pub duration_s: f64,
}

/// Antwort auf eine `RouteRequest` (null oder mehr Kandidaten oder Fehler).
#[derive(Debug, Clone)]
pub struct RouteResponse {
    pub request: RouteRequest,
    pub result: Result<Vec<Route>, DirectionsError>,
}

impl RouteResponse {
    /// Erste Kandidaten-Route, falls die Anfrage erfolgreich und nicht leer war.
    pub fn first_route(&self) -> Option<&Route> {
        self.result.as_ref().ok().and_then(|routes| routes.first())
    }
}

/// Fehler eines Routing-Anbieters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DirectionsError {
    #[error("HTTP-Fehler: {0}")]
    Http(String),

    #[error("Server antwortete mit Status {0}")]
    Status(u16),

    #[error("Antwort nicht lesbar: {0}")]
    Decode(String),

    #[error("Routing-Dienst meldet {code}: {message}")]
    Service { code: String, message: String },

    #[error("Worker konnte nicht gestartet werden: {0}")]
    Worker(String),
}

impl From<reqwest::Error> for DirectionsError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<serde_json::Error> for DirectionsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Externer Richtungsdienst: berechnet Routen zwischen zwei Koordinaten.
///
/// Implementierungen blockieren; sie werden vom `RouteWorker` in eigenen
/// Threads aufgerufen.
pub trait DirectionsProvider: Send + Sync {
    /// Kurzname für Logs.
    fn name(&self) -> &'static str;

    /// Berechnet null oder mehr Kandidaten-Routen für die Anfrage.
    fn calculate(&self, request: &RouteRequest) -> Result<Vec<Route>, DirectionsError>;
}

/// Baut den konfigurierten Routing-Anbieter.
pub fn build_provider(options: &SketchOptions) -> anyhow::Result<Arc<dyn DirectionsProvider>> {
    let provider: Arc<dyn DirectionsProvider> = match options.directions_backend {
        DirectionsBackend::Osrm => Arc::new(OsrmDirections::new(
            &options.osrm_base_url,
            options.request_timeout(),
        )?),
        DirectionsBackend::GreatCircle => {
            Arc::new(GreatCircleDirections::new(options.great_circle_segments))
        }
    };
    log::info!("Routing-Anbieter: {}", provider.name());
    Ok(provider)
}
