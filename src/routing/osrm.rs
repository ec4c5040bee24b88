//! OSRM-HTTP-Anbieter (`/route/v1/{profile}/...`, GeoJSON-Geometrie).

use super::{DirectionsError, DirectionsProvider, Route, RouteRequest, TransportType};
use crate::core::GeoCoord;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// GeoJSON-Reihenfolge: [lon, lat]
    coordinates: Vec<[f64; 2]>,
}

/// Routing über einen OSRM-Server.
pub struct OsrmDirections {
    client: Client,
    base_url: String,
}

impl OsrmDirections {
    /// Erstellt einen Client mit Request-Timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DirectionsError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("TriangleSketch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Baut die Anfrage-URL. OSRM erwartet `lon,lat`.
    pub fn route_url(&self, request: &RouteRequest) -> String {
        let profile = match request.transport {
            TransportType::Automobile => "driving",
        };
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.base_url,
            profile,
            request.source.lon,
            request.source.lat,
            request.destination.lon,
            request.destination.lat,
        )
    }
}

impl DirectionsProvider for OsrmDirections {
    fn name(&self) -> &'static str {
        "osrm"
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Vec<Route>, DirectionsError> {
        let url = self.route_url(request);
        log::debug!("OSRM-Anfrage #{}: {}", request.request_id, url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;

        // OSRM liefert auch bei 400 einen JSON-Body mit `code`
        match parse_osrm_response(&body) {
            Err(DirectionsError::Decode(_)) if !status.is_success() => {
                Err(DirectionsError::Status(status.as_u16()))
            }
            other => other,
        }
    }
}

/// Parst eine OSRM-Route-Antwort.
///
/// `NoRoute` zählt als leeres Ergebnis, andere Codes als Dienst-Fehler.
pub fn parse_osrm_response(body: &str) -> Result<Vec<Route>, DirectionsError> {
    let OsrmResponse {
        code,
        message,
        routes,
    } = serde_json::from_str(body)?;

    match code.as_str() {
        "Ok" => Ok(routes
            .into_iter()
            .map(|r| Route {
                path: r
                    .geometry
                    .coordinates
                    .into_iter()
                    .map(|[lon, lat]| GeoCoord::new(lat, lon))
                    .collect(),
                distance_m: r.distance,
                duration_s: r.duration,
            })
            .collect()),
        "NoRoute" => Ok(Vec::new()),
        _ => Err(DirectionsError::Service {
            code: code.clone(),
            message: message.unwrap_or_default(),
        }),
    }
}
