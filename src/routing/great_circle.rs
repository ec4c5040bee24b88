//! Offline-Anbieter: Großkreis-Linie statt Straßenroute.

use super::{DirectionsError, DirectionsProvider, Route, RouteRequest, TransportType};
use crate::core::{great_circle_interpolate, haversine_distance_m};

/// Angenommene Durchschnittsgeschwindigkeit Auto (m/s).
const DRIVING_SPEED_MPS: f64 = 13.9;

/// Liefert genau eine Route entlang des Großkreises.
#[derive(Debug, Clone)]
pub struct GreatCircleDirections {
    segments: usize,
}

impl GreatCircleDirections {
    /// `segments` wird auf mindestens 1 angehoben.
    pub fn new(segments: usize) -> Self {
        Self {
            segments: segments.max(1),
        }
    }
}

impl DirectionsProvider for GreatCircleDirections {
    fn name(&self) -> &'static str {
        "great_circle"
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Vec<Route>, DirectionsError> {
        let path = (0..=self.segments)
            .map(|i| {
                let t = i as f64 / self.segments as f64;
                great_circle_interpolate(request.source, request.destination, t)
            })
            .collect();

        let distance_m = haversine_distance_m(request.source, request.destination);
        let speed = match request.transport {
            TransportType::Automobile => DRIVING_SPEED_MPS,
        };

        Ok(vec![Route {
            path,
            distance_m,
            duration_s: distance_m / speed,
        }])
    }
}
