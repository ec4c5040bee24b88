//! Geografische Koordinaten und Geodäsie (Haversine, Mittelpunkt, Label-Format).

use serde::{Deserialize, Serialize};

/// Mittlerer Erdradius in Metern (Kugelmodell).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geografische Koordinate in Grad (WGS-84).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoord {
    /// Breitengrad in Grad (-90..=90)
    pub lat: f64,
    /// Längengrad in Grad (-180..=180)
    pub lon: f64,
}

impl GeoCoord {
    /// Erstellt eine neue Koordinate.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Großkreis-Distanz zu `other` in Metern.
    pub fn distance_to(&self, other: &GeoCoord) -> f64 {
        haversine_distance_m(*self, *other)
    }

    /// Lineare Interpolation in Grad-Koordinaten (`t` = 0.0 → self, 1.0 → other).
    pub fn lerp(&self, other: &GeoCoord, t: f64) -> GeoCoord {
        GeoCoord {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }
}

impl From<[f64; 2]> for GeoCoord {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

/// Großkreis-Distanz zweier Koordinaten in Metern (Haversine-Formel).
///
/// Wird sowohl für die Treffer-Prüfung beim Tippen als auch für die
/// Kantenlängen verwendet, damit beide Werte konsistent bleiben.
pub fn haversine_distance_m(a: GeoCoord, b: GeoCoord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Planarer Mittelpunkt: arithmetisches Mittel von Breite und Länge.
///
/// Kein echter geodätischer Mittelpunkt, bei kleinen Dreiecken ausreichend.
pub fn planar_midpoint(a: GeoCoord, b: GeoCoord) -> GeoCoord {
    GeoCoord {
        lat: (a.lat + b.lat) / 2.0,
        lon: (a.lon + b.lon) / 2.0,
    }
}

/// Formatiert eine Distanz in Metern als Kilometer-Label mit zwei Nachkommastellen.
pub fn format_km_label(distance_m: f64) -> String {
    format!("{:.2} km", distance_m / 1000.0)
}

/// Punkt auf dem Großkreis zwischen `a` und `b` (sphärische Interpolation).
///
/// Bei (nahezu) identischen oder antipodalen Punkten ist der Großkreis nicht
/// eindeutig; dann wird linear in Grad interpoliert.
pub fn great_circle_interpolate(a: GeoCoord, b: GeoCoord, t: f64) -> GeoCoord {
    let (lat1, lon1) = (a.lat.to_radians(), a.lon.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lon.to_radians());

    let delta = haversine_distance_m(a, b) / EARTH_RADIUS_M;
    let sin_delta = delta.sin();
    if sin_delta.abs() < 1e-12 {
        return a.lerp(&b, t);
    }
    let f_a = ((1.0 - t) * delta).sin() / sin_delta;
    let f_b = (t * delta).sin() / sin_delta;

    let x = f_a * lat1.cos() * lon1.cos() + f_b * lat2.cos() * lon2.cos();
    let y = f_a * lat1.cos() * lon1.sin() + f_b * lat2.cos() * lon2.sin();
    let z = f_a * lat1.sin() + f_b * lat2.sin();

    GeoCoord {
        lat: z.atan2((x * x + y * y).sqrt()).to_degrees(),
        lon: y.atan2(x).to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_of_identical_points_is_zero() {
        let p = GeoCoord::new(48.1, 11.5);
        assert_relative_eq!(haversine_distance_m(p, p), 0.0);
    }

    #[test]
    fn hundredth_degree_on_equator_is_about_1112_m() {
        let a = GeoCoord::new(0.0, 0.0);
        let b = GeoCoord::new(0.0, 0.01);
        let d = a.distance_to(&b);
        assert_relative_eq!(d, 1111.95, epsilon = 0.05);
        assert_eq!(format_km_label(d), "1.11 km");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoCoord::new(10.0, 10.0);
        let b = GeoCoord::new(30.0, 10.0);
        assert_relative_eq!(a.distance_to(&b), b.distance_to(&a), epsilon = 1e-9);
    }

    #[test]
    fn small_longitude_offset_at_ten_degrees_is_below_100_m() {
        let a = GeoCoord::new(10.0, 10.0);
        let b = GeoCoord::new(10.0, 10.0008);
        let d = a.distance_to(&b);
        assert!(d > 80.0 && d < 100.0, "d = {d}");
    }

    #[test]
    fn midpoint_is_componentwise_mean() {
        let m = planar_midpoint(GeoCoord::new(10.0, 20.0), GeoCoord::new(30.0, -10.0));
        assert_relative_eq!(m.lat, 20.0);
        assert_relative_eq!(m.lon, 5.0);
    }

    #[test]
    fn km_label_rounds_to_two_decimals() {
        assert_eq!(format_km_label(12_344.9), "12.34 km");
        assert_eq!(format_km_label(12_345.1), "12.35 km");
        assert_eq!(format_km_label(0.0), "0.00 km");
    }

    #[test]
    fn great_circle_interpolation_hits_endpoints() {
        let a = GeoCoord::new(10.0, 10.0);
        let b = GeoCoord::new(20.0, 20.0);
        let start = great_circle_interpolate(a, b, 0.0);
        let end = great_circle_interpolate(a, b, 1.0);
        assert_relative_eq!(start.lat, a.lat, epsilon = 1e-9);
        assert_relative_eq!(start.lon, a.lon, epsilon = 1e-9);
        assert_relative_eq!(end.lat, b.lat, epsilon = 1e-9);
        assert_relative_eq!(end.lon, b.lon, epsilon = 1e-9);
    }

    #[test]
    fn great_circle_between_antipodes_falls_back_to_linear() {
        let a = GeoCoord::new(0.0, 0.0);
        let b = GeoCoord::new(0.0, 180.0);
        let mid = great_circle_interpolate(a, b, 0.5);
        assert!(mid.lat.is_finite() && mid.lon.is_finite());
        assert_relative_eq!(mid.lat, 0.0);
        assert_relative_eq!(mid.lon, 90.0);
    }

    #[test]
    fn great_circle_midpoint_on_equator_stays_on_equator() {
        let mid = great_circle_interpolate(GeoCoord::new(0.0, 0.0), GeoCoord::new(0.0, 20.0), 0.5);
        assert_relative_eq!(mid.lat, 0.0, epsilon = 1e-9);
        assert_relative_eq!(mid.lon, 10.0, epsilon = 1e-9);
    }
}
