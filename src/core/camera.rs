//! Karten-Kamera für Pan und Zoom (equirektangulare Projektion).

use super::geo::GeoCoord;
use glam::Vec2;

/// Kamera über einer Lat/Lon-Karte.
///
/// Screen-Koordinaten sind relativ zur linken oberen Ecke des Viewports,
/// Y wächst nach unten (Süden).
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Geografischer Mittelpunkt des Viewports
    pub center: GeoCoord,
    /// Zoom-Level (1.0 = BASE_PIXELS_PER_DEGREE)
    pub zoom: f64,
}

impl MapCamera {
    /// Pixel pro Grad bei Zoom 1.0.
    pub const BASE_PIXELS_PER_DEGREE: f64 = 4.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.25;
    /// Maximaler Zoom-Faktor (≈ 400 000 px/°, ein 100-m-Radius ist gut sichtbar).
    pub const ZOOM_MAX: f64 = 100_000.0;

    /// Erstellt eine neue Kamera mit Mittelpunkt und Zoom.
    pub fn new(center: GeoCoord, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Aktuelle Pixel pro Grad.
    pub fn pixels_per_degree(&self) -> f64 {
        Self::BASE_PIXELS_PER_DEGREE * self.zoom
    }

    /// Zentriert die Kamera auf eine Koordinate.
    pub fn look_at(&mut self, target: GeoCoord) {
        self.center = GeoCoord::new(target.lat.clamp(-90.0, 90.0), wrap_longitude(target.lon));
    }

    /// Verschiebt die Kamera um ein Screen-Delta in Pixeln (Karte folgt dem Zeiger).
    pub fn pan(&mut self, delta_px: Vec2) {
        let ppd = self.pixels_per_degree();
        let target = GeoCoord::new(
            self.center.lat + delta_px.y as f64 / ppd,
            self.center.lon - delta_px.x as f64 / ppd,
        );
        self.look_at(target);
    }

    /// Ändert den Zoom-Level.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt so, dass die Koordinate unter `focus_px` an derselben Bildschirmposition bleibt.
    pub fn zoom_towards(&mut self, factor: f64, focus_px: Vec2, viewport_size: Vec2) {
        let anchor = self.screen_to_geo(focus_px, viewport_size);
        self.zoom_by(factor);

        let ppd = self.pixels_per_degree();
        let offset = focus_px - viewport_size * 0.5;
        self.look_at(GeoCoord::new(
            anchor.lat + offset.y as f64 / ppd,
            anchor.lon - offset.x as f64 / ppd,
        ));
    }

    /// Konvertiert Screen-Koordinaten zu einer geografischen Koordinate.
    pub fn screen_to_geo(&self, screen_pos: Vec2, viewport_size: Vec2) -> GeoCoord {
        let ppd = self.pixels_per_degree();
        let offset = screen_pos - viewport_size * 0.5;
        GeoCoord::new(
            (self.center.lat - offset.y as f64 / ppd).clamp(-90.0, 90.0),
            wrap_longitude(self.center.lon + offset.x as f64 / ppd),
        )
    }

    /// Konvertiert eine geografische Koordinate zu Screen-Koordinaten.
    ///
    /// Die Längendifferenz zum Mittelpunkt wird auf den kürzeren Weg über
    /// die Datumsgrenze normalisiert.
    pub fn geo_to_screen(&self, coord: GeoCoord, viewport_size: Vec2) -> Vec2 {
        let ppd = self.pixels_per_degree();
        let dx = wrap_longitude(coord.lon - self.center.lon) * ppd;
        let dy = (self.center.lat - coord.lat) * ppd;
        viewport_size * 0.5 + Vec2::new(dx as f32, dy as f32)
    }

    /// Projiziert einen Linienzug zusammenhängend.
    ///
    /// Nur der erste Punkt wird relativ zum Mittelpunkt normalisiert; jeder
    /// weitere folgt seinem Vorgänger auf dem kürzeren Weg, sodass Kanten
    /// über die Datumsgrenze nicht quer über die Welt gezeichnet werden.
    pub fn geo_path_to_screen(&self, path: &[GeoCoord], viewport_size: Vec2) -> Vec<Vec2> {
        let Some((first, rest)) = path.split_first() else {
            return Vec::new();
        };

        let ppd = self.pixels_per_degree();
        let origin = self.geo_to_screen(*first, viewport_size);
        let mut points = Vec::with_capacity(path.len());
        points.push(origin);

        let mut prev_lon = first.lon;
        let mut unwrapped_lon = first.lon;
        for coord in rest {
            unwrapped_lon += wrap_longitude(coord.lon - prev_lon);
            prev_lon = coord.lon;
            let dx = (unwrapped_lon - first.lon) * ppd;
            let dy = (first.lat - coord.lat) * ppd;
            points.push(origin + Vec2::new(dx as f32, dy as f32));
        }
        points
    }

    /// Sichtbarer Bereich als (Süd-West, Nord-Ost).
    pub fn visible_bounds(&self, viewport_size: Vec2) -> (GeoCoord, GeoCoord) {
        let ppd = self.pixels_per_degree();
        let half_lat = viewport_size.y as f64 * 0.5 / ppd;
        let half_lon = viewport_size.x as f64 * 0.5 / ppd;
        (
            GeoCoord::new(self.center.lat - half_lat, self.center.lon - half_lon),
            GeoCoord::new(self.center.lat + half_lat, self.center.lon + half_lon),
        )
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(GeoCoord::new(0.0, 0.0), 1.0)
    }
}

/// Normalisiert einen Längengrad auf `[-180, 180)`.
pub fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_screen_center_is_camera_center() {
        let camera = MapCamera::new(GeoCoord::new(10.0, 20.0), 1.0);
        let geo = camera.screen_to_geo(Vec2::new(400.0, 300.0), VIEWPORT);
        assert_relative_eq!(geo.lat, 10.0, epsilon = 1e-9);
        assert_relative_eq!(geo.lon, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_screen_down_is_south() {
        let camera = MapCamera::new(GeoCoord::new(0.0, 0.0), 1.0);
        let geo = camera.screen_to_geo(Vec2::new(400.0, 340.0), VIEWPORT);
        // 40 px bei 4 px/° = 10°
        assert_relative_eq!(geo.lat, -10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_geo_to_screen_inverts_screen_to_geo() {
        let camera = MapCamera::new(GeoCoord::new(45.0, 7.0), 250.0);
        let screen = Vec2::new(123.0, 456.0);
        let geo = camera.screen_to_geo(screen, VIEWPORT);
        let back = camera.geo_to_screen(geo, VIEWPORT);
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-2);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-2);
    }

    #[test]
    fn test_round_trip_across_dateline() {
        let camera = MapCamera::new(GeoCoord::new(0.0, 179.9), 1.0);
        let screen = Vec2::new(440.0, 300.0);

        let geo = camera.screen_to_geo(screen, VIEWPORT);
        assert_relative_eq!(geo.lon, -170.1, epsilon = 1e-6);

        let back = camera.geo_to_screen(geo, VIEWPORT);
        assert_relative_eq!(back.x, 440.0, epsilon = 1e-2);
        assert_relative_eq!(back.y, 300.0, epsilon = 1e-2);
    }

    #[test]
    fn test_path_across_dateline_takes_short_way() {
        let camera = MapCamera::new(GeoCoord::new(0.0, 180.0), 1.0);
        let path = [GeoCoord::new(0.0, 179.0), GeoCoord::new(0.0, -170.0)];

        let points = camera.geo_path_to_screen(&path, VIEWPORT);

        assert_eq!(points.len(), 2);
        // 179° → 190° sind 11° nach Osten, also 44 px
        assert_relative_eq!(points[0].x, 396.0, epsilon = 1e-2);
        assert_relative_eq!(points[1].x - points[0].x, 44.0, epsilon = 1e-2);
    }

    #[test]
    fn test_path_of_empty_slice_is_empty() {
        let camera = MapCamera::default();
        assert!(camera.geo_path_to_screen(&[], VIEWPORT).is_empty());
    }

    #[test]
    fn test_camera_zoom_is_clamped() {
        let mut camera = MapCamera::default();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);
        camera.zoom_by(1e-6);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MIN);
        camera.zoom_by(1e12);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MAX);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_fixed() {
        let mut camera = MapCamera::new(GeoCoord::new(10.0, 10.0), 10.0);
        let focus = Vec2::new(600.0, 150.0);
        let before = camera.screen_to_geo(focus, VIEWPORT);
        camera.zoom_towards(3.0, focus, VIEWPORT);
        let after = camera.screen_to_geo(focus, VIEWPORT);
        assert_relative_eq!(before.lat, after.lat, epsilon = 1e-9);
        assert_relative_eq!(before.lon, after.lon, epsilon = 1e-9);
    }

    #[test]
    fn test_pan_moves_map_with_pointer() {
        let mut camera = MapCamera::new(GeoCoord::new(0.0, 0.0), 1.0);
        camera.pan(Vec2::new(40.0, 0.0));
        // Zeiger nach rechts → Mittelpunkt wandert nach Westen
        assert_relative_eq!(camera.center.lon, -10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_wrap_longitude() {
        assert_relative_eq!(wrap_longitude(190.0), -170.0);
        assert_relative_eq!(wrap_longitude(-190.0), 170.0);
        assert_relative_eq!(wrap_longitude(45.0), 45.0);
    }
}
