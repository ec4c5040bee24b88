//! Ableitung der Dreieckskanten (Länge, Mittelpunkt, Label) aus drei Eckpunkten.

use super::geo::{format_km_label, haversine_distance_m, planar_midpoint, GeoCoord};

/// Eine abgeleitete Dreieckskante `vertex[i] → vertex[(i+1) % 3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Index der Kante (0..3), identisch mit dem Index des Start-Eckpunkts
    pub index: usize,
    /// Start-Koordinate
    pub from: GeoCoord,
    /// End-Koordinate
    pub to: GeoCoord,
    /// Großkreis-Länge in Metern
    pub length_m: f64,
    /// Planarer Mittelpunkt (Label-Position)
    pub midpoint: GeoCoord,
    /// Label-Text, z.B. "12.34 km"
    pub label: String,
}

impl Edge {
    fn between(index: usize, from: GeoCoord, to: GeoCoord) -> Self {
        let length_m = haversine_distance_m(from, to);
        Self {
            index,
            from,
            to,
            length_m,
            midpoint: planar_midpoint(from, to),
            label: format_km_label(length_m),
        }
    }
}

/// Gerichtete Eckpunkt-Paare in zyklischer Reihenfolge `(0,1), (1,2), (2,0)`.
pub fn directed_edges(vertices: &[GeoCoord; 3]) -> [(GeoCoord, GeoCoord); 3] {
    std::array::from_fn(|i| (vertices[i], vertices[(i + 1) % 3]))
}

/// Leitet die drei Kanten eines Dreiecks in zyklischer Reihenfolge ab.
pub fn derive_edges(vertices: &[GeoCoord; 3]) -> [Edge; 3] {
    let pairs = directed_edges(vertices);
    std::array::from_fn(|i| Edge::between(i, pairs[i].0, pairs[i].1))
}

/// Umfang des Dreiecks in Metern.
pub fn perimeter_m(edges: &[Edge; 3]) -> f64 {
    edges.iter().map(|e| e.length_m).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> [GeoCoord; 3] {
        [
            GeoCoord::new(10.0, 10.0),
            GeoCoord::new(20.0, 20.0),
            GeoCoord::new(30.0, 10.0),
        ]
    }

    #[test]
    fn edges_follow_cyclic_order() {
        let v = sample();
        let edges = derive_edges(&v);
        assert_eq!(edges[0].from, v[0]);
        assert_eq!(edges[0].to, v[1]);
        assert_eq!(edges[1].from, v[1]);
        assert_eq!(edges[1].to, v[2]);
        assert_eq!(edges[2].from, v[2]);
        assert_eq!(edges[2].to, v[0]);
    }

    #[test]
    fn edge_label_matches_haversine_length() {
        let v = [
            GeoCoord::new(0.0, 0.0),
            GeoCoord::new(0.0, 0.01),
            GeoCoord::new(0.01, 0.0),
        ];
        let edges = derive_edges(&v);
        assert_eq!(edges[0].label, "1.11 km");
        assert_relative_eq!(edges[0].length_m, haversine_distance_m(v[0], v[1]));
    }

    #[test]
    fn edge_midpoint_is_componentwise_mean() {
        let edges = derive_edges(&sample());
        assert_relative_eq!(edges[1].midpoint.lat, 25.0);
        assert_relative_eq!(edges[1].midpoint.lon, 15.0);
    }

    #[test]
    fn perimeter_sums_edge_lengths() {
        let edges = derive_edges(&sample());
        let expected = edges[0].length_m + edges[1].length_m + edges[2].length_m;
        assert_relative_eq!(perimeter_m(&edges), expected);
    }
}
