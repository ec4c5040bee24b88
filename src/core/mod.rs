//! Core-Domänentypen: Koordinaten, Geodäsie, Eckpunkt-Menge, Dreieck, Kamera.

pub mod camera;
pub mod geo;
pub mod triangle;
pub mod vertex_set;

pub use camera::{wrap_longitude, MapCamera};
pub use geo::{
    format_km_label, great_circle_interpolate, haversine_distance_m, planar_midpoint, GeoCoord,
    EARTH_RADIUS_M,
};
pub use triangle::{derive_edges, directed_edges, perimeter_m, Edge};
pub use vertex_set::{Vertex, VertexId, VertexSet, MAX_VERTICES};
