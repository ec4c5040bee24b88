//! Triangle Sketch Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod routing;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, TapAction, ViewState};
pub use core::{Edge, GeoCoord, MapCamera, Vertex, VertexId, VertexSet, MAX_VERTICES};
pub use render::MapScene;
pub use routing::{
    DirectionsError, DirectionsProvider, GreatCircleDirections, OsrmDirections, Route,
    RouteRequest, RouteResponse, RouteWorker, TransportType,
};
pub use shared::{RenderCommand, RenderScene, SketchOptions};
