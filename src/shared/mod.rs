//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `routing` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_command;
mod render_scene;

pub use options::{DirectionsBackend, SketchOptions, PROXIMITY_THRESHOLD_M};
pub use render_command::{
    Annotation, AnnotationId, Overlay, OverlayId, OverlayKind, RenderCommand, RenderOutbox,
};
pub use render_scene::RenderScene;
