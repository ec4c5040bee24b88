//! Karten-Rendering mit dem egui-Painter.
//!
//! `MapScene` spiegelt den `RenderCommand`-Strom des Controllers, `paint`
//! zeichnet den gespiegelten Zustand in den Viewport.

mod painter;
mod scene;

pub use crate::shared::RenderScene;
pub use painter::{color32, paint_map};
pub use scene::MapScene;
