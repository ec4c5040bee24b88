//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod routing;
pub mod sketch;

pub use sketch::TapAction;
