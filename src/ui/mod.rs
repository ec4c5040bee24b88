//! UI-Komponenten: Toolbar, Status-Bar, Viewport-Input.

pub mod input;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
