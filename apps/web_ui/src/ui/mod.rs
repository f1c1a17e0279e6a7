//! UI layer: renders the session to an HTML page.

pub mod render;

pub use render::PageRenderer;
