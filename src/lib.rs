//! Spincube library
//!
//! Exposes internal modules for testing and integration.

pub mod app;
pub mod graphics;

// Re-export commonly used types for tests
pub use graphics::scene::CubeScene;
pub use graphics::RenderError;
