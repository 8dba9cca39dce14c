//! Renderer error taxonomy

use thiserror::Error;

/// Errors surfaced by the renderer.
///
/// Shader errors are fatal to the renderer instance. `ContextLost` is
/// recoverable: the host drops this renderer and creates a new one on the
/// next surface event. Nothing is retried automatically beyond the single
/// surface reconfigure in the frame path.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Shader compile error: {0}")]
    ShaderCompile(String),

    #[error("Shader link error: {0}")]
    ShaderLink(String),

    #[error("Graphics context lost")]
    ContextLost,

    #[error("Graphics initialization failed: {0}")]
    Init(#[from] anyhow::Error),
}
