//! Typed error types for codeshot-render.

use thiserror::Error;

/// Failure of a render pass.
///
/// Color resolution and layout are total, so the only thing that can fail
/// is turning the painted canvas into bytes.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The canvas could not be PNG-encoded or the bytes could not be written
    /// to the sink.
    #[error("PNG encoding failed: {0}")]
    EncodingFailure(#[from] image::ImageError),
}
