//! Error type shared by the canvas, camera and output code.

use thiserror::Error;

/// Failures that can stop a render from reaching disk.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The pixel buffer could not be allocated, or its size overflows.
    #[error("failed to allocate a {width}x{height}x{channels} pixel buffer")]
    Allocation {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested bytes per pixel
        channels: u32,
    },

    /// Buffer layout does not match what the encoder was asked to write.
    #[error("invalid image layout: {0}")]
    Dimensions(String),

    /// PNG encoding or file I/O failed.
    #[error("failed to write PNG: {0}")]
    Png(#[from] image::ImageError),

    /// EXR encoding or file I/O failed.
    #[error("failed to write EXR: {0}")]
    Exr(#[from] exr::error::Error),
}
