//! # Output Module
//!
//! Writes rendered frames to disk:
//! - PNG: 8-bit quantized canvas, see [`Canvas::save_png`](crate::canvas::Canvas::save_png)
//! - EXR: linear 32-bit float intensities, values outside [0, 1] kept
//!
//! The target format is picked from the file extension.

use std::path::Path;

use exr::prelude::write_rgb_file;
use log::info;

use crate::error::RenderError;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 8-bit PNG of the clamped canvas
    Png,
    /// OpenEXR of the raw intensities
    Exr,
}

impl OutputFormat {
    /// Pick the format from a path's extension, case-insensitive.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "exr" => Some(OutputFormat::Exr),
            _ => None,
        }
    }
}

/// Save row-major linear intensities as a grayscale EXR.
///
/// The single intensity channel is written to R, G and B so common viewers
/// show it as gray.
pub fn save_linear_exr<P: AsRef<Path>>(
    values: &[f32],
    path: P,
    width: u32,
    height: u32,
) -> Result<(), RenderError> {
    let expected = width as usize * height as usize;
    if values.len() != expected {
        return Err(RenderError::Dimensions(format!(
            "expected {expected} intensities for {width}x{height}, got {}",
            values.len()
        )));
    }

    write_rgb_file(path.as_ref(), width as usize, height as usize, |x, y| {
        let v = values[y * width as usize + x];
        (v, v, v)
    })?;

    info!("HDR image saved as EXR: {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(OutputFormat::from_path("result.png"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path("out/Render.EXR"), Some(OutputFormat::Exr));
        assert_eq!(OutputFormat::from_path("result.jpg"), None);
        assert_eq!(OutputFormat::from_path("result"), None);
    }

    #[test]
    fn exr_rejects_short_buffer() {
        let path = std::env::temp_dir().join("sdfmarch_short.exr");
        let err = save_linear_exr(&[0.0; 3], &path, 2, 2).unwrap_err();
        assert!(matches!(err, RenderError::Dimensions(_)));
    }
}
