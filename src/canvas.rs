//! Byte pixel buffer handed from the camera to the encoder.

use std::path::Path;

use image::ExtendedColorType;
use log::info;

use crate::error::RenderError;

/// Row-major `width * height * channels` byte image.
///
/// Allocation is fallible; the buffer is released when the canvas drops,
/// whichever path the caller takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a zeroed canvas.
    ///
    /// Fails with [`RenderError::Allocation`] when the byte size overflows or
    /// the allocator refuses the request.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self, RenderError> {
        let alloc_error = || RenderError::Allocation { width, height, channels };

        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels as usize))
            .ok_or_else(alloc_error)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| alloc_error())?;
        data.resize(len, 0);

        Ok(Self { width, height, channels, data })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Raw pixel bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Write the same value to every channel of pixel `(x, y)`.
    pub fn put(&mut self, x: u32, y: u32, value: u8) {
        let start = self.offset(x, y);
        let end = start + self.channels as usize;
        self.data[start..end].fill(value);
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        x as usize * self.channels as usize + y as usize * self.stride()
    }

    /// Encode the canvas as PNG with a row stride of `width * channels`.
    ///
    /// 1 to 4 channels map to L8, La8, Rgb8 and Rgba8.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let color = match self.channels {
            1 => ExtendedColorType::L8,
            2 => ExtendedColorType::La8,
            3 => ExtendedColorType::Rgb8,
            4 => ExtendedColorType::Rgba8,
            n => {
                return Err(RenderError::Dimensions(format!(
                    "PNG supports 1 to 4 channels, got {n}"
                )))
            }
        };

        image::save_buffer_with_format(
            path.as_ref(),
            &self.data,
            self.width,
            self.height,
            color,
            image::ImageFormat::Png,
        )?;
        info!("Image saved as {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_black() {
        let canvas = Canvas::new(4, 3, 1).unwrap();
        assert_eq!(canvas.as_bytes().len(), 12);
        assert_eq!(canvas.stride(), 4);
        assert!(canvas.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn put_is_row_major() {
        let mut canvas = Canvas::new(4, 3, 1).unwrap();
        canvas.put(1, 2, 200);
        assert_eq!(canvas.as_bytes()[1 + 2 * 4], 200);

    }

    #[test]
    fn put_fills_every_channel() {
        let mut canvas = Canvas::new(2, 2, 3).unwrap();
        canvas.put(1, 1, 7);
        assert_eq!(canvas.stride(), 6);
        assert_eq!(&canvas.as_bytes()[9..12], &[7, 7, 7]);
        assert_eq!(&canvas.as_bytes()[6..9], &[0, 0, 0]);
    }

    #[test]
    fn oversized_canvas_fails_cleanly() {
        let err = Canvas::new(u32::MAX, u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Allocation { width: u32::MAX, height: u32::MAX, channels: u32::MAX }
        ));
    }

    #[test]
    fn png_rejects_unknown_channel_count() {
        let canvas = Canvas::new(2, 2, 5).unwrap();
        let path = std::env::temp_dir().join("sdfmarch_five_channels.png");
        assert!(matches!(canvas.save_png(&path), Err(RenderError::Dimensions(_))));
    }
}
