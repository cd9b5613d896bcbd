//! Orthographic top-down camera and the per-pixel render loop.

use glam::Vec3A;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::interval::Interval;
use crate::march;
use crate::ray::Ray;
use crate::scene::Sdf;

/// Camera looking straight down at the XZ plane.
///
/// Pixel `(x, y)` shoots a ray from `(x, camera_height, y) - offset`, where the
/// offset centers the canvas on the world origin. No perspective: every ray
/// points along -Y.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Render settings shared with the marchers and shader
    pub config: RenderConfig,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Camera {
    /// Creates a camera for the given settings.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    /// Primary ray through pixel `(x, y)`.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let origin =
            Vec3A::new(x as f32, self.config.camera_height, y as f32) - self.config.camera_offset();
        Ray::new(origin, Vec3A::NEG_Y)
    }

    /// Marching interval used for every primary ray.
    pub fn ray_interval(&self) -> Interval {
        Interval::new(0.0, self.config.max_distance)
    }

    /// Unclamped intensity at pixel `(x, y)`.
    pub fn pixel_intensity(&self, scene: &dyn Sdf, x: u32, y: u32) -> f32 {
        march::trace(scene, &self.get_ray(x, y), self.ray_interval(), &self.config)
    }

    /// Renders the scene into a quantized byte canvas.
    ///
    /// Intensities are clamped to [0, 1], scaled by 255 and truncated.
    pub fn render(&self, scene: &dyn Sdf) -> Result<Canvas, RenderError> {
        let config = &self.config;
        let mut canvas = Canvas::new(config.width, config.height, config.channels)?;

        self.for_each_pixel(scene, |x, y, intensity| canvas.put(x, y, quantize(intensity)));

        Ok(canvas)
    }

    /// Renders the raw intensities, row-major, without clamping.
    pub fn render_linear(&self, scene: &dyn Sdf) -> Result<Vec<f32>, RenderError> {
        let config = &self.config;
        let alloc_error = || RenderError::Allocation {
            width: config.width,
            height: config.height,
            channels: 1,
        };
        let len = (config.width as usize)
            .checked_mul(config.height as usize)
            .ok_or_else(alloc_error)?;

        let mut values = Vec::new();
        values.try_reserve_exact(len).map_err(|_| alloc_error())?;
        values.resize(len, 0.0);

        let width = config.width as usize;
        self.for_each_pixel(scene, |x, y, intensity| {
            values[x as usize + y as usize * width] = intensity;
        });

        Ok(values)
    }

    fn for_each_pixel(&self, scene: &dyn Sdf, mut store: impl FnMut(u32, u32, f32)) {
        let config = &self.config;
        info!("Rendering {}x{} on a single thread...", config.width, config.height);
        debug!("Render settings: {:?}", config);
        let generation_start = std::time::Instant::now();

        let pb = if self.show_progress {
            let pb = ProgressBar::new(config.height as u64);
            if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
                pb.set_style(style);
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        for y in 0..config.height {
            for x in 0..config.width {
                store(x, y, self.pixel_intensity(scene, x, y));
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());
    }
}

/// Map an intensity to a byte: clamp to [0, 1], scale by 255, truncate.
pub fn quantize(intensity: f32) -> u8 {
    (intensity.clamp(0.0, 1.0) * 255.0) as u8
}
