use clap::{Parser, ValueEnum};
use log::LevelFilter;

use sdfmarch::config::{DotMode, RenderConfig};

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
///
/// Running without arguments renders the default 512x512 scene to
/// `result.png`.
#[derive(Parser)]
#[command(name = "sdfmarch")]
#[command(about = "Ray marches a signed distance field scene into a grayscale image")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "512", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "512", help = "Image height in pixels")]
    pub height: u32,

    /// Maximum marching steps per ray
    #[arg(long, default_value = "1024", help = "Maximum marching steps per ray")]
    pub max_steps: u32,

    /// Clamp negative dot products in the shading equation
    #[arg(long, help = "Clamp negative dot products in the shading equation")]
    pub clamp_dots: bool,

    /// Hide the progress bar
    #[arg(long, help = "Hide the progress bar")]
    pub no_progress: bool,

    /// Output file path (.png for 8-bit grayscale, .exr for linear HDR)
    #[arg(short, long, default_value = "result.png", help = "Output file path (.png for 8-bit grayscale, .exr for linear HDR)")]
    pub output: String,
}

impl Args {
    /// Default render settings with the command line overrides applied.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            max_steps: self.max_steps,
            dot_mode: if self.clamp_dots { DotMode::Clamped } else { DotMode::Unclamped },
            ..RenderConfig::default()
        }
    }
}
