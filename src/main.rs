use clap::Parser;
use log::{debug, error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use sdfmarch::camera::Camera;
use sdfmarch::error::RenderError;
use sdfmarch::output::{save_linear_exr, OutputFormat};
use sdfmarch::scene::Scene;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("sdfmarch - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let Some(format) = OutputFormat::from_path(&args.output) else {
        error!(
            "Unsupported file extension '{}'. Only .png and .exr formats are supported.",
            std::path::Path::new(&args.output).extension().unwrap_or_default().to_string_lossy()
        );
        std::process::exit(1);
    };

    let scene = Scene::default_scene();
    for object in &scene.objects {
        debug!("Scene object: {} at {}", object.shape.name(), object.translation);
    }

    let mut camera = Camera::new(args.render_config());
    camera.show_progress = !args.no_progress;

    let result = render_to_file(&camera, &scene, format, &args.output);
    if let Err(e) = &result {
        error!("{}", e);
    }
    std::process::exit(exit_code(&result));
}

/// Process status for a render outcome.
///
/// A canvas that could not be allocated writes nothing but still exits 0.
fn exit_code(result: &Result<(), RenderError>) -> i32 {
    match result {
        Ok(()) | Err(RenderError::Allocation { .. }) => 0,
        Err(_) => 1,
    }
}

fn render_to_file(camera: &Camera, scene: &Scene, format: OutputFormat, path: &str) -> Result<(), RenderError> {
    match format {
        OutputFormat::Png => {
            let canvas = camera.render(scene)?;
            canvas.save_png(path)
        }
        OutputFormat::Exr => {
            let values = camera.render_linear(scene)?;
            save_linear_exr(&values, path, camera.config.width, camera.config.height)
        }
    }
}
