use sdfmarch::camera::Camera;
use sdfmarch::config::RenderConfig;
use sdfmarch::output::save_linear_exr;
use sdfmarch::scene::Scene;

fn small_camera() -> Camera {
    Camera::new(RenderConfig { width: 32, height: 24, ..Default::default() })
}

#[test]
fn png_round_trips_through_decoder() {
    let scene = Scene::default_scene();
    let canvas = small_camera().render(&scene).unwrap();

    let path = std::env::temp_dir().join(format!("sdfmarch_roundtrip_{}.png", std::process::id()));
    canvas.save_png(&path).unwrap();

    let decoded = image::open(&path).unwrap().into_luma8();
    assert_eq!(decoded.dimensions(), (32, 24));
    assert_eq!(decoded.as_raw().as_slice(), canvas.as_bytes());

    std::fs::remove_file(&path).ok();
}

#[test]
fn exr_file_is_written() {
    let scene = Scene::default_scene();
    let camera = small_camera();
    let values = camera.render_linear(&scene).unwrap();

    let path = std::env::temp_dir().join(format!("sdfmarch_linear_{}.exr", std::process::id()));
    save_linear_exr(&values, &path, 32, 24).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);

    std::fs::remove_file(&path).ok();
}
