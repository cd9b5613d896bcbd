//! Blinn-Phong style local lighting for marched hits.
//!
//! One point light, diffuse plus specular terms, linear distance falloff and
//! a soft shadow ray towards the light.

use glam::Vec3A;

use crate::config::RenderConfig;
use crate::interval::Interval;
use crate::march::{estimate_normal, soft_shadow, Hit};
use crate::ray::Ray;
use crate::scene::Sdf;

/// Diffuse plus specular response for unit normal `n`, light vector `l` and
/// view vector `v`.
///
/// The dot products go through [`DotMode`](crate::config::DotMode). Unclamped,
/// a surface facing away from the light gets a negative diffuse term.
pub fn blinn_phong(n: Vec3A, l: Vec3A, v: Vec3A, config: &RenderConfig) -> f32 {
    let material = &config.material;
    let h = (l + v).normalize();

    let n_dot_l = config.dot_mode.apply(n.dot(l));
    let n_dot_h = config.dot_mode.apply(n.dot(h));

    let diffuse = config.light.intensity * material.diffuse * n_dot_l;
    let specular = (material.specular * n_dot_h).powf(material.specular_power);
    diffuse + specular
}

/// Compute the light intensity reflected back along `r_in` at `hit`.
///
/// The result is unclamped; the camera maps it to pixel values.
pub fn shade(scene: &dyn Sdf, r_in: &Ray, hit: &Hit, config: &RenderConfig) -> f32 {
    let p = hit.position;
    let to_light = config.light.position - p;

    let v = -r_in.direction;
    let l = to_light.normalize();
    let n = estimate_normal(scene, p, config.normal_epsilon);

    let r = to_light.length();
    let att = config.light.attenuation(r);

    // Nudge off the surface so the shadow ray does not hit its own origin.
    let shadow_ray = Ray::new(p + n * config.trace_epsilon, l);
    let shadow = soft_shadow(scene, &shadow_ray, Interval::new(config.trace_epsilon, r), config);

    shadow * att * blinn_phong(n, l, v, config)
}
