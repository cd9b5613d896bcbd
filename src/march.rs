//! Sphere tracing through a signed distance field.
//!
//! Primary rays look for the first surface along the ray, shadow rays look
//! for anything between a surface point and the light. Both step by the
//! distance the field reports, which can never overshoot a surface.

use glam::Vec3A;
use log::trace;

use crate::config::RenderConfig;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::scene::Sdf;
use crate::shading;

/// Surface hit found by [`march`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// World-space position where the march stopped
    pub position: Vec3A,
    /// Ray parameter of the hit
    pub t: f32,
    /// Field value at the hit (below the trace epsilon)
    pub distance: f32,
    /// Marching iterations spent, including the final one
    pub steps: u32,
}

/// Estimate the outward surface normal at `p` by central differences.
///
/// Six field evaluations, `epsilon` apart on each axis. Only meaningful at or
/// near a surface; in open space the gradient is not well defined.
pub fn estimate_normal(scene: &dyn Sdf, p: Vec3A, epsilon: f32) -> Vec3A {
    let dx = Vec3A::new(epsilon, 0.0, 0.0);
    let dy = Vec3A::new(0.0, epsilon, 0.0);
    let dz = Vec3A::new(0.0, 0.0, epsilon);
    Vec3A::new(
        scene.distance(p + dx) - scene.distance(p - dx),
        scene.distance(p + dy) - scene.distance(p - dy),
        scene.distance(p + dz) - scene.distance(p - dz),
    )
    .normalize()
}

/// March a primary ray and return the first surface hit inside `ray_t`.
///
/// Misses when `t` reaches `ray_t.max` or when `config.max_steps` iterations
/// pass without getting closer than `config.trace_epsilon` to a surface.
pub fn march(scene: &dyn Sdf, r: &Ray, ray_t: Interval, config: &RenderConfig) -> Option<Hit> {
    let mut t = ray_t.min;
    let mut steps = 0;
    while ray_t.before_end(t) {
        if steps == config.max_steps {
            trace!("primary ray from {} ran out of steps at t={}", r.origin, t);
            return None;
        }
        steps += 1;

        let position = r.at(t);
        let d = scene.distance(position);
        if d < config.trace_epsilon {
            return Some(Hit { position, t, distance: d, steps });
        }
        t += d;
    }
    None
}

/// Soft shadow factor along a ray towards the light.
///
/// Returns 0 as soon as the ray touches a surface, otherwise the smallest
/// `shadow_softness * d / t` seen along the way, capped at 1. A ray that runs
/// out of steps is treated as having reached the light.
pub fn soft_shadow(scene: &dyn Sdf, r: &Ray, ray_t: Interval, config: &RenderConfig) -> f32 {
    let mut res: f32 = 1.0;
    let mut t = ray_t.min;
    let mut steps = 0;
    while ray_t.before_end(t) {
        if steps == config.max_steps {
            trace!("shadow ray from {} ran out of steps at t={}", r.origin, t);
            break;
        }
        steps += 1;

        let d = scene.distance(r.at(t));
        if d < config.trace_epsilon {
            return 0.0;
        }
        res = res.min(config.shadow_softness * d / t);
        t += d;
    }
    res
}

/// Light intensity seen along a primary ray, 0 on a miss.
///
/// The value is not clamped; the caller decides how to map it to pixels.
pub fn trace(scene: &dyn Sdf, r: &Ray, ray_t: Interval, config: &RenderConfig) -> f32 {
    match march(scene, r, ray_t, config) {
        Some(hit) => {
            trace!(
                "hit at {} (t={}, d={}) after {} steps",
                hit.position,
                hit.t,
                hit.distance,
                hit.steps
            );
            shading::shade(scene, r, &hit, config)
        }
        None => 0.0,
    }
}
