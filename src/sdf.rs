//! Primitive signed distance functions.
//!
//! Each function takes a point already expressed in the primitive's local
//! frame (the caller subtracts the world-space translation) and returns the
//! signed distance to the surface: negative inside, zero on, positive outside.
//! Degenerate inputs propagate NaN/Inf as plain float math does.

use glam::{Vec2, Vec3A};

/// Signed distance to a sphere centered at the origin.
#[inline]
pub fn sd_sphere(p: Vec3A, radius: f32) -> f32 {
    p.length() - radius
}

/// Exact signed distance to an axis-aligned box with the given half extents.
///
/// Correct both inside (largest negative axis distance) and outside
/// (euclidean distance to the nearest corner, edge or face).
#[inline]
pub fn sd_box(p: Vec3A, half_extents: Vec3A) -> f32 {
    let d = p.abs() - half_extents;
    d.max_element().min(0.0) + d.max(Vec3A::ZERO).length()
}

/// Signed distance to a torus lying in the XZ plane.
///
/// `radii.x` is the major radius (ring), `radii.y` the minor radius (tube).
#[inline]
pub fn sd_torus(p: Vec3A, radii: Vec2) -> f32 {
    let q = Vec2::new(Vec2::new(p.x, p.z).length() - radii.x, p.y);
    q.length() - radii.y
}

/// Signed distance to an infinite plane with unit normal `n`, shifted by `w`.
#[inline]
pub fn sd_plane(p: Vec3A, n: Vec3A, w: f32) -> f32 {
    p.dot(n) + w
}

/// Primitive shape kinds with their parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Sphere around the local origin.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },
    /// Axis-aligned box around the local origin.
    Box {
        /// Half size along each axis.
        half_extents: Vec3A,
    },
    /// Torus in the local XZ plane.
    Torus {
        /// Distance from the center to the middle of the tube.
        major_radius: f32,
        /// Tube radius.
        minor_radius: f32,
    },
    /// Infinite plane.
    Plane {
        /// Unit normal pointing to the outside half-space.
        normal: Vec3A,
        /// Offset along the normal.
        offset: f32,
    },
}

impl Shape {
    /// Signed distance from a local-frame point to this shape.
    pub fn distance(&self, local: Vec3A) -> f32 {
        match *self {
            Shape::Sphere { radius } => sd_sphere(local, radius),
            Shape::Box { half_extents } => sd_box(local, half_extents),
            Shape::Torus { major_radius, minor_radius } => {
                sd_torus(local, Vec2::new(major_radius, minor_radius))
            }
            Shape::Plane { normal, offset } => sd_plane(local, normal, offset),
        }
    }

    /// Short lowercase name, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Box { .. } => "box",
            Shape::Torus { .. } => "torus",
            Shape::Plane { .. } => "plane",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sphere_sign() {
        assert_abs_diff_eq!(sd_sphere(Vec3A::new(60.0, 0.0, 0.0), 60.0), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sd_sphere(Vec3A::new(0.0, 0.0, -60.0), 60.0), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sd_sphere(Vec3A::ZERO, 60.0), -60.0);
        assert_abs_diff_eq!(sd_sphere(Vec3A::new(0.0, 100.0, 0.0), 60.0), 40.0, epsilon = 1e-4);
    }

    #[test]
    fn box_sign() {
        let b = Vec3A::splat(40.0);
        // Faces
        assert_abs_diff_eq!(sd_box(Vec3A::new(40.0, 0.0, 0.0), b), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sd_box(Vec3A::new(0.0, -40.0, 10.0), b), 0.0, epsilon = 1e-4);
        // Inside: nearest face wins
        assert_abs_diff_eq!(sd_box(Vec3A::ZERO, b), -40.0);
        assert_abs_diff_eq!(sd_box(Vec3A::new(30.0, 0.0, 0.0), b), -10.0, epsilon = 1e-4);
        // Outside a face and outside a corner
        assert_abs_diff_eq!(sd_box(Vec3A::new(50.0, 0.0, 0.0), b), 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sd_box(Vec3A::new(43.0, 44.0, 40.0), b), 5.0, epsilon = 1e-4);
    }

    #[test]
    fn torus_sign() {
        let radii = Vec2::new(29.0, 30.0);
        // Outer rim on the X axis, top of the tube above the ring.
        assert_abs_diff_eq!(sd_torus(Vec3A::new(59.0, 0.0, 0.0), radii), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sd_torus(Vec3A::new(0.0, 30.0, 29.0), radii), 0.0, epsilon = 1e-4);
        // Center of the tube
        assert_abs_diff_eq!(sd_torus(Vec3A::new(0.0, 0.0, -29.0), radii), -30.0, epsilon = 1e-4);
        assert!(sd_torus(Vec3A::new(100.0, 0.0, 0.0), radii) > 0.0);
    }

    #[test]
    fn plane_sign() {
        assert_abs_diff_eq!(sd_plane(Vec3A::new(5.0, 0.0, -3.0), Vec3A::Y, 0.0), 0.0);
        assert_abs_diff_eq!(sd_plane(Vec3A::new(0.0, 2.0, 0.0), Vec3A::Y, 0.0), 2.0);
        assert_abs_diff_eq!(sd_plane(Vec3A::new(0.0, -2.0, 0.0), Vec3A::Y, 0.0), -2.0);
        assert_abs_diff_eq!(sd_plane(Vec3A::ZERO, Vec3A::Y, 1.5), 1.5);
    }

    #[test]
    fn shape_dispatches_to_primitive() {
        let p = Vec3A::new(3.0, -7.0, 11.0);
        assert_eq!(Shape::Sphere { radius: 2.0 }.distance(p), sd_sphere(p, 2.0));
        assert_eq!(
            Shape::Box { half_extents: Vec3A::ONE }.distance(p),
            sd_box(p, Vec3A::ONE)
        );
        assert_eq!(
            Shape::Torus { major_radius: 4.0, minor_radius: 1.0 }.distance(p),
            sd_torus(p, Vec2::new(4.0, 1.0))
        );
        assert_eq!(
            Shape::Plane { normal: Vec3A::Y, offset: 0.0 }.distance(p),
            sd_plane(p, Vec3A::Y, 0.0)
        );
    }
}
