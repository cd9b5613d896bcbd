//! Ray representation for ray marching.
//!
//! A ray is defined as r(t) = origin + t * direction. The marchers step the
//! scalar `t` along it while the ray itself stays untouched.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera plane for primary rays, or a point nudged off the surface
    /// along the normal for shadow rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Marching steps by SDF values, so this must be a unit vector for the
    /// step sizes to stay safe.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let ray = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::NEG_Y);
        assert_eq!(ray.at(0.0), Vec3A::new(1.0, 2.0, 3.0));
        assert_eq!(ray.at(2.0), Vec3A::new(1.0, 0.0, 3.0));
    }
}
