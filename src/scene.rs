//! Scene distance fields.
//!
//! Defines the [`Sdf`] trait for anything that can report a signed distance
//! and [`Scene`], a list of translated primitives joined by union.

use glam::Vec3A;

use crate::sdf::Shape;

/// Trait for signed distance fields that can be ray marched.
///
/// Core abstraction the marchers and the normal estimator work against, so
/// tests can swap in small hand-built scenes.
pub trait Sdf {
    /// Signed distance from a world-space point to the nearest surface.
    ///
    /// Must never overestimate the true distance, otherwise marching steps
    /// can tunnel through geometry.
    fn distance(&self, p: Vec3A) -> f32;
}

/// One primitive placed in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    /// Primitive kind and parameters
    pub shape: Shape,
    /// World-space position of the primitive's local origin
    pub translation: Vec3A,
}

impl SceneObject {
    /// Place a shape at the given world position.
    pub fn new(shape: Shape, translation: Vec3A) -> Self {
        Self { shape, translation }
    }
}

impl Sdf for SceneObject {
    fn distance(&self, p: Vec3A) -> f32 {
        self.shape.distance(p - self.translation)
    }
}

/// Collection of objects forming a scene.
///
/// Union via minimum over every object; no acceleration structure, so each
/// query costs one evaluation per object.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Objects in insertion order
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, shape: Shape, translation: Vec3A) {
        self.objects.push(SceneObject::new(shape, translation));
    }

    /// Builder form of [`Scene::add`].
    pub fn with(mut self, shape: Shape, translation: Vec3A) -> Self {
        self.add(shape, translation);
        self
    }

    /// The fixed demo world: a sphere, a box and a torus resting on a ground
    /// plane.
    pub fn default_scene() -> Self {
        Self::new()
            .with(Shape::Sphere { radius: 60.0 }, Vec3A::new(50.0, 0.0, -130.0))
            .with(
                Shape::Box { half_extents: Vec3A::splat(40.0) },
                Vec3A::new(150.0, 0.0, 50.0),
            )
            .with(
                Shape::Torus { major_radius: 29.0, minor_radius: 30.0 },
                Vec3A::new(-100.0, 0.0, 60.0),
            )
            .with(Shape::Plane { normal: Vec3A::Y, offset: 0.0 }, Vec3A::ZERO)
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Sdf for Scene {
    /// Empty scenes report `+inf`, so every ray misses.
    fn distance(&self, p: Vec3A) -> f32 {
        self.objects
            .iter()
            .fold(f32::INFINITY, |closest, object| closest.min(object.distance(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf::{sd_box, sd_plane, sd_sphere, sd_torus};
    use glam::Vec2;

    fn reference_distance(p: Vec3A) -> f32 {
        sd_sphere(p - Vec3A::new(50.0, 0.0, -130.0), 60.0)
            .min(sd_box(p - Vec3A::new(150.0, 0.0, 50.0), Vec3A::splat(40.0)))
            .min(sd_torus(p - Vec3A::new(-100.0, 0.0, 60.0), Vec2::new(29.0, 30.0)))
            .min(sd_plane(p, Vec3A::Y, 0.0))
    }

    #[test]
    fn default_scene_is_union_of_four_primitives() {
        let scene = Scene::default_scene();
        assert_eq!(scene.len(), 4);

        let samples = [
            Vec3A::ZERO,
            Vec3A::new(50.0, 70.0, -130.0),
            Vec3A::new(150.0, 45.0, 50.0),
            Vec3A::new(-100.0, 10.0, 60.0),
            Vec3A::new(-256.0, 500.0, -256.0),
            Vec3A::new(255.0, 3.0, 255.0),
            Vec3A::new(10.0, -5.0, 10.0),
        ];
        for p in samples {
            assert_eq!(scene.distance(p), reference_distance(p), "at {p}");
        }
    }

    #[test]
    fn closest_surface_dominates() {
        let scene = Scene::default_scene();
        // Straight above the sphere top the sphere is closer than the ground.
        let d = scene.distance(Vec3A::new(50.0, 70.0, -130.0));
        assert!((d - 10.0).abs() < 1e-4);
        // Inside the box the distance is negative.
        assert!(scene.distance(Vec3A::new(150.0, 20.0, 50.0)) < 0.0);
    }

    #[test]
    fn empty_scene_is_infinitely_far() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.distance(Vec3A::ZERO), f32::INFINITY);
    }
}
