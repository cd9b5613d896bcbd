//! Render configuration.
//!
//! Groups every constant of the renderer (canvas, camera, marching, light
//! and material) into one immutable value passed by reference.

use glam::Vec3A;

/// How the shading equation treats negative dot products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotMode {
    /// Use `dot(n, l)` and `dot(n, h)` as they come, negative values included.
    #[default]
    Unclamped,
    /// Clamp both dot products to zero before use.
    Clamped,
}

impl DotMode {
    /// Apply the mode to a raw dot product.
    #[inline]
    pub fn apply(self, dot: f32) -> f32 {
        match self {
            DotMode::Unclamped => dot,
            DotMode::Clamped => dot.max(0.0),
        }
    }
}

/// Single point light with a linear falloff window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3A,
    /// Scale applied to the diffuse term
    pub intensity: f32,
    /// Distance up to which the light is at full strength
    pub falloff_start: f32,
    /// Distance from which the light contributes nothing
    pub falloff_end: f32,
}

impl PointLight {
    /// Linear distance attenuation: 1 before `falloff_start`, 0 after
    /// `falloff_end`, linear in between.
    pub fn attenuation(&self, distance: f32) -> f32 {
        if distance <= self.falloff_start {
            1.0
        } else if distance >= self.falloff_end {
            0.0
        } else {
            (self.falloff_end - distance) / (self.falloff_end - self.falloff_start)
        }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3A::new(100.0, 100.0, 220.0),
            intensity: 2.0,
            falloff_start: 500.0,
            falloff_end: 600.0,
        }
    }
}

/// Blinn-Phong coefficients shared by every surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse coefficient
    pub diffuse: f32,
    /// Specular coefficient, applied inside the power
    pub specular: f32,
    /// Specular exponent
    pub specular_power: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: 0.8,
            specular: 0.8,
            specular_power: 8.0,
        }
    }
}

/// Everything the camera, marchers and shader need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Bytes per pixel of the output canvas
    pub channels: u32,
    /// Height of the orthographic camera plane above the ground
    pub camera_height: f32,
    /// Far end of the primary marching interval
    pub max_distance: f32,
    /// Step of the central differences used for normals
    pub normal_epsilon: f32,
    /// Distance under which a march counts as a surface hit
    pub trace_epsilon: f32,
    /// Hard cap on marching iterations per ray
    pub max_steps: u32,
    /// Penumbra factor `k` of the soft shadow heuristic `k * d / t`
    pub shadow_softness: f32,
    /// Scene light
    pub light: PointLight,
    /// Surface material
    pub material: Material,
    /// Dot product handling in the shading equation
    pub dot_mode: DotMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            channels: 1,
            camera_height: 500.0,
            max_distance: 1000.0,
            normal_epsilon: 0.01,
            trace_epsilon: 0.001,
            max_steps: 1024,
            shadow_softness: 1.0,
            light: PointLight::default(),
            material: Material::default(),
            dot_mode: DotMode::Unclamped,
        }
    }
}

impl RenderConfig {
    /// Offset that centers the canvas under the camera, using integer halves.
    pub fn camera_offset(&self) -> Vec3A {
        Vec3A::new((self.width / 2) as f32, 0.0, (self.height / 2) as f32)
    }
}
