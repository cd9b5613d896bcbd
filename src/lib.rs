//! sdfmarch signed distance field ray marcher
//!
//! Renders a scene of implicit primitives with an orthographic top-down
//! camera, Blinn-Phong shading, soft shadows and linear light falloff.
//! Outputs 8-bit grayscale PNG or linear EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod canvas;
pub mod config;
pub mod error;
pub mod interval;
pub mod march;
pub mod output;
pub mod ray;
pub mod scene;
pub mod sdf;
pub mod shading;
