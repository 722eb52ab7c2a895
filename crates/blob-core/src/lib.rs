//! Platform-independent logic for the hover-reactive noise blob.
//!
//! The web and native frontends both consume this crate: noise, presets,
//! tweening, hover edge detection, picking, sphere geometry, and the WGSL
//! shader source for the displacement material.

pub mod camera;
pub mod constants;
pub mod effect;
pub mod geometry;
pub mod hover;
pub mod noise;
pub mod picking;
pub mod preset;
pub mod tween;
pub mod uniforms;

pub static BLOB_WGSL: &str = include_str!("../shaders/blob.wgsl");

pub use camera::Camera;
pub use constants::*;
pub use effect::BlobEffect;
pub use geometry::{generate_sphere, Vertex};
pub use hover::{HoverTracker, Transition};
pub use picking::{pointer_ndc, ray_sphere, screen_to_world_ray};
pub use preset::{rgb_from_hex, Preset};
pub use tween::{ease_in_out_quad, BlobParams, Tween, UniformTweens};
pub use uniforms::BlobUniforms;
