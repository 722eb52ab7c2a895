//! UV sphere mesh for the blob surface.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Generate a unit-normal UV sphere with `segments` rings and sectors.
///
/// Displacement happens entirely in the vertex shader, so the mesh itself
/// stays a plain sphere; the segment count just has to be high enough for
/// the noise bands to read as smooth.
pub fn generate_sphere(radius: f32, segments: u32) -> (Vec<Vertex>, Vec<u32>) {
    let rings = segments.max(2);
    let sectors = segments.max(3);

    let mut vertices = Vec::with_capacity(((rings + 1) * (sectors + 1)) as usize);
    for iy in 0..=rings {
        let theta = iy as f32 / rings as f32 * PI;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for ix in 0..=sectors {
            let phi = ix as f32 / sectors as f32 * TAU;
            let dir = Vec3::new(sin_theta * phi.cos(), cos_theta, sin_theta * phi.sin());
            vertices.push(Vertex {
                position: (dir * radius).to_array(),
                normal: dir.to_array(),
            });
        }
    }

    let mut indices = Vec::with_capacity((rings * sectors * 6) as usize);
    for iy in 0..rings {
        for ix in 0..sectors {
            let a = iy * (sectors + 1) + ix;
            let b = a + sectors + 1;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    (vertices, indices)
}
