//! GPU-facing uniform layout. Must stay byte-compatible with the
//! `BlobUniforms` struct in `shaders/blob.wgsl`.

use crate::camera::Camera;
use crate::constants::blob_offset_vec3;
use crate::tween::BlobParams;
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlobUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub low_color: [f32; 3],
    pub time: f32,
    pub high_color: [f32; 3],
    pub frequency: f32,
    pub amplitude: f32,
    pub _pad: [f32; 3],
}

impl BlobUniforms {
    pub fn compose(camera: &Camera, params: &BlobParams, time: f32) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: Mat4::from_translation(blob_offset_vec3()).to_cols_array_2d(),
            low_color: params.low_color.to_array(),
            time,
            high_color: params.high_color.to_array(),
            frequency: params.frequency,
            amplitude: params.amplitude,
            _pad: [0.0; 3],
        }
    }
}
