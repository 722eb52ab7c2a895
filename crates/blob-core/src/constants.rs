use glam::{Vec2, Vec3};

// Shared scene/interaction tuning constants used by both web and native frontends.

// Blob geometry
pub const SPHERE_RADIUS: f32 = 5.0;
pub const SPHERE_SEGMENTS: u32 = 200; // high tessellation keeps displacement smooth
pub const BLOB_OFFSET: [f32; 3] = [3.0, 0.0, 0.0]; // world-space offset of the mesh

// Camera
pub const CAMERA_EYE: [f32; 3] = [-2.0, 0.0, 10.0];
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Noise bands (must match shaders/blob.wgsl)
pub const SPIKE_FREQUENCY_MULT: f32 = 1.5; // first band frequency scale
pub const DETAIL_FREQUENCY_MULT: f32 = 1.5; // second band, relative to the first
pub const DETAIL_TIME_MULT: f32 = 0.5; // second band drifts at half speed
pub const DETAIL_AMPLITUDE_MULT: f32 = 0.2; // second band stays subordinate

// Animation
pub const TIME_STEP_PER_TICK: f32 = 0.001; // fixed per frame, not wall-clock scaled
pub const FREQUENCY_TWEEN_SEC: f32 = 2.0;
pub const AMPLITUDE_TWEEN_SEC: f32 = 2.0;
pub const LOW_COLOR_TWEEN_SEC: f32 = 1.0;
pub const HIGH_COLOR_TWEEN_SEC: f32 = 0.8;

// Interaction
pub const POINTER_SENTINEL_NDC: [f32; 2] = [9999.0, 9999.0]; // far outside the frustum

#[inline]
pub fn blob_offset_vec3() -> Vec3 {
    Vec3::from(BLOB_OFFSET)
}

#[inline]
pub fn pointer_sentinel() -> Vec2 {
    Vec2::from(POINTER_SENTINEL_NDC)
}
