//! Pointer-to-ray projection and ray/sphere hit testing.

use crate::camera::Camera;
use crate::constants::pointer_sentinel;
use glam::{Vec2, Vec3, Vec4};

/// Convert container-relative pixel coordinates to normalized device
/// coordinates, y inverted. Degenerate dimensions yield the sentinel so a
/// half-initialized layout can never produce a spurious hit.
#[inline]
pub fn pointer_ndc(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return pointer_sentinel();
    }
    Vec2::new((px / width) * 2.0 - 1.0, -((py / height) * 2.0 - 1.0))
}

/// Compute a world-space ray from the camera eye through an NDC coordinate.
///
/// Returns `(ray_origin, ray_direction)`.
pub fn screen_to_world_ray(camera: &Camera, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p_far: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p_far - ro).normalize();
    (ro, rd)
}

/// Nearest positive ray/sphere intersection distance, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
