use blob_core::camera::Camera;
use blob_core::constants::{SPHERE_RADIUS, SPHERE_SEGMENTS};
use blob_core::geometry::generate_sphere;
use blob_core::preset::{rgb_from_hex, Preset};
use blob_core::tween::BlobParams;
use blob_core::uniforms::BlobUniforms;
use glam::Vec3;

#[test]
fn sphere_vertices_sit_on_the_radius_with_unit_normals() {
    let (vertices, _) = generate_sphere(SPHERE_RADIUS, 16);
    assert_eq!(vertices.len(), 17 * 17);
    for v in &vertices {
        let pos = Vec3::from(v.position);
        let normal = Vec3::from(v.normal);
        assert!((pos.length() - SPHERE_RADIUS).abs() < 1e-4);
        assert!((normal.length() - 1.0).abs() < 1e-4);
        // Normal points radially outward.
        assert!((pos / SPHERE_RADIUS - normal).length() < 1e-4);
    }
}

#[test]
fn sphere_indices_are_in_bounds_and_cover_all_quads() {
    let (vertices, indices) = generate_sphere(SPHERE_RADIUS, 16);
    assert_eq!(indices.len(), 16 * 16 * 6);
    assert_eq!(indices.len() % 3, 0);
    for &i in &indices {
        assert!((i as usize) < vertices.len());
    }
}

#[test]
fn display_tessellation_is_high_enough_for_smooth_displacement() {
    assert!(SPHERE_SEGMENTS >= 100);
}

#[test]
fn camera_aspect_update_is_idempotent() {
    let mut once = Camera::blob_default(1.0);
    once.set_aspect(1280, 720);

    let mut twice = Camera::blob_default(1.0);
    twice.set_aspect(1280, 720);
    twice.set_aspect(1280, 720);

    assert_eq!(once.aspect, twice.aspect);
    assert_eq!(
        once.projection_matrix().to_cols_array(),
        twice.projection_matrix().to_cols_array()
    );
}

#[test]
fn camera_resize_ignores_degenerate_dimensions() {
    let mut cam = Camera::blob_default(16.0 / 9.0);
    let before = cam.aspect;
    cam.set_aspect(0, 720);
    cam.set_aspect(1280, 0);
    assert_eq!(cam.aspect, before);
}

#[test]
fn presets_match_authored_values() {
    let chaotic = Preset::chaotic();
    assert_eq!(chaotic.frequency, 0.25);
    assert_eq!(chaotic.amplitude, 1.2);
    assert_eq!(chaotic.low_color, rgb_from_hex(0xE2B5FF));

    let calm = Preset::calm();
    assert_eq!(calm.frequency, 0.28);
    assert_eq!(calm.amplitude, 0.35);
    assert_eq!(calm.high_color, rgb_from_hex(0x00B98E));
}

#[test]
fn hex_decoding_maps_channels() {
    assert_eq!(rgb_from_hex(0xFF0000), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(rgb_from_hex(0x00FF00), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(rgb_from_hex(0x0000FF), Vec3::new(0.0, 0.0, 1.0));
    let grey = rgb_from_hex(0x808080);
    assert!((grey.x - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn uniform_struct_matches_wgsl_layout() {
    // Two mat4s, two vec3+f32 pairs, then amplitude plus padding.
    assert_eq!(std::mem::size_of::<BlobUniforms>(), 176);
    assert_eq!(std::mem::align_of::<BlobUniforms>(), 4);
}

#[test]
fn uniforms_compose_from_camera_and_params() {
    let camera = Camera::blob_default(16.0 / 9.0);
    let params = BlobParams {
        frequency: 0.25,
        amplitude: 1.2,
        low_color: Vec3::new(0.1, 0.2, 0.3),
        high_color: Vec3::new(0.9, 0.8, 0.7),
    };
    let u = BlobUniforms::compose(&camera, &params, 1.5);
    assert_eq!(u.time, 1.5);
    assert_eq!(u.frequency, 0.25);
    assert_eq!(u.amplitude, 1.2);
    assert_eq!(u.low_color, [0.1, 0.2, 0.3]);
    // Model translation places the blob off-center on +X.
    assert_eq!(u.model[3][0], 3.0);
    assert_eq!(
        u.view_proj,
        camera.view_proj().to_cols_array_2d()
    );
}
