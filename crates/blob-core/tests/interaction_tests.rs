use blob_core::constants::{blob_offset_vec3, pointer_sentinel, SPHERE_RADIUS};
use blob_core::effect::BlobEffect;
use blob_core::hover::{HoverTracker, Transition};
use blob_core::picking::{pointer_ndc, ray_sphere, screen_to_world_ray};
use glam::Vec2;

#[test]
fn ray_sphere_hit_straight_ahead() {
    let origin = glam::Vec3::ZERO;
    let dir = glam::Vec3::Z;
    let t = ray_sphere(origin, dir, glam::Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_some());
    let t = t.unwrap();
    assert!((t - 3.0).abs() < 1e-4);
}

#[test]
fn ray_sphere_miss_to_the_side() {
    let origin = glam::Vec3::ZERO;
    let dir = glam::Vec3::X;
    assert!(ray_sphere(origin, dir, glam::Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn pointer_ndc_maps_corners_and_inverts_y() {
    let w = 800.0;
    let h = 600.0;
    // Top-left pixel -> (-1, +1).
    let tl = pointer_ndc(0.0, 0.0, w, h);
    assert!((tl - Vec2::new(-1.0, 1.0)).length() < 1e-6);
    // Bottom-right pixel -> (+1, -1).
    let br = pointer_ndc(w, h, w, h);
    assert!((br - Vec2::new(1.0, -1.0)).length() < 1e-6);
    // Center -> origin.
    let c = pointer_ndc(w / 2.0, h / 2.0, w, h);
    assert!(c.length() < 1e-6);
}

#[test]
fn pointer_ndc_degenerate_dimensions_yield_sentinel() {
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), pointer_sentinel());
    assert_eq!(pointer_ndc(10.0, 10.0, 800.0, 0.0), pointer_sentinel());
}

#[test]
fn sentinel_never_intersects_the_blob() {
    let mut effect = BlobEffect::new(16.0 / 9.0);
    for _ in 0..120 {
        effect.tick(pointer_sentinel(), 1.0 / 60.0);
        assert!(!effect.is_hovered());
    }
}

#[test]
fn ray_through_blob_center_hits() {
    let effect = BlobEffect::new(16.0 / 9.0);
    // Project the blob center back to NDC, then cast through it.
    let center = blob_offset_vec3();
    let clip = effect.camera.view_proj() * center.extend(1.0);
    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
    let (ro, rd) = screen_to_world_ray(&effect.camera, ndc);
    assert!(ray_sphere(ro, rd, center, SPHERE_RADIUS).is_some());
}

#[test]
fn hover_edges_fire_exactly_once() {
    let mut tracker = HoverTracker::new();
    let script = [false, false, true, true, false];
    let expected = [
        None,
        None,
        Some(Transition::ToCalm),
        None,
        Some(Transition::ToChaotic),
    ];
    for (hit, want) in script.into_iter().zip(expected) {
        assert_eq!(tracker.update(hit), want);
    }
}

#[test]
fn effect_transitions_on_hover_edges() {
    let mut effect = BlobEffect::new(16.0 / 9.0);

    // NDC of the blob center, derived from the camera itself.
    let center = blob_offset_vec3();
    let clip = effect.camera.view_proj() * center.extend(1.0);
    let over_blob = Vec2::new(clip.x / clip.w, clip.y / clip.w);

    effect.tick(pointer_sentinel(), 1.0 / 60.0);
    assert!(!effect.is_hovered());

    effect.tick(over_blob, 1.0 / 60.0);
    assert!(effect.is_hovered());

    // Staying on the blob keeps the state; leaving flips it back.
    effect.tick(over_blob, 1.0 / 60.0);
    assert!(effect.is_hovered());
    effect.tick(pointer_sentinel(), 1.0 / 60.0);
    assert!(!effect.is_hovered());
}

#[test]
fn hovering_converges_uniforms_to_calm() {
    let mut effect = BlobEffect::new(16.0 / 9.0);
    let center = blob_offset_vec3();
    let clip = effect.camera.view_proj() * center.extend(1.0);
    let over_blob = Vec2::new(clip.x / clip.w, clip.y / clip.w);

    let mut last = effect.tick(over_blob, 1.0 / 60.0);
    for _ in 0..180 {
        last = effect.tick(over_blob, 1.0 / 60.0);
    }
    assert!((last.frequency - 0.28).abs() < 1e-4);
    assert!((last.amplitude - 0.35).abs() < 1e-4);
}

#[test]
fn time_uniform_advances_by_fixed_step() {
    let mut effect = BlobEffect::new(1.0);
    // Wildly different wall-clock deltas must not affect the noise clock.
    effect.tick(pointer_sentinel(), 0.5);
    effect.tick(pointer_sentinel(), 0.0001);
    effect.tick(pointer_sentinel(), 0.016);
    assert!((effect.time() - 0.003).abs() < 1e-7);
}
