use blob_core::noise::{simplex3, surface_displacement};
use glam::Vec3;

#[test]
fn noise_is_deterministic() {
    let p = Vec3::new(1.3, -2.7, 0.9);
    assert_eq!(simplex3(p), simplex3(p));
}

#[test]
fn noise_is_zero_at_origin() {
    // The origin is a simplex corner; every corner contribution vanishes.
    assert!(simplex3(Vec3::ZERO).abs() < 1e-6);
}

#[test]
fn noise_stays_band_limited() {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for ix in -8..=8 {
        for iy in -8..=8 {
            for iz in -8..=8 {
                let p = Vec3::new(ix as f32 * 0.37, iy as f32 * 0.29, iz as f32 * 0.41);
                let n = simplex3(p);
                assert!(n.is_finite());
                min = min.min(n);
                max = max.max(n);
            }
        }
    }
    // Approximately [-1, 1]; leave slack for the 42x scale constant.
    assert!(min >= -1.1, "min out of range: {min}");
    assert!(max <= 1.1, "max out of range: {max}");
    // The field should actually vary, not sit at zero.
    assert!(max - min > 0.5);
}

#[test]
fn noise_is_continuous_under_small_deltas() {
    let eps = 1e-3;
    let dirs = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(0.577, 0.577, 0.577)];
    for ix in -5..=5 {
        for iy in -5..=5 {
            let p = Vec3::new(ix as f32 * 0.53, iy as f32 * 0.61, (ix + iy) as f32 * 0.17);
            let n0 = simplex3(p);
            for d in dirs {
                let n1 = simplex3(p + d * eps);
                assert!(
                    (n1 - n0).abs() < 0.05,
                    "discontinuity at {p:?} along {d:?}: {n0} -> {n1}"
                );
            }
        }
    }
}

#[test]
fn displacement_sums_two_bands() {
    let p = Vec3::new(0.4, -1.1, 2.2);
    let time = 3.7;
    let frequency = 0.25;
    let amplitude = 1.2;

    let spike = frequency * 1.5;
    let expected = simplex3(p * spike + Vec3::splat(time)) * amplitude
        + simplex3(p * (spike * 1.5) + Vec3::splat(time * 0.5)) * (amplitude * 0.2);
    let got = surface_displacement(p, time, frequency, amplitude);
    assert!((got - expected).abs() < 1e-6);
}

#[test]
fn displacement_is_continuous_across_the_sphere() {
    // Walk a band around the blob surface at rest-state parameters.
    let radius = 5.0;
    let mut prev = None;
    for k in 0..=512 {
        let angle = k as f32 / 512.0 * std::f32::consts::TAU;
        let p = Vec3::new(angle.cos(), 0.2, angle.sin()) * radius;
        let d = surface_displacement(p, 1.0, 0.25, 1.2);
        if let Some(prev) = prev {
            let delta: f32 = d - prev;
            assert!(delta.abs() < 0.35, "jump of {delta} at step {k}");
        }
        prev = Some(d);
    }
}
