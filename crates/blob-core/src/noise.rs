//! 3D simplex noise.
//!
//! CPU reference for the gradient noise evaluated per vertex in
//! `shaders/blob.wgsl`; both sides follow the same permutation-polynomial
//! construction so CPU-side sampling agrees with what the shader draws.
//! Deterministic, continuous, output in roughly [-1, 1], no allocation.

use crate::constants::{
    DETAIL_AMPLITUDE_MULT, DETAIL_FREQUENCY_MULT, DETAIL_TIME_MULT, SPIKE_FREQUENCY_MULT,
};
use glam::{Vec2, Vec3, Vec3Swizzles, Vec4, Vec4Swizzles};

#[inline]
fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: Vec4) -> Vec4 {
    mod289_4(((x * 34.0) + 1.0) * x)
}

#[inline]
fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - 0.853_734_7 * r
}

// GLSL-style step(): 0 where x < edge, 1 otherwise.
#[inline]
fn step3(edge: Vec3, x: Vec3) -> Vec3 {
    Vec3::select(x.cmpge(edge), Vec3::ONE, Vec3::ZERO)
}

#[inline]
fn step4(edge: Vec4, x: Vec4) -> Vec4 {
    Vec4::select(x.cmpge(edge), Vec4::ONE, Vec4::ZERO)
}

/// Sample 3D simplex noise at `v`. Returns a value in roughly [-1, 1].
pub fn simplex3(v: Vec3) -> f32 {
    let c = Vec2::new(1.0 / 6.0, 1.0 / 3.0);
    let d = Vec4::new(0.0, 0.5, 1.0, 2.0);

    // Skew into simplex cell space and find the containing cell corner.
    let mut i = (v + Vec3::splat(v.dot(Vec3::splat(c.y)))).floor();
    let x0 = v - i + Vec3::splat(i.dot(Vec3::splat(c.x)));

    // Rank the components to pick the simplex traversal order.
    let g = step3(x0.yzx(), x0);
    let l = Vec3::ONE - g;
    let i1 = g.min(l.zxy());
    let i2 = g.max(l.zxy());

    let x1 = x0 - i1 + Vec3::splat(c.x);
    let x2 = x0 - i2 + Vec3::splat(c.y);
    let x3 = x0 - Vec3::splat(d.y);

    // Hash the four corners.
    i = mod289_3(i);
    let p = permute(
        permute(
            permute(Vec4::splat(i.z) + Vec4::new(0.0, i1.z, i2.z, 1.0))
                + Vec4::splat(i.y)
                + Vec4::new(0.0, i1.y, i2.y, 1.0),
        ) + Vec4::splat(i.x)
            + Vec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Map hashes onto a 7x7 grid of gradient directions.
    let n_ = 1.0 / 7.0;
    let ns = n_ * d.wyz() - d.xzx();

    let j = p - 49.0 * (p * ns.z * ns.z).floor();

    let x_ = (j * ns.z).floor();
    let y_ = (j - 7.0 * x_).floor();

    let x = x_ * ns.x + Vec4::splat(ns.y);
    let y = y_ * ns.x + Vec4::splat(ns.y);
    let h = Vec4::ONE - x.abs() - y.abs();

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor() * 2.0 + 1.0;
    let s1 = b1.floor() * 2.0 + 1.0;
    let sh = -step4(h, Vec4::ZERO);

    let a0 = b0.xzyw() + s0.xzyw() * sh.xxyy();
    let a1 = b1.xzyw() + s1.xzyw() * sh.zzww();

    let mut p0 = Vec3::new(a0.x, a0.y, h.x);
    let mut p1 = Vec3::new(a0.z, a0.w, h.y);
    let mut p2 = Vec3::new(a1.x, a1.y, h.z);
    let mut p3 = Vec3::new(a1.z, a1.w, h.w);

    // Normalize gradients.
    let norm = taylor_inv_sqrt(Vec4::new(
        p0.dot(p0),
        p1.dot(p1),
        p2.dot(p2),
        p3.dot(p3),
    ));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    // Radial falloff per corner, then blend the gradient contributions.
    let m = Vec4::splat(0.6)
        - Vec4::new(x0.dot(x0), x1.dot(x1), x2.dot(x2), x3.dot(x3));
    let m = m.max(Vec4::ZERO);
    let m = m * m;
    42.0 * (m * m).dot(Vec4::new(
        p0.dot(x0),
        p1.dot(x1),
        p2.dot(x2),
        p3.dot(x3),
    ))
}

/// CPU mirror of the vertex-stage displacement: two noise bands, the second
/// finer, faster-drifting and weaker than the first.
pub fn surface_displacement(pos: Vec3, time: f32, frequency: f32, amplitude: f32) -> f32 {
    let spike_frequency = frequency * SPIKE_FREQUENCY_MULT;
    let noise1 = simplex3(pos * spike_frequency + Vec3::splat(time)) * amplitude;
    let noise2 = simplex3(
        pos * (spike_frequency * DETAIL_FREQUENCY_MULT) + Vec3::splat(time * DETAIL_TIME_MULT),
    ) * (amplitude * DETAIL_AMPLITUDE_MULT);
    noise1 + noise2
}
