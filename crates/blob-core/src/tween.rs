//! Minimal time-based interpolation, standing in for an animation library.
//!
//! Each shader parameter gets its own [`Tween`]; retargeting an in-flight
//! tween restarts it from the currently sampled value, so whichever
//! transition fired last simply wins without explicit cancellation.

use crate::constants::{
    AMPLITUDE_TWEEN_SEC, FREQUENCY_TWEEN_SEC, HIGH_COLOR_TWEEN_SEC, LOW_COLOR_TWEEN_SEC,
};
use crate::preset::Preset;
use glam::Vec3;

/// Quadratic ease-in/ease-out; slow start, slow stop.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Vec3::lerp(a, b, t)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration_sec: f32,
    elapsed_sec: f32,
}

impl<T: Lerp> Tween<T> {
    /// A tween already at rest on `value`.
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            duration_sec: 0.0,
            elapsed_sec: 0.0,
        }
    }

    /// Restart toward `to` from the currently sampled value.
    pub fn retarget(&mut self, to: T, duration_sec: f32) {
        self.from = self.value();
        self.to = to;
        self.duration_sec = duration_sec;
        self.elapsed_sec = 0.0;
    }

    pub fn advance(&mut self, dt_sec: f32) {
        self.elapsed_sec = (self.elapsed_sec + dt_sec.max(0.0)).min(self.duration_sec);
    }

    pub fn value(&self) -> T {
        if self.duration_sec <= 0.0 || self.elapsed_sec >= self.duration_sec {
            return self.to;
        }
        let t = ease_in_out_quad(self.elapsed_sec / self.duration_sec);
        T::lerp(self.from, self.to, t)
    }

    pub fn finished(&self) -> bool {
        self.elapsed_sec >= self.duration_sec
    }
}

/// The sampled shader parameter set for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobParams {
    pub frequency: f32,
    pub amplitude: f32,
    pub low_color: Vec3,
    pub high_color: Vec3,
}

/// The four tweened uniform channels. They run concurrently with
/// independent durations; there is no joint barrier.
pub struct UniformTweens {
    frequency: Tween<f32>,
    amplitude: Tween<f32>,
    low_color: Tween<Vec3>,
    high_color: Tween<Vec3>,
}

impl UniformTweens {
    pub fn settled(preset: &Preset) -> Self {
        Self {
            frequency: Tween::settled(preset.frequency),
            amplitude: Tween::settled(preset.amplitude),
            low_color: Tween::settled(preset.low_color),
            high_color: Tween::settled(preset.high_color),
        }
    }

    pub fn transition_to(&mut self, preset: &Preset) {
        self.frequency.retarget(preset.frequency, FREQUENCY_TWEEN_SEC);
        self.amplitude.retarget(preset.amplitude, AMPLITUDE_TWEEN_SEC);
        self.low_color.retarget(preset.low_color, LOW_COLOR_TWEEN_SEC);
        self.high_color
            .retarget(preset.high_color, HIGH_COLOR_TWEEN_SEC);
    }

    pub fn advance(&mut self, dt_sec: f32) {
        self.frequency.advance(dt_sec);
        self.amplitude.advance(dt_sec);
        self.low_color.advance(dt_sec);
        self.high_color.advance(dt_sec);
    }

    pub fn current(&self) -> BlobParams {
        BlobParams {
            frequency: self.frequency.value(),
            amplitude: self.amplitude.value(),
            low_color: self.low_color.value(),
            high_color: self.high_color.value(),
        }
    }

    pub fn settled_out(&self) -> bool {
        self.frequency.finished()
            && self.amplitude.finished()
            && self.low_color.finished()
            && self.high_color.finished()
    }
}
