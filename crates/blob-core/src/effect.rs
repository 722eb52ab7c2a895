//! Per-frame driver for the blob: time, hit test, hover edges, tweens.

use crate::camera::Camera;
use crate::constants::{blob_offset_vec3, SPHERE_RADIUS, TIME_STEP_PER_TICK};
use crate::hover::{HoverTracker, Transition};
use crate::picking::{ray_sphere, screen_to_world_ray};
use crate::preset::Preset;
use crate::tween::UniformTweens;
use crate::uniforms::BlobUniforms;
use glam::Vec2;

/// All platform-independent state of the effect. The frontends own the
/// surface and the scheduler; this owns everything else.
pub struct BlobEffect {
    pub camera: Camera,
    tweens: UniformTweens,
    hover: HoverTracker,
    time: f32,
}

impl BlobEffect {
    /// Start in the chaotic preset with the fixed blob camera.
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::blob_default(aspect),
            tweens: UniformTweens::settled(&Preset::chaotic()),
            hover: HoverTracker::new(),
            time: 0.0,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance one frame and produce the uniform set for the draw call.
    ///
    /// `pointer_ndc` is the most recent pointer position (last write wins);
    /// `dt_sec` is the wall-clock delta driving the tweens. The noise time
    /// uniform deliberately advances by a fixed step per tick instead.
    pub fn tick(&mut self, pointer_ndc: Vec2, dt_sec: f32) -> BlobUniforms {
        self.time += TIME_STEP_PER_TICK;

        let (ray_origin, ray_dir) = screen_to_world_ray(&self.camera, pointer_ndc);
        let hit = ray_sphere(ray_origin, ray_dir, blob_offset_vec3(), SPHERE_RADIUS).is_some();

        match self.hover.update(hit) {
            Some(Transition::ToCalm) => {
                log::debug!("hover enter: transitioning to calm");
                self.tweens.transition_to(&Preset::calm());
            }
            Some(Transition::ToChaotic) => {
                log::debug!("hover leave: transitioning to chaotic");
                self.tweens.transition_to(&Preset::chaotic());
            }
            None => {}
        }

        self.tweens.advance(dt_sec);
        BlobUniforms::compose(&self.camera, &self.tweens.current(), self.time)
    }
}
