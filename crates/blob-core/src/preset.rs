use glam::Vec3;

/// One visual state of the blob. Two immutable instances exist; they are
/// created at startup and only ever read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub frequency: f32,
    pub amplitude: f32,
    pub low_color: Vec3,
    pub high_color: Vec3,
}

impl Preset {
    /// The resting state: large amplitude, purple palette.
    pub fn chaotic() -> Self {
        Self {
            frequency: 0.25,
            amplitude: 1.2,
            low_color: rgb_from_hex(0xE2B5FF),
            high_color: rgb_from_hex(0x9E30F7),
        }
    }

    /// The hovered state: gentle amplitude, yellow/green palette.
    pub fn calm() -> Self {
        Self {
            frequency: 0.28,
            amplitude: 0.35,
            low_color: rgb_from_hex(0xE5E544),
            high_color: rgb_from_hex(0x00B98E),
        }
    }
}

/// Decode a `0xRRGGBB` color into 0..1 components.
#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}
