//! HSL color conversion
//!
//! Hue is expressed in turns (`0.0..1.0` covers 0 to 360 degrees) and wraps,
//! so a hue of `1.0` is the same red as `0.0`.

/// Saturation of galaxy point colors
pub const GALAXY_SATURATION: f32 = 1.0;
/// Lightness of galaxy point colors
pub const GALAXY_LIGHTNESS: f32 = 0.6;

/// A hue/saturation/lightness color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in turns (wraps modulo 1)
    pub hue: f32,
    /// Saturation in `[0, 1]`
    pub saturation: f32,
    /// Lightness in `[0, 1]`
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Create from a hue in degrees
    pub fn from_degrees(degrees: f32, saturation: f32, lightness: f32) -> Self {
        Self::new(degrees / 360.0, saturation, lightness)
    }

    /// Convert to gamma-encoded sRGB
    pub fn to_srgb(self) -> [f32; 3] {
        hsl_to_srgb(self.hue, self.saturation, self.lightness)
    }

    /// Convert to linear RGB (what the renderer blends in)
    pub fn to_linear_rgb(self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }
}

/// Convert HSL to gamma-encoded sRGB
pub fn hsl_to_srgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(1.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let max = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let min = 2.0 * l - max;

    [
        hue_channel(min, max, h + 1.0 / 3.0),
        hue_channel(min, max, h),
        hue_channel(min, max, h - 1.0 / 3.0),
    ]
}

fn hue_channel(min: f32, max: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        min + (max - min) * 6.0 * t
    } else if t < 0.5 {
        max
    } else if t < 2.0 / 3.0 {
        min + (max - min) * 6.0 * (2.0 / 3.0 - t)
    } else {
        min
    }
}

/// Decode one sRGB channel to linear
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.077_399_38
    } else {
        (c * 0.947_867_3 + 0.052_132_7).powf(2.4)
    }
}

/// Galaxy point color for a normalized radius (`radius_i / radius`)
pub fn radial_color(t: f32) -> [f32; 3] {
    Hsl::from_degrees(t * 360.0, GALAXY_SATURATION, GALAXY_LIGHTNESS).to_linear_rgb()
}
