//! 8-bit RGB colors and the per-channel operations used by every pass.

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Channels as `[r, g, b]`.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Move every channel `percent` of full scale towards white, saturating at 255.
    pub fn lighten(self, percent: f64) -> Self {
        self.shift(255.0 * percent / 100.0)
    }

    /// Move every channel `percent` of full scale towards black, saturating at 0.
    pub fn darken(self, percent: f64) -> Self {
        self.shift(-255.0 * percent / 100.0)
    }

    fn shift(self, amount: f64) -> Self {
        let [r, g, b] = self.channels().map(|c| to_channel(c as f64 + amount));
        Self::new(r, g, b)
    }

    /// Attach an opacity in `[0, 1]`.
    pub const fn with_alpha(self, alpha: f64) -> Paint {
        Paint { color: self, alpha }
    }
}

/// A color with straight (non-premultiplied) opacity, used for compositing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Paint {
    /// Scale the opacity, as a canvas-wide global alpha would.
    pub fn fade(self, factor: f64) -> Self {
        Self {
            alpha: self.alpha * factor,
            ..self
        }
    }
}

impl From<Rgb> for Paint {
    fn from(color: Rgb) -> Self {
        color.with_alpha(1.0)
    }
}

/// Weighted blend of one channel, floored.
///
/// `ratio` 0 yields `from`, 1 yields `to`. Computed as
/// `from·(1 − ratio) + to·ratio`; a blend of two equal channels can land one
/// below them.
pub fn mix_channel(from: u8, to: u8, ratio: f64) -> f64 {
    (from as f64 * (1.0 - ratio) + to as f64 * ratio).floor()
}

/// Round and clamp a floating-point channel into `[0, 255]`.
#[inline]
pub fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
