//! Per-pixel surface detail: noise terrain, gas banding, accent features and polar ice.

use crate::buffer::PixelBuffer;
use crate::color::{mix_channel, to_channel};
use crate::mask::DiskMask;
use crate::noise_field::NoiseField;
use crate::palette::Palette;
use crate::planet::SurfaceArchetype;

/// Feature noise above this value blends towards the accent color.
pub const FEATURE_THRESHOLD: f64 = 0.7;
/// Rocky planets colder than this (K) grow ice caps.
pub const ROCKY_ICE_TEMPERATURE: f64 = 250.0;
/// Latitude (0 at equator, 1 at the disk's top/bottom) where ice caps begin.
pub const ICE_CAP_LATITUDE: f64 = 0.8;

const TERRAIN_AMPLITUDE: f64 = 30.0;
const BAND_FREQUENCY: f64 = 0.02;
const BAND_AMPLITUDE: f64 = 20.0;
const ICE_GAIN: [f64; 3] = [100.0, 100.0, 150.0];

/// Noise sampling scales, in noise units per pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetailScales {
    pub detail: f64,
    pub feature: f64,
}

impl DetailScales {
    /// Gas giants use broader, smoother noise than solid surfaces.
    pub fn for_archetype(archetype: SurfaceArchetype) -> Self {
        match archetype {
            SurfaceArchetype::Gas => Self {
                detail: 0.01,
                feature: 0.005,
            },
            _ => Self {
                detail: 0.03,
                feature: 0.015,
            },
        }
    }
}

/// Whether a planet grows polar ice caps.
pub fn has_ice_caps(archetype: SurfaceArchetype, temperature: Option<f64>) -> bool {
    match archetype {
        SurfaceArchetype::Icy => true,
        SurfaceArchetype::Rocky => temperature.is_some_and(|t| t < ROCKY_ICE_TEMPERATURE),
        _ => false,
    }
}

/// Horizontal band offset for gas giants at pixel row `y`, as `[r, g, b]` deltas.
pub fn gas_band_delta(y: u32) -> [f64; 3] {
    let band = (y as f64 * BAND_FREQUENCY).sin() * BAND_AMPLITUDE;
    [band, band * 0.8, band * 0.5]
}

/// Ice strength in `[0, 1]` for a latitude in `[0, 1]`; zero below [`ICE_CAP_LATITUDE`].
pub fn ice_cap_strength(latitude: f64) -> f64 {
    if latitude > ICE_CAP_LATITUDE {
        ((latitude - ICE_CAP_LATITUDE) * 5.0).min(1.0)
    } else {
        0.0
    }
}

/// Brighten a color towards white-blue by `strength`, saturating each channel at 255.
pub fn apply_ice(rgb: [u8; 3], strength: f64) -> [u8; 3] {
    let mut out = rgb;
    for (channel, gain) in out.iter_mut().zip(ICE_GAIN) {
        *channel = to_channel((*channel as f64 + gain * strength).min(255.0));
    }
    out
}

/// The detail pass for one planet.
pub struct DetailPass<'a> {
    pub archetype: SurfaceArchetype,
    pub palette: Palette,
    pub scales: DetailScales,
    pub ice_caps: bool,
    noise: &'a NoiseField,
}

impl<'a> DetailPass<'a> {
    pub fn new(
        archetype: SurfaceArchetype,
        palette: Palette,
        temperature: Option<f64>,
        noise: &'a NoiseField,
    ) -> Self {
        Self {
            archetype,
            palette,
            scales: DetailScales::for_archetype(archetype),
            ice_caps: has_ice_caps(archetype, temperature),
            noise,
        }
    }

    /// Force polar ice on or off regardless of archetype and temperature.
    pub fn with_ice_caps(mut self, ice_caps: bool) -> Self {
        self.ice_caps = ice_caps;
        self
    }

    fn terrain_delta(&self, x: u32, y: u32) -> [f64; 3] {
        match self.archetype {
            SurfaceArchetype::Gas => gas_band_delta(y),
            _ => {
                let scale = self.scales.detail;
                let detail = self.noise.sample(x as f64 * scale, y as f64 * scale);
                [(detail + 1.0) * TERRAIN_AMPLITUDE; 3]
            }
        }
    }

    /// Surface color of the pixel at `(x, y)` inside a `width × height` buffer.
    pub fn shade(&self, x: u32, y: u32, mask: &DiskMask) -> [u8; 3] {
        let delta = self.terrain_delta(x, y);
        let scale = self.scales.feature;
        let feature = self.noise.sample(x as f64 * scale, y as f64 * scale);

        let base = self.palette.base.channels();
        let accent = self.palette.accent.channels();
        let mut rgb = [0u8; 3];
        for i in 0..3 {
            let surface = if feature > FEATURE_THRESHOLD {
                let mix = ((feature - FEATURE_THRESHOLD) / (1.0 - FEATURE_THRESHOLD)).min(1.0);
                mix_channel(base[i], accent[i], mix)
            } else {
                base[i] as f64
            };
            rgb[i] = to_channel(surface + delta[i]);
        }

        if self.ice_caps {
            let (_, ny) = mask.offset(x as f64, y as f64);
            let strength = ice_cap_strength(ny.abs() * 2.0);
            if strength > 0.0 {
                rgb = apply_ice(rgb, strength);
            }
        }
        rgb
    }

    /// Shade every pixel on the disk; pixels outside it are left untouched.
    pub fn apply(&self, buffer: &mut PixelBuffer, mask: &DiskMask) {
        let (width, height) = buffer.dimensions();
        let mut shaded = 0u32;
        for y in 0..height {
            for x in 0..width {
                if !mask.contains(x, y) {
                    continue;
                }
                let [r, g, b] = self.shade(x, y, mask);
                buffer.set_pixel(x, y, [r, g, b, 255]);
                shaded += 1;
            }
        }
        tracing::trace!(shaded, archetype = %self.archetype, "detail pass complete");
    }
}
