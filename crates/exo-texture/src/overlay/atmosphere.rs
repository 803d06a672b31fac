//! Atmospheric haze and patchy cloud cover.
//!
//! Clouds never change the surface color directly. Each pixel gets a cloud
//! opacity from a dedicated noise field, and a white layer with that opacity
//! is composited over the surface.

use crate::buffer::PixelBuffer;
use crate::color::{Rgb, to_channel};
use crate::mask::DiskMask;
use crate::noise_field::NoiseField;

pub const HAZE: Rgb = Rgb::from_hex(0xa0d0ff);
pub const HAZE_OPACITY: f64 = 0.3;

const CLOUD_SCALE: f64 = 0.03;
const CLOUD_THRESHOLD: f64 = 0.6;
/// Clouds stop short of the limb so the rim stays clear.
const CLOUD_RIM: f64 = 0.98;

/// Per-pixel opacity of the white cloud layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloudLayer {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl CloudLayer {
    /// Sample cloud cover for every pixel of the disk.
    pub fn generate(noise: &NoiseField, mask: &DiskMask, width: u32, height: u32) -> Self {
        let mut alpha = vec![0u8; width as usize * height as usize];
        for y in 0..height {
            for x in 0..width {
                if mask.pixel_radius(x, y) >= CLOUD_RIM {
                    continue;
                }
                let value = (noise.sample(x as f64 * CLOUD_SCALE, y as f64 * CLOUD_SCALE) + 1.0) * 0.5;
                alpha[y as usize * width as usize + x as usize] = cloud_alpha(value);
            }
        }
        Self {
            width,
            height,
            alpha,
        }
    }

    /// Cloud opacity (0–255) at `(x, y)`.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.alpha[y as usize * self.width as usize + x as usize]
    }

    /// Number of pixels with any cloud.
    pub fn coverage(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }

    /// Composite the white cloud layer over `buffer`.
    pub fn composite_onto(&self, buffer: &mut PixelBuffer) {
        for y in 0..self.height.min(buffer.height()) {
            for x in 0..self.width.min(buffer.width()) {
                let alpha = self.alpha_at(x, y);
                if alpha > 0 {
                    buffer.blend_pixel(x, y, Rgb::WHITE.with_alpha(alpha as f64 / 255.0));
                }
            }
        }
    }
}

/// Cloud opacity for a normalized noise value in `[0, 1]`.
pub fn cloud_alpha(value: f64) -> u8 {
    if value > CLOUD_THRESHOLD {
        to_channel(((value - CLOUD_THRESHOLD) * 2.5 * 100.0).min(255.0))
    } else {
        0
    }
}

/// Tint the disk with haze, then lay clouds from `noise` over it.
pub fn apply_atmosphere(buffer: &mut PixelBuffer, mask: &DiskMask, noise: &NoiseField) -> CloudLayer {
    let (width, height) = buffer.dimensions();
    let haze = HAZE.with_alpha(HAZE_OPACITY);
    for y in 0..height {
        for x in 0..width {
            if mask.contains(x, y) {
                buffer.blend_pixel(x, y, haze);
            }
        }
    }

    let clouds = CloudLayer::generate(noise, mask, width, height);
    clouds.composite_onto(buffer);
    tracing::trace!(coverage = clouds.coverage(), "atmosphere pass complete");
    clouds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_alpha_curve() {
        assert_eq!(cloud_alpha(0.0), 0);
        assert_eq!(cloud_alpha(0.6), 0);
        assert_eq!(cloud_alpha(0.8), 50);
        assert_eq!(cloud_alpha(1.0), 100);
    }

    #[test]
    fn test_clouds_never_touch_rim_or_outside() {
        let mask = DiskMask::new(96, 96);
        let clouds = CloudLayer::generate(&NoiseField::new(12), &mask, 96, 96);
        for y in 0..96 {
            for x in 0..96 {
                if mask.pixel_radius(x, y) >= CLOUD_RIM {
                    assert_eq!(clouds.alpha_at(x, y), 0);
                }
            }
        }
    }

    #[test]
    fn test_clouds_are_patchy() {
        let mask = DiskMask::new(256, 256);
        let clouds = CloudLayer::generate(&NoiseField::new(3), &mask, 256, 256);
        let coverage = clouds.coverage();
        assert!(coverage > 0, "expected some cloud");
        assert!(coverage < 256 * 256 / 2, "clouds should not blanket the disk");
    }

    #[test]
    fn test_haze_tints_disk_only() {
        let mask = DiskMask::new(32, 32);
        let mut buffer = PixelBuffer::new(32, 32);
        for y in 0..32 {
            for x in 0..32 {
                buffer.set_pixel(x, y, [0, 0, 0, 255]);
            }
        }
        apply_atmosphere(&mut buffer, &mask, &NoiseField::new(0));
        assert_eq!(buffer.get_pixel(0, 0), [0, 0, 0, 255]);
        let [r, g, b, a] = buffer.get_pixel(16, 16);
        // 30% of #a0d0ff over black, plus any white cloud on top.
        assert!(r >= 47 && g >= 61 && b >= 75, "got ({r}, {g}, {b})");
        assert_eq!(a, 255);
    }

    #[test]
    fn test_cloud_composite_whitens() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.set_pixel(0, 0, [100, 100, 100, 255]);
        buffer.set_pixel(1, 0, [100, 100, 100, 255]);
        let layer = CloudLayer {
            width: 2,
            height: 1,
            alpha: vec![0, 100],
        };
        layer.composite_onto(&mut buffer);
        assert_eq!(buffer.get_pixel(0, 0), [100, 100, 100, 255]);
        assert!(buffer.get_pixel(1, 0)[0] > 150);
    }
}
