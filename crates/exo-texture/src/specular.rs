//! Fixed "sun glint" highlight applied after every other pass.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::gradient::{ColorStop, RadialGradient};
use crate::mask::DiskMask;

/// Highlight center as fractions of width and height.
pub const GLINT_CENTER: (f64, f64) = (0.7, 0.3);
/// Highlight radius as a fraction of the buffer size.
pub const GLINT_RADIUS: f64 = 0.5;
/// Global opacity applied on top of the gradient's own alpha.
pub const GLINT_OPACITY: f64 = 0.3;

/// White at 80% opacity fading to fully transparent at the rim.
pub fn glint_gradient() -> RadialGradient {
    RadialGradient::new(vec![
        ColorStop::new(0.0, Rgb::WHITE.with_alpha(0.8)),
        ColorStop::new(1.0, Rgb::WHITE.with_alpha(0.0)),
    ])
}

/// Composite the highlight over the planet disk.
pub fn apply_specular(buffer: &mut PixelBuffer, mask: &DiskMask) {
    let gradient = glint_gradient();
    let (width, height) = buffer.dimensions();
    let (cx, cy) = GLINT_CENTER;

    for y in 0..height {
        for x in 0..width {
            if !mask.contains(x, y) {
                continue;
            }
            let dx = x as f64 / width as f64 - cx;
            let dy = y as f64 / height as f64 - cy;
            let t = (dx * dx + dy * dy).sqrt() / GLINT_RADIUS;
            if t > 1.0 {
                continue;
            }
            buffer.blend_pixel(x, y, gradient.sample(t).fade(GLINT_OPACITY));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(size: u32, level: u8) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(size, size);
        for y in 0..size {
            for x in 0..size {
                buffer.set_pixel(x, y, [level, level, level, 255]);
            }
        }
        buffer
    }

    #[test]
    fn test_glint_brightest_at_center() {
        let mut buffer = gray(100, 100);
        apply_specular(&mut buffer, &DiskMask::new(100, 100));
        let at_center = buffer.get_pixel(70, 30)[0];
        let further = buffer.get_pixel(50, 50)[0];
        let opposite = buffer.get_pixel(30, 70)[0];
        // 0.3 * 0.8 = 24% white over gray 100.
        assert_eq!(at_center, 137);
        assert!(further > 100 && further < at_center);
        assert_eq!(opposite, 100);
    }

    #[test]
    fn test_glint_skips_outside_disk() {
        let mut buffer = gray(100, 100);
        apply_specular(&mut buffer, &DiskMask::new(100, 100));
        assert_eq!(buffer.get_pixel(99, 0), [100, 100, 100, 255]);
    }
}
