//! Background pass: a radial gradient from a lightened center to a darkened rim.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::gradient::{ColorStop, RadialGradient};
use crate::mask::DiskMask;

/// Percent towards white at the center.
pub const CENTER_LIGHTEN_PERCENT: f64 = 30.0;
/// Percent towards black at the rim.
pub const RIM_DARKEN_PERCENT: f64 = 20.0;
/// Gradient offset at which the unmodified base color sits.
pub const MID_STOP: f64 = 0.7;

/// Gradient used for the planet background.
pub fn base_gradient(base: Rgb) -> RadialGradient {
    RadialGradient::new(vec![
        ColorStop::new(0.0, base.lighten(CENTER_LIGHTEN_PERCENT)),
        ColorStop::new(MID_STOP, base),
        ColorStop::new(1.0, base.darken(RIM_DARKEN_PERCENT)),
    ])
}

/// Paint the whole buffer with the background gradient. Pixels beyond the
/// disk take the rim color.
pub fn paint_base(buffer: &mut PixelBuffer, mask: &DiskMask, base: Rgb) {
    let gradient = base_gradient(base);
    let (width, height) = buffer.dimensions();

    for y in 0..height {
        for x in 0..width {
            let paint = gradient.sample(mask.pixel_radius(x, y));
            let [r, g, b] = paint.color.channels();
            buffer.set_pixel(x, y, [r, g, b, 255]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_lightened() {
        let base = Rgb::new(100, 50, 200);
        let mut buffer = PixelBuffer::new(64, 64);
        paint_base(&mut buffer, &DiskMask::new(64, 64), base);
        let [r, g, b, a] = buffer.get_pixel(32, 32);
        assert_eq!(Rgb::new(r, g, b), base.lighten(30.0));
        assert_eq!(a, 255);
    }

    #[test]
    fn test_corners_are_darkened_and_opaque() {
        let base = Rgb::new(100, 50, 200);
        let mut buffer = PixelBuffer::new(64, 64);
        paint_base(&mut buffer, &DiskMask::new(64, 64), base);
        let [r, g, b, a] = buffer.get_pixel(0, 0);
        assert_eq!(Rgb::new(r, g, b), base.darken(20.0));
        assert_eq!(a, 255);
    }

    #[test]
    fn test_mid_stop_is_base() {
        let base = Rgb::new(139, 69, 19);
        let gradient = base_gradient(base);
        assert_eq!(gradient.sample(MID_STOP).color, base);
    }

    #[test]
    fn test_brightness_falls_off_outward() {
        let mut buffer = PixelBuffer::new(64, 64);
        paint_base(&mut buffer, &DiskMask::new(64, 64), Rgb::new(120, 120, 120));
        let mut previous = u8::MAX;
        for x in 32..64 {
            let r = buffer.get_pixel(x, 32)[0];
            assert!(r <= previous, "brightness rose at x = {x}");
            previous = r;
        }
    }
}
