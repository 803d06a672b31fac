//! Owned RGBA8 pixel buffer with canvas-style compositing primitives.

use glam::DVec2;

use crate::color::{Paint, to_channel};
use crate::mask::DiskMask;

/// A texture image stored as row-major RGBA pixels, origin top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes, `width * height * 4` long.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer and hand its bytes to the caller.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Overwrite a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Composite `paint` over the pixel with source-over blending.
    pub fn blend_pixel(&mut self, x: u32, y: u32, paint: Paint) {
        let src_a = paint.alpha.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let [dr, dg, db, da] = self.get_pixel(x, y);
        let dst_a = da as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let blend = |src: u8, dst: u8| {
            (src as f64 * src_a + dst as f64 * dst_a * (1.0 - src_a)) / out_a
        };

        let src = paint.color;
        self.set_pixel(
            x,
            y,
            [
                to_channel(blend(src.r, dr)),
                to_channel(blend(src.g, dg)),
                to_channel(blend(src.b, db)),
                to_channel(out_a * 255.0),
            ],
        );
    }

    /// Fill a circle, limited to pixels the mask accepts.
    ///
    /// A pixel is covered when its center lies within `radius` of `center`.
    pub fn fill_circle(&mut self, center: DVec2, radius: f64, paint: Paint, mask: &DiskMask) {
        self.for_each_covered(center, radius, mask, |distance| distance <= radius, paint);
    }

    /// Stroke a circle outline of the given line width, limited to pixels the mask accepts.
    pub fn stroke_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        line_width: f64,
        paint: Paint,
        mask: &DiskMask,
    ) {
        let half = line_width * 0.5;
        self.for_each_covered(
            center,
            radius + half,
            mask,
            |distance| (distance - radius).abs() <= half,
            paint,
        );
    }

    fn for_each_covered(
        &mut self,
        center: DVec2,
        reach: f64,
        mask: &DiskMask,
        covers: impl Fn(f64) -> bool,
        paint: Paint,
    ) {
        if reach <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }
        let min_x = (center.x - reach).floor().max(0.0) as u32;
        let min_y = (center.y - reach).floor().max(0.0) as u32;
        let max_x = (center.x + reach).ceil().min(self.width as f64 - 1.0);
        let max_y = (center.y + reach).ceil().min(self.height as f64 - 1.0);
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }

        for y in min_y..=max_y as u32 {
            for x in min_x..=max_x as u32 {
                let pixel_center = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                if covers(pixel_center.distance(center)) && mask.contains(x, y) {
                    self.blend_pixel(x, y, paint);
                }
            }
        }
    }

    /// Count the number of unique colors (ignoring alpha) in the buffer.
    pub fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for chunk in self.pixels.chunks_exact(4) {
            colors.insert((chunk[0], chunk[1], chunk[2]));
        }
        colors.len()
    }
}
