//! The planet disk: the ellipse inscribed in the buffer that every pass paints into.

/// Normalized radial distance for a `width × height` buffer.
///
/// A point's radius is `2·√((x/W − 0.5)² + (y/H − 0.5)²)`, so the disk edge
/// sits at 1 and the buffer center at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiskMask {
    width: u32,
    height: u32,
}

impl DiskMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Normalized offset of `(x, y)` from the center, each axis in `[-0.5, 0.5)` inside the buffer.
    #[inline]
    pub fn offset(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.width as f64 - 0.5, y / self.height as f64 - 0.5)
    }

    /// Radial distance of an arbitrary point, in buffer pixel coordinates.
    #[inline]
    pub fn radius_at(&self, x: f64, y: f64) -> f64 {
        let (nx, ny) = self.offset(x, y);
        2.0 * (nx * nx + ny * ny).sqrt()
    }

    /// Radial distance of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel_radius(&self, x: u32, y: u32) -> f64 {
        self.radius_at(x as f64, y as f64)
    }

    /// Whether the pixel at `(x, y)` belongs to the planet surface.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.pixel_radius(x, y) <= 1.0
    }
}
