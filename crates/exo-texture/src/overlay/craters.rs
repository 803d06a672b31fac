//! Impact craters for rocky and icy surfaces.

use std::ops::Range;

use glam::DVec2;
use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::color::{Paint, Rgb};
use crate::mask::DiskMask;

/// Number of placement attempts per planet.
pub const CRATER_ATTEMPTS: Range<u32> = 10..30;
/// Crater radius in pixels.
pub const CRATER_RADIUS: Range<f64> = 5.0..20.0;

const SHADOW: Paint = Rgb::BLACK.with_alpha(0.5);
const RIM: Paint = Rgb::new(150, 150, 150).with_alpha(0.8);
const HIGHLIGHT: Paint = Rgb::new(200, 200, 200).with_alpha(0.3);
const RIM_WIDTH: f64 = 1.0;

/// A crater centered at `center` (pixel coordinates).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crater {
    pub center: DVec2,
    pub radius: f64,
}

impl Crater {
    /// Center and radius of the lit spot on the upper-left slope.
    pub fn highlight(&self) -> (DVec2, f64) {
        let third = self.radius / 3.0;
        (self.center - DVec2::splat(third), third)
    }

    /// Shadow disk, rim, then highlight.
    pub fn paint(&self, buffer: &mut PixelBuffer, mask: &DiskMask) {
        buffer.fill_circle(self.center, self.radius, SHADOW, mask);
        buffer.stroke_circle(self.center, self.radius, RIM_WIDTH, RIM, mask);
        let (center, radius) = self.highlight();
        buffer.fill_circle(center, radius, HIGHLIGHT, mask);
    }
}

/// Scatter craters over a `width × height` buffer.
///
/// Attempts whose center falls outside the planet disk are dropped, so the
/// result may hold fewer craters than were attempted.
pub fn plan_craters<R: Rng>(rng: &mut R, width: u32, height: u32) -> Vec<Crater> {
    let mask = DiskMask::new(width, height);
    let attempts = rng.random_range(CRATER_ATTEMPTS);
    let mut craters = Vec::with_capacity(attempts as usize);

    for _ in 0..attempts {
        let x = rng.random::<f64>() * width as f64;
        let y = rng.random::<f64>() * height as f64;
        let radius = rng.random_range(CRATER_RADIUS);

        if mask.radius_at(x, y) > 1.0 {
            continue;
        }
        craters.push(Crater {
            center: DVec2::new(x, y),
            radius,
        });
    }

    tracing::debug!(attempts, accepted = craters.len(), "planned craters");
    craters
}
