//! Cyclonic storm spots for gas giants.

use std::ops::{Range, RangeInclusive};

use glam::DVec2;
use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::mask::DiskMask;

pub const STORM_COUNT: RangeInclusive<u32> = 1..=3;
/// Storm radius in pixels.
pub const STORM_RADIUS: Range<f64> = 30.0..80.0;
/// Fraction of each axis, around the center, that storm centers are drawn from.
pub const STORM_SPREAD: f64 = 0.6;

const EYE: Rgb = Rgb::from_hex(0xffcc00);
const RING: Rgb = Rgb::from_hex(0xff6600);
const RING_WIDTH: f64 = 3.0;
const RING_SCALES: [f64; 2] = [0.8, 0.6];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Storm {
    pub center: DVec2,
    pub radius: f64,
}

impl Storm {
    /// Filled disk with two concentric rings.
    pub fn paint(&self, buffer: &mut PixelBuffer, mask: &DiskMask) {
        buffer.fill_circle(self.center, self.radius, EYE.into(), mask);
        for scale in RING_SCALES {
            buffer.stroke_circle(self.center, self.radius * scale, RING_WIDTH, RING.into(), mask);
        }
    }
}

/// Place storms around the middle of a `width × height` buffer.
///
/// Centers fall within the central [`STORM_SPREAD`] of each axis, which lies
/// wholly inside the planet disk.
pub fn plan_storms<R: Rng>(rng: &mut R, width: u32, height: u32) -> Vec<Storm> {
    let (w, h) = (width as f64, height as f64);
    let count = rng.random_range(STORM_COUNT);

    let storms: Vec<Storm> = (0..count)
        .map(|_| {
            let x = w / 2.0 + (rng.random::<f64>() - 0.5) * w * STORM_SPREAD;
            let y = h / 2.0 + (rng.random::<f64>() - 0.5) * h * STORM_SPREAD;
            let radius = rng.random_range(STORM_RADIUS);
            Storm {
                center: DVec2::new(x, y),
                radius,
            }
        })
        .collect();

    tracing::debug!(count = storms.len(), "planned storms");
    storms
}
