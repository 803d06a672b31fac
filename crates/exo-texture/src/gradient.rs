//! Radial color gradients with canvas-style color stops.

use crate::color::{Paint, Rgb, to_channel};

/// A color stop at `offset` along the gradient radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    pub paint: Paint,
}

impl ColorStop {
    pub fn new(offset: f64, paint: impl Into<Paint>) -> Self {
        Self {
            offset,
            paint: paint.into(),
        }
    }
}

/// Piecewise-linear gradient over `t ∈ [0, 1]`.
///
/// Before the first stop the first stop's paint holds, after the last stop the
/// last stop's paint holds.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Build a gradient; stops are sorted by offset.
    pub fn new(mut stops: Vec<ColorStop>) -> Self {
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { stops }
    }

    /// Paint at normalized distance `t` from the gradient center.
    pub fn sample(&self, t: f64) -> Paint {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgb::BLACK.with_alpha(0.0);
        };
        if t <= first.offset {
            return first.paint;
        }
        if t >= last.offset {
            return last.paint;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let f = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
                return lerp_paint(a.paint, b.paint, f);
            }
        }
        last.paint
    }
}

fn lerp_paint(a: Paint, b: Paint, t: f64) -> Paint {
    let lerp = |x: u8, y: u8| to_channel(x as f64 + (y as f64 - x as f64) * t);
    Paint {
        color: Rgb::new(
            lerp(a.color.r, b.color.r),
            lerp(a.color.g, b.color.g),
            lerp(a.color.b, b.color.b),
        ),
        alpha: a.alpha + (b.alpha - a.alpha) * t,
    }
}
